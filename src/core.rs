pub mod command;
pub mod controller;
pub mod domain;
pub mod errors;
pub mod repository;
