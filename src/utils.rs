pub mod logs;
pub mod nullable;
