use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// AlbumDto is a data transfer object for Catalog service, fields missing
// from a payload bind to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumDto {
    #[serde(default, deserialize_with = "crate::utils::nullable::deserializer::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::utils::nullable::deserializer::deserialize")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::utils::nullable::deserializer::deserialize")]
    pub artist: String,
    #[serde(default, deserialize_with = "crate::utils::nullable::deserializer::deserialize")]
    pub price: f64,
}

impl AlbumDto {
    pub fn new(id: &str, title: &str, artist: &str, price: f64) -> AlbumDto {
        AlbumDto {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            price,
        }
    }
}

impl Identifiable for AlbumDto {
    fn id(&self) -> String {
        self.id.to_string()
    }
}
