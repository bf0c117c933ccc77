use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// AlbumEntity is the record kept by the album repository. Ids are supplied by
// callers and are not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumEntity {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl AlbumEntity {
    pub fn new(id: &str, title: &str, artist: &str, price: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            price,
        }
    }
}

impl Identifiable for AlbumEntity {
    fn id(&self) -> String {
        self.id.to_string()
    }
}
