use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use crate::albums::domain::model::AlbumEntity;
use crate::albums::repository::AlbumRepository;
use crate::core::domain::Identifiable;
use crate::core::errors::{CatalogError, CatalogResult};
use crate::core::repository::Repository;

pub const ALBUM_NOT_FOUND: &str = "Album not found";

// MemoryAlbumRepository keeps albums in insertion order behind a single
// reader-writer lock. Lookups scan from the front so the earliest record
// wins when ids repeat.
#[derive(Debug, Default)]
pub struct MemoryAlbumRepository {
    albums: RwLock<Vec<AlbumEntity>>,
}

impl MemoryAlbumRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_albums(albums: Vec<AlbumEntity>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, Vec<AlbumEntity>>> {
        self.albums.read().map_err(|err| CatalogError::runtime(
            format!("albums lock poisoned {}", err).as_str(), None))
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, Vec<AlbumEntity>>> {
        self.albums.write().map_err(|err| CatalogError::runtime(
            format!("albums lock poisoned {}", err).as_str(), None))
    }
}

#[async_trait]
impl Repository<AlbumEntity> for MemoryAlbumRepository {
    async fn create(&self, entity: &AlbumEntity) -> CatalogResult<usize> {
        let mut albums = self.write()?;
        albums.push(entity.clone());
        Ok(albums.len())
    }

    async fn get(&self, id: &str) -> CatalogResult<AlbumEntity> {
        self.read()?
            .iter()
            .find(|album| album.id() == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(ALBUM_NOT_FOUND))
    }

    async fn find_all(&self) -> CatalogResult<Vec<AlbumEntity>> {
        Ok(self.read()?.clone())
    }
}

#[async_trait]
impl AlbumRepository for MemoryAlbumRepository {
    async fn count(&self) -> CatalogResult<usize> {
        Ok(self.read()?.len())
    }
}
