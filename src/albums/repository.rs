pub mod memory_album_repository;

use async_trait::async_trait;
use crate::albums::domain::model::AlbumEntity;
use crate::core::errors::CatalogResult;
use crate::core::repository::Repository;


#[async_trait]
pub trait AlbumRepository: Repository<AlbumEntity> {
    async fn count(&self) -> CatalogResult<usize>;
}
