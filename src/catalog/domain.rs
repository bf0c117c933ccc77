pub mod service;

use async_trait::async_trait;
use crate::albums::dto::AlbumDto;
use crate::core::errors::CatalogResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_album(&self, album: &AlbumDto) -> CatalogResult<AlbumDto>;
    async fn find_album_by_id(&self, id: &str) -> CatalogResult<AlbumDto>;
    async fn find_albums(&self) -> CatalogResult<Vec<AlbumDto>>;
}
