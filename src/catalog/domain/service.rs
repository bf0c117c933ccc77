use std::sync::Arc;
use async_trait::async_trait;
use crate::albums::domain::model::AlbumEntity;
use crate::albums::dto::AlbumDto;
use crate::albums::repository::AlbumRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Identifiable;
use crate::core::errors::{CatalogError, CatalogResult};

pub(crate) struct CatalogServiceImpl {
    album_repository: Arc<dyn AlbumRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(album_repository: Arc<dyn AlbumRepository>) -> Self {
        Self {
            album_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_album(&self, album: &AlbumDto) -> CatalogResult<AlbumDto> {
        let size = self.album_repository.create(&AlbumEntity::from(album)).await?;
        tracing::info!(album_id = %album.id(), catalog_size = size, "album added");
        Ok(album.clone())
    }

    async fn find_album_by_id(&self, id: &str) -> CatalogResult<AlbumDto> {
        self.album_repository.get(id).await
            .map(|a| AlbumDto::from(&a))
            .map_err(|err| {
                if let CatalogError::NotFound { .. } = err {
                    tracing::debug!(album_id = id, "album not found");
                }
                err
            })
    }

    async fn find_albums(&self) -> CatalogResult<Vec<AlbumDto>> {
        let res = self.album_repository.find_all().await?;
        Ok(res.iter().map(AlbumDto::from).collect())
    }
}

impl From<&AlbumEntity> for AlbumDto {
    fn from(other: &AlbumEntity) -> Self {
        Self {
            id: other.id.to_string(),
            title: other.title.to_string(),
            artist: other.artist.to_string(),
            price: other.price,
        }
    }
}

impl From<&AlbumDto> for AlbumEntity {
    fn from(other: &AlbumDto) -> Self {
        Self {
            id: other.id.to_string(),
            title: other.title.to_string(),
            artist: other.artist.to_string(),
            price: other.price,
        }
    }
}
