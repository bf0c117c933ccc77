use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::albums::dto::AlbumDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetAlbumCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetAlbumCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAlbumCommandRequest {
    pub album_id: String,
}

impl GetAlbumCommandRequest {
    pub fn new(album_id: String) -> Self {
        Self {
            album_id,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct GetAlbumCommandResponse {
    pub album: AlbumDto,
}

impl GetAlbumCommandResponse {
    pub fn new(album: AlbumDto) -> Self {
        Self {
            album,
        }
    }
}

#[async_trait]
impl Command<GetAlbumCommandRequest, GetAlbumCommandResponse> for GetAlbumCommand {
    async fn execute(&self, req: GetAlbumCommandRequest) -> Result<GetAlbumCommandResponse, CommandError> {
        self.catalog_service.find_album_by_id(req.album_id.as_str())
            .await.map_err(CommandError::from).map(GetAlbumCommandResponse::new)
    }
}
