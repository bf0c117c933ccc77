use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::albums::dto::AlbumDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListAlbumsCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListAlbumsCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListAlbumsCommandRequest {}

impl ListAlbumsCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListAlbumsCommandResponse {
    pub albums: Vec<AlbumDto>,
}

impl ListAlbumsCommandResponse {
    pub fn new(albums: Vec<AlbumDto>) -> Self {
        Self {
            albums,
        }
    }
}

#[async_trait]
impl Command<ListAlbumsCommandRequest, ListAlbumsCommandResponse> for ListAlbumsCommand {
    async fn execute(&self, _req: ListAlbumsCommandRequest) -> Result<ListAlbumsCommandResponse, CommandError> {
        self.catalog_service.find_albums()
            .await.map_err(CommandError::from).map(ListAlbumsCommandResponse::new)
    }
}
