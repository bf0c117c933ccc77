use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::albums::dto::AlbumDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::errors::{CatalogError, CatalogResult};

pub struct AddAlbumCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddAlbumCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct AddAlbumCommandRequest {
    #[serde(default, deserialize_with = "crate::utils::nullable::deserializer::deserialize")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::utils::nullable::deserializer::deserialize")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::utils::nullable::deserializer::deserialize")]
    pub artist: String,
    #[serde(default, deserialize_with = "crate::utils::nullable::deserializer::deserialize")]
    pub price: f64,
}

impl AddAlbumCommandRequest {
    pub fn new(id: &str, title: &str, artist: &str, price: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            price,
        }
    }

    // Binds a raw body, only a JSON object is accepted as an album. Missing
    // fields take their zero value and unknown fields are ignored.
    pub fn from_slice(body: &[u8]) -> CatalogResult<Self> {
        let value: Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(CatalogError::serialization(
                format!("album must be a JSON object, got {}", json_kind(&value)).as_str()));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn build_album(&self) -> AlbumDto {
        AlbumDto::new(self.id.as_str(), self.title.as_str(), self.artist.as_str(), self.price)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct AddAlbumCommandResponse {
    pub album: AlbumDto,
}

impl AddAlbumCommandResponse {
    pub fn new(album: AlbumDto) -> Self {
        Self {
            album,
        }
    }
}

#[async_trait]
impl Command<AddAlbumCommandRequest, AddAlbumCommandResponse> for AddAlbumCommand {
    async fn execute(&self, req: AddAlbumCommandRequest) -> Result<AddAlbumCommandResponse, CommandError> {
        let album = req.build_album();
        self.catalog_service.add_album(&album).await.map_err(CommandError::from).map(AddAlbumCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::albums::factory::create_album_repository;
    use crate::catalog::command::add_album_cmd::{AddAlbumCommand, AddAlbumCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::errors::CatalogError;

    lazy_static! {
        static ref SUT_CMD : AsyncOnce<AddAlbumCommand> = AsyncOnce::new(async {
                let svc = factory::create_catalog_service(create_album_repository(true));
                AddAlbumCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_add_album() {
        let cmd = SUT_CMD.get().await.clone();

        let res = cmd.execute(AddAlbumCommandRequest::new("4", "X", "Y", 9.99))
            .await.expect("should add album");
        assert_eq!("4", res.album.id.as_str());
        assert_eq!("X", res.album.title.as_str());
        assert_eq!("Y", res.album.artist.as_str());
        assert_eq!(9.99, res.album.price);
    }

    #[tokio::test]
    async fn test_should_bind_partial_body() {
        let req = AddAlbumCommandRequest::from_slice(br#"{"title": "Kind of Blue", "label": "Columbia"}"#)
            .expect("should bind partial album");
        assert_eq!(AddAlbumCommandRequest::new("", "Kind of Blue", "", 0.0), req);
    }

    #[tokio::test]
    async fn test_should_bind_null_fields() {
        let req = AddAlbumCommandRequest::from_slice(br#"{"id": "4", "title": "X", "artist": null, "price": null}"#)
            .expect("should bind null fields");
        assert_eq!(AddAlbumCommandRequest::new("4", "X", "", 0.0), req);
    }

    #[tokio::test]
    async fn test_should_not_bind_malformed_body() {
        let bodies: [&[u8]; 6] = [b"", b"{\"id\":", b"not json", b"[\"1\", \"X\"]", b"null", b"{\"price\": \"free\"}"];
        for body in bodies {
            let res = AddAlbumCommandRequest::from_slice(body);
            assert!(matches!(res, Err(CatalogError::Serialization { .. })), "{:?}", String::from_utf8_lossy(body));
        }
    }
}
