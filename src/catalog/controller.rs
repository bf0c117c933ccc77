use axum::{
    body::{Bytes, HttpBody},
    BoxError,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use crate::catalog::command::add_album_cmd::{AddAlbumCommand, AddAlbumCommandRequest, AddAlbumCommandResponse};
use crate::catalog::command::get_album_cmd::{GetAlbumCommand, GetAlbumCommandRequest, GetAlbumCommandResponse};
use crate::catalog::command::list_albums_cmd::{ListAlbumsCommand, ListAlbumsCommandRequest, ListAlbumsCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, IndentedJson, ServerError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(state.albums.clone())
}

// Router is generic over the request body so the same routes serve both the
// local hyper server and the Lambda adapter.
pub fn router<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    Router::new()
        .route("/albums", get(find_albums).post(add_album))
        .route("/album/:id", get(find_album_by_id))
        .with_state(state)
}

pub(crate) async fn find_albums(
    State(state): State<AppState>) -> Result<IndentedJson<ListAlbumsCommandResponse>, ServerError> {
    tracing::info!("GET /albums");
    let svc = build_service(&state);
    let res = ListAlbumsCommand::new(svc).execute(ListAlbumsCommandRequest::new()).await?;
    Ok(IndentedJson(res))
}

pub(crate) async fn find_album_by_id(
    State(state): State<AppState>,
    Path(album_id): Path<String>) -> Result<IndentedJson<GetAlbumCommandResponse>, ServerError> {
    tracing::info!(album_id = album_id.as_str(), "GET /album/:id");
    let req = GetAlbumCommandRequest { album_id };
    let svc = build_service(&state);
    let res = GetAlbumCommand::new(svc).execute(req).await?;
    Ok(IndentedJson(res))
}

pub(crate) async fn add_album(
    State(state): State<AppState>,
    body: Bytes) -> Result<(StatusCode, IndentedJson<AddAlbumCommandResponse>), ServerError> {
    tracing::info!("POST /albums");
    let req = AddAlbumCommandRequest::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "rejected album payload");
        CommandError::from(err)
    })?;
    let svc = build_service(&state);
    let res = AddAlbumCommand::new(svc).execute(req).await?;
    Ok((StatusCode::CREATED, IndentedJson(res)))
}
