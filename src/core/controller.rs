use std::sync::Arc;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use crate::albums::repository::AlbumRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub albums: Arc<dyn AlbumRepository>,
}

impl AppState {
    pub fn new(config: Configuration, albums: Arc<dyn AlbumRepository>) -> AppState {
        AppState {
            config,
            albums,
        }
    }
}

// IndentedJson writes the payload as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct IndentedJson<T>(pub T);

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static("application/json; charset=utf-8"))],
                body,
            ).into_response(),
            Err(err) => ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err)).into_response(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ServerError {
    pub status: StatusCode,
    pub message: String,
}

impl ServerError {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = IndentedJson(json!({ "message": self.message })).into_response();
        (self.status, body).into_response()
    }
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            CommandError::Runtime { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CommandError::Serialization { .. } => {
                StatusCode::BAD_REQUEST
            }
            CommandError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        ServerError::new(status, err.message().to_string())
    }
}
