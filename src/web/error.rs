use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::games::wordle;

/// Maps game errors onto the status codes the page expects.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Game(#[from] wordle::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Game(wordle::Error::NotFound(id)) => {
                debug!(%id, "no game for session");
                StatusCode::NOT_FOUND.into_response()
            }
            Self::Game(err) if err.is_rejection() => StatusCode::NO_CONTENT.into_response(),
            Self::Game(err) => {
                error!("{err}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
