use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::debug;

use super::{render, session, sse, AppError};
use crate::{
    framework::AppData,
    games::wordle::{self, Difficulty},
};

const SCRIPT: &str = include_str!("../../static/wordle.js");
const STYLE: &str = include_str!("../../static/style.css");
const SPINNER: &str = include_str!("../../static/gooey-balls.svg");

pub async fn index() -> Html<&'static str> {
    Html(render::INDEX)
}

pub async fn script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], SCRIPT)
}

pub async fn style() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], STYLE)
}

pub async fn spinner() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], SPINNER)
}

/// Starts a game, replacing whatever the session was playing.
pub async fn difficulty(
    State(data): State<AppData>,
    headers: HeaderMap,
    Path(label): Path<String>,
) -> Result<Response, AppError> {
    if let Some(previous) = session::from_headers(&headers) {
        data.games().reset(previous).await?;
    }

    let difficulty = Difficulty::from_label(&label).unwrap_or_else(|| {
        let difficulty = Difficulty::default();
        debug!(%label, %difficulty, "unknown difficulty, using default");
        difficulty
    });

    let (id, record) = data.games().start(difficulty).await?;

    Ok((
        [(header::SET_COOKIE, session::set_cookie(id))],
        sse::merge_fragments(&render::board(&record), true),
    )
        .into_response())
}

pub async fn attempt(
    State(data): State<AppData>,
    headers: HeaderMap,
    Path(guess): Path<String>,
) -> Result<Response, AppError> {
    let Some(id) = session::from_headers(&headers) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let record = data.games().submit(id, &guess).await?;

    Ok(sse::merge_fragments(&render::board(&record), false).into_response())
}

/// The current board, so a reload picks up where the player left off.
pub async fn current(
    State(data): State<AppData>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Some(id) = session::from_headers(&headers) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    match data.games().get(id).await {
        Ok(record) => Ok(sse::merge_fragments(&render::board(&record), false).into_response()),
        Err(wordle::Error::NotFound(_)) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(err) => Err(err.into()),
    }
}

pub async fn new_game(
    State(data): State<AppData>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(id) = session::from_headers(&headers) {
        data.games().reset(id).await?;
    }

    Ok((
        [(header::SET_COOKIE, session::clear_cookie())],
        Redirect::to("/"),
    )
        .into_response())
}
