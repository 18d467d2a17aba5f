//! Thin HTTP handlers for the pitch lifecycle.
//!
//! Route paths are part of the app's public surface: `/action` is both
//! the listing page and the submission target, `/delete/{id}` toggles the
//! trash flag, `/deleted/{id}` purges for good.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tracing::error;

use wiki_terms::Language;

use crate::domains::pitches::{ListFilter, PipelineError, StoreError};
use crate::server::app::AppState;
use crate::server::views;

/// Map a store fault to a response: missing records get the standard 404
/// page, everything else a terse inline failure.
fn store_error_response(err: StoreError, message: &str) -> Response {
    match err {
        StoreError::NotFound { .. } => {
            (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response()
        }
        other => {
            error!(error = %other, "store operation failed");
            (StatusCode::BAD_REQUEST, Html(views::error_page(message))).into_response()
        }
    }
}

pub async fn home() -> Html<String> {
    Html(views::home_page())
}

pub async fn action_fail() -> Html<String> {
    Html(views::action_fail_page())
}

#[derive(Deserialize)]
pub struct SubmitForm {
    pub prompt: String,
    pub language: String,
}

pub async fn submit(State(state): State<AppState>, Form(form): Form<SubmitForm>) -> Response {
    if form.prompt.trim().is_empty() {
        return Redirect::to("/action_fail").into_response();
    }
    let Some(language) = Language::from_form_value(&form.language) else {
        return (
            StatusCode::BAD_REQUEST,
            Html(views::error_page("Unknown language.")),
        )
            .into_response();
    };

    match state.pipeline.run(&form.prompt, language).await {
        Ok(_) => Redirect::to("/action").into_response(),
        Err(PipelineError::Store(err)) => {
            store_error_response(err, "Oh no, that didn't work.")
        }
        Err(err) => {
            error!(error = %err, "pitch generation failed");
            (
                StatusCode::BAD_GATEWAY,
                Html(views::error_page(&err.to_string())),
            )
                .into_response()
        }
    }
}

pub async fn list_active(State(state): State<AppState>) -> Response {
    match state.store.list(ListFilter::Active).await {
        Ok(pitches) => Html(views::listing_page("Pitches", &pitches, false)).into_response(),
        Err(err) => store_error_response(err, "Could not load pitches."),
    }
}

pub async fn show_all(State(state): State<AppState>) -> Response {
    match state.store.list(ListFilter::All).await {
        Ok(pitches) => Html(views::listing_page("All pitches", &pitches, false)).into_response(),
        Err(err) => store_error_response(err, "Could not load pitches."),
    }
}

pub async fn list_trash(State(state): State<AppState>) -> Response {
    match state.store.list(ListFilter::Trashed).await {
        Ok(pitches) => Html(views::listing_page("Trash", &pitches, true)).into_response(),
        Err(err) => store_error_response(err, "Could not load the trash."),
    }
}

pub async fn display(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.store.get(id).await {
        Ok(pitch) => Html(views::display_page(&pitch)).into_response(),
        Err(err) => store_error_response(err, "Could not load that pitch."),
    }
}

pub async fn edit_form(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.store.get(id).await {
        Ok(pitch) => Html(views::edit_page(&pitch)).into_response(),
        Err(err) => store_error_response(err, "Could not load that pitch."),
    }
}

#[derive(Deserialize)]
pub struct EditForm {
    pub pitch: String,
}

pub async fn apply_edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<EditForm>,
) -> Response {
    match state.store.update_text(id, &form.pitch).await {
        Ok(()) => Redirect::to("/action").into_response(),
        Err(err) => store_error_response(err, "Error: Edit failed"),
    }
}

pub async fn toggle_delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.store.toggle_deleted(id).await {
        Ok(()) => Redirect::to("/deleted").into_response(),
        Err(err) => store_error_response(err, "Error: Delete failed"),
    }
}

pub async fn purge(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.store.purge(id).await {
        Ok(()) => Redirect::to("/action").into_response(),
        Err(err) => store_error_response(err, "Error: Delete failed"),
    }
}
