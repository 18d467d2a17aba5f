//! Application setup and router construction.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use openai_client::OpenAIClient;
use wiki_terms::{HttpFetcher, TermExtractor};

use crate::config::Config;
use crate::domains::pitches::{PipelineRunner, PitchPipeline, PitchStore, StoreError};
use crate::kernel::SummaryClient;
use crate::server::routes::{
    action_fail, apply_edit, display, edit_form, health_handler, home, list_active, list_trash,
    purge, show_all, submit, toggle_delete,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PitchStore>,
    pub pipeline: Arc<dyn PipelineRunner>,
}

/// Build the full application from configuration: store, pipeline, router.
pub async fn build_app(config: &Config) -> Result<Router, StoreError> {
    let store = Arc::new(PitchStore::new(&config.database_url).await?);

    let pipeline = PitchPipeline::new(
        TermExtractor::new(HttpFetcher::new()),
        SummaryClient::new(
            config.summary_api_url.clone(),
            config.summary_api_key.clone(),
        ),
        OpenAIClient::new(config.openai_api_key.clone()),
        store.clone(),
    );

    Ok(build_router(AppState {
        store,
        pipeline: Arc::new(pipeline),
    }))
}

/// Build the router over prepared state. Split out so tests can inject
/// their own store and pipeline.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/action", get(list_active).post(submit))
        .route("/action_fail", get(action_fail))
        .route("/display/:id", get(display))
        .route("/show_all", get(show_all))
        .route("/edit/:id", get(edit_form).post(apply_edit))
        .route("/delete/:id", get(toggle_delete))
        .route("/deleted/:id", get(purge))
        .route("/deleted", get(list_trash))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
