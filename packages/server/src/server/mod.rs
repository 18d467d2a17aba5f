//! The web surface: router, handlers, and rendered pages.

pub mod app;
pub mod routes;
pub mod views;

pub use app::{build_app, build_router, AppState};
