//! HTTP route handlers.

pub mod health;
pub mod pitches;

pub use health::health_handler;
pub use pitches::{
    action_fail, apply_edit, display, edit_form, home, list_active, list_trash, purge, show_all,
    submit, toggle_delete,
};
