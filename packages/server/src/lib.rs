//! PitchForge server: scrape three related terms for a phrase, generate a
//! marketing pitch from them, and manage the stored results.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::Config;
