//! External collaborators shared across domains.

pub mod summary;

pub use summary::SummaryClient;
