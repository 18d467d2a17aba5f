//! The pitch aggregate: record types, persistence, and the generation
//! pipeline.

pub mod error;
pub mod pipeline;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use pipeline::{PipelineError, PipelineRunner, PitchGenerator, PitchPipeline};
pub use store::PitchStore;
pub use types::{ListFilter, NewPitch, Pitch, MAX_PITCH_LEN, MAX_TERM_LEN};
