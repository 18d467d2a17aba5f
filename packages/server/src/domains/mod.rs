//! Domain logic, one module per aggregate.

pub mod pitches;
