//! Chat companion domain.
//!
//! - [`transcript::Transcript`]: role-tagged history sent to the completion API
//! - [`params::GenerationParams`]: sampling settings for each request

pub mod params;
pub mod transcript;
