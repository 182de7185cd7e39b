//! Completion providers.

#[cfg(feature = "azure-openai")]
pub mod azure_openai;
