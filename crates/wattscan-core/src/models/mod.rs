//! Data models: the structured invoice record and the analysis-service contract.

pub mod analysis;
pub mod invoice;
