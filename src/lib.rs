//! Candidate sourcing and evaluation engine for recruiting automation.
//!
//! The heart of the crate is [`workflows::screening`]: a deterministic,
//! policy-table-driven pipeline that turns a batch of enriched candidate
//! records into density metrics, canonical evidence categories, determinant
//! tiers, and a final fit score with a verdict. Scraping adapters, CSV
//! serialization, and notification transports live behind the collaborator
//! traits in [`workflows::screening::pipeline`].

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
