//! API Module
//!
//! Thin network boundary: the `CharacterApi` seam and its reqwest-backed
//! implementation.

mod client;

pub use client::{ApiClient, CharacterApi};
