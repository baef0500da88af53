//! Core library for the `sunbalance` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenUV data fetcher
//! - The safe-exposure calculator and shared domain models
//!
//! It is used by `sunbalance-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod exposure;
pub mod model;
pub mod provider;

pub use config::Config;
pub use exposure::safe_exposure;
pub use model::{Coordinate, ExposureEstimate, SkinType, UvReading};
pub use provider::{FetchError, OpenUvProvider};
