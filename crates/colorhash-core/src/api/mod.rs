//! Public API for the colorhash-core crate.
//!
//! This module provides the high-level API: the [`HashArt`] builder and the
//! [`ColorhashError`] unified error type.

mod builder;
mod error;

pub use builder::{HashArt, PaletteChoice};
pub use error::ColorhashError;
