//! Colorhash
//!
//! Command-line front end for `colorhash-core`: digest acquisition,
//! configuration and rendering. This library exposes modules for
//! integration testing.

pub mod error;
pub mod models;
pub mod services;
