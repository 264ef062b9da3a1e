//! Last-digit tick analytics for Deriv synthetic indices.
//!
//! The analysis layer is pure and synchronous; the feed adapter and the
//! terminal runner in `main.rs` wire it to a live tick stream.

pub mod analysis;
pub mod config;
pub mod deriv;
pub mod error;
pub mod event;
pub mod input;
pub mod market_catalog;
pub mod model;
