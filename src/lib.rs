//! Mochi Paint Library
//!
//! A character-grid drawing tool for the terminal. This crate provides:
//!
//! - `core`: Canvas grid, cells and colors, line rasterization, flood fill
//! - `codec`: Plain-text canvas file format
//! - `app`: Command parsing, drawing session and the interactive loop

pub mod app;
pub mod codec;
pub mod core;
pub mod error;

pub use error::{Error, Result};
