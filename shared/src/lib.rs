//! Shared types for the News Alert widget
//!
//! This crate contains the host-agnostic parts of the widget:
//! - Alert records and the select-and-order pipeline
//! - Markup rendering
//! - Widget configuration and its property schema
//! - Environment labels and theme-to-style mapping
//! - The error taxonomy used by the UI crate

pub mod config;
pub mod environment;
pub mod error;
pub mod markup;
pub mod record;
pub mod theme;

pub use config::*;
pub use environment::*;
pub use error::*;
pub use markup::*;
pub use record::*;
pub use theme::*;
