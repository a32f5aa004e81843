//! tokodoc-core - Core library for tokodoc
//!
//! This crate contains the shared models, validation rules, attachment
//! reconciliation, and backend API client used by the tokodoc interfaces.

pub mod api;
pub mod error;
pub mod gate;
pub mod models;
pub mod reconciler;
pub mod validate;

pub use error::{Error, Result};
pub use models::{FileCategory, Session, StoreDocument};
