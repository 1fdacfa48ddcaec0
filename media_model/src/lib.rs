//! # Media Model
//!
//! The entity model of the media ecosystem simulation: articles, authors,
//! categories, tags and readers, plus the catalog that stores them.
//! This crate holds state and per-entity formulas only; it does not drive time
//! or randomness.
//!
//! Entities reference each other by ID. Methods that need another entity's
//! data take it as an argument instead of holding a reference to it.

pub mod catalog;
pub mod entities;
pub mod interactions;

pub use catalog::*;
pub use entities::*;
pub use interactions::*;
