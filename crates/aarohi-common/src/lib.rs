//! # Aarohi Common
//!
//! Shared types, utilities, and common functionality for the Aarohi portal.
//!
//! This crate provides the foundational domain vocabulary used across all
//! other crates in the workspace: the closed category set with its associated
//! display data, newtype record identifiers, and small display helpers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod category;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use category::{Accent, Category, Glyph};
pub use types::*;
pub use utils::*;
