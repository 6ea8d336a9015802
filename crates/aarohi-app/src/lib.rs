//! # Aarohi Portal
//!
//! Root crate of the Aarohi women's empowerment portal.
//!
//! Ties the workspace together: loads configuration, mounts the shared
//! language store and the six pages over the backend client, and drives a
//! headless session from `main`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod portal;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use portal::Portal;
