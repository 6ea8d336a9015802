//! Typed client for the Aarohi backend API.
//!
//! Every backend response shares the `{status, data, message}` envelope; the
//! client unwraps it, decodes the payload to the caller's expectation, and
//! collapses transport, status, envelope, and decode failures into a single
//! [`FetchError`] the pages project into their "failed to load" state.
//!
//! One attempt per call: retry is the page's responsibility, exposed only as
//! a manual user-triggered re-fetch.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod envelope;
pub mod error;
pub mod models;

pub use client::{ApiClient, PortalData};
pub use envelope::Envelope;
pub use error::{FetchError, FetchResult};
pub use models::*;
