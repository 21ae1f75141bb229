// SPDX-License-Identifier: MPL-2.0
//! Data access for member profiles.
//!
//! The UI consumes a [`Source`], which dispatches lookups either to a remote
//! JSON API ([`api::Client`]) or to the bundled sample dataset
//! ([`sample::Store`]) when no API endpoint is configured.

pub mod api;
pub mod model;
pub mod sample;
mod source;

pub use source::{fetch_lists, Source};
