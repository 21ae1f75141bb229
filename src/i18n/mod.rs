// SPDX-License-Identifier: MPL-2.0
//! Localization support backed by Fluent.
//!
//! Translation files live in `assets/i18n/` and are embedded into the binary
//! at compile time; one `.ftl` file per locale.

pub mod fluent;

pub use fluent::I18n;
