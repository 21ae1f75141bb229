// SPDX-License-Identifier: MPL-2.0
//! `civic_lens` is a parliamentary transparency viewer built with the Iced GUI framework.
//!
//! Given a member identifier it loads the member's profile together with four
//! independent data sets (voting record, parliamentary activity, spending, and
//! transparency declarations) and presents them as a tabbed profile page. It
//! demonstrates internationalization with Fluent, user preference management,
//! and modular UI design.

#![doc(html_root_url = "https://docs.rs/civic_lens/0.2.0")]

pub mod app;
pub mod config;
pub mod data;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
