// SPDX-License-Identifier: MPL-2.0
//! UI components of the profile viewer.

pub mod components;
pub mod design_tokens;
pub mod header;
pub mod navbar;
pub mod profile;
pub mod theming;
