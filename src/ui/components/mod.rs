// SPDX-License-Identifier: MPL-2.0
//! Small reusable widgets shared between panels.

pub mod card;

pub use card::{card, labeled_line, placeholder};
