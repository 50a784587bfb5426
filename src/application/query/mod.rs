// SPDX-License-Identifier: MPL-2.0
//! Query services over host folder listings.
//!
//! # Available Queries
//!
//! - [`sibling_index`]: Sibling list derivation and current-position lookup
//! - [`collation`]: Locale-style name ordering used by the sibling list

pub mod collation;
pub mod sibling_index;

pub use collation::compare_names;
pub use sibling_index::SiblingIndex;
