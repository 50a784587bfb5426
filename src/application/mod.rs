// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports and queries.
//!
//! - [`port`]: Trait definitions the host implements
//! - [`query`]: Read-only derivations over host data (sibling list, collation)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The gallery engine uses both through the port traits only

pub mod port;
pub mod query;
