//! flames-core — the FLAMES relationship game.
//!
//! Two names are normalized, their shared letters cancel pairwise, and the
//! count of leftover letters eliminates entries from the
//! Friends/Love/Affection/Marriage/Enemy/Siblings circle until one remains.
//! Everything here is pure and allocation-light; there is no I/O.

pub mod resolver;
pub mod types;

pub use resolver::{cancel_common, eliminate, normalize, read, remaining_count, resolve};
pub use types::{ParseRelationshipError, Reading, Relationship, Step};
