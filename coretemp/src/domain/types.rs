//! Domain types providing compile-time safety and self-documentation
//!
//! These newtype wrappers keep a core index from being confused with a sample
//! index or a segment index in function signatures.

use serde::Serialize;
use std::fmt;

/// CPU core index (0-indexed)
///
/// Identifies one column of the temperature log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CoreId(pub usize);

impl fmt::Display for CoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Core {}", self.0)
    }
}

/// Seconds elapsed since the first sample
///
/// Derived positionally (`index * interval`), never read from the input.
pub type Timestamp = u64;
