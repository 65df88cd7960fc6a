//! Display priority for sibling records.
//!
//! A priority is a dense integer starting at 0: within one list, every
//! record holds a distinct value and the values cover `0..len` with no
//! gaps. Reordering reassigns which record holds which value; it never
//! introduces new values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a record within its sibling list. Lower sorts first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Priority(u32);

impl Priority {
    /// The first position in a list.
    pub const FIRST: Self = Self(0);

    /// Creates a priority from a raw position.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw position.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// The next position toward the back of the list.
    #[must_use]
    pub const fn succ(&self) -> Self {
        Self(self.0 + 1)
    }

    /// The previous position toward the front of the list.
    /// Saturates at the front rather than wrapping.
    #[must_use]
    pub const fn pred(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl From<u32> for Priority {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
