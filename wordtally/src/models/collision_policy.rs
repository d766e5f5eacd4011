// src/models/collision_policy.rs

/// What happens when two keys fold to the same lower-case key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// The entry met later in key order replaces the earlier one.
    #[default]
    Overwrite,
    /// Counts of colliding keys are added together.
    Sum,
}

impl CollisionPolicy {
    #[inline]
    #[must_use]
    pub const fn merge(self, existing: u64, incoming: u64) -> u64 {
        match self {
            Self::Overwrite => incoming,
            Self::Sum => existing.saturating_add(incoming),
        }
    }
}
