//! Qubit addressing

use std::fmt;

/// Position of a qubit within a register.
///
/// A thin newtype over `usize` so that register positions cannot be
/// confused with other integers (matrix dimensions, operation indices).
///
/// # Example
/// ```
/// use qompose_core::QubitId;
///
/// let q2 = QubitId::new(2);
/// assert_eq!(q2.index(), 2);
/// assert_eq!(q2.to_string(), "q2");
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct QubitId(usize);

impl QubitId {
    /// Create a qubit id for register position `index`.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The register position.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(id: QubitId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        let q = QubitId::new(7);
        assert_eq!(q.index(), 7);
        assert_eq!(usize::from(q), 7);
        assert_eq!(QubitId::from(7usize), q);
    }

    #[test]
    fn ordering_follows_index() {
        assert!(QubitId::new(0) < QubitId::new(1));
        assert!(QubitId::new(3) > QubitId::new(2));
    }

    #[test]
    fn displays_as_q_index() {
        assert_eq!(format!("{}", QubitId::new(11)), "q11");
    }
}
