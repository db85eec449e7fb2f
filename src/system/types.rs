//! Core types for describing a mesh system.

use std::fmt;

/// A mesh (loop) current variable, numbered from 1.
///
/// Row `i` of the system is the KVL equation of loop `MeshIndex(i + 1)`, and
/// column `j` holds the coefficients of `MeshIndex(j + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshIndex(pub usize);

impl MeshIndex {
    /// Mesh variable for a zero-based row or column.
    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// Zero-based row or column of this variable.
    pub fn position(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for MeshIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{}", self.0)
    }
}
