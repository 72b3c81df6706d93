use serde::{Deserialize, Serialize};

/// Type for holding vertex indices for a triangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleIndex(pub usize, pub usize, pub usize);

impl TriangleIndex {
    /// Returns the same triangle with all indices shifted by `offset`.
    pub fn shifted(&self, offset: usize) -> Self {
        Self(self.0 + offset, self.1 + offset, self.2 + offset)
    }

    /// Largest of the three indices.
    pub fn max_index(&self) -> usize {
        self.0.max(self.1).max(self.2)
    }
}
