// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Edge identity and per-face edge payloads.
//!
//! An edge is split into two concerns:
//! - [`EdgeKey`]: the undirected vertex pair. This is the only thing that
//!   takes part in hashing and equality, so the same geometric edge seen from
//!   two faces lands in the same adjacency bucket.
//! - [`FaceEdge`]: the key plus the normal indices one particular face uses
//!   at that edge. Two faces sharing an edge may reference different normals.

use crate::config::SmoothingConfig;
use crate::normals::{normals_match, NormalBuffer};

/// Undirected edge identity, stored as `(low, high)` vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub low: u32,
    pub high: u32,
}

impl EdgeKey {
    #[inline]
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }
}

/// One face's view of an edge: its key and the normals at its two corners.
///
/// The normal pair is stored as `(min, max)` of the two normal indices, which
/// is independent of the vertex order. [`FaceEdge::is_smooth`] therefore
/// compares pairs in both orientations.
#[derive(Debug, Clone, Copy)]
pub struct FaceEdge {
    pub key: EdgeKey,
    pub normals: (u32, u32),
}

impl FaceEdge {
    /// Build the edge between two consecutive corners of a face.
    #[inline]
    pub fn new(from: u32, to: u32, from_normal: u32, to_normal: u32) -> Self {
        Self {
            key: EdgeKey::new(from, to),
            normals: (from_normal.min(to_normal), from_normal.max(to_normal)),
        }
    }

    /// Whether the normals on this edge match those on `other` in either
    /// traversal direction.
    pub fn is_smooth(
        &self,
        other: &FaceEdge,
        buffer: &NormalBuffer<'_>,
        config: &SmoothingConfig,
    ) -> bool {
        let a0 = buffer.get(self.normals.0);
        let a1 = buffer.get(self.normals.1);
        let b0 = buffer.get(other.normals.0);
        let b1 = buffer.get(other.normals.1);

        (normals_match(&a0, &b0, config) && normals_match(&a1, &b1, config))
            || (normals_match(&a0, &b1, config) && normals_match(&a1, &b0, config))
    }
}
