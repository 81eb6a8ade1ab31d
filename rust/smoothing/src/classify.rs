// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smoothness classification of manifold edges.

use rustc_hash::FxHashMap;

use crate::adjacency::{other_face, Adjacency};
use crate::config::SmoothingConfig;
use crate::edge::EdgeKey;
use crate::normals::NormalBuffer;

/// Manifold edges whose two faces agree on the normals along the edge.
#[derive(Debug, Clone, Default)]
pub struct SmoothEdges {
    edges: FxHashMap<EdgeKey, [usize; 2]>,
    /// Manifold edges with no matching edge on the neighbor face. Only
    /// degenerate geometry produces these.
    pub unmatched: usize,
}

impl SmoothEdges {
    /// Classify every manifold edge in `adjacency`.
    pub fn classify(
        adjacency: &Adjacency,
        normals: &NormalBuffer<'_>,
        config: &SmoothingConfig,
    ) -> Self {
        let mut edges = FxHashMap::default();
        let mut unmatched = 0;

        for face in 0..adjacency.face_count() {
            for edge in adjacency.edges_of(face) {
                let Some(pair) = adjacency.manifold_faces(&edge.key) else {
                    continue;
                };
                let neighbor = other_face(pair, face);

                let Some(counterpart) = adjacency
                    .edges_of(neighbor)
                    .iter()
                    .find(|e| e.key == edge.key)
                else {
                    tracing::warn!(
                        face,
                        neighbor,
                        low = edge.key.low,
                        high = edge.key.high,
                        "Shared edge missing from neighbor face, skipping"
                    );
                    unmatched += 1;
                    continue;
                };

                if edge.is_smooth(counterpart, normals, config) {
                    edges.entry(edge.key).or_insert(pair);
                }
            }
        }

        tracing::debug!(
            smooth = edges.len(),
            unmatched,
            "Classified manifold edges"
        );

        Self { edges, unmatched }
    }

    /// The two faces joined by a smooth edge.
    #[inline]
    pub fn faces(&self, key: &EdgeKey) -> Option<[usize; 2]> {
        self.edges.get(key).copied()
    }

    #[inline]
    pub fn contains(&self, key: &EdgeKey) -> bool {
        self.edges.contains_key(key)
    }

    /// Number of smooth edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
