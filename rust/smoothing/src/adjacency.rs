// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-face edge loops and the edge → faces adjacency index.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::edge::{EdgeKey, FaceEdge};

/// Edge loop of one face. Triangles and quads stay on the stack.
pub type FaceEdges = SmallVec<[FaceEdge; 4]>;

/// Build the edge loop of one face.
///
/// `indices` alternates vertex and uv indices; `normal_indices` has one entry
/// per corner. Edge `i` runs from corner `i - 1` to corner `i`, so edge 0 is
/// the closing edge from the last corner back to the first.
pub fn face_edges(indices: &[u32], normal_indices: &[u32]) -> FaceEdges {
    let n = normal_indices.len();
    let mut edges = FaceEdges::with_capacity(n);
    if n == 0 {
        return edges;
    }

    let mut from = indices[(n - 1) * 2];
    let mut from_normal = normal_indices[n - 1];
    for i in 0..n {
        let to = indices[i * 2];
        let to_normal = normal_indices[i];
        edges.push(FaceEdge::new(from, to, from_normal, to_normal));
        from = to;
        from_normal = to_normal;
    }
    edges
}

/// Edge adjacency for a whole mesh.
///
/// Only manifold edges (exactly two incident faces) are indexed. Boundary
/// and non-manifold edges are counted and otherwise ignored.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    face_edges: Vec<FaceEdges>,
    manifold: FxHashMap<EdgeKey, [usize; 2]>,
    /// Distinct edges used by exactly one face.
    pub boundary_edges: usize,
    /// Distinct edges used by more than two faces.
    pub non_manifold_edges: usize,
}

impl Adjacency {
    /// Build the adjacency index from validated polygon-form input.
    pub fn build<F, N>(faces: &[F], face_normals: &[N]) -> Self
    where
        F: AsRef<[u32]>,
        N: AsRef<[u32]>,
    {
        let face_edges: Vec<FaceEdges> = faces
            .iter()
            .zip(face_normals)
            .map(|(f, n)| face_edges(f.as_ref(), n.as_ref()))
            .collect();

        let mut buckets: FxHashMap<EdgeKey, SmallVec<[usize; 2]>> = FxHashMap::default();
        for (face, edges) in face_edges.iter().enumerate() {
            for edge in edges {
                buckets.entry(edge.key).or_default().push(face);
            }
        }

        let mut manifold = FxHashMap::default();
        manifold.reserve(buckets.len());
        let mut boundary_edges = 0;
        let mut non_manifold_edges = 0;
        for (key, incident) in buckets {
            match incident.as_slice() {
                &[a, b] => {
                    manifold.insert(key, [a, b]);
                }
                [_] => boundary_edges += 1,
                _ => non_manifold_edges += 1,
            }
        }

        tracing::debug!(
            faces = face_edges.len(),
            manifold = manifold.len(),
            boundary = boundary_edges,
            non_manifold = non_manifold_edges,
            "Built edge adjacency"
        );

        Self {
            face_edges,
            manifold,
            boundary_edges,
            non_manifold_edges,
        }
    }

    /// Number of faces indexed.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.face_edges.len()
    }

    /// The edge loop of `face`, in corner order.
    #[inline]
    pub fn edges_of(&self, face: usize) -> &[FaceEdge] {
        &self.face_edges[face]
    }

    /// The two faces sharing a manifold edge, in discovery order.
    #[inline]
    pub fn manifold_faces(&self, key: &EdgeKey) -> Option<[usize; 2]> {
        self.manifold.get(key).copied()
    }

    /// Number of manifold edges.
    #[inline]
    pub fn manifold_edge_count(&self) -> usize {
        self.manifold.len()
    }
}

/// The face on the other side of an edge shared by `pair`.
#[inline]
pub fn other_face(pair: [usize; 2], face: usize) -> usize {
    if pair[0] == face {
        pair[1]
    } else {
        pair[0]
    }
}
