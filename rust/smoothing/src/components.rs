// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connected components of faces joined by smooth edges.
//!
//! Components are discovered by breadth-first search. Each new component is
//! seeded at the highest-indexed face not yet visited, so the component list
//! comes out in descending seed order. Group bits are assigned in this order.

use std::collections::VecDeque;

use crate::adjacency::{other_face, Adjacency};
use crate::classify::SmoothEdges;

/// Visitation state for one component search.
///
/// Every index at or above `cursor` is visited, so the next seed is found by
/// scanning down from `cursor`. Visited flags are never cleared.
struct Visitation {
    visited: Vec<bool>,
    cursor: usize,
    queue: VecDeque<usize>,
}

impl Visitation {
    fn new(face_count: usize) -> Self {
        Self {
            visited: vec![false; face_count],
            cursor: face_count,
            queue: VecDeque::new(),
        }
    }

    /// Highest-indexed unvisited face, or `None` once every face is visited.
    fn next_seed(&mut self) -> Option<usize> {
        let seed = (0..self.cursor).rev().find(|&f| !self.visited[f])?;
        self.cursor = seed;
        Some(seed)
    }

    /// Mark `face` visited and queue it. Returns false if it already was.
    fn visit(&mut self, face: usize) -> bool {
        if self.visited[face] {
            return false;
        }
        self.visited[face] = true;
        self.queue.push_back(face);
        true
    }
}

/// Flood outward from `seed` along smooth edges.
fn flood(
    seed: usize,
    state: &mut Visitation,
    adjacency: &Adjacency,
    smooth: &SmoothEdges,
) -> Vec<usize> {
    let mut component = Vec::new();
    state.visit(seed);

    while let Some(face) = state.queue.pop_front() {
        component.push(face);
        for edge in adjacency.edges_of(face) {
            if let Some(pair) = smooth.faces(&edge.key) {
                state.visit(other_face(pair, face));
            }
        }
    }

    component
}

/// Partition all faces into smooth-connected components.
///
/// Every face appears in exactly one component. Faces with no smooth
/// neighbor form singleton components.
pub fn connected_components(adjacency: &Adjacency, smooth: &SmoothEdges) -> Vec<Vec<usize>> {
    let mut state = Visitation::new(adjacency.face_count());
    let mut components = Vec::new();

    while let Some(seed) = state.next_seed() {
        components.push(flood(seed, &mut state, adjacency, smooth));
    }

    tracing::debug!(components = components.len(), "Found connected components");
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SmoothingConfig;
    use crate::normals::NormalBuffer;

    fn components(faces: &[Vec<u32>], face_normals: &[Vec<u32>], normals: &[f32]) -> Vec<Vec<usize>> {
        let buffer = NormalBuffer::new(normals).unwrap();
        let adjacency = Adjacency::build(faces, face_normals);
        let smooth = SmoothEdges::classify(&adjacency, &buffer, &SmoothingConfig::default());
        connected_components(&adjacency, &smooth)
    }

    #[test]
    fn seeds_descend_from_highest_face() {
        let mut state = Visitation::new(4);
        assert_eq!(state.next_seed(), Some(3));
        state.visit(3);
        state.visit(1);
        assert_eq!(state.next_seed(), Some(2));
        state.visit(2);
        assert_eq!(state.next_seed(), Some(0));
        state.visit(0);
        assert_eq!(state.next_seed(), None);
    }

    #[test]
    fn empty_mesh_has_no_components() {
        assert!(components(&[], &[], &[]).is_empty());
    }

    #[test]
    fn strip_is_one_component_in_bfs_order() {
        // Four triangles in a strip over vertices 0..6, all facing +Z
        let faces = vec![
            vec![0, 0, 1, 0, 2, 0],
            vec![2, 0, 1, 0, 3, 0],
            vec![2, 0, 3, 0, 4, 0],
            vec![4, 0, 3, 0, 5, 0],
        ];
        let face_normals = vec![vec![0, 0, 0]; 4];
        let cc = components(&faces, &face_normals, &[0.0, 0.0, 1.0]);

        assert_eq!(cc, vec![vec![3, 2, 1, 0]]);
    }

    #[test]
    fn crease_splits_components() {
        // Faces 0 and 1 face +Z, face 2 faces +X across a hard edge
        let faces = vec![
            vec![0, 0, 1, 0, 2, 0],
            vec![2, 0, 1, 0, 3, 0],
            vec![2, 0, 3, 0, 4, 0],
        ];
        let face_normals = vec![vec![0, 0, 0], vec![0, 0, 0], vec![1, 1, 1]];
        let cc = components(&faces, &face_normals, &[0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);

        assert_eq!(cc, vec![vec![2], vec![1, 0]]);
    }
}
