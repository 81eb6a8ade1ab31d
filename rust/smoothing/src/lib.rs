// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Smoothgroups Core
//!
//! Converts per-corner mesh normals into per-face smoothing groups.
//!
//! Faces that share a manifold edge and agree on the normals along that edge
//! (within 2° by default) are joined. Each connected set of two or more faces
//! becomes one smoothing group, encoded as a single bit of a `u32`; isolated
//! faces get group `0`. Bits are reused after 32 groups.
//!
//! ```
//! use smoothgroups_core::calc_smooth_groups;
//!
//! // Two coplanar triangles sharing edge 1-2, both using normal 0
//! let faces: Vec<Vec<u32>> = vec![vec![0, 0, 1, 0, 2, 0], vec![2, 0, 1, 0, 3, 0]];
//! let face_normals: Vec<Vec<u32>> = vec![vec![0, 0, 0], vec![0, 0, 0]];
//! let normals = [0.0, 0.0, 1.0];
//!
//! let groups = calc_smooth_groups(&faces, &face_normals, &normals).unwrap();
//! assert_eq!(groups, vec![1, 1]);
//! ```

pub mod adjacency;
pub mod classify;
pub mod components;
pub mod config;
pub mod edge;
pub mod error;
pub mod groups;
pub mod mesh;
pub mod normals;
pub mod processor;

pub use config::{SmoothingConfig, DEFAULT_COS_TOLERANCE, UNLOCKED_NORMAL};
pub use edge::{EdgeKey, FaceEdge};
pub use error::{Error, Result};
pub use groups::GROUP_BITS;
pub use mesh::{FlatMesh, PolygonMesh, TRIANGLE_FACE_ELEMENT_SIZE, TRIANGLE_POINT_ELEMENT_SIZE};
pub use processor::{
    calc_smooth_groups, calc_smooth_groups_flat, SmoothingGroups, SmoothingReport, SmoothingStats,
};
