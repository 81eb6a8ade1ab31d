// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smoothing-group entry points.
//!
//! The pipeline runs once per call with all state local to that call:
//! 1. validate input
//! 2. build per-face edge loops and the manifold adjacency index
//! 3. classify manifold edges as smooth or hard
//! 4. collect smooth-connected components
//! 5. encode components as group bits

use crate::adjacency::Adjacency;
use crate::classify::SmoothEdges;
use crate::components::connected_components;
use crate::config::SmoothingConfig;
use crate::error::Result;
use crate::groups::encode_groups;
use crate::mesh::{split_flat, validate_polygon, FlatMesh, PolygonMesh};
use crate::normals::NormalBuffer;

/// Counters describing one smoothing-group computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothingStats {
    pub faces: usize,
    pub manifold_edges: usize,
    pub boundary_edges: usize,
    pub non_manifold_edges: usize,
    pub smooth_edges: usize,
    /// Shared edges that could not be found on the neighbor face.
    pub unmatched_edges: usize,
    pub components: usize,
    /// Components with more than one face.
    pub smoothing_groups: usize,
    /// True when more than 32 smoothing groups forced bit reuse.
    pub aliased: bool,
}

/// Full result of a computation: groups, components and counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothingReport {
    /// Smoothing group per face.
    pub groups: Vec<u32>,
    /// Face indices per component, in discovery order.
    pub components: Vec<Vec<usize>>,
    pub stats: SmoothingStats,
}

/// Computes smoothing groups from per-corner normals.
#[derive(Debug, Clone, Default)]
pub struct SmoothingGroups {
    config: SmoothingConfig,
}

impl SmoothingGroups {
    /// Create a processor with the default 2° tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SmoothingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    /// Compute smoothing groups for polygon-form input.
    ///
    /// `faces[i]` alternates vertex and uv indices, `face_normals[i]` holds
    /// one normal index per corner and `normals` is a flat xyz buffer.
    pub fn compute<F, N>(&self, faces: &[F], face_normals: &[N], normals: &[f32]) -> Result<SmoothingReport>
    where
        F: AsRef<[u32]>,
        N: AsRef<[u32]>,
    {
        let buffer = NormalBuffer::new(normals)?;
        validate_polygon(faces, face_normals, &buffer)?;

        let adjacency = Adjacency::build(faces, face_normals);
        let smooth = SmoothEdges::classify(&adjacency, &buffer, &self.config);
        let components = connected_components(&adjacency, &smooth);
        let encoding = encode_groups(faces.len(), &components);

        let stats = SmoothingStats {
            faces: faces.len(),
            manifold_edges: adjacency.manifold_edge_count(),
            boundary_edges: adjacency.boundary_edges,
            non_manifold_edges: adjacency.non_manifold_edges,
            smooth_edges: smooth.len(),
            unmatched_edges: smooth.unmatched,
            components: components.len(),
            smoothing_groups: encoding.smoothing_groups,
            aliased: encoding.aliased(),
        };

        tracing::debug!(
            faces = stats.faces,
            components = stats.components,
            smoothing_groups = stats.smoothing_groups,
            "Computed smoothing groups"
        );

        Ok(SmoothingReport {
            groups: encoding.groups,
            components,
            stats,
        })
    }

    /// Compute smoothing groups for flat-form input.
    ///
    /// The flat arrays are split into `face_element_size` and
    /// `point_element_size` chunks per face. Lengths that are not exact
    /// multiples are rejected before any grouping work.
    pub fn compute_flat(
        &self,
        flat_faces: &[u32],
        flat_face_normals: &[u32],
        normals: &[f32],
        face_element_size: usize,
        point_element_size: usize,
    ) -> Result<SmoothingReport> {
        let faces = split_flat(flat_faces, face_element_size, "faces")?;
        let face_normals = split_flat(flat_face_normals, point_element_size, "face normals")?;
        self.compute(&faces, &face_normals, normals)
    }

    pub fn compute_mesh(&self, mesh: &PolygonMesh) -> Result<SmoothingReport> {
        self.compute(&mesh.faces, &mesh.face_normals, &mesh.normals)
    }

    pub fn compute_flat_mesh(&self, mesh: &FlatMesh) -> Result<SmoothingReport> {
        let (faces, face_normals) = mesh.chunks()?;
        self.compute(&faces, &face_normals, &mesh.normals)
    }
}

/// Smoothing groups for polygon-form input with the default tolerance.
pub fn calc_smooth_groups<F, N>(faces: &[F], face_normals: &[N], normals: &[f32]) -> Result<Vec<u32>>
where
    F: AsRef<[u32]>,
    N: AsRef<[u32]>,
{
    SmoothingGroups::new()
        .compute(faces, face_normals, normals)
        .map(|report| report.groups)
}

/// Smoothing groups for flat-form input with the default tolerance.
pub fn calc_smooth_groups_flat(
    flat_faces: &[u32],
    flat_face_normals: &[u32],
    normals: &[f32],
    face_element_size: usize,
    point_element_size: usize,
) -> Result<Vec<u32>> {
    SmoothingGroups::new()
        .compute_flat(
            flat_faces,
            flat_face_normals,
            normals,
            face_element_size,
            point_element_size,
        )
        .map(|report| report.groups)
}
