// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh input shapes and their validation.
//!
//! Two layouts are accepted:
//! - **Polygon form**: one `[v0, uv0, v1, uv1, ...]` array per face, plus one
//!   normal-index array per face with one entry per corner.
//! - **Flat form**: the same data concatenated into flat arrays with a fixed
//!   number of elements per face (6 and 3 for triangles).

use crate::error::{Error, Result};
use crate::normals::NormalBuffer;

/// Flat face elements per triangle (vertex + uv index for 3 corners).
pub const TRIANGLE_FACE_ELEMENT_SIZE: usize = 6;

/// Flat face-normal elements per triangle (one normal index per corner).
pub const TRIANGLE_POINT_ELEMENT_SIZE: usize = 3;

/// Mesh in polygon form.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolygonMesh {
    /// Per face: alternating vertex and uv indices, two per corner.
    pub faces: Vec<Vec<u32>>,
    /// Per face: one normal index per corner, in the same corner order.
    pub face_normals: Vec<Vec<u32>>,
    /// Flattened xyz normal triples.
    pub normals: Vec<f32>,
}

impl PolygonMesh {
    pub fn new(faces: Vec<Vec<u32>>, face_normals: Vec<Vec<u32>>, normals: Vec<f32>) -> Self {
        Self {
            faces,
            face_normals,
            normals,
        }
    }

    /// Number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check the mesh against the polygon-form invariants.
    pub fn validate(&self) -> Result<()> {
        let buffer = NormalBuffer::new(&self.normals)?;
        validate_polygon(&self.faces, &self.face_normals, &buffer)
    }
}

/// Mesh in flat form, as produced by triangle-mesh renderers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatMesh {
    /// Concatenated face arrays, `face_element_size` entries per face.
    pub faces: Vec<u32>,
    /// Concatenated normal-index arrays, `point_element_size` entries per face.
    pub face_normals: Vec<u32>,
    /// Flattened xyz normal triples.
    pub normals: Vec<f32>,
    #[cfg_attr(feature = "serde", serde(default = "default_face_element_size"))]
    pub face_element_size: usize,
    #[cfg_attr(feature = "serde", serde(default = "default_point_element_size"))]
    pub point_element_size: usize,
}

#[cfg(feature = "serde")]
fn default_face_element_size() -> usize {
    TRIANGLE_FACE_ELEMENT_SIZE
}

#[cfg(feature = "serde")]
fn default_point_element_size() -> usize {
    TRIANGLE_POINT_ELEMENT_SIZE
}

impl FlatMesh {
    /// Create a flat triangle mesh (6 face elements, 3 normal indices per face).
    pub fn triangles(faces: Vec<u32>, face_normals: Vec<u32>, normals: Vec<f32>) -> Self {
        Self {
            faces,
            face_normals,
            normals,
            face_element_size: TRIANGLE_FACE_ELEMENT_SIZE,
            point_element_size: TRIANGLE_POINT_ELEMENT_SIZE,
        }
    }

    /// Split the flat arrays into per-face chunks without copying.
    pub fn chunks(&self) -> Result<(Vec<&[u32]>, Vec<&[u32]>)> {
        let faces = split_flat(&self.faces, self.face_element_size, "faces")?;
        let face_normals =
            split_flat(&self.face_normals, self.point_element_size, "face normals")?;
        Ok((faces, face_normals))
    }

    /// Reshape into the equivalent polygon-form mesh.
    pub fn to_polygon_mesh(&self) -> Result<PolygonMesh> {
        let (faces, face_normals) = self.chunks()?;
        Ok(PolygonMesh {
            faces: faces.into_iter().map(<[u32]>::to_vec).collect(),
            face_normals: face_normals.into_iter().map(<[u32]>::to_vec).collect(),
            normals: self.normals.clone(),
        })
    }
}

/// Split a flat array into chunks of exactly `element_size` entries.
///
/// Fails rather than truncating when the length is not an exact multiple.
pub fn split_flat<'a>(
    flat: &'a [u32],
    element_size: usize,
    what: &'static str,
) -> Result<Vec<&'a [u32]>> {
    if element_size == 0 {
        return Err(Error::ZeroElementSize(what));
    }
    if flat.len() % element_size != 0 {
        return Err(Error::MalformedInput {
            what,
            len: flat.len(),
            element_size,
        });
    }
    Ok(flat.chunks_exact(element_size).collect())
}

/// Validate polygon-form input before any grouping work starts.
pub(crate) fn validate_polygon<F, N>(
    faces: &[F],
    face_normals: &[N],
    normals: &NormalBuffer<'_>,
) -> Result<()>
where
    F: AsRef<[u32]>,
    N: AsRef<[u32]>,
{
    if faces.len() != face_normals.len() {
        return Err(Error::FaceCountMismatch {
            faces: faces.len(),
            face_normals: face_normals.len(),
        });
    }

    let normal_count = normals.len();
    for (face, (indices, normal_indices)) in faces.iter().zip(face_normals).enumerate() {
        let indices = indices.as_ref();
        let normal_indices = normal_indices.as_ref();

        if indices.len() % 2 != 0 {
            return Err(Error::OddFaceLength {
                face,
                len: indices.len(),
            });
        }
        let corners = indices.len() / 2;
        if corners < 3 {
            return Err(Error::DegenerateFace { face, corners });
        }
        if normal_indices.len() != corners {
            return Err(Error::CornerCountMismatch {
                face,
                corners,
                normals: normal_indices.len(),
            });
        }
        if let Some(&index) = normal_indices
            .iter()
            .find(|&&n| n as usize >= normal_count)
        {
            return Err(Error::NormalIndexOutOfRange {
                face,
                index,
                count: normal_count,
            });
        }
    }

    Ok(())
}
