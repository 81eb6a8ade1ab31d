// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for smoothing-group computation.
//!
//! Every variant describes malformed input. Once a mesh passes validation the
//! computation itself cannot fail.

/// Result type alias for smoothing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating mesh input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A flat array is not an exact multiple of its per-face element size.
    #[error("malformed input: {what} has {len} elements, not a multiple of {element_size}")]
    MalformedInput {
        what: &'static str,
        len: usize,
        element_size: usize,
    },

    /// A per-face element size of zero was requested.
    #[error("{0} element size must be greater than zero")]
    ZeroElementSize(&'static str),

    /// Face and face-normal lists describe a different number of faces.
    #[error("face count mismatch: {faces} faces but {face_normals} face-normal entries")]
    FaceCountMismatch { faces: usize, face_normals: usize },

    /// A face's normal-index list does not have one entry per corner.
    #[error("face {face} has {corners} corners but {normals} normal indices")]
    CornerCountMismatch {
        face: usize,
        corners: usize,
        normals: usize,
    },

    /// A polygon face's vertex/UV array is not made of index pairs.
    #[error("face {face} has odd vertex/uv array length {len}")]
    OddFaceLength { face: usize, len: usize },

    /// A face has fewer than three corners.
    #[error("face {face} is degenerate: {corners} corners")]
    DegenerateFace { face: usize, corners: usize },

    /// The normal buffer is not a sequence of xyz triples.
    #[error("normal buffer length {0} is not a multiple of 3")]
    NormalBufferLength(usize),

    /// A face references a normal past the end of the normal buffer.
    #[error("face {face} references normal {index}, but only {count} normals exist")]
    NormalIndexOutOfRange { face: usize, index: u32, count: usize },
}
