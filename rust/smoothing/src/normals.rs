// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Normal buffer access and the angular equality test.

use nalgebra::Vector3;

use crate::config::SmoothingConfig;
use crate::error::{Error, Result};

/// Read-only view over a flat `[x, y, z, x, y, z, ...]` normal buffer.
#[derive(Debug, Clone, Copy)]
pub struct NormalBuffer<'a> {
    data: &'a [f32],
}

impl<'a> NormalBuffer<'a> {
    /// Wrap a flat buffer. Fails if its length is not a multiple of 3.
    pub fn new(data: &'a [f32]) -> Result<Self> {
        if data.len() % 3 != 0 {
            return Err(Error::NormalBufferLength(data.len()));
        }
        Ok(Self { data })
    }

    /// Number of normals in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Fetch normal `index`. Callers validate indices up front.
    #[inline]
    pub fn get(&self, index: u32) -> Vector3<f32> {
        let i = index as usize * 3;
        Vector3::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }
}

/// Whether two normals point the same way within the configured tolerance.
///
/// Normals carrying the unlocked sentinel in any component never match.
/// Both vectors are normalized before comparing, so a zero-length normal
/// yields NaN and never matches either.
pub fn normals_match(a: &Vector3<f32>, b: &Vector3<f32>, config: &SmoothingConfig) -> bool {
    let sentinel = config.unlocked_sentinel;
    if a.iter().chain(b.iter()).any(|&c| c == sentinel) {
        return false;
    }
    a.normalize().dot(&b.normalize()) >= config.cos_tolerance
}
