// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tunables for the normal comparison.

/// Cosine of the default 2° tolerance between two normals.
pub const DEFAULT_COS_TOLERANCE: f32 = 0.9994;

/// Component value marking an "unlocked" normal that carries no data.
pub const UNLOCKED_NORMAL: f32 = 1.0e20;

/// Configuration for [`SmoothingGroups`](crate::SmoothingGroups).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmoothingConfig {
    /// Two unit normals match when their dot product is at least this value.
    pub cos_tolerance: f32,
    /// Normals with any component equal to this value never match.
    pub unlocked_sentinel: f32,
}

impl SmoothingConfig {
    /// Create a config whose tolerance is given as an angle in degrees.
    pub fn from_angle_degrees(degrees: f32) -> Self {
        Self {
            cos_tolerance: degrees.to_radians().cos(),
            ..Self::default()
        }
    }

    /// The tolerance expressed as an angle in degrees.
    pub fn angle_degrees(&self) -> f32 {
        self.cos_tolerance.clamp(-1.0, 1.0).acos().to_degrees()
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            cos_tolerance: DEFAULT_COS_TOLERANCE,
            unlocked_sentinel: UNLOCKED_NORMAL,
        }
    }
}
