// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Encoding of components as smoothing-group bitmasks.
//!
//! A singleton component gets group `0` (hard edges only). Every other
//! component gets a single bit, `1 << counter`, with `counter` cycling
//! through `0..32`. The 33rd smoothing group reuses bit 0, so meshes with
//! more than 32 groups alias unrelated groups onto the same bit.

/// Number of distinct group bits before the counter wraps.
pub const GROUP_BITS: u32 = u32::BITS;

/// Result of encoding a component list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupEncoding {
    /// Smoothing group per face.
    pub groups: Vec<u32>,
    /// Number of components with more than one face.
    pub smoothing_groups: usize,
}

impl GroupEncoding {
    /// Whether two unrelated groups had to share a bit.
    #[inline]
    pub fn aliased(&self) -> bool {
        self.smoothing_groups > GROUP_BITS as usize
    }
}

/// Encode `components` over `face_count` faces.
///
/// Components are taken in the given order; bits are handed out in that
/// same order.
pub fn encode_groups(face_count: usize, components: &[Vec<usize>]) -> GroupEncoding {
    let mut groups = vec![0u32; face_count];
    let mut counter = 0u32;
    let mut smoothing_groups = 0;

    for component in components {
        if component.len() < 2 {
            continue;
        }
        let bit = 1u32 << counter;
        for &face in component {
            groups[face] = bit;
        }
        smoothing_groups += 1;
        counter = (counter + 1) % GROUP_BITS;
    }

    let encoding = GroupEncoding {
        groups,
        smoothing_groups,
    };
    if encoding.aliased() {
        tracing::warn!(
            smoothing_groups,
            "More than {} smoothing groups, group bits are reused",
            GROUP_BITS
        );
    }
    encoding
}
