// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end behavior of smoothing-group computation on hand-built meshes.

use smoothgroups_core::{
    calc_smooth_groups, calc_smooth_groups_flat, Error, FlatMesh, SmoothingGroups, UNLOCKED_NORMAL,
};

/// Interleave vertex indices with a zero uv index.
fn face(vertices: &[u32]) -> Vec<u32> {
    vertices.iter().flat_map(|&v| [v, 0]).collect()
}

/// Unit cube corners, indexed 0..8.
const CUBE_CORNERS: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0],
];

/// Outward-wound cube faces.
const CUBE_FACES: [[u32; 4]; 6] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
];

const CUBE_FACE_NORMALS: [[f32; 3]; 6] = [
    [0.0, 0.0, -1.0],
    [0.0, 0.0, 1.0],
    [0.0, -1.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [-1.0, 0.0, 0.0],
];

fn cube_faces() -> Vec<Vec<u32>> {
    CUBE_FACES.iter().map(|f| face(f)).collect()
}

/// Cube with one shared, averaged normal per vertex.
fn smooth_cube() -> (Vec<Vec<u32>>, Vec<Vec<u32>>, Vec<f32>) {
    let normals: Vec<f32> = CUBE_CORNERS
        .iter()
        .flat_map(|c| [c[0] - 0.5, c[1] - 0.5, c[2] - 0.5])
        .collect();
    let face_normals = CUBE_FACES.iter().map(|f| f.to_vec()).collect();
    (cube_faces(), face_normals, normals)
}

/// Cube with one flat normal per face.
fn flat_cube() -> (Vec<Vec<u32>>, Vec<Vec<u32>>, Vec<f32>) {
    let normals: Vec<f32> = CUBE_FACE_NORMALS.concat();
    let face_normals = (0..6u32).map(|i| vec![i; 4]).collect();
    (cube_faces(), face_normals, normals)
}

#[test]
fn output_has_one_entry_per_face() {
    let (faces, face_normals, normals) = flat_cube();
    let groups = calc_smooth_groups(&faces, &face_normals, &normals).unwrap();
    assert_eq!(groups.len(), faces.len());

    let empty: Vec<Vec<u32>> = Vec::new();
    assert!(calc_smooth_groups(&empty, &empty, &[]).unwrap().is_empty());
}

#[test]
fn hard_cube_faces_are_all_singletons() {
    let (faces, face_normals, normals) = flat_cube();
    let report = SmoothingGroups::new()
        .compute(&faces, &face_normals, &normals)
        .unwrap();

    assert_eq!(report.groups, vec![0; 6]);
    assert_eq!(report.stats.manifold_edges, 12);
    assert_eq!(report.stats.smooth_edges, 0);
    assert_eq!(report.stats.components, 6);
    assert_eq!(report.stats.smoothing_groups, 0);
}

#[test]
fn smooth_closed_cube_is_one_group() {
    let (faces, face_normals, normals) = smooth_cube();
    let report = SmoothingGroups::new()
        .compute(&faces, &face_normals, &normals)
        .unwrap();

    let first = report.groups[0];
    assert!(first.is_power_of_two());
    assert!(report.groups.iter().all(|&g| g == first));
    assert_eq!(report.stats.smooth_edges, 12);
    assert_eq!(report.stats.boundary_edges, 0);
    assert_eq!(report.components.len(), 1);
}

#[test]
fn thirty_third_island_reuses_first_bit() {
    // 33 disjoint two-triangle islands, each internally smooth
    let mut faces = Vec::new();
    let mut face_normals: Vec<Vec<u32>> = Vec::new();
    for island in 0..33u32 {
        let v = island * 4;
        faces.push(face(&[v, v + 1, v + 2]));
        faces.push(face(&[v + 2, v + 1, v + 3]));
        face_normals.push(vec![0, 0, 0]);
        face_normals.push(vec![0, 0, 0]);
    }
    let groups = calc_smooth_groups(&faces, &face_normals, &[0.0, 0.0, 1.0]).unwrap();

    for island in 0..33 {
        let g = groups[island * 2];
        assert!(g.is_power_of_two());
        assert_eq!(g, groups[island * 2 + 1]);
    }
    assert_eq!(groups[0], groups[64]);

    let distinct: std::collections::BTreeSet<u32> = groups.iter().copied().collect();
    assert_eq!(distinct.len(), 32);
}

/// Two triangles sharing edge 1-2 with per-vertex normals that differ at the
/// two ends of the shared edge. The second face uses its own copies of those
/// normals, stored in reverse index order.
fn tilted_pair(reverse_second: bool) -> (Vec<Vec<u32>>, Vec<Vec<u32>>, Vec<f32>) {
    let tilt = 0.3f32;
    let normals = vec![
        0.0, 0.0, 1.0, // 0: vertex 0
        tilt, 0.0, 1.0, // 1: vertex 1
        0.0, tilt, 1.0, // 2: vertex 2
        0.0, 0.0, 1.0, // 3: vertex 3
        0.0, tilt, 1.0, // 4: copy of 2
        tilt, 0.0, 1.0, // 5: copy of 1
    ];
    let first = face(&[0, 1, 2]);
    let (second, second_normals) = if reverse_second {
        (face(&[3, 1, 2]), vec![3, 5, 4])
    } else {
        (face(&[2, 1, 3]), vec![4, 5, 3])
    };
    (vec![first, second], vec![vec![0, 1, 2], second_normals], normals)
}

#[test]
fn winding_does_not_change_smoothness() {
    for reverse in [false, true] {
        let (faces, face_normals, normals) = tilted_pair(reverse);
        let report = SmoothingGroups::new()
            .compute(&faces, &face_normals, &normals)
            .unwrap();
        assert_eq!(report.stats.smooth_edges, 1, "reverse = {reverse}");
        assert_eq!(report.groups, vec![1, 1], "reverse = {reverse}");
    }
}

#[test]
fn mismatched_edge_normals_are_hard() {
    let (faces, mut face_normals, normals) = tilted_pair(false);
    // Second face now uses the vertex-0 normal where vertex 1 belongs
    face_normals[1] = vec![4, 0, 3];
    let groups = calc_smooth_groups(&faces, &face_normals, &normals).unwrap();
    assert_eq!(groups, vec![0, 0]);
}

#[test]
fn non_manifold_fan_never_joins() {
    // Three triangles hinged on edge 0-1, all facing the same way
    let faces = vec![face(&[0, 1, 2]), face(&[1, 0, 3]), face(&[0, 1, 4])];
    let face_normals: Vec<Vec<u32>> = vec![vec![0, 0, 0]; 3];
    let report = SmoothingGroups::new()
        .compute(&faces, &face_normals, &[0.0, 0.0, 1.0])
        .unwrap();

    assert_eq!(report.groups, vec![0, 0, 0]);
    assert_eq!(report.stats.non_manifold_edges, 1);
    assert_eq!(report.stats.manifold_edges, 0);
}

#[test]
fn fan_faces_can_still_join_through_other_edges() {
    // Same fan, plus a fourth face sharing edge 1-2 with face 0 and edge 1-3
    // with face 1
    let faces = vec![
        face(&[0, 1, 2]),
        face(&[1, 0, 3]),
        face(&[0, 1, 4]),
        face(&[2, 1, 3]),
    ];
    let face_normals: Vec<Vec<u32>> = vec![vec![0, 0, 0]; 4];
    let groups = calc_smooth_groups(&faces, &face_normals, &[0.0, 0.0, 1.0]).unwrap();

    assert_eq!(groups[0], groups[1]);
    assert_eq!(groups[0], groups[3]);
    assert_ne!(groups[0], 0);
    assert_eq!(groups[2], 0);
}

#[test]
fn open_boundary_faces_are_isolated() {
    let faces = vec![face(&[0, 1, 2])];
    let face_normals: Vec<Vec<u32>> = vec![vec![0, 0, 0]];
    let report = SmoothingGroups::new()
        .compute(&faces, &face_normals, &[0.0, 0.0, 1.0])
        .unwrap();

    assert_eq!(report.groups, vec![0]);
    assert_eq!(report.stats.boundary_edges, 3);
    assert_eq!(report.stats.manifold_edges, 0);
}

#[test]
fn unlocked_normal_is_never_smooth() {
    let normals = vec![0.0, 0.0, 1.0, 0.0, UNLOCKED_NORMAL, 0.0];
    let faces = vec![face(&[0, 1, 2]), face(&[2, 1, 3])];

    // Shared edge 1-2 uses the unlocked normal at vertex 1 on both faces
    let face_normals: Vec<Vec<u32>> = vec![vec![0, 1, 0], vec![0, 1, 0]];
    let groups = calc_smooth_groups(&faces, &face_normals, &normals).unwrap();
    assert_eq!(groups, vec![0, 0]);

    // Unlocked normal only off the shared edge: still smooth
    let face_normals: Vec<Vec<u32>> = vec![vec![1, 0, 0], vec![0, 0, 1]];
    let groups = calc_smooth_groups(&faces, &face_normals, &normals).unwrap();
    assert_eq!(groups, vec![1, 1]);
}

#[test]
fn flat_triangles_match_polygon_form() {
    let flat_faces = [0, 0, 1, 0, 2, 0, 2, 0, 1, 0, 3, 0];
    let flat_face_normals = [0, 0, 0, 0, 0, 0];
    let normals = [0.0, 0.0, 1.0];

    let from_flat = calc_smooth_groups_flat(&flat_faces, &flat_face_normals, &normals, 6, 3).unwrap();

    let faces = vec![face(&[0, 1, 2]), face(&[2, 1, 3])];
    let face_normals: Vec<Vec<u32>> = vec![vec![0, 0, 0], vec![0, 0, 0]];
    let from_polygon = calc_smooth_groups(&faces, &face_normals, &normals).unwrap();

    assert_eq!(from_flat, from_polygon);
    assert_eq!(from_flat, vec![1, 1]);

    let mesh = FlatMesh::triangles(flat_faces.to_vec(), flat_face_normals.to_vec(), normals.to_vec());
    assert_eq!(mesh.to_polygon_mesh().unwrap().faces, faces);
}

#[test]
fn malformed_flat_faces_fail_fast() {
    let err = calc_smooth_groups_flat(&[0, 0, 1, 0, 2, 0, 3], &[0, 0, 0], &[0.0, 0.0, 1.0], 6, 3)
        .unwrap_err();
    assert_eq!(
        err,
        Error::MalformedInput {
            what: "faces",
            len: 7,
            element_size: 6
        }
    );
}

#[test]
fn flat_face_count_mismatch_is_rejected() {
    let err = calc_smooth_groups_flat(&[0, 0, 1, 0, 2, 0], &[0, 0, 0, 0, 0, 0], &[0.0, 0.0, 1.0], 6, 3)
        .unwrap_err();
    assert_eq!(
        err,
        Error::FaceCountMismatch {
            faces: 1,
            face_normals: 2
        }
    );
}

#[test]
fn recomputation_is_stable() {
    let (faces, face_normals, normals) = smooth_cube();
    let processor = SmoothingGroups::new();
    let a = processor.compute(&faces, &face_normals, &normals).unwrap();
    let b = processor.compute(&faces, &face_normals, &normals).unwrap();
    assert_eq!(a, b);
}
