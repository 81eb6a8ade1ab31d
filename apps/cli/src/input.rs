// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON mesh input in either polygon or flat form.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use smoothgroups_core::{FlatMesh, PolygonMesh, SmoothingGroups, SmoothingReport};

/// Layout of the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// Detect from the shape of `faces`
    #[default]
    Auto,
    /// `faces` is an array of per-face arrays
    Polygon,
    /// `faces` is one flat array with a fixed size per face
    Flat,
}

/// A parsed mesh document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MeshInput {
    Polygon(PolygonMesh),
    Flat(FlatMesh),
}

impl MeshInput {
    /// Parse `text` according to `format`.
    pub fn parse(text: &str, format: InputFormat) -> Result<Self> {
        let input = match format {
            InputFormat::Auto => serde_json::from_str(text)
                .context("input is neither a polygon-form nor a flat-form mesh")?,
            InputFormat::Polygon => MeshInput::Polygon(
                serde_json::from_str(text).context("failed to parse polygon-form mesh")?,
            ),
            InputFormat::Flat => MeshInput::Flat(
                serde_json::from_str(text).context("failed to parse flat-form mesh")?,
            ),
        };
        Ok(input)
    }

    pub fn face_count(&self) -> usize {
        match self {
            MeshInput::Polygon(mesh) => mesh.face_count(),
            MeshInput::Flat(mesh) => mesh.faces.len() / mesh.face_element_size.max(1),
        }
    }

    pub fn form(&self) -> &'static str {
        match self {
            MeshInput::Polygon(_) => "polygon",
            MeshInput::Flat(_) => "flat",
        }
    }

    /// Run the smoothing-group computation on this mesh.
    pub fn compute(&self, processor: &SmoothingGroups) -> Result<SmoothingReport> {
        let report = match self {
            MeshInput::Polygon(mesh) => processor.compute_mesh(mesh),
            MeshInput::Flat(mesh) => processor.compute_flat_mesh(mesh),
        };
        report.with_context(|| format!("invalid {}-form mesh", self.form()))
    }
}
