//! Box mesh generation
//!
//! The box topology is fixed: 8 corners and 12 triangles, two per side. The
//! vertex numbering, face order and winding are hard-coded so that exported
//! files stay byte-compatible across versions.

use crate::{Error, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Box dimensions in centimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub height: f64,
    /// Extent along Z
    pub depth: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        }
    }
}

impl Dimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// The corner opposite the origin
    pub fn extent(&self) -> DVec3 {
        DVec3::new(self.width, self.height, self.depth)
    }

    /// Check the dimensions against a policy
    ///
    /// Non-finite values are rejected under every policy.
    pub fn validate(&self, policy: DimensionPolicy) -> Result<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidParameter(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
            if policy == DimensionPolicy::RequirePositive && value <= 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// What to do with zero or negative dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionPolicy {
    /// Accept them and emit a flattened or inverted box
    #[default]
    Permissive,
    /// Reject them as invalid parameters
    RequirePositive,
}

/// The six sides of a box, in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
    Right,
    Left,
    Top,
    Bottom,
}

impl Side {
    /// All sides in the order their triangles and normals are written
    pub const ALL: [Side; 6] = [
        Side::Front,
        Side::Back,
        Side::Right,
        Side::Left,
        Side::Top,
        Side::Bottom,
    ];

    /// Outward unit normal of this side
    pub fn normal(self) -> DVec3 {
        match self {
            Side::Front => DVec3::NEG_Z,
            Side::Back => DVec3::Z,
            Side::Right => DVec3::X,
            Side::Left => DVec3::NEG_X,
            Side::Top => DVec3::Y,
            Side::Bottom => DVec3::NEG_Y,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
            Side::Right => "right",
            Side::Left => "left",
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}

/// A triangle referencing three vertices by 0-based index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face(pub [u32; 3]);

impl Face {
    /// Indices as written to OBJ files (1-based)
    pub fn one_based(&self) -> [u32; 3] {
        [self.0[0] + 1, self.0[1] + 1, self.0[2] + 1]
    }
}

/// Triangles of a box, two per side, sides in [`Side::ALL`] order
const BOX_FACES: [[u32; 3]; 12] = [
    // Front
    [0, 1, 2],
    [0, 2, 3],
    // Back
    [4, 6, 5],
    [4, 7, 6],
    // Right
    [1, 5, 6],
    [1, 6, 2],
    // Left
    [0, 3, 7],
    [0, 7, 4],
    // Top
    [3, 2, 6],
    [3, 6, 7],
    // Bottom
    [0, 4, 5],
    [0, 5, 1],
];

/// A triangle mesh with bare positions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<DVec3>,
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Build the 8-vertex, 12-triangle box spanning the origin to `dims`
    pub fn cuboid(dims: &Dimensions) -> Self {
        let (w, h, d) = (dims.width, dims.height, dims.depth);
        let vertices = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(w, 0.0, 0.0),
            DVec3::new(w, h, 0.0),
            DVec3::new(0.0, h, 0.0),
            DVec3::new(0.0, 0.0, d),
            DVec3::new(w, 0.0, d),
            DVec3::new(w, h, d),
            DVec3::new(0.0, h, d),
        ];
        let faces = BOX_FACES.iter().copied().map(Face).collect();

        Self { vertices, faces }
    }

    /// Get number of triangles
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Get number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Axis-aligned bounds as (min, max), or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }
}
