//! # boxforge core
//!
//! Turns three dimensions into an axis-aligned box mesh and writes it out as a
//! Wavefront OBJ geometry file with a companion MTL material file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use boxforge_core::prelude::*;
//!
//! let dims = Dimensions::new(2.0, 3.0, 4.0);
//! let result = export_box(&dims, Color::default(), ExportProfile::Extended, "box.obj")?;
//! println!("{result}");
//! # Ok::<(), boxforge_core::Error>(())
//! ```
//!
//! ## Units and Conventions
//!
//! - **Distances**: centimeters. `1.0` = 1 cm.
//! - **Colors**: linear RGB diffuse reflectance, each channel conventionally in `[0, 1]`
//! - **Precision**: `f64` throughout; files print reals in plain decimal form with a decimal point
//! - **Indices**: 0-based in memory, 1-based in OBJ files

pub mod export;
pub mod import;
pub mod material;
pub mod mesh;

mod error;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    // Mesh generation
    pub use crate::mesh::{DimensionPolicy, Dimensions, Face, Mesh, Side};

    // Materials
    pub use crate::material::{Color, Material};

    // Export
    pub use crate::export::{
        ExportName, ExportProfile, ExportResult, bundle_archive, export_box, export_mesh,
    };

    // Import
    pub use crate::import::{LoadedBox, load_box};

    // Math (re-export glam)
    pub use glam::DVec3;

    // Error handling
    pub use crate::{Error, Result};
}

/// Format a real the way the artifacts expect: plain decimal notation with a
/// decimal point.
///
/// `2.0` prints as `2.0` (never `2`), `0.25` as `0.25`, `1e16` as
/// `10000000000000000.0`. Non-finite values print as `NaN`, `inf` or `-inf`.
pub fn fmt_real(value: f64) -> String {
    // Display never switches to exponent notation but drops a trailing `.0`
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}
