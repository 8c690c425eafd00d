//! Export of box meshes to OBJ geometry + MTL material pairs

mod archive;
mod mtl;
mod naming;
mod obj;

use crate::material::{Color, Material};
use crate::mesh::{Dimensions, Mesh};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use archive::bundle_archive;
pub use mtl::write_mtl;
pub use naming::ExportName;
pub use obj::{PLACEHOLDER_UVS, write_obj};

/// Which optional fields an export writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportProfile {
    /// Positions, plain faces and a flat material
    Minimal,
    /// Adds placeholder texture coordinates, per-side normals, smooth shading
    /// and specular material coefficients
    #[default]
    Extended,
}

impl ExportProfile {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Extended => "extended",
        }
    }
}

impl fmt::Display for ExportProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "extended" => Ok(Self::Extended),
            _ => Err(Error::InvalidParameter(format!(
                "unknown profile '{}', expected minimal or extended",
                s
            ))),
        }
    }
}

/// Result of a successful export
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Geometry (OBJ) file
    pub obj_path: PathBuf,
    /// Material (MTL) file, always next to the geometry file
    pub mtl_path: PathBuf,
    pub profile: ExportProfile,
    pub vertex_count: usize,
    pub triangle_count: usize,
}

impl ExportResult {
    /// File name of the geometry artifact without its directory
    pub fn obj_file_name(&self) -> String {
        file_name(&self.obj_path)
    }

    /// Both artifacts, material first
    pub fn artifacts(&self) -> [&Path; 2] {
        [self.mtl_path.as_path(), self.obj_path.as_path()]
    }
}

impl fmt::Display for ExportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exported {} + {} ({} profile, {} vertices, {} triangles)",
            self.obj_path.display(),
            self.mtl_path.display(),
            self.profile,
            self.vertex_count,
            self.triangle_count
        )
    }
}

/// Path of the material file that accompanies a geometry file
pub fn material_path_for(obj_path: &Path) -> PathBuf {
    obj_path.with_extension("mtl")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Build a box and export it
///
/// Writes the material file first, then the geometry file. A failure on the
/// geometry file leaves the material file behind.
pub fn export_box(
    dims: &Dimensions,
    color: Color,
    profile: ExportProfile,
    obj_path: impl AsRef<Path>,
) -> Result<ExportResult> {
    let mesh = Mesh::cuboid(dims);
    export_mesh(&mesh, dims, color, profile, obj_path.as_ref())
}

/// Export an already built box mesh
pub fn export_mesh(
    mesh: &Mesh,
    dims: &Dimensions,
    color: Color,
    profile: ExportProfile,
    obj_path: &Path,
) -> Result<ExportResult> {
    let mtl_path = material_path_for(obj_path);
    let material = Material::for_profile(color, profile);

    let mut writer = BufWriter::new(File::create(&mtl_path)?);
    write_mtl(&mut writer, &material)?;
    writer.flush()?;

    // Consumers resolve mtllib relative to the OBJ file, so only the name is written
    let mut writer = BufWriter::new(File::create(obj_path)?);
    write_obj(&mut writer, mesh, dims, &file_name(&mtl_path), profile)?;
    writer.flush()?;

    Ok(ExportResult {
        obj_path: obj_path.to_path_buf(),
        mtl_path,
        profile,
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
    })
}
