//! Reading exported OBJ/MTL pairs back
//!
//! Used to verify exports and by the `inspect` command. `tobj` does the
//! parsing; this module checks that what it read is one of our boxes and
//! rebuilds the box from it.

use crate::export::ExportProfile;
use crate::material::{Color, Material};
use crate::mesh::{Dimensions, Mesh};
use crate::{Error, Result};
use glam::DVec3;
use std::cell::Cell;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// A box reconstructed from its files
#[derive(Debug, Clone)]
pub struct LoadedBox {
    pub dimensions: Dimensions,
    pub color: Color,
    /// Extended when the geometry carries normals
    pub profile: ExportProfile,
    /// The box in canonical vertex order
    pub mesh: Mesh,
    /// Normal referenced by each triangle's first corner, empty without normals
    pub face_normals: Vec<DVec3>,
    /// Texture coordinates of each triangle's corners, empty without them
    pub face_uvs: Vec<[[f64; 2]; 3]>,
    pub material: Material,
    /// Material file the geometry referenced, if it was read from disk
    pub mtl_path: Option<PathBuf>,
}

/// Options for reading box files
///
/// Attribute indices stay separate so normals and texture coordinates can be
/// checked per corner, and nothing is triangulated behind our back.
pub fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: false,
        triangulate: false,
        ..Default::default()
    }
}

/// Read a geometry file and the material file its `mtllib` names
///
/// The material file is resolved relative to the geometry file's directory.
pub fn load_box(obj_path: impl AsRef<Path>) -> Result<LoadedBox> {
    let obj_path = obj_path.as_ref();
    let dir = obj_path.parent().unwrap_or(Path::new(""));
    let mut reader = BufReader::new(File::open(obj_path)?);

    let mtl_path = Cell::new(None);
    let (models, materials) = tobj::load_obj_buf(&mut reader, &load_options(), |lib| {
        let path = dir.join(lib);
        mtl_path.set(Some(path.clone()));
        tobj::load_mtl(path)
    })?;

    let mtl_path = mtl_path
        .into_inner()
        .ok_or_else(|| Error::InvalidParameter("geometry has no mtllib statement".to_string()))?;

    let mut loaded = box_from_documents(&models, &materials?)?;
    loaded.mtl_path = Some(mtl_path);
    Ok(loaded)
}

fn not_a_box(reason: impl std::fmt::Display) -> Error {
    Error::InvalidParameter(format!("not a box mesh: {}", reason))
}

/// Reconstruct a box from the models and materials `tobj` read
pub fn box_from_documents(
    models: &[tobj::Model],
    materials: &[tobj::Material],
) -> Result<LoadedBox> {
    let [model] = models else {
        return Err(not_a_box(format!("{} models", models.len())));
    };
    let mesh = &model.mesh;

    if mesh.face_arities.iter().any(|&arity| arity != 3) {
        return Err(not_a_box("faces must be triangles"));
    }
    let vertices: Vec<DVec3> = mesh.positions.chunks_exact(3).map(DVec3::from_slice).collect();
    if vertices.len() != 8 || mesh.indices.len() != 36 {
        return Err(not_a_box(format!(
            "{} vertices, {} triangles",
            vertices.len(),
            mesh.indices.len() / 3
        )));
    }

    // Each coordinate is either 0 or the extent along that axis
    let far = vertices.iter().fold(DVec3::ZERO, |far, &v| {
        DVec3::select(v.abs().cmpgt(far.abs()), v, far)
    });
    let dimensions = Dimensions::new(far.x, far.y, far.z);

    // tobj renumbers vertices by first use, so compare triangles by position
    let canonical = Mesh::cuboid(&dimensions);
    for (i, (face, corners)) in canonical
        .faces
        .iter()
        .zip(mesh.indices.chunks_exact(3))
        .enumerate()
    {
        for (&want, &got) in face.0.iter().zip(corners) {
            if vertices.get(got as usize) != canonical.vertices.get(want as usize) {
                return Err(not_a_box(format!("triangle {} is out of place", i + 1)));
            }
        }
    }

    let normals: Vec<DVec3> = mesh.normals.chunks_exact(3).map(DVec3::from_slice).collect();
    let face_normals = mesh
        .normal_indices
        .chunks_exact(3)
        .map(|corners| {
            normals
                .get(corners[0] as usize)
                .copied()
                .ok_or_else(|| not_a_box("normal index out of range"))
        })
        .collect::<Result<Vec<_>>>()?;

    let uvs: Vec<[f64; 2]> = mesh.texcoords.chunks_exact(2).map(|uv| [uv[0], uv[1]]).collect();
    let uv_at = |index: u32| {
        uvs.get(index as usize)
            .copied()
            .ok_or_else(|| not_a_box("texture coordinate index out of range"))
    };
    let face_uvs = mesh
        .texcoord_indices
        .chunks_exact(3)
        .map(|corners| Ok([uv_at(corners[0])?, uv_at(corners[1])?, uv_at(corners[2])?]))
        .collect::<Result<Vec<_>>>()?;

    let material = mesh
        .material_id
        .and_then(|id| materials.get(id))
        .map(Material::from)
        .ok_or_else(|| Error::InvalidParameter("referenced material not found".to_string()))?;

    let profile = if face_normals.is_empty() {
        ExportProfile::Minimal
    } else {
        ExportProfile::Extended
    };

    Ok(LoadedBox {
        dimensions,
        color: material.diffuse,
        profile,
        mesh: canonical,
        face_normals,
        face_uvs,
        material,
        mtl_path: None,
    })
}

impl From<&tobj::Material> for Material {
    fn from(m: &tobj::Material) -> Self {
        Self {
            name: m.name.clone(),
            diffuse: Color(m.diffuse.unwrap_or_default()),
            ambient: Color(m.ambient.unwrap_or_default()),
            specular: Color(m.specular.unwrap_or_default()),
            shininess: m.shininess,
            opacity: m.dissolve.unwrap_or(1.0),
            illumination: m.illumination_model,
        }
    }
}
