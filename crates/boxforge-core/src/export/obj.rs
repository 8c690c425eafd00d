//! OBJ geometry export

use super::ExportProfile;
use crate::fmt_real;
use crate::material::MATERIAL_NAME;
use crate::mesh::{Dimensions, Mesh, Side};
use crate::{Error, Result};
use std::io::Write;

/// Corners of the unit quad, written as `vt` lines by the extended profile
pub const PLACEHOLDER_UVS: [[f64; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Write a box mesh in OBJ form
///
/// `mtl_name` is written verbatim after `mtllib` and should be a bare file
/// name. The extended profile pairs consecutive triangles with one side
/// normal each, so it only accepts the 12-triangle box layout.
pub fn write_obj<W: Write>(
    writer: &mut W,
    mesh: &Mesh,
    dims: &Dimensions,
    mtl_name: &str,
    profile: ExportProfile,
) -> Result<()> {
    let extended = profile == ExportProfile::Extended;
    if extended && mesh.triangle_count() != Side::ALL.len() * 2 {
        return Err(Error::InvalidParameter(format!(
            "extended profile needs 12 triangles, mesh has {}",
            mesh.triangle_count()
        )));
    }

    // Header
    writeln!(writer, "# Box mesh generated from dimensions")?;
    writeln!(
        writer,
        "# Dimensions: {}cm x {}cm x {}cm",
        fmt_real(dims.width),
        fmt_real(dims.height),
        fmt_real(dims.depth)
    )?;
    writeln!(writer)?;

    writeln!(writer, "mtllib {}", mtl_name)?;
    writeln!(writer)?;

    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", fmt_real(v.x), fmt_real(v.y), fmt_real(v.z))?;
    }
    writeln!(writer)?;

    if extended {
        for [u, v] in PLACEHOLDER_UVS {
            writeln!(writer, "vt {} {}", fmt_real(u), fmt_real(v))?;
        }
        writeln!(writer)?;

        for side in Side::ALL {
            let n = side.normal();
            writeln!(writer, "vn {} {} {}", fmt_real(n.x), fmt_real(n.y), fmt_real(n.z))?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "usemtl {}", MATERIAL_NAME)?;
    if extended {
        writeln!(writer, "s 1")?;
    }

    // Faces (OBJ uses 1-based indexing)
    for (i, face) in mesh.faces.iter().enumerate() {
        let [a, b, c] = face.one_based();
        if extended {
            let n = i / 2 + 1;
            writeln!(writer, "f {a}/1/{n} {b}/2/{n} {c}/3/{n}")?;
        } else {
            writeln!(writer, "f {} {} {}", a, b, c)?;
        }
    }

    Ok(())
}
