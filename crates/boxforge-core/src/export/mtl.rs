//! MTL material export

use crate::Result;
use crate::fmt_real;
use crate::material::Material;
use std::io::Write;

/// Write a single material record
pub fn write_mtl<W: Write>(writer: &mut W, material: &Material) -> Result<()> {
    writeln!(writer, "# Material definition")?;
    writeln!(writer, "newmtl {}", material.name)?;
    writeln!(writer, "Kd {}", material.diffuse)?;
    writeln!(writer, "Ka {}", material.ambient)?;
    writeln!(writer, "Ks {}", material.specular)?;
    if let Some(ns) = material.shininess {
        writeln!(writer, "Ns {}", fmt_real(ns))?;
    }
    writeln!(writer, "d {}", fmt_real(material.opacity))?;
    if let Some(illum) = material.illumination {
        writeln!(writer, "illum {}", illum)?;
    }
    Ok(())
}
