//! Zip packaging of exported artifacts

use crate::{Error, Result};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Bundle files into a zip archive at `zip_path`
///
/// Entries are stored flat under their file names so the OBJ's `mtllib`
/// reference still resolves after extraction. Source files are left in place.
pub fn bundle_archive<P: AsRef<Path>>(files: &[P], zip_path: &Path) -> Result<()> {
    let mut zip = ZipWriter::new(BufWriter::new(File::create(zip_path)?));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in files {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::InvalidParameter(format!("no usable file name in {}", path.display()))
            })?;

        zip.start_file(name, options)?;
        let mut source = BufReader::new(File::open(path)?);
        io::copy(&mut source, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}
