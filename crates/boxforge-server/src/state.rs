//! Shared state and blocking export jobs
//!
//! Exports write files synchronously, so each one runs on tokio's blocking
//! pool. Nothing mutable is shared between requests; concurrent requests stay
//! apart only through their file names.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use boxforge_core::export::{
    ExportName, ExportResult, bundle_archive, export_box, material_path_for,
};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::request::ExportJob;

/// Handle shared by all route handlers
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Write the OBJ/MTL pair for a job under `name` in the output directory
    pub async fn export(&self, job: ExportJob, name: ExportName) -> Result<ExportResult, ApiError> {
        let obj_path = name.obj_path(&self.config.output_dir);
        let target = obj_path.clone();
        let result = tokio::task::spawn_blocking(move || {
            export_box(&job.dimensions, job.color, job.profile, &target)
        })
        .await?;

        match result {
            Ok(result) => {
                tracing::info!(
                    obj = %result.obj_path.display(),
                    profile = %result.profile,
                    "exported box"
                );
                Ok(result)
            }
            Err(e) => {
                match leftover_material(&obj_path) {
                    Some(mtl) => tracing::warn!(
                        name = name.stem(),
                        mtl = %mtl.display(),
                        "export failed; material file left behind"
                    ),
                    None => tracing::warn!(name = name.stem(), error = %e, "export failed"),
                }
                Err(e.into())
            }
        }
    }

    /// Export a job and zip both artifacts, returning the archive path
    pub async fn export_archive(
        &self,
        job: ExportJob,
        name: ExportName,
    ) -> Result<(ExportResult, PathBuf), ApiError> {
        let result = self.export(job, name.clone()).await?;

        let zip_path = name.zip_path(&self.config.output_dir);
        let sources = result.artifacts().map(|p| p.to_path_buf());
        let target = zip_path.clone();
        let bundled = tokio::task::spawn_blocking(move || bundle_archive(&sources, &target)).await?;

        if let Err(e) = bundled {
            tracing::warn!(
                obj = %result.obj_path.display(),
                mtl = %result.mtl_path.display(),
                "archive failed; source files remain on disk"
            );
            return Err(e.into());
        }

        tracing::info!(zip = %zip_path.display(), "bundled archive");
        Ok((result, zip_path))
    }
}

/// The material file of a pair whose geometry file never got written
fn leftover_material(obj_path: &Path) -> Option<PathBuf> {
    let mtl = material_path_for(obj_path);
    (mtl.is_file() && !obj_path.is_file()).then_some(mtl)
}
