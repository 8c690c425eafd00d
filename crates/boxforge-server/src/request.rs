//! Request bodies accepted by the export routes

use crate::config::ServerConfig;
use crate::error::ApiError;
use boxforge_core::export::ExportProfile;
use boxforge_core::material::Color;
use boxforge_core::mesh::Dimensions;
use serde::Deserialize;

/// A number, or a string holding one (`"2.5"`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    fn to_f64(&self, field: &str) -> Result<f64, ApiError> {
        match self {
            Scalar::Number(n) => Ok(*n),
            Scalar::Text(text) => text.trim().parse().map_err(|_| {
                ApiError::new(format!("could not convert {} value '{}' to a number", field, text))
            }),
        }
    }
}

/// Body of `POST /create_obj`, `/download_obj` and `/download_zip`
///
/// Missing (or null) dimensions default to 1.0 cm, a missing color to green.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoxRequest {
    /// Width in centimeters
    #[serde(default)]
    pub x: Option<Scalar>,

    /// Height in centimeters
    #[serde(default)]
    pub y: Option<Scalar>,

    /// Depth in centimeters
    #[serde(default)]
    pub z: Option<Scalar>,

    /// Diffuse color as `[r, g, b]`
    #[serde(default)]
    pub color: Option<Vec<Scalar>>,

    /// "minimal" or "extended"; the server default applies when absent
    #[serde(default)]
    pub profile: Option<ExportProfile>,
}

/// Everything an export needs, with defaults applied and values checked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportJob {
    pub dimensions: Dimensions,
    pub color: Color,
    pub profile: ExportProfile,
}

impl BoxRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, ApiError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Apply defaults, coerce values and check them against the configured policy
    pub fn resolve(&self, config: &ServerConfig) -> Result<ExportJob, ApiError> {
        let length = |value: &Option<Scalar>, field: &str| -> Result<f64, ApiError> {
            value.as_ref().map_or(Ok(1.0), |v| v.to_f64(field))
        };
        let dimensions = Dimensions::new(
            length(&self.x, "x")?,
            length(&self.y, "y")?,
            length(&self.z, "z")?,
        );
        dimensions.validate(config.dimension_policy)?;

        let color = match &self.color {
            None => Color::default(),
            Some(channels) => {
                let channels = channels
                    .iter()
                    .map(|c| c.to_f64("color"))
                    .collect::<Result<Vec<f64>, ApiError>>()?;
                Color::from_slice(&channels)?
            }
        };

        Ok(ExportJob {
            dimensions,
            color,
            profile: self.profile.unwrap_or(config.profile),
        })
    }
}
