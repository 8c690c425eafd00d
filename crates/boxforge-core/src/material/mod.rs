//! Material definitions for exported boxes
//!
//! A box carries exactly one material record. Only the diffuse color comes
//! from the caller; the remaining coefficients are fixed per export profile.

use crate::export::ExportProfile;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Name of the single material every box references
pub const MATERIAL_NAME: &str = "material0";

/// Specular exponent used by the extended profile
pub const EXTENDED_SHININESS: f64 = 96.078431;

/// Diffuse RGB color, each channel conventionally in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f64; 3]);

impl Default for Color {
    /// Green
    fn default() -> Self {
        Self([0.0, 1.0, 0.0])
    }
}

impl Color {
    pub const BLACK: Color = Color([0.0, 0.0, 0.0]);

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self([r, g, b])
    }

    /// Gray with all channels equal
    pub fn splat(value: f64) -> Self {
        Self([value; 3])
    }

    /// Build a color from a slice that must hold exactly three finite channels
    pub fn from_slice(channels: &[f64]) -> Result<Self> {
        let [r, g, b] = *channels else {
            return Err(Error::InvalidParameter(format!(
                "color needs exactly 3 components, got {}",
                channels.len()
            )));
        };
        if let Some(bad) = channels.iter().find(|c| !c.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "color components must be finite numbers, got {}",
                bad
            )));
        }
        Ok(Self([r, g, b]))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            crate::fmt_real(self.0[0]),
            crate::fmt_real(self.0[1]),
            crate::fmt_real(self.0[2])
        )
    }
}

/// Parses `r,g,b` (commas and/or whitespace as separators)
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let channels = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<f64>().map_err(|_| {
                    Error::InvalidParameter(format!("'{}' is not a color component", part))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        Self::from_slice(&channels)
    }
}

/// A Wavefront MTL material record
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    /// `Kd`
    pub diffuse: Color,
    /// `Ka`
    pub ambient: Color,
    /// `Ks`
    pub specular: Color,
    /// `Ns`, omitted when `None`
    pub shininess: Option<f64>,
    /// `d`
    pub opacity: f64,
    /// `illum`, omitted when `None`
    pub illumination: Option<u8>,
}

impl Material {
    /// The material record a profile writes for a given diffuse color
    pub fn for_profile(diffuse: Color, profile: ExportProfile) -> Self {
        match profile {
            ExportProfile::Minimal => Self {
                name: MATERIAL_NAME.to_string(),
                diffuse,
                ambient: Color::BLACK,
                specular: Color::BLACK,
                shininess: None,
                opacity: 1.0,
                illumination: None,
            },
            ExportProfile::Extended => Self {
                name: MATERIAL_NAME.to_string(),
                diffuse,
                ambient: Color::splat(0.2),
                specular: Color::splat(0.5),
                shininess: Some(EXTENDED_SHININESS),
                opacity: 1.0,
                // Highlight on
                illumination: Some(2),
            },
        }
    }

    /// An empty record with neutral coefficients, as a reader starts from
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            diffuse: Color::BLACK,
            ambient: Color::BLACK,
            specular: Color::BLACK,
            shininess: None,
            opacity: 1.0,
            illumination: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color_is_green() {
        assert_eq!(Color::default(), Color::new(0.0, 1.0, 0.0));
        assert_eq!(Color::default().to_string(), "0.0 1.0 0.0");
    }

    #[test]
    fn test_color_from_str() {
        assert_eq!("1,0,0".parse::<Color>().ok(), Some(Color::new(1.0, 0.0, 0.0)));
        assert_eq!(
            "0.2 0.4, 0.6".parse::<Color>().ok(),
            Some(Color::new(0.2, 0.4, 0.6))
        );
        assert!("1,0".parse::<Color>().is_err());
        assert!("red,0,0".parse::<Color>().is_err());
        assert!("NaN,0,0".parse::<Color>().is_err());
        assert!("0,inf,0".parse::<Color>().is_err());
    }

    #[test]
    fn test_from_slice_rejects_non_finite() {
        assert!(Color::from_slice(&[0.5, 0.5, 0.5]).is_ok());
        assert!(matches!(
            Color::from_slice(&[f64::NAN, 0.0, 0.0]),
            Err(Error::InvalidParameter(_))
        ));
        assert!(Color::from_slice(&[0.0, 0.0, f64::NEG_INFINITY]).is_err());
    }

    #[test]
    fn test_profile_coefficients() {
        let red = Color::new(1.0, 0.0, 0.0);

        let minimal = Material::for_profile(red, ExportProfile::Minimal);
        assert_eq!(minimal.name, MATERIAL_NAME);
        assert_eq!(minimal.ambient, Color::BLACK);
        assert_eq!(minimal.specular, Color::BLACK);
        assert_eq!(minimal.shininess, None);
        assert_eq!(minimal.illumination, None);

        let extended = Material::for_profile(red, ExportProfile::Extended);
        assert_eq!(extended.diffuse, red);
        assert_eq!(extended.ambient, Color::splat(0.2));
        assert_eq!(extended.specular, Color::splat(0.5));
        assert_eq!(extended.shininess, Some(EXTENDED_SHININESS));
        assert_eq!(extended.illumination, Some(2));
    }
}
