use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use crate::kinematics::{CircularTrajectory, MAX_STEPS, MIN_STEPS, RADIUS_RANGE};
use crate::movement::MotionLimits;
use crate::render::{DEFAULT_EXTENT, SvgRenderer, ViewAngle};
use crate::session::SessionError;

/// Largest half-width a plot may be configured with
pub const MAX_EXTENT: f64 = 10.0;

/// Most decimals the matrix readout may print
pub const MAX_PRECISION: usize = 12;

/// Everything a session can be configured with. Every field has a default,
/// so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Page title
    pub title: String,

    /// Lines shown under the title (author, advisor, course); empty unless configured
    pub credits: Vec<String>,

    /// Range of motion for the planar movements
    pub limits: MotionLimits,

    pub plot: PlotConfig,

    pub circumduction: CircumductionDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Half-width of the plotted square/cube
    pub extent: f64,

    /// Decimals in the printed matrix
    pub precision: usize,

    /// Camera for the SO(3) figure
    pub view: ViewAngle,

    pub svg: SvgRenderer,
}

/// Initial position of the circumduction sliders
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircumductionDefaults {
    pub radius: f64,
    pub steps: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            title: "Simulation of movements in SO(2) and SO(3)".into(),
            credits: Vec::new(),
            limits: MotionLimits::aaos(),
            plot: PlotConfig::default(),
            circumduction: CircumductionDefaults::default(),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            extent: DEFAULT_EXTENT,
            precision: 4,
            view: ViewAngle::default(),
            svg: SvgRenderer::default(),
        }
    }
}

impl Default for CircumductionDefaults {
    fn default() -> Self {
        Self {
            radius: 1.0,
            steps: 50,
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, SessionError> {
        let config: SessionConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.as_ref().display(), "loaded session config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, SessionError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        self.limits.validate()?;

        if !self.plot.extent.is_finite() || self.plot.extent <= 0.0 || self.plot.extent > MAX_EXTENT {
            return Err(SessionError::InvalidConfig(format!(
                "plot extent must be in (0, {}], got {}",
                MAX_EXTENT, self.plot.extent
            )));
        }
        if self.plot.precision > MAX_PRECISION {
            return Err(SessionError::InvalidConfig(format!(
                "matrix precision must be at most {}, got {}",
                MAX_PRECISION, self.plot.precision
            )));
        }
        if self.plot.svg.width == 0 || self.plot.svg.height == 0 {
            return Err(SessionError::InvalidConfig("SVG size must be non-zero".into()));
        }

        // The initial sliders have to sit inside their own bounds
        CircularTrajectory::new(self.circumduction.radius, self.circumduction.steps).map_err(|e| {
            SessionError::InvalidConfig(format!(
                "circumduction defaults (radius {}, steps {}) must stay within radius {} and steps {}..={}: {}",
                self.circumduction.radius, self.circumduction.steps, RADIUS_RANGE, MIN_STEPS, MAX_STEPS, e
            ))
        })?;

        Ok(())
    }
}
