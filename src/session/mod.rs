//! Headless interactive session
//!
//! Stands in for the page: it knows which sliders each movement offers,
//! and turns one set of slider values into a [`Frame`]:
//! - header and range-of-motion caption
//! - the rotation matrix readout
//! - the figure to draw
//!
//! Every call recomputes from scratch; nothing is kept between interactions.

pub mod config;
pub mod controls;
pub mod frame;

pub use config::*;
pub use controls::*;
pub use frame::*;

use crate::types::*;
use crate::kinematics::*;
use crate::movement::{LimitsError, Movement};
use crate::render::{PlanarFigure, SpatialFigure, Figure};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Limits(#[from] LimitsError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("{movement} expects {expected} inputs, got {got}")]
    InputsMismatch {
        movement: Movement,
        expected: &'static str,
        got: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Slider step for every angle slider, in degrees
pub const ANGLE_STEP: f64 = 1.0;

const RADIUS_STEP: f64 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The sliders shown for `movement`, in display order
    pub fn sliders(&self, movement: Movement) -> Vec<Slider> {
        match movement {
            Movement::Circumduction => vec![
                Slider::new(
                    "Circumduction radius",
                    RADIUS_RANGE,
                    self.config.circumduction.radius,
                    RADIUS_STEP,
                ),
                Slider::new(
                    "Number of steps",
                    InputRange::new(MIN_STEPS as f64, MAX_STEPS as f64),
                    self.config.circumduction.steps as f64,
                    1.0,
                ),
            ],
            Movement::GeneralRotation => ["X", "Y", "Z"]
                .into_iter()
                .map(|axis| {
                    Slider::new(
                        format!("Rotation angle about {} (degrees)", axis),
                        InputRange::FULL_TURN,
                        0.0,
                        ANGLE_STEP,
                    )
                })
                .collect(),
            planar => match self.config.limits.range(planar) {
                // Planar sliders start at the lower end of the range
                Some(range) => vec![Slider::new(
                    format!("Angle for {}", planar.label().to_lowercase()),
                    range,
                    range.min,
                    ANGLE_STEP,
                )],
                None => Vec::new(),
            },
        }
    }

    /// Slider values before the user touches anything
    pub fn default_inputs(&self, movement: Movement) -> Inputs {
        match movement {
            Movement::Circumduction => Inputs::Circumduction {
                radius: self.config.circumduction.radius,
                steps: self.config.circumduction.steps,
            },
            Movement::GeneralRotation => Inputs::Spatial { x: 0.0, y: 0.0, z: 0.0 },
            planar => Inputs::Planar {
                angle: self
                    .config
                    .limits
                    .range(planar)
                    .map(|r| r.min)
                    .unwrap_or(0.0),
            },
        }
    }

    /// Recompute everything for one interaction
    pub fn render(&self, movement: Movement, inputs: &Inputs) -> Result<Frame, SessionError> {
        tracing::debug!(movement = movement.slug(), inputs = ?inputs, "rendering frame");

        let frame = match (movement, *inputs) {
            (Movement::Circumduction, Inputs::Circumduction { radius, steps }) => {
                self.circumduction_frame(radius, steps)
            }
            (Movement::GeneralRotation, Inputs::Spatial { x, y, z }) => self.spatial_frame(x, y, z),
            (planar, Inputs::Planar { angle }) if planar.is_planar() => self.planar_frame(planar, angle),
            (movement, inputs) => Err(SessionError::InputsMismatch {
                movement,
                expected: self.default_inputs(movement).kind(),
                got: inputs.kind(),
            }),
        };

        if let Err(error) = &frame {
            tracing::warn!(movement = movement.slug(), %error, "rejected input");
        }
        frame
    }

    pub fn render_default(&self, movement: Movement) -> Result<Frame, SessionError> {
        self.render(movement, &self.default_inputs(movement))
    }

    fn planar_frame(&self, movement: Movement, angle: f64) -> Result<Frame, SessionError> {
        let rotation = self.config.limits.rotation(movement, angle)?;
        let caption = self
            .config
            .limits
            .range(movement)
            .map(|r| format!("Limit (AAOS): {}° to {}°", format_degrees(r.min), format_degrees(r.max)));
        let header = format!("Movement: {}", movement.label());

        Ok(Frame {
            movement,
            title: self.config.title.clone(),
            credits: self.config.credits.clone(),
            caption,
            matrix: Some(MatrixReadout::so2(rotation.matrix(), self.config.plot.precision)),
            figure: Figure::Planar(PlanarFigure::rotation(&rotation, header.clone(), self.config.plot.extent)),
            header,
            trajectory: None,
        })
    }

    fn circumduction_frame(&self, radius: f64, steps: usize) -> Result<Frame, SessionError> {
        let trajectory = CircularTrajectory::new(radius, steps)?;
        let header = "Circumduction in R²".to_string();

        Ok(Frame {
            movement: Movement::Circumduction,
            title: self.config.title.clone(),
            credits: self.config.credits.clone(),
            caption: None,
            matrix: None,
            figure: Figure::Planar(PlanarFigure::circumduction(&trajectory, header.clone(), self.config.plot.extent)),
            header,
            trajectory: Some(trajectory),
        })
    }

    fn spatial_frame(&self, x: f64, y: f64, z: f64) -> Result<Frame, SessionError> {
        let rotation = SpatialRotation::new(EulerAngles::from_slider_degrees(x, y, z)?);
        let header = "Rotations in SO(3)".to_string();

        Ok(Frame {
            movement: Movement::GeneralRotation,
            title: self.config.title.clone(),
            credits: self.config.credits.clone(),
            caption: None,
            matrix: Some(MatrixReadout::so3(rotation.matrix(), self.config.plot.precision)),
            figure: Figure::Spatial(SpatialFigure::rotation(
                &rotation,
                header.clone(),
                self.config.plot.extent,
                self.config.plot.view,
            )),
            header,
            trajectory: None,
        })
    }
}
