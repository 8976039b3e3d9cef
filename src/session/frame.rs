use nalgebra as na;
use serde::Serialize;
use std::fs;
use std::path::Path;
use crate::types::*;
use crate::kinematics::CircularTrajectory;
use crate::movement::Movement;
use crate::render::{Figure, SvgRenderer};
use crate::session::SessionError;

/// A printed rotation matrix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixReadout {
    pub heading: String,
    /// Row-major entries
    pub rows: Vec<Vec<f64>>,
    /// Bracketed text form, as shown on the page
    pub text: String,
}

impl MatrixReadout {
    pub fn so2(matrix: &na::Matrix2<f64>, precision: usize) -> Self {
        Self {
            heading: "SO(2) rotation matrix:".into(),
            rows: matrix.row_iter().map(|r| r.iter().copied().collect::<Vec<f64>>()).collect(),
            text: format!("{:.*}", precision, DisplayMatrix2(matrix)),
        }
    }

    pub fn so3(matrix: &na::Matrix3<f64>, precision: usize) -> Self {
        Self {
            heading: "SO(3) rotation matrix:".into(),
            rows: matrix.row_iter().map(|r| r.iter().copied().collect::<Vec<f64>>()).collect(),
            text: format!("{:.*}", precision, DisplayMatrix3(matrix)),
        }
    }
}

/// Everything one interaction produces: page text, matrix and figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub movement: Movement,
    pub title: String,
    pub credits: Vec<String>,
    pub header: String,
    /// Range-of-motion line for planar movements
    pub caption: Option<String>,
    pub matrix: Option<MatrixReadout>,
    pub figure: Figure,
    #[serde(skip)]
    pub trajectory: Option<CircularTrajectory>,
}

impl Frame {
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_svg(&self, renderer: &SvgRenderer) -> String {
        renderer.render(&self.figure)
    }

    /// Plain-text page: title, credits, header, caption, matrix
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.title.clone()];
        lines.extend(self.credits.iter().cloned());
        lines.push(String::new());
        lines.push(self.header.clone());
        if let Some(caption) = &self.caption {
            lines.push(caption.clone());
        }
        if let Some(matrix) = &self.matrix {
            lines.push(matrix.heading.clone());
            lines.push(matrix.text.clone());
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    pub fn write_svg(&self, renderer: &SvgRenderer, path: impl AsRef<Path>) -> Result<(), SessionError> {
        fs::write(path, self.to_svg(renderer))?;
        Ok(())
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Export the circumduction samples; `false` when this frame has none
    pub fn write_trajectory_csv(&self, path: impl AsRef<Path>) -> Result<bool, SessionError> {
        match &self.trajectory {
            Some(trajectory) => {
                let file = fs::File::create(path)?;
                trajectory.write_csv(file)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
