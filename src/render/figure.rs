use nalgebra as na;
use serde::{Deserialize, Serialize};
use crate::types::*;
use crate::kinematics::{CircularTrajectory, PlanarRotation, SpatialRotation};
use crate::render::projection::ViewAngle;

/// Half-width of the plotted square/cube
pub const DEFAULT_EXTENT: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Green,
    Black,
    Gray,
}

impl Color {
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Blue => "#1f77b4",
            Color::Red => "#d62728",
            Color::Green => "#2ca02c",
            Color::Black => "#000000",
            Color::Gray => "#b0b0b0",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow2 {
    pub origin: na::Point2<f64>,
    pub tip: na::Point2<f64>,
    pub color: Color,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow3 {
    pub origin: na::Point3<f64>,
    pub tip: na::Point3<f64>,
    pub color: Color,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline2 {
    pub points: Vec<na::Point2<f64>>,
    pub color: Color,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker2 {
    pub point: na::Point2<f64>,
    pub color: Color,
    pub label: Option<String>,
}

/// A legend row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Square 2D plot on `[-extent, extent]²` with grid and origin cross-hairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanarFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub extent: f64,
    pub grid: bool,
    pub arrows: Vec<Arrow2>,
    pub polylines: Vec<Polyline2>,
    pub markers: Vec<Marker2>,
}

impl PlanarFigure {
    pub fn new(title: impl Into<String>, extent: f64) -> Self {
        Self {
            title: title.into(),
            x_label: "X".into(),
            y_label: "Y".into(),
            extent,
            grid: true,
            arrows: Vec::new(),
            polylines: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Unit vector at the rotation's angle, drawn from the origin
    pub fn rotation(rotation: &PlanarRotation, title: impl Into<String>, extent: f64) -> Self {
        let mut figure = Self::new(title, extent);
        figure.arrows.push(Arrow2 {
            origin: na::Point2::origin(),
            tip: na::Point2::from(rotation.direction()),
            color: Color::Blue,
            label: Some(format!("Angle: {}°", format_degrees(rotation.degrees()))),
        });
        figure
    }

    /// The sampled circle plus a marker at its centre
    pub fn circumduction(trajectory: &CircularTrajectory, title: impl Into<String>, extent: f64) -> Self {
        let mut figure = Self::new(title, extent);
        figure.polylines.push(Polyline2 {
            points: trajectory.to_vec(),
            color: Color::Blue,
            label: Some("Circular trajectory".into()),
        });
        figure.markers.push(Marker2 {
            point: trajectory.center(),
            color: Color::Red,
            label: Some("Center".into()),
        });
        figure
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        let arrows = self.arrows.iter().map(|a| (&a.label, a.color));
        let lines = self.polylines.iter().map(|l| (&l.label, l.color));
        let markers = self.markers.iter().map(|m| (&m.label, m.color));
        arrows
            .chain(lines)
            .chain(markers)
            .filter_map(|(label, color)| {
                label.as_ref().map(|label| LegendEntry { label: label.clone(), color })
            })
            .collect()
    }
}

/// Cube plot on `[-extent, extent]³` seen from `view`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialFigure {
    pub title: String,
    pub axis_labels: [String; 3],
    pub extent: f64,
    pub view: ViewAngle,
    pub arrows: Vec<Arrow3>,
}

impl SpatialFigure {
    pub fn new(title: impl Into<String>, extent: f64, view: ViewAngle) -> Self {
        Self {
            title: title.into(),
            axis_labels: ["X".into(), "Y".into(), "Z".into()],
            extent,
            view,
            arrows: Vec::new(),
        }
    }

    /// Images of the standard basis, coloured red/green/blue for X/Y/Z
    pub fn rotation(
        rotation: &SpatialRotation,
        title: impl Into<String>,
        extent: f64,
        view: ViewAngle,
    ) -> Self {
        let mut figure = Self::new(title, extent, view);
        let colors = [Color::Red, Color::Green, Color::Blue];
        let names = ["X axis", "Y axis", "Z axis"];

        for ((image, color), name) in rotation.basis_images().into_iter().zip(colors).zip(names) {
            figure.arrows.push(Arrow3 {
                origin: na::Point3::origin(),
                tip: na::Point3::from(image),
                color,
                label: Some(name.into()),
            });
        }
        figure
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        self.arrows
            .iter()
            .filter_map(|a| {
                a.label.as_ref().map(|label| LegendEntry { label: label.clone(), color: a.color })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Figure {
    Planar(PlanarFigure),
    Spatial(SpatialFigure),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Planar(f) => &f.title,
            Figure::Spatial(f) => &f.title,
        }
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        match self {
            Figure::Planar(f) => f.legend(),
            Figure::Spatial(f) => f.legend(),
        }
    }
}
