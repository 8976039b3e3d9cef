use nalgebra as na;
use serde::Serialize;
use std::f64::consts::TAU;
use std::io;
use crate::types::*;
use crate::types::range::check_finite;

/// Radius bounds offered for circumduction
pub const RADIUS_RANGE: InputRange = InputRange::new(0.1, 1.5);

/// Smallest sampled circle the generator accepts
pub const MIN_STEPS: usize = 10;

/// Largest sampled circle the generator accepts
pub const MAX_STEPS: usize = 100;

/// Circle swept by the hand during circumduction, centred on the origin.
///
/// Samples are spaced uniformly over the closed interval [0, 2π], so the
/// first and last points coincide at (r, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircularTrajectory {
    radius: f64,
    steps: usize,
}

/// One exported trajectory sample
#[derive(Debug, Clone, Copy, Serialize)]
struct TrajectoryRecord {
    index: usize,
    theta: f64,
    x: f64,
    y: f64,
}

impl CircularTrajectory {
    /// Build a trajectory inside the circumduction slider bounds
    pub fn new(radius: f64, steps: usize) -> Result<Self, InputError> {
        let radius = RADIUS_RANGE.check("radius", radius)?;
        if !(MIN_STEPS..=MAX_STEPS).contains(&steps) {
            return Err(InputError::StepsOutOfRange {
                value: steps,
                min: MIN_STEPS,
                max: MAX_STEPS,
            });
        }
        Ok(Self { radius, steps })
    }

    /// Build a trajectory without the slider bounds. Needs a positive radius
    /// and at least two samples.
    pub fn unbounded(radius: f64, steps: usize) -> Result<Self, InputError> {
        let radius = check_finite("radius", radius)?;
        if radius <= 0.0 {
            return Err(InputError::OutOfRange {
                field: "radius".into(),
                value: radius,
                min: 0.0,
                max: f64::INFINITY,
            });
        }
        if steps < 2 {
            return Err(InputError::StepsOutOfRange {
                value: steps,
                min: 2,
                max: usize::MAX,
            });
        }
        Ok(Self { radius, steps })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn center(&self) -> na::Point2<f64> {
        na::Point2::origin()
    }

    /// Parameter of sample `i`
    pub fn theta(&self, i: usize) -> f64 {
        TAU * i as f64 / (self.steps - 1) as f64
    }

    /// Iterate the samples in order. Each call starts again at θ = 0.
    pub fn points(&self) -> impl ExactSizeIterator<Item = na::Point2<f64>> + '_ {
        (0..self.steps).map(move |i| {
            let theta = self.theta(i);
            na::Point2::new(self.radius * theta.cos(), self.radius * theta.sin())
        })
    }

    pub fn to_vec(&self) -> Vec<na::Point2<f64>> {
        self.points().collect()
    }

    /// Write `index,theta,x,y` rows with a header line
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        for (index, point) in self.points().enumerate() {
            wtr.serialize(TrajectoryRecord {
                index,
                theta: self.theta(index),
                x: point.x,
                y: point.y,
            })?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_point_count_matches_steps() {
        let t = CircularTrajectory::new(1.0, 50).unwrap();
        assert_eq!(t.points().len(), 50);
        assert_eq!(t.to_vec().len(), 50);
    }

    #[test]
    fn test_sweep_is_closed() {
        let t = CircularTrajectory::new(0.8, 10).unwrap();
        let points = t.to_vec();
        let first = points[0];
        let last = points[points.len() - 1];
        assert_relative_eq!(first, na::Point2::new(0.8, 0.0), epsilon = 1e-12);
        assert_relative_eq!(last, na::Point2::new(0.8, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_points_restart() {
        let t = CircularTrajectory::new(1.2, 12).unwrap();
        let first_pass: Vec<_> = t.points().collect();
        let second_pass: Vec<_> = t.points().collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_rejects_radius_outside_slider() {
        assert!(matches!(
            CircularTrajectory::new(0.05, 50),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            CircularTrajectory::new(1.6, 50),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            CircularTrajectory::new(f64::NAN, 50),
            Err(InputError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_rejects_step_count_outside_slider() {
        assert_eq!(
            CircularTrajectory::new(1.0, 9).unwrap_err(),
            InputError::StepsOutOfRange { value: 9, min: 10, max: 100 }
        );
        assert!(CircularTrajectory::new(1.0, 101).is_err());
        assert!(CircularTrajectory::new(1.0, 100).is_ok());
    }

    #[test]
    fn test_unbounded_allows_larger_circles() {
        let t = CircularTrajectory::unbounded(5.0, 400).unwrap();
        assert_eq!(t.points().len(), 400);
        assert!(CircularTrajectory::unbounded(0.0, 10).is_err());
        assert!(CircularTrajectory::unbounded(1.0, 1).is_err());
    }

    #[test]
    fn test_csv_export() {
        let t = CircularTrajectory::new(1.0, 10).unwrap();
        let mut buffer = Vec::new();
        t.write_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("index,theta,x,y"));
        assert_eq!(lines.next(), Some("0,0.0,1.0,0.0"));
        assert_eq!(text.lines().count(), 11);
    }

    proptest! {
        #[test]
        fn prop_points_lie_on_circle(radius in 0.1f64..=1.5, steps in 10usize..=100) {
            let t = CircularTrajectory::new(radius, steps).unwrap();
            prop_assert_eq!(t.points().len(), steps);
            for p in t.points() {
                prop_assert!((p.x * p.x + p.y * p.y - radius * radius).abs() < 1e-12);
            }
        }
    }
}
