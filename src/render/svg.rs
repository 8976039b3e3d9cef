use nalgebra as na;
use serde::{Deserialize, Serialize};
use crate::render::figure::*;

/// Writes figures as standalone SVG documents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgRenderer {
    pub width: u32,
    pub height: u32,
    /// Space around the plot area, in pixels
    pub margin: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: 480,
            height: 480,
            margin: 48.0,
        }
    }
}

/// Maps plot coordinates onto the pixel plot area (y flipped)
#[derive(Debug, Clone, Copy)]
struct Viewport {
    left: f64,
    top: f64,
    size: f64,
    extent: f64,
}

impl Viewport {
    fn to_px(&self, p: &na::Point2<f64>) -> (f64, f64) {
        let scale = self.size / (2.0 * self.extent);
        (
            self.left + (p.x + self.extent) * scale,
            self.top + (self.extent - p.y) * scale,
        )
    }
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn render(&self, figure: &Figure) -> String {
        match figure {
            Figure::Planar(f) => self.render_planar(f),
            Figure::Spatial(f) => self.render_spatial(f),
        }
    }

    fn viewport(&self, extent: f64) -> Viewport {
        let w = self.width as f64 - 2.0 * self.margin;
        let h = self.height as f64 - 2.0 * self.margin;
        let size = w.min(h).max(1.0);
        Viewport {
            left: (self.width as f64 - size) / 2.0,
            top: (self.height as f64 - size) / 2.0,
            size,
            extent: if extent > 0.0 { extent } else { 1.0 },
        }
    }

    pub fn render_planar(&self, figure: &PlanarFigure) -> String {
        let vp = self.viewport(figure.extent);
        let mut out = self.open_document(&figure.title);

        if figure.grid {
            for tick in ticks(vp.extent) {
                let (x, _) = vp.to_px(&na::Point2::new(tick, 0.0));
                let (_, y) = vp.to_px(&na::Point2::new(0.0, tick));
                out.push_str(&line_px(x, vp.top, x, vp.top + vp.size, Color::Gray, 0.5));
                out.push_str(&line_px(vp.left, y, vp.left + vp.size, y, Color::Gray, 0.5));
                out.push_str(&text_px(x, vp.top + vp.size + 16.0, "middle", 11, &format_tick(tick)));
                out.push_str(&text_px(vp.left - 6.0, y + 4.0, "end", 11, &format_tick(tick)));
            }
        }

        // axhline / axvline through the origin
        let (ox, oy) = vp.to_px(&na::Point2::origin());
        out.push_str(&line_px(vp.left, oy, vp.left + vp.size, oy, Color::Black, 0.5));
        out.push_str(&line_px(ox, vp.top, ox, vp.top + vp.size, Color::Black, 0.5));
        out.push_str(&frame_px(&vp));

        for polyline in &figure.polylines {
            let points: Vec<String> = polyline
                .points
                .iter()
                .map(|p| {
                    let (x, y) = vp.to_px(p);
                    format!("{:.2},{:.2}", x, y)
                })
                .collect();
            out.push_str(&format!(
                "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\"/>\n",
                points.join(" "),
                polyline.color.hex()
            ));
        }

        for marker in &figure.markers {
            let (x, y) = vp.to_px(&marker.point);
            out.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"4\" fill=\"{}\"/>\n",
                x,
                y,
                marker.color.hex()
            ));
        }

        for arrow in &figure.arrows {
            out.push_str(&arrow_px(vp.to_px(&arrow.origin), vp.to_px(&arrow.tip), arrow.color));
        }

        out.push_str(&text_px(vp.left + vp.size / 2.0, self.height as f64 - 10.0, "middle", 13, &figure.x_label));
        out.push_str(&text_px(14.0, vp.top + vp.size / 2.0, "middle", 13, &figure.y_label));
        out.push_str(&legend_px(&vp, &figure.legend()));
        out.push_str("</svg>\n");
        out
    }

    pub fn render_spatial(&self, figure: &SpatialFigure) -> String {
        let view = figure.view;
        let e = if figure.extent > 0.0 { figure.extent } else { 1.0 };

        let corners: Vec<na::Point3<f64>> = (0..8)
            .map(|i| {
                na::Point3::new(
                    if i & 1 == 0 { -e } else { e },
                    if i & 2 == 0 { -e } else { e },
                    if i & 4 == 0 { -e } else { e },
                )
            })
            .collect();

        // Fit the projected cube into the plot area
        let reach = corners
            .iter()
            .map(|c| {
                let p = view.project(c);
                p.x.abs().max(p.y.abs())
            })
            .fold(0.0_f64, f64::max);
        let vp = self.viewport(reach);
        let mut out = self.open_document(&figure.title);

        for i in 0..8usize {
            for bit in [1usize, 2, 4] {
                let j = i | bit;
                if j != i {
                    let a = vp.to_px(&view.project(&corners[i]));
                    let b = vp.to_px(&view.project(&corners[j]));
                    out.push_str(&line_px(a.0, a.1, b.0, b.1, Color::Gray, 0.75));
                }
            }
        }

        // Axis names just past the positive end of each cube edge through the origin
        let axes = [na::Vector3::x(), na::Vector3::y(), na::Vector3::z()];
        for (axis, name) in axes.iter().zip(&figure.axis_labels) {
            let (x, y) = vp.to_px(&view.project(&na::Point3::from(axis * e * 1.1)));
            out.push_str(&text_px(x, y, "middle", 13, name));
        }

        // Farthest arrow first so nearer ones overlap it
        let mut arrows: Vec<&Arrow3> = figure.arrows.iter().collect();
        arrows.sort_by(|a, b| view.depth(&a.tip).total_cmp(&view.depth(&b.tip)));
        for arrow in arrows {
            let from = vp.to_px(&view.project(&arrow.origin));
            let to = vp.to_px(&view.project(&arrow.tip));
            out.push_str(&arrow_px(from, to, arrow.color));
        }

        out.push_str(&legend_px(&vp, &figure.legend()));
        out.push_str("</svg>\n");
        out
    }

    fn open_document(&self, title: &str) -> String {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
            w = self.width,
            h = self.height
        );
        out.push_str(&format!("<title>{}</title>\n", escape(title)));
        out.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>\n",
            self.width, self.height
        ));
        out.push_str(&text_px(self.width as f64 / 2.0, 24.0, "middle", 15, title));
        out
    }
}

fn legend_px(vp: &Viewport, entries: &[LegendEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let row = 18.0;
    let width = entries.iter().map(|e| e.label.chars().count()).max().unwrap_or(0) as f64 * 7.0 + 36.0;
    let height = entries.len() as f64 * row + 8.0;
    let x = vp.left + vp.size - width - 6.0;
    let y = vp.top + 6.0;

    let mut out = format!(
        "<g class=\"legend\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"#ffffff\" fill-opacity=\"0.85\" stroke=\"{}\"/>\n",
        x,
        y,
        width,
        height,
        Color::Gray.hex()
    );
    for (i, entry) in entries.iter().enumerate() {
        let cy = y + 4.0 + row * (i as f64 + 0.5);
        out.push_str(&line_px(x + 6.0, cy, x + 24.0, cy, entry.color, 2.0));
        out.push_str(&text_px(x + 30.0, cy + 4.0, "start", 12, &entry.label));
    }
    out.push_str("</g>\n");
    out
}

/// Half-unit grid positions inside `[-extent, extent]`
/// Most grid lines drawn on either side of the origin
const MAX_TICKS_PER_SIDE: f64 = 20.0;

/// Grid positions every 0.5, doubling the spacing for wide plots
fn ticks(extent: f64) -> Vec<f64> {
    if !extent.is_finite() || extent <= 0.0 {
        return vec![0.0];
    }
    let mut spacing = 0.5;
    while extent / spacing > MAX_TICKS_PER_SIDE {
        spacing *= 2.0;
    }
    let n = (extent / spacing).floor() as i64;
    (-n..=n).map(|i| i as f64 * spacing).collect()
}

fn format_tick(value: f64) -> String {
    format!("{:.1}", if value == 0.0 { 0.0 } else { value })
}

fn frame_px(vp: &Viewport) -> String {
    format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"{}\"/>\n",
        vp.left,
        vp.top,
        vp.size,
        vp.size,
        Color::Black.hex()
    )
}

fn line_px(x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) -> String {
    format!(
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
        x1,
        y1,
        x2,
        y2,
        color.hex(),
        width
    )
}

fn text_px(x: f64, y: f64, anchor: &str, size: u32, text: &str) -> String {
    format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\" font-size=\"{}\">{}</text>\n",
        x,
        y,
        anchor,
        size,
        escape(text)
    )
}

/// Shaft plus a filled head; degenerate arrows draw nothing
fn arrow_px(from: (f64, f64), to: (f64, f64), color: Color) -> String {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-6 {
        return String::new();
    }

    let head = 10.0_f64.min(len * 0.4);
    let (ux, uy) = (dx / len, dy / len);
    let base = (to.0 - ux * head, to.1 - uy * head);
    let half = head * 0.45;
    let left = (base.0 - uy * half, base.1 + ux * half);
    let right = (base.0 + uy * half, base.1 - ux * half);

    let mut out = line_px(from.0, from.1, base.0, base.1, color, 2.0);
    out.push_str(&format!(
        "<polygon points=\"{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}\" fill=\"{}\"/>\n",
        to.0,
        to.1,
        left.0,
        left.1,
        right.0,
        right.1,
        color.hex()
    ));
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::*;
    use crate::render::ViewAngle;

    #[test]
    fn test_viewport_maps_corners() {
        let vp = SvgRenderer::default().viewport(1.5);
        let (x0, y0) = vp.to_px(&na::Point2::new(-1.5, 1.5));
        let (x1, y1) = vp.to_px(&na::Point2::new(1.5, -1.5));
        assert_eq!((x0, y0), (48.0, 48.0));
        assert_eq!((x1, y1), (432.0, 432.0));
    }

    #[test]
    fn test_planar_document() {
        let rotation = PlanarRotation::from_degrees(90.0).unwrap();
        let figure = Figure::Planar(PlanarFigure::rotation(&rotation, "Movement: Flexion", DEFAULT_EXTENT));
        let svg = SvgRenderer::default().render(&figure);

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("<title>Movement: Flexion</title>"));
        assert!(svg.contains("Angle: 90°"));
        assert_eq!(svg.matches("<polygon").count(), 1);
    }

    #[test]
    fn test_circumduction_document() {
        let trajectory = CircularTrajectory::new(1.0, 20).unwrap();
        let figure = Figure::Planar(PlanarFigure::circumduction(&trajectory, "Circumduction", DEFAULT_EXTENT));
        let svg = SvgRenderer::default().render(&figure);

        let polyline = svg.lines().find(|l| l.starts_with("<polyline")).unwrap();
        let start = polyline.find("points=\"").unwrap() + "points=\"".len();
        let end = start + polyline[start..].find('"').unwrap();
        assert_eq!(polyline[start..end].split(' ').count(), 20);
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn test_spatial_document_has_three_arrows() {
        let rotation = SpatialRotation::new(EulerAngles::from_degrees(30.0, 0.0, 0.0).unwrap());
        let figure = Figure::Spatial(SpatialFigure::rotation(&rotation, "SO(3)", DEFAULT_EXTENT, ViewAngle::default()));
        let svg = SvgRenderer::default().render(&figure);

        assert_eq!(svg.matches("<polygon").count(), 3);
        for label in ["X axis", "Y axis", "Z axis"] {
            assert!(svg.contains(label));
        }
    }

    #[test]
    fn test_text_is_escaped() {
        let figure = Figure::Planar(PlanarFigure::new("a < b & c", 1.0));
        let svg = SvgRenderer::default().render(&figure);
        assert!(svg.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_ticks_stay_bounded_for_wide_plots() {
        let wide = ticks(1e12);
        assert!(wide.len() <= 41);
        assert_eq!(wide[wide.len() / 2], 0.0);
        assert_eq!(ticks(20.0).len(), 41);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ticks(1.5), vec![-1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5]);
        assert_eq!(ticks(f64::NAN), vec![0.0]);
    }
}
