use std::fmt;
use nalgebra as na;
use uom::si::{angle::degree, f64::Angle};

#[derive(Debug)]
pub struct DisplayAngle(pub Angle);

/// Prints a 2x2 matrix as `[[a b]\n [c d]]`, aligned per column
#[derive(Debug)]
pub struct DisplayMatrix2<'a>(pub &'a na::Matrix2<f64>);

/// Prints a 3x3 matrix as `[[a b c]\n [d e f]\n [g h i]]`, aligned per column
#[derive(Debug)]
pub struct DisplayMatrix3<'a>(pub &'a na::Matrix3<f64>);

impl fmt::Display for DisplayAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.0.get::<degree>())
    }
}

impl fmt::Display for DisplayMatrix2<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.0.row_iter().map(|r| r.iter().copied().collect::<Vec<f64>>()).collect())
    }
}

impl fmt::Display for DisplayMatrix3<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.0.row_iter().map(|r| r.iter().copied().collect::<Vec<f64>>()).collect())
    }
}

/// Precision defaults to 4 decimals; `{:.2}` overrides it
fn write_rows(f: &mut fmt::Formatter<'_>, rows: Vec<Vec<f64>>) -> fmt::Result {
    let precision = f.precision().unwrap_or(4);

    // -0.0000 reads badly next to a clean zero
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| {
                    let v = if v.abs() < 0.5 * 10f64.powi(-(precision as i32)) { 0.0 } else { *v };
                    format!("{:.*}", precision, v)
                })
                .collect()
        })
        .collect();

    let width = cells.iter().flatten().map(|c| c.len()).max().unwrap_or(0);

    for (i, row) in cells.iter().enumerate() {
        f.write_str(if i == 0 { "[[" } else { " [" })?;
        for (j, cell) in row.iter().enumerate() {
            if j > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:>width$}", cell, width = width)?;
        }
        f.write_str("]")?;
        if i + 1 < cells.len() {
            f.write_str("\n")?;
        }
    }
    f.write_str("]")
}
