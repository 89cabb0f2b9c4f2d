//! Recursive subdivision of a seed triangle into rows of smaller triangles.
//!
//! Each expansion replaces a triangle by `layers` rows of children whose radius is `1 / layers`
//! of the parent's. Row `k` holds `k + 1` children. Children are drawn once they are no larger than
//! a pixel, and expanded again otherwise, so recursion depth follows the raster resolution rather
//! than a fixed level count.

use std::f64::consts::TAU;

use log::trace;

use crate::{
    canvas::Canvas,
    error::{FractalError, GenerateError},
    geometry::Point,
    triangle::{check_radius, Triangle},
};

/// Counters collected over one call to [`generate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerateStats {
    /// Triangles filled on the canvas.
    pub drawn: usize,
    /// Triangles that were subdivided, the seed included.
    pub expansions: usize,
    /// Deepest level of expansion reached, 1 being the seed's own expansion.
    pub max_depth: usize,
    /// Most child triangles held at once.
    pub widest_row: usize,
}

fn check_layers(layers: u32) -> Result<(), FractalError> {
    if layers < 2 {
        Err(FractalError::TooFewLayers { layers })
    } else {
        Ok(())
    }
}

/// All triangles of one row, given the row's seed and its index within the expansion.
///
/// Triangles in a row share the seed's radius and are spaced one edge length apart. Even rows are
/// centered on the seed, which is part of the row. Odd rows straddle it. Either way a row holds
/// `row_index + 1` triangles.
pub fn generate_row(seed: &Triangle, row_index: i64) -> Result<Vec<Triangle>, FractalError> {
    if row_index < 0 {
        return Err(FractalError::NegativeRowIndex { row_index });
    }

    let Point { x, y } = seed.centroid;
    let radius = seed.radius;
    let radius_component = radius * (TAU / 12.0).cos();
    let x_left = x - radius_component;
    let x_right = x + radius_component;
    let mut row = Vec::with_capacity(row_index as usize + 1);

    if row_index % 2 == 0 {
        row.push(*seed);
        for i in 1..=row_index / 2 {
            let dx = i as f64 * 2.0 * radius_component;
            row.push(Triangle::new(Point::new(x - dx, y), radius));
            row.push(Triangle::new(Point::new(x + dx, y), radius));
        }
    } else {
        for i in 1..=(row_index + 1) / 2 {
            let dx = i as f64 * 2.0 * radius_component;
            row.push(Triangle::new(Point::new(x_right - dx, y), radius));
            row.push(Triangle::new(Point::new(x_left + dx, y), radius));
        }
    }

    Ok(row)
}

/// The children of one expansion of `seed`, row by row, without drawing anything.
pub fn expand(seed: &Triangle, layers: u32) -> Result<Vec<Triangle>, FractalError> {
    check_layers(layers)?;
    check_radius(seed.radius)?;
    let mut triangles = Vec::new();
    for (row_index, row_seed) in row_seeds(seed, layers) {
        triangles.extend(generate_row(&row_seed, row_index)?);
    }
    Ok(triangles)
}

/// The first triangle of every row of one expansion, with its row index.
fn row_seeds(seed: &Triangle, layers: u32) -> impl Iterator<Item = (i64, Triangle)> {
    let top = seed.top_vertex();
    let next_radius = seed.radius / layers as f64;
    let step = next_radius * (1.0 + (TAU / 12.0).sin());

    // Rows sit at next_radius, next_radius + step, ... strictly below the seed's height.
    let rows = ((seed.height() - next_radius) / step).ceil().max(0.0) as i64;
    (0..rows).map(move |row_index| {
        let r_y = next_radius + row_index as f64 * step;
        (row_index, Triangle::new(Point::new(top.x, top.y + r_y), next_radius))
    })
}

/// Renders the fractal grown from `seed` onto `canvas`.
///
/// The seed itself is always expanded. Every child that fits in a pixel is drawn, every other child
/// is expanded in turn with the same `layers`. Arguments are validated before the canvas is touched.
pub fn generate(canvas: &mut Canvas, seed: &Triangle, layers: u32) -> Result<GenerateStats, GenerateError> {
    check_layers(layers)?;
    check_radius(seed.radius)?;

    let mut stats = GenerateStats::default();
    subdivide(canvas, seed, layers, 1, &mut stats)?;
    Ok(stats)
}

fn subdivide(
    canvas: &mut Canvas,
    seed: &Triangle,
    layers: u32,
    depth: usize,
    stats: &mut GenerateStats,
) -> Result<(), GenerateError> {
    stats.expansions += 1;
    stats.max_depth = stats.max_depth.max(depth);
    trace!("expanding {} into {} rows at depth {}", seed, layers, depth);

    let max_radius = canvas.max_radius();
    // One row at a time, so memory grows with layers rather than with layers squared
    for (row_index, row_seed) in row_seeds(seed, layers) {
        let row = generate_row(&row_seed, row_index)?;
        stats.widest_row = stats.widest_row.max(row.len());
        for child in &row {
            if child.draw_if_small(canvas, max_radius)? {
                stats.drawn += 1;
            } else {
                subdivide(canvas, child, layers, depth + 1, stats)?;
            }
        }
    }
    Ok(())
}
