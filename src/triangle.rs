use std::{f64::consts::TAU, fmt::Display};

use crate::{
    canvas::Canvas,
    error::{FractalError, RenderError},
    geometry::{is_close, Point, PolarPoint, DEGREES},
};

/// An upward pointing equilateral triangle, described by its centroid and the distance from the
/// centroid to any of its vertices.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub centroid: Point,
    pub radius: f64,
}

impl Triangle {
    pub fn new(centroid: Point, radius: f64) -> Self {
        Triangle { centroid, radius }
    }

    pub fn try_new(centroid: Point, radius: f64) -> Result<Self, FractalError> {
        check_radius(radius)?;
        Ok(Self::new(centroid, radius))
    }

    /// Vertical extent from the top vertex down to the base.
    pub fn height(&self) -> f64 {
        self.radius * (1.0 + (TAU / 12.0).sin())
    }

    pub fn top_vertex(&self) -> Point {
        Point::new(self.centroid.x, self.centroid.y - self.radius)
    }

    /// The three corners, apex first, then clockwise on screen.
    pub fn vertices(&self) -> [Point; 3] {
        [0.0, 120.0, 240.0].map(|deg: f64| {
            self.centroid + Point::from(PolarPoint::new(self.radius, deg * DEGREES - TAU / 4.0))
        })
    }

    /// Grows the triangle by `delta` while pushing it down by the same amount, which keeps the top
    /// vertex in place.
    pub fn update_position(&mut self, delta: f64) {
        self.centroid.move_by(0.0, delta);
        self.radius += delta;
    }

    /// Fills the triangle if it is no larger than `max_radius`.
    ///
    /// Returns whether the triangle was drawn. A triangle that was not drawn has to be subdivided by
    /// the caller.
    pub fn draw_if_small(&self, canvas: &mut Canvas, max_radius: f64) -> Result<bool, RenderError> {
        if self.radius <= max_radius {
            canvas.fill_polygon(&self.vertices())?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn approx_eq(&self, other: &Triangle) -> bool {
        self.centroid.approx_eq(&other.centroid) && is_close(self.radius, other.radius)
    }
}

pub(crate) fn check_radius(radius: f64) -> Result<(), FractalError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(FractalError::InvalidRadius { radius })
    }
}

impl Display for Triangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Centroid : {}, Radius : {:.6}", self.centroid, self.radius)
    }
}
