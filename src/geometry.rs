use std::{f64::consts::TAU, fmt::Display, ops::Add};

/// One degree, in radians.
pub const DEGREES: f64 = TAU / 360.0;

/// Absolute tolerance used by [`is_close`].
pub const ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// Relative tolerance used by [`is_close`], scaled by the magnitude of the second operand.
pub const RELATIVE_TOLERANCE: f64 = 1e-5;

/// Approximate float comparison.
///
/// True iff `|a - b| <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * |b|`. Note that the comparison is
/// not symmetric for large values, since only `b` scales the relative term.
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * b.abs()
}

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub struct PolarPoint {
    pub r: f64,
    pub theta: f64,
}

/// A point on the normalized drawing plane. The y axis grows downward.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<PolarPoint> for Point {
    fn from(PolarPoint { r, theta }: PolarPoint) -> Self {
        Point { x: r * theta.cos(), y: r * theta.sin() }
    }
}

impl PolarPoint {
    pub fn new(r: f64, theta: f64) -> Self {
        PolarPoint { r, theta }
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Translates the point in place.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Both coordinates compare equal under [`is_close`].
    pub fn approx_eq(&self, other: &Point) -> bool {
        is_close(self.x, other.x) && is_close(self.y, other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({},{})", self.x, self.y)
    }
}
