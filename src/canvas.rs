use std::path::Path;

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::{error::RenderError, geometry::Point, palette::Palette};

/// A raster drawing surface addressed in normalized units.
///
/// One unit is the pixel height of the surface. The origin sits at the center of the image, so the
/// visible area spans `y` in `[-0.5, 0.5]` and `x` in `[-w/2h, w/2h]`.
pub struct Canvas {
    pixmap: Pixmap,
    palette: Palette,
    foreground: Paint<'static>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, palette: Palette) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::SurfaceAllocation { width, height })?;
        let foreground = {
            let mut paint = Paint::default();
            paint.set_color(palette.foreground);
            paint.anti_alias = true;
            paint
        };
        let mut canvas = Canvas { pixmap, palette, foreground };
        canvas.paint_background();
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The size of one pixel in normalized units.
    pub fn max_radius(&self) -> f64 {
        1.0 / self.height() as f64
    }

    /// Maps a normalized point to pixel coordinates.
    pub fn to_pixel(&self, p: Point) -> (f32, f32) {
        let height = self.height() as f64;
        let half_aspect = 0.5 * self.width() as f64 / height;
        (((p.x + half_aspect) * height) as f32, ((p.y + 0.5) * height) as f32)
    }

    pub fn paint_background(&mut self) {
        self.pixmap.fill(self.palette.background);
    }

    /// Fills the closed polygon through `vertices` with the foreground color.
    pub fn fill_polygon(&mut self, vertices: &[Point]) -> Result<(), RenderError> {
        let path = {
            let mut pb = PathBuilder::new();
            let mut points = vertices.iter().map(|&v| self.to_pixel(v));
            let (x, y) = points.next().ok_or(RenderError::DegeneratePolygon)?;
            pb.move_to(x, y);
            for (x, y) in points {
                pb.line_to(x, y);
            }
            pb.close();
            pb.finish().ok_or(RenderError::DegeneratePolygon)?
        };
        self.pixmap.fill_path(&path, &self.foreground, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }

    /// Raw pixel data, 4 bytes per pixel in RGBA order, row major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// RGBA of the pixel at `(x, y)`, if it is on the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        // Pixmap::pixel only checks the flat index, so x past the edge would wrap into the next row
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|c| [c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        self.pixmap.save_png(path).map_err(|e| RenderError::Png {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background_rgba(canvas: &Canvas) -> [u8; 4] {
        let c = canvas.palette().background.to_color_u8();
        [c.red(), c.green(), c.blue(), c.alpha()]
    }

    #[test]
    fn new_canvas_is_cleared() {
        let canvas = Canvas::new(16, 9, Palette::default()).unwrap();
        assert_eq!(canvas.data().len(), 16 * 9 * 4);
        let bg = background_rgba(&canvas);
        assert!(canvas.data().chunks(4).all(|px| px == bg));
    }

    #[test]
    fn zero_sized_canvas_fails() {
        assert!(matches!(
            Canvas::new(0, 10, Palette::default()),
            Err(RenderError::SurfaceAllocation { width: 0, height: 10 })
        ));
    }

    #[test]
    fn normalized_origin_is_image_center() {
        let canvas = Canvas::new(200, 100, Palette::default()).unwrap();
        assert_eq!(canvas.to_pixel(Point::new(0.0, 0.0)), (100.0, 50.0));
        assert_eq!(canvas.to_pixel(Point::new(0.0, -0.5)), (100.0, 0.0));
        assert_eq!(canvas.to_pixel(Point::new(1.0, 0.5)), (200.0, 100.0));
        assert_eq!(canvas.max_radius(), 0.01);
    }

    #[test]
    fn fill_polygon_paints_foreground() {
        let mut canvas = Canvas::new(100, 100, Palette::default()).unwrap();
        canvas
            .fill_polygon(&[Point::new(-0.4, -0.4), Point::new(0.4, -0.4), Point::new(0.4, 0.4), Point::new(-0.4, 0.4)])
            .unwrap();
        let fg = canvas.palette().foreground.to_color_u8();
        assert_eq!(canvas.pixel(50, 50), Some([fg.red(), fg.green(), fg.blue(), fg.alpha()]));
        assert_eq!(canvas.pixel(1, 1), Some(background_rgba(&canvas)));
        assert_eq!(canvas.pixel(100, 1), None);
    }

    #[test]
    fn pixel_outside_surface_is_none() {
        let canvas = Canvas::new(10, 4, Palette::default()).unwrap();
        assert!(canvas.pixel(9, 3).is_some());
        assert_eq!(canvas.pixel(10, 0), None);
        assert_eq!(canvas.pixel(15, 1), None);
        assert_eq!(canvas.pixel(0, 4), None);
        assert_eq!(canvas.pixel(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn empty_polygon_is_rejected() {
        let mut canvas = Canvas::new(10, 10, Palette::default()).unwrap();
        assert!(matches!(canvas.fill_polygon(&[]), Err(RenderError::DegeneratePolygon)));
    }

    #[test]
    fn save_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("canvas.png");
        let canvas = Canvas::new(8, 8, Palette::default()).unwrap();
        canvas.save_png(&path).unwrap();
        let loaded = Pixmap::load_png(&path).unwrap();
        assert_eq!(loaded.width(), 8);
        assert_eq!(loaded.data(), canvas.data());
    }

    #[test]
    fn save_png_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = Canvas::new(8, 8, Palette::default()).unwrap();
        let result = canvas.save_png(dir.path().join("missing").join("canvas.png"));
        assert!(matches!(result, Err(RenderError::Png { .. })));
    }
}
