use tiny_skia::Color;

/// The two flat colors of a render: what the canvas is cleared to, and what triangles are filled with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
}

impl Default for Palette {
    /// Near-black background with cyan triangles.
    fn default() -> Self {
        Palette {
            background: Color::from_rgba8(15, 15, 15, u8::MAX),
            foreground: Color::from_rgba8(89, 196, 222, u8::MAX),
        }
    }
}
