//! Backend trait definitions.
//!
//! Every platform implements these traits. The demo logic dispatches all
//! rendering and input through trait boundaries -- it never calls
//! platform-specific APIs.
//!
//! `RenderBackend` provides both core rendering methods (required) and
//! extended drawing primitives (optional, with default implementations).

use crate::color::Color;
use crate::error::Result;
use crate::input::InputEvent;

/// Opaque handle to a loaded texture in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Rendering backend trait.
///
/// # Core Methods (required)
///
/// All backends must implement the 11 core methods: `init`, `clear`, `blit`,
/// `fill_rect`, `draw_text`, `swap_buffers`, `load_texture`,
/// `destroy_texture`, `measure_text`, `read_pixels`, and `shutdown`.
///
/// # Extended Primitives (optional, with defaults)
///
/// Backends may override the extended methods for native-accelerated
/// rendering. Default implementations approximate using the core methods, so
/// a minimal backend still renders every scene, just with less polish.
#[allow(clippy::too_many_arguments)]
pub trait RenderBackend {
    // -----------------------------------------------------------------------
    // Core methods (required -- no default implementations)
    // -----------------------------------------------------------------------

    /// Initialize the rendering subsystem.
    fn init(&mut self, width: u32, height: u32) -> Result<()>;

    /// Clear the screen to a solid color.
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Blit a texture at the given position and size.
    fn blit(&mut self, tex: TextureId, x: i32, y: i32, w: u32, h: u32) -> Result<()>;

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Draw text at the given position. The backend chooses its available font.
    /// `font_size` is a hint in pixels; backends may approximate.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: u16, color: Color)
    -> Result<()>;

    /// Present the current frame to the display.
    fn swap_buffers(&mut self) -> Result<()>;

    /// Load raw RGBA pixel data as a texture. Returns a handle for later blit.
    fn load_texture(&mut self, width: u32, height: u32, rgba_data: &[u8]) -> Result<TextureId>;

    /// Destroy a previously loaded texture.
    fn destroy_texture(&mut self, tex: TextureId) -> Result<()>;

    /// Measure the width of a text string at the given font size.
    /// Returns width in pixels. Used to center button labels.
    fn measure_text(&self, text: &str, font_size: u16) -> u32;

    /// Read the current framebuffer as RGBA pixel data.
    fn read_pixels(&self, x: i32, y: i32, w: u32, h: u32) -> Result<Vec<u8>>;

    /// Shut down the rendering subsystem and release resources.
    fn shutdown(&mut self) -> Result<()>;

    // -----------------------------------------------------------------------
    // Extended: Shape Primitives
    // -----------------------------------------------------------------------

    /// Draw a filled rectangle with rounded corners.
    ///
    /// `radius` specifies the corner radius in pixels. If `radius` exceeds
    /// half the smaller dimension, it is clamped. A radius of 0 is equivalent
    /// to `fill_rect`.
    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        _radius: u16,
        color: Color,
    ) -> Result<()> {
        // Default: fall back to sharp-cornered fill_rect.
        self.fill_rect(x, y, w, h, color)
    }

    /// Draw the outline of a rectangle.
    ///
    /// `stroke_width` is drawn inward from the given bounds.
    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        let sw = stroke_width as u32;
        self.fill_rect(x, y, w, sw, color)?;
        self.fill_rect(x, y + h as i32 - sw as i32, w, sw, color)?;
        self.fill_rect(x, y + sw as i32, sw, h.saturating_sub(sw * 2), color)?;
        self.fill_rect(
            x + w as i32 - sw as i32,
            y + sw as i32,
            sw,
            h.saturating_sub(sw * 2),
            color,
        )?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Extended: Texture Operations
    // -----------------------------------------------------------------------

    /// Blit a texture rotated around its center and modulated by alpha.
    ///
    /// `angle_deg` is clockwise degrees; `alpha` is 0 (invisible) to 255
    /// (opaque). The default ignores both and draws an axis-aligned blit, so
    /// minimal backends show the sprite without rotation or fading.
    fn blit_transformed(
        &mut self,
        tex: TextureId,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        angle_deg: f32,
        alpha: u8,
    ) -> Result<()> {
        let _ = (angle_deg, alpha);
        self.blit(tex, x, y, w, h)
    }

    // -----------------------------------------------------------------------
    // Extended: Text System
    // -----------------------------------------------------------------------

    /// Measure the height of text at the given font size.
    fn measure_text_height(&self, font_size: u16) -> u32 {
        (font_size as f32 * 1.2) as u32
    }
}

/// Input backend trait.
///
/// Maps platform-specific input to the platform-agnostic `InputEvent` enum.
pub trait InputBackend {
    /// Poll for pending input events.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
