//! SDL2 backend for Starfall.
//!
//! Implements `RenderBackend` and `InputBackend` using SDL2. Sprites are
//! RGBA textures blitted through `copy_ex` for the rotated, alpha-modulated
//! draws the animation demo needs; button labels use the shared 8x8 bitmap
//! font.

use std::collections::HashMap;

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use starfall_types::backend::{InputBackend, RenderBackend, TextureId};
use starfall_types::bitmap_font;
use starfall_types::color::Color;
use starfall_types::error::{Result, StarfallError};
use starfall_types::input::{InputEvent, Key};

/// SDL2 rendering and input backend.
///
/// # Safety
///
/// `textures` is declared before `texture_creator` so that Rust's drop order
/// (declaration order) destroys all textures before the creator they borrow
/// from. The `Texture<'static>` lifetime is erased via transmute in
/// `load_texture()` -- this is sound because the `TextureCreator` always
/// outlives the textures.
pub struct SdlBackend {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    textures: HashMap<u64, Texture<'static>>,
    texture_creator: TextureCreator<WindowContext>,
    next_texture_id: u64,
}

impl SdlBackend {
    /// Create a new SDL2 backend with a centered window.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl = sdl2::init().map_err(|e| StarfallError::Backend(e.to_string()))?;
        let video = sdl
            .video()
            .map_err(|e| StarfallError::Backend(e.to_string()))?;
        let window = video
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| StarfallError::Backend(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| StarfallError::Backend(e.to_string()))?;
        let texture_creator = canvas.texture_creator();
        let event_pump = sdl
            .event_pump()
            .map_err(|e| StarfallError::Backend(e.to_string()))?;

        log::info!("SDL2 backend initialized: {width}x{height}");

        Ok(Self {
            canvas,
            event_pump,
            textures: HashMap::new(),
            texture_creator,
            next_texture_id: 1,
        })
    }

    /// Set the SDL draw color with blending when the color is translucent.
    fn set_color(&mut self, color: Color) {
        if color.a < 255 {
            self.canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        } else {
            self.canvas.set_blend_mode(sdl2::render::BlendMode::None);
        }
        self.canvas.set_draw_color(sdl2::pixels::Color::RGBA(
            color.r, color.g, color.b, color.a,
        ));
    }
}

impl RenderBackend for SdlBackend {
    fn init(&mut self, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.canvas.set_draw_color(sdl2::pixels::Color::RGBA(
            color.r, color.g, color.b, color.a,
        ));
        self.canvas.clear();
        Ok(())
    }

    fn blit(&mut self, tex: TextureId, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        let texture = self
            .textures
            .get(&tex.0)
            .ok_or_else(|| StarfallError::Backend(format!("texture not found: {}", tex.0)))?;
        self.canvas
            .copy(texture, None, Rect::new(x, y, w, h))
            .map_err(StarfallError::Backend)?;
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.set_color(color);
        self.canvas
            .fill_rect(Rect::new(x, y, w, h))
            .map_err(StarfallError::Backend)?;
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        let scale = if font_size >= 8 {
            (font_size / 8) as i32
        } else {
            1
        };
        let glyph_w = bitmap_font::GLYPH_WIDTH as i32 * scale;
        self.canvas.set_draw_color(sdl2::pixels::Color::RGBA(
            color.r, color.g, color.b, color.a,
        ));

        let mut cx = x;
        for ch in text.chars() {
            let glyph_data = bitmap_font::glyph(ch);
            for row in 0..8i32 {
                let bits = glyph_data[row as usize];
                for col in 0..8i32 {
                    if bits & (0x80 >> col) != 0 {
                        let px = cx + col * scale;
                        let py = y + row * scale;
                        if scale == 1 {
                            let _ = self.canvas.draw_point(Point::new(px, py));
                        } else {
                            let _ = self
                                .canvas
                                .fill_rect(Rect::new(px, py, scale as u32, scale as u32));
                        }
                    }
                }
            }
            cx += glyph_w;
        }
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.canvas.present();
        Ok(())
    }

    fn load_texture(&mut self, width: u32, height: u32, rgba_data: &[u8]) -> Result<TextureId> {
        let expected = (width * height * 4) as usize;
        if rgba_data.len() != expected {
            return Err(StarfallError::Backend(format!(
                "texture data size mismatch: expected {expected}, got {}",
                rgba_data.len()
            )));
        }

        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::ABGR8888, width, height)
            .map_err(|e| StarfallError::Backend(e.to_string()))?;

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer[..expected].copy_from_slice(rgba_data);
            })
            .map_err(StarfallError::Backend)?;

        texture.set_blend_mode(sdl2::render::BlendMode::Blend);

        // SAFETY: The texture borrows from self.texture_creator which lives in
        // the same struct. `textures` is declared before `texture_creator`, so
        // Rust drops textures first. The erased lifetime is therefore always
        // valid.
        let texture: Texture<'static> = unsafe { std::mem::transmute(texture) };

        let id = self.next_texture_id;
        self.next_texture_id += 1;
        self.textures.insert(id, texture);
        Ok(TextureId(id))
    }

    fn destroy_texture(&mut self, tex: TextureId) -> Result<()> {
        self.textures.remove(&tex.0);
        Ok(())
    }

    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        let scale = if font_size >= 8 {
            (font_size / 8) as u32
        } else {
            1
        };
        text.len() as u32 * bitmap_font::GLYPH_WIDTH * scale
    }

    fn read_pixels(&self, x: i32, y: i32, w: u32, h: u32) -> Result<Vec<u8>> {
        let rect = Rect::new(x, y, w, h);
        self.canvas
            .read_pixels(rect, PixelFormatEnum::ABGR8888)
            .map_err(StarfallError::Backend)
    }

    fn shutdown(&mut self) -> Result<()> {
        log::info!("SDL2 backend shut down");
        Ok(())
    }

    // -------------------------------------------------------------------
    // Extended primitives
    // -------------------------------------------------------------------

    fn fill_rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        radius: u16,
        color: Color,
    ) -> Result<()> {
        if radius == 0 || w == 0 || h == 0 {
            return self.fill_rect(x, y, w, h, color);
        }
        let r = (radius as u32).min(w / 2).min(h / 2) as i32;
        self.set_color(color);

        // Center body rect.
        let _ = self
            .canvas
            .fill_rect(Rect::new(x, y + r, w, h - r as u32 * 2));
        // Top strip.
        let _ = self
            .canvas
            .fill_rect(Rect::new(x + r, y, w - r as u32 * 2, r as u32));
        // Bottom strip.
        let _ = self.canvas.fill_rect(Rect::new(
            x + r,
            y + h as i32 - r,
            w - r as u32 * 2,
            r as u32,
        ));

        // Corner fills using midpoint circle horizontal spans.
        let mut cx = 0i32;
        let mut cy = r;
        let mut d = 1 - r;
        while cx <= cy {
            let _ = self.canvas.draw_line(
                Point::new(x + r - cy, y + r - cx),
                Point::new(x + w as i32 - 1 - r + cy, y + r - cx),
            );
            if cx != cy {
                let _ = self.canvas.draw_line(
                    Point::new(x + r - cx, y + r - cy),
                    Point::new(x + w as i32 - 1 - r + cx, y + r - cy),
                );
            }
            if cx != 0 {
                let _ = self.canvas.draw_line(
                    Point::new(x + r - cy, y + h as i32 - 1 - r + cx),
                    Point::new(x + w as i32 - 1 - r + cy, y + h as i32 - 1 - r + cx),
                );
            }
            let _ = self.canvas.draw_line(
                Point::new(x + r - cx, y + h as i32 - 1 - r + cy),
                Point::new(x + w as i32 - 1 - r + cx, y + h as i32 - 1 - r + cy),
            );

            cx += 1;
            if d < 0 {
                d += 2 * cx + 1;
            } else {
                cy -= 1;
                d += 2 * (cx - cy) + 1;
            }
        }
        Ok(())
    }

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
        let texture = self
            .textures
            .get_mut(&tex.0)
            .ok_or_else(|| StarfallError::Backend(format!("texture not found: {}", tex.0)))?;
        texture.set_alpha_mod(alpha);
        let dst_rect = Rect::new(x, y, w, h);
        // None pivots the rotation on the destination rect center.
        self.canvas
            .copy_ex(texture, None, dst_rect, angle_deg as f64, None, false, false)
            .map_err(StarfallError::Backend)?;
        let texture = self
            .textures
            .get_mut(&tex.0)
            .ok_or_else(|| StarfallError::Backend(format!("texture not found: {}", tex.0)))?;
        texture.set_alpha_mod(255);
        Ok(())
    }

    fn measure_text_height(&self, font_size: u16) -> u32 {
        let scale = if font_size >= 8 {
            (font_size / 8) as u32
        } else {
            1
        };
        bitmap_font::GLYPH_HEIGHT * scale
    }
}

impl InputBackend for SdlBackend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            if let Some(e) = map_sdl_event(event) {
                events.push(e);
            }
        }
        events
    }
}

/// Map an SDL2 event to a Starfall input event.
fn map_sdl_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(key), ..
        } => map_key(key).map(InputEvent::KeyPress),
        Event::MouseMotion { x, y, .. } => Some(InputEvent::CursorMove { x, y }),
        Event::MouseButtonDown { x, y, .. } => Some(InputEvent::PointerDown { x, y }),
        Event::MouseButtonUp { x, y, .. } => Some(InputEvent::PointerUp { x, y }),
        _ => None,
    }
}

fn map_key(key: Keycode) -> Option<Key> {
    match key {
        Keycode::Num1 | Keycode::Kp1 => Some(Key::Num1),
        Keycode::Num2 | Keycode::Kp2 => Some(Key::Num2),
        Keycode::Num3 | Keycode::Kp3 => Some(Key::Num3),
        Keycode::Num4 | Keycode::Kp4 => Some(Key::Num4),
        Keycode::Num5 | Keycode::Kp5 => Some(Key::Num5),
        Keycode::Num6 | Keycode::Kp6 => Some(Key::Num6),
        Keycode::Escape => Some(Key::Escape),
        Keycode::S => Some(Key::S),
        _ => None,
    }
}
