//! Sprite stage: the scene the animations act on.
//!
//! A [`Stage`] owns a flat list of sprites plus a backdrop color. Animations
//! never touch sprites directly; they address them through [`SpriteId`] and
//! [`SpriteProp`], so a playback survives (and reports) sprites vanishing
//! out from under it.

use starfall_types::backend::{RenderBackend, TextureId};
use starfall_types::color::Color;
use starfall_types::error::{Result, StarfallError};

/// Opaque handle to a sprite on the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(pub u64);

/// Animatable per-sprite properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteProp {
    TranslationX,
    TranslationY,
    Rotation,
    ScaleX,
    ScaleY,
    Alpha,
}

/// A textured quad with animatable transform properties.
///
/// `x`/`y`/`w`/`h` are the layout rectangle; the animatable properties apply
/// on top of it. Rotation and scale pivot around the rectangle center.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub translation_x: f32,
    pub translation_y: f32,
    /// Clockwise rotation in degrees.
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Opacity, 0.0 (invisible) to 1.0 (opaque).
    pub alpha: f32,
    pub texture: TextureId,
}

impl Sprite {
    /// A sprite at rest: no offsets, unit scale, fully opaque.
    pub fn new(x: f32, y: f32, w: f32, h: f32, texture: TextureId) -> Self {
        Self {
            x,
            y,
            w,
            h,
            translation_x: 0.0,
            translation_y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            alpha: 1.0,
            texture,
        }
    }

    /// Read one animatable property.
    pub fn prop(&self, prop: SpriteProp) -> f32 {
        match prop {
            SpriteProp::TranslationX => self.translation_x,
            SpriteProp::TranslationY => self.translation_y,
            SpriteProp::Rotation => self.rotation,
            SpriteProp::ScaleX => self.scale_x,
            SpriteProp::ScaleY => self.scale_y,
            SpriteProp::Alpha => self.alpha,
        }
    }

    /// Write one animatable property.
    pub fn set_prop(&mut self, prop: SpriteProp, value: f32) {
        match prop {
            SpriteProp::TranslationX => self.translation_x = value,
            SpriteProp::TranslationY => self.translation_y = value,
            SpriteProp::Rotation => self.rotation = value,
            SpriteProp::ScaleX => self.scale_x = value,
            SpriteProp::ScaleY => self.scale_y = value,
            SpriteProp::Alpha => self.alpha = value,
        }
    }

    /// Screen-space rectangle after translation and center-pivot scaling.
    pub fn draw_rect(&self) -> (i32, i32, u32, u32) {
        let scaled_w = self.w * self.scale_x;
        let scaled_h = self.h * self.scale_y;
        let left = self.x + self.translation_x + (self.w - scaled_w) / 2.0;
        let top = self.y + self.translation_y + (self.h - scaled_h) / 2.0;
        (
            left.round() as i32,
            top.round() as i32,
            scaled_w.round().max(0.0) as u32,
            scaled_h.round().max(0.0) as u32,
        )
    }

    /// Opacity as a 0-255 modulation byte.
    pub fn alpha_byte(&self) -> u8 {
        (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// The scene: a backdrop plus sprites in spawn order.
pub struct Stage {
    width: u32,
    height: u32,
    /// Backdrop color behind all sprites.
    pub backdrop: Color,
    sprites: Vec<(SpriteId, Sprite)>,
    next_id: u64,
}

impl Stage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            backdrop: Color::BLACK,
            sprites: Vec::new(),
            next_id: 1,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Add a sprite and return its handle. Sprites draw in spawn order.
    pub fn spawn(&mut self, sprite: Sprite) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        self.sprites.push((id, sprite));
        id
    }

    /// Remove a sprite, returning it.
    pub fn remove(&mut self, id: SpriteId) -> Result<Sprite> {
        let idx = self
            .sprites
            .iter()
            .position(|(sid, _)| *sid == id)
            .ok_or_else(|| StarfallError::Stage(format!("sprite not found: {}", id.0)))?;
        Ok(self.sprites.remove(idx).1)
    }

    pub fn get(&self, id: SpriteId) -> Result<&Sprite> {
        self.sprites
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, s)| s)
            .ok_or_else(|| StarfallError::Stage(format!("sprite not found: {}", id.0)))
    }

    pub fn get_mut(&mut self, id: SpriteId) -> Result<&mut Sprite> {
        self.sprites
            .iter_mut()
            .find(|(sid, _)| *sid == id)
            .map(|(_, s)| s)
            .ok_or_else(|| StarfallError::Stage(format!("sprite not found: {}", id.0)))
    }

    pub fn contains(&self, id: SpriteId) -> bool {
        self.sprites.iter().any(|(sid, _)| *sid == id)
    }

    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }

    /// Iterate sprites in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (SpriteId, &Sprite)> {
        self.sprites.iter().map(|(id, s)| (*id, s))
    }

    /// Read one animatable property of a sprite.
    pub fn prop(&self, id: SpriteId, prop: SpriteProp) -> Result<f32> {
        Ok(self.get(id)?.prop(prop))
    }

    /// Write one animatable property of a sprite.
    pub fn set_prop(&mut self, id: SpriteId, prop: SpriteProp, value: f32) -> Result<()> {
        self.get_mut(id)?.set_prop(prop, value);
        Ok(())
    }

    /// Draw the backdrop and every sprite, offset by the stage origin.
    ///
    /// Sprites with zero alpha still issue a blit; the backend modulates
    /// them invisible. Draw order is spawn order.
    pub fn draw(&self, backend: &mut dyn RenderBackend, origin_x: i32, origin_y: i32) -> Result<()> {
        backend.fill_rect(origin_x, origin_y, self.width, self.height, self.backdrop)?;
        for (_, sprite) in &self.sprites {
            let (x, y, w, h) = sprite.draw_rect();
            backend.blit_transformed(
                sprite.texture,
                origin_x + x,
                origin_y + y,
                w,
                h,
                sprite.rotation,
                sprite.alpha_byte(),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{DrawCall, MockBackend};

    fn star(x: f32, y: f32) -> Sprite {
        Sprite::new(x, y, 64.0, 64.0, TextureId(1))
    }

    #[test]
    fn new_sprite_is_at_rest() {
        let s = star(10.0, 20.0);
        assert_eq!(s.translation_x, 0.0);
        assert_eq!(s.translation_y, 0.0);
        assert_eq!(s.rotation, 0.0);
        assert_eq!(s.scale_x, 1.0);
        assert_eq!(s.scale_y, 1.0);
        assert_eq!(s.alpha, 1.0);
    }

    #[test]
    fn prop_roundtrip_all_channels() {
        let mut s = star(0.0, 0.0);
        let props = [
            SpriteProp::TranslationX,
            SpriteProp::TranslationY,
            SpriteProp::Rotation,
            SpriteProp::ScaleX,
            SpriteProp::ScaleY,
            SpriteProp::Alpha,
        ];
        for (i, prop) in props.iter().enumerate() {
            s.set_prop(*prop, i as f32 + 0.5);
            assert_eq!(s.prop(*prop), i as f32 + 0.5);
        }
    }

    #[test]
    fn spawn_assigns_unique_ids() {
        let mut stage = Stage::new(800, 600);
        let a = stage.spawn(star(0.0, 0.0));
        let b = stage.spawn(star(0.0, 0.0));
        assert_ne!(a, b);
        assert_eq!(stage.sprite_count(), 2);
    }

    #[test]
    fn remove_returns_the_sprite() {
        let mut stage = Stage::new(800, 600);
        let id = stage.spawn(star(7.0, 9.0));
        let sprite = stage.remove(id).unwrap();
        assert_eq!(sprite.x, 7.0);
        assert_eq!(stage.sprite_count(), 0);
        assert!(!stage.contains(id));
    }

    #[test]
    fn remove_missing_is_a_stage_error() {
        let mut stage = Stage::new(800, 600);
        let result = stage.remove(SpriteId(99));
        assert!(matches!(result, Err(StarfallError::Stage(_))));
    }

    #[test]
    fn get_missing_is_a_stage_error() {
        let stage = Stage::new(800, 600);
        assert!(matches!(
            stage.get(SpriteId(1)),
            Err(StarfallError::Stage(_))
        ));
    }

    #[test]
    fn stage_prop_roundtrip() {
        let mut stage = Stage::new(800, 600);
        let id = stage.spawn(star(0.0, 0.0));
        stage.set_prop(id, SpriteProp::Rotation, -360.0).unwrap();
        assert_eq!(stage.prop(id, SpriteProp::Rotation).unwrap(), -360.0);
    }

    #[test]
    fn draw_rect_scales_around_center() {
        let mut s = star(0.0, 0.0);
        s.scale_x = 2.0;
        s.scale_y = 2.0;
        assert_eq!(s.draw_rect(), (-32, -32, 128, 128));
    }

    #[test]
    fn draw_rect_applies_translation() {
        let mut s = star(100.0, 50.0);
        s.translation_x = 10.0;
        s.translation_y = -20.0;
        assert_eq!(s.draw_rect(), (110, 30, 64, 64));
    }

    #[test]
    fn alpha_byte_clamps() {
        let mut s = star(0.0, 0.0);
        s.alpha = 0.5;
        assert_eq!(s.alpha_byte(), 128);
        s.alpha = -1.0;
        assert_eq!(s.alpha_byte(), 0);
        s.alpha = 2.0;
        assert_eq!(s.alpha_byte(), 255);
    }

    #[test]
    fn draw_paints_backdrop_then_sprites_in_spawn_order() {
        let mut stage = Stage::new(800, 600);
        stage.spawn(Sprite::new(0.0, 0.0, 64.0, 64.0, TextureId(1)));
        stage.spawn(Sprite::new(100.0, 0.0, 64.0, 64.0, TextureId(2)));

        let mut backend = MockBackend::new();
        stage.draw(&mut backend, 0, 48).unwrap();

        assert!(matches!(backend.calls[0], DrawCall::FillRect { .. }));
        let blits: Vec<u64> = backend
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::BlitTransformed { tex, .. } => Some(tex.0),
                _ => None,
            })
            .collect();
        assert_eq!(blits, vec![1, 2]);
    }

    #[test]
    fn draw_offsets_by_stage_origin() {
        let mut stage = Stage::new(800, 552);
        stage.spawn(Sprite::new(10.0, 10.0, 64.0, 64.0, TextureId(1)));

        let mut backend = MockBackend::new();
        stage.draw(&mut backend, 0, 48).unwrap();

        let blit = backend
            .calls
            .iter()
            .find_map(|c| match c {
                DrawCall::BlitTransformed { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .unwrap();
        assert_eq!(blit, (10, 58));
    }

    #[test]
    fn invisible_sprite_still_blits() {
        let mut stage = Stage::new(800, 600);
        let id = stage.spawn(star(0.0, 0.0));
        stage.set_prop(id, SpriteProp::Alpha, 0.0).unwrap();

        let mut backend = MockBackend::new();
        stage.draw(&mut backend, 0, 0).unwrap();

        let alpha = backend
            .calls
            .iter()
            .find_map(|c| match c {
                DrawCall::BlitTransformed { alpha, .. } => Some(*alpha),
                _ => None,
            })
            .unwrap();
        assert_eq!(alpha, 0);
    }
}
