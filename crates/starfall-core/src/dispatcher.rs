//! Trigger dispatcher: maps the six demo triggers onto playbacks.
//!
//! Each trigger builds one [`Playback`] and hands it to the player. The five
//! gated triggers (everything but shower) record their playback id and
//! report themselves in-flight until the player completes it; a control is
//! enabled exactly when its trigger is not in-flight. Shower spawns an
//! independent transient sprite per invocation and never gates.

use rand::Rng;

use starfall_types::color::Color;
use starfall_types::error::Result;

use crate::anim::player::{Channel, Completion, Playback, PlaybackId, Player};
use crate::anim::{ColorTween, RepeatMode, Tween, easing};
use crate::stage::{Sprite, SpriteId, SpriteProp, Stage};

/// Duration used when a trigger does not specify one.
pub const DEFAULT_DURATION_MS: u32 = 300;

/// The six demo triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Rotate,
    Translate,
    Scale,
    Fade,
    Colorize,
    Shower,
}

impl Trigger {
    pub const ALL: [Trigger; 6] = [
        Trigger::Rotate,
        Trigger::Translate,
        Trigger::Scale,
        Trigger::Fade,
        Trigger::Colorize,
        Trigger::Shower,
    ];

    /// Control-panel label.
    pub fn label(self) -> &'static str {
        match self {
            Trigger::Rotate => "ROTATE",
            Trigger::Translate => "TRANSLATE",
            Trigger::Scale => "SCALE",
            Trigger::Fade => "FADE",
            Trigger::Colorize => "COLORIZE",
            Trigger::Shower => "SHOWER",
        }
    }

    /// Whether firing this trigger disables its control until completion.
    pub fn gates_control(self) -> bool {
        self != Trigger::Shower
    }

    fn index(self) -> usize {
        match self {
            Trigger::Rotate => 0,
            Trigger::Translate => 1,
            Trigger::Scale => 2,
            Trigger::Fade => 3,
            Trigger::Colorize => 4,
            Trigger::Shower => 5,
        }
    }
}

/// Builds and tracks the playback for each trigger.
pub struct Dispatcher {
    target: SpriteId,
    player: Player,
    in_flight: [Option<PlaybackId>; 6],
}

impl Dispatcher {
    /// A dispatcher animating `target` (the resident star sprite).
    pub fn new(target: SpriteId) -> Self {
        Self {
            target,
            player: Player::new(),
            in_flight: [None; 6],
        }
    }

    pub fn target(&self) -> SpriteId {
        self.target
    }

    /// Whether a playback started by `trigger` is still running.
    pub fn in_flight(&self, trigger: Trigger) -> bool {
        self.in_flight[trigger.index()].is_some()
    }

    /// Whether the control for `trigger` should accept a fire right now.
    pub fn is_enabled(&self, trigger: Trigger) -> bool {
        !self.in_flight(trigger)
    }

    /// Number of playbacks currently running, shower sprites included.
    pub fn playback_count(&self) -> usize {
        self.player.len()
    }

    /// Start the animation for `trigger`.
    ///
    /// Returns `Ok(false)` without starting anything when a gated trigger is
    /// re-fired while its playback is still running, so callers that bypass
    /// the disabled control (keyboard shortcuts) cannot double-start.
    pub fn fire(
        &mut self,
        trigger: Trigger,
        stage: &mut Stage,
        rng: &mut impl Rng,
    ) -> Result<bool> {
        if trigger.gates_control() && self.in_flight(trigger) {
            log::debug!("{trigger:?} still animating, fire ignored");
            return Ok(false);
        }

        let playback = match trigger {
            Trigger::Rotate => self.rotate(),
            Trigger::Translate => self.translate(stage)?,
            Trigger::Scale => self.scale(stage)?,
            Trigger::Fade => self.fade(stage)?,
            Trigger::Colorize => Self::colorize(),
            Trigger::Shower => self.shower(stage, rng)?,
        };

        let id = self.player.start(stage, playback)?;
        if trigger.gates_control() {
            self.in_flight[trigger.index()] = Some(id);
        }
        Ok(true)
    }

    /// Advance all running playbacks and release the gates of those that
    /// completed. Returns the completions in case the caller wants them.
    pub fn advance(&mut self, stage: &mut Stage, dt_ms: u32) -> Result<Vec<Completion>> {
        let completions = self.player.advance(stage, dt_ms)?;
        for completion in &completions {
            let slot = &mut self.in_flight[completion.trigger.index()];
            if *slot == Some(completion.id) {
                *slot = None;
            }
        }
        Ok(completions)
    }

    /// Stop everything mid-flight and release all gates. Teardown hook for
    /// screen changes and shutdown.
    pub fn cancel_all(&mut self, stage: &mut Stage) -> Result<usize> {
        let stopped = self.player.cancel_all(stage)?;
        self.in_flight = [None; 6];
        Ok(stopped)
    }

    // -----------------------------------------------------------------------
    // Playback builders, one per trigger
    // -----------------------------------------------------------------------

    /// One full counterclockwise turn: -360 degrees back to 0.
    fn rotate(&self) -> Playback {
        Playback::new(
            Trigger::Rotate,
            vec![Channel::Sprite {
                id: self.target,
                prop: SpriteProp::Rotation,
                tween: Tween::new(-360.0, 0.0, 1000, easing::ease_in_out_quad),
            }],
        )
    }

    /// Slide right by 500 units and back, over the default duration each way.
    fn translate(&self, stage: &Stage) -> Result<Playback> {
        let current = stage.prop(self.target, SpriteProp::TranslationX)?;
        Ok(Playback::new(
            Trigger::Translate,
            vec![Channel::Sprite {
                id: self.target,
                prop: SpriteProp::TranslationX,
                tween: Tween::new(current, 500.0, DEFAULT_DURATION_MS, easing::ease_in_out_quad)
                    .with_repeat(1, RepeatMode::Reverse),
            }],
        ))
    }

    /// Grow to four times the size on both axes in lockstep, then back.
    fn scale(&self, stage: &Stage) -> Result<Playback> {
        let current_x = stage.prop(self.target, SpriteProp::ScaleX)?;
        let current_y = stage.prop(self.target, SpriteProp::ScaleY)?;
        Ok(Playback::new(
            Trigger::Scale,
            vec![
                Channel::Sprite {
                    id: self.target,
                    prop: SpriteProp::ScaleX,
                    tween: Tween::new(current_x, 4.0, 1000, easing::ease_in_out_quad)
                        .with_repeat(1, RepeatMode::Reverse),
                },
                Channel::Sprite {
                    id: self.target,
                    prop: SpriteProp::ScaleY,
                    tween: Tween::new(current_y, 4.0, 1000, easing::ease_in_out_quad)
                        .with_repeat(1, RepeatMode::Reverse),
                },
            ],
        ))
    }

    /// Fade out to invisible and back to the current opacity.
    fn fade(&self, stage: &Stage) -> Result<Playback> {
        let current = stage.prop(self.target, SpriteProp::Alpha)?;
        Ok(Playback::new(
            Trigger::Fade,
            vec![Channel::Sprite {
                id: self.target,
                prop: SpriteProp::Alpha,
                tween: Tween::new(current, 0.0, 1000, easing::ease_in_out_quad)
                    .with_repeat(1, RepeatMode::Reverse),
            }],
        ))
    }

    /// Tint the backdrop black to red and back, blending each ARGB channel
    /// independently. Blending the packed integers instead would sweep the
    /// midpoint through a muddy green.
    fn colorize() -> Playback {
        Playback::new(
            Trigger::Colorize,
            vec![Channel::Backdrop {
                tween: ColorTween::new(Color::BLACK, Color::RED, 500, easing::ease_in_out_quad)
                    .with_repeat(1, RepeatMode::Reverse),
            }],
        )
    }

    /// Spawn one transient star that tumbles down across the stage.
    ///
    /// The sprite starts fully above the visible area and ends fully below
    /// it. The fall accelerates while the rotation stays constant-rate; the
    /// two curves differing is what makes the tumble look natural.
    fn shower(&self, stage: &mut Stage, rng: &mut impl Rng) -> Result<Playback> {
        let star = stage.get(self.target)?;
        let (texture, w, h) = (star.texture, star.w, star.h);

        let scale = rng.random_range(0.1..1.6f32);
        let ws = w * scale;
        let hs = h * scale;
        let start_x = rng.random_range(-ws / 2.0..stage.width() as f32 - ws / 2.0);
        let total_deg = rng.random_range(0.0..1080.0f32);
        let duration_ms = rng.random_range(500..2000u32);

        let mut sprite = Sprite::new(0.0, 0.0, w, h, texture);
        sprite.scale_x = scale;
        sprite.scale_y = scale;
        sprite.translation_x = start_x;
        sprite.translation_y = -hs;
        let id = stage.spawn(sprite);

        let fall_end = stage.height() as f32 + hs;
        Ok(Playback::new(
            Trigger::Shower,
            vec![
                Channel::Sprite {
                    id,
                    prop: SpriteProp::TranslationY,
                    tween: Tween::new(-hs, fall_end, duration_ms, easing::ease_in_quad),
                },
                Channel::Sprite {
                    id,
                    prop: SpriteProp::Rotation,
                    tween: Tween::new(0.0, total_deg, duration_ms, easing::linear),
                },
            ],
        )
        .with_despawn(id))
    }
}
