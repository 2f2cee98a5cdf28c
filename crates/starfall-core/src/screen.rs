//! The demo screen: stage, control panel, and dispatcher wired together.
//!
//! Backend-agnostic application state. The app shell polls input events,
//! feeds them through [`DemoScreen::handle_event`], advances animations with
//! [`DemoScreen::tick`], and draws. The screen owns the RNG so shower
//! randomness is seedable under test.

use rand::SeedableRng;
use rand::rngs::StdRng;

use starfall_types::backend::{RenderBackend, TextureId};
use starfall_types::error::Result;
use starfall_types::input::{InputEvent, Key};

use crate::dispatcher::{Dispatcher, Trigger};
use crate::panel::{ControlPanel, PANEL_HEIGHT};
use crate::stage::{Sprite, Stage};
use crate::theme::Theme;

/// What the app shell should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Continue,
    /// Capture the current frame to a PNG.
    Screenshot,
    Quit,
}

/// The whole demo: one stage below one panel row.
pub struct DemoScreen {
    pub stage: Stage,
    pub panel: ControlPanel,
    pub dispatcher: Dispatcher,
    pub theme: Theme,
    rng: StdRng,
}

impl DemoScreen {
    /// Build the screen for a `screen_w` x `screen_h` window. The stage fills
    /// everything below the panel strip; the star sprite starts centered on
    /// it. `star_texture` must already be loaded at `star_size` square.
    pub fn new(screen_w: u32, screen_h: u32, star_size: u32, star_texture: TextureId) -> Self {
        Self::with_rng(
            screen_w,
            screen_h,
            star_size,
            star_texture,
            StdRng::from_os_rng(),
        )
    }

    /// Like [`DemoScreen::new`] with a caller-supplied RNG, so tests can pin
    /// the shower parameters.
    pub fn with_rng(
        screen_w: u32,
        screen_h: u32,
        star_size: u32,
        star_texture: TextureId,
        rng: StdRng,
    ) -> Self {
        let stage_h = screen_h.saturating_sub(PANEL_HEIGHT).max(1);
        let mut stage = Stage::new(screen_w, stage_h);

        let size = star_size as f32;
        let star = stage.spawn(Sprite::new(
            (screen_w as f32 - size) / 2.0,
            (stage_h as f32 - size) / 2.0,
            size,
            size,
            star_texture,
        ));

        Self {
            stage,
            panel: ControlPanel::new(screen_w),
            dispatcher: Dispatcher::new(star),
            theme: Theme::dark(),
            rng,
        }
    }

    /// Handle one input event.
    pub fn handle_event(&mut self, event: &InputEvent) -> Result<ScreenAction> {
        match event {
            InputEvent::Quit => return Ok(ScreenAction::Quit),
            InputEvent::KeyPress(Key::Escape) => return Ok(ScreenAction::Quit),
            InputEvent::KeyPress(Key::S) => return Ok(ScreenAction::Screenshot),
            InputEvent::KeyPress(key) => {
                if let Some(trigger) = key_trigger(*key) {
                    self.fire(trigger)?;
                }
            },
            InputEvent::CursorMove { x, y } => {
                self.panel.on_cursor_move(*x, *y);
            },
            InputEvent::PointerDown { x, y } => {
                if let Some(trigger) = self.panel.on_pointer_down(*x, *y) {
                    self.fire(trigger)?;
                }
            },
            InputEvent::PointerUp { .. } => {
                self.panel.on_pointer_up();
            },
        }
        Ok(ScreenAction::Continue)
    }

    /// Start the animation for `trigger`. The dispatcher rejects re-fires of
    /// a gated trigger that is still running.
    pub fn fire(&mut self, trigger: Trigger) -> Result<bool> {
        let started = self
            .dispatcher
            .fire(trigger, &mut self.stage, &mut self.rng)?;
        if started {
            log::info!("{} fired", trigger.label());
        }
        Ok(started)
    }

    /// Advance all running animations and sync button enabled-state, so the
    /// panel shows a trigger disabled exactly while its playback runs.
    pub fn tick(&mut self, dt_ms: u32) -> Result<()> {
        let completions = self.dispatcher.advance(&mut self.stage, dt_ms)?;
        for completion in &completions {
            log::debug!("{} completed", completion.trigger.label());
        }
        for trigger in Trigger::ALL {
            self.panel
                .set_enabled(trigger, self.dispatcher.is_enabled(trigger));
        }
        Ok(())
    }

    /// Stop every running animation. Used on teardown.
    pub fn cancel_all(&mut self) -> Result<usize> {
        let stopped = self.dispatcher.cancel_all(&mut self.stage)?;
        for trigger in Trigger::ALL {
            self.panel.set_enabled(trigger, true);
        }
        Ok(stopped)
    }

    /// Draw the whole screen: clear, stage below the panel, panel on top.
    pub fn draw(&self, backend: &mut dyn RenderBackend) -> Result<()> {
        backend.clear(self.theme.background)?;
        self.stage.draw(backend, 0, PANEL_HEIGHT as i32)?;
        self.panel.draw(backend, &self.theme)?;
        Ok(())
    }
}

/// Map number keys to triggers in panel order.
fn key_trigger(key: Key) -> Option<Trigger> {
    match key {
        Key::Num1 => Some(Trigger::Rotate),
        Key::Num2 => Some(Trigger::Translate),
        Key::Num3 => Some(Trigger::Scale),
        Key::Num4 => Some(Trigger::Fade),
        Key::Num5 => Some(Trigger::Colorize),
        Key::Num6 => Some(Trigger::Shower),
        Key::Escape | Key::S => None,
    }
}
