//! Control panel: one row of trigger buttons along the top of the window.
//!
//! The panel is presentation only. Whether a trigger may fire is decided by
//! the dispatcher; the screen syncs that state into the panel every frame,
//! so a button is drawn disabled exactly while its animation runs.

use starfall_types::backend::RenderBackend;
use starfall_types::color::Color;
use starfall_types::error::Result;

use crate::dispatcher::Trigger;
use crate::theme::Theme;

/// Panel strip height in pixels.
pub const PANEL_HEIGHT: u32 = 48;
/// Outer padding around the button row.
const PANEL_PADDING: u32 = 8;
/// Gap between adjacent buttons.
const BUTTON_GAP: u32 = 8;

/// Button visual state, in drawing priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    Normal,
    Hover,
    Pressed,
    Disabled,
}

/// One trigger button in the panel row.
pub struct TriggerButton {
    pub trigger: Trigger,
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
    pub enabled: bool,
    hover: bool,
    pressed: bool,
}

impl TriggerButton {
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x
            && px < self.x + self.w as i32
            && py >= self.y
            && py < self.y + self.h as i32
    }

    fn state(&self) -> ButtonState {
        if !self.enabled {
            ButtonState::Disabled
        } else if self.pressed {
            ButtonState::Pressed
        } else if self.hover {
            ButtonState::Hover
        } else {
            ButtonState::Normal
        }
    }

    fn bg_color(&self, theme: &Theme) -> Color {
        match self.state() {
            ButtonState::Pressed => theme.button_bg_pressed,
            ButtonState::Hover => theme.button_bg_hover,
            ButtonState::Disabled => theme.button_bg_disabled,
            ButtonState::Normal => theme.button_bg,
        }
    }

    fn text_color(&self, theme: &Theme) -> Color {
        if self.state() == ButtonState::Disabled {
            theme.text_disabled
        } else {
            theme.text
        }
    }
}

/// The row of six trigger buttons.
pub struct ControlPanel {
    buttons: Vec<TriggerButton>,
    width: u32,
}

impl ControlPanel {
    /// Lay out one equal-width button per trigger across `screen_w`.
    pub fn new(screen_w: u32) -> Self {
        let n = Trigger::ALL.len() as u32;
        let inner_w = screen_w.saturating_sub(PANEL_PADDING * 2 + BUTTON_GAP * (n - 1));
        let button_w = (inner_w / n).max(1);
        let button_h = PANEL_HEIGHT - PANEL_PADDING * 2;

        let buttons = Trigger::ALL
            .iter()
            .enumerate()
            .map(|(i, trigger)| TriggerButton {
                trigger: *trigger,
                x: (PANEL_PADDING + i as u32 * (button_w + BUTTON_GAP)) as i32,
                y: PANEL_PADDING as i32,
                w: button_w,
                h: button_h,
                enabled: true,
                hover: false,
                pressed: false,
            })
            .collect();

        Self {
            buttons,
            width: screen_w,
        }
    }

    pub fn buttons(&self) -> &[TriggerButton] {
        &self.buttons
    }

    /// The trigger under the given point, if any.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<Trigger> {
        self.buttons
            .iter()
            .find(|b| b.contains(x, y))
            .map(|b| b.trigger)
    }

    pub fn is_enabled(&self, trigger: Trigger) -> bool {
        self.buttons
            .iter()
            .find(|b| b.trigger == trigger)
            .is_some_and(|b| b.enabled)
    }

    pub fn set_enabled(&mut self, trigger: Trigger, enabled: bool) {
        if let Some(button) = self.buttons.iter_mut().find(|b| b.trigger == trigger) {
            button.enabled = enabled;
            if !enabled {
                button.pressed = false;
            }
        }
    }

    /// Update hover highlights from a cursor position.
    pub fn on_cursor_move(&mut self, x: i32, y: i32) {
        for button in &mut self.buttons {
            button.hover = button.contains(x, y);
        }
    }

    /// Press at the given point. Returns the hit trigger when its button is
    /// enabled; presses on disabled buttons are swallowed here.
    pub fn on_pointer_down(&mut self, x: i32, y: i32) -> Option<Trigger> {
        let button = self.buttons.iter_mut().find(|b| b.contains(x, y))?;
        if !button.enabled {
            return None;
        }
        button.pressed = true;
        Some(button.trigger)
    }

    /// Release all pressed visuals.
    pub fn on_pointer_up(&mut self) {
        for button in &mut self.buttons {
            button.pressed = false;
        }
    }

    /// Draw the strip, its bottom separator, and every button.
    pub fn draw(&self, backend: &mut dyn RenderBackend, theme: &Theme) -> Result<()> {
        backend.fill_rect(0, 0, self.width, PANEL_HEIGHT, theme.panel_bg)?;
        backend.fill_rect(0, PANEL_HEIGHT as i32 - 1, self.width, 1, theme.border)?;

        for button in &self.buttons {
            backend.fill_rounded_rect(
                button.x,
                button.y,
                button.w,
                button.h,
                theme.button_radius,
                button.bg_color(theme),
            )?;

            let label = button.trigger.label();
            let text_w = backend.measure_text(label, theme.font_size);
            let text_h = backend.measure_text_height(theme.font_size);
            let tx = button.x + (button.w.saturating_sub(text_w) / 2) as i32;
            let ty = button.y + (button.h.saturating_sub(text_h) / 2) as i32;
            backend.draw_text(label, tx, ty, theme.font_size, button.text_color(theme))?;
        }
        Ok(())
    }
}
