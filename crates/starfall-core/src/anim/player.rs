//! Playback engine: drives tweens and writes their values onto the stage.
//!
//! A [`Playback`] bundles the channels one trigger starts together; the
//! [`Player`] advances every running playback each frame and reports
//! [`Completion`] records the frame a playback finishes. Completion is
//! polled, not called back, so the dispatcher observes it at a single
//! well-defined point in the frame.

use starfall_types::error::Result;

use crate::anim::{ColorTween, Tween};
use crate::dispatcher::Trigger;
use crate::stage::{SpriteId, SpriteProp, Stage};

/// One animated value stream inside a playback.
pub enum Channel {
    /// Tween one property of one sprite.
    Sprite {
        id: SpriteId,
        prop: SpriteProp,
        tween: Tween,
    },
    /// Tween the stage backdrop color.
    Backdrop { tween: ColorTween },
}

impl Channel {
    fn tick(&mut self, dt_ms: u32) {
        match self {
            Channel::Sprite { tween, .. } => {
                tween.tick(dt_ms);
            },
            Channel::Backdrop { tween } => {
                tween.tick(dt_ms);
            },
        }
    }

    /// Write the current tween value onto the stage.
    fn apply(&self, stage: &mut Stage) -> Result<()> {
        match self {
            Channel::Sprite { id, prop, tween } => stage.set_prop(*id, *prop, tween.value()),
            Channel::Backdrop { tween } => {
                stage.backdrop = tween.value();
                Ok(())
            },
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Channel::Sprite { tween, .. } => tween.is_finished(),
            Channel::Backdrop { tween } => tween.is_finished(),
        }
    }
}

/// Handle to a running playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackId(pub u64);

/// A group of channels started together and finishing as a unit.
pub struct Playback {
    pub trigger: Trigger,
    pub channels: Vec<Channel>,
    /// Sprite removed from the stage when the playback finishes.
    pub despawn: Option<SpriteId>,
}

impl Playback {
    pub fn new(trigger: Trigger, channels: Vec<Channel>) -> Self {
        Self {
            trigger,
            channels,
            despawn: None,
        }
    }

    /// Remove `id` from the stage once this playback finishes.
    pub fn with_despawn(mut self, id: SpriteId) -> Self {
        self.despawn = Some(id);
        self
    }

    fn is_finished(&self) -> bool {
        self.channels.iter().all(Channel::is_finished)
    }
}

/// Record of one playback that finished during an advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub id: PlaybackId,
    pub trigger: Trigger,
}

/// Drives all running playbacks against a stage.
pub struct Player {
    playing: Vec<(PlaybackId, Playback)>,
    next_id: u64,
}

impl Player {
    pub fn new() -> Self {
        Self {
            playing: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a playback and write its starting values onto the stage, so
    /// the very next draw shows frame zero of the animation.
    pub fn start(&mut self, stage: &mut Stage, playback: Playback) -> Result<PlaybackId> {
        for channel in &playback.channels {
            channel.apply(stage)?;
        }
        let id = PlaybackId(self.next_id);
        self.next_id += 1;
        self.playing.push((id, playback));
        Ok(id)
    }

    /// Advance every playback by `dt_ms`, apply the new values, and return
    /// completions for playbacks that finished this call.
    ///
    /// A finished playback has already written its resting values before it
    /// is dropped, and its despawn sprite is removed here. Completions are
    /// reported exactly once.
    pub fn advance(&mut self, stage: &mut Stage, dt_ms: u32) -> Result<Vec<Completion>> {
        for (_, playback) in &mut self.playing {
            for channel in &mut playback.channels {
                channel.tick(dt_ms);
                channel.apply(stage)?;
            }
        }

        let mut completions = Vec::new();
        let mut i = 0;
        while i < self.playing.len() {
            if self.playing[i].1.is_finished() {
                let (id, playback) = self.playing.remove(i);
                if let Some(sprite_id) = playback.despawn {
                    stage.remove(sprite_id)?;
                }
                completions.push(Completion {
                    id,
                    trigger: playback.trigger,
                });
            } else {
                i += 1;
            }
        }
        Ok(completions)
    }

    /// Stop one playback mid-flight. Its despawn sprite, if any, is removed.
    /// Returns `false` when the id is not running.
    pub fn cancel(&mut self, stage: &mut Stage, id: PlaybackId) -> Result<bool> {
        let Some(idx) = self.playing.iter().position(|(pid, _)| *pid == id) else {
            return Ok(false);
        };
        let (_, playback) = self.playing.remove(idx);
        if let Some(sprite_id) = playback.despawn
            && stage.contains(sprite_id)
        {
            stage.remove(sprite_id)?;
        }
        Ok(true)
    }

    /// Stop every playback. Returns how many were running.
    pub fn cancel_all(&mut self, stage: &mut Stage) -> Result<usize> {
        let stopped = self.playing.len();
        for (_, playback) in self.playing.drain(..) {
            if let Some(sprite_id) = playback.despawn
                && stage.contains(sprite_id)
            {
                stage.remove(sprite_id)?;
            }
        }
        Ok(stopped)
    }

    pub fn len(&self) -> usize {
        self.playing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playing.is_empty()
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
