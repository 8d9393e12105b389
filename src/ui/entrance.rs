//! # Entrance Animation
//!
//! The team section fades and slides in the first time it scrolls into view.
//!
//! Whether the section has been seen is tracked by an [`EntranceLatch`], a
//! boolean that can only go from `false` to `true`. The per-card animation
//! frame is a pure function of the latch instant, the card's position in the
//! strip and the current time, see [`entrance_frame`].
//!
//! ```text
//! card 0  |=====>
//! card 1    |=====>
//! card 2      |=====>
//!         ^ latch  (STAGGER between starts, DURATION each)
//! ```

use std::time::{Duration, Instant};
use tracing::info;

use crate::ui::motion::{ease_out_cubic, progress};

/// Fraction of the section that must be visible before it counts as seen.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Delay between the entrance starts of neighbouring cards.
pub const STAGGER: Duration = Duration::from_millis(120);

/// Length of a single card's entrance.
pub const DURATION: Duration = Duration::from_millis(500);

/// Horizontal shift (columns) of a card that has not entered yet.
pub const HIDDEN_OFFSET: u16 = 6;

/// One-shot "has entered view" flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntranceLatch {
    entered_at: Option<Instant>,
}

impl EntranceLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.entered_at.is_some()
    }

    pub fn entered_at(&self) -> Option<Instant> {
        self.entered_at
    }

    /// Feed a visibility observation. Returns `true` only on the call that
    /// flips the latch; once set, further observations are ignored.
    pub fn observe(&mut self, visible_fraction: f64, now: Instant) -> bool {
        if self.is_set() || visible_fraction < VISIBILITY_THRESHOLD {
            return false;
        }
        info!(visible_fraction, "team section entered view");
        self.entered_at = Some(now);
        true
    }
}

/// Visual state of a card during its entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    /// Columns to the right of the natural position.
    pub offset: u16,
    /// `0.0` is fully transparent, `1.0` fully opaque.
    pub opacity: f64,
}

impl EntranceFrame {
    pub const HIDDEN: Self = Self {
        offset: HIDDEN_OFFSET,
        opacity: 0.0,
    };

    pub const SETTLED: Self = Self {
        offset: 0,
        opacity: 1.0,
    };

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn is_settled(&self) -> bool {
        self.offset == 0 && self.opacity >= 1.0
    }
}

/// Start instant of the card at `index` once the latch has flipped.
pub fn card_start(entered_at: Instant, index: usize) -> Instant {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    entered_at + STAGGER.saturating_mul(index)
}

/// Frame for the card at `index`.
pub fn entrance_frame(entered_at: Option<Instant>, index: usize, now: Instant) -> EntranceFrame {
    let Some(entered_at) = entered_at else {
        return EntranceFrame::HIDDEN;
    };

    let t = ease_out_cubic(progress(card_start(entered_at, index), now, DURATION));
    if t >= 1.0 {
        return EntranceFrame::SETTLED;
    }

    EntranceFrame {
        offset: (f64::from(HIDDEN_OFFSET) * (1.0 - t)).round() as u16,
        opacity: t,
    }
}

/// Whether any of `count` cards is still mid-entrance.
pub fn is_animating(entered_at: Option<Instant>, count: usize, now: Instant) -> bool {
    match (entered_at, count.checked_sub(1)) {
        (Some(entered_at), Some(last)) => now < card_start(entered_at, last) + DURATION,
        _ => false,
    }
}

/// Fraction of a section `height` rows tall, whose top edge sits at `top`
/// relative to a viewport `viewport_height` rows tall, that is on screen.
pub fn visible_fraction(top: i32, height: u16, viewport_height: u16) -> f64 {
    if height == 0 {
        return 0.0;
    }
    let bottom = top + i32::from(height);
    let visible = (bottom.min(i32::from(viewport_height)) - top.max(0)).max(0);
    f64::from(visible) / f64::from(height)
}
