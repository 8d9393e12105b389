//! # Team Showcase
//!
//! State and layout for the horizontal strip of team member cards.
//!
//! ## State
//!
//! - `expanded` - at most one member is expanded (single selection)
//! - `entrance` - one-shot latch set when the section first becomes visible
//! - `focused` / `scroll_x` - keyboard focus and horizontal strip scroll
//!
//! Per-card visuals are derived from state through [`card_style`], a pure
//! function of `(expanded, viewport class)`.

use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::team::{MemberId, Roster, TeamMember};
use crate::ui::entrance::{self, EntranceFrame, EntranceLatch};
use crate::ui::motion::{ease_out_cubic, lerp_u16, progress};

/// Terminal width (columns) from which the large sizing applies.
pub const DEFAULT_BREAKPOINT: u16 = 100;

/// Lines of role text shown on a collapsed card.
pub const COLLAPSED_LINES: u16 = 2;

/// Columns between neighbouring cards.
pub const CARD_GAP: u16 = 1;

/// Length of the width/crossfade transition after a click.
pub const TRANSITION: Duration = Duration::from_millis(300);

/// Coarse bucket for picking device-appropriate sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Small,
    Large,
}

impl ViewportClass {
    pub fn from_width(width: u16, breakpoint: u16) -> Self {
        if width < breakpoint {
            ViewportClass::Small
        } else {
            ViewportClass::Large
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextScale {
    Regular,
    Large,
}

/// Visual attributes of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    /// Card width in columns.
    pub width: u16,
    pub name_scale: TextScale,
    pub role_scale: TextScale,
    /// Maximum lines of role text, `None` when unclipped.
    pub role_lines: Option<u16>,
}

/// Visual attributes for a card given its expansion and the viewport class.
pub fn card_style(expanded: bool, class: ViewportClass) -> CardStyle {
    let width = match (class, expanded) {
        (ViewportClass::Small, false) => 16,
        (ViewportClass::Small, true) => 40,
        (ViewportClass::Large, false) => 22,
        (ViewportClass::Large, true) => 56,
    };

    if expanded {
        CardStyle {
            width,
            name_scale: TextScale::Large,
            role_scale: TextScale::Large,
            role_lines: None,
        }
    } else {
        CardStyle {
            width,
            name_scale: TextScale::Regular,
            role_scale: TextScale::Regular,
            role_lines: Some(COLLAPSED_LINES),
        }
    }
}

/// Width/crossfade transition started by the most recent click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionTransition {
    /// Member that was expanded before the click.
    pub previous: Option<MemberId>,
    pub started: Instant,
}

impl ExpansionTransition {
    pub fn progress(&self, now: Instant) -> f64 {
        ease_out_cubic(progress(self.started, now, TRANSITION))
    }

    pub fn is_done(&self, now: Instant) -> bool {
        progress(self.started, now, TRANSITION) >= 1.0
    }
}

/// Where a card lands inside the strip for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSlot {
    pub id: MemberId,
    pub index: usize,
    /// On-screen part of the card.
    pub area: Rect,
    pub clipped_left: bool,
    pub clipped_right: bool,
    pub entrance: EntranceFrame,
}

#[derive(Debug)]
pub struct Showcase {
    roster: Roster,
    expanded: Option<MemberId>,
    entrance: EntranceLatch,
    focused: usize,
    scroll_x: u16,
    transition: Option<ExpansionTransition>,
}

impl Showcase {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            expanded: None,
            entrance: EntranceLatch::new(),
            focused: 0,
            scroll_x: 0,
            transition: None,
        }
    }

    pub fn members(&self) -> &[TeamMember] {
        self.roster.members()
    }

    pub fn expanded(&self) -> Option<MemberId> {
        self.expanded
    }

    pub fn is_expanded(&self, id: MemberId) -> bool {
        self.expanded == Some(id)
    }

    pub fn has_entered_view(&self) -> bool {
        self.entrance.is_set()
    }

    pub fn entered_at(&self) -> Option<Instant> {
        self.entrance.entered_at()
    }

    pub fn transition(&self) -> Option<&ExpansionTransition> {
        self.transition.as_ref()
    }

    pub fn scroll_x(&self) -> u16 {
        self.scroll_x
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_member(&self) -> Option<&TeamMember> {
        self.members().get(self.focused)
    }

    /// Card click: collapse if already expanded, otherwise expand it and
    /// collapse whichever card was expanded before. Unknown ids are ignored.
    pub fn toggle(&mut self, id: MemberId, now: Instant) -> bool {
        if !self.roster.contains(id) {
            debug!(id, "ignoring click on unknown team member");
            return false;
        }

        let previous = self.expanded;
        self.expanded = if previous == Some(id) { None } else { Some(id) };
        self.transition = Some(ExpansionTransition {
            previous,
            started: now,
        });
        debug!(?previous, expanded = ?self.expanded, "team card toggled");
        true
    }

    /// Toggle the card under keyboard focus.
    pub fn toggle_focused(&mut self, now: Instant) -> bool {
        match self.focused_member().map(|m| m.id) {
            Some(id) => self.toggle(id, now),
            None => false,
        }
    }

    /// Feed the section's visible fraction into the entrance latch.
    pub fn observe_visibility(&mut self, visible_fraction: f64, now: Instant) -> bool {
        self.entrance.observe(visible_fraction, now)
    }

    pub fn focus_next(&mut self) {
        let count = self.members().len();
        if count > 0 {
            self.focused = (self.focused + 1).min(count - 1);
        }
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn focus_member(&mut self, id: MemberId) {
        if let Some(index) = self.roster.position(id) {
            self.focused = index;
        }
    }

    /// Drop the finished transition.
    pub fn advance(&mut self, now: Instant) {
        if self.transition.is_some_and(|t| t.is_done(now)) {
            self.transition = None;
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_some_and(|t| !t.is_done(now))
            || entrance::is_animating(self.entered_at(), self.members().len(), now)
    }

    /// Style a card settles into once any transition finishes.
    pub fn target_style(&self, id: MemberId, class: ViewportClass) -> CardStyle {
        card_style(self.is_expanded(id), class)
    }

    /// Current on-screen width of a card, following the running transition.
    pub fn card_width(&self, id: MemberId, class: ViewportClass, now: Instant) -> u16 {
        let target = self.target_style(id, class).width;
        match self.transition {
            Some(transition) if !transition.is_done(now) => {
                let from = card_style(transition.previous == Some(id), class).width;
                lerp_u16(from, target, transition.progress(now))
            }
            _ => target,
        }
    }

    /// Whether a card's text is in the first half of its crossfade.
    pub fn is_crossfading(&self, id: MemberId, now: Instant) -> bool {
        match self.transition {
            Some(transition) => {
                let affected = transition.previous == Some(id) || self.expanded == Some(id);
                affected && progress(transition.started, now, TRANSITION) < 0.5
            }
            None => false,
        }
    }

    /// Total strip width once transitions settle.
    pub fn content_width(&self, class: ViewportClass) -> u16 {
        let count = self.members().len();
        let cards: u32 = self
            .members()
            .iter()
            .map(|m| u32::from(self.target_style(m.id, class).width))
            .sum();
        let gaps = u32::from(CARD_GAP) * u32::try_from(count.saturating_sub(1)).unwrap_or(0);
        u16::try_from(cards + gaps).unwrap_or(u16::MAX)
    }

    pub fn max_scroll(&self, strip_width: u16, class: ViewportClass) -> u16 {
        self.content_width(class).saturating_sub(strip_width)
    }

    pub fn scroll_by(&mut self, delta: i32, strip_width: u16, class: ViewportClass) {
        let max = i32::from(self.max_scroll(strip_width, class));
        let next = (i32::from(self.scroll_x) + delta).clamp(0, max);
        self.scroll_x = u16::try_from(next).unwrap_or(0);
    }

    pub fn clamp_scroll(&mut self, strip_width: u16, class: ViewportClass) {
        self.scroll_x = self.scroll_x.min(self.max_scroll(strip_width, class));
    }

    /// Scroll so the focused card is entirely inside the strip.
    pub fn ensure_focused_visible(&mut self, strip_width: u16, class: ViewportClass) {
        let Some(id) = self.focused_member().map(|m| m.id) else {
            self.scroll_x = 0;
            return;
        };
        let width = self.target_style(id, class).width;

        let start: u16 = self.members()[..self.focused]
            .iter()
            .map(|m| self.target_style(m.id, class).width.saturating_add(CARD_GAP))
            .fold(0, u16::saturating_add);
        let end = start.saturating_add(width);

        if start < self.scroll_x {
            self.scroll_x = start;
        } else if end > self.scroll_x.saturating_add(strip_width) {
            self.scroll_x = end.saturating_sub(strip_width).min(start);
        }
        self.clamp_scroll(strip_width, class);
    }

    /// Place every card inside `strip` for the frame at `now`. Cards
    /// entirely outside the strip are omitted.
    pub fn layout(&self, strip: Rect, class: ViewportClass, now: Instant) -> Vec<CardSlot> {
        let mut slots = Vec::new();
        let strip_width = i32::from(strip.width);
        let mut x = -i32::from(self.scroll_x);

        for (index, member) in self.members().iter().enumerate() {
            let width = i32::from(self.card_width(member.id, class, now));
            let entrance = entrance::entrance_frame(self.entered_at(), index, now);
            let left = x + i32::from(entrance.offset);
            let right = left + width;
            x += width + i32::from(CARD_GAP);

            let visible_left = left.max(0);
            let visible_right = right.min(strip_width);
            if visible_right <= visible_left {
                continue;
            }

            let (Ok(offset), Ok(visible_width)) = (
                u16::try_from(visible_left),
                u16::try_from(visible_right - visible_left),
            ) else {
                continue;
            };

            slots.push(CardSlot {
                id: member.id,
                index,
                area: Rect::new(strip.x + offset, strip.y, visible_width, strip.height),
                clipped_left: left < 0,
                clipped_right: right > strip_width,
                entrance,
            });
        }

        slots
    }

    /// Member whose visible card contains the given cell.
    pub fn member_at(
        &self,
        strip: Rect,
        class: ViewportClass,
        now: Instant,
        position: Position,
    ) -> Option<MemberId> {
        self.layout(strip, class, now)
            .into_iter()
            .find(|slot| slot.entrance.is_visible() && slot.area.contains(position))
            .map(|slot| slot.id)
    }
}
