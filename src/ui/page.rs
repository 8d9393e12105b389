//! # Home Page Layout
//!
//! The home page is taller than most terminals and scrolls vertically inside
//! the shell's content slot:
//!
//! ```text
//! row 0   ┌ intro ───────────┐  INTRO_HEIGHT
//!         ├ team title ──────┤  TEAM_TITLE_HEIGHT  ┐
//!         ├ card strip ──────┤  STRIP_HEIGHT       ┘ team section
//!         └ footer ──────────┘  FOOTER_HEIGHT
//! ```
//!
//! Sections scrolled partially out of the slot are clipped; `skip_rows`
//! tells the renderer how many of their top rows are hidden.

use ratatui::layout::Rect;

use crate::ui::entrance::visible_fraction;

pub const INTRO_HEIGHT: u16 = 16;
pub const TEAM_TITLE_HEIGHT: u16 = 2;
pub const STRIP_HEIGHT: u16 = 12;
pub const FOOTER_HEIGHT: u16 = 3;

/// Team title plus card strip.
pub const TEAM_SECTION_HEIGHT: u16 = TEAM_TITLE_HEIGHT + STRIP_HEIGHT;

pub const PAGE_HEIGHT: u16 = INTRO_HEIGHT + TEAM_SECTION_HEIGHT + FOOTER_HEIGHT;

/// Columns of padding on each side of the card strip.
pub const STRIP_PADDING: u16 = 1;

/// Visible part of a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub area: Rect,
    pub skip_rows: u16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomeLayout {
    pub intro: Option<Placed>,
    pub team_title: Option<Placed>,
    pub strip: Option<Placed>,
    pub footer: Option<Placed>,
    /// Fraction of the team section currently on screen.
    pub team_visibility: f64,
}

/// Clip a section starting `top` rows below the content top.
fn place(content: Rect, top: i32, height: u16, padding: u16) -> Option<Placed> {
    let bottom = top + i32::from(height);
    let visible_top = top.max(0);
    let visible_bottom = bottom.min(i32::from(content.height));
    if visible_bottom <= visible_top {
        return None;
    }

    let y = u16::try_from(visible_top).ok()?;
    let rows = u16::try_from(visible_bottom - visible_top).ok()?;
    let skip_rows = u16::try_from(visible_top - top).ok()?;
    let width = content.width.saturating_sub(padding * 2);
    if width == 0 {
        return None;
    }

    Some(Placed {
        area: Rect::new(content.x + padding, content.y + y, width, rows),
        skip_rows,
    })
}

/// Lay out the home page in `content`, scrolled down by `scroll` rows.
pub fn home_layout(content: Rect, scroll: u16) -> HomeLayout {
    let mut top = -i32::from(scroll);

    let intro = place(content, top, INTRO_HEIGHT, 2);
    top += i32::from(INTRO_HEIGHT);

    let team_top = top;
    let team_title = place(content, top, TEAM_TITLE_HEIGHT, 2);
    top += i32::from(TEAM_TITLE_HEIGHT);

    let strip = place(content, top, STRIP_HEIGHT, STRIP_PADDING);
    top += i32::from(STRIP_HEIGHT);

    let footer = place(content, top, FOOTER_HEIGHT, 2);

    HomeLayout {
        intro,
        team_title,
        strip,
        footer,
        team_visibility: visible_fraction(team_top, TEAM_SECTION_HEIGHT, content.height),
    }
}

/// Width available to the card strip, whether or not it is on screen.
pub fn strip_width(content: Rect) -> u16 {
    content.width.saturating_sub(STRIP_PADDING * 2)
}

pub fn max_scroll(content: Rect) -> u16 {
    PAGE_HEIGHT.saturating_sub(content.height)
}
