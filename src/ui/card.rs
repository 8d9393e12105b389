//! # Team Card Widget
//!
//! A ratatui widget that draws one team member card: a backdrop standing in
//! for the member photo, with the name and role text overlaid at the bottom.
//!
//! ```text
//! ┌──────────────┐
//! │░░░ada.jpg░░░░│  backdrop, cropped around the focal point
//! │░░░░░░░░░░░░░░│
//! │Ada Okafor    │  name
//! │Co-founder and│  role, clamped to two lines when collapsed
//! │CEO. Spent a  │
//! └──────────────┘
//! ```
//!
//! Opacity has no direct terminal equivalent. A card below half opacity
//! draws nothing; between half and full it is drawn dimmed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::team::TeamMember;
use crate::ui::entrance::EntranceFrame;
use crate::ui::showcase::{CardSlot, CardStyle, TextScale};
use crate::ui::theme::Theme;

const BACKDROP_FILL: &str = "░";

/// Column at which content of width `content` starts inside a frame of width
/// `frame` when anchored at `focal` percent. Negative values mean the content
/// is wider than the frame and its left part is cropped.
pub fn focal_offset(content: u16, frame: u16, focal: f32) -> i32 {
    let slack = f32::from(frame) - f32::from(content);
    (slack * focal.clamp(0.0, 100.0) / 100.0).round() as i32
}

pub struct TeamCard<'a> {
    member: &'a TeamMember,
    style: CardStyle,
    theme: &'a Theme,
    entrance: EntranceFrame,
    focused: bool,
    crossfading: bool,
    clipped_left: bool,
    clipped_right: bool,
}

impl<'a> TeamCard<'a> {
    pub fn new(member: &'a TeamMember, style: CardStyle, theme: &'a Theme) -> Self {
        Self {
            member,
            style,
            theme,
            entrance: EntranceFrame::SETTLED,
            focused: false,
            crossfading: false,
            clipped_left: false,
            clipped_right: false,
        }
    }

    /// Apply entrance frame and clipping from a strip layout slot.
    pub fn slot(mut self, slot: &CardSlot) -> Self {
        self.entrance = slot.entrance;
        self.clipped_left = slot.clipped_left;
        self.clipped_right = slot.clipped_right;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn crossfading(mut self, crossfading: bool) -> Self {
        self.crossfading = crossfading;
        self
    }

    /// Render as if `area` were `full_height` rows tall with its top
    /// `skip_rows` rows scrolled out of view.
    pub fn render_scrolled(self, area: Rect, skip_rows: u16, full_height: u16, buf: &mut Buffer) {
        if area.is_empty() || !self.is_drawn() {
            return;
        }
        if skip_rows == 0 && area.height >= full_height {
            self.render(area, buf);
            return;
        }

        let full = Rect::new(area.x, 0, area.width, full_height.max(area.height));
        let mut scratch = Buffer::empty(full);
        self.render(full, &mut scratch);

        for (src_y, y) in (skip_rows..full.bottom()).zip(area.top()..area.bottom()) {
            for x in area.left()..area.right() {
                if let (Some(src), Some(dst)) = (scratch.cell((x, src_y)), buf.cell_mut((x, y))) {
                    *dst = src.clone();
                }
            }
        }
    }

    fn is_drawn(&self) -> bool {
        self.entrance.opacity >= 0.5
    }

    fn borders(&self) -> Borders {
        let mut borders = Borders::ALL;
        if self.clipped_left {
            borders.remove(Borders::LEFT);
        }
        if self.clipped_right {
            borders.remove(Borders::RIGHT);
        }
        borders
    }

    fn fade(&self, style: Style) -> Style {
        if !self.entrance.is_settled() || self.crossfading {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    fn name_style(&self) -> Style {
        let style = match self.style.name_scale {
            TextScale::Large => Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            TextScale::Regular => Style::default()
                .fg(self.theme.fg)
                .add_modifier(Modifier::BOLD),
        };
        self.fade(style)
    }

    fn role_style(&self) -> Style {
        let style = match self.style.role_scale {
            TextScale::Large => Style::default().fg(self.theme.fg),
            TextScale::Regular => Style::default().fg(self.theme.fg_dim),
        };
        self.fade(style)
    }

    fn render_backdrop(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let fill = Style::default().fg(self.theme.bg).bg(self.theme.surface);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_symbol(BACKDROP_FILL).set_style(fill);
            }
        }

        let Some(label) = self.member.image_label() else {
            return;
        };
        let label_width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
        let offset = focal_offset(label_width, area.width, self.member.focal_x());
        let skip = usize::try_from(-offset).unwrap_or(0);
        let start = u16::try_from(offset).unwrap_or(0);
        let visible: String = label.chars().skip(skip).collect();

        let y = area.y + area.height / 2;
        buf.set_stringn(
            area.x + start,
            y,
            visible,
            usize::from(area.width.saturating_sub(start)),
            self.fade(Style::default().fg(self.theme.fg_dim).bg(self.theme.surface)),
        );
    }
}

impl Widget for TeamCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || !self.is_drawn() {
            return;
        }

        let border_color = if self.focused {
            self.theme.accent
        } else {
            self.theme.fg_dim
        };
        let block = Block::default()
            .borders(self.borders())
            .border_style(self.fade(Style::default().fg(border_color)))
            .style(Style::default().bg(self.theme.bg));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        // Text overlay sits at the bottom; the backdrop fills what is left.
        let role_rows = match self.style.role_lines {
            Some(lines) => lines,
            None => inner.height.saturating_sub(2),
        };
        let text_rows = (role_rows + 1).min(inner.height);
        let backdrop = Rect {
            height: inner.height - text_rows,
            ..inner
        };
        self.render_backdrop(backdrop, buf);

        let name_area = Rect {
            y: backdrop.bottom(),
            height: text_rows.min(1),
            ..inner
        };
        Paragraph::new(Line::styled(self.member.name.as_str(), self.name_style()))
            .render(name_area, buf);

        // Paragraph clips at its area, which is the line clamp.
        let role_area = Rect {
            y: name_area.bottom(),
            height: text_rows.saturating_sub(1),
            ..inner
        };
        Paragraph::new(self.member.role.as_str())
            .style(self.role_style())
            .wrap(Wrap { trim: true })
            .render(role_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::showcase::{card_style, ViewportClass};

    fn render_card(card: TeamCard<'_>, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    fn member() -> TeamMember {
        TeamMember::new(
            1,
            "Ada",
            "one two three four five six seven eight nine ten eleven twelve",
        )
        .with_image("team/ada.jpg")
    }

    #[test]
    fn test_focal_offset() {
        // narrower content is positioned inside the frame
        assert_eq!(focal_offset(4, 14, 0.0), 0);
        assert_eq!(focal_offset(4, 14, 50.0), 5);
        assert_eq!(focal_offset(4, 14, 100.0), 10);
        // wider content is cropped around the focal point
        assert_eq!(focal_offset(20, 10, 0.0), 0);
        assert_eq!(focal_offset(20, 10, 50.0), -5);
        assert_eq!(focal_offset(20, 10, 100.0), -10);
    }

    #[test]
    fn test_collapsed_card_clamps_role() {
        let member = member();
        let theme = Theme::default_theme();
        let style = card_style(false, ViewportClass::Small);
        let buf = render_card(TeamCard::new(&member, style, theme), style.width, 12);

        // border + 7 backdrop rows + name + 2 role rows + border
        assert!(row(&buf, 1).contains("░"));
        assert!(row(&buf, 8).contains("Ada"));
        assert!(row(&buf, 9).contains("one two"));
        assert!(!row(&buf, 10).contains("░"));
        let text: String = (0..12).map(|y| row(&buf, y)).collect();
        assert!(!text.contains("twelve"));
    }

    #[test]
    fn test_expanded_card_shows_full_role() {
        let member = member();
        let theme = Theme::default_theme();
        let style = card_style(true, ViewportClass::Small);
        let buf = render_card(TeamCard::new(&member, style, theme), style.width, 12);

        let text: String = (0..12).map(|y| row(&buf, y)).collect();
        assert!(text.contains("Ada"));
        assert!(text.contains("twelve"));
    }

    #[test]
    fn test_expanded_name_is_emphasised() {
        let member = member();
        let theme = Theme::default_theme();
        let expanded = TeamCard::new(&member, card_style(true, ViewportClass::Large), theme);
        let collapsed = TeamCard::new(&member, card_style(false, ViewportClass::Large), theme);
        assert!(expanded
            .name_style()
            .add_modifier
            .contains(Modifier::UNDERLINED));
        assert!(!collapsed
            .name_style()
            .add_modifier
            .contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_transparent_card_draws_nothing() {
        let member = member();
        let theme = Theme::default_theme();
        let style = card_style(false, ViewportClass::Small);
        let slot = CardSlot {
            id: 1,
            index: 0,
            area: Rect::new(0, 0, 16, 12),
            clipped_left: false,
            clipped_right: false,
            entrance: EntranceFrame::HIDDEN,
        };
        let buf = render_card(TeamCard::new(&member, style, theme).slot(&slot), 16, 12);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 16, 12)));
    }

    #[test]
    fn test_scrolled_card_drops_top_rows() {
        let member = member();
        let theme = Theme::default_theme();
        let style = card_style(false, ViewportClass::Small);
        let area = Rect::new(0, 0, style.width, 7);
        let mut buf = Buffer::empty(area);
        TeamCard::new(&member, style, theme).render_scrolled(area, 5, 12, &mut buf);

        // rows 5..12 of the full card: backdrop, name, role, bottom border
        assert!(!row(&buf, 0).contains('┌'));
        assert!(row(&buf, 0).contains('░'));
        assert!(row(&buf, 3).contains("Ada"));
        assert!(row(&buf, 4).contains("one two"));
        assert!(row(&buf, 6).contains('└'));
    }

    #[test]
    fn test_scrolled_expanded_card_keeps_full_role() {
        let member = member();
        let theme = Theme::default_theme();
        let style = card_style(true, ViewportClass::Small);
        let area = Rect::new(0, 0, style.width, 8);
        let mut buf = Buffer::empty(area);
        TeamCard::new(&member, style, theme).render_scrolled(area, 4, 12, &mut buf);

        let text: String = (0..8).map(|y| row(&buf, y)).collect();
        assert!(text.contains("twelve"));
    }

    #[test]
    fn test_missing_image_renders_plain_backdrop() {
        let member = TeamMember::new(2, "Bo", "Ops");
        let theme = Theme::default_theme();
        let style = card_style(false, ViewportClass::Small);
        let buf = render_card(TeamCard::new(&member, style, theme), style.width, 12);
        assert!(row(&buf, 4).trim_matches('│').chars().all(|c| c == '░'));
        assert!(row(&buf, 8).contains("Bo"));
    }
}
