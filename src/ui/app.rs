use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};

use crate::team::{MemberId, Roster};
use crate::ui::config::Config;
use crate::ui::page::{self, HomeLayout};
use crate::ui::shell::{PageShell, Route, Router, ShellLayout};
use crate::ui::showcase::{Showcase, ViewportClass, DEFAULT_BREAKPOINT};
use crate::ui::theme::Theme;

/// Columns scrolled per horizontal wheel step.
const STRIP_SCROLL_STEP: i32 = 4;

pub struct App {
    pub shell: PageShell,
    pub router: Router,
    pub showcase: Showcase,
    pub theme: Theme,
    /// Width at which cards switch to large sizing.
    pub breakpoint: u16,
    /// Vertical scroll of the home page, in rows.
    pub page_scroll: u16,
    /// Terminal area of the last frame.
    pub viewport: Rect,
    pub should_quit: bool,
    pub config: Config,
    /// Where a theme change is persisted, if anywhere.
    pub config_path: Option<PathBuf>,
}

impl App {
    pub fn new(roster: Roster, brand: &str, theme: Theme) -> Self {
        Self {
            shell: PageShell::new(brand),
            router: Router::new(),
            showcase: Showcase::new(roster),
            theme,
            breakpoint: DEFAULT_BREAKPOINT,
            page_scroll: 0,
            viewport: Rect::default(),
            should_quit: false,
            config: Config::default(),
            config_path: None,
        }
    }

    pub fn viewport_class(&self) -> ViewportClass {
        ViewportClass::from_width(self.viewport.width, self.breakpoint)
    }

    pub fn shell_layout(&self) -> ShellLayout {
        PageShell::layout(self.viewport)
    }

    pub fn home_layout(&self) -> HomeLayout {
        page::home_layout(self.shell_layout().content, self.page_scroll)
    }

    fn strip_width(&self) -> u16 {
        page::strip_width(self.shell_layout().content)
    }

    /// Record the terminal area for this frame and re-check what is visible.
    pub fn resize(&mut self, area: Rect, now: Instant) {
        if area != self.viewport {
            debug!(width = area.width, height = area.height, "viewport resized");
            self.viewport = area;
            self.page_scroll = self.page_scroll.min(self.max_page_scroll());
            let (width, class) = (self.strip_width(), self.viewport_class());
            self.showcase.clamp_scroll(width, class);
        }
        self.observe_visibility(now);
    }

    /// Feed the team section's visibility to the entrance latch.
    pub fn observe_visibility(&mut self, now: Instant) {
        if *self.router.current() != Route::Home {
            return;
        }
        let visibility = self.home_layout().team_visibility;
        self.showcase.observe_visibility(visibility, now);
    }

    pub fn max_page_scroll(&self) -> u16 {
        page::max_scroll(self.shell_layout().content)
    }

    pub fn scroll_page(&mut self, delta: i32, now: Instant) {
        if *self.router.current() != Route::Home {
            return;
        }
        let max = i32::from(self.max_page_scroll());
        let next = (i32::from(self.page_scroll) + delta).clamp(0, max);
        self.page_scroll = u16::try_from(next).unwrap_or(0);
        self.observe_visibility(now);
    }

    pub fn scroll_strip(&mut self, delta: i32) {
        let width = self.strip_width();
        let class = self.viewport_class();
        self.showcase.scroll_by(delta, width, class);
    }

    /// Per-frame housekeeping before drawing.
    pub fn advance(&mut self, now: Instant) {
        self.showcase.advance(now);
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.showcase.is_animating(now)
    }

    pub fn press_login(&mut self) {
        self.shell.on_login_click(&mut self.router);
    }

    pub fn go_back(&mut self, now: Instant) -> bool {
        let moved = self.router.back();
        if moved {
            self.observe_visibility(now);
        }
        moved
    }

    /// Cycle to the next built-in theme and persist the choice.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next().clone();
        debug!(theme = self.theme.name, "theme changed");
        self.config.theme = self.theme.name.to_string();
        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                warn!("failed to persist theme: {e:#}");
            }
        }
    }

    fn toggle_member(&mut self, id: MemberId, now: Instant) {
        if self.showcase.toggle(id, now) {
            let (width, class) = (self.strip_width(), self.viewport_class());
            self.showcase.focus_member(id);
            self.showcase.ensure_focused_visible(width, class);
        }
    }

    fn move_focus(&mut self, forward: bool) {
        if forward {
            self.showcase.focus_next();
        } else {
            self.showcase.focus_previous();
        }
        let (width, class) = (self.strip_width(), self.viewport_class());
        self.showcase.ensure_focused_visible(width, class);
    }

    /// Left click at a terminal cell.
    pub fn handle_click(&mut self, position: Position, now: Instant) {
        if PageShell::is_login_button(self.viewport, position) {
            self.press_login();
            return;
        }

        if *self.router.current() != Route::Home {
            return;
        }
        let Some(strip) = self.home_layout().strip else {
            return;
        };
        let class = self.viewport_class();
        if let Some(id) = self.showcase.member_at(strip.area, class, now, position) {
            self.toggle_member(id, now);
        }
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key, now),
            Event::Mouse(mouse) => self.handle_mouse(*mouse, now),
            Event::Resize(width, height) => self.resize(Rect::new(0, 0, *width, *height), now),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let on_home = *self.router.current() == Route::Home;
        let half_page = i32::from(self.shell_layout().content.height / 2).max(1);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('L') => self.press_login(),
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Esc | KeyCode::Backspace => {
                self.go_back(now);
            }
            KeyCode::Left | KeyCode::Char('h') if on_home => self.move_focus(false),
            KeyCode::Right | KeyCode::Char('l') if on_home => self.move_focus(true),
            KeyCode::Enter | KeyCode::Char(' ') if on_home => {
                if self.showcase.toggle_focused(now) {
                    let (width, class) = (self.strip_width(), self.viewport_class());
                    self.showcase.ensure_focused_visible(width, class);
                }
            }
            KeyCode::Down | KeyCode::Char('j') if on_home => self.scroll_page(1, now),
            KeyCode::Up | KeyCode::Char('k') if on_home => self.scroll_page(-1, now),
            KeyCode::PageDown if on_home => self.scroll_page(half_page, now),
            KeyCode::PageUp if on_home => self.scroll_page(-half_page, now),
            KeyCode::Home | KeyCode::Char('g') if on_home => self.scroll_page(i32::MIN / 2, now),
            KeyCode::End | KeyCode::Char('G') if on_home => self.scroll_page(i32::MAX / 2, now),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let shifted = mouse.modifiers.contains(KeyModifiers::SHIFT);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(Position::new(mouse.column, mouse.row), now);
            }
            MouseEventKind::ScrollDown if shifted => self.scroll_strip(STRIP_SCROLL_STEP),
            MouseEventKind::ScrollUp if shifted => self.scroll_strip(-STRIP_SCROLL_STEP),
            MouseEventKind::ScrollDown => self.scroll_page(1, now),
            MouseEventKind::ScrollUp => self.scroll_page(-1, now),
            MouseEventKind::ScrollRight => self.scroll_strip(STRIP_SCROLL_STEP),
            MouseEventKind::ScrollLeft => self.scroll_strip(-STRIP_SCROLL_STEP),
            _ => {}
        }
    }
}
