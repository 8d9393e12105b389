//! # Page Shell
//!
//! The persistent top bar (brand label and login button) and the content
//! slot beneath it.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Crew                               [ Login ] │  <- bar
//! └──────────────────────────────────────────────┘
//!                                                   <- top margin
//!   routed page content                             <- content slot
//! ```
//!
//! The login button is not authentication: it hands [`LOGIN_PATH`] to a
//! [`Navigator`] and nothing else.

use ratatui::layout::{Position, Rect};
use tracing::info;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_BRAND: &str = "Crew";
pub const LOGIN_LABEL: &str = "[ Login ]";

/// Rows taken by the bar, including its border.
pub const BAR_HEIGHT: u16 = 3;

/// Blank rows between the bar and the content slot.
pub const CONTENT_TOP_MARGIN: u16 = 1;

/// Anything that can move the current view to another path.
pub trait Navigator {
    fn navigate_to(&mut self, path: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/login" => Route::Login,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => HOME_PATH,
            Route::Login => LOGIN_PATH,
            Route::NotFound(path) => path,
        }
    }
}

/// In-app navigator with a back stack.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Route::Home,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Return to the previous route. Returns `false` at the bottom of the stack.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => {
                info!(from = self.current.path(), to = route.path(), "navigating back");
                self.current = route;
                true
            }
            None => false,
        }
    }
}

impl Navigator for Router {
    fn navigate_to(&mut self, path: &str) {
        let route = Route::from_path(path);
        if route == self.current {
            return;
        }
        info!(from = self.current.path(), to = route.path(), "navigating");
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }
}

/// Screen areas of the shell for a given terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub bar: Rect,
    pub login_button: Rect,
    pub content: Rect,
}

#[derive(Debug, Clone)]
pub struct PageShell {
    brand: String,
}

impl Default for PageShell {
    fn default() -> Self {
        Self::new(DEFAULT_BRAND)
    }
}

impl PageShell {
    pub fn new(brand: &str) -> Self {
        Self {
            brand: brand.to_string(),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Login button action: redirect to the login page, unconditionally.
    pub fn on_login_click(&self, navigator: &mut dyn Navigator) {
        info!("login button pressed");
        navigator.navigate_to(LOGIN_PATH);
    }

    pub fn layout(area: Rect) -> ShellLayout {
        let bar = Rect {
            height: BAR_HEIGHT.min(area.height),
            ..area
        };

        let label_width = u16::try_from(LOGIN_LABEL.chars().count()).unwrap_or(u16::MAX);
        let button_width = label_width.min(bar.width.saturating_sub(2));
        let login_button = Rect::new(
            (bar.x + bar.width).saturating_sub(button_width + 2),
            bar.y + bar.height.saturating_sub(1).min(1),
            button_width,
            bar.height.min(1),
        );

        let top = BAR_HEIGHT + CONTENT_TOP_MARGIN;
        let content = Rect::new(
            area.x,
            area.y + top.min(area.height),
            area.width,
            area.height.saturating_sub(top),
        );

        ShellLayout {
            bar,
            login_button,
            content,
        }
    }

    pub fn is_login_button(area: Rect, position: Position) -> bool {
        Self::layout(area).login_button.contains(position)
    }
}
