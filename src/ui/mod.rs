//! # UI Module
//!
//! This module provides the terminal user interface of the landing page.
//!
//! ## Components
//!
//! - [`App`] - Application state (route, showcase, scroll, theme)
//! - [`mod@render`] - Rendering functions for drawing the TUI
//! - [`shell`] - Top bar, login action and the routed content slot
//! - [`showcase`] - Team strip state: single-selection expansion and layout
//! - [`entrance`] - One-shot entrance latch and staggered card animation
//! - [`card`] - Widget drawing a single team member card
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │ Brand                                 [ Login ] │
//! └─────────────────────────────────────────────────┘
//!
//!   Intro
//!
//!   Meet the team
//!  ┌──────┐ ┌──────┐ ┌──────────────────┐ ┌──────┐
//!  │      │ │      │ │   expanded card  │ │      │ → scrolls
//!  └──────┘ └──────┘ └──────────────────┘ └──────┘
//!
//!   Footer
//! ```
//!
//! ## Features
//!
//! - Click or press Enter to expand a card; only one card is expanded at a time
//! - Cards slide in once the team section scrolls into view
//! - Vertical page scrolling and horizontal strip scrolling
//! - Runtime theme switching, persisted to the config file

pub mod app;
pub mod card;
pub mod config;
pub mod entrance;
pub mod motion;
pub mod page;
pub mod render;
pub mod shell;
pub mod showcase;
pub mod theme;

pub use app::App;
pub use render::render;
