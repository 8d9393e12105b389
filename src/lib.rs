//! Crew - an interactive terminal landing page
//!
//! This library provides the page shell, the animated team showcase and the
//! static team data they render.

pub mod logging;
pub mod team;
pub mod ui;
