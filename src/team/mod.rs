//! # Team Module
//!
//! Static team data shown by the showcase.
//!
//! ## Sources
//!
//! | Source | Loader |
//! |--------|--------|
//! | Built-in | [`Roster::builtin`] (compiled from `assets/team.json`) |
//! | Team file | [`Roster::load_from`] (`--team FILE` or `team_file` in config) |
//!
//! ## File Format
//!
//! ```json
//! {
//!   "members": [
//!     { "id": 1, "name": "Ada Okafor", "role": "CEO", "image": "team/ada.jpg", "focal_x": 40 }
//!   ]
//! }
//! ```

pub mod member;
pub mod roster;

pub use member::{MemberId, TeamMember, DEFAULT_FOCAL_X};
pub use roster::{Roster, RosterError};
