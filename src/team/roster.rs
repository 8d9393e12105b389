use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::team::member::{MemberId, TeamMember};

/// Roster compiled into the binary, used when no team file is configured.
const BUILTIN_ROSTER: &str = include_str!("../../assets/team.json");

/// Problems found while reading roster data.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("entry {index} is not a team member: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("entry {index} reuses member id {id}")]
    DuplicateId { index: usize, id: MemberId },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RosterFile {
    #[serde(default)]
    members: Vec<serde_json::Value>,
}

/// Ordered list of team members; order is presentation order.
#[derive(Debug, Default)]
pub struct Roster {
    members: Vec<TeamMember>,
    skipped: Vec<RosterError>,
}

impl Roster {
    /// Build a roster, dropping entries whose id was already used.
    pub fn from_members(members: Vec<TeamMember>) -> Self {
        Self::dedup(members.into_iter().enumerate())
    }

    /// Keep the first member for each id. `index` is the position in the
    /// source data, for reporting.
    fn dedup(entries: impl Iterator<Item = (usize, TeamMember)>) -> Self {
        let mut seen = HashSet::new();
        let mut members = Vec::new();
        let mut skipped = Vec::new();

        for (index, member) in entries {
            if seen.insert(member.id) {
                members.push(member);
            } else {
                warn!(index, id = member.id, "dropping team member with duplicate id");
                skipped.push(RosterError::DuplicateId {
                    index,
                    id: member.id,
                });
            }
        }

        Self { members, skipped }
    }

    /// Parse roster JSON. Only a malformed document is an error; individual
    /// bad entries are skipped and reported through [`Roster::skipped`].
    pub fn parse(json: &str) -> Result<Self, RosterError> {
        let file: RosterFile = serde_json::from_str(json)?;

        let mut valid = Vec::with_capacity(file.members.len());
        let mut invalid = Vec::new();
        for (index, value) in file.members.into_iter().enumerate() {
            match serde_json::from_value::<TeamMember>(value) {
                Ok(member) => valid.push((index, member)),
                Err(source) => {
                    warn!(index, "skipping malformed team member: {source}");
                    invalid.push(RosterError::InvalidEntry { index, source });
                }
            }
        }

        let mut roster = Self::dedup(valid.into_iter());
        invalid.append(&mut roster.skipped);
        roster.skipped = invalid;
        Ok(roster)
    }

    /// Load a roster from a JSON file on disk.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read team file: {}", path.display()))?;
        let roster = Self::parse(&contents)
            .with_context(|| format!("Failed to parse team file: {}", path.display()))?;
        info!(
            path = %path.display(),
            members = roster.len(),
            skipped = roster.skipped.len(),
            "loaded team roster"
        );
        Ok(roster)
    }

    /// The roster shipped with the binary.
    pub fn builtin() -> Self {
        match Self::parse(BUILTIN_ROSTER) {
            Ok(roster) => {
                debug!(members = roster.len(), "using built-in team roster");
                roster
            }
            Err(err) => {
                warn!("built-in roster is unreadable: {err}");
                Self::default()
            }
        }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Entries that were dropped while building this roster.
    pub fn skipped(&self) -> &[RosterError] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn position(&self, id: MemberId) -> Option<usize> {
        self.members.iter().position(|m| m.id == id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.position(id).is_some()
    }
}
