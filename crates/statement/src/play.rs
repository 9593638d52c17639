use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use repertory_core::{DomainError, ValueObject};

use crate::error::{StatementError, StatementResult};

/// Catalogue key of a play (e.g. `"hamlet"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlayId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl FromStr for PlayId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::invalid_id("play id cannot be empty"));
        }
        Ok(Self::new(s))
    }
}

/// Pricing family of a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayType {
    Tragedy,
    Comedy,
}

impl PlayType {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayType::Tragedy => "tragedy",
            PlayType::Comedy => "comedy",
        }
    }
}

impl core::fmt::Display for PlayType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayType {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(PlayType::Tragedy),
            "comedy" => Ok(PlayType::Comedy),
            other => Err(StatementError::UnknownPlayType(other.to_string())),
        }
    }
}

/// Catalogue entry.
///
/// `type` is kept as written so that a catalogue with an unsupported type
/// still loads; it only fails once a performance of that play is priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Play {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    pub fn play_type(&self) -> StatementResult<PlayType> {
        self.kind.parse()
    }
}

impl ValueObject for Play {}

/// Catalogue of plays keyed by [`PlayId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plays(BTreeMap<PlayId, Play>);

impl Plays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<PlayId>, play: Play) -> Option<Play> {
        self.0.insert(id.into(), play)
    }

    pub fn get(&self, id: &PlayId) -> Option<&Play> {
        self.0.get(id)
    }

    /// Like [`Plays::get`], but a missing play is an error.
    pub fn lookup(&self, id: &PlayId) -> StatementResult<&Play> {
        self.get(id)
            .ok_or_else(|| StatementError::UnknownPlay(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayId, &Play)> {
        self.0.iter()
    }
}

impl FromIterator<(PlayId, Play)> for Plays {
    fn from_iter<I: IntoIterator<Item = (PlayId, Play)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
