//! Plays, their genres, and the catalog that resolves play identifiers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use theater_core::{BillingError, BillingResult, PlayId, ValueObject};

use crate::pricing::PricingRule;

/// Play genre. Drives which pricing rule applies.
///
/// Type strings that are neither `tragedy` nor `comedy` are kept verbatim in
/// `Unrecognized` so pricing can report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayType {
    Tragedy,
    Comedy,
    Unrecognized(String),
}

impl PlayType {
    pub fn as_str(&self) -> &str {
        match self {
            PlayType::Tragedy => "tragedy",
            PlayType::Comedy => "comedy",
            PlayType::Unrecognized(other) => other,
        }
    }

    /// Pricing rule for this type, or `UnknownPlayType` for unrecognized ones.
    pub fn pricing(&self) -> BillingResult<PricingRule> {
        match self {
            PlayType::Tragedy => Ok(PricingRule::Tragedy),
            PlayType::Comedy => Ok(PricingRule::Comedy),
            PlayType::Unrecognized(other) => Err(BillingError::unknown_play_type(other.clone())),
        }
    }
}

impl From<&str> for PlayType {
    fn from(value: &str) -> Self {
        match value {
            "tragedy" => PlayType::Tragedy,
            "comedy" => PlayType::Comedy,
            other => PlayType::Unrecognized(other.to_owned()),
        }
    }
}

impl From<String> for PlayType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tragedy" => PlayType::Tragedy,
            "comedy" => PlayType::Comedy,
            _ => PlayType::Unrecognized(value),
        }
    }
}

impl From<PlayType> for String {
    fn from(value: PlayType) -> Self {
        match value {
            PlayType::Unrecognized(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl core::fmt::Display for PlayType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValueObject for PlayType {}

/// A play: display name plus genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    name: String,
    #[serde(rename = "type")]
    play_type: PlayType,
}

impl Play {
    pub fn new(name: impl Into<String>, play_type: impl Into<PlayType>) -> Self {
        Self {
            name: name.into(),
            play_type: play_type.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn play_type(&self) -> &PlayType {
        &self.play_type
    }
}

impl ValueObject for Play {}

/// Read-only mapping from play identifier to play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: HashMap<PlayId, Play>,
}

impl PlayCatalog {
    pub fn new(plays: HashMap<PlayId, Play>) -> Self {
        Self { plays }
    }

    pub fn get(&self, play_id: &str) -> Option<&Play> {
        self.plays.get(play_id)
    }

    /// Look up a play, failing with `UnknownPlay` when it is absent.
    pub fn resolve(&self, play_id: &PlayId) -> BillingResult<&Play> {
        self.plays
            .get(play_id)
            .ok_or_else(|| BillingError::unknown_play(play_id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayId, &Play)> {
        self.plays.iter()
    }
}

impl FromIterator<(PlayId, Play)> for PlayCatalog {
    fn from_iter<I: IntoIterator<Item = (PlayId, Play)>>(iter: I) -> Self {
        Self {
            plays: iter.into_iter().collect(),
        }
    }
}
