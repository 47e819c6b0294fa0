//! The canonical wizard state and its component value types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize};

use crate::catalog::{keyword, DimensionKey};
use crate::common::{Locale, Period, Step, DEFAULT_PRIOR_SCORE, SCORE_MAX, SCORE_MIN};

/// Per-dimension scores for one period.
///
/// The map always carries exactly the full catalog key set; the only
/// constructors fill every key and `set` cannot add or remove entries.
/// Deserialization drops foreign keys and fills gaps, so the invariant
/// survives partial or corrupt input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scores {
    entries: BTreeMap<DimensionKey, u8>,
}

impl Scores {
    /// Creates a score board with every dimension at `value`.
    pub fn uniform(value: u8) -> Self {
        let value = clamp_score(value);
        Self {
            entries: DimensionKey::ALL.iter().map(|key| (*key, value)).collect(),
        }
    }

    /// Builds a full score board from a possibly partial set of entries,
    /// filling gaps with `default` and clamping everything to the valid range.
    pub fn from_partial<I>(entries: I, default: u8) -> Self
    where
        I: IntoIterator<Item = (DimensionKey, u8)>,
    {
        let mut scores = Scores::uniform(default);
        for (key, value) in entries {
            scores.set(key, value);
        }
        scores
    }

    pub fn get(&self, key: DimensionKey) -> u8 {
        self.entries[&key]
    }

    pub fn set(&mut self, key: DimensionKey, value: u8) {
        self.entries.insert(key, clamp_score(value));
    }

    /// Iterates entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (DimensionKey, u8)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, *value))
    }

    pub fn total(&self) -> u32 {
        self.entries.values().map(|value| *value as u32).sum()
    }
}

pub fn clamp_score(value: u8) -> u8 {
    value.clamp(SCORE_MIN, SCORE_MAX)
}

impl Serialize for Scores {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.entries.iter().map(|(key, value)| (key.as_str(), *value)))
    }
}

impl<'de> Deserialize<'de> for Scores {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, u8>::deserialize(deserializer)?;
        Ok(Scores::from_partial(
            raw.into_iter()
                .filter_map(|(key, value)| DimensionKey::from_str_key(&key).map(|key| (key, value))),
            DEFAULT_PRIOR_SCORE,
        ))
    }
}

/// A period's keyword choice: nothing yet, a catalog entry, or free text.
///
/// Serialized as the original wire format: empty string, the catalog key,
/// or the custom text behind a `custom:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeywordSelection {
    #[default]
    Unset,
    Catalog(String),
    Custom(String),
}

const CUSTOM_PREFIX: &str = "custom:";

impl KeywordSelection {
    pub fn parse(value: &str) -> Self {
        if value.is_empty() {
            KeywordSelection::Unset
        } else if let Some(text) = value.strip_prefix(CUSTOM_PREFIX) {
            KeywordSelection::Custom(text.to_string())
        } else {
            KeywordSelection::Catalog(value.to_string())
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, KeywordSelection::Unset)
    }

    /// Drops catalog selections that no longer reference a catalog entry.
    pub fn sanitized(self) -> Self {
        match self {
            KeywordSelection::Catalog(key) if keyword(&key).is_none() => KeywordSelection::Unset,
            other => other,
        }
    }
}

impl fmt::Display for KeywordSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordSelection::Unset => Ok(()),
            KeywordSelection::Catalog(key) => f.write_str(key),
            KeywordSelection::Custom(text) => write!(f, "{CUSTOM_PREFIX}{text}"),
        }
    }
}

impl Serialize for KeywordSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for KeywordSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(KeywordSelection::parse(&value))
    }
}

/// The complete evolving wizard state. Mutated exclusively through the
/// reducer; readers treat it as immutable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WizardState {
    pub step: Step,
    pub prior_scores: Scores,
    pub target_scores: Scores,
    pub prior_joy: u8,
    pub target_joy: u8,
    #[serde(default)]
    pub reflection_high: String,
    #[serde(default)]
    pub reflection_low: String,
    #[serde(default)]
    pub prior_keyword: KeywordSelection,
    #[serde(default)]
    pub target_keyword: KeywordSelection,
    #[serde(default)]
    pub actions: BTreeMap<DimensionKey, Vec<String>>,
    #[serde(default)]
    pub target_seeded: bool,
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub locale: Locale,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: Step::first(),
            prior_scores: Scores::uniform(Period::Prior.default_score()),
            target_scores: Scores::uniform(Period::Target.default_score()),
            prior_joy: Period::Prior.default_score(),
            target_joy: Period::Target.default_score(),
            reflection_high: String::new(),
            reflection_low: String::new(),
            prior_keyword: KeywordSelection::Unset,
            target_keyword: KeywordSelection::Unset,
            actions: BTreeMap::new(),
            target_seeded: false,
            complete: false,
            locale: Locale::default(),
        }
    }
}

impl WizardState {
    pub fn scores(&self, period: Period) -> &Scores {
        match period {
            Period::Prior => &self.prior_scores,
            Period::Target => &self.target_scores,
        }
    }

    pub fn scores_mut(&mut self, period: Period) -> &mut Scores {
        match period {
            Period::Prior => &mut self.prior_scores,
            Period::Target => &mut self.target_scores,
        }
    }

    pub fn joy(&self, period: Period) -> u8 {
        match period {
            Period::Prior => self.prior_joy,
            Period::Target => self.target_joy,
        }
    }

    pub fn keyword(&self, period: Period) -> &KeywordSelection {
        match period {
            Period::Prior => &self.prior_keyword,
            Period::Target => &self.target_keyword,
        }
    }

    /// Actions committed for a dimension; empty when none were recorded.
    pub fn actions_for(&self, key: DimensionKey) -> &[String] {
        self.actions.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }
}
