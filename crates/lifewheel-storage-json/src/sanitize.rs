//! Snapshot sanitization: any syntactically valid JSON object becomes a
//! structurally complete [`WizardState`].

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use lifewheel_domain::{
    clamp_score, DimensionKey, KeywordSelection, Locale, Scores, Step, WizardState,
    DEFAULT_PRIOR_SCORE, MAX_ACTIONS_PER_DIMENSION, REFLECTION_MAX_CHARS,
};

/// Parses and sanitizes snapshot JSON. Returns `None` only when the input is
/// not a JSON object at all; individual fields with wrong shapes fall back
/// to their defaults.
pub fn sanitize_snapshot(data: &str) -> Option<WizardState> {
    let raw: RawSnapshot = serde_json::from_str(data).ok()?;
    Some(raw.into_state())
}

/// Permissive mirror of the snapshot shape. Every field tolerates absence
/// or a wrong type without poisoning the rest of the snapshot.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSnapshot {
    #[serde(deserialize_with = "lenient")]
    step: Option<Step>,
    #[serde(deserialize_with = "lenient")]
    prior_scores: Option<Scores>,
    #[serde(deserialize_with = "lenient")]
    target_scores: Option<Scores>,
    #[serde(deserialize_with = "lenient")]
    prior_joy: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    target_joy: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    reflection_high: Option<String>,
    #[serde(deserialize_with = "lenient")]
    reflection_low: Option<String>,
    #[serde(deserialize_with = "lenient")]
    prior_keyword: Option<KeywordSelection>,
    #[serde(deserialize_with = "lenient")]
    target_keyword: Option<KeywordSelection>,
    #[serde(deserialize_with = "lenient")]
    actions: Option<BTreeMap<String, Vec<String>>>,
    #[serde(deserialize_with = "lenient")]
    target_seeded: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    complete: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    locale: Option<Locale>,
}

impl RawSnapshot {
    fn into_state(self) -> WizardState {
        let prior_scores = self
            .prior_scores
            .clone()
            .unwrap_or_else(|| Scores::uniform(DEFAULT_PRIOR_SCORE));
        let target_scores = self
            .target_scores
            .clone()
            .unwrap_or_else(|| Scores::uniform(DEFAULT_PRIOR_SCORE));

        // A snapshot without the seeded flag but with its own target scores
        // was edited elsewhere; treating it as seeded keeps those scores
        // from being overwritten on the next visit to the target step.
        let target_seeded = match self.target_seeded {
            Some(flag) => flag,
            None => self.target_scores.is_some() && self.target_scores != self.prior_scores,
        };

        let mut state = WizardState {
            step: self.step.unwrap_or_else(Step::first),
            prior_scores,
            target_scores,
            target_seeded,
            ..WizardState::default()
        };
        if let Some(joy) = self.prior_joy {
            state.prior_joy = clamp_score(joy);
        }
        if let Some(joy) = self.target_joy {
            state.target_joy = clamp_score(joy);
        }
        if let Some(text) = self.reflection_high {
            state.reflection_high = cap(text);
        }
        if let Some(text) = self.reflection_low {
            state.reflection_low = cap(text);
        }
        if let Some(selection) = self.prior_keyword {
            state.prior_keyword = selection.sanitized();
        }
        if let Some(selection) = self.target_keyword {
            state.target_keyword = selection.sanitized();
        }
        if let Some(actions) = self.actions {
            state.actions = sanitize_actions(actions);
        }
        if let Some(complete) = self.complete {
            state.complete = complete;
        }
        if let Some(locale) = self.locale {
            state.locale = locale;
        }
        state
    }
}

/// Keeps only catalog dimensions, deduplicates entries in order, and
/// truncates each list to the action cap.
fn sanitize_actions(
    raw: BTreeMap<String, Vec<String>>,
) -> BTreeMap<DimensionKey, Vec<String>> {
    let mut actions = BTreeMap::new();
    for (key, entries) in raw {
        let Some(key) = DimensionKey::from_str_key(&key) else {
            continue;
        };
        let mut list: Vec<String> = Vec::new();
        for entry in entries {
            if !entry.is_empty() && !list.contains(&entry) {
                list.push(entry);
            }
            if list.len() == MAX_ACTIONS_PER_DIMENSION {
                break;
            }
        }
        actions.insert(key, list);
    }
    actions
}

fn cap(text: String) -> String {
    if text.chars().count() <= REFLECTION_MAX_CHARS {
        text
    } else {
        text.chars().take(REFLECTION_MAX_CHARS).collect()
    }
}

/// Deserializes to `None` instead of failing when the value has the wrong
/// shape, so one bad field never discards the rest of the snapshot.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
