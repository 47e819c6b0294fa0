//! Shared enums for the wizard: locale, period, and step sequencing.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

/// Lowest score a dimension can carry.
pub const SCORE_MIN: u8 = 1;
/// Highest score a dimension can carry.
pub const SCORE_MAX: u8 = 10;
/// Starting score for every prior-period dimension and joy.
pub const DEFAULT_PRIOR_SCORE: u8 = 5;
/// Starting score for every target-period dimension and joy.
pub const DEFAULT_TARGET_SCORE: u8 = 7;
/// Upper bound on committed actions per dimension.
pub const MAX_ACTIONS_PER_DIMENSION: usize = 3;
/// Cap applied to free-text reflections by the input layer.
pub const REFLECTION_MAX_CHARS: usize = 2000;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Display language for labels, prompts, and exports.
pub enum Locale {
    En,
    Zh,
}

impl Locale {
    pub fn from_tag(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Zh
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .and_then(|v| Locale::from_tag(&v))
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
/// One of the two time spans being compared.
pub enum Period {
    Prior,
    Target,
}

impl Period {
    /// Default score used when a period's entry is missing or out of range.
    pub fn default_score(self) -> u8 {
        match self {
            Period::Prior => DEFAULT_PRIOR_SCORE,
            Period::Target => DEFAULT_TARGET_SCORE,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Period::Prior => "prior",
            Period::Target => "target",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(into = "u8")]
/// Ordered wizard steps. `Summary` is the terminal pseudo-state.
pub enum Step {
    PriorWheel,
    Reflections,
    PriorKeyword,
    TargetWheel,
    Actions,
    TargetKeyword,
    Summary,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::PriorWheel,
        Step::Reflections,
        Step::PriorKeyword,
        Step::TargetWheel,
        Step::Actions,
        Step::TargetKeyword,
        Step::Summary,
    ];

    pub fn first() -> Self {
        Step::PriorWheel
    }

    pub fn last() -> Self {
        Step::Summary
    }

    /// 1-based position used for display and persistence.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(value: u8) -> Option<Self> {
        Step::ALL.get(value.checked_sub(1)? as usize).copied()
    }

    pub fn next(self) -> Self {
        Step::from_number(self.number() + 1).unwrap_or(self)
    }

    pub fn prev(self) -> Self {
        self.number()
            .checked_sub(1)
            .and_then(Step::from_number)
            .unwrap_or(self)
    }

    pub fn is_terminal(self) -> bool {
        self == Step::Summary
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.number()
    }
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Out-of-range persisted pointers coerce to the first step.
        let value = u8::deserialize(deserializer)?;
        Ok(Step::from_number(value).unwrap_or_else(Step::first))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.number(), Step::ALL.len())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Identifies one of the two free-text reflection fields.
pub enum ReflectionField {
    High,
    Low,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_sequence_is_bounded() {
        assert_eq!(Step::first().prev(), Step::first());
        assert_eq!(Step::last().next(), Step::last());
        assert_eq!(Step::PriorWheel.next(), Step::Reflections);
        assert_eq!(Step::TargetWheel.prev(), Step::PriorKeyword);
    }

    #[test]
    fn step_numbers_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_number(step.number()), Some(step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(8), None);
    }

    #[test]
    fn invalid_persisted_step_coerces_to_first() {
        let step: Step = serde_json::from_str("42").expect("deserialize");
        assert_eq!(step, Step::first());
    }

    #[test]
    fn unknown_locale_falls_back_to_default() {
        let locale: Locale = serde_json::from_str("\"fr\"").expect("deserialize");
        assert_eq!(locale, Locale::default());
    }
}
