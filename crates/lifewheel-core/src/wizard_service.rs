//! The wizard state machine: every mutation flows through
//! [`WizardService::apply`].

use lifewheel_domain::{
    clamp_score, DimensionKey, KeywordSelection, Locale, Period, ReflectionField, Step,
    WizardState, MAX_ACTIONS_PER_DIMENSION, REFLECTION_MAX_CHARS,
};

/// A requested state mutation. Invalid numeric payloads are clamped during
/// application; everything else that would be out of domain is
/// unrepresentable by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    SetStep(Step),
    Next,
    Prev,
    SetScore {
        period: Period,
        key: DimensionKey,
        value: u8,
    },
    SetJoy {
        period: Period,
        value: u8,
    },
    SetLocale(Locale),
    SetReflection {
        field: ReflectionField,
        text: String,
    },
    SetKeyword {
        period: Period,
        selection: KeywordSelection,
    },
    /// Toggle semantics: with `remove`, drops the entry if present; without,
    /// appends unless the list is full or already contains the entry.
    SetAction {
        key: DimensionKey,
        action: String,
        remove: bool,
    },
    Complete,
    Reset,
    Load(Box<WizardState>),
}

/// Pure transition function over [`WizardState`]. Never fails, never
/// panics; side effects (persistence, analytics, rendering) belong to the
/// caller observing the returned state.
pub struct WizardService;

impl WizardService {
    pub fn apply(state: &WizardState, action: WizardAction) -> WizardState {
        let mut next = state.clone();
        match action {
            WizardAction::SetStep(step) => enter_step(&mut next, step),
            WizardAction::Next => {
                let step = next.step.next();
                enter_step(&mut next, step);
            }
            WizardAction::Prev => next.step = next.step.prev(),
            WizardAction::SetScore { period, key, value } => {
                // Scores::set clamps to the valid range.
                next.scores_mut(period).set(key, value);
            }
            WizardAction::SetJoy { period, value } => {
                let value = clamp_score(value);
                match period {
                    Period::Prior => next.prior_joy = value,
                    Period::Target => next.target_joy = value,
                }
            }
            WizardAction::SetLocale(locale) => next.locale = locale,
            WizardAction::SetReflection { field, text } => {
                let text = cap_reflection(text);
                match field {
                    ReflectionField::High => next.reflection_high = text,
                    ReflectionField::Low => next.reflection_low = text,
                }
            }
            WizardAction::SetKeyword { period, selection } => match period {
                Period::Prior => next.prior_keyword = selection,
                Period::Target => next.target_keyword = selection,
            },
            WizardAction::SetAction {
                key,
                action,
                remove,
            } => toggle_action(&mut next, key, action, remove),
            WizardAction::Complete => {
                next.complete = true;
                next.step = Step::last();
            }
            WizardAction::Reset => {
                // Locale survives a full reset.
                let locale = next.locale;
                next = WizardState::default();
                next.locale = locale;
            }
            WizardAction::Load(snapshot) => next = *snapshot,
        }
        next
    }
}

/// Moves the step pointer. First entry into the target wheel seeds the
/// target period from the prior period as a starting point; re-entry never
/// overwrites user edits (seed-once policy).
fn enter_step(state: &mut WizardState, step: Step) {
    if step == Step::TargetWheel && !state.target_seeded {
        state.target_scores = state.prior_scores.clone();
        state.target_joy = state.prior_joy;
        state.target_seeded = true;
    }
    state.step = step;
}

fn toggle_action(state: &mut WizardState, key: DimensionKey, action: String, remove: bool) {
    let list = state.actions.entry(key).or_default();
    if remove {
        list.retain(|entry| entry != &action);
    } else if list.len() < MAX_ACTIONS_PER_DIMENSION && !list.contains(&action) {
        list.push(action);
    }
}

fn cap_reflection(text: String) -> String {
    if text.chars().count() <= REFLECTION_MAX_CHARS {
        text
    } else {
        text.chars().take(REFLECTION_MAX_CHARS).collect()
    }
}
