//! Fire-and-forget notifications emitted as the wizard advances. Sinks
//! observe transitions; they can never fail the caller.

use lifewheel_domain::{DimensionKey, Locale, Period, ReflectionField, Step};

#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    StepCompleted { step: Step },
    LanguageSwitched { locale: Locale },
    ScoreChanged { period: Period, key: DimensionKey, value: u8 },
    JoyChanged { period: Period, value: u8 },
    ReflectionAdded { field: ReflectionField },
    KeywordSelected { period: Period, keyword: String },
    ActionCommitted { key: DimensionKey, action: String },
    PlanExported,
    CalendarExported,
    DataExported,
    DataImported,
    JourneyRestarted,
    WizardCompleted,
}

impl WizardEvent {
    /// Stable event name for logging backends.
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::StepCompleted { .. } => "step_completed",
            WizardEvent::LanguageSwitched { .. } => "language_switched",
            WizardEvent::ScoreChanged { .. } => "wheel_score_changed",
            WizardEvent::JoyChanged { .. } => "joy_score_changed",
            WizardEvent::ReflectionAdded { .. } => "reflection_added",
            WizardEvent::KeywordSelected { .. } => "keyword_selected",
            WizardEvent::ActionCommitted { .. } => "action_committed",
            WizardEvent::PlanExported => "plan_exported",
            WizardEvent::CalendarExported => "calendar_exported",
            WizardEvent::DataExported => "data_exported",
            WizardEvent::DataImported => "data_imported",
            WizardEvent::JourneyRestarted => "journey_restarted",
            WizardEvent::WizardCompleted => "wizard_completed",
        }
    }
}

/// Notification hook observed by the shell. Implementations must swallow
/// their own failures.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &WizardEvent);
}

/// Sink that discards everything; used by tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &WizardEvent) {}
}
