//! Shared runtime state for the wizard session. The context is the single
//! owner of the canonical [`WizardState`]; every mutation goes through
//! [`ShellContext::dispatch`], which also arms the autosave window and
//! notifies the analytics sink.

use std::time::Instant;

use lifewheel_config::{Config, ConfigManager};
use lifewheel_core::{EventSink, SnapshotStorage, WizardAction, WizardEvent, WizardService};
use lifewheel_domain::{Locale, WizardState};
use lifewheel_storage_json::JsonSnapshotStorage;

use super::{autosave::Autosave, error::CliError, output};

pub struct ShellContext {
    state: WizardState,
    storage: JsonSnapshotStorage,
    pub config: Config,
    config_manager: ConfigManager,
    autosave: Autosave,
    sink: Box<dyn EventSink>,
    pub running: bool,
}

impl ShellContext {
    /// Builds the context from the user's configuration, loading the last
    /// persisted snapshot (or defaults).
    pub fn new(sink: Box<dyn EventSink>) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(Config::default().resolve_data_root())?;
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("failed to load config, using defaults: {err}");
                Config::default()
            }
        };
        let storage = JsonSnapshotStorage::new(config.resolve_data_root())?;
        Ok(Self::with_parts(storage, config_manager, config, sink))
    }

    /// Wires the context from explicit parts; used by headless commands and
    /// tests.
    pub fn with_parts(
        storage: JsonSnapshotStorage,
        config_manager: ConfigManager,
        config: Config,
        sink: Box<dyn EventSink>,
    ) -> Self {
        output::set_color_enabled(config.ui_color_enabled);
        let mut state = storage.load();
        // The configured locale mirrors the last explicit switch and wins
        // over whatever the snapshot carries.
        if let Some(locale) = Locale::from_tag(&config.locale) {
            state.locale = locale;
        }
        Self {
            state,
            storage,
            config,
            config_manager,
            autosave: Autosave::default(),
            sink,
            running: true,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn locale(&self) -> Locale {
        self.state.locale
    }

    pub fn storage(&self) -> &JsonSnapshotStorage {
        &self.storage
    }

    pub fn plan_year(&self) -> i32 {
        self.config.plan_year
    }

    /// Applies an action through the reducer, schedules persistence, and
    /// notifies the sink.
    pub fn dispatch(&mut self, action: WizardAction) {
        let event = event_for(&self.state, &action);
        self.state = WizardService::apply(&self.state, action);
        self.autosave.mark_dirty();
        if let Some(event) = event {
            self.sink.record(&event);
        }
    }

    /// Switches the display language and mirrors the choice into the
    /// persisted configuration (replace semantics, no history).
    pub fn set_locale(&mut self, locale: Locale) {
        self.dispatch(WizardAction::SetLocale(locale));
        self.sync_config_locale(locale);
    }

    /// Applies a startup locale override without emitting a switch event.
    pub fn set_initial_locale(&mut self, locale: Locale) {
        if self.state.locale != locale {
            self.state.locale = locale;
            self.autosave.mark_dirty();
        }
        self.sync_config_locale(locale);
    }

    fn sync_config_locale(&mut self, locale: Locale) {
        if self.config.locale != locale.tag() {
            self.config.locale = locale.tag().to_string();
            if let Err(err) = self.config_manager.save(&self.config) {
                tracing::warn!("failed to persist locale preference: {err}");
            }
        }
    }

    pub fn record(&self, event: &WizardEvent) {
        self.sink.record(event);
    }

    /// Flushes the snapshot if the autosave window has elapsed. Storage
    /// failures are logged and swallowed; the session continues in memory.
    pub fn maybe_flush_autosave(&mut self) {
        if self.autosave.is_due(Instant::now()) {
            self.flush_now();
        }
    }

    /// Persists immediately, regardless of the debounce window.
    pub fn flush_now(&mut self) {
        if !self.autosave.is_pending() {
            return;
        }
        match self.storage.save(&self.state) {
            Ok(()) => {
                tracing::debug!("snapshot persisted");
                self.autosave.clear();
            }
            Err(err) => {
                tracing::warn!("failed to persist snapshot: {err}");
                // Keep the deadline armed so a later flush can retry.
            }
        }
    }
}

/// Maps an action about to be applied onto the analytics event it implies,
/// if any.
fn event_for(state: &WizardState, action: &WizardAction) -> Option<WizardEvent> {
    match action {
        WizardAction::Next => Some(WizardEvent::StepCompleted { step: state.step }),
        WizardAction::SetScore { period, key, value } => Some(WizardEvent::ScoreChanged {
            period: *period,
            key: *key,
            value: *value,
        }),
        WizardAction::SetJoy { period, value } => Some(WizardEvent::JoyChanged {
            period: *period,
            value: *value,
        }),
        WizardAction::SetLocale(locale) => Some(WizardEvent::LanguageSwitched { locale: *locale }),
        WizardAction::SetReflection { field, text } if !text.is_empty() => {
            Some(WizardEvent::ReflectionAdded { field: *field })
        }
        WizardAction::SetKeyword { period, selection } if selection.is_set() => {
            Some(WizardEvent::KeywordSelected {
                period: *period,
                keyword: selection.to_string(),
            })
        }
        WizardAction::SetAction {
            key,
            action,
            remove: false,
        } => Some(WizardEvent::ActionCommitted {
            key: *key,
            action: action.clone(),
        }),
        WizardAction::Complete => Some(WizardEvent::WizardCompleted),
        WizardAction::Reset => Some(WizardEvent::JourneyRestarted),
        _ => None,
    }
}

/// Sink that forwards events to the tracing pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &WizardEvent) {
        tracing::info!(target: "lifewheel::analytics", event = event.name(), ?event);
    }
}
