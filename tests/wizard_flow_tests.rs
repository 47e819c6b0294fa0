//! Session-level flows exercised through the shell context, without a
//! terminal.

use lifewheel::cli::shell_context::ShellContext;
use lifewheel_config::{Config, ConfigManager};
use lifewheel_core::{NullSink, SnapshotStorage, WizardAction};
use lifewheel_domain::{DimensionKey, Locale, Period, Step};
use lifewheel_storage_json::JsonSnapshotStorage;
use tempfile::{tempdir, TempDir};

fn context_in(dir: &TempDir) -> ShellContext {
    let base = dir.path().to_path_buf();
    let config_manager = ConfigManager::with_base_dir(base.clone()).expect("config manager");
    let mut config = config_manager.load().unwrap_or_else(|_| Config::default());
    config.data_root = Some(base.clone());
    config.export_root = Some(base);
    let storage = JsonSnapshotStorage::new(config.resolve_data_root()).expect("storage");
    ShellContext::with_parts(storage, config_manager, config, Box::new(NullSink))
}

#[test]
fn rating_then_advancing_seeds_the_target_wheel() {
    let dir = tempdir().expect("tempdir");
    let mut context = context_in(&dir);

    context.dispatch(WizardAction::SetScore {
        period: Period::Prior,
        key: DimensionKey::Body,
        value: 8,
    });
    context.dispatch(WizardAction::Next);
    context.dispatch(WizardAction::Next);
    context.dispatch(WizardAction::Next);

    let state = context.state();
    assert_eq!(state.step, Step::TargetWheel);
    assert_eq!(state.target_scores.get(DimensionKey::Body), 8);
}

#[test]
fn flushed_edits_survive_a_new_session() {
    let dir = tempdir().expect("tempdir");

    let mut context = context_in(&dir);
    context.dispatch(WizardAction::SetScore {
        period: Period::Prior,
        key: DimensionKey::Career,
        value: 9,
    });
    context.dispatch(WizardAction::Next);
    context.flush_now();

    let reloaded = context_in(&dir);
    assert_eq!(reloaded.state().prior_scores.get(DimensionKey::Career), 9);
    assert_eq!(reloaded.state().step, Step::Reflections);
}

#[test]
fn unflushed_edits_are_lost_as_per_the_debounce_contract() {
    let dir = tempdir().expect("tempdir");

    let mut context = context_in(&dir);
    context.dispatch(WizardAction::SetScore {
        period: Period::Prior,
        key: DimensionKey::Money,
        value: 2,
    });
    drop(context);

    let reloaded = context_in(&dir);
    assert_eq!(reloaded.state().prior_scores.get(DimensionKey::Money), 5);
}

#[test]
fn locale_switch_is_mirrored_into_config_and_survives_reset() {
    let dir = tempdir().expect("tempdir");

    let mut context = context_in(&dir);
    context.set_locale(Locale::En);
    context.dispatch(WizardAction::Reset);
    assert_eq!(context.locale(), Locale::En);
    context.flush_now();

    // A fresh session resolves the configured locale again.
    let reloaded = context_in(&dir);
    assert_eq!(reloaded.locale(), Locale::En);
    assert_eq!(reloaded.config.locale, "en");
}

#[test]
fn import_failure_leaves_the_session_untouched() {
    let dir = tempdir().expect("tempdir");
    let mut context = context_in(&dir);
    context.dispatch(WizardAction::SetScore {
        period: Period::Prior,
        key: DimensionKey::Soul,
        value: 9,
    });

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "not json at all").expect("write bad file");
    let result = context.storage().import_from_path(&bad);
    assert!(result.is_err());
    assert_eq!(context.state().prior_scores.get(DimensionKey::Soul), 9);
}
