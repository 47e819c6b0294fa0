use lifewheel_domain::{
    DimensionKey, KeywordSelection, Locale, Period, ReflectionField, Step, WizardState,
};

use crate::calendar_service::CalendarService;
use crate::insight_service::InsightService;
use crate::plan_service::PlanService;
use crate::wizard_service::{WizardAction, WizardService};

fn apply_all(state: WizardState, actions: Vec<WizardAction>) -> WizardState {
    actions
        .into_iter()
        .fold(state, |state, action| WizardService::apply(&state, action))
}

#[test]
fn entering_target_wheel_seeds_from_prior_period() {
    let state = apply_all(
        WizardState::default(),
        vec![
            WizardAction::SetScore {
                period: Period::Prior,
                key: DimensionKey::Body,
                value: 8,
            },
            WizardAction::SetStep(Step::TargetWheel),
        ],
    );

    assert_eq!(state.target_scores.get(DimensionKey::Body), 8);
    assert_eq!(state.target_scores.get(DimensionKey::Mind), 5);
    assert_eq!(state.target_joy, state.prior_joy);
    assert!(state.target_seeded);
}

#[test]
fn reentering_target_wheel_keeps_user_edits() {
    let state = apply_all(
        WizardState::default(),
        vec![
            WizardAction::SetStep(Step::TargetWheel),
            WizardAction::SetScore {
                period: Period::Target,
                key: DimensionKey::Body,
                value: 9,
            },
            WizardAction::Prev,
            WizardAction::SetStep(Step::TargetWheel),
        ],
    );

    assert_eq!(state.target_scores.get(DimensionKey::Body), 9);
}

#[test]
fn advancing_through_the_wizard_seeds_target_scores() {
    // Start at step one, rate the prior period, then walk forward.
    let state = apply_all(
        WizardState::default(),
        vec![
            WizardAction::SetScore {
                period: Period::Prior,
                key: DimensionKey::Body,
                value: 8,
            },
            WizardAction::Next,
            WizardAction::Next,
            WizardAction::Next,
        ],
    );

    assert_eq!(state.step, Step::TargetWheel);
    assert_eq!(state.target_scores.get(DimensionKey::Body), 8);
}

#[test]
fn step_pointer_never_leaves_the_valid_range() {
    let mut state = WizardState::default();
    state = WizardService::apply(&state, WizardAction::Prev);
    assert_eq!(state.step, Step::PriorWheel);

    for _ in 0..20 {
        state = WizardService::apply(&state, WizardAction::Next);
    }
    assert_eq!(state.step, Step::Summary);
}

#[test]
fn scores_and_joy_clamp_out_of_range_values() {
    let state = apply_all(
        WizardState::default(),
        vec![
            WizardAction::SetScore {
                period: Period::Prior,
                key: DimensionKey::Mind,
                value: 0,
            },
            WizardAction::SetScore {
                period: Period::Prior,
                key: DimensionKey::Soul,
                value: 42,
            },
            WizardAction::SetJoy {
                period: Period::Target,
                value: 99,
            },
        ],
    );

    assert_eq!(state.prior_scores.get(DimensionKey::Mind), 1);
    assert_eq!(state.prior_scores.get(DimensionKey::Soul), 10);
    assert_eq!(state.target_joy, 10);
}

#[test]
fn action_list_enforces_cap_and_uniqueness() {
    let key = DimensionKey::Body;
    let add = |action: &str| WizardAction::SetAction {
        key,
        action: action.into(),
        remove: false,
    };

    let state = apply_all(
        WizardState::default(),
        vec![
            add("run"),
            add("swim"),
            add("run"), // duplicate, ignored
            add("lift"),
            add("climb"), // over the cap, ignored
        ],
    );
    assert_eq!(state.actions_for(key), ["run", "swim", "lift"]);

    let state = apply_all(
        state,
        vec![
            WizardAction::SetAction {
                key,
                action: "swim".into(),
                remove: true,
            },
            add("swim"),
        ],
    );
    assert_eq!(state.actions_for(key), ["run", "lift", "swim"]);
}

#[test]
fn removing_an_absent_action_is_a_no_op() {
    let state = WizardService::apply(
        &WizardState::default(),
        WizardAction::SetAction {
            key: DimensionKey::Soul,
            action: "missing".into(),
            remove: true,
        },
    );
    assert!(state.actions_for(DimensionKey::Soul).is_empty());
}

#[test]
fn reset_preserves_locale_only() {
    let state = apply_all(
        WizardState::default(),
        vec![
            WizardAction::SetLocale(Locale::En),
            WizardAction::SetScore {
                period: Period::Prior,
                key: DimensionKey::Money,
                value: 9,
            },
            WizardAction::SetReflection {
                field: ReflectionField::High,
                text: "a good year".into(),
            },
            WizardAction::Reset,
        ],
    );

    let mut expected = WizardState::default();
    expected.locale = Locale::En;
    assert_eq!(state, expected);
}

#[test]
fn complete_forces_the_summary_step() {
    let state = WizardService::apply(&WizardState::default(), WizardAction::Complete);
    assert!(state.complete);
    assert_eq!(state.step, Step::Summary);
}

#[test]
fn load_replaces_the_whole_state() {
    let mut snapshot = WizardState::default();
    snapshot.step = Step::Actions;
    snapshot.prior_joy = 9;

    let state = WizardService::apply(
        &WizardState::default(),
        WizardAction::Load(Box::new(snapshot.clone())),
    );
    assert_eq!(state, snapshot);
}

#[test]
fn reflections_are_capped_not_rejected() {
    let long = "x".repeat(2001);
    let state = WizardService::apply(
        &WizardState::default(),
        WizardAction::SetReflection {
            field: ReflectionField::Low,
            text: long,
        },
    );
    assert_eq!(state.reflection_low.chars().count(), 2000);
}

#[test]
fn keyword_selection_replaces_per_period() {
    let state = apply_all(
        WizardState::default(),
        vec![
            WizardAction::SetKeyword {
                period: Period::Prior,
                selection: KeywordSelection::Catalog("balance".into()),
            },
            WizardAction::SetKeyword {
                period: Period::Target,
                selection: KeywordSelection::Custom("sail more".into()),
            },
        ],
    );
    assert_eq!(
        state.prior_keyword,
        KeywordSelection::Catalog("balance".into())
    );
    assert_eq!(
        state.target_keyword,
        KeywordSelection::Custom("sail more".into())
    );
}

/// Builds a state with identical prior/target scores so individual gaps can
/// be introduced per test.
fn flat_state() -> WizardState {
    let mut state = WizardState::default();
    for key in DimensionKey::ALL {
        state.prior_scores.set(key, 5);
        state.target_scores.set(key, 5);
    }
    state.target_seeded = true;
    state
}

#[test]
fn top_gaps_ranks_by_gap_with_catalog_tie_break() {
    let mut state = flat_state();
    // body 3→8 (gap 5), mind 4→9 (gap 5), soul 2→9 (gap 7)
    state.prior_scores.set(DimensionKey::Body, 3);
    state.target_scores.set(DimensionKey::Body, 8);
    state.prior_scores.set(DimensionKey::Mind, 4);
    state.target_scores.set(DimensionKey::Mind, 9);
    state.prior_scores.set(DimensionKey::Soul, 2);
    state.target_scores.set(DimensionKey::Soul, 9);

    let top = InsightService::top_gaps(&state, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].dimension.key, DimensionKey::Soul);
    assert_eq!(top[0].gap, 7);
    assert_eq!(top[1].dimension.key, DimensionKey::Body);
    assert_eq!(top[1].gap, 5);
}

#[test]
fn top_gaps_excludes_zero_and_negative_gaps() {
    let mut state = flat_state();
    state.target_scores.set(DimensionKey::Career, 4); // negative gap
    state.target_scores.set(DimensionKey::Money, 8); // the only positive gap

    let top = InsightService::top_gaps(&state, 3);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].dimension.key, DimensionKey::Money);
}

#[test]
fn extremum_lookup_uses_first_seen_tie_break() {
    let state = flat_state();
    assert_eq!(InsightService::highest(&state).dimension.key, DimensionKey::Body);
    assert_eq!(InsightService::lowest(&state).dimension.key, DimensionKey::Body);

    let mut state = flat_state();
    state.prior_scores.set(DimensionKey::Mind, 9);
    state.prior_scores.set(DimensionKey::Friends, 2);
    let highest = InsightService::highest(&state);
    assert_eq!(highest.dimension.key, DimensionKey::Mind);
    assert_eq!(highest.score, 9);
    assert_eq!(InsightService::lowest(&state).dimension.key, DimensionKey::Friends);
}

#[test]
fn average_folds_joy_in_as_a_tenth_dimension() {
    let mut state = flat_state();
    state.prior_joy = 5;
    assert_eq!(InsightService::average(&state, Period::Prior), 5.0);

    state.prior_scores.set(DimensionKey::Body, 10);
    // (8 * 5 + 10 + 5) / 10
    assert_eq!(InsightService::average(&state, Period::Prior), 5.5);
}

#[test]
fn markdown_average_matches_the_insight_average() {
    let mut state = WizardState::default();
    state.locale = Locale::En;
    state.prior_scores.set(DimensionKey::Growth, 9);

    let markdown = PlanService::markdown(&state, 2026);
    let expected = format!(
        "{:.1} → {:.1}",
        InsightService::average(&state, Period::Prior),
        InsightService::average(&state, Period::Target)
    );
    assert!(markdown.contains(&expected), "markdown: {markdown}");
}

#[test]
fn markdown_lists_focus_areas_with_actions() {
    let mut state = flat_state();
    state.locale = Locale::En;
    state.prior_scores.set(DimensionKey::Romance, 3);
    state.target_scores.set(DimensionKey::Romance, 8);
    state
        .actions
        .insert(DimensionKey::Romance, vec!["Weekly date nights".into()]);

    let markdown = PlanService::markdown(&state, 2026);
    assert!(markdown.contains("1. 💕 Romance (3 → 8, +5)"));
    assert!(markdown.contains("   - Actions: Weekly date nights"));
    assert!(markdown.contains("| 💕 Romance | 3 | 8 | +5 |"));
}

#[test]
fn markdown_shows_empty_state_when_no_gaps_qualify() {
    let mut state = flat_state();
    state.locale = Locale::En;

    let markdown = PlanService::markdown(&state, 2026);
    assert!(markdown.contains("No focus areas yet"));
}

#[test]
fn markdown_renders_keyword_selections() {
    let mut state = WizardState::default();
    state.locale = Locale::En;
    state.prior_keyword = KeywordSelection::Catalog("balance".into());
    state.target_keyword = KeywordSelection::Custom("sail more".into());

    let markdown = PlanService::markdown(&state, 2026);
    assert!(markdown.contains("- **2025:** ⚖️ Balance"));
    assert!(markdown.contains("- **2026:** ✏️ sail more"));
}

#[test]
fn markdown_localizes_to_chinese() {
    let state = WizardState::default();
    let markdown = PlanService::markdown(&state, 2026);
    assert!(markdown.contains("## 年度关键词"));
    assert!(markdown.contains("| 💪 身体 |"));
}

#[test]
fn calendar_has_four_unique_events_pinned_to_the_plan_year() {
    let ics = CalendarService::ics(Locale::En, 2026);

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 4);
    assert_eq!(ics.matches("END:VEVENT").count(), 4);
    for stamp in [
        "DTSTART:20260331T100000Z",
        "DTSTART:20260630T100000Z",
        "DTSTART:20260930T100000Z",
        "DTSTART:20261231T100000Z",
    ] {
        assert!(ics.contains(stamp), "missing {stamp}");
    }
    assert!(ics.contains("DTEND:20260331T110000Z"));
    assert!(ics.contains("SUMMARY:Q1 Life Wheel Review"));

    let uids: Vec<&str> = ics
        .lines()
        .filter(|line| line.starts_with("UID:"))
        .collect();
    assert_eq!(uids.len(), 4);
    let mut unique = uids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 4);
}

#[test]
fn calendar_localizes_summaries() {
    let ics = CalendarService::ics(Locale::Zh, 2027);
    assert!(ics.contains("SUMMARY:Q2 人生平衡轮复盘"));
    assert!(ics.contains("DTSTART:20270630T100000Z"));
}
