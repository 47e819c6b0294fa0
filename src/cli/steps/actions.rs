//! Action commitments for the focus areas surfaced by the gap ranking.

use dialoguer::{Input, MultiSelect};
use lifewheel_core::{strings, InsightService, WizardAction};
use lifewheel_domain::{action_presets, DimensionKey, MAX_ACTIONS_PER_DIMENSION};

use crate::cli::{error::CliError, output, shell_context::ShellContext, strings::ui, ui::theme};

use super::{render_header, StepOutcome};

/// Focus areas shown on the actions step and in every export.
pub const FOCUS_AREA_COUNT: usize = 3;

pub fn run(context: &mut ShellContext) -> Result<StepOutcome, CliError> {
    render_header(context);
    let locale = context.locale();
    let t = ui(locale);

    let focus = InsightService::top_gaps(context.state(), FOCUS_AREA_COUNT);
    if focus.is_empty() {
        output::info(strings::strings(locale).no_focus_areas);
    } else {
        output::info(t.actions_intro);
        output::detail(t.actions_pick_hint);
        for entry in &focus {
            edit_dimension_actions(context, entry.dimension.key)?;
        }
    }

    context.maybe_flush_autosave();

    let choice = dialoguer::Select::with_theme(theme())
        .items(&[t.continue_item, t.back_item, t.quit_item])
        .default(0)
        .interact()?;
    match choice {
        0 => context.dispatch(WizardAction::Next),
        1 => context.dispatch(WizardAction::Prev),
        _ => return Ok(StepOutcome::Quit),
    }
    Ok(StepOutcome::Continue)
}

/// Presents the preset list (plus any custom entries already committed)
/// with toggle semantics, then offers one free-text addition.
fn edit_dimension_actions(
    context: &mut ShellContext,
    key: DimensionKey,
) -> Result<(), CliError> {
    let locale = context.locale();
    let t = ui(locale);
    let dimension = key.dimension();

    let mut options: Vec<String> = action_presets(key, locale)
        .iter()
        .map(|preset| preset.to_string())
        .collect();
    for committed in context.state().actions_for(key) {
        if !options.contains(committed) {
            options.push(committed.clone());
        }
    }
    let checked: Vec<bool> = options
        .iter()
        .map(|option| context.state().actions_for(key).contains(option))
        .collect();

    let prompt = format!("{} {}", dimension.emoji, dimension.name.get(locale));
    let picked = MultiSelect::with_theme(theme())
        .with_prompt(prompt)
        .items(&options)
        .defaults(&checked)
        .interact()?;

    // Translate the final checkbox state into toggle actions; the reducer
    // enforces the per-dimension cap and uniqueness.
    for (index, option) in options.iter().enumerate() {
        let selected = picked.contains(&index);
        let committed = context.state().actions_for(key).contains(option);
        if selected != committed {
            context.dispatch(WizardAction::SetAction {
                key,
                action: option.clone(),
                remove: !selected,
            });
        }
    }

    if context.state().actions_for(key).len() < MAX_ACTIONS_PER_DIMENSION {
        let custom: String = Input::with_theme(theme())
            .with_prompt(t.custom_action_prompt)
            .allow_empty(true)
            .interact_text()?;
        let custom = custom.trim().to_string();
        if !custom.is_empty() {
            context.dispatch(WizardAction::SetAction {
                key,
                action: custom,
                remove: false,
            });
        }
    }
    Ok(())
}
