//! Free-text reflections on the year's high and low points.

use dialoguer::{Input, Select};
use lifewheel_core::WizardAction;
use lifewheel_domain::ReflectionField;

use crate::cli::{
    error::CliError, shell_context::ShellContext, strings::ui, ui::theme,
};

use super::{render_header, StepOutcome};

pub fn run(context: &mut ShellContext) -> Result<StepOutcome, CliError> {
    render_header(context);
    let t = ui(context.locale());

    let high: String = Input::with_theme(theme())
        .with_prompt(t.reflection_high_prompt)
        .with_initial_text(context.state().reflection_high.clone())
        .allow_empty(true)
        .interact_text()?;
    if high != context.state().reflection_high {
        context.dispatch(WizardAction::SetReflection {
            field: ReflectionField::High,
            text: high,
        });
    }

    let low: String = Input::with_theme(theme())
        .with_prompt(t.reflection_low_prompt)
        .with_initial_text(context.state().reflection_low.clone())
        .allow_empty(true)
        .interact_text()?;
    if low != context.state().reflection_low {
        context.dispatch(WizardAction::SetReflection {
            field: ReflectionField::Low,
            text: low,
        });
    }

    context.maybe_flush_autosave();

    let choice = Select::with_theme(theme())
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
