//! Interactive score editing for one period's wheel: both the review step
//! and the planning step render through here.

use lifewheel_core::WizardAction;
use lifewheel_domain::{clamp_score, Locale, Period, Step, DIMENSIONS};

use crate::cli::{
    error::CliError,
    output,
    shell_context::ShellContext,
    strings::ui,
    ui::{
        navigation::{read_nav_key, NavKey},
        wheel::{render_wheel, JOY_ROW, WHEEL_ROWS},
    },
};

use super::{render_header, StepOutcome};

pub fn run(context: &mut ShellContext, period: Period) -> Result<StepOutcome, CliError> {
    let mut selected = 0usize;

    loop {
        context.maybe_flush_autosave();
        render(context, period, selected);

        match read_nav_key() {
            NavKey::Up => selected = selected.saturating_sub(1),
            NavKey::Down => selected = (selected + 1).min(WHEEL_ROWS - 1),
            NavKey::Left => adjust(context, period, selected, -1),
            NavKey::Right => adjust(context, period, selected, 1),
            NavKey::Enter => {
                context.dispatch(WizardAction::Next);
                return Ok(StepOutcome::Continue);
            }
            NavKey::Esc => {
                if context.state().step != Step::first() {
                    context.dispatch(WizardAction::Prev);
                    return Ok(StepOutcome::Continue);
                }
            }
            NavKey::Char('l') => {
                let locale = match context.locale() {
                    Locale::En => Locale::Zh,
                    Locale::Zh => Locale::En,
                };
                context.set_locale(locale);
            }
            NavKey::Char('q') => return Ok(StepOutcome::Quit),
            _ => {}
        }
    }
}

fn render(context: &ShellContext, period: Period, selected: usize) {
    let locale = context.locale();
    let t = ui(locale);

    render_header(context);
    let intro = match period {
        Period::Prior => t.prior_wheel_intro,
        Period::Target => t.target_wheel_intro,
    };
    output::info(intro);
    output::info("");
    for line in render_wheel(context.state(), period, Some(selected), locale) {
        output::info(line);
    }
    output::info("");
    output::detail(t.wheel_hint);
}

/// Nudges the selected row's score by one, clamping at the scale ends.
fn adjust(context: &mut ShellContext, period: Period, selected: usize, delta: i8) {
    let current = if selected == JOY_ROW {
        context.state().joy(period)
    } else {
        context.state().scores(period).get(DIMENSIONS[selected].key)
    };
    let value = clamp_score(current.saturating_add_signed(delta));
    if value == current {
        return;
    }
    let action = if selected == JOY_ROW {
        WizardAction::SetJoy { period, value }
    } else {
        WizardAction::SetScore {
            period,
            key: DIMENSIONS[selected].key,
            value,
        }
    };
    context.dispatch(action);
}
