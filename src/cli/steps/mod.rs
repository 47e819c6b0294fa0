//! Step screens. Each screen owns its input loop and returns control to
//! the shell once the step pointer moved (or the user quit).

mod actions;
mod keyword;
mod reflections;
mod summary;
mod wheel_edit;

use lifewheel_domain::{Period, Step};

use super::{error::CliError, output, shell_context::ShellContext, strings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Quit,
}

pub fn run_current_step(context: &mut ShellContext) -> Result<StepOutcome, CliError> {
    match context.state().step {
        Step::PriorWheel => wheel_edit::run(context, Period::Prior),
        Step::Reflections => reflections::run(context),
        Step::PriorKeyword => keyword::run(context, Period::Prior),
        Step::TargetWheel => wheel_edit::run(context, Period::Target),
        Step::Actions => actions::run(context),
        Step::TargetKeyword => keyword::run(context, Period::Target),
        Step::Summary => summary::run(context),
    }
}

/// Clears the screen and prints the progress header for the current step.
pub(crate) fn render_header(context: &ShellContext) {
    let locale = context.locale();
    let step = context.state().step;
    let t = strings::ui(locale);

    output::clear_screen();
    output::section(format!(
        "{} · {} {} · {}",
        t.app_title,
        t.step_label,
        step,
        strings::step_title(step, locale)
    ));
}
