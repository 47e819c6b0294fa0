//! The terminal summary: both wheels, averages, focus areas, and the
//! export/import/restart menu.

use dialoguer::{Confirm, Input, Select};
use lifewheel_core::{strings, CoreError, InsightService, WizardAction};
use lifewheel_domain::{KeywordSelection, Locale, Period};

use crate::cli::{
    error::CliError, export, output, shell_context::ShellContext, strings::ui,
    ui::{theme, wheel::render_wheel},
};

use super::{actions::FOCUS_AREA_COUNT, render_header, StepOutcome};

pub fn run(context: &mut ShellContext) -> Result<StepOutcome, CliError> {
    loop {
        context.maybe_flush_autosave();
        render_summary(context);

        let t = ui(context.locale());
        let items = [
            t.export_plan_item,
            t.export_calendar_item,
            t.export_data_item,
            t.import_data_item,
            t.language_item,
            t.restart_item,
            t.back_item,
            t.quit_item,
        ];
        let choice = Select::with_theme(theme())
            .items(&items)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let path = export::export_plan(context)?;
                output::success(format!("{} {}", t.saved_to, path.display()));
                pause();
            }
            1 => {
                let path = export::export_calendar(context)?;
                output::success(format!("{} {}", t.saved_to, path.display()));
                pause();
            }
            2 => {
                let path = export::export_data(context)?;
                output::success(format!("{} {}", t.saved_to, path.display()));
                pause();
            }
            3 => import_flow(context)?,
            4 => {
                let locale = match context.locale() {
                    Locale::En => Locale::Zh,
                    Locale::Zh => Locale::En,
                };
                context.set_locale(locale);
            }
            5 => {
                let confirmed = Confirm::with_theme(theme())
                    .with_prompt(t.confirm_restart)
                    .default(false)
                    .interact()?;
                if confirmed {
                    context.dispatch(WizardAction::Reset);
                    return Ok(StepOutcome::Continue);
                }
            }
            6 => {
                context.dispatch(WizardAction::Prev);
                return Ok(StepOutcome::Continue);
            }
            _ => return Ok(StepOutcome::Quit),
        }
    }
}

fn render_summary(context: &ShellContext) {
    let state = context.state();
    let locale = state.locale;
    let shared = strings::strings(locale);
    let plan_year = context.plan_year();
    let prior_year = plan_year - 1;

    render_header(context);

    output::info(format!("{prior_year}:"));
    for line in render_wheel(state, Period::Prior, None, locale) {
        output::info(line);
    }
    output::info(format!("\n{plan_year}:"));
    for line in render_wheel(state, Period::Target, None, locale) {
        output::info(line);
    }

    // Same averaging routine as the exports, so the numbers always agree.
    output::info(format!(
        "\n{} {:.1} → {:.1}",
        shared.average_label,
        InsightService::average(state, Period::Prior),
        InsightService::average(state, Period::Target)
    ));

    output::info(format!(
        "{}: {prior_year} {} · {plan_year} {}",
        shared.keywords_heading,
        keyword_text(state.keyword(Period::Prior), locale),
        keyword_text(state.keyword(Period::Target), locale)
    ));

    let highest = InsightService::highest(state);
    let lowest = InsightService::lowest(state);
    output::info(format!(
        "🏆 {} {} ({}/10) · 💪 {} {} ({}/10)",
        shared.highest_label,
        highest.dimension.name.get(locale),
        highest.score,
        shared.lowest_label,
        lowest.dimension.name.get(locale),
        lowest.score
    ));

    output::info(format!("\n{} {}", plan_year, shared.focus_suffix));
    let focus = InsightService::top_gaps(state, FOCUS_AREA_COUNT);
    if focus.is_empty() {
        output::detail(shared.no_focus_areas);
    }
    for (index, entry) in focus.iter().enumerate() {
        output::info(format!(
            "{}. {} {} ({} → {}, +{})",
            index + 1,
            entry.dimension.emoji,
            entry.dimension.name.get(locale),
            entry.prior,
            entry.target,
            entry.gap
        ));
        let committed = state.actions_for(entry.dimension.key);
        if !committed.is_empty() {
            output::detail(format!(
                "   {}: {}",
                shared.actions_label,
                committed.join(", ")
            ));
        }
    }
    output::info("");
}

fn import_flow(context: &mut ShellContext) -> Result<(), CliError> {
    let t = ui(context.locale());
    let path: String = Input::with_theme(theme())
        .with_prompt(t.import_path_prompt)
        .interact_text()?;

    match export::import_data(context, std::path::Path::new(path.trim())) {
        Ok(()) => {
            output::success(t.import_done);
            pause();
            Ok(())
        }
        Err(CliError::Core(CoreError::InvalidSnapshot)) => {
            output::error(strings::strings(context.locale()).invalid_format);
            pause();
            Ok(())
        }
        Err(CliError::Io(err)) => {
            output::error(err);
            pause();
            Ok(())
        }
        Err(other) => Err(other),
    }
}

fn keyword_text(selection: &KeywordSelection, locale: Locale) -> String {
    match selection {
        KeywordSelection::Unset => strings::strings(locale).not_selected.to_string(),
        KeywordSelection::Catalog(key) => lifewheel_domain::keyword(key)
            .map(|word| format!("{} {}", word.emoji, word.label.get(locale)))
            .unwrap_or_else(|| strings::strings(locale).not_selected.to_string()),
        KeywordSelection::Custom(text) => format!("✏️ {text}"),
    }
}

/// Waits for Enter so export feedback stays visible before the next
/// redraw.
fn pause() {
    use crate::cli::ui::navigation::{read_nav_key, NavKey};
    loop {
        match read_nav_key() {
            NavKey::Enter | NavKey::Esc | NavKey::Unknown => break,
            _ => {}
        }
    }
}
