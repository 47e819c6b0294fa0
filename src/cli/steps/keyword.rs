//! Keyword selection for one period: the catalog grid plus a free-text
//! escape hatch. The same screen serves both the review and planning
//! keywords.

use dialoguer::{Input, Select};
use lifewheel_core::WizardAction;
use lifewheel_domain::{KeywordSelection, Period, KEYWORDS};

use crate::cli::{error::CliError, output, shell_context::ShellContext, strings::ui, ui::theme};

use super::{render_header, StepOutcome};

pub fn run(context: &mut ShellContext, period: Period) -> Result<StepOutcome, CliError> {
    loop {
        context.maybe_flush_autosave();
        render_header(context);
        let locale = context.locale();
        let t = ui(locale);

        let intro = match period {
            Period::Prior => t.keyword_intro_prior,
            Period::Target => t.keyword_intro_target,
        };
        output::info(intro);
        if let Some(current) = selection_label(context, period) {
            output::detail(current);
        }

        let mut items: Vec<String> = KEYWORDS
            .iter()
            .map(|word| format!("{} {}", word.emoji, word.label.get(locale)))
            .collect();
        items.push(t.custom_keyword_item.to_string());
        items.push(t.continue_item.to_string());
        items.push(t.back_item.to_string());
        items.push(t.quit_item.to_string());

        let custom_index = KEYWORDS.len();
        let continue_index = custom_index + 1;
        let back_index = custom_index + 2;

        let default = default_index(context, period).unwrap_or(continue_index);
        let choice = Select::with_theme(theme())
            .items(&items)
            .default(default)
            .interact()?;

        if choice < KEYWORDS.len() {
            context.dispatch(WizardAction::SetKeyword {
                period,
                selection: KeywordSelection::Catalog(KEYWORDS[choice].key.to_string()),
            });
        } else if choice == custom_index {
            let text: String = Input::with_theme(theme())
                .with_prompt(t.custom_keyword_prompt)
                .allow_empty(true)
                .interact_text()?;
            let text = text.trim().to_string();
            if !text.is_empty() {
                context.dispatch(WizardAction::SetKeyword {
                    period,
                    selection: KeywordSelection::Custom(text),
                });
            }
        } else if choice == continue_index {
            // Finishing the target keyword completes the editable steps.
            if period == Period::Target {
                context.dispatch(WizardAction::Complete);
            } else {
                context.dispatch(WizardAction::Next);
            }
            return Ok(StepOutcome::Continue);
        } else if choice == back_index {
            context.dispatch(WizardAction::Prev);
            return Ok(StepOutcome::Continue);
        } else {
            return Ok(StepOutcome::Quit);
        }
    }
}

fn selection_label(context: &ShellContext, period: Period) -> Option<String> {
    let locale = context.locale();
    match context.state().keyword(period) {
        KeywordSelection::Unset => None,
        KeywordSelection::Catalog(key) => lifewheel_domain::keyword(key)
            .map(|word| format!("{} {}", word.emoji, word.label.get(locale))),
        KeywordSelection::Custom(text) => Some(format!("✏️ {text}")),
    }
}

fn default_index(context: &ShellContext, period: Period) -> Option<usize> {
    match context.state().keyword(period) {
        KeywordSelection::Catalog(key) => {
            KEYWORDS.iter().position(|word| word.key == key.as_str())
        }
        _ => None,
    }
}
