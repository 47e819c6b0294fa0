//! Text rendering of the life wheel: one bar per dimension plus the joy
//! row, the terminal stand-in for the radial chart.

use lifewheel_domain::{Locale, Period, WizardState, DIMENSIONS, SCORE_MAX};

use crate::cli::strings::ui;

/// Rows on a wheel screen: the nine dimensions followed by joy.
pub const WHEEL_ROWS: usize = DIMENSIONS.len() + 1;

/// Index of the joy row within the wheel.
pub const JOY_ROW: usize = DIMENSIONS.len();

/// Renders the wheel for one period. `selected` highlights a row with a
/// pointer marker for the editing screens; pass `None` for read-only views.
pub fn render_wheel(
    state: &WizardState,
    period: Period,
    selected: Option<usize>,
    locale: Locale,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(WHEEL_ROWS);
    for (row, dimension) in DIMENSIONS.iter().enumerate() {
        let score = state.scores(period).get(dimension.key);
        lines.push(wheel_row(
            dimension.emoji,
            dimension.name.get(locale),
            score,
            selected == Some(row),
        ));
    }
    lines.push(wheel_row(
        "☀️",
        ui(locale).joy_label,
        state.joy(period),
        selected == Some(JOY_ROW),
    ));
    lines
}

fn wheel_row(emoji: &str, label: &str, score: u8, selected: bool) -> String {
    let marker = if selected { "›" } else { " " };
    format!(
        "{marker} {emoji} {label:<12} {bar} {score:>2}/10",
        bar = score_bar(score)
    )
}

fn score_bar(score: u8) -> String {
    let filled = score.min(SCORE_MAX) as usize;
    format!(
        "{}{}",
        "■".repeat(filled),
        "□".repeat(SCORE_MAX as usize - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_renders_one_row_per_dimension_plus_joy() {
        let state = WizardState::default();
        let lines = render_wheel(&state, Period::Prior, Some(0), Locale::En);
        assert_eq!(lines.len(), WHEEL_ROWS);
        assert!(lines[0].starts_with('›'));
        assert!(lines[0].contains("Body"));
        assert!(lines[0].contains("■■■■■□□□□□"));
        assert!(lines[JOY_ROW].contains("Joy"));
    }
}
