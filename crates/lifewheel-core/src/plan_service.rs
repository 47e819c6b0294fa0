//! Markdown plan generation: a pure function of the wizard state.

use std::fmt::Write as _;

use lifewheel_domain::{keyword, KeywordSelection, Locale, Period, WizardState, DIMENSIONS};

use crate::insight_service::InsightService;
use crate::strings::strings;

pub struct PlanService;

impl PlanService {
    /// Renders the full markdown plan in the state's locale. Numbers come
    /// from [`InsightService`] so exports and the summary screen agree.
    pub fn markdown(state: &WizardState, plan_year: i32) -> String {
        let t = strings(state.locale);
        let prior_year = plan_year - 1;
        let mut out = String::new();

        let _ = writeln!(out, "# 🎡 {} {}", t.plan_title, plan_year);

        let _ = writeln!(out, "\n## {}", t.keywords_heading);
        let _ = writeln!(
            out,
            "- **{}:** {}",
            prior_year,
            keyword_line(state.keyword(Period::Prior), state.locale)
        );
        let _ = writeln!(
            out,
            "- **{}:** {}",
            plan_year,
            keyword_line(state.keyword(Period::Target), state.locale)
        );

        let _ = writeln!(out, "\n## {} {}", prior_year, t.review_suffix);
        let _ = writeln!(out, "\n### {}", t.scores_heading);
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            t.th_dimension, prior_year, plan_year, t.th_gap
        );
        let _ = writeln!(out, "|------|------|------|------|");
        for dimension in &DIMENSIONS {
            let prior = state.prior_scores.get(dimension.key);
            let target = state.target_scores.get(dimension.key);
            let gap = target as i8 - prior as i8;
            let _ = writeln!(
                out,
                "| {} {} | {} | {} | {} |",
                dimension.emoji,
                dimension.name.get(state.locale),
                prior,
                target,
                signed(gap)
            );
        }

        let _ = writeln!(
            out,
            "\n**{}** {:.1} → {:.1}",
            t.average_label,
            InsightService::average(state, Period::Prior),
            InsightService::average(state, Period::Target)
        );

        let _ = writeln!(out, "\n### {}", t.reflections_heading);
        let highest = InsightService::highest(state);
        let _ = writeln!(
            out,
            "**🏆 {} - {} {} ({}/10)**",
            t.highest_label,
            highest.dimension.emoji,
            highest.dimension.name.get(state.locale),
            highest.score
        );
        if !state.reflection_high.is_empty() {
            let _ = writeln!(out, "> {}", state.reflection_high);
        }
        let lowest = InsightService::lowest(state);
        let _ = writeln!(
            out,
            "\n**💪 {} - {} {} ({}/10)**",
            t.lowest_label,
            lowest.dimension.emoji,
            lowest.dimension.name.get(state.locale),
            lowest.score
        );
        if !state.reflection_low.is_empty() {
            let _ = writeln!(out, "> {}", state.reflection_low);
        }

        let _ = writeln!(out, "\n## {} {}", plan_year, t.focus_suffix);
        let focus = InsightService::top_gaps(state, 3);
        if focus.is_empty() {
            let _ = writeln!(out, "{}", t.no_focus_areas);
        }
        for (index, entry) in focus.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {} {} ({} → {}, +{})",
                index + 1,
                entry.dimension.emoji,
                entry.dimension.name.get(state.locale),
                entry.prior,
                entry.target,
                entry.gap
            );
            let actions = state.actions_for(entry.dimension.key);
            if !actions.is_empty() {
                let _ = writeln!(out, "   - {}: {}", t.actions_label, actions.join(", "));
            }
        }

        let _ = write!(out, "\n---\n*{}*", t.footer);
        out
    }
}

fn keyword_line(selection: &KeywordSelection, locale: Locale) -> String {
    match selection {
        KeywordSelection::Unset => format!("❓ {}", strings(locale).not_selected),
        KeywordSelection::Catalog(key) => match keyword(key) {
            Some(word) => format!("{} {}", word.emoji, word.label.get(locale)),
            None => format!("❓ {}", strings(locale).not_selected),
        },
        KeywordSelection::Custom(text) => format!("✏️ {text}"),
    }
}

fn signed(gap: i8) -> String {
    if gap > 0 {
        format!("+{gap}")
    } else {
        gap.to_string()
    }
}
