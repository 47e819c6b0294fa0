//! The locale-keyed string table shared by the summary view and the export
//! formatters, so on-screen text and exported text come from one source.

use lifewheel_domain::Locale;

#[derive(Debug, Clone, Copy)]
pub struct StringTable {
    pub plan_title: &'static str,
    pub keywords_heading: &'static str,
    pub review_suffix: &'static str,
    pub scores_heading: &'static str,
    pub th_dimension: &'static str,
    pub th_gap: &'static str,
    pub average_label: &'static str,
    pub reflections_heading: &'static str,
    pub highest_label: &'static str,
    pub lowest_label: &'static str,
    pub focus_suffix: &'static str,
    pub actions_label: &'static str,
    pub not_selected: &'static str,
    pub no_focus_areas: &'static str,
    pub invalid_format: &'static str,
    pub calendar_review: &'static str,
    pub footer: &'static str,
}

static EN: StringTable = StringTable {
    plan_title: "Lifewheel",
    keywords_heading: "Keywords",
    review_suffix: "Review",
    scores_heading: "Scores",
    th_dimension: "Dimension",
    th_gap: "Gap",
    average_label: "Average:",
    reflections_heading: "Reflections",
    highest_label: "Highest",
    lowest_label: "Lowest",
    focus_suffix: "Focus Areas & Actions",
    actions_label: "Actions",
    not_selected: "Not selected",
    no_focus_areas: "No focus areas yet — raise a target score above its prior score.",
    invalid_format: "Invalid file format",
    calendar_review: "Life Wheel Review",
    footer: "Lifewheel | Life Wheel Method",
};

static ZH: StringTable = StringTable {
    plan_title: "Lifewheel",
    keywords_heading: "年度关键词",
    review_suffix: "回顾",
    scores_heading: "评分",
    th_dimension: "维度",
    th_gap: "差距",
    average_label: "平均分：",
    reflections_heading: "反思",
    highest_label: "最高分",
    lowest_label: "最低分",
    focus_suffix: "重点领域 & 行动",
    actions_label: "行动",
    not_selected: "未选择",
    no_focus_areas: "暂无重点领域——把某个维度的目标分数调高于去年即可。",
    invalid_format: "文件格式无效",
    calendar_review: "人生平衡轮复盘",
    footer: "Lifewheel | 人生平衡轮方法",
};

pub fn strings(locale: Locale) -> &'static StringTable {
    match locale {
        Locale::En => &EN,
        Locale::Zh => &ZH,
    }
}
