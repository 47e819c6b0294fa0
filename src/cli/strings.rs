//! Locale-keyed strings for terminal chrome: step titles, key hints, and
//! prompts. Shared summary/export wording lives in the core string table.

use lifewheel_domain::{Locale, Step};

#[derive(Debug, Clone, Copy)]
pub struct UiStrings {
    pub app_title: &'static str,
    pub step_label: &'static str,
    pub joy_label: &'static str,
    pub wheel_hint: &'static str,
    pub prior_wheel_intro: &'static str,
    pub target_wheel_intro: &'static str,
    pub reflection_high_prompt: &'static str,
    pub reflection_low_prompt: &'static str,
    pub keyword_intro_prior: &'static str,
    pub keyword_intro_target: &'static str,
    pub custom_keyword_item: &'static str,
    pub custom_keyword_prompt: &'static str,
    pub actions_intro: &'static str,
    pub actions_pick_hint: &'static str,
    pub custom_action_prompt: &'static str,
    pub continue_item: &'static str,
    pub back_item: &'static str,
    pub quit_item: &'static str,
    pub language_item: &'static str,
    pub export_plan_item: &'static str,
    pub export_calendar_item: &'static str,
    pub export_data_item: &'static str,
    pub import_data_item: &'static str,
    pub restart_item: &'static str,
    pub import_path_prompt: &'static str,
    pub confirm_restart: &'static str,
    pub saved_to: &'static str,
    pub import_done: &'static str,
    pub goodbye: &'static str,
}

static EN: UiStrings = UiStrings {
    app_title: "🎡 Lifewheel",
    step_label: "Step",
    joy_label: "Joy",
    wheel_hint: "↑/↓ dimension · ←/→ score · Enter continue · Esc back · L language · Q quit",
    prior_wheel_intro: "How was the past year? Rate each area from 1 to 10.",
    target_wheel_intro: "Where do you want each area to be next year? Your past scores are the starting point.",
    reflection_high_prompt: "High point of the year (Enter keeps the current text)",
    reflection_low_prompt: "Low point of the year (Enter keeps the current text)",
    keyword_intro_prior: "Pick one word that captures the past year.",
    keyword_intro_target: "Pick one word to guide the coming year.",
    custom_keyword_item: "✏️ Write my own…",
    custom_keyword_prompt: "Your keyword",
    actions_intro: "Commit concrete actions for your focus areas.",
    actions_pick_hint: "Space toggles, up to 3 per area, Enter confirms.",
    custom_action_prompt: "Add your own action (leave empty to skip)",
    continue_item: "Continue →",
    back_item: "← Back",
    quit_item: "Quit",
    language_item: "中文 / English",
    export_plan_item: "Export markdown plan",
    export_calendar_item: "Export quarterly review calendar",
    export_data_item: "Download my data",
    import_data_item: "Upload saved data",
    restart_item: "Start over",
    import_path_prompt: "Path to the saved JSON file",
    confirm_restart: "Erase everything and start over?",
    saved_to: "Saved to",
    import_done: "Data imported.",
    goodbye: "See you at the next review!",
};

static ZH: UiStrings = UiStrings {
    app_title: "🎡 Lifewheel",
    step_label: "第",
    joy_label: "喜悦",
    wheel_hint: "↑/↓ 选择维度 · ←/→ 调整分数 · Enter 继续 · Esc 返回 · L 切换语言 · Q 退出",
    prior_wheel_intro: "过去的一年过得怎么样？给每个领域打 1 到 10 分。",
    target_wheel_intro: "明年你希望每个领域达到几分？去年的分数是起点。",
    reflection_high_prompt: "这一年的高光时刻（回车保留当前内容）",
    reflection_low_prompt: "这一年的低谷时刻（回车保留当前内容）",
    keyword_intro_prior: "选一个词来总结过去的一年。",
    keyword_intro_target: "选一个词来引领新的一年。",
    custom_keyword_item: "✏️ 自定义……",
    custom_keyword_prompt: "你的关键词",
    actions_intro: "为你的重点领域定下具体行动。",
    actions_pick_hint: "空格选择，每个领域最多 3 项，回车确认。",
    custom_action_prompt: "添加自定义行动（留空跳过）",
    continue_item: "继续 →",
    back_item: "← 返回",
    quit_item: "退出",
    language_item: "中文 / English",
    export_plan_item: "导出 Markdown 计划",
    export_calendar_item: "导出季度复盘日历",
    export_data_item: "下载我的数据",
    import_data_item: "上传已保存的数据",
    restart_item: "重新开始",
    import_path_prompt: "已保存 JSON 文件的路径",
    confirm_restart: "清空所有内容并重新开始？",
    saved_to: "已保存到",
    import_done: "数据已导入。",
    goodbye: "下次复盘见！",
};

pub fn ui(locale: Locale) -> &'static UiStrings {
    match locale {
        Locale::En => &EN,
        Locale::Zh => &ZH,
    }
}

/// Title line for a step in the progress header.
pub fn step_title(step: Step, locale: Locale) -> &'static str {
    match (step, locale) {
        (Step::PriorWheel, Locale::En) => "Review the past year",
        (Step::PriorWheel, Locale::Zh) => "回顾过去的一年",
        (Step::Reflections, Locale::En) => "Highs and lows",
        (Step::Reflections, Locale::Zh) => "高光与低谷",
        (Step::PriorKeyword, Locale::En) => "A word for the past year",
        (Step::PriorKeyword, Locale::Zh) => "过去一年的关键词",
        (Step::TargetWheel, Locale::En) => "Aim the coming year",
        (Step::TargetWheel, Locale::Zh) => "规划新的一年",
        (Step::Actions, Locale::En) => "Commit to actions",
        (Step::Actions, Locale::Zh) => "定下行动",
        (Step::TargetKeyword, Locale::En) => "A word for the coming year",
        (Step::TargetKeyword, Locale::Zh) => "新一年的关键词",
        (Step::Summary, Locale::En) => "Your plan",
        (Step::Summary, Locale::Zh) => "你的计划",
    }
}
