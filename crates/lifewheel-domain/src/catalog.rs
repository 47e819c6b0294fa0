//! Static reference data: the nine life dimensions, the keyword catalog,
//! and the per-dimension action presets. Loaded once, never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::Locale;

/// A label carried in both supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub zh: &'static str,
}

impl Localized {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Zh => self.zh,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
/// Catalog key for a life dimension. Declaration order is catalog order;
/// the derived `Ord` preserves it for maps and ranking tie-breaks.
pub enum DimensionKey {
    Body,
    Mind,
    Soul,
    Romance,
    Family,
    Friends,
    Career,
    Money,
    Growth,
}

impl DimensionKey {
    pub const ALL: [DimensionKey; 9] = [
        DimensionKey::Body,
        DimensionKey::Mind,
        DimensionKey::Soul,
        DimensionKey::Romance,
        DimensionKey::Family,
        DimensionKey::Friends,
        DimensionKey::Career,
        DimensionKey::Money,
        DimensionKey::Growth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DimensionKey::Body => "body",
            DimensionKey::Mind => "mind",
            DimensionKey::Soul => "soul",
            DimensionKey::Romance => "romance",
            DimensionKey::Family => "family",
            DimensionKey::Friends => "friends",
            DimensionKey::Career => "career",
            DimensionKey::Money => "money",
            DimensionKey::Growth => "growth",
        }
    }

    pub fn from_str_key(value: &str) -> Option<Self> {
        DimensionKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == value)
    }

    /// The full descriptor for this key.
    pub fn dimension(self) -> &'static Dimension {
        &DIMENSIONS[self as usize]
    }
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Groups dimensions for presentation (wheel sector coloring).
pub enum DimensionCategory {
    Health,
    Relationships,
    Work,
}

impl fmt::Display for DimensionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DimensionCategory::Health => "Health",
            DimensionCategory::Relationships => "Relationships",
            DimensionCategory::Work => "Work",
        };
        f.write_str(label)
    }
}

/// Static descriptor for one life dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub key: DimensionKey,
    pub emoji: &'static str,
    pub color: &'static str,
    pub category: DimensionCategory,
    pub name: Localized,
    pub short: Localized,
    pub detail: Localized,
}

/// The nine life dimensions, in catalog order.
pub static DIMENSIONS: [Dimension; 9] = [
    Dimension {
        key: DimensionKey::Body,
        emoji: "💪",
        color: "#4CAF50",
        category: DimensionCategory::Health,
        name: Localized { en: "Body", zh: "身体" },
        short: Localized { en: "Health & fitness", zh: "健康体能" },
        detail: Localized {
            en: "Your physical health, fitness level, energy, sleep quality, and overall bodily well-being. How well are you taking care of your body?",
            zh: "你的身体健康、体能水平、精力状态、睡眠质量和整体身体状况。你有多好地照顾自己的身体？",
        },
    },
    Dimension {
        key: DimensionKey::Mind,
        emoji: "🧠",
        color: "#66BB6A",
        category: DimensionCategory::Health,
        name: Localized { en: "Mind", zh: "思想" },
        short: Localized { en: "Mental wellness", zh: "心理健康" },
        detail: Localized {
            en: "Your mental health, emotional stability, stress management, and cognitive well-being. How clear and balanced is your mind?",
            zh: "你的心理健康、情绪稳定性、压力管理和认知状态。你的思维有多清晰和平衡？",
        },
    },
    Dimension {
        key: DimensionKey::Soul,
        emoji: "✨",
        color: "#81C784",
        category: DimensionCategory::Health,
        name: Localized { en: "Soul", zh: "灵魂" },
        short: Localized { en: "Inner peace", zh: "内心平静" },
        detail: Localized {
            en: "Your spiritual wellness, sense of purpose, inner peace, and connection to something greater. How fulfilled do you feel spiritually?",
            zh: "你的精神健康、人生意义感、内心平静和与更高层面的连接。你在精神层面有多满足？",
        },
    },
    Dimension {
        key: DimensionKey::Romance,
        emoji: "💕",
        color: "#E91E63",
        category: DimensionCategory::Relationships,
        name: Localized { en: "Romance", zh: "爱情" },
        short: Localized { en: "Love & intimacy", zh: "亲密关系" },
        detail: Localized {
            en: "Your romantic relationship, intimacy, partnership quality, and love life. How satisfied are you with your romantic connection?",
            zh: "你的浪漫关系、亲密感、伴侣关系质量和爱情生活。你对亲密关系有多满意？",
        },
    },
    Dimension {
        key: DimensionKey::Family,
        emoji: "👨‍👩‍👧",
        color: "#F06292",
        category: DimensionCategory::Relationships,
        name: Localized { en: "Family", zh: "家庭" },
        short: Localized { en: "Family bonds", zh: "家庭关系" },
        detail: Localized {
            en: "Your family relationships, home environment, and bonds with parents, children, or siblings. How strong are your family connections?",
            zh: "你与家人的关系、家庭环境、与父母/孩子/兄弟姐妹的纽带。你的家庭关系有多紧密？",
        },
    },
    Dimension {
        key: DimensionKey::Friends,
        emoji: "👥",
        color: "#F48FB1",
        category: DimensionCategory::Relationships,
        name: Localized { en: "Friends", zh: "朋友" },
        short: Localized { en: "Social life", zh: "社交生活" },
        detail: Localized {
            en: "Your friendships, social connections, community involvement, and sense of belonging. How rich is your social life?",
            zh: "你的友谊、社交关系、社区参与和归属感。你的社交生活有多丰富？",
        },
    },
    Dimension {
        key: DimensionKey::Career,
        emoji: "💼",
        color: "#2196F3",
        category: DimensionCategory::Work,
        name: Localized { en: "Career", zh: "职业" },
        short: Localized { en: "Work & purpose", zh: "工作事业" },
        detail: Localized {
            en: "Your career satisfaction, professional growth, work-life balance, and sense of purpose at work. How fulfilled are you professionally?",
            zh: "你的职业满意度、专业成长、工作生活平衡和工作中的使命感。你在职业上有多满足？",
        },
    },
    Dimension {
        key: DimensionKey::Money,
        emoji: "💰",
        color: "#42A5F5",
        category: DimensionCategory::Work,
        name: Localized { en: "Money", zh: "金钱" },
        short: Localized { en: "Financial health", zh: "财务状况" },
        detail: Localized {
            en: "Your financial security, income, savings, investments, and money management. How stable and healthy are your finances?",
            zh: "你的财务安全、收入、储蓄、投资和理财能力。你的财务状况有多稳定健康？",
        },
    },
    Dimension {
        key: DimensionKey::Growth,
        emoji: "📈",
        color: "#64B5F6",
        category: DimensionCategory::Work,
        name: Localized { en: "Growth", zh: "成长" },
        short: Localized { en: "Learning & skills", zh: "学习技能" },
        detail: Localized {
            en: "Your personal development, learning, skill acquisition, and intellectual growth. How much are you growing and evolving?",
            zh: "你的个人发展、学习进步、技能提升和智识成长。你成长和进化了多少？",
        },
    },
];

/// Static descriptor for a catalog keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    pub key: &'static str,
    pub emoji: &'static str,
    pub label: Localized,
}

/// The keyword catalog, grouped by theme.
pub static KEYWORDS: [Keyword; 32] = [
    // Core growth & development
    Keyword { key: "growth", emoji: "🌱", label: Localized { en: "Growth", zh: "成长" } },
    Keyword { key: "learning", emoji: "📚", label: Localized { en: "Learning", zh: "学习" } },
    Keyword { key: "breakthrough", emoji: "🚀", label: Localized { en: "Breakthrough", zh: "突破" } },
    Keyword { key: "transformation", emoji: "🦋", label: Localized { en: "Transformation", zh: "蜕变" } },
    // Balance & wellness
    Keyword { key: "balance", emoji: "⚖️", label: Localized { en: "Balance", zh: "平衡" } },
    Keyword { key: "peace", emoji: "☮️", label: Localized { en: "Peace", zh: "平和" } },
    Keyword { key: "healing", emoji: "💚", label: Localized { en: "Healing", zh: "疗愈" } },
    Keyword { key: "rest", emoji: "😴", label: Localized { en: "Rest", zh: "休息" } },
    // Action & courage
    Keyword { key: "courage", emoji: "🦁", label: Localized { en: "Courage", zh: "勇气" } },
    Keyword { key: "action", emoji: "⚡", label: Localized { en: "Action", zh: "行动" } },
    Keyword { key: "persistence", emoji: "💪", label: Localized { en: "Persistence", zh: "坚持" } },
    Keyword { key: "adventure", emoji: "🏔️", label: Localized { en: "Adventure", zh: "冒险" } },
    // Focus & clarity
    Keyword { key: "focus", emoji: "🎯", label: Localized { en: "Focus", zh: "专注" } },
    Keyword { key: "clarity", emoji: "💎", label: Localized { en: "Clarity", zh: "清晰" } },
    Keyword { key: "simplicity", emoji: "🍃", label: Localized { en: "Simplicity", zh: "简单" } },
    Keyword { key: "discipline", emoji: "⏰", label: Localized { en: "Discipline", zh: "自律" } },
    // Joy & freedom
    Keyword { key: "joy", emoji: "✨", label: Localized { en: "Joy", zh: "喜悦" } },
    Keyword { key: "freedom", emoji: "🕊️", label: Localized { en: "Freedom", zh: "自由" } },
    Keyword { key: "gratitude", emoji: "🙏", label: Localized { en: "Gratitude", zh: "感恩" } },
    Keyword { key: "play", emoji: "🎈", label: Localized { en: "Play", zh: "玩乐" } },
    // Connection & impact
    Keyword { key: "connection", emoji: "🤝", label: Localized { en: "Connection", zh: "连接" } },
    Keyword { key: "love", emoji: "❤️", label: Localized { en: "Love", zh: "爱" } },
    Keyword { key: "impact", emoji: "💥", label: Localized { en: "Impact", zh: "影响力" } },
    Keyword { key: "service", emoji: "🌟", label: Localized { en: "Service", zh: "服务" } },
    // Abundance & success
    Keyword { key: "abundance", emoji: "🌈", label: Localized { en: "Abundance", zh: "丰盛" } },
    Keyword { key: "prosperity", emoji: "💰", label: Localized { en: "Prosperity", zh: "富足" } },
    Keyword { key: "success", emoji: "🏆", label: Localized { en: "Success", zh: "成功" } },
    Keyword { key: "creation", emoji: "🎨", label: Localized { en: "Creation", zh: "创造" } },
    // Change & uncertainty
    Keyword { key: "change", emoji: "🔄", label: Localized { en: "Change", zh: "变化" } },
    Keyword { key: "volatile", emoji: "🌊", label: Localized { en: "Volatile", zh: "动荡" } },
    Keyword { key: "uncertainty", emoji: "❓", label: Localized { en: "Uncertainty", zh: "不确定" } },
    Keyword { key: "transition", emoji: "🚪", label: Localized { en: "Transition", zh: "过渡" } },
];

/// Looks up a catalog keyword by key.
pub fn keyword(key: &str) -> Option<&'static Keyword> {
    KEYWORDS.iter().find(|word| word.key == key)
}

/// Preset action suggestions offered for a dimension in the given locale.
pub fn action_presets(key: DimensionKey, locale: Locale) -> [&'static str; 5] {
    match (key, locale) {
        (DimensionKey::Body, Locale::En) => [
            "Exercise 3x/week",
            "Sleep 7+ hours",
            "Eat healthier",
            "Run a marathon",
            "Quit smoking/drinking",
        ],
        (DimensionKey::Body, Locale::Zh) => {
            ["每周运动3次", "睡眠7小时以上", "健康饮食", "跑马拉松", "戒烟/戒酒"]
        }
        (DimensionKey::Mind, Locale::En) => [
            "Start meditation",
            "See a therapist",
            "Daily journaling",
            "Digital detox weekends",
            "Read 12 books",
        ],
        (DimensionKey::Mind, Locale::Zh) => {
            ["开始冥想", "寻求心理咨询", "每日写日记", "周末数字排毒", "读12本书"]
        }
        (DimensionKey::Soul, Locale::En) => [
            "Weekly nature walks",
            "Start gratitude practice",
            "Join a community",
            "Travel solo",
            "Learn to say no",
        ],
        (DimensionKey::Soul, Locale::Zh) => {
            ["每周户外散步", "培养感恩习惯", "加入社群", "独自旅行", "学会拒绝"]
        }
        (DimensionKey::Romance, Locale::En) => [
            "Weekly date nights",
            "Couples therapy",
            "Start dating again",
            "Move in together",
            "Get engaged/married",
        ],
        (DimensionKey::Romance, Locale::Zh) => {
            ["每周约会", "伴侣咨询", "重新开始约会", "同居", "订婚/结婚"]
        }
        (DimensionKey::Family, Locale::En) => [
            "Weekly family dinners",
            "Call parents weekly",
            "Plan a family trip",
            "Have a child",
            "Move closer to family",
        ],
        (DimensionKey::Family, Locale::Zh) => {
            ["每周家庭聚餐", "每周给父母打电话", "计划家庭旅行", "生育计划", "搬近家人"]
        }
        (DimensionKey::Friends, Locale::En) => [
            "Monthly friend meetups",
            "Reconnect with old friends",
            "Join a club/group",
            "Host gatherings",
            "Make 3 new friends",
        ],
        (DimensionKey::Friends, Locale::Zh) => [
            "每月朋友聚会",
            "联系老朋友",
            "加入俱乐部/兴趣小组",
            "组织聚会",
            "结交3个新朋友",
        ],
        (DimensionKey::Career, Locale::En) => [
            "Change jobs",
            "Get promoted",
            "Start a side hustle",
            "Switch industries",
            "Start own business",
        ],
        (DimensionKey::Career, Locale::Zh) => ["换工作", "晋升", "开始副业", "转行", "创业"],
        (DimensionKey::Money, Locale::En) => [
            "Save 20% of income",
            "Pay off debt",
            "Start investing",
            "Create budget",
            "Increase income 30%",
        ],
        (DimensionKey::Money, Locale::Zh) => {
            ["存收入的20%", "还清债务", "开始投资", "制定预算", "收入增加30%"]
        }
        (DimensionKey::Growth, Locale::En) => [
            "Get a certification",
            "Learn a new skill",
            "Take online courses",
            "Find a mentor",
            "Attend conferences",
        ],
        (DimensionKey::Growth, Locale::Zh) => {
            ["考取证书", "学习新技能", "上网课", "找导师", "参加行业会议"]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_key_order() {
        for (index, dimension) in DIMENSIONS.iter().enumerate() {
            assert_eq!(dimension.key as usize, index);
            assert_eq!(dimension.key.dimension().key, dimension.key);
        }
    }

    #[test]
    fn keyword_lookup_finds_catalog_entries() {
        let word = keyword("balance").expect("catalog keyword");
        assert_eq!(word.label.get(Locale::En), "Balance");
        assert!(keyword("not-a-keyword").is_none());
    }

    #[test]
    fn dimension_keys_round_trip_through_strings() {
        for key in DimensionKey::ALL {
            assert_eq!(DimensionKey::from_str_key(key.as_str()), Some(key));
        }
        assert_eq!(DimensionKey::from_str_key("banana"), None);
    }
}
