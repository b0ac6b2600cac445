//! Quadrant classification and its reference texts.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::locale::Locale;

/// Both axes split at this value; ties go to the "high" side.
pub const QUADRANT_THRESHOLD: f64 = 50.0;

/// One of the four labeled regions of the score plane.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Quadrant {
    /// High social control, high economic control.
    TopRight,
    /// High social control, market economy.
    TopLeft,
    /// Social freedom, state economy.
    BottomRight,
    /// Social freedom, market economy.
    BottomLeft,
}

impl Quadrant {
    /// Classifies a point. Total over all inputs, inclusive toward the high
    /// side at exactly [`QUADRANT_THRESHOLD`].
    pub fn classify(x: f64, y: f64) -> Self {
        let high_y = y >= QUADRANT_THRESHOLD;
        let high_x = x >= QUADRANT_THRESHOLD;
        match (high_y, high_x) {
            (true, true) => Quadrant::TopRight,
            (true, false) => Quadrant::TopLeft,
            (false, true) => Quadrant::BottomRight,
            (false, false) => Quadrant::BottomLeft,
        }
    }

    /// Short label, also used as the title of the detailed description.
    pub fn label(self, locale: Locale) -> &'static str {
        self.details(locale).title
    }

    /// One-paragraph interpretation of the quadrant.
    pub fn description(self, locale: Locale) -> &'static str {
        self.details(locale).description
    }

    /// Full reference text for the quadrant.
    pub fn details(self, locale: Locale) -> &'static QuadrantDetails {
        let index = match self {
            Quadrant::TopRight => 0,
            Quadrant::TopLeft => 1,
            Quadrant::BottomRight => 2,
            Quadrant::BottomLeft => 3,
        };
        match locale {
            Locale::Ua => &UA_DETAILS[index],
            Locale::En => &EN_DETAILS[index],
        }
    }
}

/// Reference text for one quadrant in one locale.
#[derive(Debug)]
pub struct QuadrantDetails {
    pub title: &'static str,
    pub description: &'static str,
    /// Example states associated with the quadrant.
    pub states: &'static [&'static str],
    /// Example public figures associated with the quadrant.
    pub figures: &'static [&'static str],
}

static UA_DETAILS: [QuadrantDetails; 4] = [
    QuadrantDetails {
        title: "Державний контроль у всьому",
        description: "Високий рівень контролю в економіці та соціальній сфері. Держава визначає правила, координує ресурси й цінності.",
        states: &["Північна Корея", "Куба (історично)", "СРСР (пізній)"],
        figures: &["Кім Чен Ин", "Фідель Кастро", "Йосип Сталін"],
    },
    QuadrantDetails {
        title: "Соціальний етатизм, але ринок працює",
        description: "Жорсткий соціальний контроль із діючим ринком. Держава формує культурні та політичні рамки, допускає економічну активність.",
        states: &["Китай", "Сінгапур (частково)"],
        figures: &["Ден Сяопін", "Лі Куан Ю"],
    },
    QuadrantDetails {
        title: "Економічний етатизм, соціальна свобода",
        description: "Держава активно втручається в економіку, але соціальні свободи лишаються ширшими.",
        states: &["Скандинавські країни (умовно)", "Франція (соціальна держава)"],
        figures: &["Олоф Пальме", "Франсуа Міттеран"],
    },
    QuadrantDetails {
        title: "Лібералізм",
        description: "Низький державний контроль в економіці й соціальній сфері. Пріоритет — особиста свобода та ринок.",
        states: &["США (умовно)", "Нідерланди", "Швейцарія"],
        figures: &["Мілтон Фрідман", "Рон Пол"],
    },
];

static EN_DETAILS: [QuadrantDetails; 4] = [
    QuadrantDetails {
        title: "State control in everything",
        description: "High control over both economy and social sphere. The state sets rules, coordinates resources and values.",
        states: &["North Korea", "Cuba (historically)", "USSR (late period)"],
        figures: &["Kim Jong-un", "Fidel Castro", "Joseph Stalin"],
    },
    QuadrantDetails {
        title: "Social statism with a working market",
        description: "Tight social control with a functioning market. The state frames culture and politics while allowing market activity.",
        states: &["China", "Singapore (partially)"],
        figures: &["Deng Xiaoping", "Lee Kuan Yew"],
    },
    QuadrantDetails {
        title: "Economic statism with social freedom",
        description: "The state intervenes strongly in the economy while social freedoms remain broader.",
        states: &["Nordic countries (broadly)", "France (social state)"],
        figures: &["Olof Palme", "François Mitterrand"],
    },
    QuadrantDetails {
        title: "Liberalism",
        description: "Low state control in both economy and social life. Priority on individual freedom and markets.",
        states: &["USA (broadly)", "Netherlands", "Switzerland"],
        figures: &["Milton Friedman", "Ron Paul"],
    },
];
