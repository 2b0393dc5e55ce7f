use super::{ChoiceOption, Dimension, Question, QuestionKind, Section};

/// Intake question whose answer names the respondent.
pub const RESPONDENT_QUESTION: &str = "S0Q1";

/// The two categorical questions averaged into the readiness score.
pub const READINESS_QUESTIONS: [&str; 2] = ["S7Q1", "S7Q3"];

pub const SCALE_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

const fn text(id: &'static str, prompt: &'static str, placeholder: &'static str) -> Question {
    Question {
        id,
        prompt,
        kind: QuestionKind::Text { placeholder },
        scored: false,
    }
}

const fn single(id: &'static str, prompt: &'static str, options: &'static [ChoiceOption]) -> Question {
    Question {
        id,
        prompt,
        kind: QuestionKind::Single { options },
        scored: true,
    }
}

/// Collected for context but never aggregated.
const fn unscored_single(
    id: &'static str,
    prompt: &'static str,
    options: &'static [ChoiceOption],
) -> Question {
    Question {
        scored: false,
        ..single(id, prompt, options)
    }
}

const fn categorical(
    id: &'static str,
    prompt: &'static str,
    options: &'static [ChoiceOption],
) -> Question {
    Question {
        id,
        prompt,
        kind: QuestionKind::Categorical { options },
        scored: true,
    }
}

const fn scale(id: &'static str, prompt: &'static str) -> Question {
    Question {
        id,
        prompt,
        kind: QuestionKind::Scale { reverse: false },
        scored: true,
    }
}

const fn reversed(id: &'static str, prompt: &'static str) -> Question {
    Question {
        id,
        prompt,
        kind: QuestionKind::Scale { reverse: true },
        scored: true,
    }
}

const AGE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::plain("18-24", "18-24 years"),
    ChoiceOption::plain("25-34", "25-34 years"),
    ChoiceOption::plain("35-44", "35-44 years"),
    ChoiceOption::plain("45-54", "45-54 years"),
    ChoiceOption::plain("55+", "55+ years"),
];

const ROLE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::plain("employee", "Employee / Professional"),
    ChoiceOption::plain("entrepreneur", "Entrepreneur / Business Owner"),
    ChoiceOption::plain("homemaker", "Homemaker"),
    ChoiceOption::plain("student", "Student"),
    ChoiceOption::plain("retired", "Retired"),
    ChoiceOption::plain("other", "Other"),
];

const RELATIONSHIP_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::plain("single", "Single"),
    ChoiceOption::plain("relationship", "In a Relationship"),
    ChoiceOption::plain("married", "Married"),
    ChoiceOption::plain("divorced", "Divorced / Separated"),
    ChoiceOption::plain("widowed", "Widowed"),
];

const DEPENDANT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::plain("0", "Just myself"),
    ChoiceOption::plain("1-2", "1-2 people"),
    ChoiceOption::plain("3-4", "3-4 people"),
    ChoiceOption::plain("5+", "5 or more people"),
];

const SLEEP_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::scored("<5h", "Less than 5 hours", 100),
    ChoiceOption::scored("5-6h", "5-6 hours", 75),
    ChoiceOption::scored("6-7h", "6-7 hours", 50),
    ChoiceOption::scored("7-8h", "7-8 hours", 25),
    ChoiceOption::scored("8h+", "8+ hours", 0),
];

const MOVEMENT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::scored("almost-never", "Almost never", 100),
    ChoiceOption::scored("1-2-days", "1-2 days per week", 75),
    ChoiceOption::scored("3-4-days", "3-4 days per week", 50),
    ChoiceOption::scored("5+-days", "5+ days per week", 25),
];

const READINESS_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::scored("not-ready", "Not ready right now", 0),
    ChoiceOption::scored("maybe-months", "Maybe in a few months", 33),
    ChoiceOption::scored("ready-need-help", "Ready, but need accountability", 66),
    ChoiceOption::scored("100-ready", "100% ready to start now!", 100),
];

const CHALLENGE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::plain("overwhelm", "Feeling overwhelmed and exhausted"),
    ChoiceOption::plain("confidence", "Lack of confidence and self-belief"),
    ChoiceOption::plain("direction", "Not knowing my direction in life"),
    ChoiceOption::plain("health", "Health and energy issues"),
    ChoiceOption::plain("relationships", "Relationship challenges"),
    ChoiceOption::plain("finances", "Financial stress"),
];

const INVESTMENT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::scored("<1000", "Under ₹1,000", 25),
    ChoiceOption::scored("1000-3000", "₹1,000 - ₹3,000", 50),
    ChoiceOption::scored("3000-5000", "₹3,000 - ₹5,000", 75),
    ChoiceOption::scored("5000+", "₹5,000+", 100),
];

pub(super) const SECTIONS: &[Section] = &[
    Section {
        key: "basic-info",
        title: "About You",
        subtitle: "Let's get to know you better",
        icon: "👋",
        dimension: None,
        questions: &[
            text("S0Q1", "What's your name?", "Enter your name"),
            single("S0Q2", "What is your age range?", AGE_OPTIONS),
            single("S0Q3", "What is your primary role?", ROLE_OPTIONS),
            single(
                "S0Q4",
                "What is your current relationship status?",
                RELATIONSHIP_OPTIONS,
            ),
            single(
                "S0Q5",
                "How many people are you responsible for daily?",
                DEPENDANT_OPTIONS,
            ),
        ],
    },
    Section {
        key: "responsibility-load",
        title: "Responsibility Load",
        subtitle: "How much are you carrying on your shoulders?",
        icon: "⚖️",
        dimension: Some(Dimension::Ro),
        questions: &[
            scale("S1Q1", "I feel like I'm carrying too many responsibilities at once."),
            scale("S1Q2", "I often sacrifice my own needs for others."),
            scale("S1Q3", "I feel guilty when I take time for myself."),
            scale("S1Q4", "I'm constantly managing everyone else's problems."),
            scale("S1Q5", "I rarely have time to focus on my own dreams and goals."),
            scale("S1Q6", "I feel exhausted from always being the \"strong one\"."),
        ],
    },
    Section {
        key: "emotional-overwhelm",
        title: "Emotional Overwhelm",
        subtitle: "Understanding your emotional energy patterns",
        icon: "💭",
        dimension: Some(Dimension::Eo),
        questions: &[
            scale("S2Q1", "I often feel emotionally drained by the end of the day."),
            scale("S2Q2", "Small things irritate me more than they should."),
            scale("S2Q3", "I struggle to process my emotions in a healthy way."),
            scale("S2Q4", "I feel anxious or worried about the future."),
            scale("S2Q5", "I often feel like crying but hold it in."),
            scale("S2Q6", "I feel disconnected from joy and happiness."),
        ],
    },
    Section {
        key: "body-health",
        title: "Body & Health",
        subtitle: "Your physical energy and well-being",
        icon: "🌿",
        dimension: Some(Dimension::Bd),
        questions: &[
            reversed("S3Q1", "I have consistent energy throughout the day."),
            scale(
                "S3Q2",
                "I often experience physical tension, headaches, or body pain.",
            ),
            scale("S3Q3", "I struggle with fatigue or low energy levels."),
            categorical(
                "S3Q4",
                "How many hours of quality sleep do you typically get?",
                SLEEP_OPTIONS,
            ),
            categorical(
                "S3Q5",
                "How often do you engage in physical movement or exercise?",
                MOVEMENT_OPTIONS,
            ),
            reversed("S3Q6", "I feel comfortable and confident in my body."),
        ],
    },
    Section {
        key: "belief-blocks",
        title: "Belief Blocks",
        subtitle: "Uncovering limiting patterns in your mindset",
        icon: "🔓",
        dimension: Some(Dimension::Bb),
        questions: &[
            scale("S4Q1", "I often doubt my abilities and potential."),
            scale("S4Q2", "I believe that good things don't last for me."),
            scale("S4Q3", "I feel unworthy of abundance and success."),
            scale("S4Q4", "I have a hard time receiving compliments or help."),
            reversed("S4Q5", "I believe I can create the life I desire."),
            scale("S4Q6", "I compare myself negatively to others."),
        ],
    },
    Section {
        key: "spiritual-alignment",
        title: "Spiritual Alignment",
        subtitle: "Your connection to purpose and higher self",
        icon: "✨",
        dimension: Some(Dimension::Sp),
        questions: &[
            scale("S5Q1", "I feel connected to a purpose greater than myself."),
            scale("S5Q2", "I trust that the universe/life is supporting me."),
            scale("S5Q3", "I practice gratitude regularly."),
            scale(
                "S5Q4",
                "I take time for meditation, prayer, or self-reflection.",
            ),
            scale("S5Q5", "I feel aligned with my intuition and inner wisdom."),
            scale("S5Q6", "I experience moments of peace and inner calm."),
        ],
    },
    Section {
        key: "support-environment",
        title: "Support & Environment",
        subtitle: "Your circle of influence and surroundings",
        icon: "🤝",
        dimension: Some(Dimension::Ss),
        questions: &[
            scale("S6Q1", "I have people who genuinely support my growth."),
            scale("S6Q2", "My home environment feels peaceful and nurturing."),
            scale(
                "S6Q3",
                "I feel safe expressing my true self with my close ones.",
            ),
            reversed("S6Q4", "I often feel drained by the people around me."),
            scale("S6Q5", "I have at least one person I can fully open up to."),
        ],
    },
    Section {
        key: "readiness",
        title: "Readiness for Transformation",
        subtitle: "Your commitment to change",
        icon: "🚀",
        dimension: Some(Dimension::Rs),
        questions: &[
            categorical(
                "S7Q1",
                "How ready are you to invest time and energy in your transformation?",
                READINESS_OPTIONS,
            ),
            unscored_single(
                "S7Q2",
                "What is your biggest challenge right now?",
                CHALLENGE_OPTIONS,
            ),
            categorical(
                "S7Q3",
                "What level of investment are you comfortable with for your transformation?",
                INVESTMENT_OPTIONS,
            ),
        ],
    },
];
