//! Static question banks and company advice.

use rand::seq::SliceRandom;
use rand::Rng;

/// Behavioral questions shared by every role.
pub const BEHAVIORAL_QUESTIONS: &[&str] = &[
    "Tell me about yourself.",
    "What is your greatest strength?",
    "What is your greatest weakness?",
    "Describe a challenging situation and how you handled it.",
    "Why do you want to work at this company?",
    "Where do you see yourself in 5 years?",
    "Tell me about a time you failed.",
    "Describe a project you're proud of.",
    "How do you handle conflict with colleagues?",
    "Give an example of leadership.",
    "Why should we hire you?",
    "Describe your ideal work environment.",
    "Tell me about a time you had to learn something quickly.",
    "How do you prioritize tasks?",
    "Describe a time you went above and beyond.",
];

const SOFTWARE_ENGINEER_QUESTIONS: &[&str] = &[
    "Explain Big O notation.",
    "What's the difference between array and linked list?",
    "Describe REST vs GraphQL.",
    "How does HTTPS work?",
    "Explain dependency injection.",
    "What's your favorite data structure and why?",
    "Describe a system you designed.",
    "How would you scale a web application?",
    "Explain the MVC pattern.",
    "What is SQL injection and how to prevent it?",
];

const DATA_SCIENTIST_QUESTIONS: &[&str] = &[
    "Explain the bias-variance tradeoff.",
    "What's the difference between supervised and unsupervised learning?",
    "How would you handle missing data?",
    "Describe a complex SQL query you wrote.",
    "What is cross-validation?",
    "Explain regularization techniques.",
    "How do you evaluate a classification model?",
    "What's your favorite ML algorithm and why?",
    "Describe a data project from start to finish.",
    "How would you design an A/B test?",
];

const PRODUCT_MANAGER_QUESTIONS: &[&str] = &[
    "How would you prioritize these features?",
    "Describe a product you admire and why.",
    "How do you define success for a product?",
    "What metrics would you track for this feature?",
    "Tell me about a time you disagreed with engineering.",
    "How do you gather user feedback?",
    "Describe your product development process.",
    "What makes a great product manager?",
    "How would you launch this product?",
    "Tell me about a failed product and what you'd do differently.",
];

const DESIGNER_QUESTIONS: &[&str] = &[
    "Walk me through your design process.",
    "How do you handle feedback on your designs?",
    "Describe a project where you improved the UX.",
    "What design tools do you use?",
    "How do you prioritize features in a design system?",
    "Tell me about a time you had to compromise on design.",
    "How do you validate design decisions?",
    "Describe your ideal design collaboration with engineering.",
    "What websites or apps do you draw inspiration from?",
    "How do you stay updated with design trends?",
];

const GENERAL_QUESTIONS: &[&str] = &[
    "What are your salary expectations?",
    "Why are you leaving your current job?",
    "What do you know about our company?",
    "What questions do you have for me?",
];

/// Advice given when no company-specific tips exist.
pub const GENERIC_TIPS: &[&str] = &[
    "Research the company's products and mission",
    "Prepare questions about the team and culture",
    "Practice the company's core values",
    "Review recent news about the company",
    "Prepare your own questions for the interviewer",
];

/// Roles with a dedicated technical question set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKey {
    SoftwareEngineer,
    DataScientist,
    ProductManager,
    Designer,
    /// Catch-all set, also used for any unrecognized role.
    General,
}

impl RoleKey {
    pub const ALL: [RoleKey; 5] = [
        RoleKey::SoftwareEngineer,
        RoleKey::DataScientist,
        RoleKey::ProductManager,
        RoleKey::Designer,
        RoleKey::General,
    ];

    /// Normalized lookup key (e.g., "data scientist").
    pub fn key(self) -> &'static str {
        match self {
            RoleKey::SoftwareEngineer => "software engineer",
            RoleKey::DataScientist => "data scientist",
            RoleKey::ProductManager => "product manager",
            RoleKey::Designer => "designer",
            RoleKey::General => "general",
        }
    }

    /// Exact case-insensitive lookup. `None` for unknown roles.
    pub fn lookup(role: &str) -> Option<Self> {
        let normalized = role.trim().to_lowercase();
        Self::ALL.into_iter().find(|key| key.key() == normalized)
    }

    /// Lookup that falls back to [`RoleKey::General`] for unknown roles.
    pub fn resolve(role: &str) -> Self {
        Self::lookup(role).unwrap_or(RoleKey::General)
    }

    /// Technical questions for this role.
    pub fn questions(self) -> &'static [&'static str] {
        match self {
            RoleKey::SoftwareEngineer => SOFTWARE_ENGINEER_QUESTIONS,
            RoleKey::DataScientist => DATA_SCIENTIST_QUESTIONS,
            RoleKey::ProductManager => PRODUCT_MANAGER_QUESTIONS,
            RoleKey::Designer => DESIGNER_QUESTIONS,
            RoleKey::General => GENERAL_QUESTIONS,
        }
    }
}

/// Companies with tailored interview tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyKey {
    Google,
    Amazon,
    Meta,
    Microsoft,
    Apple,
}

impl CompanyKey {
    pub const ALL: [CompanyKey; 5] = [
        CompanyKey::Google,
        CompanyKey::Amazon,
        CompanyKey::Meta,
        CompanyKey::Microsoft,
        CompanyKey::Apple,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CompanyKey::Google => "google",
            CompanyKey::Amazon => "amazon",
            CompanyKey::Meta => "meta",
            CompanyKey::Microsoft => "microsoft",
            CompanyKey::Apple => "apple",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CompanyKey::Google => "Google",
            CompanyKey::Amazon => "Amazon",
            CompanyKey::Meta => "Meta",
            CompanyKey::Microsoft => "Microsoft",
            CompanyKey::Apple => "Apple",
        }
    }

    pub fn lookup(company: &str) -> Option<Self> {
        let normalized = company.trim().to_lowercase();
        Self::ALL.into_iter().find(|key| key.key() == normalized)
    }

    /// Tips in their fixed display order.
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            CompanyKey::Google => &[
                "Focus on coding skills — expect algorithm questions.",
                "Prepare for 'god-mode' interviews (multiple rounds).",
                "Google values: 'Focus on the user and all else will follow.'",
                "System design is crucial for senior roles.",
                "Behavioral questions follow Google REPLY format.",
            ],
            CompanyKey::Amazon => &[
                "Prepare thoroughly for Leadership Principles.",
                "Expect back-to-back 45-minute interviews.",
                "Bar raisers — they hire for future potential.",
                "Write code on paper/whiteboard.",
                "Amazon wants: Ownership, Bias for Action, Dive Deep.",
            ],
            CompanyKey::Meta => &[
                "Fast-paced environment — be ready to move quickly.",
                "Focus on coding speed and accuracy.",
                "Expect 'metaprogramming' questions.",
                "Culture fit: 'Move fast and break things' legacy.",
                "Prepare for culture fit questions.",
            ],
            CompanyKey::Microsoft => &[
                "Cooperative atmosphere — interviewers help each other.",
                "Problem-solving focus — think aloud.",
                "Growth mindset is valued.",
                "Expect questions about your learning ability.",
                "No 'gotcha' questions — they want to see how you think.",
            ],
            CompanyKey::Apple => &[
                "Passion for Apple products is expected.",
                "Design and user experience are paramount.",
                "Expect deep technical questions.",
                "Behavioral: 'Why Apple?' is common.",
                "Secrecy is valued — don't ask about the role.",
            ],
        }
    }
}

/// Result of a company tips lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyTips {
    Known(CompanyKey),
    /// No tailored tips; callers show [`GENERIC_TIPS`].
    Generic,
}

impl CompanyTips {
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            CompanyTips::Known(company) => company.tips(),
            CompanyTips::Generic => GENERIC_TIPS,
        }
    }
}

/// Look up tips for a company name, case-insensitively.
pub fn tips_for(company: &str) -> CompanyTips {
    CompanyKey::lookup(company).map_or(CompanyTips::Generic, CompanyTips::Known)
}

/// Draw up to `count` distinct questions from `pool` in random order.
///
/// Returns the whole pool, shuffled, when it holds fewer than `count` entries.
pub fn sample_questions<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[&'static str],
    count: usize,
) -> Vec<String> {
    let mut shuffled: Vec<&str> = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_role_lookup_is_case_insensitive() {
        assert_eq!(RoleKey::lookup("Data Scientist"), Some(RoleKey::DataScientist));
        assert_eq!(RoleKey::lookup("  DESIGNER "), Some(RoleKey::Designer));
        assert_eq!(RoleKey::lookup("astronaut"), None);
    }

    #[test]
    fn test_unknown_role_resolves_to_general() {
        assert_eq!(RoleKey::resolve("Astronaut"), RoleKey::General);
        assert_eq!(RoleKey::resolve("general"), RoleKey::General);
        assert_eq!(RoleKey::General.questions().len(), 4);
    }

    #[test]
    fn test_every_role_has_questions() {
        for role in RoleKey::ALL {
            assert!(!role.questions().is_empty(), "{:?} has no questions", role);
        }
    }

    #[test]
    fn test_company_tips_lookup() {
        assert_eq!(tips_for("GOOGLE"), CompanyTips::Known(CompanyKey::Google));
        assert_eq!(tips_for("Initech"), CompanyTips::Generic);
        assert_eq!(tips_for("Initech").tips(), GENERIC_TIPS);
        for company in CompanyKey::ALL {
            assert_eq!(company.tips().len(), 5);
        }
    }

    #[test]
    fn test_sample_questions_has_no_duplicates() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = sample_questions(&mut rng, BEHAVIORAL_QUESTIONS, 5);
            assert_eq!(picked.len(), 5);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 5);
            assert!(picked.iter().all(|q| BEHAVIORAL_QUESTIONS.contains(&q.as_str())));
        }
    }

    #[test]
    fn test_sample_questions_small_pool_returns_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = sample_questions(&mut rng, RoleKey::General.questions(), 5);
        assert_eq!(picked.len(), 4);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 4);
    }
}
