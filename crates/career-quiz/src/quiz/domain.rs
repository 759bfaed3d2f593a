use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five dimensions a quiz answer can contribute to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitName {
    Technical,
    Creative,
    Analytical,
    Social,
    Leadership,
}

impl TraitName {
    /// Declaration order, which is also the classification tie-break order.
    pub const ALL: [TraitName; 5] = [
        TraitName::Technical,
        TraitName::Creative,
        TraitName::Analytical,
        TraitName::Social,
        TraitName::Leadership,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TraitName::Technical => "technical",
            TraitName::Creative => "creative",
            TraitName::Analytical => "analytical",
            TraitName::Social => "social",
            TraitName::Leadership => "leadership",
        }
    }

    pub fn personality(&self) -> PersonalityType {
        match self {
            TraitName::Technical | TraitName::Analytical => PersonalityType::Analyst,
            TraitName::Creative => PersonalityType::Creator,
            TraitName::Social => PersonalityType::Helper,
            TraitName::Leadership => PersonalityType::Leader,
        }
    }
}

/// Quiz variant, derived from the number of submitted answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizTier {
    Mock,
    Detailed,
}

impl QuizTier {
    pub const MOCK_QUESTION_LIMIT: usize = 5;

    pub fn from_answer_count(count: usize) -> Self {
        if count <= Self::MOCK_QUESTION_LIMIT {
            QuizTier::Mock
        } else {
            QuizTier::Detailed
        }
    }

    /// Case-insensitive lookup by label.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "mock" => Some(QuizTier::Mock),
            "detailed" => Some(QuizTier::Detailed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuizTier::Mock => "mock",
            QuizTier::Detailed => "detailed",
        }
    }
}

impl fmt::Display for QuizTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the submission carried a caller identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Guest,
    Authenticated,
}

impl UserType {
    pub fn label(&self) -> &'static str {
        match self {
            UserType::Guest => "guest",
            UserType::Authenticated => "authenticated",
        }
    }
}

/// Archetype reported back to the student.
///
/// `Explorer` has a recommendation row but no trait maps to it, so the
/// classifier never emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PersonalityType {
    Analyst,
    Creator,
    Helper,
    Leader,
    Explorer,
}

impl PersonalityType {
    pub const ALL: [PersonalityType; 5] = [
        PersonalityType::Analyst,
        PersonalityType::Creator,
        PersonalityType::Helper,
        PersonalityType::Leader,
        PersonalityType::Explorer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PersonalityType::Analyst => "Analyst",
            PersonalityType::Creator => "Creator",
            PersonalityType::Helper => "Helper",
            PersonalityType::Leader => "Leader",
            PersonalityType::Explorer => "Explorer",
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Single answer as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub selected_option: String,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, selected_option: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            selected_option: selected_option.into(),
        }
    }
}

/// Per-trait accumulator produced by folding weighted answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub technical: u32,
    pub creative: u32,
    pub analytical: u32,
    pub social: u32,
    pub leadership: u32,
}

impl ScoreVector {
    pub fn get(&self, name: TraitName) -> u32 {
        match name {
            TraitName::Technical => self.technical,
            TraitName::Creative => self.creative,
            TraitName::Analytical => self.analytical,
            TraitName::Social => self.social,
            TraitName::Leadership => self.leadership,
        }
    }

    pub fn add(&mut self, name: TraitName, weight: u32) {
        let slot = match name {
            TraitName::Technical => &mut self.technical,
            TraitName::Creative => &mut self.creative,
            TraitName::Analytical => &mut self.analytical,
            TraitName::Social => &mut self.social,
            TraitName::Leadership => &mut self.leadership,
        };
        *slot = slot.saturating_add(weight);
    }

    pub fn total(&self) -> u32 {
        TraitName::ALL.iter().map(|name| self.get(*name)).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }
}

/// Identifier wrapper for stored quiz results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuizResultId(pub String);

impl fmt::Display for QuizResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload accepted by the result assembler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub completion_time: Option<u32>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Submitted answer enriched with the question it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredQuestion {
    pub question_id: String,
    pub question: Option<String>,
    pub selected_option: String,
    pub category: Option<String>,
}

/// Course suggestion attached to a personality row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecommendation {
    pub name: String,
    #[serde(rename = "match")]
    pub match_percentage: u8,
    pub description: String,
    pub career_paths: Vec<String>,
}

/// Learning resource suggested alongside every result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub title: String,
    pub kind: String,
    pub url: String,
}

/// Immutable record produced once per submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub id: QuizResultId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub user_type: UserType,
    pub quiz_type: QuizTier,
    pub answers: Vec<AnsweredQuestion>,
    pub scores: ScoreVector,
    pub personality_type: PersonalityType,
    pub recommended_courses: Vec<CourseRecommendation>,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub next_steps: Vec<String>,
    pub resources: Vec<LearningResource>,
    pub completion_time: u32,
    pub submitted_at: DateTime<Utc>,
    pub persisted: bool,
}
