use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::domain::{CourseRecommendation, LearningResource, PersonalityType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTemplate {
    pub name: &'static str,
    pub match_percentage: u8,
    pub description: &'static str,
    pub career_paths: &'static [&'static str],
}

/// Table row describing one personality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalityProfile {
    pub courses: Vec<CourseTemplate>,
    pub strengths: &'static [&'static str],
    pub improvement_areas: &'static [&'static str],
}

/// Owned recommendation lists attached to a quiz result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendations {
    pub courses: Vec<CourseRecommendation>,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub next_steps: Vec<String>,
    pub resources: Vec<LearningResource>,
}

/// Personality keyed lookup. Personalities without a row get the analyst row.
#[derive(Debug, Clone)]
pub struct RecommendationCatalog {
    analyst: PersonalityProfile,
    rows: BTreeMap<PersonalityType, PersonalityProfile>,
}

impl RecommendationCatalog {
    pub fn new(analyst: PersonalityProfile) -> Self {
        Self {
            analyst,
            rows: BTreeMap::new(),
        }
    }

    pub fn with_row(mut self, personality: PersonalityType, profile: PersonalityProfile) -> Self {
        if personality == PersonalityType::Analyst {
            self.analyst = profile;
        } else {
            self.rows.insert(personality, profile);
        }
        self
    }

    pub fn standard() -> &'static RecommendationCatalog {
        static CATALOG: OnceLock<RecommendationCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            RecommendationCatalog::new(analyst_profile())
                .with_row(PersonalityType::Creator, creator_profile())
                .with_row(PersonalityType::Helper, helper_profile())
                .with_row(PersonalityType::Leader, leader_profile())
                .with_row(PersonalityType::Explorer, explorer_profile())
        })
    }

    pub fn has_row(&self, personality: PersonalityType) -> bool {
        personality == PersonalityType::Analyst || self.rows.contains_key(&personality)
    }

    pub fn profile(&self, personality: PersonalityType) -> &PersonalityProfile {
        self.rows.get(&personality).unwrap_or(&self.analyst)
    }

    pub fn recommend(&self, personality: PersonalityType) -> Recommendations {
        let profile = self.profile(personality);
        Recommendations {
            courses: profile
                .courses
                .iter()
                .map(|course| CourseRecommendation {
                    name: course.name.to_string(),
                    match_percentage: course.match_percentage,
                    description: course.description.to_string(),
                    career_paths: owned_strings(course.career_paths),
                })
                .collect(),
            strengths: owned_strings(profile.strengths),
            areas_for_improvement: owned_strings(profile.improvement_areas),
            next_steps: owned_strings(NEXT_STEPS),
            resources: standard_resources(),
        }
    }
}

fn owned_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

const NEXT_STEPS: &[&str] = &[
    "Explore the recommended courses in detail",
    "Talk to a mentor working in your field of interest",
    "Compare colleges offering your top course choices",
    "Follow a career roadmap for your preferred path",
    "Retake the detailed quiz after gaining new experiences",
];

fn standard_resources() -> Vec<LearningResource> {
    [
        (
            "Career roadmaps",
            "roadmap",
            "https://roadmap.sh",
        ),
        (
            "Free online courses",
            "course",
            "https://www.coursera.org",
        ),
        (
            "National career service portal",
            "portal",
            "https://www.ncs.gov.in",
        ),
        (
            "Skill-building videos",
            "video",
            "https://www.khanacademy.org",
        ),
    ]
    .into_iter()
    .map(|(title, kind, url)| LearningResource {
        title: title.to_string(),
        kind: kind.to_string(),
        url: url.to_string(),
    })
    .collect()
}

fn analyst_profile() -> PersonalityProfile {
    PersonalityProfile {
        courses: vec![
            CourseTemplate {
                name: "B.Tech Computer Science",
                match_percentage: 95,
                description: "Programming, algorithms, and system design for building software.",
                career_paths: &["Software Engineer", "Data Scientist", "Systems Architect"],
            },
            CourseTemplate {
                name: "B.Sc Data Science",
                match_percentage: 90,
                description: "Statistics, machine learning, and data analysis.",
                career_paths: &["Data Analyst", "ML Engineer", "Business Analyst"],
            },
            CourseTemplate {
                name: "B.Sc Mathematics",
                match_percentage: 85,
                description: "Pure and applied mathematics with strong problem-solving focus.",
                career_paths: &["Actuary", "Quantitative Analyst", "Researcher"],
            },
        ],
        strengths: &[
            "Logical thinking",
            "Problem solving",
            "Attention to detail",
            "Data interpretation",
        ],
        improvement_areas: &[
            "Communicating ideas to non-technical audiences",
            "Working comfortably with ambiguity",
            "Collaborating in large teams",
        ],
    }
}

fn creator_profile() -> PersonalityProfile {
    PersonalityProfile {
        courses: vec![
            CourseTemplate {
                name: "Bachelor of Design",
                match_percentage: 95,
                description: "Visual, product, and interaction design studio practice.",
                career_paths: &["UX Designer", "Product Designer", "Graphic Designer"],
            },
            CourseTemplate {
                name: "BA Mass Communication",
                match_percentage: 88,
                description: "Media production, storytelling, and digital content.",
                career_paths: &["Content Creator", "Journalist", "Film Maker"],
            },
            CourseTemplate {
                name: "Bachelor of Architecture",
                match_percentage: 82,
                description: "Designing buildings and spaces that blend art and engineering.",
                career_paths: &["Architect", "Interior Designer", "Urban Planner"],
            },
        ],
        strengths: &[
            "Creativity",
            "Original thinking",
            "Visual communication",
            "Adaptability",
        ],
        improvement_areas: &[
            "Structured planning",
            "Meeting strict deadlines",
            "Quantitative analysis",
        ],
    }
}

fn helper_profile() -> PersonalityProfile {
    PersonalityProfile {
        courses: vec![
            CourseTemplate {
                name: "BA Psychology",
                match_percentage: 95,
                description: "Human behaviour, counselling, and mental health.",
                career_paths: &["Counsellor", "Clinical Psychologist", "HR Specialist"],
            },
            CourseTemplate {
                name: "Bachelor of Education",
                match_percentage: 90,
                description: "Teaching methods, child development, and curriculum design.",
                career_paths: &["Teacher", "Education Consultant", "Curriculum Designer"],
            },
            CourseTemplate {
                name: "B.Sc Nursing",
                match_percentage: 85,
                description: "Patient care, clinical practice, and community health.",
                career_paths: &["Nurse", "Public Health Worker", "Healthcare Administrator"],
            },
        ],
        strengths: &[
            "Empathy",
            "Active listening",
            "Teamwork",
            "Interpersonal communication",
        ],
        improvement_areas: &[
            "Setting personal boundaries",
            "Making tough decisions under pressure",
            "Technical skill development",
        ],
    }
}

fn leader_profile() -> PersonalityProfile {
    PersonalityProfile {
        courses: vec![
            CourseTemplate {
                name: "Bachelor of Business Administration",
                match_percentage: 95,
                description: "Management, finance, marketing, and organisational behaviour.",
                career_paths: &["Business Manager", "Entrepreneur", "Consultant"],
            },
            CourseTemplate {
                name: "BA Political Science",
                match_percentage: 85,
                description: "Governance, public policy, and international relations.",
                career_paths: &["Civil Servant", "Policy Analyst", "Diplomat"],
            },
            CourseTemplate {
                name: "Bachelor of Law (LLB)",
                match_percentage: 82,
                description: "Legal systems, advocacy, and negotiation.",
                career_paths: &["Lawyer", "Legal Advisor", "Corporate Counsel"],
            },
        ],
        strengths: &[
            "Decision making",
            "Team motivation",
            "Strategic thinking",
            "Confidence",
        ],
        improvement_areas: &[
            "Delegating without micromanaging",
            "Listening to dissenting views",
            "Patience with detailed analysis",
        ],
    }
}

fn explorer_profile() -> PersonalityProfile {
    PersonalityProfile {
        courses: vec![
            CourseTemplate {
                name: "Liberal Arts and Sciences",
                match_percentage: 90,
                description: "Interdisciplinary study across humanities and sciences.",
                career_paths: &["Researcher", "Writer", "Policy Analyst"],
            },
            CourseTemplate {
                name: "B.Sc Environmental Science",
                match_percentage: 85,
                description: "Ecology, sustainability, and field research.",
                career_paths: &["Environmental Consultant", "Conservationist", "Field Scientist"],
            },
            CourseTemplate {
                name: "BA Hospitality and Tourism",
                match_percentage: 80,
                description: "Travel, hospitality management, and cultural exchange.",
                career_paths: &["Travel Consultant", "Hotel Manager", "Event Planner"],
            },
        ],
        strengths: &[
            "Curiosity",
            "Versatility",
            "Openness to new experiences",
            "Quick learning",
        ],
        improvement_areas: &[
            "Focusing on a single goal",
            "Long-term commitment",
            "Depth of specialisation",
        ],
    }
}
