use std::sync::OnceLock;

use serde::Serialize;

use super::domain::{QuizTier, TraitName};

/// Weighted contribution of a single option.
pub type TraitWeights = &'static [(TraitName, u32)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub id: &'static str,
    pub text: &'static str,
    pub weights: TraitWeights,
}

impl QuizOption {
    pub fn weight(&self, name: TraitName) -> u32 {
        self.weights
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, weight)| *weight)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub category: &'static str,
    /// First tier the question appears in.
    pub tier: QuizTier,
    pub options: [QuizOption; 4],
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    /// Client-facing projection that leaves the trait weights out.
    pub fn view(&self) -> QuestionView {
        QuestionView {
            id: self.id,
            question: self.prompt,
            category: self.category,
            options: self
                .options
                .iter()
                .map(|option| OptionView {
                    id: option.id,
                    text: option.text,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub id: &'static str,
    pub question: &'static str,
    pub category: &'static str,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub id: &'static str,
    pub text: &'static str,
}

/// Failure to resolve an answer against the bank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionBankError {
    #[error("unknown question '{question_id}'")]
    UnknownQuestion { question_id: String },
    #[error("unknown option '{option_id}' for question '{question_id}'")]
    UnknownOption {
        question_id: String,
        option_id: String,
    },
}

/// Fixed question set. The detailed tier is the mock tier followed by the
/// remaining questions, so both tiers share the same opening.
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn standard() -> &'static QuestionBank {
        static BANK: OnceLock<QuestionBank> = OnceLock::new();
        BANK.get_or_init(|| QuestionBank {
            questions: standard_questions(),
        })
    }

    pub fn questions(&self, tier: QuizTier) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| match tier {
                QuizTier::Mock => question.tier == QuizTier::Mock,
                QuizTier::Detailed => true,
            })
            .collect()
    }

    /// Looks a question up across the whole bank regardless of tier.
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    pub fn resolve_weight(
        &self,
        tier: QuizTier,
        question_id: &str,
        option_id: &str,
    ) -> Result<TraitWeights, QuestionBankError> {
        let question = self
            .questions(tier)
            .into_iter()
            .find(|question| question.id == question_id)
            .ok_or_else(|| QuestionBankError::UnknownQuestion {
                question_id: question_id.to_string(),
            })?;

        question
            .option(option_id)
            .map(|option| option.weights)
            .ok_or_else(|| QuestionBankError::UnknownOption {
                question_id: question_id.to_string(),
                option_id: option_id.to_string(),
            })
    }
}

fn standard_questions() -> Vec<Question> {
    use TraitName::{Analytical, Creative, Leadership, Social, Technical};

    vec![
        Question {
            id: "mock_q1",
            prompt: "What kind of activities do you enjoy most in your free time?",
            category: "interests",
            tier: QuizTier::Mock,
            options: [
                QuizOption {
                    id: "a",
                    text: "Building or fixing gadgets and computers",
                    weights: &[(Technical, 3), (Analytical, 1)],
                },
                QuizOption {
                    id: "b",
                    text: "Solving puzzles and brain teasers",
                    weights: &[(Analytical, 3), (Technical, 1)],
                },
                QuizOption {
                    id: "c",
                    text: "Volunteering or helping friends with their problems",
                    weights: &[(Social, 3)],
                },
                QuizOption {
                    id: "d",
                    text: "Drawing, writing, or making music",
                    weights: &[(Creative, 3)],
                },
            ],
        },
        Question {
            id: "mock_q2",
            prompt: "Which school subject do you find most engaging?",
            category: "academics",
            tier: QuizTier::Mock,
            options: [
                QuizOption {
                    id: "a",
                    text: "Mathematics or Computer Science",
                    weights: &[(Technical, 2), (Analytical, 2)],
                },
                QuizOption {
                    id: "b",
                    text: "Art, Literature, or Design",
                    weights: &[(Creative, 3)],
                },
                QuizOption {
                    id: "c",
                    text: "Psychology or Sociology",
                    weights: &[(Social, 3)],
                },
                QuizOption {
                    id: "d",
                    text: "Business Studies or Economics",
                    weights: &[(Leadership, 2), (Analytical, 1)],
                },
            ],
        },
        Question {
            id: "mock_q3",
            prompt: "When working on a group project, what role do you naturally take?",
            category: "teamwork",
            tier: QuizTier::Mock,
            options: [
                QuizOption {
                    id: "a",
                    text: "The leader who organises the team and sets goals",
                    weights: &[(Leadership, 3)],
                },
                QuizOption {
                    id: "b",
                    text: "The researcher who gathers and analyses information",
                    weights: &[(Analytical, 3)],
                },
                QuizOption {
                    id: "c",
                    text: "The mediator who keeps everyone motivated and connected",
                    weights: &[(Social, 3), (Leadership, 1)],
                },
                QuizOption {
                    id: "d",
                    text: "The creative one who comes up with original ideas",
                    weights: &[(Creative, 3)],
                },
            ],
        },
        Question {
            id: "mock_q4",
            prompt: "How do you prefer to approach a new problem?",
            category: "problem_solving",
            tier: QuizTier::Mock,
            options: [
                QuizOption {
                    id: "a",
                    text: "Brainstorm many unconventional ideas",
                    weights: &[(Creative, 3)],
                },
                QuizOption {
                    id: "b",
                    text: "Take charge and split the work between people",
                    weights: &[(Leadership, 3)],
                },
                QuizOption {
                    id: "c",
                    text: "Ask people who have faced it before about their experience",
                    weights: &[(Social, 3)],
                },
                QuizOption {
                    id: "d",
                    text: "Break it into steps and analyse the data",
                    weights: &[(Analytical, 3), (Technical, 1)],
                },
            ],
        },
        Question {
            id: "mock_q5",
            prompt: "What kind of work environment appeals to you most?",
            category: "environment",
            tier: QuizTier::Mock,
            options: [
                QuizOption {
                    id: "a",
                    text: "A lab or tech company with cutting-edge tools",
                    weights: &[(Technical, 3)],
                },
                QuizOption {
                    id: "b",
                    text: "A studio or agency full of creative energy",
                    weights: &[(Creative, 3)],
                },
                QuizOption {
                    id: "c",
                    text: "A school, hospital, or community organisation",
                    weights: &[(Social, 3)],
                },
                QuizOption {
                    id: "d",
                    text: "A fast-paced office where I can lead initiatives",
                    weights: &[(Leadership, 3)],
                },
            ],
        },
        Question {
            id: "detailed_q1",
            prompt: "Which of these achievements would make you proudest?",
            category: "motivation",
            tier: QuizTier::Detailed,
            options: [
                QuizOption {
                    id: "a",
                    text: "Launching an app used by thousands of people",
                    weights: &[(Technical, 3), (Creative, 1)],
                },
                QuizOption {
                    id: "b",
                    text: "Publishing research that explains something new",
                    weights: &[(Analytical, 3)],
                },
                QuizOption {
                    id: "c",
                    text: "Helping someone turn their life around",
                    weights: &[(Social, 3)],
                },
                QuizOption {
                    id: "d",
                    text: "Growing a team or business from the ground up",
                    weights: &[(Leadership, 3)],
                },
            ],
        },
        Question {
            id: "detailed_q2",
            prompt: "How do you usually make important decisions?",
            category: "decision_making",
            tier: QuizTier::Detailed,
            options: [
                QuizOption {
                    id: "a",
                    text: "By gathering data and weighing the pros and cons",
                    weights: &[(Analytical, 3)],
                },
                QuizOption {
                    id: "b",
                    text: "By following my intuition and imagination",
                    weights: &[(Creative, 2)],
                },
                QuizOption {
                    id: "c",
                    text: "By considering how it will affect the people around me",
                    weights: &[(Social, 3)],
                },
                QuizOption {
                    id: "d",
                    text: "Quickly and confidently, adjusting as I go",
                    weights: &[(Leadership, 3)],
                },
            ],
        },
        Question {
            id: "detailed_q3",
            prompt: "Which skill would you most like to master?",
            category: "skills",
            tier: QuizTier::Detailed,
            options: [
                QuizOption {
                    id: "a",
                    text: "A programming language or development framework",
                    weights: &[(Technical, 3)],
                },
                QuizOption {
                    id: "b",
                    text: "Design tools such as Figma or Photoshop",
                    weights: &[(Creative, 3)],
                },
                QuizOption {
                    id: "c",
                    text: "Public speaking and presenting",
                    weights: &[(Leadership, 2), (Social, 1)],
                },
                QuizOption {
                    id: "d",
                    text: "Statistics and spreadsheet analysis",
                    weights: &[(Analytical, 3)],
                },
            ],
        },
        Question {
            id: "detailed_q4",
            prompt: "What do your friends most often come to you for?",
            category: "personality",
            tier: QuizTier::Detailed,
            options: [
                QuizOption {
                    id: "a",
                    text: "Tech support and fixing things",
                    weights: &[(Technical, 3)],
                },
                QuizOption {
                    id: "b",
                    text: "Creative ideas for gifts, events, or projects",
                    weights: &[(Creative, 3)],
                },
                QuizOption {
                    id: "c",
                    text: "A listening ear and emotional support",
                    weights: &[(Social, 3)],
                },
                QuizOption {
                    id: "d",
                    text: "Advice on plans and big decisions",
                    weights: &[(Leadership, 2), (Analytical, 1)],
                },
            ],
        },
        Question {
            id: "detailed_q5",
            prompt: "Which kind of books or content do you enjoy most?",
            category: "interests",
            tier: QuizTier::Detailed,
            options: [
                QuizOption {
                    id: "a",
                    text: "Science and technology news",
                    weights: &[(Technical, 2), (Analytical, 1)],
                },
                QuizOption {
                    id: "b",
                    text: "Fiction, poetry, or art",
                    weights: &[(Creative, 3)],
                },
                QuizOption {
                    id: "c",
                    text: "Biographies and human-interest stories",
                    weights: &[(Social, 2), (Creative, 1)],
                },
                QuizOption {
                    id: "d",
                    text: "Business strategy and leadership",
                    weights: &[(Leadership, 3)],
                },
            ],
        },
        Question {
            id: "detailed_q6",
            prompt: "How do you handle a stressful deadline?",
            category: "work_style",
            tier: QuizTier::Detailed,
            options: [
                QuizOption {
                    id: "a",
                    text: "I make a detailed schedule and stick to it",
                    weights: &[(Analytical, 2), (Technical, 1)],
                },
                QuizOption {
                    id: "b",
                    text: "I look for an inventive shortcut",
                    weights: &[(Creative, 2), (Technical, 1)],
                },
                QuizOption {
                    id: "c",
                    text: "I lean on my team and we support each other",
                    weights: &[(Social, 3)],
                },
                QuizOption {
                    id: "d",
                    text: "I take control and direct the effort",
                    weights: &[(Leadership, 3)],
                },
            ],
        },
        Question {
            id: "detailed_q7",
            prompt: "What kind of impact do you want your career to have?",
            category: "values",
            tier: QuizTier::Detailed,
            options: [
                QuizOption {
                    id: "a",
                    text: "Advancing technology and innovation",
                    weights: &[(Technical, 3)],
                },
                QuizOption {
                    id: "b",
                    text: "Inspiring people through art and ideas",
                    weights: &[(Creative, 3)],
                },
                QuizOption {
                    id: "c",
                    text: "Improving people's health, education, or wellbeing",
                    weights: &[(Social, 3)],
                },
                QuizOption {
                    id: "d",
                    text: "Building organisations that create opportunity",
                    weights: &[(Leadership, 3)],
                },
            ],
        },
        Question {
            id: "detailed_q8",
            prompt: "Which extracurricular activity would you pick?",
            category: "activities",
            tier: QuizTier::Detailed,
            options: [
                QuizOption {
                    id: "a",
                    text: "Robotics or coding club",
                    weights: &[(Technical, 3)],
                },
                QuizOption {
                    id: "b",
                    text: "Debate or quiz team",
                    weights: &[(Analytical, 2), (Leadership, 1)],
                },
                QuizOption {
                    id: "c",
                    text: "Student council",
                    weights: &[(Leadership, 3)],
                },
                QuizOption {
                    id: "d",
                    text: "Drama, music, or art club",
                    weights: &[(Creative, 3)],
                },
            ],
        },
        Question {
            id: "detailed_q9",
            prompt: "When learning something new, what helps you most?",
            category: "learning",
            tier: QuizTier::Detailed,
            options: [
                QuizOption {
                    id: "a",
                    text: "Hands-on experimentation",
                    weights: &[(Technical, 2), (Creative, 1)],
                },
                QuizOption {
                    id: "b",
                    text: "Reading and working through the theory",
                    weights: &[(Analytical, 3)],
                },
                QuizOption {
                    id: "c",
                    text: "Discussing it in a study group",
                    weights: &[(Social, 2), (Leadership, 1)],
                },
                QuizOption {
                    id: "d",
                    text: "Sketching diagrams and mind maps",
                    weights: &[(Creative, 2), (Analytical, 1)],
                },
            ],
        },
        Question {
            id: "detailed_q10",
            prompt: "Where do you see yourself in ten years?",
            category: "aspirations",
            tier: QuizTier::Detailed,
            options: [
                QuizOption {
                    id: "a",
                    text: "Leading engineering on a technical product",
                    weights: &[(Technical, 2), (Leadership, 1)],
                },
                QuizOption {
                    id: "b",
                    text: "Running my own creative studio",
                    weights: &[(Creative, 2), (Leadership, 1)],
                },
                QuizOption {
                    id: "c",
                    text: "Working closely with communities as a counsellor or teacher",
                    weights: &[(Social, 3)],
                },
                QuizOption {
                    id: "d",
                    text: "Heading a department or a company",
                    weights: &[(Leadership, 3)],
                },
            ],
        },
    ]
}
