use crate::infra::{parse_answer, InMemoryQuizResultRepository};
use career_quiz::config::AppConfig;
use career_quiz::error::AppError;
use career_quiz::quiz::{
    Answer, QuestionBank, QuizConfig, QuizResult, QuizService, QuizSubmission, QuizTier,
    TraitName,
};
use chrono::Local;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Quiz tier to list (mock or detailed)
    #[arg(long, value_parser = parse_tier, default_value = "mock")]
    pub(crate) tier: QuizTier,
    /// Show the trait weights behind every option
    #[arg(long)]
    pub(crate) show_weights: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer as QUESTION=OPTION, repeatable (e.g. --answer mock_q1=b)
    #[arg(long = "answer", value_parser = parse_answer, required = true)]
    pub(crate) answers: Vec<Answer>,
    /// Score as an authenticated user with this id
    #[arg(long)]
    pub(crate) user_id: Option<String>,
    /// Guest session identifier (ignored when --user-id is set)
    #[arg(long)]
    pub(crate) session_id: Option<String>,
    /// Completion time in seconds
    #[arg(long)]
    pub(crate) completion_time: Option<u32>,
    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print full JSON records for each walkthrough
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn parse_tier(raw: &str) -> Result<QuizTier, String> {
    QuizTier::parse(raw)
        .ok_or_else(|| format!("unknown quiz tier '{}' (expected mock or detailed)", raw.trim()))
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let QuestionsArgs { tier, show_weights } = args;
    let questions = QuestionBank::standard().questions(tier);

    println!("{} quiz ({} questions)", tier, questions.len());
    for (index, question) in questions.iter().enumerate() {
        println!(
            "\n{}. [{}] {} ({})",
            index + 1,
            question.id,
            question.prompt,
            question.category
        );
        for option in &question.options {
            if show_weights {
                let weights: Vec<String> = TraitName::ALL
                    .iter()
                    .filter(|name| option.weight(**name) > 0)
                    .map(|name| format!("{}+{}", name.label(), option.weight(*name)))
                    .collect();
                println!("   {}) {} [{}]", option.id, option.text, weights.join(", "));
            } else {
                println!("   {}) {}", option.id, option.text);
            }
        }
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        user_id,
        session_id,
        completion_time,
        json,
    } = args;

    let config = AppConfig::load()?;
    let service = build_service(config.quiz);
    let record = service.submit(QuizSubmission {
        answers,
        completion_time,
        session_id,
        user_id,
    })?;

    render_result(&record, json);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = build_service(config.quiz);

    println!("Career quiz demo");

    println!("\nGuest walkthrough (mock tier)");
    let guest = service.submit(QuizSubmission {
        answers: vec![
            Answer::new("mock_q1", "b"),
            Answer::new("mock_q2", "a"),
            Answer::new("mock_q3", "b"),
            Answer::new("mock_q4", "d"),
            Answer::new("mock_q5", "a"),
        ],
        completion_time: Some(240),
        session_id: Some("demo-guest-session".to_string()),
        user_id: None,
    })?;
    render_result(&guest, args.json);

    println!("\nMember walkthrough (detailed tier)");
    let answers = QuestionBank::standard()
        .questions(QuizTier::Detailed)
        .iter()
        .map(|question| Answer::new(question.id, "c"))
        .collect();
    let member = service.submit(QuizSubmission {
        answers,
        completion_time: None,
        session_id: None,
        user_id: Some("demo-student".to_string()),
    })?;
    render_result(&member, args.json);

    let stats = service.statistics()?;
    println!(
        "\nSubmissions recorded: {} ({} mock, {} detailed)",
        stats.total_submissions,
        stats.by_quiz_type.get("mock").copied().unwrap_or(0),
        stats.by_quiz_type.get("detailed").copied().unwrap_or(0)
    );

    Ok(())
}

fn build_service(config: QuizConfig) -> QuizService<InMemoryQuizResultRepository> {
    QuizService::new(Arc::new(InMemoryQuizResultRepository::default()), config)
}

fn render_result(record: &QuizResult, json: bool) {
    if json {
        match serde_json::to_string_pretty(record) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Result payload unavailable: {err}"),
        }
        return;
    }

    let storage_note = if record.persisted { "" } else { " (not saved)" };
    println!(
        "- Result {}{} | {} user | {} quiz | submitted {}",
        record.id,
        storage_note,
        record.user_type.label(),
        record.quiz_type,
        record
            .submitted_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
    );

    let matched = record
        .answers
        .iter()
        .filter(|answer| answer.question.is_some())
        .count();
    println!(
        "- {} of {} answers matched the question bank | completed in {}s",
        matched,
        record.answers.len(),
        record.completion_time
    );

    println!("- Personality: {}", record.personality_type);
    println!("  Trait scores:");
    for name in TraitName::ALL {
        println!("    - {}: {}", name.label(), record.scores.get(name));
    }

    println!("  Recommended courses:");
    for course in &record.recommended_courses {
        println!(
            "    - {} ({}% match): {}",
            course.name,
            course.match_percentage,
            course.career_paths.join(", ")
        );
    }
    println!("  Strengths: {}", record.strengths.join(", "));
    println!(
        "  Areas for improvement: {}",
        record.areas_for_improvement.join(", ")
    );
    println!("  Next steps:");
    for step in &record.next_steps {
        println!("    - {}", step);
    }
}
