use crate::demo::{run_demo, run_questions, run_score, DemoArgs, QuestionsArgs, ScoreArgs};
use crate::server;
use career_quiz::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Quiz Service",
    about = "Serve and exercise the career quiz scoring service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the question bank or score answers offline
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
    /// Score a guest and a member walkthrough end to end
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Print the questions for a tier
    Questions(QuestionsArgs),
    /// Score `question=option` pairs and print the resulting profile
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quiz {
            command: QuizCommand::Questions(args),
        } => run_questions(args),
        Command::Quiz {
            command: QuizCommand::Score(args),
        } => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
