use anyhow::Result;
use assist_core::{AskRequest, Config, Dispatcher, MODEL_OPTIONS};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "assist")]
#[command(about = "Ask Informatica IDMC questions from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question and print the answer
    Ask {
        /// The question to send
        question: String,

        /// Model selector, e.g. googleai/gemini-2.0-flash
        #[arg(short, long)]
        model: Option<String>,

        /// Google AI API key for this call only (otherwise GEMINI_API_KEY is used)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// List the built-in model options
    Models,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Load .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            question,
            model,
            api_key,
        } => {
            ask_command(question, model, api_key).await?;
        }
        Commands::Models => {
            models_command();
        }
    }

    Ok(())
}

async fn ask_command(
    question: String,
    model: Option<String>,
    api_key: Option<String>,
) -> Result<()> {
    let config = Config::from_env();
    let model_id = model.unwrap_or_else(|| config.default_model.clone());
    let dispatcher = Dispatcher::new(config);

    let request = AskRequest {
        question,
        model_id,
        api_key,
    };

    let answer = dispatcher.dispatch(&request).await?;
    println!("{}", answer.answer);

    Ok(())
}

fn models_command() {
    for option in MODEL_OPTIONS {
        println!("{:<28} {}", option.id, option.label);
    }
}
