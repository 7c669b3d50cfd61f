//! # ask
//!
//! One-shot question to an expert persona, for scripts and pipes.
//!
//! Usage:
//!   ask [--persona LABEL] [TEXT...]   (reads TEXT from stdin when omitted)
//!   ask --list

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use log::error;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::AsyncReadExt;

use expert_helper::core::Config;
use expert_helper::features::personas::PersonaManager;
use expert_helper::features::query::{OpenAiClient, QueryHandler, SubmitOutcome};

/// Ask an expert persona one question
#[derive(Parser, Debug)]
#[command(name = "ask")]
#[command(about = "Ask an expert persona one question", long_about = None)]
struct Cli {
    /// Persona label (defaults to the first persona)
    #[arg(short, long)]
    persona: Option<String>,

    /// List persona labels and exit
    #[arg(short, long)]
    list: bool,

    /// Question text; read from stdin when omitted
    text: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Cli::parse();
    let personas = PersonaManager::new();

    if args.list {
        for persona in personas.list_personas() {
            println!("{}\t{}", persona.label, persona.description);
        }
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    match run(config, personas, args).await {
        Ok(code) => code,
        Err(e) => {
            error!("ask failed: {e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config, personas: PersonaManager, args: Cli) -> Result<ExitCode> {
    let label = match args.persona {
        Some(label) => label,
        // First persona is the selector's default
        None => personas.labels().first().map(|l| l.to_string()).unwrap_or_default(),
    };

    let text = if args.text.is_empty() {
        let mut input = String::new();
        tokio::io::stdin().read_to_string(&mut input).await?;
        input
    } else {
        args.text.join(" ")
    };

    let handler = QueryHandler::new(personas, Arc::new(OpenAiClient::new(&config)));

    let code = match handler.submit(&text, &label).await {
        SubmitOutcome::Answered(answer) => {
            println!("{answer}");
            ExitCode::SUCCESS
        }
        outcome => {
            eprintln!("{}", outcome.message());
            ExitCode::FAILURE
        }
    };

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_persona_and_text() {
        let cli = Cli::try_parse_from(["ask", "--persona", "データサイエンス", "需要予測", "したい"]).unwrap();
        assert_eq!(cli.persona.as_deref(), Some("データサイエンス"));
        assert_eq!(cli.text, vec!["需要予測", "したい"]);
        assert!(!cli.list);
    }

    #[test]
    fn test_parse_persona_with_equals() {
        let cli = Cli::try_parse_from(["ask", "--persona=データサイエンス", "需要予測"]).unwrap();
        assert_eq!(cli.persona.as_deref(), Some("データサイエンス"));
        assert_eq!(cli.text, vec!["需要予測"]);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["ask", "-p", "CX/サービスデザイン", "q"]).unwrap();
        assert_eq!(cli.persona.as_deref(), Some("CX/サービスデザイン"));
        assert!(Cli::try_parse_from(["ask", "-l"]).unwrap().list);
    }

    #[test]
    fn test_unknown_flag_is_error() {
        assert!(Cli::try_parse_from(["ask", "--verbose", "q"]).is_err());
    }

    #[test]
    fn test_missing_persona_value_is_error() {
        assert!(Cli::try_parse_from(["ask", "-p"]).is_err());
    }

    #[test]
    fn test_double_dash_keeps_flags_as_text() {
        let cli = Cli::try_parse_from(["ask", "--", "--list", "-p"]).unwrap();
        assert!(!cli.list);
        assert_eq!(cli.text, vec!["--list", "-p"]);
    }

    #[test]
    fn test_no_args() {
        let cli = Cli::try_parse_from(["ask"]).unwrap();
        assert!(cli.persona.is_none());
        assert!(cli.text.is_empty());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
