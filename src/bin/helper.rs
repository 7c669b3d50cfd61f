//! # Expert LLM Helper
//!
//! Terminal form: pick an expert persona, type a question, read the answer.
//!
//! Usage: `cargo run --bin helper`

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenvy::dotenv;
use log::{debug, error, info};
use ratatui::prelude::*;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use expert_helper::core::config::{log_level_from, TUI_LOG_LEVEL};
use expert_helper::core::Config;
use expert_helper::features::personas::PersonaManager;
use expert_helper::features::query::{OpenAiClient, QueryHandler};
use expert_helper::tui::event::map_key_event;
use expert_helper::tui::{App, Event, EventHandler, InputMode};

/// TUI refresh rate
const TICK_RATE: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging from LOG_LEVEL; warn by default since stderr shares the screen
    let log_level = log_level_from(|name| std::env::var(name).ok(), TUI_LOG_LEVEL);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&log_level)).init();

    // Resolve credentials before touching the terminal
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Missing API key lands here with setup instructions
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Application error: {e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<()> {
    info!("Starting Expert LLM Helper (model: {})", config.openai_model);

    let personas = PersonaManager::new();
    let labels = personas.labels().into_iter().map(String::from).collect();
    let client = Arc::new(OpenAiClient::new(&config));
    let handler = QueryHandler::new(personas, client);

    let mut app = App::new(labels, config.openai_model.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(TICK_RATE);

    // Main loop
    let result = run_app(&mut terminal, &mut app, &mut events, &handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    info!("Expert LLM Helper shutdown complete");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    handler: &QueryHandler,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|frame| {
            expert_helper::tui::ui::render(frame, app);
        })?;

        // Handle events
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    let action = map_key_event(key, app.input_mode == InputMode::Editing);
                    if let Some(submission) = app.handle_action(action) {
                        // Show the pending state, then wait on the call
                        terminal.draw(|frame| {
                            expert_helper::tui::ui::render(frame, app);
                        })?;

                        let request = handler.submit(&submission.text, &submission.persona_label);
                        tokio::pin!(request);

                        // Keys other than quit are ignored until the call returns
                        let outcome = loop {
                            tokio::select! {
                                outcome = &mut request => break Some(outcome),
                                event = events.next() => match event {
                                    Some(Event::Key(key)) => {
                                        let editing = app.input_mode == InputMode::Editing;
                                        if app.handle_pending_action(map_key_event(key, editing)) {
                                            debug!("Quit requested, abandoning pending request");
                                            break None;
                                        }
                                    }
                                    Some(_) => {}
                                    None => break None,
                                },
                            }
                        };

                        if let Some(outcome) = outcome {
                            app.finish_submit(outcome);
                        }
                    }
                }
                Event::Tick | Event::Resize(_, _) => {
                    // Redrawn at the top of the loop
                }
            }
        } else {
            break;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
