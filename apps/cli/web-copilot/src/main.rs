use web_copilot::cli::{Cli, Command};
use web_copilot::commands::ask::{AskRequest, ask, read_page_text};
use web_copilot::commands::config::show_config;
use web_copilot::commands::key::{SAVED_MESSAGE, read_key_from_stdin, set_key};
use web_copilot::commands::resolve_config_dir;
use web_copilot::credentials::{EnvFallbackCredentials, try_load_dotenv};
use web_copilot::error::CopilotError;
use web_copilot::logger::{initialize as LoggerInitialize, level_for};
use web_copilot::render::{Rendered, render_outcome};

use copilot_core::{FileCredentialStore, PageSnapshot, QueryConfig, ReqwestTransport};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, CopilotError> {
    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;

    create_dir_all(&config_dir).map_err(|e| CopilotError::Copilot {
        message: format!("Failed to create config directory: {e}"),
        location: ErrorLocation::caller(),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&config_dir, level_for(cli.verbose, cli.quiet))?;
    debug!("Config directory: {}", config_dir.display());

    match cli.command {
        Command::Ask {
            url,
            title,
            page,
            model,
            max_context_chars,
            question,
        } => {
            let env_result = try_load_dotenv();
            if !env_result.loaded {
                debug!("No .env file found - will check existing environment variables");
            }

            let config = QueryConfig::load(&config_dir)?;
            let transport = ReqwestTransport::new(config.request_timeout())?;
            let credentials = EnvFallbackCredentials::new(FileCredentialStore::new(&config_dir));

            let request = AskRequest {
                page: PageSnapshot::new(url, title, read_page_text(&page)?),
                question: question.join(" "),
                model,
                max_context_chars,
            };

            let outcome = ask(request, &config, credentials, transport).await?;

            match render_outcome(&outcome) {
                Rendered::Stdout(text) => {
                    println!("{text}");
                    Ok(ExitCode::SUCCESS)
                }
                Rendered::Stderr(text) => {
                    eprintln!("{text}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::SetKey { key } => {
            let raw = match key {
                Some(key) => key,
                None => read_key_from_stdin()?,
            };

            let store = FileCredentialStore::new(&config_dir);
            set_key(&store, &raw)?;

            info!("API key stored in {}", store.path().display());
            println!("{SAVED_MESSAGE}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Config { init } => {
            print!("{}", show_config(&config_dir, init)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
