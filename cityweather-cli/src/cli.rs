use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cityweather_core::{
    Config, Effect, ScreenController, ScreenState, WeatherClient, WeatherProvider,
    client_from_config,
};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Print debug logs to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Look up one city and print the result.
    Show {
        /// City name, e.g. "London" or "New York".
        city: String,

        /// Print the screen state as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for cities until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Show { city, json } => show(city, json).await,
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<ExitCode> {
    let path = Config::config_file_path()?;
    let mut cfg = Config::load_from(&path)?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    cfg.set_api_key(api_key.trim().to_string());
    cfg.save_to(&path)?;

    println!("Saved configuration to {}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn screen() -> anyhow::Result<ScreenController<WeatherClient>> {
    let cfg = Config::load()?;
    let client = client_from_config(&cfg)?;
    Ok(ScreenController::new(client))
}

async fn show(city: String, as_json: bool) -> anyhow::Result<ExitCode> {
    let mut screen = screen()?;
    screen.set_query(city);
    screen.submit().await;

    if as_json {
        let value = render::json(screen.state(), screen.display_category());
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", render::text(screen.state(), screen.display_category()));
    }

    match screen.state() {
        ScreenState::Success(_) => Ok(ExitCode::SUCCESS),
        ScreenState::Idle | ScreenState::Error(_) => Ok(ExitCode::FAILURE),
    }
}

async fn interactive() -> anyhow::Result<ExitCode> {
    let mut screen = screen()?;
    // Text the next prompt starts with; kept after an error so it can be edited.
    let mut draft = String::new();

    loop {
        let input = Text::new("City:")
            .with_placeholder("Enter city")
            .with_initial_value(&draft)
            .prompt();

        let input = match input {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                tracing::debug!("prompt closed, leaving interactive mode");
                break;
            }
            Err(err) => return Err(err).context("Failed to read city"),
        };

        let Some(effect) = submit_line(&mut screen, input).await else {
            draft.clear();
            continue;
        };
        println!("{}\n", render::text(screen.state(), screen.display_category()));

        draft = match effect {
            Effect::ReleaseFocus => String::new(),
            Effect::None => screen.query().to_owned(),
        };
    }

    Ok(ExitCode::SUCCESS)
}

/// Submit one prompt line. Blank lines are not submitted, like a disabled button.
async fn submit_line<P: WeatherProvider>(
    screen: &mut ScreenController<P>,
    input: String,
) -> Option<Effect> {
    screen.set_query(input);
    if !screen.can_submit() {
        tracing::debug!("blank city, submit skipped");
        return None;
    }

    Some(screen.submit().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cityweather_core::{FetchError, WeatherResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Always reports an unknown city and counts lookups.
    #[derive(Debug, Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WeatherProvider for CountingProvider {
        async fn fetch_weather(&self, _query: &str) -> Result<WeatherResult, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(FetchError::CityNotFound)
        }
    }

    #[tokio::test]
    async fn blank_line_is_not_submitted() {
        let mut screen = ScreenController::new(CountingProvider::default());

        assert_eq!(submit_line(&mut screen, "   ".into()).await, None);
        assert_eq!(screen.state(), &ScreenState::Idle);
        assert_eq!(screen.provider().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn non_blank_line_is_submitted() {
        let mut screen = ScreenController::new(CountingProvider::default());

        assert_eq!(submit_line(&mut screen, "Atlantis".into()).await, Some(Effect::None));
        assert!(matches!(screen.state(), ScreenState::Error(_)));
        assert_eq!(screen.provider().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["cityweather"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn show_takes_city_and_json_flag() {
        let cli = Cli::try_parse_from(["cityweather", "-v", "show", "New York", "--json"])
            .expect("parse");

        assert!(cli.verbose);
        match cli.command {
            Some(Command::Show { city, json }) => {
                assert_eq!(city, "New York");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_requires_city() {
        assert!(Cli::try_parse_from(["cityweather", "show"]).is_err());
    }
}
