use std::path::PathBuf;

use crate::api::client::PokeApiClient;
use crate::cli::main_types::{Commands, ConfigCommands};
use crate::cli::session::{Session, ShellCommand};
use crate::core::search::SearchDispatcher;
use crate::core::services::PokedexService;
use crate::display::presenter::TerminalPresenter;
use crate::error::AppError;
use crate::storage::config::Config;
use crate::utils::logging::VerboseLogger;
use crate::utils::validation::validate_url;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    base_url_override: Option<String>,
    use_colors: bool,
    verbose: VerboseLogger,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            use_colors: config.use_colors(),
            config,
            config_path,
            base_url_override: None,
            verbose: VerboseLogger::new(verbose),
        }
    }

    /// `--base-url` / `POKELOOKUP_BASE_URL`.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url_override = base_url;
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = self.use_colors && use_colors;
        self
    }

    fn log_verbose(&self, msg: &str) {
        self.verbose.log(msg);
    }

    /// Base URL in effect: the override, then the config file, then the default.
    pub fn base_url(&self) -> &str {
        self.base_url_override
            .as_deref()
            .unwrap_or_else(|| self.config.base_url())
    }

    pub fn search_dispatcher(&self) -> Result<SearchDispatcher, AppError> {
        let base_url = self.base_url().trim_end_matches('/').to_string();
        validate_url(&base_url)?;
        self.log_verbose(&format!("Using PokeAPI at {}", base_url));

        let client = PokeApiClient::with_timeout(base_url, self.config.timeout())?;
        let service =
            PokedexService::with_placeholder(client, self.config.placeholder_image().to_string());
        Ok(SearchDispatcher::new(service))
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Show { identifier } => {
                self.log_verbose(&format!("Attempting show for '{}'", identifier));
                self.run_once(ShellCommand::Show(identifier)).await
            }
            Commands::Type { query } => {
                self.log_verbose(&format!("Attempting type search for '{}'", query));
                self.run_once(ShellCommand::Type(query)).await
            }
            Commands::Shell => self.handle_shell().await,
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    async fn run_once(&self, command: ShellCommand) -> Result<(), AppError> {
        let presenter = TerminalPresenter::stdout(self.use_colors);
        let mut session =
            Session::new(self.search_dispatcher()?, presenter).with_progress(is_interactive());
        session.execute(command).await?;
        Ok(())
    }

    async fn handle_shell(&self) -> Result<(), AppError> {
        self.log_verbose("Starting interactive session");
        let presenter = TerminalPresenter::stdout(self.use_colors);
        if is_interactive() {
            println!("Pokémon lookup. Type 'help' for commands, 'quit' to leave.");
        }
        let mut session =
            Session::new(self.search_dispatcher()?, presenter).with_progress(is_interactive());
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        session.run(stdin).await
    }

    fn handle_config_command(&self, command: ConfigCommands) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                self.log_verbose("Attempting config show command");
                println!("Current Configuration:");
                println!("=====================");
                for line in self.config.effective_lines() {
                    println!("{}", line);
                }
                if let Some(base_url) = &self.base_url_override {
                    println!("(base_url overridden for this run: {})", base_url);
                }
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                self.log_verbose(&format!("Attempting config set {} = {}", key, value));
                let mut config = self.config.clone();
                config.set(&key, &value)?;
                config.save(self.config_path.clone())?;
                println!("✅ Set {} = {}", key, value);
                Ok(())
            }
        }
    }
}

fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdout) && atty::is(atty::Stream::Stdin)
}
