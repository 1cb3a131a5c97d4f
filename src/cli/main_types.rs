use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pokelookup")]
#[command(about = "Look up Pokémon by name, National Dex number or type using PokeAPI")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// PokeAPI base URL, overriding the config file
    #[arg(long, global = true, env = "POKELOOKUP_BASE_URL")]
    pub base_url: Option<String>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Show the full card for one Pokémon
    Show {
        /// Name or National Dex number
        identifier: String,
    },
    /// List every Pokémon of a type, or your favorites with "favorites"
    Type {
        /// Type name such as "grass", or "favorites"
        query: String,
    },
    /// Interactive session (the default)
    Shell,
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}

impl Cli {
    /// The subcommand to run; no subcommand means the interactive shell.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["pokelookup", "show", "Pikachu"]).unwrap();
        assert_eq!(
            cli.command_or_default(),
            Commands::Show {
                identifier: "Pikachu".to_string()
            }
        );
    }

    #[test]
    fn test_default_command_is_shell() {
        let cli = Cli::try_parse_from(["pokelookup", "--no-color"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.command_or_default(), Commands::Shell);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pokelookup",
            "type",
            "grass",
            "--base-url",
            "http://localhost:1234",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:1234"));
    }

    #[test]
    fn test_config_set() {
        let cli =
            Cli::try_parse_from(["pokelookup", "config", "set", "timeout_seconds", "10"]).unwrap();
        assert_eq!(
            cli.command_or_default(),
            Commands::Config {
                command: ConfigCommands::Set {
                    key: "timeout_seconds".to_string(),
                    value: "10".to_string()
                }
            }
        );
    }
}
