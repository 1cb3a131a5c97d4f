use clap::Parser;
use pokelookup::cli::dispatcher::Dispatcher;
use pokelookup::cli::main_types::Cli;
use pokelookup::storage::config::Config;
use pokelookup::utils::logging;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| Config::file_in(&PathBuf::from(dir)));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    if cli.verbose {
        println!("Verbose mode is enabled");
        if let Some(config_dir) = &cli.config_dir {
            println!("Using config directory: {}", config_dir);
        }
    }

    let command = cli.command_or_default();
    let dispatcher = Dispatcher::new(config, config_path, cli.verbose)
        .with_base_url(cli.base_url)
        .with_colors(!cli.no_color);

    if let Err(e) = dispatcher.dispatch(command).await {
        let severity = e.severity();
        eprintln!("{} {}", severity.emoji(), e.display_friendly());
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("💡 {}", hint);
        }
        std::process::exit(1);
    }
}
