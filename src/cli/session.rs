//! Interactive session: one screen, one favorites list, commands from a line
//! reader.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::core::favorites::FavoritesStore;
use crate::core::search::SearchDispatcher;
use crate::display::audio::{CryPlayback, play_cry, unsupported_message};
use crate::display::presenter::Presenter;
use crate::display::progress::{ProgressSpinner, grid_progress_message};
use crate::display::screen::Screen;
use crate::display::view::Action;
use crate::error::{AppError, CliError};

pub const HELP_TEXT: &str = "\
Commands:
  show <name|id>      Show the full card for one Pokémon
  type <type>         List every Pokémon of a type
  favorites           List your favorite Pokémon
  open <n|name>       Open a card from the list (keeps the list)
  evo <n>             Open the n-th Pokémon of the evolution chain
  fav                 Favorite / unfavorite the open card
  cry                 Play the open card's cry
  close               Close the open card
  help                Show this help
  quit                Leave";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Show(String),
    Type(String),
    Open(String),
    Evolution(usize),
    Favorite,
    Cry,
    Close,
    Help,
    Quit,
    Nothing,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, CliError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "" => ShellCommand::Nothing,
            "show" | "search" => ShellCommand::Show(rest.to_string()),
            "type" => ShellCommand::Type(rest.to_string()),
            "favorites" => ShellCommand::Type("favorites".to_string()),
            "open" => {
                if rest.is_empty() {
                    return Err(CliError::InvalidArguments(
                        "open needs a list number or a name".to_string(),
                    ));
                }
                ShellCommand::Open(rest.to_string())
            }
            "evo" => ShellCommand::Evolution(parse_position(rest, "evo")?),
            "fav" | "favorite" | "unfavorite" => ShellCommand::Favorite,
            "cry" => ShellCommand::Cry,
            "close" => ShellCommand::Close,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => {
                return Err(CliError::UnknownCommand {
                    command: other.to_string(),
                });
            }
        };
        Ok(command)
    }
}

fn parse_position(text: &str, command: &str) -> Result<usize, CliError> {
    match text.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::InvalidArguments(format!(
            "{} needs a position starting at 1, got '{}'",
            command, text
        ))),
    }
}

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<P: Presenter> {
    search: SearchDispatcher,
    screen: Screen,
    favorites: FavoritesStore,
    presenter: P,
    show_progress: bool,
}

impl<P: Presenter> Session<P> {
    pub fn new(search: SearchDispatcher, presenter: P) -> Self {
        Self {
            search,
            screen: Screen::new(),
            favorites: FavoritesStore::new(),
            presenter,
            show_progress: false,
        }
    }

    /// Show a spinner while the grid loads.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Run one command and present the result.
    ///
    /// Search and input errors are returned; the caller decides whether they
    /// are alerts or fatal.
    pub async fn execute(&mut self, command: ShellCommand) -> Result<Flow, AppError> {
        log::debug!("Executing {:?}", command);
        match command {
            ShellCommand::Nothing => return Ok(Flow::Continue),
            ShellCommand::Quit => return Ok(Flow::Exit),
            ShellCommand::Help => {
                self.presenter.notify(HELP_TEXT)?;
                return Ok(Flow::Continue);
            }
            ShellCommand::Show(identifier) => {
                let result = self
                    .search
                    .search_individual(&mut self.screen, &self.favorites, &identifier)
                    .await;
                self.presenter.apply(&mut self.screen)?;
                result?;
            }
            ShellCommand::Type(query) => {
                let result = self.search_type(&query).await;
                self.presenter.apply(&mut self.screen)?;
                result?;
            }
            ShellCommand::Open(target) => {
                let name = self.resolve_grid_target(&target)?;
                self.search
                    .open_card(&mut self.screen, &self.favorites, &name)
                    .await?;
            }
            ShellCommand::Evolution(position) => {
                let name = self.evolution_target(position)?;
                self.search
                    .open_card(&mut self.screen, &self.favorites, &name)
                    .await?;
            }
            ShellCommand::Favorite => {
                let name = self.open_card_name()?;
                self.search
                    .toggle_favorite(&mut self.screen, &mut self.favorites, &name);
            }
            ShellCommand::Cry => self.play_open_cry()?,
            ShellCommand::Close => self.search.close_card(&mut self.screen),
        }
        self.presenter.apply(&mut self.screen)?;
        Ok(Flow::Continue)
    }

    /// Read commands until `quit` or end of input. Search and input errors are
    /// shown as alerts; anything else ends the session.
    pub async fn run<R>(&mut self, reader: R) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    return Err(CliError::InvalidArguments(format!("Failed to read input: {}", e))
                        .into());
                }
            };

            let outcome = match ShellCommand::parse(&line) {
                Ok(command) => self.execute(command).await,
                Err(e) => Err(e.into()),
            };

            match outcome {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(AppError::Search(e)) => self.presenter.notify(&e.to_string())?,
                Err(AppError::Cli(e)) => self.presenter.notify(&e.to_string())?,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    async fn search_type(&mut self, query: &str) -> Result<(), AppError> {
        let names = self
            .search
            .search_by_type(&mut self.screen, &self.favorites, query)
            .await?;

        if self.show_progress && !names.is_empty() {
            let mut spinner = ProgressSpinner::new("Searching...".to_string());
            spinner.start();
            self.search
                .render_list_with_progress(&mut self.screen, &names, |index, total, name| {
                    spinner.update_message(grid_progress_message(index, total, name));
                })
                .await;
            spinner.stop(None);
        } else {
            self.search.render_list(&mut self.screen, &names).await;
        }
        Ok(())
    }

    /// `n` picks the n-th mini-card; anything else is taken as a name. With no
    /// grid on screen a number is a National Dex lookup.
    fn resolve_grid_target(&self, target: &str) -> Result<String, CliError> {
        let Ok(position) = target.parse::<usize>() else {
            return Ok(target.to_string());
        };
        if self.screen.grid.is_empty() {
            return Ok(target.to_string());
        }
        position
            .checked_sub(1)
            .and_then(|index| self.screen.grid.get(index))
            .and_then(|card| match &card.on_click {
                Action::ShowDetails(name) => Some(name.clone()),
                _ => None,
            })
            .ok_or_else(|| {
                CliError::InvalidArguments(format!("The list has no entry {}", position))
            })
    }

    fn evolution_target(&self, position: usize) -> Result<String, CliError> {
        let card = self.screen.large_card.as_ref().ok_or_else(no_open_card)?;
        card.evolution_names()
            .get(position - 1)
            .map(|name| name.to_string())
            .ok_or_else(|| {
                CliError::InvalidArguments(format!(
                    "The evolution chain has no entry {}",
                    position
                ))
            })
    }

    fn open_card_name(&self) -> Result<String, CliError> {
        self.screen
            .large_card
            .as_ref()
            .map(|card| card.id_name.clone())
            .ok_or_else(no_open_card)
    }

    fn play_open_cry(&mut self) -> Result<(), AppError> {
        let card = self.screen.large_card.as_ref().ok_or_else(no_open_card)?;
        let Some(Action::PlayCry(url)) = card.cry.as_ref().map(|button| &button.action) else {
            return Err(CliError::InvalidArguments("This Pokémon has no cry".to_string()).into());
        };
        match play_cry(self.search.service(), url) {
            CryPlayback::Started => Ok(()),
            CryPlayback::Unsupported { url } => self.presenter.notify(&unsupported_message(&url)),
        }
    }
}

fn no_open_card() -> CliError {
    CliError::InvalidArguments("No card is open".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::PokeApiClient;
    use crate::core::services::PokedexService;
    use crate::display::presenter::TerminalPresenter;
    use crate::display::table::TableDisplay;
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Records what would have been shown.
    #[derive(Default)]
    struct RecordingPresenter {
        frames: Vec<Screen>,
        alerts: Vec<String>,
    }

    impl Presenter for RecordingPresenter {
        fn apply(&mut self, screen: &mut Screen) -> Result<(), AppError> {
            self.frames.push(screen.clone());
            screen.take_notices();
            Ok(())
        }

        fn notify(&mut self, message: &str) -> Result<(), AppError> {
            self.alerts.push(message.to_string());
            Ok(())
        }
    }

    fn pokemon(id: u32, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "weight": 1,
            "height": 1,
            "types": [],
            "sprites": {"front_default": format!("{}.png", name)},
            "cries": {"latest": format!("{}.ogg", id)}
        })
    }

    async fn mount_json(server: &MockServer, at: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(at))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    async fn seeded_server() -> MockServer {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/type/psychic",
            json!({"pokemon": [
                {"pokemon": {"name": "abra", "url": ""}},
                {"pokemon": {"name": "mew", "url": ""}}
            ]}),
        )
        .await;
        mount_json(&server, "/pokemon/abra", pokemon(63, "abra")).await;
        mount_json(&server, "/pokemon/kadabra", pokemon(64, "kadabra")).await;
        mount_json(&server, "/pokemon/mew", pokemon(151, "mew")).await;
        mount_json(
            &server,
            "/pokemon-species/63",
            json!({"evolution_chain": {"url": format!("{}/evolution-chain/26/", server.uri())}}),
        )
        .await;
        mount_json(
            &server,
            "/evolution-chain/26/",
            json!({"chain": {
                "species": {"name": "abra", "url": ""},
                "evolves_to": [{"species": {"name": "kadabra", "url": ""}, "evolves_to": []}]
            }}),
        )
        .await;
        server
    }

    fn session_for(server: &MockServer) -> Session<RecordingPresenter> {
        let client = PokeApiClient::new(server.uri()).expect("client creation failed");
        let search = SearchDispatcher::new(PokedexService::new(client));
        Session::new(search, RecordingPresenter::default())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            ShellCommand::parse("show  Mr-Mime ").unwrap(),
            ShellCommand::Show("Mr-Mime".to_string())
        );
        assert_eq!(ShellCommand::parse("show").unwrap(), ShellCommand::Show(String::new()));
        assert_eq!(
            ShellCommand::parse("favorites").unwrap(),
            ShellCommand::Type("favorites".to_string())
        );
        assert_eq!(ShellCommand::parse("EVO 2").unwrap(), ShellCommand::Evolution(2));
        assert_eq!(ShellCommand::parse("   ").unwrap(), ShellCommand::Nothing);
        assert!(matches!(
            ShellCommand::parse("evo 0"),
            Err(CliError::InvalidArguments(_))
        ));
        assert!(matches!(
            ShellCommand::parse("dance"),
            Err(CliError::UnknownCommand { .. })
        ));
    }

    #[tokio::test]
    async fn test_grid_then_open_then_evolution() {
        let server = seeded_server().await;
        let mut session = session_for(&server);

        session
            .execute(ShellCommand::Type("Psychic".to_string()))
            .await
            .unwrap();
        assert_eq!(session.screen().grid.len(), 2);

        session
            .execute(ShellCommand::Open("1".to_string()))
            .await
            .unwrap();
        let card = session.screen().large_card.as_ref().unwrap();
        assert_eq!(card.id_name, "abra");
        assert_eq!(card.evolution_names(), vec!["abra", "kadabra"]);
        assert_eq!(session.screen().grid.len(), 2);

        session.execute(ShellCommand::Evolution(2)).await.unwrap();
        assert_eq!(session.screen().large_card.as_ref().unwrap().id_name, "kadabra");
        assert_eq!(session.screen().grid.len(), 2);
    }

    #[tokio::test]
    async fn test_open_number_outside_grid_alerts() {
        let server = seeded_server().await;
        let mut session = session_for(&server);

        session
            .execute(ShellCommand::Type("psychic".to_string()))
            .await
            .unwrap();
        for target in ["999", "3", "0"] {
            let result = session.execute(ShellCommand::Open(target.to_string())).await;
            assert!(matches!(result, Err(AppError::Cli(CliError::InvalidArguments(_)))));
        }
        assert!(session.screen().large_card.is_none());
        assert_eq!(session.screen().grid.len(), 2);

        session
            .execute(ShellCommand::Open("mew".to_string()))
            .await
            .unwrap();
        assert_eq!(session.screen().large_card.as_ref().unwrap().id_name, "mew");
    }

    #[tokio::test]
    async fn test_open_number_without_grid_is_dex_lookup() {
        let server = seeded_server().await;
        mount_json(&server, "/pokemon/151", pokemon(151, "mew")).await;
        let mut session = session_for(&server);

        session
            .execute(ShellCommand::Open("151".to_string()))
            .await
            .unwrap();
        assert_eq!(session.screen().large_card.as_ref().unwrap().id_name, "mew");
    }

    #[tokio::test]
    async fn test_favorites_flow() {
        let server = seeded_server().await;
        let mut session = session_for(&server);

        let result = session
            .execute(ShellCommand::Type("favorites".to_string()))
            .await;
        assert!(matches!(result, Err(AppError::Search(_))));

        session
            .execute(ShellCommand::Show("mew".to_string()))
            .await
            .unwrap();
        session.execute(ShellCommand::Favorite).await.unwrap();
        assert!(session.favorites().contains("mew"));
        assert_eq!(
            session.screen().large_card.as_ref().unwrap().favorite.label,
            "UnFavorite"
        );

        session
            .execute(ShellCommand::Type("favorites".to_string()))
            .await
            .unwrap();
        let names: Vec<&str> = session
            .screen()
            .grid
            .iter()
            .map(|c| c.id_name.as_str())
            .collect();
        assert_eq!(names, vec!["mew"]);
    }

    #[tokio::test]
    async fn test_run_turns_errors_into_alerts() {
        let server = seeded_server().await;
        let mut session = session_for(&server);

        let input = b"show\nshow agumon\nfav\ndance\nshow abra\nclose\nquit\nshow mew\n";
        session.run(&input[..]).await.unwrap();

        let presenter = session.presenter();
        assert_eq!(
            presenter.alerts,
            vec![
                "No Name or ID Specified.".to_string(),
                "Couldn't Find Any Pokémon With The Name/ID: agumon".to_string(),
                "Invalid arguments: No card is open".to_string(),
                "Unknown command: dance".to_string(),
            ]
        );
        // Input after quit is never read.
        assert!(session.screen().large_card.is_none());
        assert!(
            presenter
                .frames
                .iter()
                .all(|frame| frame.large_card.as_ref().map(|c| c.id_name.as_str()) != Some("mew"))
        );
    }

    #[tokio::test]
    async fn test_session_with_terminal_presenter() {
        let server = seeded_server().await;
        let client = PokeApiClient::new(server.uri()).unwrap();
        let presenter = TerminalPresenter::new(
            Vec::<u8>::new(),
            TableDisplay::new().with_max_width(120).with_colors(false),
            false,
        );
        let mut session = Session::new(
            SearchDispatcher::new(PokedexService::new(client)),
            presenter,
        );

        session.run(&b"type psychic\nopen mew\n"[..]).await.unwrap();

        let output = String::from_utf8(session.into_presenter().into_inner()).unwrap();
        assert!(output.contains("Abra"));
        assert!(output.contains("ID: 151"));
        assert!(output.contains("No Evolution Chain For This Pokémon."));
    }
}
