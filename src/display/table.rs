use crate::display::view::{EvolutionSection, Image, LargeCard, MiniCard, MovesSection};
use crate::utils::text::{center_text, truncate_text_unicode};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

const MIN_WIDTH: usize = 40;
const MAX_WIDTH: usize = 200;
const DEFAULT_WIDTH: usize = 80;

/// Formats view-tree cards as comfy-table tables.
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => Some((cols as usize).clamp(MIN_WIDTH, MAX_WIDTH)),
            Err(_) => Some(DEFAULT_WIDTH),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn width(&self) -> usize {
        self.max_width.unwrap_or(DEFAULT_WIDTH)
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        let available = if self.width() > 20 {
            self.width() - 6
        } else {
            self.width().max(MIN_WIDTH)
        };
        table.set_width(available as u16);
        table
    }

    fn header_cell(&self, text: &str) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(Color::Cyan)
        } else {
            Cell::new(text)
        }
    }

    fn muted_cell(&self, text: &str) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(Color::DarkGrey)
        } else {
            Cell::new(text)
        }
    }

    /// URLs are long; cap them to a third of the table.
    fn link(&self, url: &str) -> String {
        truncate_text_unicode(url, (self.width() / 3).max(20))
    }

    /// Type icon URLs, one per line. Unresolved icons are skipped.
    fn icon_links(&self, icons: &[Image]) -> String {
        icons
            .iter()
            .filter(|icon| !icon.src.is_empty())
            .map(|icon| self.link(&icon.src))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Grid of mini-cards. Row numbers are what `open <n>` refers to.
    pub fn render_grid(&self, cards: &[MiniCard]) -> String {
        let mut table = self.new_table();
        table.set_header(
            ["#", "Name", "ID", "Types", "Weight", "Height", "Sprite"]
                .iter()
                .map(|h| self.header_cell(h))
                .collect::<Vec<_>>(),
        );

        for (index, card) in cards.iter().enumerate() {
            let number = (index + 1).to_string();
            let mut types = card.type_names().join(", ");
            let icons = self.icon_links(&card.type_icons);
            if !icons.is_empty() {
                types = format!("{}\n{}", types, icons);
            }
            table.add_row(vec![
                self.muted_cell(&number),
                if self.use_colors {
                    Cell::new(&card.title).add_attribute(Attribute::Bold)
                } else {
                    Cell::new(&card.title)
                },
                Cell::new(&card.subtitle),
                Cell::new(types),
                Cell::new(&card.weight),
                Cell::new(&card.height),
                self.muted_cell(&self.link(&card.sprite.src)),
            ]);
        }

        table.to_string()
    }

    /// The large card as a two-column table, one row per section.
    pub fn render_large_card(&self, card: &LargeCard) -> String {
        let mut table = self.new_table();
        let heading = format!("{}  ({})", card.title, card.subtitle);
        table.set_header(vec![
            self.header_cell(&heading),
            self.header_cell(&center_text(&card.favorite.label, 12)),
        ]);

        table.add_row(vec![
            Cell::new(format!("{}  {}", card.weight, card.height)),
            Cell::new(
                card.type_icons
                    .iter()
                    .map(|icon| icon.alt.trim_end_matches(" Icon"))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        ]);

        let icons = self.icon_links(&card.type_icons);
        if !icons.is_empty() {
            table.add_row(vec![Cell::new("Type Icons:"), self.muted_cell(&icons)]);
        }

        let sprites = card
            .sprites
            .iter()
            .map(|image| self.link(&image.src))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![Cell::new("Sprites:"), self.muted_cell(&sprites)]);

        let abilities = card
            .abilities
            .iter()
            .map(|a| format!("{}  ({})", a.name, a.hidden))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![Cell::new(&card.abilities_heading), Cell::new(abilities)]);

        let moves = match &card.moves {
            MovesSection::Groups(groups) => groups
                .iter()
                .map(|group| format!("{}\n  {}", group.heading, group.moves.join(", ")))
                .collect::<Vec<_>>()
                .join("\n"),
            MovesSection::Empty(message) => message.clone(),
        };
        table.add_row(vec![Cell::new(&card.moves_heading), Cell::new(moves)]);

        table.add_row(vec![
            Cell::new(&card.stats_heading),
            Cell::new(card.stats.join("\n")),
        ]);

        let evolution = match &card.evolution {
            EvolutionSection::Chain(_) => card
                .evolution_names()
                .iter()
                .enumerate()
                .map(|(index, name)| format!("[{}] {}", index + 1, name))
                .collect::<Vec<_>>()
                .join("  "),
            EvolutionSection::Missing(message) => message.clone(),
        };
        table.add_row(vec![Cell::new(&card.evolution_heading), Cell::new(evolution)]);

        let mut controls = vec![format!("[fav] {}", card.favorite.label)];
        if let Some(cry) = &card.cry {
            controls.push(format!("[cry] {}", cry.label));
        }
        controls.push(format!("[close] {}", card.close.label));
        table.add_row(vec![self.muted_cell(""), self.muted_cell(&controls.join("  "))]);

        table.to_string()
    }
}
