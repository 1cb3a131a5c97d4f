//! Presenters turn a [`Screen`] into something a user can see.

use std::io::{self, Write};

use crate::display::screen::{Region, Screen};
use crate::display::table::TableDisplay;
use crate::error::AppError;
use crate::map_display_error;

/// A surface the view tree can be shown on.
pub trait Presenter {
    /// Show whatever changed since the last call.
    fn apply(&mut self, screen: &mut Screen) -> Result<(), AppError>;

    /// Blocking user alert.
    fn notify(&mut self, message: &str) -> Result<(), AppError>;
}

/// Writes tables to any [`Write`]; stdout by default.
pub struct TerminalPresenter<W: Write = io::Stdout> {
    out: W,
    table: TableDisplay,
    use_colors: bool,
    last: Screen,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout(use_colors: bool) -> Self {
        let use_colors = use_colors && atty::is(atty::Stream::Stdout);
        Self::new(io::stdout(), TableDisplay::new().with_colors(use_colors), use_colors)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, table: TableDisplay, use_colors: bool) -> Self {
        Self {
            out,
            table,
            use_colors,
            last: Screen::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_region(&mut self, screen: &Screen, region: Region) -> Result<(), AppError> {
        match region {
            Region::Grid if screen.grid.is_empty() => Ok(()),
            Region::Grid => {
                let rendered = self.table.render_grid(&screen.grid);
                map_display_error!(writeln!(self.out, "{}", rendered), "write grid")?;
                Ok(())
            }
            Region::LargeCard => match &screen.large_card {
                Some(card) => {
                    let rendered = self.table.render_large_card(card);
                    map_display_error!(writeln!(self.out, "{}", rendered), "write card")?;
                    Ok(())
                }
                // Re-show the grid so the closed card visibly goes away.
                None if !screen.grid.is_empty() && !self.region_pending(screen, Region::Grid) => {
                    self.write_region(screen, Region::Grid)
                }
                None => Ok(()),
            },
            Region::Notices => {
                for notice in &screen.notices {
                    self.write_notice(notice)?;
                }
                Ok(())
            }
        }
    }

    fn region_pending(&self, screen: &Screen, region: Region) -> bool {
        screen.changed_regions(&self.last).contains(&region)
    }

    fn write_notice(&mut self, message: &str) -> Result<(), AppError> {
        let line = if self.use_colors {
            format!("\u{1b}[33m⚠️  {}\u{1b}[0m", message)
        } else {
            format!("⚠️  {}", message)
        };
        map_display_error!(writeln!(self.out, "{}", line), "write notice")?;
        Ok(())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn apply(&mut self, screen: &mut Screen) -> Result<(), AppError> {
        let regions = screen.changed_regions(&self.last);
        log::debug!("Redrawing regions: {:?}", regions);
        for region in regions {
            self.write_region(screen, region)?;
        }
        screen.take_notices();
        self.last = screen.clone();
        map_display_error!(self.out.flush(), "flush output")?;
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<(), AppError> {
        self.write_notice(message)?;
        map_display_error!(self.out.flush(), "flush output")?;
        Ok(())
    }
}
