pub mod audio;
pub mod presenter;
pub mod progress;
pub mod render;
pub mod screen;
pub mod table;
pub mod view;

pub use audio::{CryPlayback, play_cry};
pub use presenter::{Presenter, TerminalPresenter};
pub use progress::ProgressSpinner;
pub use screen::{Region, Screen};
pub use table::TableDisplay;
