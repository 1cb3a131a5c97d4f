//! Spinner shown while the grid is being filled.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const SPINNER_UPDATE_INTERVAL_MS: u64 = 100;
const CLEAR_LINE_WIDTH: usize = 100;

/// Spinner on its own thread; the message can change while it runs.
pub struct ProgressSpinner {
    message: Arc<Mutex<String>>,
    running: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ProgressSpinner {
    pub fn new(message: String) -> Self {
        Self {
            message: Arc::new(Mutex::new(message)),
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::Relaxed) {
            return;
        }
        let running = Arc::clone(&self.running);
        let message = Arc::clone(&self.message);

        let handle = thread::spawn(move || {
            let spinner_chars = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut index = 0;

            while running.load(Ordering::Relaxed) {
                let current = message.lock().map(|m| m.clone()).unwrap_or_default();
                print!(
                    "\r{:<width$}\r{} {}",
                    "",
                    spinner_chars[index],
                    current,
                    width = CLEAR_LINE_WIDTH
                );
                let _ = io::stdout().flush();

                index = (index + 1) % spinner_chars.len();
                thread::sleep(Duration::from_millis(SPINNER_UPDATE_INTERVAL_MS));
            }

            print!("\r{:<width$}\r", "", width = CLEAR_LINE_WIDTH);
            let _ = io::stdout().flush();
        });

        self.handle = Some(handle);
    }

    pub fn stop(&mut self, completion_message: Option<&str>) {
        self.running.store(false, Ordering::Relaxed);

        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }

        if let Some(msg) = completion_message {
            // Leading space keeps emoji from being clipped.
            println!(" {}", msg);
            let _ = io::stdout().flush();
        }
    }

    pub fn update_message(&self, message: String) {
        if let Ok(mut current) = self.message.lock() {
            *current = message;
        }
    }

    pub fn message(&self) -> String {
        self.message.lock().map(|m| m.clone()).unwrap_or_default()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

impl Drop for ProgressSpinner {
    fn drop(&mut self) {
        self.stop(None);
    }
}

/// Spinner text for the `index`-th (zero based) of `total` grid lookups.
pub fn grid_progress_message(index: usize, total: usize, name: &str) -> String {
    format!("Loading [{}/{}] {}...", index + 1, total, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_progress_message() {
        assert_eq!(
            grid_progress_message(0, 2, "bulbasaur"),
            "Loading [1/2] bulbasaur..."
        );
    }

    #[test]
    fn test_spinner_message_updates_and_stops() {
        let mut spinner = ProgressSpinner::new("Searching...".to_string());
        assert!(!spinner.is_running());
        spinner.update_message("Loading [1/1] mew...".to_string());
        assert_eq!(spinner.message(), "Loading [1/1] mew...");

        spinner.start();
        assert!(spinner.is_running());
        spinner.stop(None);
        assert!(!spinner.is_running());
    }
}
