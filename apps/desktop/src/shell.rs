//! # Shell Abstraction
//!
//! Dialog and prompt surface for the app.
//!
//! Commands never talk to stdin/stdout directly; they go through the
//! [`Shell`] trait so tests can script every confirmation and capture
//! every dialog.

use std::io::{BufRead, Write};

/// Dialog surface used by commands.
///
/// The production implementation is [`StdShell`]; tests use `ScriptedShell`.
pub trait Shell {
    /// Shows an informational dialog.
    fn show_info(&self, title: &str, message: &str);

    /// Shows an error dialog.
    fn show_error(&self, title: &str, message: &str);

    /// Asks a yes/no question. Returns `true` on yes.
    fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Terminal-backed shell.
///
/// Renders dialogs as stdout lines and reads confirmations from stdin.
pub struct StdShell;

impl Shell for StdShell {
    fn show_info(&self, title: &str, message: &str) {
        println!("[{}] {}", title, message);
    }

    fn show_error(&self, title: &str, message: &str) {
        eprintln!("[{}] {}", title, message);
    }

    fn confirm(&self, title: &str, message: &str) -> bool {
        print!("[{}] {} (s/n): ", title, message);
        if std::io::stdout().flush().is_err() {
            return false;
        }

        let stdin = std::io::stdin();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() {
            return false;
        }

        matches!(line.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes")
    }
}

#[cfg(test)]
pub mod scripted {
    //! Scripted shell for command tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::Shell;

    /// Records dialogs and answers confirmations from a pre-loaded script.
    ///
    /// An empty answer queue means "yes to everything".
    #[derive(Default)]
    pub struct ScriptedShell {
        pub infos: Mutex<Vec<(String, String)>>,
        pub errors: Mutex<Vec<(String, String)>>,
        pub answers: Mutex<VecDeque<bool>>,
    }

    impl ScriptedShell {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues an answer for the next `confirm` call.
        pub fn push_answer(&self, answer: bool) {
            self.answers.lock().unwrap().push_back(answer);
        }

        pub fn info_count(&self) -> usize {
            self.infos.lock().unwrap().len()
        }

        pub fn error_count(&self) -> usize {
            self.errors.lock().unwrap().len()
        }

        /// Last info dialog shown, as (title, message).
        pub fn last_info(&self) -> Option<(String, String)> {
            self.infos.lock().unwrap().last().cloned()
        }

        pub fn last_error(&self) -> Option<(String, String)> {
            self.errors.lock().unwrap().last().cloned()
        }
    }

    impl Shell for ScriptedShell {
        fn show_info(&self, title: &str, message: &str) {
            self.infos
                .lock()
                .unwrap()
                .push((title.to_string(), message.to_string()));
        }

        fn show_error(&self, title: &str, message: &str) {
            self.errors
                .lock()
                .unwrap()
                .push((title.to_string(), message.to_string()));
        }

        fn confirm(&self, _title: &str, _message: &str) -> bool {
            self.answers.lock().unwrap().pop_front().unwrap_or(true)
        }
    }
}
