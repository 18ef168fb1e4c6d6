//! Speech output: hand a sentence to an external synthesizer
//!
//! Speaking is fire-and-forget. The synthesizer runs as a child process that
//! a detached thread reaps; the caller never waits on it and never hears
//! whether it succeeded. A missing synthesizer is logged and otherwise ignored.

use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, warn};

/// Placeholder in the configured command replaced by the voice code
pub const LANG_PLACEHOLDER: &str = "{lang}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Russian,
    English,
}

impl Language {
    /// BCP 47 tag
    pub fn tag(self) -> &'static str {
        match self {
            Language::Russian => "ru-RU",
            Language::English => "en-US",
        }
    }

    /// Voice name understood by espeak-style synthesizers
    pub fn voice(self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en-us",
        }
    }
}

/// Destination for spoken text
pub trait SpeechSink {
    fn speak(&self, text: &str, language: Language);
}

/// Sink used when speech is disabled
pub struct Silent;

impl SpeechSink for Silent {
    fn speak(&self, text: &str, language: Language) {
        debug!(lang = language.tag(), text, "speech disabled, dropping utterance");
    }
}

/// Sink that runs an external program per utterance
pub struct CommandSpeech {
    command: Vec<String>,
}

impl CommandSpeech {
    /// `command[0]` is the program, the rest are arguments; the text is appended
    pub fn new(command: Vec<String>) -> Self {
        CommandSpeech { command }
    }

    /// Full argv for one utterance
    pub fn argv(&self, text: &str, language: Language) -> Vec<String> {
        self.command
            .iter()
            .map(|arg| arg.replace(LANG_PLACEHOLDER, language.voice()))
            .chain(std::iter::once(text.to_string()))
            .collect()
    }
}

impl SpeechSink for CommandSpeech {
    fn speak(&self, text: &str, language: Language) {
        if self.command.is_empty() {
            return;
        }
        let argv = self.argv(text, language);
        let Some((program, args)) = argv.split_first() else {
            return;
        };

        let spawned = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                debug!(program = %program, lang = language.tag(), "speaking");
                thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => warn!(program = %program, error = %e, "speech synthesizer unavailable"),
        }
    }
}
