//! Line editor abstraction for the interactive prompt.
//!
//! The prompt talks to a [`LineEditor`]. [`RustylineEditor`] is the terminal
//! implementation; [`ScriptedEditor`] replays canned input for tests.

use std::borrow::Cow;
use std::collections::VecDeque;

use brainstorm_foundation::{Error, ErrorKind, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

/// Result of reading a line from the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set the words offered for tab completion.
    fn set_words(&mut self, words: Vec<String>);
}

#[derive(Helper, Completer, Hinter, Validator)]
struct SubjectHelper {
    #[rustyline(Completer)]
    completer: SubjectCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for SubjectHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes the subject currently being typed from the known nouns.
///
/// Prefixes match regardless of case; candidates keep the listed spelling.
#[derive(Default)]
struct SubjectCompleter {
    words: Vec<String>,
}

impl SubjectCompleter {
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let item_start = line[..pos].rfind(',').map_or(0, |i| i + 1);
        let leading = line[item_start..pos].len() - line[item_start..pos].trim_start().len();
        let start = item_start + leading;
        let prefix = line[start..pos].to_lowercase();

        let candidates = self
            .words
            .iter()
            .filter(|word| !prefix.is_empty() && word.to_lowercase().starts_with(&prefix))
            .map(|word| Pair {
                display: word.clone(),
                replacement: word.clone(),
            })
            .collect();
        (start, candidates)
    }
}

impl Completer for SubjectCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<SubjectHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(readline_error)?
            .build();

        let helper = SubjectHelper {
            completer: SubjectCompleter::default(),
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config).map_err(readline_error)?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(readline_error(e)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_words(&mut self, mut words: Vec<String>) {
        words.sort_unstable();
        words.dedup();
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.words = words;
        }
    }
}

fn readline_error(e: ReadlineError) -> Error {
    Error::new(ErrorKind::Internal(e.to_string()))
}

/// Editor that replays queued input, for tests and non-terminal use.
///
/// Once the queue is exhausted every read returns [`ReadResult::Eof`].
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    input: VecDeque<ReadResult>,
    prompts: Vec<String>,
    history: Vec<String>,
}

impl ScriptedEditor {
    /// Creates an editor that will return `lines` in order.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(|l| ReadResult::Line(l.into())).collect(),
            ..Self::default()
        }
    }

    /// Queues a line.
    #[must_use]
    pub fn then_line(mut self, line: impl Into<String>) -> Self {
        self.input.push_back(ReadResult::Line(line.into()));
        self
    }

    /// Queues a Ctrl+C.
    #[must_use]
    pub fn then_interrupt(mut self) -> Self {
        self.input.push_back(ReadResult::Interrupted);
        self
    }

    /// Returns every prompt shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Returns the lines added to history.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front().unwrap_or(ReadResult::Eof))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn set_words(&mut self, _words: Vec<String>) {}
}
