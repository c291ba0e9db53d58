//! The interactive subject/count prompt.

use std::io::{self, Stdout, Write};

use brainstorm_foundation::{Error, ErrorKind, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// Question printed before each subject prompt.
pub const SUBJECT_QUESTION: &str = "What subject(s) would you like to generate ideas for?";

/// Outcome of one request.
enum Step {
    Continue,
    Exit,
}

/// The interactive prompt.
///
/// Each request asks for a subject list and a count, then prints that many
/// titles. Ctrl+C abandons the current request; Ctrl+D quits.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    /// The line editor for input.
    editor: E,

    /// Loaded data set and generator.
    session: Session,

    /// Where titles and messages are written.
    output: W,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Prompt for the subject list.
    subject_prompt: String,

    /// Prompt for the title count.
    count_prompt: String,
}

impl Repl<RustylineEditor, Stdout> {
    /// Creates a prompt on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E, Stdout> {
    /// Creates a prompt reading from `editor` and writing to stdout.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_words(session.words());
        Self {
            editor,
            session,
            output: io::stdout(),
            show_banner: true,
            subject_prompt: "(Enter one or more nouns separated by commas): ".to_string(),
            count_prompt: "How many? ".to_string(),
        }
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Redirects output to `output`.
    #[must_use]
    pub fn with_output<W2: Write>(self, output: W2) -> Repl<E, W2> {
        Repl {
            editor: self.editor,
            session: self.session,
            output,
            show_banner: self.show_banner,
            subject_prompt: self.subject_prompt,
            count_prompt: self.count_prompt,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a reference to the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Returns a reference to the output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Runs requests until end of input.
    ///
    /// Generation errors are reported and the loop carries on.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner()?;
        }

        loop {
            match self.request() {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => break,
                Err(e) if matches!(e.kind, ErrorKind::Internal(_)) => return Err(e),
                Err(e) => print_error(&e),
            }
        }

        self.line("\nGoodbye!")
    }

    /// Handles one subject/count request.
    fn request(&mut self) -> Result<Step> {
        self.line(SUBJECT_QUESTION)?;
        let input = match self.editor.read_line(&self.subject_prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return self.cancelled(),
            ReadResult::Eof => return Ok(Step::Exit),
        };
        if input.trim().is_empty() {
            return Ok(Step::Continue);
        }
        self.editor.add_history(&input);

        let subjects = self.session.resolve_subjects(&input);
        if subjects.is_empty() {
            self.line("No subjects given.")?;
            return Ok(Step::Continue);
        }

        let Some(count) = self.read_count()? else {
            return Ok(Step::Exit);
        };
        if count == 0 {
            return self.cancelled();
        }

        for title in self.session.generate(&subjects, count)? {
            self.line(&title)?;
        }
        self.line("")?;
        Ok(Step::Continue)
    }

    /// Reads a positive count, re-prompting on bad input.
    ///
    /// Returns `Some(0)` on Ctrl+C and `None` on end of input.
    fn read_count(&mut self) -> Result<Option<usize>> {
        loop {
            match self.editor.read_line(&self.count_prompt)? {
                ReadResult::Line(text) => match text.trim().parse::<usize>() {
                    Ok(n) if n > 0 => return Ok(Some(n)),
                    _ => self.line(&format!(
                        "{:?} is not a count. Enter a whole number greater than zero.",
                        text.trim()
                    ))?,
                },
                ReadResult::Interrupted => return Ok(Some(0)),
                ReadResult::Eof => return Ok(None),
            }
        }
    }

    fn cancelled(&mut self) -> Result<Step> {
        self.line("Request cancelled.")?;
        Ok(Step::Continue)
    }

    fn print_banner(&mut self) -> Result<()> {
        self.line(&format!("Brainstorm {}", env!("CARGO_PKG_VERSION")))?;
        self.line("Ctrl+C cancels a request, Ctrl+D quits.\n")
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")
            .map_err(|e| Error::new(ErrorKind::Internal(format!("write failed: {e}"))))
    }
}

fn print_error(e: &Error) {
    eprintln!("\x1b[31m{}\x1b[0m", error_message(e));
}

fn error_message(e: &Error) -> String {
    format!("Error: {}", e.describe())
}
