//! Error types for the Brainstorm system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Brainstorm operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a template arity error.
    #[must_use]
    pub fn template_arity(expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::TemplateArity { expected, actual })
    }

    /// Creates an insufficient subjects error.
    #[must_use]
    pub fn insufficient_subjects(required: usize, available: usize) -> Self {
        Self::new(ErrorKind::InsufficientSubjects {
            required,
            available,
        })
    }

    /// Creates a template syntax error.
    #[must_use]
    pub fn template_syntax(
        template: impl Into<String>,
        offset: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::TemplateSyntax {
            template: template.into(),
            offset,
            message: message.into(),
        })
    }

    /// Creates a data source error.
    #[must_use]
    pub fn data_source(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DataSource {
            path: path.into(),
            message: message.into(),
        })
    }

    /// Creates a usage error for a bad command-line argument or setting.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }

    /// Returns a one-line description including the context, if any.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.context {
            Some(ctx) => format!("{} {ctx}", self.kind),
            None => self.kind.to_string(),
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A template was given the wrong number of entities.
    #[error("template arity mismatch: expected {expected} subject(s), got {actual}")]
    TemplateArity {
        /// Number of positional slots in the template.
        expected: usize,
        /// Number of entities supplied.
        actual: usize,
    },

    /// Not enough subjects to generate a title.
    #[error("insufficient subjects: need at least {required}, have {available}")]
    InsufficientSubjects {
        /// Minimum number of subjects required.
        required: usize,
        /// Number of subjects supplied.
        available: usize,
    },

    /// A template string could not be parsed.
    #[error("template syntax error at offset {offset}: {message} in {template:?}")]
    TemplateSyntax {
        /// The offending template text.
        template: String,
        /// Byte offset of the problem within the template.
        offset: usize,
        /// Description of the problem.
        message: String,
    },

    /// The title library has no templates for the requested arity.
    #[error("no titles available for {arity} subject(s)")]
    EmptyTitleGroup {
        /// The requested arity.
        arity: usize,
    },

    /// Generation policy probabilities are out of range.
    #[error("invalid generation policy: {0}")]
    InvalidPolicy(String),

    /// A data file could not be read or parsed.
    #[error("data source error in {path}: {message}")]
    DataSource {
        /// Path of the file being read.
        path: String,
        /// Description of the problem.
        message: String,
    },

    /// A command-line argument or environment setting was not understood.
    #[error("usage error: {0}")]
    Usage(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or template group.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
    /// Chain of operations that led to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
