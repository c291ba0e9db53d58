//! Template parsing and substitution.
//!
//! Grammar:
//!
//! ```text
//! template    := (literal | "{{" | "}}" | placeholder)*
//! placeholder := "{" [index] [":" spec] "}"
//! index       := digit+
//! ```
//!
//! Placeholders without an index are numbered automatically from zero.
//! Automatic and manual numbering cannot be mixed in one template.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use brainstorm_foundation::{Error, Result};

/// A placeholder in a template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Positional index of the entity this field binds to.
    pub index: usize,
    /// Format spec text after `:` (empty if absent).
    pub spec: String,
}

/// A piece of a parsed template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Text copied verbatim (escaped braces already collapsed).
    Literal(String),
    /// A placeholder.
    Field(Field),
}

/// A parsed title template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
    arity: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Numbering {
    Unset,
    Auto(usize),
    Manual,
}

impl Template {
    /// Parses a template string.
    ///
    /// # Errors
    ///
    /// Returns a template syntax error for unbalanced braces, non-numeric
    /// field names, mixed numbering, or positional slots that are never
    /// referenced.
    pub fn parse(source: &str) -> Result<Self> {
        let syntax = |offset: usize, message: &str| Error::template_syntax(source, offset, message);

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut numbering = Numbering::Unset;
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek().is_some_and(|&(_, next)| next == '}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(syntax(offset, "single '}' outside a placeholder")),
                '{' => {
                    let mut body = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((inner, '{')) => {
                                return Err(syntax(inner, "nested placeholders are not supported"));
                            }
                            Some((_, ch)) => body.push(ch),
                            None => return Err(syntax(offset, "unclosed placeholder")),
                        }
                    }

                    let (name, spec) = body.split_once(':').unwrap_or((body.as_str(), ""));
                    if name.contains('!') {
                        return Err(syntax(offset, "conversions are not supported"));
                    }

                    let index = if name.is_empty() {
                        match numbering {
                            Numbering::Manual => {
                                return Err(syntax(
                                    offset,
                                    "cannot switch from manual to automatic numbering",
                                ));
                            }
                            Numbering::Unset => 0,
                            Numbering::Auto(next) => next,
                        }
                    } else {
                        if matches!(numbering, Numbering::Auto(_)) {
                            return Err(syntax(
                                offset,
                                "cannot switch from automatic to manual numbering",
                            ));
                        }
                        if !name.bytes().all(|b| b.is_ascii_digit()) {
                            return Err(syntax(offset, "field name must be a positional index"));
                        }
                        name.parse()
                            .map_err(|_| syntax(offset, "positional index is too large"))?
                    };
                    numbering = if name.is_empty() {
                        Numbering::Auto(index + 1)
                    } else {
                        Numbering::Manual
                    };

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(Field {
                        index,
                        spec: spec.to_string(),
                    }));
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let used: BTreeSet<usize> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Field(f) => Some(f.index),
                Segment::Literal(_) => None,
            })
            .collect();
        let arity = match used.last() {
            Some(&last) => last
                .checked_add(1)
                .ok_or_else(|| syntax(0, "positional index is too large"))?,
            None => 0,
        };
        if used.len() != arity {
            let missing = (0..arity).find(|i| !used.contains(i)).unwrap_or(0);
            return Err(syntax(
                0,
                &format!("slot {missing} is never referenced (template uses {arity} slots)"),
            ));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
            arity,
        })
    }

    /// Returns the template text as written.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the number of entities this template takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the parsed segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over the placeholders in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Field(f) => Some(f),
            Segment::Literal(_) => None,
        })
    }

    /// Substitutes every placeholder with the text produced by `resolve`.
    ///
    /// `resolve` is called once per placeholder, in order of appearance.
    pub fn render<'a, F>(&self, mut resolve: F) -> String
    where
        F: FnMut(&Field) -> Cow<'a, str>,
    {
        let mut out = String::with_capacity(self.source.len() + 16);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(&resolve(field)),
            }
        }
        out
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
