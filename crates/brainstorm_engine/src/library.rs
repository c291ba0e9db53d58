//! Templates grouped by arity.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use brainstorm_foundation::{Error, ErrorContext, ErrorKind, Result};
use brainstorm_lexicon::source::read_title_file;
use brainstorm_lexicon::{DataPaths, TitleLine};
use brainstorm_template::Template;

/// Largest number of subjects a template may take.
pub const MAX_ARITY: usize = 3;

/// The set of title templates, grouped by the number of subjects they take.
///
/// Every template in group `n` has arity exactly `n`. The library is built
/// once and read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct TitleLibrary {
    groups: [Vec<Template>; MAX_ARITY],
}

impl TitleLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a library from template strings, one slice per arity.
    ///
    /// # Errors
    ///
    /// Returns an error if a template does not parse or does not take the
    /// number of subjects its group requires.
    pub fn from_strs(one: &[&str], two: &[&str], three: &[&str]) -> Result<Self> {
        let mut library = Self::new();
        for (arity, group) in [(1, one), (2, two), (3, three)] {
            for (i, text) in group.iter().enumerate() {
                library.insert_line(
                    arity,
                    &TitleLine {
                        line: i + 1,
                        text: (*text).to_string(),
                    },
                    "inline",
                )?;
            }
        }
        Ok(library)
    }

    /// Loads the three title files under `paths`.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is missing, a template does not parse, or
    /// a template's arity does not match its file.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let mut library = Self::new();
        for arity in 1..=MAX_ARITY {
            let path = paths
                .titles(arity)
                .ok_or_else(|| Error::new(ErrorKind::Internal(format!("no title file for arity {arity}"))))?;
            let source = path.display().to_string();
            for line in read_title_file(&path)? {
                library.insert_line(arity, &line, &source)?;
            }
        }
        debug!(
            one = library.group(1).len(),
            two = library.group(2).len(),
            three = library.group(3).len(),
            "title library loaded"
        );
        Ok(library)
    }

    /// Parses `line` and adds it to the group for `arity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template does not parse or its arity differs
    /// from `arity`. The error context names `source` and the line number.
    pub fn insert_line(&mut self, arity: usize, line: &TitleLine, source: &str) -> Result<()> {
        let context = || ErrorContext::new().with_source(source).with_line(line.line);
        let template = Template::parse(&line.text).map_err(|e| e.with_context(context()))?;
        if template.arity() != arity {
            return Err(Error::template_arity(arity, template.arity())
                .with_context(context().with_frame(format!("template {:?}", line.text))));
        }
        self.insert(template)
    }

    /// Adds a parsed template to the group matching its arity.
    ///
    /// # Errors
    ///
    /// Returns an error if the template takes no subjects or more than
    /// [`MAX_ARITY`].
    pub fn insert(&mut self, template: Template) -> Result<()> {
        let arity = template.arity();
        if !(1..=MAX_ARITY).contains(&arity) {
            return Err(Error::template_syntax(
                template.source(),
                0,
                format!("templates must take between 1 and {MAX_ARITY} subjects, this one takes {arity}"),
            ));
        }
        self.groups[arity - 1].push(template);
        Ok(())
    }

    /// Returns the templates taking `arity` subjects.
    ///
    /// Out-of-range arities yield an empty slice.
    #[must_use]
    pub fn group(&self, arity: usize) -> &[Template] {
        match arity {
            1..=MAX_ARITY => &self.groups[arity - 1],
            _ => &[],
        }
    }

    /// Iterates over every template, one-subject templates first.
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.groups.iter().flatten()
    }

    /// Returns the total number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Returns true if the library holds no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    /// Picks a template taking `arity` subjects uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns an error if the group for `arity` is empty.
    pub fn choose<R: Rng + ?Sized>(&self, arity: usize, rng: &mut R) -> Result<&Template> {
        self.group(arity)
            .choose(rng)
            .ok_or_else(|| Error::new(ErrorKind::EmptyTitleGroup { arity }))
    }
}
