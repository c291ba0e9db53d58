//! Binding entities to templates.

use std::borrow::{Borrow, Cow};

use brainstorm_foundation::{Error, GrammaticalEntity, Result};

use crate::align::AlignSpec;
use crate::directive::classify_directive;
use crate::template::Template;

/// Formats title templates with grammatical entities.
///
/// The formatter holds no state; formatting is a pure function of the
/// template and the entities.
#[derive(Clone, Copy, Debug, Default)]
pub struct TitleFormatter;

impl TitleFormatter {
    /// Creates a formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Formats `template` with one entity per positional slot.
    ///
    /// Accepts owned entities or references (`&[GrammaticalEntity]` or
    /// `&[&GrammaticalEntity]`).
    ///
    /// # Errors
    ///
    /// Returns a template arity error if `entities.len()` differs from the
    /// template's arity.
    pub fn format<E>(&self, template: &Template, entities: &[E]) -> Result<String>
    where
        E: Borrow<GrammaticalEntity>,
    {
        if entities.len() != template.arity() {
            return Err(Error::template_arity(template.arity(), entities.len()));
        }
        Ok(template.render(|field| self.format_field(&field.spec, entities[field.index].borrow())))
    }

    /// Parses and formats a template string.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the template does not parse, or an arity
    /// error if the entity count is wrong.
    pub fn format_str<E>(&self, template: &str, entities: &[E]) -> Result<String>
    where
        E: Borrow<GrammaticalEntity>,
    {
        self.format(&Template::parse(template)?, entities)
    }

    /// Formats a single field.
    ///
    /// The directive suffix picks the word. Whatever precedes it is applied
    /// as an alignment spec; if that text is not a valid alignment spec the
    /// word is emitted unpadded.
    #[must_use]
    pub fn format_field<'e>(&self, spec: &str, entity: &'e GrammaticalEntity) -> Cow<'e, str> {
        let (kind, rest) = classify_directive(spec);
        let value = kind.resolve(entity);
        match AlignSpec::parse(rest) {
            Some(align) if !align.is_identity() => Cow::Owned(align.apply(value)),
            _ => Cow::Borrowed(value),
        }
    }
}
