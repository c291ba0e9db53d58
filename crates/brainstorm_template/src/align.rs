//! Fill, alignment, width and precision for substituted words.
//!
//! Grammar: `[[fill]align][width][.precision]` where `align` is one of
//! `<` (left, the default), `>` (right) or `^` (center). Width and precision
//! count characters, not bytes. A width above [`MAX_WIDTH`] makes the spec
//! invalid.

/// Widest field a spec may ask for.
pub const MAX_WIDTH: usize = 65_535;

/// Horizontal alignment within a padded field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Pad both sides, extra fill on the right.
    Center,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '>' => Some(Self::Right),
            '^' => Some(Self::Center),
            _ => None,
        }
    }
}

/// A parsed alignment spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignSpec {
    /// Padding character.
    pub fill: char,
    /// Alignment within the field.
    pub align: Align,
    /// Minimum field width in characters.
    pub width: Option<usize>,
    /// Maximum number of characters kept from the value.
    pub precision: Option<usize>,
}

impl Default for AlignSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: Align::Left,
            width: None,
            precision: None,
        }
    }
}

impl AlignSpec {
    /// Parses an alignment spec. Returns `None` if the text is not one.
    #[must_use]
    pub fn parse(spec: &str) -> Option<Self> {
        let mut result = Self::default();
        let chars: Vec<char> = spec.chars().collect();
        let mut pos = 0;

        if let Some(align) = chars.get(1).copied().and_then(Align::from_char) {
            result.fill = chars[0];
            result.align = align;
            pos = 2;
        } else if let Some(align) = chars.first().copied().and_then(Align::from_char) {
            result.align = align;
            pos = 1;
        }

        let (width, next) = parse_number(&chars, pos)?;
        if width.is_some_and(|w| w > MAX_WIDTH) {
            return None;
        }
        result.width = width;
        pos = next;

        if chars.get(pos) == Some(&'.') {
            let (precision, next) = parse_number(&chars, pos + 1)?;
            result.precision = Some(precision?);
            pos = next;
        }

        (pos == chars.len()).then_some(result)
    }

    /// Returns true if applying this spec never changes a value.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.width.is_none() && self.precision.is_none()
    }

    /// Truncates and pads `value` according to this spec.
    #[must_use]
    pub fn apply(&self, value: &str) -> String {
        let kept: String = match self.precision {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        };
        let len = kept.chars().count();
        let padding = self
            .width
            .map_or(0, |w| w.min(MAX_WIDTH).saturating_sub(len));
        if padding == 0 {
            return kept;
        }

        let (left, right) = match self.align {
            Align::Left => (0, padding),
            Align::Right => (padding, 0),
            Align::Center => (padding / 2, padding - padding / 2),
        };
        let mut out = String::with_capacity(kept.len().saturating_add(padding * self.fill.len_utf8()));
        out.extend(std::iter::repeat_n(self.fill, left));
        out.push_str(&kept);
        out.extend(std::iter::repeat_n(self.fill, right));
        out
    }
}

/// Parses an optional run of ASCII digits starting at `pos`.
///
/// Returns `None` on overflow, otherwise the number (if any digits were
/// present) and the position after it.
fn parse_number(chars: &[char], pos: usize) -> Option<(Option<usize>, usize)> {
    let end = chars[pos.min(chars.len())..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(chars.len(), |n| pos + n);
    if end <= pos {
        return Some((None, pos));
    }
    let digits: String = chars[pos..end].iter().collect();
    digits.parse().ok().map(|n| (Some(n), end))
}
