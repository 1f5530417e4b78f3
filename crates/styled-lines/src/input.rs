#![forbid(unsafe_code)]

//! Input shapes and normalization.
//!
//! Callers hand in a single string, a list of strings, or a list of
//! text-plus-font records. [`WrapInput`] is the tagged union covering the
//! three; everything normalizes to one canonical segment list before any
//! wrapping logic runs, and [`Wrapped`] mirrors the caller's arity on the
//! way back out (scalar in, scalar out; array in, array out).
//!
//! Raw line breaks in input text are not forced breaks — the wrapper owns
//! all break placement — so each one becomes a single space during
//! normalization.

use crate::segment::Segment;

/// One caller-supplied span with an optional font override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    /// The text to wrap.
    pub text: String,
    /// Style descriptor; the call's default font applies when absent.
    pub font: Option<String>,
}

impl StyledText {
    /// A span using the call's default font.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
        }
    }

    /// Override the font for this span.
    #[must_use]
    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }
}

/// The three accepted input shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapInput {
    /// A single string.
    Text(String),
    /// An ordered list of strings, all in the default font.
    Many(Vec<String>),
    /// An ordered list of spans with per-span font overrides.
    Styled(Vec<StyledText>),
}

impl From<&str> for WrapInput {
    fn from(text: &str) -> Self {
        WrapInput::Text(text.to_string())
    }
}

impl From<String> for WrapInput {
    fn from(text: String) -> Self {
        WrapInput::Text(text)
    }
}

impl From<Vec<String>> for WrapInput {
    fn from(texts: Vec<String>) -> Self {
        WrapInput::Many(texts)
    }
}

impl From<Vec<&str>> for WrapInput {
    fn from(texts: Vec<&str>) -> Self {
        WrapInput::Many(texts.into_iter().map(String::from).collect())
    }
}

impl From<Vec<StyledText>> for WrapInput {
    fn from(spans: Vec<StyledText>) -> Self {
        WrapInput::Styled(spans)
    }
}

/// A wrap result, shaped like the input that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wrapped {
    /// Result of a single-string input.
    Text(String),
    /// Result of an array input: one wrapped string per input element.
    Many(Vec<String>),
}

impl Wrapped {
    /// The scalar result, if the input was a single string.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Wrapped::Text(text) => Some(text),
            Wrapped::Many(_) => None,
        }
    }

    /// The per-element results, if the input was an array.
    #[must_use]
    pub fn into_many(self) -> Option<Vec<String>> {
        match self {
            Wrapped::Text(_) => None,
            Wrapped::Many(texts) => Some(texts),
        }
    }

    /// The full wrapped flow regardless of input arity.
    #[must_use]
    pub fn flow(&self) -> String {
        match self {
            Wrapped::Text(text) => text.clone(),
            Wrapped::Many(texts) => texts.concat(),
        }
    }
}

/// Remembered input arity, used to rebuild the caller's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    Scalar,
    Array,
}

impl Shape {
    pub(crate) fn rebuild(self, mut wrapped: Vec<String>) -> Wrapped {
        match self {
            Shape::Scalar => Wrapped::Text(wrapped.pop().unwrap_or_default()),
            Shape::Array => Wrapped::Many(wrapped),
        }
    }
}

impl WrapInput {
    /// Produce the canonical segment list plus the shape to rebuild.
    pub(crate) fn normalize(self, default_font: &str) -> (Vec<Segment>, Shape) {
        match self {
            WrapInput::Text(text) => (
                vec![Segment::new(strip_breaks(&text), default_font)],
                Shape::Scalar,
            ),
            WrapInput::Many(texts) => (
                texts
                    .into_iter()
                    .map(|text| Segment::new(strip_breaks(&text), default_font))
                    .collect(),
                Shape::Array,
            ),
            WrapInput::Styled(spans) => (
                spans
                    .into_iter()
                    .map(|span| {
                        let font = span
                            .font
                            .unwrap_or_else(|| default_font.to_string());
                        Segment::new(strip_breaks(&span.text), font)
                    })
                    .collect(),
                Shape::Array,
            ),
        }
    }
}

/// Replace each raw line break with a single space.
fn strip_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
