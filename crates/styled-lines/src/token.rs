#![forbid(unsafe_code)]

//! Splitting segment text into space and word runs.
//!
//! A token is a maximal run of either plain spaces or everything else.
//! Concatenating the tokens of a text reproduces it byte for byte; the
//! whole run of consecutive spaces is one token so unbroken spacing
//! survives wrapping exactly. A cluster counts as a space only when it is
//! exactly the plain space character — normalization has already replaced
//! raw line breaks, and any other whitespace, including a space carrying a
//! combining mark, travels inside word tokens where it is measured like
//! any glyph.
//!
//! Iteration walks grapheme clusters, never scalar values, so a token
//! boundary can never split a ZWJ emoji or combining sequence.

use unicode_segmentation::UnicodeSegmentation;

/// Split `text` into an ordered sequence of space/word run tokens.
///
/// The iterator is lazy and allocation-free; each item borrows from
/// `text`. Empty input yields no tokens, and no token is ever empty.
///
/// # Example
/// ```
/// use styled_lines::tokenize;
///
/// let tokens: Vec<&str> = tokenize("to  you").collect();
/// assert_eq!(tokens, vec!["to", "  ", "you"]);
/// ```
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, start: 0 }
}

/// Lazy iterator over the space/word run tokens of a text.
///
/// Produced by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = &self.text[self.start..];
        let mut graphemes = rest.grapheme_indices(true);
        let (_, first) = graphemes.next()?;
        let class = is_space_run(first);

        let mut end = rest.len();
        for (offset, grapheme) in graphemes {
            if is_space_run(grapheme) != class {
                end = offset;
                break;
            }
        }

        self.start += end;
        Some(&rest[..end])
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Whether every character of `text` is a plain space.
///
/// A space cluster carrying a combining mark is not a space run: break
/// handling may discard a space run outright, and anything beyond plain
/// spaces must survive wrapping.
pub(crate) fn is_space_run(text: &str) -> bool {
    text.chars().all(|c| c == ' ')
}
