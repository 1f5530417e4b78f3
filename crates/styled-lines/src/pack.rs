#![forbid(unsafe_code)]

//! Greedy packing of tokens into width-bounded lines.
//!
//! This is the heart of the crate. Tokens are taken in order and appended
//! to the line in progress while the measured result stays within the
//! budget. A token that does not fit closes the line: a space run is
//! consumed by the break it induced, a word opens the next line. A word
//! that cannot fit even on an empty line is force-placed unbroken, which
//! bounds every token to exactly one packing decision and guarantees
//! termination.
//!
//! Lines re-measure as whole strings rather than summing token widths —
//! kerning and ligatures make width non-additive in general. An additive
//! backend degrades gracefully to the same result.
//!
//! A segment can start mid-line: `carried` is the measured width the
//! previous segments already placed on the physical line in progress. That
//! base counts against the budget until the first break inside this
//! segment, and the segment's first produced line stays empty when its
//! content cannot share the carried line. Joining the lines then yields a
//! leading `'\n'`, which keeps per-segment attribution while the flow
//! wraps as one.

use crate::metrics::FontMetrics;
use crate::token::is_space_run;

/// One segment's packing result.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedSegment {
    /// The produced lines, in order. Never empty.
    pub lines: Vec<String>,
    /// Measured width of the final, still-open line, including any carried
    /// base when no break occurred. Threads into the next segment.
    pub ending_width: f64,
}

impl PackedSegment {
    /// The segment's textual result: its lines joined with `'\n'`.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Pack `tokens` into lines at most `width` wide under `font`, starting
/// from a line already `carried` units wide.
///
/// Trailing spaces are trimmed only when a break closes a line; the final
/// line closes untrimmed so trailing whitespace of the original text
/// survives, and a closed line holding nothing but the flow's leading
/// spaces also keeps them. An empty token sequence produces a single
/// empty line and passes `carried` through unchanged.
pub fn pack<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
    font: &str,
    width: f64,
    carried: f64,
    metrics: &mut dyn FontMetrics,
) -> PackedSegment {
    let mut lines = Vec::new();
    let mut current = String::new();
    // Width owed to previous segments on the line in progress. Zeroed at
    // the first break inside this segment.
    let mut base = carried;
    let mut line_width = carried;

    for token in tokens {
        // Append speculatively, then re-measure the whole line.
        let kept = current.len();
        current.push_str(token);
        let candidate = base + metrics.measure(&current, font);

        if candidate <= width {
            line_width = candidate;
            continue;
        }

        if kept == 0 && base == 0.0 {
            // Forced placement: nothing shares this line, and the token
            // alone exceeds the budget. It stays unbroken.
            line_width = candidate;
            continue;
        }

        current.truncate(kept);
        if base == 0.0 && !current.is_empty() && is_space_run(&current) {
            // The line holds nothing but the flow's own leading spaces.
            // That is original whitespace, not spacing made redundant by
            // the break; it closes untrimmed.
            lines.push(std::mem::take(&mut current));
        } else {
            close_line(&mut lines, &mut current);
        }
        base = 0.0;
        if is_space_run(token) {
            // The space run is consumed by the break it induced.
            line_width = 0.0;
        } else {
            line_width = metrics.measure(token, font);
            current.push_str(token);
        }
    }

    lines.push(current);
    PackedSegment {
        lines,
        ending_width: line_width,
    }
}

/// Close the line in progress: trim the spaces made redundant by the
/// break, then move it into `lines`.
fn close_line(lines: &mut Vec<String>, current: &mut String) {
    current.truncate(current.trim_end_matches(' ').len());
    lines.push(std::mem::take(current));
}
