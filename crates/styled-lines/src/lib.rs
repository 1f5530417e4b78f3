#![forbid(unsafe_code)]

//! Pixel-width line breaking for styled text.
//!
//! Breaks runs of styled text into lines that fit a fixed pixel width,
//! given a [`FontMetrics`] backend that measures rendered string width
//! under a font style. Breaks are pre-computed for text rendered verbatim
//! later (e.g. inserted as literal newlines into markup), instead of
//! relying on a renderer's own reflow. Only break *placement* is decided
//! here; nothing is rendered.
//!
//! # Pipeline
//!
//! ```text
//! WrapInput (string | strings | styled spans)
//!     │ normalize: canonical segments, raw newlines → spaces
//!     ▼
//! wrap_segments ──▶ per segment: tokenize ──▶ pack
//!     │                  (space/word runs)     (greedy, re-measured lines,
//!     │                                         carried width threaded on)
//!     ▼
//! Wrapped (mirrors the input shape)
//! ```
//!
//! Segments that differ in font but belong to one flowing paragraph wrap
//! jointly: the width a segment leaves on its last line carries into the
//! next segment, and a segment forced onto a fresh line starts its result
//! with a leading `'\n'` so concatenating all results reproduces the flow.
//!
//! # Example
//!
//! ```
//! use styled_lines::{FixedAdvance, Wrapped, break_lines};
//!
//! let mut metrics = FixedAdvance::new(10.0);
//! let wrapped = break_lines("hello world", 60.0, "12px monospace", &mut metrics);
//! assert_eq!(wrapped, Wrapped::Text("hello\nworld".to_string()));
//! ```
//!
//! Mixed fonts wrap as one flow while each span keeps its own result:
//!
//! ```
//! use styled_lines::{FixedAdvance, StyledText, Wrapped, break_lines};
//!
//! let spans = vec![
//!     StyledText::new("Tiny "),
//!     StyledText::new("words").font("72px Impact"),
//! ];
//! let mut metrics = FixedAdvance::new(10.0);
//! let wrapped = break_lines(spans, 200.0, "10px Arial", &mut metrics);
//! assert_eq!(
//!     wrapped,
//!     Wrapped::Many(vec!["Tiny ".to_string(), "words".to_string()])
//! );
//! ```
//!
//! # Degradation
//!
//! A backend with no usable measurement surface
//! ([`FontMetrics::is_available`] returning `false`) never fails the call:
//! the input comes back unmodified and a [`Diagnostic`] is reported — to
//! `tracing::warn!` by [`break_lines`], or to an explicit
//! [`DiagnosticSink`] via [`break_lines_with_sink`].

pub mod diagnostics;
pub mod input;
pub mod metrics;
pub mod pack;
pub mod segment;
pub mod token;

pub use diagnostics::{
    CollectSink, Diagnostic, DiagnosticSink, TracingSink, UNSTABLE_FONT_FAMILIES, check_font,
};
pub use input::{StyledText, WrapInput, Wrapped};
pub use metrics::{FixedAdvance, FontMetrics, MetricsCache, MetricsCacheStats};
pub use pack::{PackedSegment, pack};
pub use segment::{Segment, wrap_segments};
pub use token::{Tokens, tokenize};

/// Break `input` into lines at most `width` units wide.
///
/// The result mirrors the input shape: a single string wraps to a single
/// string with `'\n'` inserted, an array wraps to an array with one result
/// per element. `default_font` applies to every span that carries no font
/// of its own. Diagnostics go to `tracing` at warn level.
///
/// Concurrent calls share no state; each call owns its metrics backend.
pub fn break_lines(
    input: impl Into<WrapInput>,
    width: f64,
    default_font: &str,
    metrics: &mut dyn FontMetrics,
) -> Wrapped {
    break_lines_with_sink(input, width, default_font, metrics, &mut TracingSink)
}

/// [`break_lines`] with an explicit diagnostic sink.
pub fn break_lines_with_sink(
    input: impl Into<WrapInput>,
    width: f64,
    default_font: &str,
    metrics: &mut dyn FontMetrics,
    sink: &mut dyn DiagnosticSink,
) -> Wrapped {
    let (segments, shape) = input.into().normalize(default_font);
    let wrapped = wrap_segments(&segments, width, metrics, sink);
    shape.rebuild(wrapped)
}
