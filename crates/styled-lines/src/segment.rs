#![forbid(unsafe_code)]

//! Folding the packer across an ordered run of styled segments.
//!
//! Consecutive segments are one logical flow that happens to change font
//! mid-stream. Each segment packs against the width its predecessor left
//! on the line in progress, so wrapping decisions stay joint while every
//! segment keeps ownership of its own text in the returned vector.

use rustc_hash::FxHashSet;

use crate::diagnostics::{Diagnostic, DiagnosticSink, check_font};
use crate::metrics::FontMetrics;
use crate::pack::pack;
use crate::token::tokenize;

/// A span of text sharing one font style, part of an ordered flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Raw content to wrap (already stripped of raw line breaks).
    pub text: String,
    /// Opaque style descriptor, passed verbatim to the metrics backend.
    pub font: String,
}

impl Segment {
    /// Create a segment.
    pub fn new(text: impl Into<String>, font: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
        }
    }
}

/// Wrap `segments` as one continuous flow, returning one wrapped string
/// per segment, in input order.
///
/// Segment *i* begins on the line segment *i − 1* left open; a segment
/// whose content cannot share that line starts its result with a leading
/// `'\n'`. Concatenating the returned strings yields the fully wrapped
/// flow.
///
/// When the metrics backend reports no usable surface, no packing is
/// attempted: every segment's text comes back unmodified and a
/// [`Diagnostic::MetricsUnavailable`] is reported. Each distinct font
/// descriptor is also screened against the unstable-family denylist
/// before measurement begins.
pub fn wrap_segments(
    segments: &[Segment],
    width: f64,
    metrics: &mut dyn FontMetrics,
    sink: &mut dyn DiagnosticSink,
) -> Vec<String> {
    if !metrics.is_available() {
        sink.report(Diagnostic::MetricsUnavailable);
        return segments.iter().map(|segment| segment.text.clone()).collect();
    }

    let mut seen = FxHashSet::default();
    for segment in segments {
        if seen.insert(segment.font.as_str()) {
            check_font(&segment.font, sink);
        }
    }

    let mut carried = 0.0;
    let mut wrapped = Vec::with_capacity(segments.len());
    for segment in segments {
        let packed = pack(
            tokenize(&segment.text),
            &segment.font,
            width,
            carried,
            metrics,
        );
        carried = packed.ending_width;
        wrapped.push(packed.text());
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectSink;
    use crate::metrics::FixedAdvance;

    fn segments(texts: &[&str]) -> Vec<Segment> {
        texts
            .iter()
            .map(|text| Segment::new(*text, "mono"))
            .collect()
    }

    #[test]
    fn threads_width_across_segments() {
        let mut metrics = FixedAdvance::new(10.0);
        let mut sink = CollectSink::default();
        let wrapped = wrap_segments(&segments(&["Hello ", "World"]), 200.0, &mut metrics, &mut sink);

        assert_eq!(wrapped, vec!["Hello ", "World"]);
        assert!(sink.diagnostics.is_empty());
    }

    #[test]
    fn segment_starting_past_budget_opens_with_break() {
        let mut metrics = FixedAdvance::new(10.0);
        let mut sink = CollectSink::default();
        let wrapped = wrap_segments(&segments(&["how long", "when at"]), 100.0, &mut metrics, &mut sink);

        assert_eq!(wrapped, vec!["how long", "\nwhen at"]);
    }

    #[test]
    fn concatenation_matches_single_segment_wrap() {
        let mut metrics = FixedAdvance::new(10.0);
        let mut sink = CollectSink::default();

        let joint = wrap_segments(&segments(&["Hello ", "World"]), 200.0, &mut metrics, &mut sink);
        let single = wrap_segments(&segments(&["Hello World"]), 200.0, &mut metrics, &mut sink);

        assert_eq!(joint.concat(), single.concat());
    }

    #[test]
    fn empty_segment_keeps_flow_continuous() {
        let mut metrics = FixedAdvance::new(10.0);
        let mut sink = CollectSink::default();
        let wrapped = wrap_segments(&segments(&["hello ", "", "world"]), 200.0, &mut metrics, &mut sink);

        assert_eq!(wrapped, vec!["hello ", "", "world"]);
    }

    struct Offline;

    impl FontMetrics for Offline {
        fn measure(&mut self, _text: &str, _font: &str) -> f64 {
            0.0
        }

        fn is_available(&self) -> bool {
            false
        }
    }

    #[test]
    fn unavailable_metrics_returns_text_unmodified() {
        let mut sink = CollectSink::default();
        let input = segments(&["no wrapping here", "or here"]);
        let wrapped = wrap_segments(&input, 10.0, &mut Offline, &mut sink);

        assert_eq!(wrapped, vec!["no wrapping here", "or here"]);
        assert_eq!(sink.diagnostics, vec![Diagnostic::MetricsUnavailable]);
    }

    #[test]
    fn distinct_fonts_are_screened_once() {
        let mut metrics = FixedAdvance::new(10.0);
        let mut sink = CollectSink::default();
        let input = vec![
            Segment::new("a", "BlinkMacSystemFont"),
            Segment::new("b", "BlinkMacSystemFont"),
            Segment::new("c", "serif"),
        ];
        wrap_segments(&input, 100.0, &mut metrics, &mut sink);

        assert_eq!(sink.diagnostics.len(), 1);
        assert!(matches!(
            sink.diagnostics[0],
            Diagnostic::UnstableFontFamily { .. }
        ));
    }

    #[test]
    fn screening_does_not_change_breaks() {
        let mut metrics = FixedAdvance::new(10.0);
        let mut sink = CollectSink::default();
        let clean = wrap_segments(
            &[Segment::new("hello world", "serif")],
            60.0,
            &mut metrics,
            &mut sink,
        );
        let flagged = wrap_segments(
            &[Segment::new("hello world", "BlinkMacSystemFont")],
            60.0,
            &mut metrics,
            &mut sink,
        );

        assert_eq!(clean, flagged);
    }
}
