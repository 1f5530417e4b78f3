#![forbid(unsafe_code)]

//! Side-channel diagnostics.
//!
//! Wrapping never fails and never changes its output shape to signal a
//! problem. The two degradations it can hit — no usable measurement
//! surface, and a font descriptor naming a family known to destabilize
//! measurement hosts — are reported through a [`DiagnosticSink`] instead.
//! The default sink forwards to `tracing::warn!`; [`CollectSink`] retains
//! diagnostics for tests and for hosts that surface them in their own UI.
//!
//! Keeping the sink explicit keeps the packing pipeline pure: no test ever
//! has to capture global output to observe a warning.

use std::fmt;

/// Font-family tokens known to destabilize some measurement hosts.
pub const UNSTABLE_FONT_FAMILIES: &[&str] = &["BlinkMacSystemFont"];

/// A non-fatal condition observed during a wrap call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No usable measurement surface existed; the text was returned as is.
    MetricsUnavailable,
    /// A font descriptor names a family from [`UNSTABLE_FONT_FAMILIES`].
    /// Wrapping proceeds normally.
    UnstableFontFamily {
        /// The full descriptor as supplied by the caller.
        font: String,
        /// The denylisted family token that matched.
        family: &'static str,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MetricsUnavailable => {
                write!(f, "no measurement context was available, so the text was left as is")
            }
            Diagnostic::UnstableFontFamily { font, family } => {
                write!(
                    f,
                    "using {family} can cause Chrome to crash in certain environments (font: {font:?})"
                )
            }
        }
    }
}

/// Receiver for diagnostics emitted during a wrap call.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Default sink: forwards each diagnostic to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
    }
}

/// Sink that retains every diagnostic it receives.
#[derive(Debug, Default)]
pub struct CollectSink {
    /// Diagnostics in report order.
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink for CollectSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Report an [`UnstableFontFamily`](Diagnostic::UnstableFontFamily) for
/// each denylisted family the descriptor mentions. Purely a notification;
/// the computed line breaks are unaffected.
pub fn check_font(font: &str, sink: &mut dyn DiagnosticSink) {
    for family in UNSTABLE_FONT_FAMILIES.iter().copied() {
        if font.contains(family) {
            sink.report(Diagnostic::UnstableFontFamily {
                font: font.to_string(),
                family,
            });
        }
    }
}
