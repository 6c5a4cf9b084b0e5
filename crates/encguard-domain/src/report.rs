use encguard_types::{Diagnostic, Severity, Verdict};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut counts = SeverityCounts::default();
        for d in diagnostics {
            match d.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

/// Outcome of one enforcement pass: the diagnostics in emission order
/// (rule application order, then pre-order traversal position), a verdict,
/// and per-severity counts.
#[derive(Clone, Debug)]
pub struct EnforcementReport {
    pub verdict: Verdict,
    pub diagnostics: Vec<Diagnostic>,
    pub counts: SeverityCounts,
}

impl EnforcementReport {
    /// True iff an error-severity diagnostic with exactly this message is
    /// attached to the node at `path`.
    pub fn has_error(&self, path: &str, message: &str) -> bool {
        self.diagnostics.iter().any(|d| {
            d.severity == Severity::Error && d.path.as_str() == path && d.message == message
        })
    }
}
