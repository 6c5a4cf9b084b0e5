use crate::model::{NodeId, NodeRef, ResourceTree};
use crate::policy::{ConfigError, RuleOptions};
use crate::report::{EnforcementReport, SeverityCounts};
use crate::rules::{Rule, default_rules};
use encguard_types::{Diagnostic, Severity, Verdict};

/// Applies one rule to the subtree rooted at `root`.
///
/// Depth-first pre-order; the root and every descendant are visited exactly
/// once. A violation never aborts the walk — sibling and subsequent nodes
/// are always evaluated. There is no deduplication state: applying the same
/// rule twice to an unmodified tree pushes two diagnostics per violating
/// node.
pub fn apply(rule: &dyn Rule, tree: &ResourceTree, root: NodeId, out: &mut Vec<Diagnostic>) {
    visit(rule, tree.node(root), out);
}

fn visit(rule: &dyn Rule, node: NodeRef<'_>, out: &mut Vec<Diagnostic>) {
    evaluate_node(rule, node, out);
    for child in node.children() {
        visit(rule, child, out);
    }
}

fn evaluate_node(rule: &dyn Rule, node: NodeRef<'_>, out: &mut Vec<Diagnostic>) {
    if !rule.matches(node) {
        return;
    }
    // Inherited-state suppression precedes the exclusion lookup: a
    // suppressed node is skipped whether or not it is excluded.
    if rule.suppressed(node) {
        return;
    }
    if rule.exclusions().is_excluded(node) {
        return;
    }
    if let Some(diagnostic) = rule.check(node) {
        out.push(diagnostic);
    }
}

/// Convenience entry point: constructs the full default rule set with the
/// shared exclusion list from `options`, applies each rule against `root`
/// in order, and assembles the report.
pub fn enforce(
    tree: &ResourceTree,
    root: NodeId,
    options: &RuleOptions,
) -> Result<EnforcementReport, ConfigError> {
    let rules = default_rules(options)?;

    let mut diagnostics = Vec::new();
    for rule in &rules {
        apply(rule.as_ref(), tree, root, &mut diagnostics);
    }

    let verdict = compute_verdict(&diagnostics);
    let counts = SeverityCounts::from_diagnostics(&diagnostics);
    Ok(EnforcementReport {
        verdict,
        diagnostics,
        counts,
    })
}

fn compute_verdict(diagnostics: &[Diagnostic]) -> Verdict {
    if diagnostics.iter().any(|d| d.severity == Severity::Error) {
        Verdict::Fail
    } else {
        Verdict::Pass
    }
}
