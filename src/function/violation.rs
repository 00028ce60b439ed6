// violation.rs
use super::report::{ViolationInstance, ViolationType};
use serde::Serialize;

pub const BEST_PRACTICE_TAG: &str = "best-practice";

/// Drops best-practice violations unless `extraneous` is set.
pub fn filter_violations(violations: Vec<ViolationType>, extraneous: bool) -> Vec<ViolationType> {
    if extraneous {
        return violations;
    }
    violations
        .into_iter()
        .filter(|v| !v.tags.iter().any(|tag| tag == BEST_PRACTICE_TAG))
        .collect()
}

/// Total number of offending nodes across all violation types.
pub fn count_instances(violations: &[ViolationType]) -> usize {
    violations.iter().map(|v| v.nodes.len()).sum()
}

#[derive(Debug, Serialize)]
pub struct InstanceDetail {
    pub html: String,
    pub targets: String,
    pub summary: Option<String>,
}

/// Verbose rendering of one violation type.
#[derive(Debug, Serialize)]
pub struct ViolationDetail {
    pub id: String,
    pub impact: Option<String>,
    pub tags: String,
    pub description: String,
    pub help: String,
    pub instances: Vec<InstanceDetail>,
}

impl From<&ViolationInstance> for InstanceDetail {
    fn from(node: &ViolationInstance) -> Self {
        InstanceDetail {
            html: node.html.clone(),
            targets: node
                .target
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            summary: node.failure_summary.clone(),
        }
    }
}

impl From<&ViolationType> for ViolationDetail {
    fn from(violation: &ViolationType) -> Self {
        ViolationDetail {
            id: violation.id.clone(),
            impact: violation.impact.clone(),
            tags: violation.tags.join(", "),
            description: violation.description.clone(),
            help: format!("{} (Reference: {})", violation.help, violation.help_url),
            instances: violation.nodes.iter().map(InstanceDetail::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::report::Target;

    fn violation(id: &str, tags: &[&str], nodes: usize) -> ViolationType {
        ViolationType {
            id: id.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            nodes: vec![ViolationInstance::default(); nodes],
            ..ViolationType::default()
        }
    }

    #[test]
    fn best_practice_dropped_by_default() {
        let violations = vec![
            violation("region", &["cat.keyboard", "best-practice"], 1),
            violation("image-alt", &["wcag2a"], 2),
        ];
        let kept = filter_violations(violations, false);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "image-alt");
    }

    #[test]
    fn extraneous_keeps_everything() {
        let violations = vec![violation("region", &["best-practice"], 1)];
        let kept = filter_violations(violations, true);
        assert_eq!(kept.len(), 1);
        assert_eq!(count_instances(&kept), 1);
    }

    #[test]
    fn tag_match_is_exact() {
        let violations = vec![violation("x", &["best-practices", "Best-Practice"], 1)];
        assert_eq!(filter_violations(violations, false).len(), 1);
    }

    #[test]
    fn counts_nodes_across_types() {
        let violations = vec![violation("a", &[], 2), violation("b", &[], 3), violation("c", &[], 0)];
        assert_eq!(count_instances(&violations), 5);
        assert_eq!(count_instances(&[]), 0);
    }

    #[test]
    fn detail_joins_tags_targets_and_help() {
        let violation = ViolationType {
            id: "color-contrast".into(),
            impact: Some("serious".into()),
            tags: vec!["cat.color".into(), "wcag2aa".into()],
            description: "Ensures contrast".into(),
            help: "Elements must have sufficient color contrast".into(),
            help_url: "https://dequeuniversity.com/rules/axe/color-contrast".into(),
            nodes: vec![ViolationInstance {
                impact: Some("serious".into()),
                html: "<a href=\"/\">Home</a>".into(),
                target: vec![
                    Target::Selector("nav > a".into()),
                    Target::Nested(vec!["#frame".into(), "p".into()]),
                ],
                failure_summary: Some("Fix the contrast".into()),
            }],
        };

        let detail = ViolationDetail::from(&violation);
        assert_eq!(detail.tags, "cat.color, wcag2aa");
        assert_eq!(
            detail.help,
            "Elements must have sufficient color contrast (Reference: https://dequeuniversity.com/rules/axe/color-contrast)"
        );
        assert_eq!(detail.instances.len(), 1);
        assert_eq!(detail.instances[0].targets, "nav > a, #frame,p");
        assert_eq!(detail.instances[0].summary.as_deref(), Some("Fix the contrast"));
    }
}
