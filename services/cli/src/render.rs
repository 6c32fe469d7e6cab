use serde::Serialize;
use std::fmt::Write;
use trust_aid::beneficiary::{AssessmentOutcome, AvatarCategory, PriorityReport, PrioritySummary};

#[derive(Debug, Serialize)]
pub(crate) struct RankView<'a> {
    #[serde(flatten)]
    pub(crate) report: &'a PriorityReport,
    pub(crate) summary: PrioritySummary,
}

#[derive(Debug, Serialize)]
pub(crate) struct Explanation<'a> {
    pub(crate) id: &'a str,
    pub(crate) name: &'a str,
    pub(crate) avatar: AvatarCategory,
    pub(crate) avatar_path: String,
    #[serde(flatten)]
    pub(crate) outcome: AssessmentOutcome,
}

pub(crate) fn render_rank_report(report: &PriorityReport, summary: &PrioritySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Beneficiary priority queue (as of {})", report.as_of);
    let _ = writeln!(
        out,
        "{} assessed | mean score {:.1} | {} at 100 | {} at 0",
        summary.total, summary.mean_score, summary.at_ceiling, summary.at_floor
    );

    if report.entries.is_empty() {
        let _ = writeln!(out, "\nNo beneficiaries found.");
        return out;
    }

    let _ = writeln!(out);
    for entry in &report.entries {
        let recorded = entry
            .recorded_priority
            .map(|level| format!(" | recorded {}", level.label()))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>3}. {:>3}  {} [{}] {}{}",
            entry.rank,
            entry.score,
            entry.id.as_deref().unwrap_or("-"),
            entry.avatar,
            entry.name.as_deref().unwrap_or("(unnamed)"),
            recorded
        );
    }

    out
}

pub(crate) fn render_explanation(explanation: &Explanation<'_>) -> String {
    let mut out = String::new();
    let outcome = &explanation.outcome;

    let _ = writeln!(out, "{} ({})", explanation.name, explanation.id);
    let _ = writeln!(
        out,
        "Avatar: {} -> {}",
        explanation.avatar, explanation.avatar_path
    );
    let _ = writeln!(out, "\nScore breakdown");
    for component in &outcome.components {
        let _ = writeln!(
            out,
            "- {:+4}  {}: {}",
            component.points,
            component.factor.label(),
            component.notes
        );
    }

    if outcome.raw_total == i32::from(outcome.score.value()) {
        let _ = writeln!(out, "\nScore: {}", outcome.score);
    } else {
        let _ = writeln!(
            out,
            "\nScore: {} (raw total {} clamped to 0-100)",
            outcome.score, outcome.raw_total
        );
    }

    out
}
