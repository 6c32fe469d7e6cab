use super::assessment::{compute_assessment_score, AssessmentScore};
use super::avatar::{classify_avatar_category, AvatarCategory};
use super::domain::{BeneficiaryRecord, PriorityLevel};
use chrono::NaiveDate;
use serde::Serialize;

/// One beneficiary's place in the aid queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityEntry {
    /// 1-based position after ordering by score.
    pub rank: usize,
    pub id: Option<String>,
    pub name: Option<String>,
    pub score: AssessmentScore,
    pub avatar: AvatarCategory,
    pub recorded_priority: Option<PriorityLevel>,
}

/// Batch of records ordered from highest to lowest need.
#[derive(Debug, Clone, Serialize)]
pub struct PriorityReport {
    pub as_of: NaiveDate,
    pub entries: Vec<PriorityEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrioritySummary {
    pub total: usize,
    pub mean_score: f64,
    pub at_ceiling: usize,
    pub at_floor: usize,
}

impl PriorityReport {
    /// Scores and classifies every record. Equal scores keep their import order.
    pub fn build(records: &[BeneficiaryRecord], as_of: NaiveDate) -> Self {
        let mut entries: Vec<PriorityEntry> = records
            .iter()
            .map(|record| PriorityEntry {
                rank: 0,
                id: record.id.clone(),
                name: record.name.clone(),
                score: compute_assessment_score(record),
                avatar: classify_avatar_category(record),
                recorded_priority: record.priority_level,
            })
            .collect();

        entries.sort_by(|left, right| right.score.cmp(&left.score));
        for (index, entry) in entries.iter_mut().enumerate() {
            entry.rank = index + 1;
        }

        Self { as_of, entries }
    }

    pub fn top(&self, limit: usize) -> &[PriorityEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn summary(&self) -> PrioritySummary {
        let total = self.entries.len();
        let sum: u64 = self
            .entries
            .iter()
            .map(|entry| u64::from(entry.score.value()))
            .sum();
        let mean_score = if total == 0 {
            0.0
        } else {
            sum as f64 / total as f64
        };

        PrioritySummary {
            total,
            mean_score,
            at_ceiling: self
                .entries
                .iter()
                .filter(|entry| entry.score == AssessmentScore::MAX)
                .count(),
            at_floor: self
                .entries
                .iter()
                .filter(|entry| entry.score == AssessmentScore::MIN)
                .count(),
        }
    }
}
