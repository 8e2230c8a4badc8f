//! Case records
//!
//! Everything an investigation knows about one murder: who, what, when, who
//! said what, and what the investigator currently believes. Field names are
//! camelCase on the wire so case files exported from the web desk load as-is.

pub mod book;
pub mod import;
pub mod mock;

pub use book::{CaseBook, CaseError, StatusCounts};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a case stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CaseStatus {
    #[default]
    Open,
    Active,
    Cold,
    Solved,
}

impl CaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Open => "Open",
            CaseStatus::Active => "Active",
            CaseStatus::Cold => "Cold",
            CaseStatus::Solved => "Solved",
        }
    }

    /// Next status in the Open → Active → Cold → Solved → Open cycle
    pub fn next(&self) -> Self {
        match self {
            CaseStatus::Open => CaseStatus::Active,
            CaseStatus::Active => CaseStatus::Cold,
            CaseStatus::Cold => CaseStatus::Solved,
            CaseStatus::Solved => CaseStatus::Open,
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How much weight a clue can bear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    #[default]
    Medium,
    High,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suspect {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub alibi: String,
    #[serde(default)]
    pub motive: String,
}

impl Suspect {
    /// "Beatrice Vane" → "Beatrice"
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clue {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub time: String,
    pub description: String,
    /// Unaccounted-for stretch of time
    #[serde(default)]
    pub is_gap: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    pub id: String,
    pub speaker_name: String,
    #[serde(default)]
    pub timestamp: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theory {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestigationCase {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: CaseStatus,
    #[serde(default)]
    pub victim: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub suspects: Vec<Suspect>,
    #[serde(default)]
    pub clues: Vec<Clue>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub statements: Vec<Statement>,
    #[serde(default)]
    pub theories: Vec<Theory>,
}

/// Per-section item counts, shown on the dashboard cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionCounts {
    pub suspects: usize,
    pub clues: usize,
    pub timeline: usize,
    pub statements: usize,
    pub theories: usize,
}

impl InvestigationCase {
    pub fn suspect(&self, id: &str) -> Option<&Suspect> {
        self.suspects.iter().find(|s| s.id == id)
    }

    pub fn theory(&self, id: &str) -> Option<&Theory> {
        self.theories.iter().find(|t| t.id == id)
    }

    pub fn counts(&self) -> SectionCounts {
        SectionCounts {
            suspects: self.suspects.len(),
            clues: self.clues.len(),
            timeline: self.timeline.len(),
            statements: self.statements.len(),
            theories: self.theories.len(),
        }
    }

    pub fn gap_count(&self) -> usize {
        self.timeline.iter().filter(|t| t.is_gap).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_cycle_wraps() {
        let mut status = CaseStatus::Open;
        let mut seen = Vec::new();
        for _ in 0..4 {
            status = status.next();
            seen.push(status);
        }
        assert_eq!(
            seen,
            vec![
                CaseStatus::Active,
                CaseStatus::Cold,
                CaseStatus::Solved,
                CaseStatus::Open
            ]
        );
    }

    #[test]
    fn test_case_deserializes_camel_case_fields() {
        let json = r#"{
            "id": "case-1",
            "title": "The Locked Study",
            "status": "Cold",
            "timeline": [{"id": "t1", "time": "21:00", "description": "Lights out", "isGap": true}],
            "statements": [{"id": "s1", "speakerName": "Maid", "timestamp": "09:00", "content": "I heard nothing."}]
        }"#;
        let case: InvestigationCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.status, CaseStatus::Cold);
        assert!(case.timeline[0].is_gap);
        assert_eq!(case.statements[0].speaker_name, "Maid");
        assert!(case.suspects.is_empty());
        assert_eq!(case.gap_count(), 1);
    }

    #[test]
    fn test_lookup_by_id() {
        let case = mock::mock_cases().remove(0);
        let first = case.suspects[0].clone();
        assert_eq!(case.suspect(&first.id), Some(&first));
        assert!(case.suspect("nobody").is_none());
        assert!(case.theory("nothing").is_none());
    }

    #[test]
    fn test_first_name() {
        let suspect = Suspect {
            id: "s".into(),
            name: "Beatrice Vane".into(),
            role: "Widow".into(),
            description: String::new(),
            alibi: String::new(),
            motive: String::new(),
        };
        assert_eq!(suspect.first_name(), "Beatrice");
    }
}
