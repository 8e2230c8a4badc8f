//! In-memory casebook
//!
//! Holds the session's cases and which one (if any) is open in the workspace.
//! Every edit goes through [`CaseBook::update_case`], which replaces the case
//! in the list and makes it the active case.

use super::{mock, CaseStatus, InvestigationCase, Theory};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaseError {
    #[error("No case with id '{0}'")]
    NotFound(String),
    #[error("No case is open")]
    NoActiveCase,
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("Timeline entry {0} does not exist")]
    NoSuchEntry(usize),
}

/// Number of cases per status, for the dashboard header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub open: usize,
    pub active: usize,
    pub cold: usize,
    pub solved: usize,
}

#[derive(Debug, Clone)]
pub struct CaseBook {
    cases: Vec<InvestigationCase>,
    active_id: Option<String>,
    /// Case duplicated by `new_case`
    template: Option<InvestigationCase>,
}

impl Default for CaseBook {
    fn default() -> Self {
        Self::with_mock_cases()
    }
}

impl CaseBook {
    pub fn new(cases: Vec<InvestigationCase>) -> Self {
        let template = cases.first().cloned();
        Self {
            cases,
            active_id: None,
            template,
        }
    }

    pub fn with_mock_cases() -> Self {
        Self::new(mock::mock_cases())
    }

    pub fn cases(&self) -> &[InvestigationCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&InvestigationCase> {
        self.cases.iter().find(|c| c.id == id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active(&self) -> Option<&InvestigationCase> {
        let id = self.active_id.as_deref()?;
        self.get(id)
    }

    pub fn active_mut(&mut self) -> Option<&mut InvestigationCase> {
        let id = self.active_id.clone()?;
        self.cases.iter_mut().find(|c| c.id == id)
    }

    /// Open a case in the workspace
    pub fn select(&mut self, id: &str) -> Result<&InvestigationCase, CaseError> {
        let index = self.position(id)?;
        self.active_id = Some(id.to_string());
        Ok(&self.cases[index])
    }

    /// Close the workspace and return to the dashboard
    pub fn back(&mut self) {
        self.active_id = None;
    }

    /// Replace the stored case with the same id and make it active
    pub fn update_case(&mut self, updated: InvestigationCase) -> Result<(), CaseError> {
        let index = self.position(&updated.id)?;
        self.active_id = Some(updated.id.clone());
        self.cases[index] = updated;
        Ok(())
    }

    /// Start a new case from the template, append it and open it.
    ///
    /// Returns the new case id.
    pub fn new_case(&mut self) -> Result<String, CaseError> {
        let template = self
            .template
            .clone()
            .ok_or_else(|| CaseError::NotFound("template".to_string()))?;

        let mut stamp = chrono::Utc::now().timestamp_millis();
        while self.get(&format!("case-{}", stamp)).is_some() {
            stamp += 1;
        }
        let id = format!("case-{}", stamp);

        let case = InvestigationCase {
            id: id.clone(),
            title: format!("{} (Copy)", template.title),
            status: CaseStatus::Open,
            ..template
        };
        tracing::info!(case_id = %id, "opened new case from template");
        self.cases.push(case);
        self.active_id = Some(id.clone());
        Ok(id)
    }

    pub fn add_theory(&mut self, title: &str, content: &str) -> Result<String, CaseError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CaseError::EmptyField("Theory title"));
        }
        let mut case = self.active().cloned().ok_or(CaseError::NoActiveCase)?;
        let id = format!("theory-{}", uuid::Uuid::new_v4().simple());
        case.theories.push(Theory {
            id: id.clone(),
            title: title.to_string(),
            content: content.trim().to_string(),
        });
        self.update_case(case)?;
        Ok(id)
    }

    pub fn cycle_status(&mut self) -> Result<CaseStatus, CaseError> {
        let mut case = self.active().cloned().ok_or(CaseError::NoActiveCase)?;
        case.status = case.status.next();
        let status = case.status;
        self.update_case(case)?;
        Ok(status)
    }

    /// Flip the gap flag on a timeline entry; returns the new flag
    pub fn toggle_gap(&mut self, index: usize) -> Result<bool, CaseError> {
        let mut case = self.active().cloned().ok_or(CaseError::NoActiveCase)?;
        let entry = case
            .timeline
            .get_mut(index)
            .ok_or(CaseError::NoSuchEntry(index))?;
        entry.is_gap = !entry.is_gap;
        let is_gap = entry.is_gap;
        self.update_case(case)?;
        Ok(is_gap)
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for case in &self.cases {
            match case.status {
                CaseStatus::Open => counts.open += 1,
                CaseStatus::Active => counts.active += 1,
                CaseStatus::Cold => counts.cold += 1,
                CaseStatus::Solved => counts.solved += 1,
            }
        }
        counts
    }

    fn position(&self, id: &str) -> Result<usize, CaseError> {
        self.cases
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CaseError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_back() {
        let mut book = CaseBook::with_mock_cases();
        assert!(book.active().is_none());

        let title = book.select("case-002").unwrap().title.clone();
        assert_eq!(title, "The Midnight Express");
        assert_eq!(book.active_id(), Some("case-002"));

        book.back();
        assert!(book.active().is_none());
    }

    #[test]
    fn test_select_unknown_case() {
        let mut book = CaseBook::with_mock_cases();
        assert_eq!(
            book.select("case-999").unwrap_err(),
            CaseError::NotFound("case-999".to_string())
        );
        assert!(book.active().is_none());
    }

    #[test]
    fn test_update_case_replaces_and_activates() {
        let mut book = CaseBook::with_mock_cases();
        let mut case = book.get("case-002").unwrap().clone();
        case.description = "Rewritten".to_string();

        book.update_case(case).unwrap();

        assert_eq!(book.active_id(), Some("case-002"));
        assert_eq!(book.get("case-002").unwrap().description, "Rewritten");
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_update_unknown_case_is_rejected() {
        let mut book = CaseBook::with_mock_cases();
        let mut case = book.cases()[0].clone();
        case.id = "ghost".to_string();
        assert!(matches!(book.update_case(case), Err(CaseError::NotFound(_))));
        assert!(book.active().is_none());
    }

    #[test]
    fn test_new_case_copies_template() {
        let mut book = CaseBook::with_mock_cases();
        let template = book.cases()[0].clone();

        let id = book.new_case().unwrap();
        let created = book.active().unwrap();

        assert_eq!(created.id, id);
        assert!(id.starts_with("case-"));
        assert_eq!(created.title, format!("{} (Copy)", template.title));
        assert_eq!(created.status, CaseStatus::Open);
        assert_eq!(created.suspects, template.suspects);
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn test_new_case_ids_do_not_collide() {
        let mut book = CaseBook::with_mock_cases();
        let first = book.new_case().unwrap();
        let second = book.new_case().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_new_case_templates_from_first_case_even_after_edits() {
        let mut book = CaseBook::with_mock_cases();
        book.select("case-001").unwrap();
        book.add_theory("Edited", "").unwrap();
        book.new_case().unwrap();
        let created = book.active().unwrap();
        assert!(created.theories.iter().all(|t| t.title != "Edited"));
    }

    #[test]
    fn test_empty_book_cannot_create() {
        let mut book = CaseBook::new(Vec::new());
        assert!(book.new_case().is_err());
    }

    #[test]
    fn test_add_theory() {
        let mut book = CaseBook::with_mock_cases();
        book.select("case-002").unwrap();

        let id = book.add_theory("  The porter  ", " He lied about the lights ").unwrap();

        let case = book.active().unwrap();
        let theory = case.theory(&id).unwrap();
        assert_eq!(theory.title, "The porter");
        assert_eq!(theory.content, "He lied about the lights");
    }

    #[test]
    fn test_add_theory_requires_title_and_case() {
        let mut book = CaseBook::with_mock_cases();
        assert_eq!(book.add_theory("x", "y").unwrap_err(), CaseError::NoActiveCase);

        book.select("case-001").unwrap();
        assert_eq!(
            book.add_theory("   ", "y").unwrap_err(),
            CaseError::EmptyField("Theory title")
        );
    }

    #[test]
    fn test_cycle_status_and_counts() {
        let mut book = CaseBook::with_mock_cases();
        assert_eq!(
            book.status_counts(),
            StatusCounts {
                open: 1,
                active: 1,
                cold: 0,
                solved: 0
            }
        );

        book.select("case-001").unwrap();
        assert_eq!(book.cycle_status().unwrap(), CaseStatus::Cold);
        assert_eq!(book.status_counts().cold, 1);
    }

    #[test]
    fn test_toggle_gap() {
        let mut book = CaseBook::with_mock_cases();
        book.select("case-001").unwrap();
        let before = book.active().unwrap().gap_count();

        assert!(book.toggle_gap(0).unwrap());
        assert_eq!(book.active().unwrap().gap_count(), before + 1);
        assert!(!book.toggle_gap(0).unwrap());
        assert_eq!(book.toggle_gap(99).unwrap_err(), CaseError::NoSuchEntry(99));
    }
}
