use super::persona;
use crate::case::InvestigationCase;
use crate::util::truncate;

pub const TIMELINE_QUESTION: &str =
    "Analyze the timeline for any inconsistencies, gaps, or suspicious patterns.";

/// Number of suspects that get a quick-prompt button
const QUICK_SUSPECTS: usize = 2;

/// Flatten a case into the plain-text context block sent with every question.
pub fn case_context(case: &InvestigationCase) -> String {
    let suspects = case
        .suspects
        .iter()
        .map(|s| {
            format!(
                "{} ({}): {}. Alibi: {}. Motive: {}",
                s.name, s.role, s.description, s.alibi, s.motive
            )
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let clues = case
        .clues
        .iter()
        .map(|c| {
            format!(
                "{}: {} (Source: {}, Confidence: {})",
                c.title, c.description, c.source, c.confidence
            )
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let timeline = case
        .timeline
        .iter()
        .map(|t| {
            if t.is_gap {
                format!("{} - {} [GAP]", t.time, t.description)
            } else {
                format!("{} - {}", t.time, t.description)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let statements = case
        .statements
        .iter()
        .map(|s| format!("{} ({}): \"{}\"", s.speaker_name, s.timestamp, s.content))
        .collect::<Vec<_>>()
        .join(" | ");

    let theories = case
        .theories
        .iter()
        .map(|t| format!("{}: {}", t.title, t.content))
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        "CURRENT CASE DATA:\n\
         Title: {}\n\
         Description: {}\n\
         Suspects: {}\n\
         Clues: {}\n\
         Timeline: {}\n\
         Statements: {}\n\
         Theories: {}\n",
        case.title, case.description, suspects, clues, timeline, statements, theories
    )
}

/// Canned questions behind the assistant's shortcut buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickPrompt {
    Timeline,
    Suspect(String),
    Theory(String),
}

impl QuickPrompt {
    /// The question to ask, or the persona's reply when the referenced
    /// suspect/theory isn't in the case.
    pub fn question(&self, case: &InvestigationCase) -> Result<String, &'static str> {
        match self {
            QuickPrompt::Timeline => Ok(TIMELINE_QUESTION.to_string()),
            QuickPrompt::Suspect(id) => case
                .suspect(id)
                .map(|s| {
                    format!(
                        "Analyze suspect {}. Examine their alibi, motive, and any statements they've made.",
                        s.name
                    )
                })
                .ok_or(persona::UNKNOWN_SUSPECT),
            QuickPrompt::Theory(id) => case
                .theory(id)
                .map(|t| {
                    format!(
                        "Challenge this theory: \"{} - {}\". Find any flaws or contradictions.",
                        t.title, t.content
                    )
                })
                .ok_or(persona::UNKNOWN_THEORY),
        }
    }

    pub fn label(&self, case: &InvestigationCase) -> String {
        match self {
            QuickPrompt::Timeline => "Analyze Timeline".to_string(),
            QuickPrompt::Suspect(id) => match case.suspect(id) {
                Some(s) => format!("Analyze {}", s.first_name()),
                None => "Analyze ?".to_string(),
            },
            QuickPrompt::Theory(id) => match case.theory(id) {
                Some(t) => format!("Challenge {}", truncate(&t.title, 24)),
                None => "Challenge ?".to_string(),
            },
        }
    }
}

/// Shortcut row: the timeline, the first two suspects, then each theory.
pub fn quick_prompts(case: &InvestigationCase) -> Vec<QuickPrompt> {
    let mut prompts = vec![QuickPrompt::Timeline];
    prompts.extend(
        case.suspects
            .iter()
            .take(QUICK_SUSPECTS)
            .map(|s| QuickPrompt::Suspect(s.id.clone())),
    );
    prompts.extend(
        case.theories
            .iter()
            .map(|t| QuickPrompt::Theory(t.id.clone())),
    );
    prompts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::mock::mock_cases;

    #[test]
    fn test_case_context_layout() {
        let case = mock_cases().remove(0);
        let context = case_context(&case);
        let lines: Vec<&str> = context.lines().collect();

        assert_eq!(lines[0], "CURRENT CASE DATA:");
        assert_eq!(lines[1], "Title: Death at Harrowgate Manor");
        assert!(lines[2].starts_with("Description: Reginald Harrowgate"));
        assert!(lines[3].starts_with("Suspects: Beatrice Harrowgate (Widow): "));
        assert!(lines[3].contains(". Alibi: Claims she retired"));
        assert!(lines[3].contains(". Motive: Stood to lose"));
        assert_eq!(lines[3].matches(" | ").count(), case.suspects.len() - 1);
        assert!(lines[4].contains("(Source: Search of the front hall, Confidence: High)"));
        assert!(lines[6].starts_with("Statements: Beatrice Harrowgate (08:30): \""));
        assert!(lines[7].starts_with("Theories: The partner's cigar: "));
    }

    #[test]
    fn test_case_context_marks_only_gaps() {
        let case = mock_cases().remove(0);
        let context = case_context(&case);
        let timeline = context
            .lines()
            .find(|l| l.starts_with("Timeline: "))
            .unwrap();

        assert!(timeline.contains("23:10 - 23:50 - Nobody can account for the study corridor [GAP]"));
        assert!(timeline.contains("19:30 - Dinner; Reginald announces the will revision | "));
        assert_eq!(timeline.matches("[GAP]").count(), case.gap_count());
    }

    #[test]
    fn test_case_context_empty_sections() {
        let mut case = mock_cases().remove(1);
        case.theories.clear();
        let context = case_context(&case);
        assert!(context.lines().any(|l| l == "Theories: "));
    }

    #[test]
    fn test_quick_prompt_questions() {
        let case = mock_cases().remove(0);

        assert_eq!(
            QuickPrompt::Timeline.question(&case).unwrap(),
            TIMELINE_QUESTION
        );
        assert_eq!(
            QuickPrompt::Suspect("s-002".into()).question(&case).unwrap(),
            "Analyze suspect Julian Crane. Examine their alibi, motive, and any statements they've made."
        );
        assert_eq!(
            QuickPrompt::Theory("th-001".into()).question(&case).unwrap(),
            "Challenge this theory: \"The partner's cigar - Crane used his cigar break to reach the study with the spare key.\". Find any flaws or contradictions."
        );
    }

    #[test]
    fn test_quick_prompt_unknown_ids() {
        let case = mock_cases().remove(0);
        assert_eq!(
            QuickPrompt::Suspect("nope".into()).question(&case),
            Err(persona::UNKNOWN_SUSPECT)
        );
        assert_eq!(
            QuickPrompt::Theory("nope".into()).question(&case),
            Err(persona::UNKNOWN_THEORY)
        );
    }

    #[test]
    fn test_quick_prompt_row() {
        let case = mock_cases().remove(0);
        let prompts = quick_prompts(&case);

        assert_eq!(prompts[0], QuickPrompt::Timeline);
        assert_eq!(prompts[1], QuickPrompt::Suspect("s-001".into()));
        assert_eq!(prompts[2], QuickPrompt::Suspect("s-002".into()));
        assert_eq!(prompts.len(), 3 + case.theories.len());

        let labels: Vec<String> = prompts.iter().map(|p| p.label(&case)).collect();
        assert_eq!(labels[0], "Analyze Timeline");
        assert_eq!(labels[1], "Analyze Beatrice");
        assert_eq!(labels[2], "Analyze Julian");
    }
}
