//! Seed casebook used when no case file is supplied

use super::{
    CaseStatus, Clue, Confidence, InvestigationCase, Statement, Suspect, Theory, TimelineEvent,
};

fn suspect(id: &str, name: &str, role: &str, description: &str, alibi: &str, motive: &str) -> Suspect {
    Suspect {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        description: description.to_string(),
        alibi: alibi.to_string(),
        motive: motive.to_string(),
    }
}

fn clue(id: &str, title: &str, description: &str, source: &str, confidence: Confidence) -> Clue {
    Clue {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        source: source.to_string(),
        confidence,
    }
}

fn event(id: &str, time: &str, description: &str, is_gap: bool) -> TimelineEvent {
    TimelineEvent {
        id: id.to_string(),
        time: time.to_string(),
        description: description.to_string(),
        is_gap,
    }
}

fn statement(id: &str, speaker: &str, timestamp: &str, content: &str) -> Statement {
    Statement {
        id: id.to_string(),
        speaker_name: speaker.to_string(),
        timestamp: timestamp.to_string(),
        content: content.to_string(),
    }
}

fn theory(id: &str, title: &str, content: &str) -> Theory {
    Theory {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    }
}

pub fn mock_cases() -> Vec<InvestigationCase> {
    vec![harrowgate_manor(), midnight_express()]
}

fn harrowgate_manor() -> InvestigationCase {
    InvestigationCase {
        id: "case-001".to_string(),
        title: "Death at Harrowgate Manor".to_string(),
        description: "Reginald Harrowgate, shipping magnate, found dead in his locked study \
                      the morning after announcing changes to his will."
            .to_string(),
        status: CaseStatus::Active,
        victim: "Reginald Harrowgate".to_string(),
        location: "Harrowgate Manor, Savannah".to_string(),
        suspects: vec![
            suspect(
                "s-001",
                "Beatrice Harrowgate",
                "Widow",
                "Second wife, twenty years younger, runs the household with an iron hand",
                "Claims she retired to the east wing at 10pm with a sleeping draught",
                "Stood to lose her inheritance under the new will",
            ),
            suspect(
                "s-002",
                "Julian Crane",
                "Business partner",
                "Co-founder of Harrowgate Shipping, recently outvoted on the board",
                "Says he was playing billiards with the butler until midnight",
                "Reginald was about to dissolve their partnership",
            ),
            suspect(
                "s-003",
                "Thomas Pell",
                "Butler",
                "Thirty years of service, knows every key in the house",
                "Corroborates Crane's billiards game",
                "Named in the old will, struck from the new one",
            ),
        ],
        clues: vec![
            clue(
                "c-001",
                "Spare study key",
                "A brass key found in the umbrella stand, recently polished",
                "Search of the front hall",
                Confidence::High,
            ),
            clue(
                "c-002",
                "Half-burned letter",
                "Fragment in the study grate reading 'cannot allow you to...'",
                "Study fireplace",
                Confidence::Medium,
            ),
            clue(
                "c-003",
                "Muddy footprints",
                "Size ten prints leading from the garden door to the study window",
                "Groundskeeper",
                Confidence::Low,
            ),
        ],
        timeline: vec![
            event("t-001", "19:30", "Dinner; Reginald announces the will revision", false),
            event("t-002", "22:00", "Beatrice retires to the east wing", false),
            event("t-003", "22:15", "Crane and Pell begin billiards", false),
            event("t-004", "23:10 - 23:50", "Nobody can account for the study corridor", true),
            event("t-005", "07:00", "Pell discovers the body", false),
        ],
        statements: vec![
            statement(
                "st-001",
                "Beatrice Harrowgate",
                "08:30",
                "I took my drops and slept like the dead. Forgive the expression.",
            ),
            statement(
                "st-002",
                "Julian Crane",
                "09:15",
                "Pell and I played until the clock struck twelve. Ask him.",
            ),
            statement(
                "st-003",
                "Thomas Pell",
                "09:40",
                "Mr. Crane stepped out for a cigar around eleven. Only briefly, sir.",
            ),
        ],
        theories: vec![theory(
            "th-001",
            "The partner's cigar",
            "Crane used his cigar break to reach the study with the spare key.",
        )],
    }
}

fn midnight_express() -> InvestigationCase {
    InvestigationCase {
        id: "case-002".to_string(),
        title: "The Midnight Express".to_string(),
        description: "A jeweller is found strangled in a sleeper compartment between \
                      Memphis and New Orleans; the diamonds he carried are missing."
            .to_string(),
        status: CaseStatus::Open,
        victim: "Amos Feld".to_string(),
        location: "Sleeper car 4, the Midnight Express".to_string(),
        suspects: vec![
            suspect(
                "s-101",
                "Lila Monroe",
                "Lounge singer",
                "Performs nightly in the club car, owes money to the wrong people",
                "On stage until 1am, witnessed by thirty passengers",
                "Debts that a fistful of diamonds would settle",
            ),
            suspect(
                "s-102",
                "Father Aldous Grey",
                "Priest",
                "Travelling alone, asked the porter twice about car 4",
                "Praying in his compartment",
                "None known",
            ),
        ],
        clues: vec![
            clue(
                "c-101",
                "Torn rosary bead",
                "A single jet bead under the victim's berth",
                "Compartment search",
                Confidence::Medium,
            ),
            clue(
                "c-102",
                "Stopped watch",
                "Victim's pocket watch stopped at 12:40",
                "Victim's waistcoat",
                Confidence::Low,
            ),
        ],
        timeline: vec![
            event("t-101", "23:00", "Train departs Memphis", false),
            event("t-102", "00:30 - 01:00", "Corridor lights fail in car 4", true),
            event("t-103", "01:15", "Porter finds the body", false),
        ],
        statements: vec![statement(
            "st-101",
            "Porter",
            "01:30",
            "The father asked after car 4 twice. Said he had a friend aboard.",
        )],
        theories: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_cases_are_complete() {
        let cases = mock_cases();
        assert!(cases.len() >= 2);
        for case in &cases {
            assert!(!case.suspects.is_empty());
            assert!(!case.clues.is_empty());
            assert!(case.gap_count() >= 1, "{} has no timeline gap", case.id);
            assert!(!case.statements.is_empty());
        }
    }

    #[test]
    fn test_mock_case_ids_unique() {
        let cases = mock_cases();
        let mut ids: Vec<_> = cases.iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), cases.len());
    }
}
