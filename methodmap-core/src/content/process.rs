//! Process, step, and card types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::content::icon::IconName;

/// Which of the two processes. Fixed, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessId {
    Engineering,
    Scientific,
}

impl ProcessId {
    /// Presentation order: engineering first, matching the picker layout.
    pub const ALL: [ProcessId; 2] = [ProcessId::Engineering, ProcessId::Scientific];

    pub fn label_key(self) -> &'static str {
        match self {
            ProcessId::Engineering => "engineering",
            ProcessId::Scientific => "scientific",
        }
    }

    /// The other process.
    pub fn other(self) -> ProcessId {
        match self {
            ProcessId::Engineering => ProcessId::Scientific,
            ProcessId::Scientific => ProcessId::Engineering,
        }
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label_key())
    }
}

impl FromStr for ProcessId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "engineering" => Ok(ProcessId::Engineering),
            "scientific" => Ok(ProcessId::Scientific),
            other => Err(format!(
                "unknown process '{other}' (expected 'engineering' or 'scientific')"
            )),
        }
    }
}

/// One step in a process. Its index in the process's `steps` vec is its
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub detail: String,
    pub icon: IconName,
}

impl Step {
    pub fn new(title: &str, detail: &str, icon: IconName) -> Self {
        Self {
            title: title.to_string(),
            detail: detail.to_string(),
            icon,
        }
    }
}

/// A worked real-world example for a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessExample {
    pub title: String,
    pub intro: String,
    pub icon: IconName,
    pub points: Vec<String>,
}

/// A complete process definition: copy text plus the ordered step sequence.
///
/// The step count is 8 in the built-in content, but any length >= 1 is
/// supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub label: String,
    pub intro: String,
    pub note: String,
    pub icon: IconName,
    pub badge: String,
    pub steps: Vec<Step>,
    pub example: ProcessExample,
}

impl Process {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// One card in the static comparison grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareCard {
    pub title: String,
    pub body: String,
    pub icon: IconName,
}

/// The three comparison cards shown below the examples.
pub fn compare_cards() -> [CompareCard; 3] {
    [
        CompareCard {
            title: "Main Goal".to_string(),
            body: "Engineering builds a working fix. Science checks if an idea is true."
                .to_string(),
            icon: IconName::Gear,
        },
        CompareCard {
            title: "How They Validate".to_string(),
            body: "Engineering asks if it works. Science asks what the data shows.".to_string(),
            icon: IconName::Shield,
        },
        CompareCard {
            title: "What Gets Reported".to_string(),
            body: "Engineering reports the final design. Science reports the final conclusion."
                .to_string(),
            icon: IconName::Clipboard,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_id_round_trips_through_str() {
        for id in ProcessId::ALL {
            let parsed: ProcessId = id.to_string().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn process_id_rejects_unknown() {
        assert!("chemistry".parse::<ProcessId>().is_err());
        assert!("".parse::<ProcessId>().is_err());
    }

    #[test]
    fn process_id_parse_is_case_insensitive() {
        assert_eq!(
            "Engineering".parse::<ProcessId>().unwrap(),
            ProcessId::Engineering
        );
        assert_eq!(
            " SCIENTIFIC ".parse::<ProcessId>().unwrap(),
            ProcessId::Scientific
        );
    }

    #[test]
    fn other_is_an_involution() {
        for id in ProcessId::ALL {
            assert_eq!(id.other().other(), id);
            assert_ne!(id.other(), id);
        }
    }

    #[test]
    fn compare_cards_are_three() {
        let cards = compare_cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].title, "Main Goal");
    }
}
