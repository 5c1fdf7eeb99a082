//! The content library — both process definitions, with TOML support.
//!
//! Content is authored, not user-supplied. The built-in library carries the
//! full infographic copy; an external TOML file can replace it. Either way
//! the library is validated once at load: a process with zero steps is
//! rejected rather than rendered.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::content::icon::IconName;
use crate::content::process::{Process, ProcessExample, ProcessId, Step};
use crate::error::ContentError;

/// Immutable content for both processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLibrary {
    pub engineering: Process,
    pub scientific: Process,
}

impl ContentLibrary {
    /// Load a library from a TOML file and validate it.
    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ContentError::Read(path.display().to_string(), e))?;
        Self::from_toml(&content)
    }

    /// Parse a library from a TOML string and validate it.
    pub fn from_toml(content: &str) -> Result<Self, ContentError> {
        let library: ContentLibrary = toml::from_str(content)?;
        library.validate()?;
        Ok(library)
    }

    /// Reject structurally unusable content (fail fast at load time).
    pub fn validate(&self) -> Result<(), ContentError> {
        for id in ProcessId::ALL {
            if self.process(id).steps.is_empty() {
                return Err(ContentError::EmptySteps(id));
            }
        }
        Ok(())
    }

    /// Look up a process by id.
    pub fn process(&self, id: ProcessId) -> &Process {
        match id {
            ProcessId::Engineering => &self.engineering,
            ProcessId::Scientific => &self.scientific,
        }
    }

    /// Total steps across both processes (hero stat: "16 total steps").
    pub fn total_step_count(&self) -> usize {
        ProcessId::ALL
            .iter()
            .map(|&id| self.process(id).step_count())
            .sum()
    }
}

impl Default for ContentLibrary {
    fn default() -> Self {
        Self {
            engineering: engineering_process(),
            scientific: scientific_process(),
        }
    }
}

fn engineering_process() -> Process {
    Process {
        label: "Engineering Design Process".to_string(),
        intro: "Used to build a real solution, then improve it.".to_string(),
        note: "If it does not work, improve it and test again.".to_string(),
        icon: IconName::Gear,
        badge: "Fix + Improve".to_string(),
        steps: vec![
            Step::new(
                "Define the Problem",
                "Say what is wrong and what success looks like.",
                IconName::Target,
            ),
            Step::new(
                "Background Research",
                "Check what is known and what limits you have.",
                IconName::Search,
            ),
            Step::new(
                "Brainstorm Solutions",
                "List a few possible ideas to solve it.",
                IconName::Bulb,
            ),
            Step::new(
                "Choose the Best Plan",
                "Pick the option that best fits the need.",
                IconName::Checkplan,
            ),
            Step::new(
                "Build a Prototype",
                "Make a first version you can test.",
                IconName::Wrench,
            ),
            Step::new(
                "Test the Prototype",
                "Try it and collect results.",
                IconName::Test,
            ),
            Step::new(
                "Improve if Needed",
                "Fix weak parts and test again.",
                IconName::Refresh,
            ),
            Step::new(
                "Report Data",
                "Share final results and what changed.",
                IconName::Report,
            ),
        ],
        example: ProcessExample {
            title: "Example: Technician Fixing a Car".to_string(),
            intro: "Quick car repair example using this process.".to_string(),
            icon: IconName::Wrench,
            points: vec![
                "The car has a starting problem.".to_string(),
                "The technician checks likely causes.".to_string(),
                "They list a few repair options.".to_string(),
                "They choose the best option and do the repair.".to_string(),
                "They test the car and adjust if needed.".to_string(),
                "They report the final fix to the owner.".to_string(),
            ],
        },
    }
}

fn scientific_process() -> Process {
    Process {
        label: "Scientific Method".to_string(),
        intro: "Used to test an idea with data.".to_string(),
        note: "The data decides if the idea is accepted or rejected.".to_string(),
        icon: IconName::Flask,
        badge: "Ask + Test".to_string(),
        steps: vec![
            Step::new("Observe", "Notice what is happening.", IconName::Observe),
            Step::new(
                "Ask a Question",
                "Ask one clear question you can test.",
                IconName::Question,
            ),
            Step::new(
                "Research",
                "Read what is already known.",
                IconName::Search,
            ),
            Step::new(
                "Create a Hypothesis",
                "Make a prediction you can test.",
                IconName::Hypothesis,
            ),
            Step::new(
                "Run an Experiment",
                "Run a fair test and record data.",
                IconName::Experiment,
            ),
            Step::new(
                "Test the Hypothesis",
                "Use data to accept or reject the idea.",
                IconName::Decision,
            ),
            Step::new(
                "Draw a Conclusion",
                "State what the results show.",
                IconName::Conclusion,
            ),
            Step::new(
                "Report Results",
                "Share your steps and final result.",
                IconName::Report,
            ),
        ],
        example: ProcessExample {
            title: "Example: Paper Towel Test".to_string(),
            intro: "Simple test to see which brand absorbs more.".to_string(),
            icon: IconName::Flask,
            points: vec![
                "One brand looks like it absorbs more.".to_string(),
                "Question: Which brand absorbs more per sheet?".to_string(),
                "Hypothesis: Brand A will absorb more than Brand B.".to_string(),
                "Test both with the same sheet size and water amount.".to_string(),
                "Compare data and accept or reject the hypothesis.".to_string(),
                "Share the final answer and test steps.".to_string(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_library_has_eight_steps_each() {
        let library = ContentLibrary::default();
        for id in ProcessId::ALL {
            assert_eq!(library.process(id).step_count(), 8, "{id}");
        }
        assert_eq!(library.total_step_count(), 16);
    }

    #[test]
    fn default_library_validates() {
        assert!(ContentLibrary::default().validate().is_ok());
    }

    #[test]
    fn empty_steps_rejected() {
        let mut library = ContentLibrary::default();
        library.scientific.steps.clear();
        match library.validate() {
            Err(ContentError::EmptySteps(ProcessId::Scientific)) => {}
            other => panic!("expected EmptySteps(scientific), got {other:?}"),
        }
    }

    #[test]
    fn toml_round_trip() {
        let library = ContentLibrary::default();
        let text = toml::to_string(&library).unwrap();
        let back = ContentLibrary::from_toml(&text).unwrap();
        assert_eq!(back, library);
    }

    #[test]
    fn from_toml_rejects_empty_process() {
        let mut library = ContentLibrary::default();
        library.engineering.steps.clear();
        let text = toml::to_string(&library).unwrap();
        assert!(ContentLibrary::from_toml(&text).is_err());
    }

    #[test]
    fn example_points_are_present() {
        let library = ContentLibrary::default();
        for id in ProcessId::ALL {
            assert_eq!(library.process(id).example.points.len(), 6);
        }
    }
}
