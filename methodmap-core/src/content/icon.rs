//! Icon names and their terminal glyphs.
//!
//! The content tables reference icons by name; the presentation layer asks
//! for a glyph. The set is closed — content referencing an unknown icon
//! fails at parse time, not at render time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of icon names used by steps, examples, and comparison cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconName {
    Gear,
    Flask,
    Target,
    Search,
    Bulb,
    Checkplan,
    Wrench,
    Test,
    Refresh,
    Report,
    Observe,
    Question,
    Hypothesis,
    Experiment,
    Decision,
    Conclusion,
    Compare,
    Shield,
    Clipboard,
}

impl IconName {
    /// Single-character terminal glyph for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            IconName::Gear => "⚙",
            IconName::Flask => "⚗",
            IconName::Target => "◎",
            IconName::Search => "🔍",
            IconName::Bulb => "💡",
            IconName::Checkplan => "☑",
            IconName::Wrench => "🔧",
            IconName::Test => "📊",
            IconName::Refresh => "↻",
            IconName::Report => "📄",
            IconName::Observe => "👁",
            IconName::Question => "?",
            IconName::Hypothesis => "Ψ",
            IconName::Experiment => "🧪",
            IconName::Decision => "✓",
            IconName::Conclusion => "📈",
            IconName::Compare => "⇄",
            IconName::Shield => "🛡",
            IconName::Clipboard => "📋",
        }
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_nonempty() {
        let all = [
            IconName::Gear,
            IconName::Flask,
            IconName::Target,
            IconName::Search,
            IconName::Bulb,
            IconName::Checkplan,
            IconName::Wrench,
            IconName::Test,
            IconName::Refresh,
            IconName::Report,
            IconName::Observe,
            IconName::Question,
            IconName::Hypothesis,
            IconName::Experiment,
            IconName::Decision,
            IconName::Conclusion,
            IconName::Compare,
            IconName::Shield,
            IconName::Clipboard,
        ];
        for icon in all {
            assert!(!icon.glyph().is_empty());
        }
    }

    #[test]
    fn serde_names_are_lowercase() {
        let json = serde_json::to_string(&IconName::Checkplan).unwrap();
        assert_eq!(json, "\"checkplan\"");
        let back: IconName = serde_json::from_str("\"flask\"").unwrap();
        assert_eq!(back, IconName::Flask);
    }
}
