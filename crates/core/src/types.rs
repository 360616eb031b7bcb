//! Domain types for slide intelligence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The narrative role a slide plays in a presentation.
///
/// Closed set; `Content` is the fallback for slides that match no
/// classification pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideType {
    /// Opening title slide.
    Title,
    /// Introduction / welcome / overview.
    Introduction,
    /// Agenda or table of contents.
    Agenda,
    /// Generic content slide (default when nothing else matches).
    #[default]
    Content,
    /// Chart, graph, table, or other data visualization.
    DataVisual,
    /// Side-by-side comparison of options.
    Comparison,
    /// Bridging slide between sections.
    Transition,
    /// Recap of key points.
    Summary,
    /// Closing conclusions.
    Conclusion,
    /// Next steps / recommendations.
    CallToAction,
    /// Backup or reference material.
    Appendix,
    /// Q&A / discussion / thank-you slide.
    Questions,
}

impl SlideType {
    /// Canonical lowercase label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Introduction => "introduction",
            Self::Agenda => "agenda",
            Self::Content => "content",
            Self::DataVisual => "data_visual",
            Self::Comparison => "comparison",
            Self::Transition => "transition",
            Self::Summary => "summary",
            Self::Conclusion => "conclusion",
            Self::CallToAction => "call_to_action",
            Self::Appendix => "appendix",
            Self::Questions => "questions",
        }
    }
}

impl fmt::Display for SlideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How dense the generated speaker notes should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerbosityLevel {
    /// One or two bullets per slide.
    Brief,
    /// Balanced detail.
    #[default]
    Standard,
    /// Full context, analysis, and implications.
    Detailed,
}

impl VerbosityLevel {
    /// Parse a verbosity label, case-insensitively.
    ///
    /// Unrecognized labels silently degrade to `Standard`; callers never
    /// see an error for a bad level name.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "brief" => Self::Brief,
            "detailed" => Self::Detailed,
            _ => Self::Standard,
        }
    }
}

/// Per-slide intelligence produced by one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Slide number as it appeared in the outline (1-based, not renumbered).
    pub number: u32,

    /// Slide title parsed from the outline, trimmed.
    pub title: String,

    /// Classified narrative role.
    pub slide_type: SlideType,

    /// Insights extracted from the slide's visual description, if any.
    pub insights: InsightBundle,

    /// Whether a visual-analysis block was found for this slide.
    pub has_visual: bool,
}

/// Categorized lines extracted from visual-analysis text.
///
/// Each list preserves source line order; a line may appear in more than
/// one category, and duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightBundle {
    /// Lines describing a trend (growth, decline, trajectory, ...).
    pub trends: Vec<String>,

    /// Lines comparing one thing to another.
    pub comparisons: Vec<String>,

    /// Lines flagging outliers, spikes, or anomalies.
    pub outliers: Vec<String>,

    /// Lines carrying a numeric statistic with business context.
    pub key_findings: Vec<String>,
}

impl InsightBundle {
    /// True when no category holds any line.
    pub fn is_empty(&self) -> bool {
        self.trends.is_empty()
            && self.comparisons.is_empty()
            && self.outliers.is_empty()
            && self.key_findings.is_empty()
    }
}

/// A note-structure skeleton selected by slide type and verbosity.
///
/// Template strings contain bracketed placeholders (`[topic]`,
/// `[key finding]`) that are surfaced verbatim; substitution, if any,
/// happens downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdaptiveStructure {
    /// Suggested bullet count for the slide's notes.
    pub bullets: usize,

    /// Named focus areas, one per bullet.
    pub focus: &'static [&'static str],

    /// Template phrasings, one per bullet.
    pub templates: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_type_default_is_content() {
        assert_eq!(SlideType::default(), SlideType::Content);
    }

    #[test]
    fn test_slide_type_labels() {
        assert_eq!(SlideType::DataVisual.as_str(), "data_visual");
        assert_eq!(SlideType::CallToAction.as_str(), "call_to_action");
        assert_eq!(SlideType::Questions.to_string(), "questions");
    }

    #[test]
    fn test_verbosity_from_label() {
        assert_eq!(VerbosityLevel::from_label("Brief"), VerbosityLevel::Brief);
        assert_eq!(VerbosityLevel::from_label("detailed"), VerbosityLevel::Detailed);
        assert_eq!(
            VerbosityLevel::from_label("Standard"),
            VerbosityLevel::Standard
        );
    }

    #[test]
    fn test_verbosity_unknown_degrades_to_standard() {
        assert_eq!(
            VerbosityLevel::from_label("Unknown"),
            VerbosityLevel::Standard
        );
        assert_eq!(VerbosityLevel::from_label(""), VerbosityLevel::Standard);
        assert_eq!(
            VerbosityLevel::from_label("  BRIEF  "),
            VerbosityLevel::Brief
        );
    }

    #[test]
    fn test_insight_bundle_is_empty() {
        let mut bundle = InsightBundle::default();
        assert!(bundle.is_empty());

        bundle.outliers.push("Notable spike in Q3".to_string());
        assert!(!bundle.is_empty());
    }
}
