//! Slide classification and data-insight extraction.
//!
//! Pattern tables are compiled once into static `RegexSet`s; scoring is a
//! pure function over the lowercased title/content buffer.

use crate::types::{AdaptiveStructure, InsightBundle, SlideType, VerbosityLevel};
use crate::{structure, transition};
use regex::{Regex, RegexSet};
use std::sync::LazyLock;

/// Indicator patterns per slide type, in classification priority order.
///
/// The order matters: when two types score equally, the one declared
/// first wins. `Content` carries no patterns; it is the fallback when
/// nothing matches.
const TYPE_INDICATORS: &[(SlideType, &[&str])] = &[
    (
        SlideType::Title,
        &[r"^\s*slide\s*1\s*:", r"title\s*slide", r"presentation\s*title"],
    ),
    (
        SlideType::Introduction,
        &[
            r"introduction",
            r"intro\b",
            r"overview",
            r"welcome",
            r"about\s+(us|this|our)",
        ],
    ),
    (
        SlideType::Agenda,
        &[
            r"agenda",
            r"outline",
            r"today.?s\s+(topics|discussion)",
            r"table\s*of\s*contents",
            r"what\s*we.?ll\s*cover",
        ],
    ),
    (
        SlideType::DataVisual,
        &[
            r"chart",
            r"graph",
            r"table",
            r"figure\s*\d+",
            r"data",
            r"statistics",
            r"metrics",
            r"%|percent",
            r"growth\s*rate",
            r"market\s*size",
        ],
    ),
    (
        SlideType::Comparison,
        &[
            r"vs\.?|versus",
            r"comparison",
            r"compare",
            r"difference",
            r"advantages?\s*(and|&)\s*disadvantages?",
        ],
    ),
    (
        SlideType::Transition,
        &[
            r"now\s*let.?s",
            r"moving\s*(on|forward)",
            r"next",
            r"turning\s*to",
            r"shift\s*(our\s*)?focus",
        ],
    ),
    (
        SlideType::Summary,
        &[
            r"summary",
            r"recap",
            r"key\s*(points|takeaways)",
            r"in\s*summary",
            r"to\s*summarize",
        ],
    ),
    (
        SlideType::Conclusion,
        &[
            r"conclusion",
            r"conclud",
            r"final\s*thoughts",
            r"wrap\s*up",
            r"closing",
        ],
    ),
    (
        SlideType::CallToAction,
        &[
            r"next\s*steps",
            r"action\s*items",
            r"recommendations",
            r"what\s*you\s*can\s*do",
            r"call\s*to\s*action",
        ],
    ),
    (
        SlideType::Appendix,
        &[
            r"appendix",
            r"additional\s*information",
            r"reference",
            r"backup\s*slides",
        ],
    ),
    (
        SlideType::Questions,
        &[r"questions\??", r"q\s*&\s*a", r"discussion", r"thank\s*you"],
    ),
];

/// Compiled indicator sets, one per slide type, in table order.
static TYPE_SETS: LazyLock<Vec<(SlideType, RegexSet)>> = LazyLock::new(|| {
    TYPE_INDICATORS
        .iter()
        .map(|(slide_type, patterns)| (*slide_type, RegexSet::new(*patterns).unwrap()))
        .collect()
});

/// Lines matching any of these describe a trend.
static TREND_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"increase",
        r"decrease",
        r"growth",
        r"decline",
        r"rise",
        r"fall",
        r"trend",
        r"trajectory",
    ])
    .unwrap()
});

/// Lines matching any of these compare one thing against another.
static COMPARISON_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"higher\s*than",
        r"lower\s*than",
        r"compared\s*to",
        r"versus",
        r"outperform",
        r"underperform",
    ])
    .unwrap()
});

/// Lines matching any of these flag an outlier or anomaly.
static OUTLIER_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"significant",
        r"notable",
        r"exception",
        r"unusual",
        r"spike",
        r"anomaly",
    ])
    .unwrap()
});

/// A number, optionally a percentage.
static STAT_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\.?\d*\s*%?").unwrap());

/// Business keywords that give a number statistical context.
static STAT_KEYWORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"growth|increase|decrease|market|share|rate").unwrap());

/// Classifies slides and extracts insights from visual descriptions.
///
/// Stateless; all pattern tables are process-wide statics compiled on
/// first use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideAnalyzer;

impl SlideAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Identify a slide's narrative role from its title, content, and position.
    ///
    /// Slide 1 is always the title slide, regardless of text. Otherwise
    /// each type's indicator patterns are counted against the lowercased
    /// title + content buffer; the highest-scoring type wins, ties going
    /// to the type declared first in the table. With no match at all the
    /// slide is plain `Content`.
    pub fn identify_slide_type(
        &self,
        title: &str,
        content: &str,
        slide_number: u32,
    ) -> SlideType {
        if slide_number == 1 {
            return SlideType::Title;
        }

        let buffer = format!("{} {}", title, content).to_lowercase();

        let mut best: Option<(SlideType, usize)> = None;
        for (slide_type, set) in TYPE_SETS.iter() {
            let score = set.matches(&buffer).iter().count();
            if score == 0 {
                continue;
            }
            // Strictly-greater keeps the first-declared type on ties.
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((*slide_type, score));
            }
        }

        best.map(|(slide_type, _)| slide_type)
            .unwrap_or(SlideType::Content)
    }

    /// Extract categorized insights from a visual-analysis description.
    ///
    /// Each line is tested independently against the trend, comparison,
    /// and outlier pattern groups; a line can land in several categories.
    /// Lines carrying a numeric statistic alongside a business keyword
    /// (growth, increase, decrease, market, share, rate) are additionally
    /// collected as key findings. Order follows the source text and
    /// duplicates are kept.
    pub fn extract_data_insights(&self, visual_description: &str) -> InsightBundle {
        let mut insights = InsightBundle::default();

        for line in visual_description.split('\n') {
            let lowered = line.to_lowercase();
            let trimmed = line.trim();

            if TREND_SET.is_match(&lowered) {
                insights.trends.push(trimmed.to_string());
            }
            if COMPARISON_SET.is_match(&lowered) {
                insights.comparisons.push(trimmed.to_string());
            }
            if OUTLIER_SET.is_match(&lowered) {
                insights.outliers.push(trimmed.to_string());
            }
            if STAT_NUMBER_REGEX.is_match(&lowered) && STAT_KEYWORD_REGEX.is_match(&lowered) {
                insights.key_findings.push(trimmed.to_string());
            }
        }

        insights
    }

    /// Look up the note structure for a slide type at a verbosity level.
    ///
    /// Total function; see [`structure::adaptive_structure`].
    pub fn adaptive_structure(
        &self,
        slide_type: SlideType,
        verbosity: VerbosityLevel,
    ) -> AdaptiveStructure {
        structure::adaptive_structure(slide_type, verbosity)
    }

    /// Look up the storytelling transition between two slide types.
    ///
    /// Total function; see [`transition::transition_phrase`].
    pub fn transition_phrase(&self, from: SlideType, to: SlideType) -> &'static str {
        transition::transition_phrase(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_one_is_always_title() {
        let analyzer = SlideAnalyzer::new();

        assert_eq!(
            analyzer.identify_slide_type("Quarterly Numbers Chart", "", 1),
            SlideType::Title
        );
        assert_eq!(analyzer.identify_slide_type("", "", 1), SlideType::Title);
        assert_eq!(
            analyzer.identify_slide_type("Agenda", "lots of data", 1),
            SlideType::Title
        );
    }

    #[test]
    fn test_no_match_falls_back_to_content() {
        let analyzer = SlideAnalyzer::new();

        assert_eq!(
            analyzer.identify_slide_type("Our Story", "", 2),
            SlideType::Content
        );
        assert_eq!(analyzer.identify_slide_type("", "", 7), SlideType::Content);
    }

    #[test]
    fn test_agenda_slide() {
        let analyzer = SlideAnalyzer::new();

        assert_eq!(
            analyzer.identify_slide_type("Agenda for Today", "", 2),
            SlideType::Agenda
        );
    }

    #[test]
    fn test_data_visual_slide() {
        let analyzer = SlideAnalyzer::new();

        assert_eq!(
            analyzer.identify_slide_type("Q3 Revenue Growth Chart", "", 5),
            SlideType::DataVisual
        );
    }

    #[test]
    fn test_higher_score_wins() {
        let analyzer = SlideAnalyzer::new();

        // "chart", "graph", and "data" all hit DataVisual; the lone
        // Transition hit on "next" loses.
        assert_eq!(
            analyzer.identify_slide_type(
                "Next we look at the chart",
                "graph of sales data",
                3
            ),
            SlideType::DataVisual
        );
    }

    #[test]
    fn test_tie_goes_to_first_declared_type() {
        let analyzer = SlideAnalyzer::new();

        // One Summary hit ("recap") and one Conclusion hit ("closing");
        // Summary is declared first in the table.
        assert_eq!(
            analyzer.identify_slide_type("Recap before closing", "", 9),
            SlideType::Summary
        );
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        let analyzer = SlideAnalyzer::new();

        assert_eq!(
            analyzer.identify_slide_type("AGENDA", "", 2),
            SlideType::Agenda
        );
        assert_eq!(
            analyzer.identify_slide_type("Thank You!", "", 12),
            SlideType::Questions
        );
    }

    #[test]
    fn test_extract_insights_spec_example() {
        let analyzer = SlideAnalyzer::new();

        let insights = analyzer
            .extract_data_insights("Sales increased 15% due to strong demand\nNo relevant data here");

        assert_eq!(
            insights.trends,
            vec!["Sales increased 15% due to strong demand"]
        );
        assert_eq!(
            insights.key_findings,
            vec!["Sales increased 15% due to strong demand"]
        );
        assert!(insights.comparisons.is_empty());
        assert!(insights.outliers.is_empty());
    }

    #[test]
    fn test_extract_insights_line_can_hit_multiple_groups() {
        let analyzer = SlideAnalyzer::new();

        let insights =
            analyzer.extract_data_insights("A notable spike, higher than last year's growth");

        assert_eq!(insights.trends.len(), 1);
        assert_eq!(insights.comparisons.len(), 1);
        assert_eq!(insights.outliers.len(), 1);
        assert!(insights.key_findings.is_empty()); // no number on the line
    }

    #[test]
    fn test_extract_insights_preserves_line_order_and_trims() {
        let analyzer = SlideAnalyzer::new();

        let insights = analyzer.extract_data_insights(
            "  Revenue growth accelerated  \n\nMargins show a declining trend",
        );

        assert_eq!(
            insights.trends,
            vec![
                "Revenue growth accelerated",
                "Margins show a declining trend"
            ]
        );
    }

    #[test]
    fn test_extract_insights_empty_input() {
        let analyzer = SlideAnalyzer::new();

        assert!(analyzer.extract_data_insights("").is_empty());
        assert!(analyzer.extract_data_insights("\n\n\n").is_empty());
    }

    #[test]
    fn test_key_finding_keyword_before_number() {
        let analyzer = SlideAnalyzer::new();

        // Keyword precedes the number; still a key finding.
        let insights = analyzer.extract_data_insights("Market share reached 42");
        assert_eq!(insights.key_findings, vec!["Market share reached 42"]);
    }
}
