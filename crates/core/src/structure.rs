//! Adaptive note-structure tables.
//!
//! Static skeletons keyed by slide type and verbosity. Template strings
//! carry bracketed placeholders meant for downstream substitution; this
//! module only supplies the skeletons.

use crate::types::{AdaptiveStructure, SlideType, VerbosityLevel};

const TITLE_BRIEF: AdaptiveStructure = AdaptiveStructure {
    bullets: 1,
    focus: &["Company/topic name", "Key theme"],
    templates: &["Introducing [topic] - [key value proposition]"],
};

const TITLE_STANDARD: AdaptiveStructure = AdaptiveStructure {
    bullets: 2,
    focus: &["Introduction", "Context"],
    templates: &[
        "Welcome audience and introduce [topic]",
        "Frame the discussion around [key theme/challenge]",
    ],
};

const TITLE_DETAILED: AdaptiveStructure = AdaptiveStructure {
    bullets: 3,
    focus: &["Introduction", "Context", "Preview"],
    templates: &[
        "Welcome and establish credibility on [topic]",
        "Set context: [current situation/challenge]",
        "Preview: We'll explore [main points]",
    ],
};

const DATA_VISUAL_BRIEF: AdaptiveStructure = AdaptiveStructure {
    bullets: 2,
    focus: &["Key stat", "Implication"],
    templates: &[
        "[Main data point] shows [trend/finding]",
        "This means [business impact]",
    ],
};

const DATA_VISUAL_STANDARD: AdaptiveStructure = AdaptiveStructure {
    bullets: 3,
    focus: &["Data highlight", "Insight", "Action"],
    templates: &[
        "The data reveals [key finding with number]",
        "This [confirms/challenges] our understanding of [topic]",
        "Implication: [what this means for strategy]",
    ],
};

const DATA_VISUAL_DETAILED: AdaptiveStructure = AdaptiveStructure {
    bullets: 4,
    focus: &["Context", "Data", "Analysis", "Implications"],
    templates: &[
        "Context: [Why this data matters]",
        "Key finding: [Specific numbers and trends]",
        "Notable: [Outliers or comparisons]",
        "Strategic implication: [How this shapes decisions]",
    ],
};

const COMPARISON_BRIEF: AdaptiveStructure = AdaptiveStructure {
    bullets: 2,
    focus: &["Winner", "Key differentiator"],
    templates: &[
        "[Option A] outperforms with [key metric]",
        "Main advantage: [differentiator]",
    ],
};

const COMPARISON_STANDARD: AdaptiveStructure = AdaptiveStructure {
    bullets: 3,
    focus: &["Overview", "Key differences", "Recommendation"],
    templates: &[
        "Comparing [A] vs [B] on [criteria]",
        "Key difference: [A] excels at [X], while [B] offers [Y]",
        "For our needs, [recommendation] because [reason]",
    ],
};

const COMPARISON_DETAILED: AdaptiveStructure = AdaptiveStructure {
    bullets: 4,
    focus: &["Setup", "Strengths", "Trade-offs", "Decision"],
    templates: &[
        "We're evaluating [options] based on [criteria]",
        "[A] strengths: [list], [B] strengths: [list]",
        "Trade-offs to consider: [key considerations]",
        "Recommendation: [choice] aligns with [strategic priority]",
    ],
};

const CONCLUSION_BRIEF: AdaptiveStructure = AdaptiveStructure {
    bullets: 2,
    focus: &["Main takeaway", "Next step"],
    templates: &[
        "Key insight: [main finding/recommendation]",
        "Next: [immediate action]",
    ],
};

const CONCLUSION_STANDARD: AdaptiveStructure = AdaptiveStructure {
    bullets: 3,
    focus: &["Recap", "Conclusion", "Call to action"],
    templates: &[
        "We've seen [key points recap]",
        "This leads us to conclude [main insight]",
        "Moving forward: [specific next steps]",
    ],
};

const CONCLUSION_DETAILED: AdaptiveStructure = AdaptiveStructure {
    bullets: 4,
    focus: &["Journey", "Insights", "Implications", "Actions"],
    templates: &[
        "Our analysis covered [main topics]",
        "Key insights: [top 2-3 findings]",
        "This means [strategic implications]",
        "Recommended actions: [prioritized next steps]",
    ],
};

// Generic structure for content and every other slide type without a
// bespoke table.
const DEFAULT_BRIEF: AdaptiveStructure = AdaptiveStructure {
    bullets: 2,
    focus: &["Main point", "Why it matters"],
    templates: &["[Key message]", "[Impact/relevance]"],
};

const DEFAULT_STANDARD: AdaptiveStructure = AdaptiveStructure {
    bullets: 3,
    focus: &["Point", "Evidence", "Implication"],
    templates: &[
        "[Main message]",
        "[Supporting evidence/example]",
        "[What this means for audience]",
    ],
};

const DEFAULT_DETAILED: AdaptiveStructure = AdaptiveStructure {
    bullets: 4,
    focus: &["Context", "Point", "Support", "Application"],
    templates: &[
        "[Setup/context]",
        "[Main point]",
        "[Evidence/examples]",
        "[How to apply/next steps]",
    ],
};

/// Look up the note structure for a slide type at a verbosity level.
///
/// Only `Title`, `DataVisual`, `Comparison`, and `Conclusion` have bespoke
/// tables; everything else shares the generic content structure. Total
/// function.
pub fn adaptive_structure(slide_type: SlideType, verbosity: VerbosityLevel) -> AdaptiveStructure {
    use VerbosityLevel::{Brief, Detailed, Standard};

    match slide_type {
        SlideType::Title => match verbosity {
            Brief => TITLE_BRIEF,
            Standard => TITLE_STANDARD,
            Detailed => TITLE_DETAILED,
        },
        SlideType::DataVisual => match verbosity {
            Brief => DATA_VISUAL_BRIEF,
            Standard => DATA_VISUAL_STANDARD,
            Detailed => DATA_VISUAL_DETAILED,
        },
        SlideType::Comparison => match verbosity {
            Brief => COMPARISON_BRIEF,
            Standard => COMPARISON_STANDARD,
            Detailed => COMPARISON_DETAILED,
        },
        SlideType::Conclusion => match verbosity {
            Brief => CONCLUSION_BRIEF,
            Standard => CONCLUSION_STANDARD,
            Detailed => CONCLUSION_DETAILED,
        },
        _ => match verbosity {
            Brief => DEFAULT_BRIEF,
            Standard => DEFAULT_STANDARD,
            Detailed => DEFAULT_DETAILED,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_visual_brief_has_two_templates() {
        let structure = adaptive_structure(SlideType::DataVisual, VerbosityLevel::Brief);

        assert_eq!(structure.bullets, 2);
        assert_eq!(structure.templates.len(), 2);
        assert_eq!(
            structure.templates[0],
            "[Main data point] shows [trend/finding]"
        );
    }

    #[test]
    fn test_unknown_verbosity_label_degrades_to_standard() {
        let verbosity = VerbosityLevel::from_label("Unknown");
        let structure = adaptive_structure(SlideType::Content, verbosity);

        assert_eq!(structure, adaptive_structure(SlideType::Content, VerbosityLevel::Standard));
        assert_eq!(structure.focus, ["Point", "Evidence", "Implication"]);
    }

    #[test]
    fn test_types_without_bespoke_table_share_default() {
        for slide_type in [
            SlideType::Introduction,
            SlideType::Agenda,
            SlideType::Content,
            SlideType::Transition,
            SlideType::Summary,
            SlideType::CallToAction,
            SlideType::Appendix,
            SlideType::Questions,
        ] {
            assert_eq!(
                adaptive_structure(slide_type, VerbosityLevel::Detailed),
                DEFAULT_DETAILED
            );
        }
    }

    #[test]
    fn test_bullet_count_matches_template_count() {
        for slide_type in [
            SlideType::Title,
            SlideType::DataVisual,
            SlideType::Comparison,
            SlideType::Conclusion,
            SlideType::Content,
        ] {
            for verbosity in [
                VerbosityLevel::Brief,
                VerbosityLevel::Standard,
                VerbosityLevel::Detailed,
            ] {
                let structure = adaptive_structure(slide_type, verbosity);
                assert_eq!(structure.bullets, structure.templates.len());
            }
        }
    }
}
