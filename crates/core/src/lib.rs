//! Slide intelligence: rule-based slide type classification, data-insight
//! extraction, and adaptive speaker-note structures for presentation
//! outlines in the `"Slide N: ..."` convention.

pub mod analyzer;
pub mod intelligence;
pub mod structure;
pub mod transition;
pub mod types;

pub use analyzer::SlideAnalyzer;
pub use intelligence::{
    analyze_presentation_intelligence, format_intelligent_notes, format_presentation_notes,
    parse_outline,
};
pub use structure::adaptive_structure;
pub use transition::{transition_phrase, DEFAULT_TRANSITION};
pub use types::{AdaptiveStructure, InsightBundle, SlideRecord, SlideType, VerbosityLevel};
