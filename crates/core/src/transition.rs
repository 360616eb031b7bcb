//! Storytelling transition phrases between slide types.

use crate::types::SlideType;

/// Fallback used for any pair without a curated phrase.
pub const DEFAULT_TRANSITION: &str = "Moving to our next topic...";

/// Look up the transition phrase for an ordered pair of slide types.
///
/// A small curated table covers the common pair combinations; everything
/// else gets [`DEFAULT_TRANSITION`]. Total function.
pub fn transition_phrase(from: SlideType, to: SlideType) -> &'static str {
    use SlideType::*;

    match (from, to) {
        (Introduction, Content) => "Now let's dive into the details...",
        (Content, DataVisual) => "Let me show you what the data reveals...",
        (DataVisual, Content) => "These numbers tell us something important...",
        (Content, Comparison) => "To put this in perspective, let's compare...",
        (Comparison, Content) => "Based on this comparison...",
        (Content, Conclusion) => "This brings us to our key takeaways...",
        (Conclusion, CallToAction) => "So what does this mean for you?",
        (Content, Content) => "Building on this point...",
        (DataVisual, DataVisual) => "Here's another important data point...",
        _ => DEFAULT_TRANSITION,
    }
}
