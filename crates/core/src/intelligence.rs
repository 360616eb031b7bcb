//! Presentation-level analysis and note formatting.
//!
//! Parses the informal `"Slide N: ..."` convention produced by upstream
//! text generation, classifies each slide, and renders speaker-note
//! fragments. Malformed or missing markers never error; they simply
//! produce fewer records.

use crate::analyzer::SlideAnalyzer;
use crate::types::{InsightBundle, SlideRecord, SlideType, VerbosityLevel};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Marker introducing a slide's text: `Slide 7:`, case-insensitive.
static SLIDE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)slide\s+(\d+):").unwrap());

/// Parse `(number, title)` pairs from outline text.
///
/// A slide's title is everything between its marker and the next marker
/// (or end of text), trimmed. Numbers are taken exactly as written; no
/// renumbering or contiguity checks. A marker followed by nothing at all
/// yields no record.
pub fn parse_outline(outline: &str) -> Vec<(u32, String)> {
    let markers: Vec<(usize, usize, u32)> = SLIDE_MARKER_REGEX
        .captures_iter(outline)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            let number = caps.get(1)?.as_str().parse().ok()?;
            Some((m.start(), m.end(), number))
        })
        .collect();

    let mut slides = Vec::with_capacity(markers.len());
    for (idx, &(_, body_start, number)) in markers.iter().enumerate() {
        let body_end = markers
            .get(idx + 1)
            .map(|&(next_start, _, _)| next_start)
            .unwrap_or(outline.len());

        let span = &outline[body_start..body_end];
        if span.is_empty() {
            continue;
        }

        slides.push((number, span.trim().to_string()));
    }

    slides
}

/// Find the visual-analysis block for a slide number.
///
/// Returns the block text including its own `Slide N:` marker, bounded by
/// the next marker or end of text. `None` when no marker with that number
/// exists.
fn find_visual_block(visuals: &str, number: u32) -> Option<&str> {
    let markers: Vec<(usize, u32)> = SLIDE_MARKER_REGEX
        .captures_iter(visuals)
        .filter_map(|caps| {
            let m = caps.get(0)?;
            let n = caps.get(1)?.as_str().parse().ok()?;
            Some((m.start(), n))
        })
        .collect();

    for (idx, &(start, n)) in markers.iter().enumerate() {
        if n != number {
            continue;
        }
        let end = markers
            .get(idx + 1)
            .map(|&(next_start, _)| next_start)
            .unwrap_or(visuals.len());
        return Some(&visuals[start..end]);
    }

    None
}

/// Analyze a whole presentation from outline and visual-analysis text.
///
/// Each parsed slide is classified from its title plus its visual block
/// (when present); insights are extracted only for `data_visual` slides
/// with a visual block. Returns records keyed by slide number; duplicate
/// numbers keep the last parsed record.
pub fn analyze_presentation_intelligence(
    outline: &str,
    visuals: &str,
) -> BTreeMap<u32, SlideRecord> {
    let analyzer = SlideAnalyzer::new();
    let mut intelligence = BTreeMap::new();

    for (number, title) in parse_outline(outline) {
        let visual_block = find_visual_block(visuals, number).unwrap_or("");

        let slide_type = analyzer.identify_slide_type(&title, visual_block, number);
        log::debug!("slide {} ({:?}) classified as {}", number, title, slide_type);

        let insights = if slide_type == SlideType::DataVisual && !visual_block.is_empty() {
            analyzer.extract_data_insights(visual_block)
        } else {
            InsightBundle::default()
        };

        intelligence.insert(
            number,
            SlideRecord {
                number,
                title,
                slide_type,
                insights,
                has_visual: !visual_block.is_empty(),
            },
        );
    }

    intelligence
}

/// Format speaker notes for one slide.
///
/// Emits the `Slide N: title` header, a transition line when the previous
/// slide's type differs, one bullet per structure template (placeholders
/// left verbatim), and the first trend/outlier insight lines when present.
pub fn format_intelligent_notes(
    number: u32,
    record: &SlideRecord,
    verbosity: VerbosityLevel,
    previous: Option<SlideType>,
) -> String {
    let analyzer = SlideAnalyzer::new();
    let structure = analyzer.adaptive_structure(record.slide_type, verbosity);

    let mut lines = vec![format!("Slide {}: {}", number, record.title)];

    if let Some(prev) = previous {
        if prev != record.slide_type {
            let phrase = analyzer.transition_phrase(prev, record.slide_type);
            lines.push(format!("• (Transition) {}", phrase));
        }
    }

    for template in structure.templates {
        lines.push(format!("• {}", template));
    }

    if !record.insights.is_empty() {
        if let Some(trend) = record.insights.trends.first() {
            lines.push(format!("• Key trend: {}", trend));
        }
        if let Some(outlier) = record.insights.outliers.first() {
            lines.push(format!("• Notable: {}", outlier));
        }
    }

    lines.join("\n")
}

/// Format notes for every analyzed slide, in ascending slide number.
///
/// Threads each slide's type through as the next slide's previous type
/// (so the first slide never gets a transition) and joins per-slide
/// blocks with blank lines.
pub fn format_presentation_notes(
    intelligence: &BTreeMap<u32, SlideRecord>,
    verbosity: VerbosityLevel,
) -> String {
    let mut blocks = Vec::with_capacity(intelligence.len());
    let mut previous: Option<SlideType> = None;

    for (&number, record) in intelligence {
        blocks.push(format_intelligent_notes(number, record, verbosity, previous));
        previous = Some(record.slide_type);
    }

    blocks.join("\n\n")
}
