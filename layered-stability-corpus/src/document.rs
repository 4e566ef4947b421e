//! Segmented, dependency-parsed source documents and section walking.
//!
//! Documents arrive already split into titles, headings and paragraphs, each
//! with its sentences and their dependency edges. Walking applies the section
//! rules shared by every mining mode:
//!
//! - reference-like headings start a skipped section (not listed, not counted)
//! - "intro" headings start a section that is counted but never mined
//! - any other heading starts a mined section

use layered_stability::DependencyEdge;
use serde::{Deserialize, Serialize};

/// One sentence as produced by the external segmenter and parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSentence {
    pub text: String,
    #[serde(default)]
    pub edges: Vec<DependencyEdge>,
}

impl SourceSentence {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            edges: Vec::new(),
        }
    }

    pub fn with_edges(mut self, edges: Vec<DependencyEdge>) -> Self {
        self.edges = edges;
        self
    }
}

/// A structural element of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Title {
        text: String,
    },
    Heading {
        text: String,
        #[serde(default)]
        sentences: Vec<SourceSentence>,
    },
    Paragraph {
        text: String,
        #[serde(default)]
        sentences: Vec<SourceSentence>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Corpus-relative identifier, reported as the record filename
    pub id: String,
    pub elements: Vec<Element>,
}

impl SourceDocument {
    pub fn paragraph_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Paragraph { .. }))
            .count()
    }
}

/// Which headings end mining, per mode.
#[derive(Debug, Clone, Copy)]
pub struct SectionRules {
    /// Lowercase substrings marking a heading whose section is skipped
    skip_markers: &'static [&'static str],
    /// Drop "ARTICLE SECTIONS" / "Jump To" navigation paragraphs
    skip_navigation: bool,
}

impl SectionRules {
    pub const SOLVENT: SectionRules = SectionRules {
        skip_markers: &[
            "reference",
            "crossref",
            "citation",
            "citing",
            "supporting",
            "supplementary",
        ],
        skip_navigation: true,
    };

    pub const THERMAL: SectionRules = SectionRules {
        skip_markers: &["additional links", "references"],
        skip_navigation: false,
    };

    fn skips(&self, heading: &str) -> bool {
        let heading = heading.to_lowercase();
        self.skip_markers.iter().any(|marker| heading.contains(marker))
    }
}

fn is_navigation(paragraph: &str) -> bool {
    paragraph.contains("ARTICLE SECTIONS") || paragraph == "Jump To"
}

/// Document-level counters gathered while walking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSummary {
    pub title: Option<String>,
    pub intro: bool,
    pub sections: Vec<String>,
    pub num_sentences: usize,
    pub num_char: usize,
}

impl DocumentSummary {
    fn count(&mut self, sentences: &[SourceSentence]) {
        for sentence in sentences {
            self.num_sentences += 1;
            self.num_char += sentence.text.chars().count();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Body,
    Intro,
    Skipped,
}

/// Walk `document`, handing every minable paragraph to `mine` together with
/// the document-level index of its first sentence.
pub fn walk<'d, F>(document: &'d SourceDocument, rules: &SectionRules, mut mine: F) -> DocumentSummary
where
    F: FnMut(&'d [SourceSentence], usize),
{
    let mut summary = DocumentSummary::default();
    let mut section = Section::Body;

    for element in &document.elements {
        match element {
            Element::Title { text } => {
                if summary.title.is_none() {
                    summary.title = Some(text.clone());
                }
            }
            Element::Heading { text, sentences } => {
                if rules.skips(text) {
                    section = Section::Skipped;
                    continue;
                }
                if text.to_lowercase().contains("intro") {
                    summary.intro = true;
                    section = Section::Intro;
                    summary.count(sentences);
                } else {
                    section = Section::Body;
                }
                summary.sections.push(text.clone());
            }
            Element::Paragraph { text, sentences } => match section {
                Section::Skipped => {}
                Section::Intro => summary.count(sentences),
                Section::Body => {
                    if rules.skip_navigation && is_navigation(text) {
                        continue;
                    }
                    mine(sentences, summary.num_sentences);
                    summary.count(sentences);
                }
            },
        }
    }

    summary
}
