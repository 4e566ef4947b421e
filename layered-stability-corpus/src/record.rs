//! Output records, serialized with the field names downstream tooling reads.

use std::collections::BTreeMap;

use layered_stability::{CueMatch, Reason, SentenceAnalysis, StabilityLabel};
use serde::{Deserialize, Serialize};

use crate::document::DocumentSummary;

/// One classified sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityRecord {
    pub filename: String,
    pub title: Option<String>,
    pub sentence: String,
    pub sentence_counter: usize,
    pub stability_keyword: Vec<String>,
    pub collapse_keyword: Vec<String>,
    pub solvent_keyword: Vec<String>,
    pub solvent_removal_flag: StabilityLabel,
    pub solvent_removal_flag_reason: Reason,
    pub solvent: bool,
    pub stability: bool,
}

impl StabilityRecord {
    /// Build a record from a classified analysis; `None` for discarded or
    /// cue-less sentences.
    pub fn from_analysis(
        filename: &str,
        title: Option<&str>,
        sentence: &str,
        sentence_counter: usize,
        analysis: SentenceAnalysis,
    ) -> Option<Self> {
        let (cues, result) = match analysis {
            SentenceAnalysis::Classified { cues, result, .. } => (cues, result),
            _ => return None,
        };
        let CueMatch {
            collapse,
            stable,
            solvent,
        } = cues;

        Some(Self {
            filename: filename.to_string(),
            title: title.map(str::to_string),
            sentence: sentence.to_string(),
            sentence_counter,
            stability_keyword: stable,
            collapse_keyword: collapse,
            // off-topic sentences report no solvent evidence
            solvent_keyword: if result.solvent_present {
                solvent
            } else {
                Vec::new()
            },
            solvent_removal_flag: result.label,
            solvent_removal_flag_reason: result.reason,
            solvent: result.solvent_present,
            stability: result.stability_present,
        })
    }
}

/// One thermal-analysis sentence with its nearby temperature sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThermalRecord {
    pub filename: String,
    pub title: Option<String>,
    pub sentence: String,
    pub sentence_counter: usize,
    pub keyword: String,
    pub additional_sentences: Vec<String>,
    pub additional_sentence_idxs: Vec<usize>,
}

/// Per-document output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord<R> {
    pub intro: bool,
    pub num_sections: usize,
    pub sections: Vec<String>,
    pub num_sentences: usize,
    pub num_char: usize,
    pub search_results: Vec<R>,
}

impl<R> DocumentRecord<R> {
    pub fn new(summary: DocumentSummary, search_results: Vec<R>) -> Self {
        Self {
            intro: summary.intro,
            num_sections: summary.sections.len(),
            sections: summary.sections,
            num_sentences: summary.num_sentences,
            num_char: summary.num_char,
            search_results,
        }
    }
}

/// Document id to document record, ordered by id.
pub type Corpus<R> = BTreeMap<String, DocumentRecord<R>>;
