//! Thermal-analysis sentence scanner.
//!
//! Finds sentences that mention a thermogravimetric phrase and gathers the
//! temperature-bearing sentences around them, for later decomposition
//! temperature extraction.

use regex::{RegexSet, RegexSetBuilder};

use crate::document::{walk, SectionRules, SourceDocument, SourceSentence};
use crate::driver::DocumentMiner;
use crate::error::CorpusResult;
use crate::record::{DocumentRecord, ThermalRecord};

pub const THERMAL_PHRASES: &[&str] = &[
    "TGA",
    "TG",
    "thermogravimetric analysis",
    "thermo-gravimetric analysis",
    "thermal analysis",
    "thermal gravimetric",
    "thermal-gravimetric",
    "thermo gravimetric",
    "thermalgravimetric analysis",
    "weight loss",
    "temperature range",
    "mass loss",
    "decomposition",
];

pub const TEMPERATURE_UNITS: &[&str] = &[
    "\u{b0}C", "\u{b0} C", "degC", "\u{b0}F", "\u{b0} F", "degF", "\u{b0}K", "\u{b0} K", "degK", "K",
];

/// Sentences after the matching one, within its paragraph, searched for units.
pub const LOOKAHEAD: usize = 8;

#[derive(Debug, Clone)]
pub struct ThermalScanner {
    phrases: Vec<String>,
    matcher: RegexSet,
    units: Vec<String>,
    lookahead: usize,
}

impl ThermalScanner {
    pub fn new() -> CorpusResult<Self> {
        Self::with_vocabulary(THERMAL_PHRASES, TEMPERATURE_UNITS)
    }

    /// Phrases match case-insensitively; units match exactly.
    pub fn with_vocabulary(phrases: &[&str], units: &[&str]) -> CorpusResult<Self> {
        let matcher = RegexSetBuilder::new(phrases.iter().map(|p| regex::escape(p)))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            matcher,
            units: units.iter().map(|u| u.to_string()).collect(),
            lookahead: LOOKAHEAD,
        })
    }

    pub fn lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    /// Phrases found in `text`, in vocabulary order.
    pub fn phrases_in<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.matcher
            .matches(text)
            .into_iter()
            .map(|idx| self.phrases[idx].as_str())
            .collect()
    }

    fn has_unit(&self, text: &str) -> bool {
        self.units.iter().any(|unit| text.contains(unit.as_str()))
    }

    fn scan_paragraph(
        &self,
        document: &SourceDocument,
        title: Option<&str>,
        sentences: &[SourceSentence],
        first: usize,
        out: &mut Vec<ThermalRecord>,
    ) {
        for (i, sentence) in sentences.iter().enumerate() {
            let phrases = self.phrases_in(&sentence.text);
            if phrases.is_empty() {
                continue;
            }

            let end = i
                .saturating_add(self.lookahead)
                .saturating_add(1)
                .min(sentences.len());
            let (additional_sentences, additional_sentence_idxs): (Vec<_>, Vec<_>) = sentences
                [i..end]
                .iter()
                .enumerate()
                .filter(|(_, candidate)| self.has_unit(&candidate.text))
                .map(|(offset, candidate)| (candidate.text.clone(), first + i + offset))
                .unzip();
            if additional_sentences.is_empty() {
                continue;
            }

            for keyword in phrases {
                out.push(ThermalRecord {
                    filename: document.id.clone(),
                    title: title.map(str::to_string),
                    sentence: sentence.text.clone(),
                    sentence_counter: first + i,
                    keyword: keyword.to_string(),
                    additional_sentences: additional_sentences.clone(),
                    additional_sentence_idxs: additional_sentence_idxs.clone(),
                });
            }
        }
    }
}

impl DocumentMiner for ThermalScanner {
    type Record = ThermalRecord;

    fn mine_document(&self, document: &SourceDocument) -> DocumentRecord<ThermalRecord> {
        let mut paragraphs = Vec::new();
        let summary = walk(document, &SectionRules::THERMAL, |sentences, first| {
            paragraphs.push((sentences, first));
        });

        let mut results = Vec::new();
        for (sentences, first) in paragraphs {
            self.scan_paragraph(
                document,
                summary.title.as_deref(),
                sentences,
                first,
                &mut results,
            );
        }

        tracing::info!(
            document = %document.id,
            sentences = summary.num_sentences,
            thermal = results.len(),
            "document scanned"
        );
        DocumentRecord::new(summary, results)
    }
}
