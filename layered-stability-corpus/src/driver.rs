//! Corpus-level mining.

use std::collections::BTreeMap;

use layered_stability::{DecisionSynthesizer, EngineConfig};
use rayon::prelude::*;
use serde::Serialize;

use crate::document::{walk, SectionRules, SourceDocument};
use crate::record::{Corpus, DocumentRecord, StabilityRecord};

/// Turns one document into one record; corpus iteration comes for free.
pub trait DocumentMiner: Sync {
    type Record: Serialize + Send;

    fn mine_document(&self, document: &SourceDocument) -> DocumentRecord<Self::Record>;

    fn mine(&self, documents: &[SourceDocument]) -> Corpus<Self::Record> {
        collect(documents.iter().map(|doc| (doc.id.clone(), self.mine_document(doc))))
    }

    /// Same output as [`mine`](Self::mine), documents processed on the rayon pool.
    fn mine_parallel(&self, documents: &[SourceDocument]) -> Corpus<Self::Record> {
        let mined: Vec<_> = documents
            .par_iter()
            .map(|doc| (doc.id.clone(), self.mine_document(doc)))
            .collect();
        collect(mined)
    }
}

fn collect<R>(mined: impl IntoIterator<Item = (String, DocumentRecord<R>)>) -> Corpus<R> {
    let mut corpus = BTreeMap::new();
    for (id, record) in mined {
        if corpus.insert(id.clone(), record).is_some() {
            tracing::warn!(document = %id, "duplicate document id, keeping the later one");
        }
    }
    corpus
}

/// Walks documents and classifies every sentence of every mined section.
#[derive(Debug, Clone, Default)]
pub struct CorpusDriver {
    engine: DecisionSynthesizer,
}

impl CorpusDriver {
    pub fn new(engine: DecisionSynthesizer) -> Self {
        Self { engine }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(DecisionSynthesizer::new(config))
    }

    pub fn engine(&self) -> &DecisionSynthesizer {
        &self.engine
    }
}

impl DocumentMiner for CorpusDriver {
    type Record = StabilityRecord;

    fn mine_document(&self, document: &SourceDocument) -> DocumentRecord<StabilityRecord> {
        if document.paragraph_count() == 0 {
            tracing::warn!(document = %document.id, "document has no paragraphs");
        }

        let mut paragraphs = Vec::new();
        let summary = walk(document, &SectionRules::SOLVENT, |sentences, first| {
            paragraphs.push((sentences, first));
        });

        let mut results = Vec::new();
        for (sentences, first) in paragraphs {
            for (offset, sentence) in sentences.iter().enumerate() {
                let analysis = self.engine.analyze(&sentence.text, &sentence.edges);
                results.extend(StabilityRecord::from_analysis(
                    &document.id,
                    summary.title.as_deref(),
                    &sentence.text,
                    first + offset,
                    analysis,
                ));
            }
        }

        tracing::info!(
            document = %document.id,
            sentences = summary.num_sentences,
            classified = results.len(),
            "document mined"
        );
        DocumentRecord::new(summary, results)
    }
}
