#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Corpus walking for `layered-stability`.
//!
//! - [`document`] - segmented source documents and section rules
//! - [`driver`] - solvent-removal stability mining over a corpus
//! - [`thermal`] - thermal-analysis sentence scanning
//! - [`record`] - JSON output records
//! - [`io`] - corpus files in and out

pub mod document;
pub mod driver;
pub mod error;
pub mod io;
pub mod record;
pub mod thermal;

pub use document::{walk, DocumentSummary, Element, SectionRules, SourceDocument, SourceSentence};
pub use driver::{CorpusDriver, DocumentMiner};
pub use error::{CorpusError, CorpusResult};
pub use io::{read_documents, write_corpus, write_corpus_file};
pub use record::{Corpus, DocumentRecord, StabilityRecord, ThermalRecord};
pub use thermal::{ThermalScanner, LOOKAHEAD, TEMPERATURE_UNITS, THERMAL_PHRASES};

#[cfg(test)]
mod tests;
