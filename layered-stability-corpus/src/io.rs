//! Corpus input and output files.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::document::SourceDocument;
use crate::error::{CorpusError, CorpusResult};
use crate::record::Corpus;

/// Read a JSON array of documents.
pub fn read_documents(path: &Path) -> CorpusResult<Vec<SourceDocument>> {
    let file = File::open(path).map_err(|source| CorpusError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let documents: Vec<SourceDocument> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CorpusError::Json {
            path: path.display().to_string(),
            source,
        })?;
    tracing::info!(path = %path.display(), documents = documents.len(), "corpus loaded");
    Ok(documents)
}

/// Serialize `corpus` as a JSON object keyed by document id.
pub fn write_corpus<W: Write, R: Serialize>(
    writer: W,
    corpus: &Corpus<R>,
    pretty: bool,
) -> CorpusResult<()> {
    let mut writer = BufWriter::new(writer);
    let serialized = if pretty {
        serde_json::to_writer_pretty(&mut writer, corpus)
    } else {
        serde_json::to_writer(&mut writer, corpus)
    };
    serialized.map_err(CorpusError::Serialize)?;
    writeln!(writer).map_err(|source| CorpusError::Io {
        path: "<output>".to_string(),
        source,
    })?;
    writer.flush().map_err(|source| CorpusError::Io {
        path: "<output>".to_string(),
        source,
    })
}

/// Write `corpus` to `path`, creating or truncating it.
pub fn write_corpus_file<R: Serialize>(
    path: &Path,
    corpus: &Corpus<R>,
    pretty: bool,
) -> CorpusResult<()> {
    let file = File::create(path).map_err(|source| CorpusError::Io {
        path: path.display().to_string(),
        source,
    })?;
    write_corpus(file, corpus, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{CorpusDriver, DocumentMiner};

    #[test]
    fn test_read_mine_write() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("corpus.json");
        std::fs::write(
            &input,
            r#"[{"id": "a.html", "elements": [
                {"kind": "heading", "text": "Results"},
                {"kind": "paragraph", "text": "", "sentences": [
                    {"text": "The framework shows high crystallinity."}
                ]}
            ]}]"#,
        )
        .unwrap();

        let documents = read_documents(&input).unwrap();
        let corpus = CorpusDriver::default().mine(&documents);

        let output = dir.path().join("out.json");
        write_corpus_file(&output, &corpus, false).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["a.html"]["num_sentences"], 1);
        assert_eq!(
            written["a.html"]["search_results"][0]["solvent_removal_flag_reason"],
            "has stable kw"
        );
    }

    #[test]
    fn test_invalid_json_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.json");
        std::fs::write(&input, "{").unwrap();
        let err = read_documents(&input).unwrap_err();
        assert!(matches!(err, CorpusError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
