use crate::{CorpusDriver, DocumentMiner, Element, SourceDocument, SourceSentence};

#[test]
fn test_corpus_json_shape() {
    let documents = vec![SourceDocument {
        id: "jacs/x.html".to_string(),
        elements: vec![
            Element::Title {
                text: "T".to_string(),
            },
            Element::Heading {
                text: "Experimental".to_string(),
                sentences: Vec::new(),
            },
            Element::Paragraph {
                text: "The framework shows high crystallinity.".to_string(),
                sentences: vec![SourceSentence::new("The framework shows high crystallinity.")],
            },
        ],
    }];
    let corpus = CorpusDriver::default().mine(&documents);

    insta::assert_snapshot!(serde_json::to_string_pretty(&corpus).unwrap(), @r###"
    {
      "jacs/x.html": {
        "intro": false,
        "num_sections": 1,
        "sections": [
          "Experimental"
        ],
        "num_sentences": 1,
        "num_char": 39,
        "search_results": [
          {
            "filename": "jacs/x.html",
            "title": "T",
            "sentence": "The framework shows high crystallinity.",
            "sentence_counter": 0,
            "stability_keyword": [
              "crystallinity"
            ],
            "collapse_keyword": [],
            "solvent_keyword": [],
            "solvent_removal_flag": 1,
            "solvent_removal_flag_reason": "has stable kw",
            "solvent": false,
            "stability": true
          }
        ]
      }
    }
    "###);
}
