//! Inputs handed to the engine by the external segmenter and parser.

use serde::{Deserialize, Serialize};

/// One segmented sentence with its per-document position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

/// A head/dependent pair from an external dependency parse.
///
/// Root edges arrive with one side missing; they are legal input and are
/// skipped during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    #[serde(default)]
    pub head: Option<String>,
    #[serde(default)]
    pub dependent: Option<String>,
    #[serde(default)]
    pub relation: String,
}

impl DependencyEdge {
    pub fn new(
        head: impl Into<String>,
        relation: impl Into<String>,
        dependent: impl Into<String>,
    ) -> Self {
        Self {
            head: Some(head.into()),
            dependent: Some(dependent.into()),
            relation: relation.into(),
        }
    }

    /// Edge from the artificial root to `dependent`.
    pub fn root(dependent: impl Into<String>) -> Self {
        Self {
            head: None,
            dependent: Some(dependent.into()),
            relation: "root".to_string(),
        }
    }

    /// Both endpoint texts, when both are present.
    pub fn words(&self) -> Option<(&str, &str)> {
        match (&self.head, &self.dependent) {
            (Some(head), Some(dependent)) => Some((head.as_str(), dependent.as_str())),
            _ => None,
        }
    }
}
