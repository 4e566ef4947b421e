//! Core types for parsed `.nlp` fixture files.

use layered_stability::DependencyEdge;
use serde::{Deserialize, Serialize};

/// A parsed `.nlp` fixture document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityFixture {
    /// Optional title from `# Title` header
    pub title: Option<String>,
    /// Cases separated by `---`
    pub cases: Vec<FixtureCase>,
}

/// One sentence with its parse and expectations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case index (0-based)
    pub index: usize,
    /// Sentence text; continuation lines are joined with a space
    pub text: String,
    /// Edges from `> edge:` lines, in file order
    pub edges: Vec<DependencyEdge>,
    /// Checks from `> expect:` lines
    pub checks: Vec<FieldCheck>,
    /// Line of the first sentence line, for error reporting
    pub source_line: usize,
}

/// Fields of a classification that a fixture can check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpectField {
    Label,
    Reason,
    Solvent,
    Stability,
    Discarded,
}

impl ExpectField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "label" => Some(Self::Label),
            "reason" => Some(Self::Reason),
            "solvent" => Some(Self::Solvent),
            "stability" => Some(Self::Stability),
            "discarded" => Some(Self::Discarded),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Reason => "reason",
            Self::Solvent => "solvent",
            Self::Stability => "stability",
            Self::Discarded => "discarded",
        }
    }
}

/// A single field check within an expectation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldCheck {
    pub field: ExpectField,
    /// Expected value with surrounding quotes removed
    pub expected: String,
    pub operator: CompareOp,
}

/// Comparison operators for field checks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompareOp {
    /// Exact equality: field=value
    #[default]
    Equals,
    /// Contains: field~=value (for string matching)
    Contains,
}

impl FixtureCase {
    /// Reference used in the expected-failures ledger, e.g. `C3`.
    pub fn reference(&self) -> String {
        format!("C{}", self.index)
    }
}

impl std::fmt::Display for ExpectField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareOp::Equals => write!(f, "="),
            CompareOp::Contains => write!(f, "~="),
        }
    }
}
