//! Parser for `.nlp` fixture files.
//!
//! ```text
//! # Negated stable cues
//!
//! After solvent removal the framework was not stable.
//! > edge: stable -advmod-> not
//! > expect: label=-1, reason="negation with stable kw"
//! ---
//! The crystals were soaked in methanol.
//! > expect: discarded=true
//! ```

use layered_stability::DependencyEdge;

use crate::errors::{SpecError, SpecResult};
use crate::fixture::{CompareOp, ExpectField, FieldCheck, FixtureCase, StabilityFixture};

#[derive(Default)]
struct CaseLines<'a> {
    first_line: usize,
    text: Vec<&'a str>,
    edges: Vec<(usize, &'a str)>,
    expects: Vec<(usize, &'a str)>,
}

impl CaseLines<'_> {
    fn is_empty(&self) -> bool {
        self.text.is_empty() && self.edges.is_empty() && self.expects.is_empty()
    }
}

/// Parse a full `.nlp` fixture file.
pub fn parse_fixture(input: &str) -> SpecResult<StabilityFixture> {
    let mut title = None;
    let mut raw_cases: Vec<CaseLines> = vec![CaseLines::default()];

    for (line_num, line) in input.lines().enumerate() {
        let line_num = line_num + 1;
        let trimmed = line.trim();

        if trimmed.starts_with("# ") && title.is_none() && raw_cases.len() == 1 {
            title = Some(trimmed[2..].trim().to_string());
        } else if trimmed == "---" {
            raw_cases.push(CaseLines::default());
        } else if let Some(rest) = trimmed.strip_prefix("> ") {
            let current = raw_cases.last_mut().ok_or_else(|| SpecError::Parse {
                line: line_num,
                message: "directive outside of a case".to_string(),
            })?;
            let rest = rest.trim();
            if let Some(edge) = rest.strip_prefix("edge:") {
                current.edges.push((line_num, edge.trim()));
            } else if let Some(expect) = rest.strip_prefix("expect:") {
                current.expects.push((line_num, expect.trim()));
            } else {
                return Err(SpecError::Parse {
                    line: line_num,
                    message: format!("unknown directive '{}': expected 'edge:' or 'expect:'", rest),
                });
            }
        }
        // Skip empty lines and comments
        else if !trimmed.is_empty() && !trimmed.starts_with("//") {
            if let Some(current) = raw_cases.last_mut() {
                if current.text.is_empty() {
                    current.first_line = line_num;
                }
                current.text.push(trimmed);
            }
        }
    }

    let mut cases = Vec::new();
    for lines in raw_cases.into_iter().filter(|c| !c.is_empty()) {
        let index = cases.len();
        cases.push(build_case(index, lines)?);
    }

    Ok(StabilityFixture { title, cases })
}

fn build_case(index: usize, lines: CaseLines<'_>) -> SpecResult<FixtureCase> {
    let anchor = lines
        .expects
        .first()
        .or_else(|| lines.edges.first())
        .map_or(lines.first_line, |(line, _)| *line);

    if lines.text.is_empty() {
        return Err(SpecError::Parse {
            line: anchor,
            message: format!("case {} has no sentence text", index),
        });
    }
    if lines.expects.is_empty() {
        return Err(SpecError::Parse {
            line: lines.first_line,
            message: format!("case {} has no '> expect:' line", index),
        });
    }

    let edges = lines
        .edges
        .iter()
        .map(|(line, edge)| parse_edge(edge, *line))
        .collect::<SpecResult<Vec<_>>>()?;

    let mut checks = Vec::new();
    for (line, expect) in &lines.expects {
        checks.extend(parse_expectation(expect, *line)?);
    }

    Ok(FixtureCase {
        index,
        text: lines.text.join(" "),
        edges,
        checks,
        source_line: lines.first_line,
    })
}

fn side(word: &str) -> Option<String> {
    match word.trim() {
        "_" => None,
        word => Some(word.to_string()),
    }
}

/// Parse `head -relation-> dependent`, with `_` for an absent side.
pub fn parse_edge(input: &str, source_line: usize) -> SpecResult<DependencyEdge> {
    let malformed = || SpecError::Parse {
        line: source_line,
        message: format!("invalid edge '{}': expected 'head -relation-> dependent'", input),
    };

    let arrow = input.find("->").ok_or_else(malformed)?;
    let (left, dependent) = (&input[..arrow], &input[arrow + 2..]);
    let dash = left.rfind(" -").ok_or_else(malformed)?;
    let (head, relation) = (&left[..dash], left[dash + 2..].trim());

    if relation.is_empty() || head.trim().is_empty() || dependent.trim().is_empty() {
        return Err(malformed());
    }

    Ok(DependencyEdge {
        head: side(head),
        dependent: side(dependent),
        relation: relation.to_string(),
    })
}

/// Split on commas that are not inside double quotes.
fn split_checks(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (pos, ch) in input.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                parts.push(&input[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

/// Parse an expectation body: comma-separated field checks.
pub fn parse_expectation(input: &str, source_line: usize) -> SpecResult<Vec<FieldCheck>> {
    let mut checks = Vec::new();
    for part in split_checks(input) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        checks.push(parse_field_check(part, source_line)?);
    }
    Ok(checks)
}

/// Parse a single field check: field=value or field~=value.
fn parse_field_check(input: &str, source_line: usize) -> SpecResult<FieldCheck> {
    let (field, operator, expected) = if let Some(pos) = input.find("~=") {
        (&input[..pos], CompareOp::Contains, &input[pos + 2..])
    } else if let Some(pos) = input.find('=') {
        (&input[..pos], CompareOp::Equals, &input[pos + 1..])
    } else {
        return Err(SpecError::Parse {
            line: source_line,
            message: format!("invalid field check '{}': expected 'field=value'", input),
        });
    };

    let field = ExpectField::parse(field.trim()).ok_or_else(|| SpecError::Parse {
        line: source_line,
        message: format!(
            "unknown field '{}': expected label, reason, solvent, stability or discarded",
            field.trim()
        ),
    })?;

    let expected = expected.trim();
    let expected = expected
        .strip_prefix('"')
        .and_then(|e| e.strip_suffix('"'))
        .unwrap_or(expected);

    Ok(FieldCheck {
        field,
        expected: expected.to_string(),
        operator,
    })
}
