// Compiled resource path templates

use anyhow::{bail, Result};
use std::collections::HashMap;

use super::parser::PatternParser;

/// One segment of a path template: a fixed literal or a named variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Literal(String),
    Variable(String),
}

/// A compiled resource path pattern.
///
/// Compiled once per resource shape and shared read-only afterwards. Formats
/// a map of variable values into the canonical slash-delimited resource name,
/// and matches candidate names back into their variable values.
///
/// Values are inserted verbatim when formatting; callers are expected to
/// supply delimiter-free identifiers, matching the naming convention of the
/// remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

impl PathTemplate {
    pub fn new(pattern: &str) -> Result<Self> {
        let segments = PatternParser::parse(pattern)?;
        Ok(Self { segments })
    }

    /// Names of the variables declared by this template, in declaration order.
    pub fn variables(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Variable(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Render the template with the provided variable values.
    ///
    /// Every declared variable must be present in `values`; a missing value
    /// is reported immediately rather than producing a malformed name.
    pub fn format(&self, values: &HashMap<String, String>) -> Result<String> {
        let mut parts = Vec::with_capacity(self.segments.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => parts.push(literal.as_str()),
                Segment::Variable(name) => match values.get(name) {
                    Some(value) => parts.push(value.as_str()),
                    None => bail!("Missing required variable: {}", name),
                },
            }
        }

        Ok(parts.join("/"))
    }

    /// Match a candidate resource name against this template.
    ///
    /// The whole candidate must conform: same segment count, literal segments
    /// equal, every variable capturing at least one non-delimiter character.
    /// A non-conforming candidate yields `None`, never a partial mapping.
    pub fn matches(&self, candidate: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = candidate.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut captured = HashMap::new();

        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Variable(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    captured.insert(name.clone(), part.to_string());
                }
            }
        }

        Some(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_format_joins_in_declaration_order() {
        let template = PathTemplate::new("projects/{project}/locations/{location}").unwrap();
        let result = template
            .format(&values(&[("project", "proj1"), ("location", "us-west1")]))
            .unwrap();
        assert_eq!(result, "projects/proj1/locations/us-west1");
    }

    #[test]
    fn test_format_missing_variable_fails() {
        let template = PathTemplate::new("projects/{project}/locations/{location}").unwrap();
        let result = template.format(&values(&[("project", "proj1")]));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Missing required variable: location"));
    }

    #[test]
    fn test_format_ignores_extra_values() {
        let template = PathTemplate::new("projects/{project}").unwrap();
        let result = template
            .format(&values(&[("project", "p"), ("unused", "x")]))
            .unwrap();
        assert_eq!(result, "projects/p");
    }

    #[test]
    fn test_format_inserts_values_verbatim() {
        // No escaping is performed; delimiter-free values are the caller's
        // contract.
        let template = PathTemplate::new("projects/{project}").unwrap();
        let result = template.format(&values(&[("project", "a b%c")])).unwrap();
        assert_eq!(result, "projects/a b%c");
    }

    #[test]
    fn test_match_round_trips_format() {
        let template =
            PathTemplate::new("projects/{project}/locations/{location}/caPools/{ca_pool}")
                .unwrap();
        let input = values(&[
            ("project", "proj1"),
            ("location", "us-west1"),
            ("ca_pool", "pool1"),
        ]);
        let formatted = template.format(&input).unwrap();
        assert_eq!(template.matches(&formatted), Some(input));
    }

    #[test]
    fn test_match_wrong_segment_count_is_no_match() {
        let template = PathTemplate::new("projects/{project}/locations/{location}").unwrap();
        assert_eq!(template.matches("projects/p"), None);
        assert_eq!(template.matches("projects/p/locations/l/extra"), None);
    }

    #[test]
    fn test_match_literal_mismatch_is_no_match() {
        // Segment count matches, literal does not
        let template = PathTemplate::new("projects/{project}/locations/{location}").unwrap();
        assert_eq!(template.matches("projects/p/regions/l"), None);
    }

    #[test]
    fn test_match_empty_capture_is_no_match() {
        let template = PathTemplate::new("projects/{project}").unwrap();
        assert_eq!(template.matches("projects/"), None);
    }

    #[test]
    fn test_match_is_anchored() {
        // A prefix match is not a match
        let template = PathTemplate::new("projects/{project}").unwrap();
        assert_eq!(template.matches("projects/p/locations/l"), None);
    }

    #[test]
    fn test_match_variable_does_not_span_delimiter() {
        let template = PathTemplate::new("projects/{project}/locations/{location}").unwrap();
        assert_eq!(template.matches("projects/a/b/locations/l"), None);
    }

    #[test]
    fn test_match_literal_only_template() {
        let template = PathTemplate::new("projects").unwrap();
        assert_eq!(template.matches("projects"), Some(HashMap::new()));
        assert_eq!(template.matches("organizations"), None);
    }

    #[test]
    fn test_variables_in_order() {
        let template =
            PathTemplate::new("projects/{project}/locations/{location}/caPools/{ca_pool}")
                .unwrap();
        assert_eq!(template.variables(), vec!["project", "location", "ca_pool"]);
    }
}
