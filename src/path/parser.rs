// Pattern parser for resource path templates

use anyhow::{bail, Result};
use std::collections::HashSet;

use super::template::Segment;

/// Parses a pattern like `projects/{project}/locations/{location}` into an
/// ordered list of literal and variable segments.
pub struct PatternParser {
    input: String,
    pos: usize,
}

impl PatternParser {
    pub fn parse(pattern: &str) -> Result<Vec<Segment>> {
        let mut parser = Self {
            input: pattern.to_string(),
            pos: 0,
        };
        parser.parse_segments()
    }

    fn parse_segments(&mut self) -> Result<Vec<Segment>> {
        if self.input.is_empty() {
            bail!("Pattern must not be empty");
        }

        let mut segments = Vec::new();
        let mut seen_names = HashSet::new();

        loop {
            let segment = if self.peek_char() == Some('{') {
                let name = self.parse_variable()?;
                if !seen_names.insert(name.clone()) {
                    bail!("Duplicate variable '{}' in pattern", name);
                }
                Segment::Variable(name)
            } else {
                Segment::Literal(self.parse_literal()?)
            };
            segments.push(segment);

            match self.peek_char() {
                Some('/') => {
                    self.consume_char()?;
                }
                Some(ch) => bail!(
                    "Unexpected character '{}' at position {}",
                    ch,
                    self.pos
                ),
                None => break,
            }
        }

        Ok(segments)
    }

    fn parse_variable(&mut self) -> Result<String> {
        self.expect_char('{')?;

        let mut name = String::new();
        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || ch == '_' {
                name.push(self.consume_char()?);
            } else {
                break;
            }
        }

        self.expect_char('}')?;

        if name.is_empty() {
            bail!("Empty variable name at position {}", self.pos);
        }

        Ok(name)
    }

    fn parse_literal(&mut self) -> Result<String> {
        let mut literal = String::new();

        while let Some(ch) = self.peek_char() {
            match ch {
                '/' => break,
                '{' | '}' => bail!(
                    "Unexpected '{}' inside literal segment at position {}",
                    ch,
                    self.pos
                ),
                _ => literal.push(self.consume_char()?),
            }
        }

        if literal.is_empty() {
            bail!("Empty segment at position {}", self.pos);
        }

        Ok(literal)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn consume_char(&mut self) -> Result<char> {
        let ch = self
            .peek_char()
            .ok_or_else(|| anyhow::anyhow!("Unexpected end of pattern at position {}", self.pos))?;
        self.pos += ch.len_utf8();
        Ok(ch)
    }

    fn expect_char(&mut self, expected: char) -> Result<()> {
        match self.peek_char() {
            Some(ch) if ch == expected => {
                self.consume_char()?;
                Ok(())
            }
            Some(ch) => bail!(
                "Expected '{}' but found '{}' at position {}",
                expected,
                ch,
                self.pos
            ),
            None => bail!("Expected '{}' but found end of pattern", expected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_only_pattern() {
        let segments = PatternParser::parse("projects").unwrap();
        assert_eq!(segments, vec![Segment::Literal("projects".to_string())]);
    }

    #[test]
    fn test_parse_alternating_segments() {
        let segments = PatternParser::parse("projects/{project}/locations/{location}").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal("projects".to_string()),
                Segment::Variable("project".to_string()),
                Segment::Literal("locations".to_string()),
                Segment::Variable("location".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_empty_pattern_fails() {
        let result = PatternParser::parse("");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_empty_segment_fails() {
        let result = PatternParser::parse("projects//locations");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Empty segment"));
    }

    #[test]
    fn test_parse_empty_variable_name_fails() {
        let result = PatternParser::parse("projects/{}");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Empty variable name"));
    }

    #[test]
    fn test_parse_duplicate_variable_fails() {
        let result = PatternParser::parse("a/{x}/b/{x}");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Duplicate variable 'x'"));
    }

    #[test]
    fn test_parse_unclosed_brace_fails() {
        let result = PatternParser::parse("projects/{project");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_brace_inside_literal_fails() {
        let result = PatternParser::parse("pro{ject}s/{x}");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_partial_variable_segment_fails() {
        // A variable must span the whole segment
        let result = PatternParser::parse("{project}s");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_invalid_character_in_variable_fails() {
        let result = PatternParser::parse("projects/{pro-ject}");
        assert!(result.is_err());
    }
}
