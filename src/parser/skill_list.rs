//! Normalization of the skills column into a list of skill strings.
//!
//! The dataset stores skills either as a real list or as the text of a
//! list literal, e.g. `['Python', "SQL"]`. Text is parsed by a small
//! recursive-descent parser that only understands quoted strings separated
//! by commas; nothing in a cell is ever evaluated.

use crate::utils::error::SkillFieldError;
use log::debug;
use serde::{Deserialize, Serialize};

/// A skills cell as it arrives from the data source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSkillField {
    /// Already structured (pass-through)
    List(Vec<String>),
    /// Text that may encode a list
    Text(String),
    /// Empty or absent cell
    Missing,
}

impl RawSkillField {
    /// Classify a CSV cell. Empty cells count as missing.
    pub fn from_cell(cell: &str) -> Self {
        if cell.trim().is_empty() {
            RawSkillField::Missing
        } else {
            RawSkillField::Text(cell.to_string())
        }
    }
}

/// How a row's skills were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillFieldKind {
    /// Structured list, passed through
    Structured,
    /// Bracketed text parsed into a list
    Parsed,
    /// Text without a leading `[`; contributes no skills
    Unstructured,
    /// Bracketed text that failed to parse; contributes no skills
    Malformed,
    /// Empty cell
    Missing,
}

/// Result of normalizing one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSkills {
    pub skills: Vec<String>,
    pub kind: SkillFieldKind,
}

impl NormalizedSkills {
    fn empty(kind: SkillFieldKind) -> Self {
        Self {
            skills: Vec::new(),
            kind,
        }
    }
}

/// Normalize a raw skills cell
///
/// **Public** - run once per row while the dataset is built
///
/// Non-list text yields an empty list rather than being kept as a single
/// skill; its kind is reported as `Unstructured` so callers can count it.
/// Malformed list text also yields an empty list and never fails.
pub fn normalize(raw: &RawSkillField) -> NormalizedSkills {
    match raw {
        RawSkillField::List(items) => NormalizedSkills {
            skills: items.clone(),
            kind: SkillFieldKind::Structured,
        },
        RawSkillField::Missing => NormalizedSkills::empty(SkillFieldKind::Missing),
        RawSkillField::Text(text) => {
            if !text.trim_start().starts_with('[') {
                return NormalizedSkills::empty(SkillFieldKind::Unstructured);
            }
            match parse_list_literal(text) {
                Ok(skills) => NormalizedSkills {
                    skills,
                    kind: SkillFieldKind::Parsed,
                },
                Err(e) => {
                    debug!("Malformed skill list {:?}: {}", text, e);
                    NormalizedSkills::empty(SkillFieldKind::Malformed)
                }
            }
        }
    }
}

/// Parse a list literal of quoted strings
///
/// **Public** - exposed for tests and for callers holding raw text
///
/// Accepts single- or double-quoted strings with `\\ \' \" \n \t \r`
/// escapes, optional whitespace, and one optional trailing comma.
pub fn parse_list_literal(input: &str) -> Result<Vec<String>, SkillFieldError> {
    let mut parser = ListParser::new(input);
    let items = parser.parse_list()?;
    parser.skip_whitespace();
    if let Some((offset, _)) = parser.peek() {
        return Err(SkillFieldError::TrailingInput(offset));
    }
    Ok(items)
}

/// Recursive-descent parser over the characters of one cell
struct ListParser<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    len: usize,
}

impl<'a> ListParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            len: input.len(),
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn offset(&mut self) -> usize {
        self.peek().map(|(i, _)| i).unwrap_or(self.len)
    }

    fn skip_whitespace(&mut self) {
        while let Some((_, c)) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.chars.next();
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), SkillFieldError> {
        match self.chars.next() {
            Some((_, c)) if c == expected => Ok(()),
            Some((offset, _)) => Err(SkillFieldError::Expected { expected, offset }),
            None => Err(SkillFieldError::UnexpectedEnd),
        }
    }

    // list := '[' ws (string ws (',' ws string ws)* ','? ws)? ']'
    fn parse_list(&mut self) -> Result<Vec<String>, SkillFieldError> {
        self.skip_whitespace();
        self.expect('[')?;

        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some((_, ']')) => {
                    self.chars.next();
                    return Ok(items);
                }
                Some((_, '\'')) | Some((_, '"')) => {
                    items.push(self.parse_string()?);
                    self.skip_whitespace();
                    match self.chars.next() {
                        Some((_, ',')) => continue,
                        Some((_, ']')) => return Ok(items),
                        Some((offset, found)) => {
                            return Err(SkillFieldError::UnexpectedChar { found, offset })
                        }
                        None => return Err(SkillFieldError::UnexpectedEnd),
                    }
                }
                Some((offset, found)) => {
                    return Err(SkillFieldError::UnexpectedChar { found, offset })
                }
                None => return Err(SkillFieldError::UnexpectedEnd),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, SkillFieldError> {
        let start = self.offset();
        let quote = match self.chars.next() {
            Some((_, q)) => q,
            None => return Err(SkillFieldError::UnexpectedEnd),
        };

        let mut value = String::new();
        loop {
            match self.chars.next() {
                None => return Err(SkillFieldError::UnterminatedString(start)),
                Some((_, c)) if c == quote => return Ok(value),
                Some((offset, '\\')) => self.parse_escape(offset, start, &mut value)?,
                Some((_, c)) => value.push(c),
            }
        }
    }

    /// Decode the escape following a backslash at `offset`
    fn parse_escape(
        &mut self,
        offset: usize,
        start: usize,
        value: &mut String,
    ) -> Result<(), SkillFieldError> {
        let c = match self.chars.next() {
            Some((_, c)) => c,
            None => return Err(SkillFieldError::UnterminatedString(start)),
        };

        match c {
            'n' => value.push('\n'),
            't' => value.push('\t'),
            'r' => value.push('\r'),
            'a' => value.push('\u{07}'),
            'b' => value.push('\u{08}'),
            'f' => value.push('\u{0c}'),
            'v' => value.push('\u{0b}'),
            '\\' | '\'' | '"' => value.push(c),
            // Line continuation
            '\n' => {}
            'x' => value.push(self.parse_hex(offset, 2)?),
            'u' => value.push(self.parse_hex(offset, 4)?),
            'U' => value.push(self.parse_hex(offset, 8)?),
            '0'..='7' => {
                let mut code = c.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match self.peek().and_then(|(_, d)| d.to_digit(8)) {
                        Some(d) => {
                            code = code * 8 + d;
                            self.chars.next();
                        }
                        None => break,
                    }
                }
                value.push(char::from_u32(code).ok_or(SkillFieldError::InvalidEscape(offset))?);
            }
            // Unknown escapes are kept verbatim
            _ => {
                value.push('\\');
                value.push(c);
            }
        }
        Ok(())
    }

    /// Exactly `digits` hex digits naming a Unicode scalar value
    fn parse_hex(&mut self, offset: usize, digits: usize) -> Result<char, SkillFieldError> {
        let mut code: u32 = 0;
        for _ in 0..digits {
            let digit = match self.chars.next() {
                Some((_, d)) => d.to_digit(16).ok_or(SkillFieldError::InvalidEscape(offset))?,
                None => return Err(SkillFieldError::InvalidEscape(offset)),
            };
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or(SkillFieldError::InvalidEscape(offset))
    }
}
