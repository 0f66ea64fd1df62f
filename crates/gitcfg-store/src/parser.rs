//! Parser for the git configuration file format
//!
//! Reads `[section]` / `[section "subsection"]` headers and `name = value`
//! variables into a [`ConfigStore`]:
//!
//! ```text
//! # comment
//! [core]
//!     editor = vim
//!     bare               ; implicit "true"
//! [http "https://example.com"]
//!     sslVerify = false
//! ```
//!
//! Parsed values carry [`crate::Scope::NONE`]; the caller assigns a scope
//! when merging the result into an effective configuration. The variables
//! are also kept in file order as [`Entry`] values, for callers that act on
//! directives at the point they appear (`include.path`).

use std::iter::Peekable;
use std::str::Chars;

use crate::{ConfigStore, ConfigValue, Error, Result, Scope, SyntaxErrorKind};

/// One variable as it appeared in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Lower-cased section, with the subsection joined by a dot
    pub section: String,
    /// Lower-cased variable name
    pub key: String,
    pub value: String,
    /// Line the variable starts on
    pub line: usize,
}

impl Entry {
    /// Whether this entry is the `section.key` pair given in normalized form.
    pub fn is(&self, section: &str, key: &str) -> bool {
        self.section == section && self.key == key
    }
}

/// Result of a successful parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub store: ConfigStore,
    /// Every variable in file order
    pub entries: Vec<Entry>,
    /// Line number parsing stopped at: one more than the newlines consumed.
    pub lines: usize,
}

/// Parse configuration text.
///
/// `file` labels the input in error messages. Errors report the line at
/// which parsing stopped.
///
/// # Example
/// ```
/// use gitcfg_store::parse;
///
/// let parsed = parse(b"[user]\n\tname = Jane\n", "inline").unwrap();
/// assert_eq!(parsed.store.get("user.name"), "Jane");
/// assert_eq!(parsed.lines, 3);
/// ```
pub fn parse(bytes: &[u8], file: &str) -> Result<Parsed> {
    let text = std::str::from_utf8(bytes).map_err(|e| Error::Syntax {
        file: file.to_string(),
        line: 1 + bytes[..e.valid_up_to()]
            .iter()
            .filter(|&&b| b == b'\n')
            .count(),
        kind: SyntaxErrorKind::InvalidUtf8,
    })?;

    Parser::new(text, file).run()
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    file: &'a str,
    line: usize,
    section: Option<String>,
    entries: Vec<Entry>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, file: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            file,
            line: 1,
            section: None,
            entries: Vec::new(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    fn error(&self, kind: SyntaxErrorKind) -> Error {
        Error::Syntax {
            file: self.file.to_string(),
            line: self.line,
            kind,
        }
    }

    fn run(mut self) -> Result<Parsed> {
        if self.peek() == Some('\u{feff}') {
            self.next();
        }

        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' => {
                    self.next();
                }
                '#' | ';' => self.skip_comment(),
                '[' => {
                    self.next();
                    self.parse_section_header()?;
                }
                c if c.is_ascii_alphabetic() => self.parse_variable()?,
                _ => return Err(self.error(SyntaxErrorKind::InvalidKeyChar)),
            }
        }

        let mut store = ConfigStore::new();
        for entry in &self.entries {
            store.insert(
                entry.section.clone(),
                entry.key.clone(),
                ConfigValue::new(Scope::NONE, entry.value.clone()),
            );
        }

        Ok(Parsed {
            store,
            entries: self.entries,
            lines: self.line,
        })
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.next();
        }
    }

    fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.next();
        }
    }

    fn parse_section_header(&mut self) -> Result<()> {
        self.skip_blanks();

        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                name.push(c.to_ascii_lowercase());
                self.next();
            } else {
                break;
            }
        }
        if name.is_empty() {
            return Err(self.error(SyntaxErrorKind::InvalidSectionName));
        }

        self.skip_blanks();
        let section = match self.peek() {
            Some(']') => name,
            Some('"') => {
                self.next();
                let subsection = self.parse_subsection()?;
                self.skip_blanks();
                if self.peek() != Some(']') {
                    return Err(self.error(SyntaxErrorKind::InvalidSectionName));
                }
                format!("{name}.{}", subsection.to_lowercase())
            }
            _ => return Err(self.error(SyntaxErrorKind::InvalidSectionName)),
        };
        self.next();

        self.section = Some(section);
        Ok(())
    }

    /// Reads up to and including the closing quote.
    fn parse_subsection(&mut self) -> Result<String> {
        let mut subsection = String::new();
        loop {
            match self.peek() {
                None | Some('\n') => return Err(self.error(SyntaxErrorKind::UnterminatedQuote)),
                Some('"') => {
                    self.next();
                    return Ok(subsection);
                }
                Some('\\') => {
                    self.next();
                    match self.peek() {
                        None | Some('\n') => {
                            return Err(self.error(SyntaxErrorKind::UnterminatedQuote));
                        }
                        Some(c) => {
                            subsection.push(c);
                            self.next();
                        }
                    }
                }
                Some(c) => {
                    subsection.push(c);
                    self.next();
                }
            }
        }
    }

    fn parse_variable(&mut self) -> Result<()> {
        let line = self.line;
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '-' {
                name.push(c.to_ascii_lowercase());
                self.next();
            } else {
                break;
            }
        }

        let Some(section) = self.section.clone() else {
            return Err(self.error(SyntaxErrorKind::MissingSection));
        };

        self.skip_blanks();
        let value = match self.peek() {
            Some('=') => {
                self.next();
                self.parse_value()?
            }
            None | Some('\n' | '\r' | '#' | ';') => "true".to_string(),
            Some(_) => return Err(self.error(SyntaxErrorKind::InvalidKeyChar)),
        };

        self.entries.push(Entry {
            section,
            key: name,
            value,
            line,
        });
        Ok(())
    }

    /// Reads a value up to (not including) the end of its line or a comment.
    fn parse_value(&mut self) -> Result<String> {
        self.skip_blanks();

        let mut value = String::new();
        // Length of `value` excluding trailing unquoted whitespace
        let mut kept = 0;
        let mut quoted = false;

        loop {
            match self.peek() {
                None | Some('\n') => {
                    if quoted {
                        return Err(self.error(SyntaxErrorKind::UnterminatedQuote));
                    }
                    break;
                }
                Some('#' | ';') if !quoted => break,
                Some('"') => {
                    self.next();
                    quoted = !quoted;
                    kept = value.len();
                }
                Some('\\') => {
                    self.next();
                    match self.next() {
                        Some('\n') => continue,
                        Some('\r') if self.peek() == Some('\n') => {
                            self.next();
                            continue;
                        }
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some('b') => value.push('\u{8}'),
                        Some('\\') => value.push('\\'),
                        Some('"') => value.push('"'),
                        _ => return Err(self.error(SyntaxErrorKind::InvalidEscape)),
                    }
                    kept = value.len();
                }
                Some(c) => {
                    self.next();
                    value.push(c);
                    if quoted || !matches!(c, ' ' | '\t' | '\r') {
                        kept = value.len();
                    }
                }
            }
        }

        value.truncate(kept);
        Ok(value)
    }
}
