//! Text templates and placeholder substitution.
//!
//! A [`Template`] is an immutable, named blob of text. It is read once per
//! artifact, rendered against a [`VariableSet`], and then discarded.
//!
//! ## Placeholder Syntax
//!
//! | Form        | Meaning                                    |
//! |-------------|--------------------------------------------|
//! | `$name`     | Value of `name` (longest identifier match) |
//! | `${name}`   | Value of `name`, delimited                 |
//! | `$$`        | A literal `$`                              |
//!
//! Identifiers are ASCII: a letter or `_`, then letters, digits or `_`.
//! Every other use of `$` is rejected with [`DomainError::InvalidPlaceholder`],
//! so a Makefile template has to spell `$(VAR)` as `$$(VAR)`.
//!
//! There are no loops, conditionals or filters.

use std::fmt;

use crate::domain::{entities::variables::VariableSet, error::DomainError};

/// An immutable template: a name (for error messages) and its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    source: TemplateSource,
}

impl Template {
    pub fn new(name: impl Into<String>, source: impl Into<TemplateSource>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    /// Substitute every placeholder with its value from `variables`.
    ///
    /// # Errors
    ///
    /// - [`DomainError::MissingVariable`] naming the first placeholder, in
    ///   reading order, whose key is absent from `variables`.
    /// - [`DomainError::InvalidPlaceholder`] for a malformed `$` sequence.
    ///
    /// Unused keys in `variables` are ignored.
    pub fn render(&self, variables: &VariableSet) -> Result<String, DomainError> {
        let mut out = String::with_capacity(self.source().len());

        for segment in self.segments() {
            match segment? {
                Segment::Text(text) => out.push_str(text),
                Segment::Dollar => out.push('$'),
                Segment::Placeholder(key) => {
                    let value =
                        variables
                            .get(key)
                            .ok_or_else(|| DomainError::MissingVariable {
                                name: key.to_string(),
                                template: self.name.clone(),
                            })?;
                    out.push_str(value);
                }
            }
        }

        Ok(out)
    }

    /// Distinct placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Result<Vec<&str>, DomainError> {
        let mut names: Vec<&str> = Vec::new();
        for segment in self.segments() {
            if let Segment::Placeholder(key) = segment? {
                if !names.contains(&key) {
                    names.push(key);
                }
            }
        }
        Ok(names)
    }

    fn segments(&self) -> Segments<'_> {
        Segments {
            template: &self.name,
            source: self.source(),
            pos: 0,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Source of template content: either compile-time or runtime.
///
/// `Static` borrows text compiled into the binary (`include_str!`), `Owned`
/// holds text read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

// ============================================================================
// Scanner
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Dollar,
    Placeholder(&'a str),
}

struct Segments<'a> {
    template: &'a str,
    source: &'a str,
    pos: usize,
}

impl<'a> Segments<'a> {
    fn invalid_at(&self, offset: usize) -> DomainError {
        let before = &self.source[..offset];
        let line = before.matches('\n').count() + 1;
        let column = match before.rfind('\n') {
            Some(nl) => before[nl + 1..].chars().count() + 1,
            None => before.chars().count() + 1,
        };
        DomainError::InvalidPlaceholder {
            template: self.template.to_string(),
            line,
            column,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<Segment<'a>, DomainError>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source;
        let rest = &source[self.pos..];
        if rest.is_empty() {
            return None;
        }

        // Plain text up to the next '$'.
        if !rest.starts_with('$') {
            let end = rest.find('$').unwrap_or(rest.len());
            self.pos += end;
            return Some(Ok(Segment::Text(&rest[..end])));
        }

        let dollar = self.pos;
        let after = &rest[1..];

        if after.starts_with('$') {
            self.pos += 2;
            return Some(Ok(Segment::Dollar));
        }

        if let Some(body) = after.strip_prefix('{') {
            return match body.find('}') {
                Some(end) if identifier_len(&body[..end]) == end && end > 0 => {
                    self.pos += end + 3;
                    Some(Ok(Segment::Placeholder(&body[..end])))
                }
                _ => {
                    self.pos = source.len();
                    Some(Err(self.invalid_at(dollar)))
                }
            };
        }

        match identifier_len(after) {
            0 => {
                self.pos = source.len();
                Some(Err(self.invalid_at(dollar)))
            }
            len => {
                self.pos += len + 1;
                Some(Ok(Segment::Placeholder(&after[..len])))
            }
        }
    }
}

/// Byte length of the identifier at the start of `s` (0 if none).
fn identifier_len(s: &str) -> usize {
    let mut len = 0;
    for (i, c) in s.char_indices() {
        let ok = if i == 0 {
            c.is_ascii_alphabetic() || c == '_'
        } else {
            c.is_ascii_alphanumeric() || c == '_'
        };
        if !ok {
            break;
        }
        len = i + c.len_utf8();
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> VariableSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn renders_bare_and_braced_placeholders() {
        let t = Template::new("t", "Hello $name, from ${place}!");
        let out = t
            .render(&vars(&[("name", "Ada"), ("place", "London")]))
            .unwrap();
        assert_eq!(out, "Hello Ada, from London!");
    }

    #[test]
    fn bare_placeholder_takes_longest_identifier() {
        let t = Template::new("t", "$file_name.py ${file}_x");
        let out = t
            .render(&vars(&[("file_name", "a"), ("file", "b")]))
            .unwrap();
        assert_eq!(out, "a.py b_x");
    }

    #[test]
    fn double_dollar_is_literal() {
        let t = Template::new("Makefile.tmpl", "test:\n\t$$(PYTHON) -m pytest # $name\n");
        let out = t.render(&vars(&[("name", "demo")])).unwrap();
        assert_eq!(out, "test:\n\t$(PYTHON) -m pytest # demo\n");
    }

    #[test]
    fn missing_variable_names_first_unresolved() {
        let t = Template::new("greeting", "Hello $name and $other");
        let err = t.render(&VariableSet::new()).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingVariable {
                name: "name".into(),
                template: "greeting".into(),
            }
        );
    }

    #[test]
    fn unused_variables_are_ignored() {
        let t = Template::new("t", "plain text");
        let out = t.render(&vars(&[("unused", "x")])).unwrap();
        assert_eq!(out, "plain text");
    }

    #[test]
    fn invalid_placeholder_reports_position() {
        let t = Template::new("t", "ok\n  cost: $5");
        let err = t.render(&VariableSet::new()).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidPlaceholder {
                template: "t".into(),
                line: 2,
                column: 9,
            }
        );
    }

    #[test]
    fn unterminated_brace_is_invalid() {
        let t = Template::new("t", "${name");
        assert!(matches!(
            t.render(&vars(&[("name", "x")])),
            Err(DomainError::InvalidPlaceholder { line: 1, column: 1, .. })
        ));
    }

    #[test]
    fn braced_non_identifier_is_invalid() {
        for src in ["${}", "${ name}", "${1abc}"] {
            let t = Template::new("t", src);
            assert!(t.render(&VariableSet::new()).is_err(), "accepted {src:?}");
        }
    }

    #[test]
    fn trailing_dollar_is_invalid() {
        let t = Template::new("t", "price$");
        assert!(matches!(
            t.render(&VariableSet::new()),
            Err(DomainError::InvalidPlaceholder { .. })
        ));
    }

    #[test]
    fn rendered_output_has_no_placeholders_left() {
        let t = Template::new("t", "$a ${b} $$c $a");
        let out = t.render(&vars(&[("a", "1"), ("b", "2")])).unwrap();
        assert_eq!(out, "1 2 $c 1");
    }

    #[test]
    fn non_ascii_text_passes_through() {
        let t = Template::new("t", "héllo ${name} — ok");
        let out = t.render(&vars(&[("name", "wörld")])).unwrap();
        assert_eq!(out, "héllo wörld — ok");
    }

    #[test]
    fn placeholders_are_distinct_and_ordered() {
        let t = Template::new("t", "$name ${file} $name $$x $author");
        assert_eq!(t.placeholders().unwrap(), vec!["name", "file", "author"]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let t = Template::new("t", "$a-$b-$c");
        let v = vars(&[("a", "1"), ("b", "2"), ("c", "3")]);
        assert_eq!(t.render(&v).unwrap(), t.render(&v).unwrap());
    }
}
