//! DOT highlighting mode for host code editors.
//!
//! Registration is an explicit step performed by whoever bootstraps the host
//! integration; nothing is registered at load time.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry;

pub const GRAPHVIZ_MODE_NAME: &str = "graphviz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    Comment,
    String,
    Keyword,
    Attribute,
    Identifier,
    Number,
    Operator,
    Bracket,
}

/// Highlighted span of one line, as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// Line-based tokenizer definition for one language.
#[derive(Debug, Clone)]
pub struct SyntaxMode {
    name: &'static str,
    mime_types: Vec<&'static str>,
    rules: &'static [(TokenKind, Regex)],
}

static GRAPHVIZ_RULES: LazyLock<Vec<(TokenKind, Regex)>> = LazyLock::new(|| {
    [
        (TokenKind::Comment, r"^(?://|#).*"),
        (TokenKind::Comment, r"^/\*.*?(?:\*/|$)"),
        (TokenKind::String, r#"^"(?:[^"\\]|\\.)*"?"#),
        (TokenKind::String, r"^<[^<>]*>"),
        (
            TokenKind::Keyword,
            r"(?i)^(?:strict|digraph|graph|subgraph|node|edge)\b",
        ),
        (TokenKind::Number, r"^-?(?:\d+\.?\d*|\.\d+)"),
        (TokenKind::Identifier, r"^[A-Za-z_\x80-\xff][A-Za-z0-9_\x80-\xff]*"),
        (TokenKind::Operator, r"^(?:->|--|=)"),
        (TokenKind::Bracket, r"^[\[\]{}]"),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("valid graphviz mode rule")))
    .collect()
});

impl SyntaxMode {
    #[must_use]
    pub fn graphviz() -> Self {
        Self {
            name: GRAPHVIZ_MODE_NAME,
            mime_types: registry::mime_types().collect(),
            rules: GRAPHVIZ_RULES.as_slice(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn mime_types(&self) -> &[&'static str] {
        &self.mime_types
    }

    /// Tokenizes a single line. Whitespace and punctuation without a rule are
    /// skipped. Identifiers followed by `=` are reported as attributes.
    #[must_use]
    pub fn tokenize_line(&self, line: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < line.len() {
            let rest = &line[pos..];
            let matched = self.rules.iter().find_map(|(kind, rule)| {
                rule.find(rest)
                    .filter(|found| !found.is_empty())
                    .map(|found| (*kind, found.end()))
            });
            match matched {
                Some((kind, len)) => {
                    let kind = if kind == TokenKind::Identifier
                        && rest[len..].trim_start().starts_with('=')
                    {
                        TokenKind::Attribute
                    } else {
                        kind
                    };
                    tokens.push(Token {
                        kind,
                        start: pos,
                        end: pos + len,
                    });
                    pos += len;
                }
                None => {
                    pos += rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }
        tokens
    }
}

/// Editor modes known to the host, keyed by name.
#[derive(Debug, Default)]
pub struct ModeRegistry {
    modes: IndexMap<&'static str, SyntaxMode>,
}

impl ModeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the Graphviz mode. Returns `false` if it was already present.
    pub fn define_graphviz_mode(&mut self) -> bool {
        if self.modes.contains_key(GRAPHVIZ_MODE_NAME) {
            return false;
        }
        let mode = SyntaxMode::graphviz();
        debug!(mime_types = mode.mime_types.len(), "graphviz syntax mode defined");
        self.modes.insert(mode.name, mode);
        true
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SyntaxMode> {
        self.modes.get(name)
    }

    #[must_use]
    pub fn mode_for_mime(&self, mime_type: &str) -> Option<&SyntaxMode> {
        self.modes.values().find(|mode| {
            mode.mime_types
                .iter()
                .any(|candidate| *candidate == mime_type)
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<(TokenKind, String)> {
        SyntaxMode::graphviz()
            .tokenize_line(line)
            .into_iter()
            .map(|token| (token.kind, line[token.start..token.end].to_owned()))
            .collect()
    }

    #[test]
    fn tokenizes_edge_statement_with_attributes() {
        let tokens = kinds(r#"a -> b [label="x", weight=2] // hot path"#);
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Identifier, "a".to_owned()),
                (TokenKind::Operator, "->".to_owned()),
                (TokenKind::Identifier, "b".to_owned()),
                (TokenKind::Bracket, "[".to_owned()),
                (TokenKind::Attribute, "label".to_owned()),
                (TokenKind::Operator, "=".to_owned()),
                (TokenKind::String, "\"x\"".to_owned()),
                (TokenKind::Attribute, "weight".to_owned()),
                (TokenKind::Operator, "=".to_owned()),
                (TokenKind::Number, "2".to_owned()),
                (TokenKind::Bracket, "]".to_owned()),
                (TokenKind::Comment, "// hot path".to_owned()),
            ]
        );
    }

    #[test]
    fn keywords_are_case_insensitive_and_whole_words() {
        let tokens = kinds("DiGraph nodes {");
        assert_eq!(tokens[0], (TokenKind::Keyword, "DiGraph".to_owned()));
        assert_eq!(tokens[1], (TokenKind::Identifier, "nodes".to_owned()));
        assert_eq!(tokens[2], (TokenKind::Bracket, "{".to_owned()));
    }

    #[test]
    fn graphviz_mode_registers_once() {
        let mut modes = ModeRegistry::new();
        assert!(modes.define_graphviz_mode());
        assert!(!modes.define_graphviz_mode());
        assert_eq!(modes.len(), 1);
        assert_eq!(
            modes
                .mode_for_mime(registry::DOT_MIME_TYPE)
                .map(SyntaxMode::name),
            Some(GRAPHVIZ_MODE_NAME)
        );
        assert!(modes.mode_for_mime("text/plain").is_none());
    }
}
