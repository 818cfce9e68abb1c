//! Recognizer for the two grammar shapes a slice is built from:
//!
//! ```text
//! class <Name> ... { <members> }
//! public <Type> <Name> { get; set; }
//! ```
//!
//! Only members declared directly in the body of the first class are
//! considered. Fields, constructors, methods and nested types are ignored.
//! Properties that look like properties but do not have exactly a
//! `{ get; set; }` accessor pair are skipped and reported.

use std::fmt;

use serde::Serialize;

use crate::{
    Error, FieldSpec, ModelSpec, Result,
    lexer::{Token, TokenKind, tokenize},
    model::is_excluded,
};

/// Words that may precede a member's type without being part of a name.
const MODIFIERS: &[&str] = &[
    "public", "static", "virtual", "override", "abstract", "sealed", "new", "readonly",
    "required", "unsafe", "extern", "partial", "async", "volatile", "const",
];

/// Keywords that start a nested type declaration.
const TYPE_KEYWORDS: &[&str] = &[
    "class", "struct", "record", "interface", "enum", "delegate", "event",
];

/// Outcome of extracting a model from source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub model: ModelSpec,
    /// Properties dropped by the exclusion rule (identity and navigation).
    pub excluded: Vec<FieldSpec>,
    /// Property-like members that did not match the recognized shape.
    pub skipped: Vec<SkippedMember>,
}

/// A member that was not turned into a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedMember {
    pub name: String,
    /// 1-based line of the member's name.
    pub line: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Accessor block is something other than `{ get; set; }`.
    Accessors { found: String },
    /// `public T Name => expr;`
    ExpressionBodied,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Accessors { found } => {
                write!(f, "accessors `{}` are not `{{ get; set; }}`", found)
            }
            SkipReason::ExpressionBodied => write!(f, "expression-bodied property"),
        }
    }
}

/// Extract the model of the first class declared in `src`.
///
/// `filename` is only used to label diagnostics.
pub fn extract(src: &str, filename: &str) -> Result<Extraction> {
    let parser = Parser {
        src,
        filename,
        tokens: tokenize(src),
    };
    parser.extract()
}

enum Member {
    Property(FieldSpec),
    Skipped(SkippedMember),
    Ignored,
}

struct Parser<'a> {
    src: &'a str,
    filename: &'a str,
    tokens: Vec<Token>,
}

impl Parser<'_> {
    fn extract(&self) -> Result<Extraction> {
        let (name_idx, class_name) = self
            .find_class()
            .ok_or_else(|| Error::missing_class(self.src, self.filename))?;
        let (open, close) = self.class_body(name_idx, &class_name)?;

        let mut fields = Vec::new();
        let mut excluded = Vec::new();
        let mut skipped = Vec::new();

        let mut i = open + 1;
        let mut depth = 0usize;
        while i < close {
            let token = self.tokens[i];
            match token.kind {
                TokenKind::Punct('{') => depth += 1,
                TokenKind::Punct('}') => depth = depth.saturating_sub(1),
                _ if depth == 0 && token.is_word(self.src, "public") => {
                    let (member, next) = self.member(i, close);
                    match member {
                        Member::Property(field) if is_excluded(&field) => excluded.push(field),
                        Member::Property(field) => fields.push(field),
                        Member::Skipped(member) => skipped.push(member),
                        Member::Ignored => {}
                    }
                    if next > i + 1 {
                        i = next;
                        continue;
                    }
                }
                _ => {}
            }
            i += 1;
        }

        tracing::debug!(
            class = %class_name,
            fields = fields.len(),
            excluded = excluded.len(),
            skipped = skipped.len(),
            "extracted model"
        );

        Ok(Extraction {
            model: ModelSpec::new(class_name, fields),
            excluded,
            skipped,
        })
    }

    /// First `class <Name>` pair; returns the index of the name token.
    fn find_class(&self) -> Option<(usize, String)> {
        self.tokens.windows(2).enumerate().find_map(|(i, pair)| {
            (pair[0].is_word(self.src, "class") && pair[1].is_ident())
                .then(|| (i + 1, pair[1].text(self.src).to_string()))
        })
    }

    /// Token indices of the braces delimiting the class body.
    ///
    /// A body-less declaration (`class Name;`) yields an empty body.
    fn class_body(&self, name_idx: usize, name: &str) -> Result<(usize, usize)> {
        let name_token = self.tokens[name_idx];
        let open = self.tokens[name_idx + 1..]
            .iter()
            .position(|t| t.is_punct('{') || t.is_punct(';'))
            .map(|offset| name_idx + 1 + offset)
            .ok_or_else(|| {
                Error::unterminated_class(name, self.src, self.filename, name_token.span())
            })?;

        if self.tokens[open].is_punct(';') {
            return Ok((open, open + 1));
        }

        self.matching_brace(open, self.tokens.len())
            .map(|close| (open, close))
            .ok_or_else(|| {
                Error::unterminated_class(name, self.src, self.filename, self.tokens[open].span())
            })
    }

    /// Index of the `}` closing the `{` at `open`, searching before `limit`.
    fn matching_brace(&self, open: usize, limit: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (i, token) in self.tokens[..limit].iter().enumerate().skip(open) {
            if token.is_punct('{') {
                depth += 1;
            } else if token.is_punct('}') {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
        }
        None
    }

    /// Recognize the member starting at the `public` token `start`.
    ///
    /// Returns the member and the index to resume scanning from. Anything that
    /// is not a property resumes right after `public` so brace depth keeps
    /// being tracked by the caller.
    fn member(&self, start: usize, limit: usize) -> (Member, usize) {
        let resume = start + 1;
        let mut parts: Vec<Token> = Vec::new();
        let mut nesting = 0usize;

        for i in start + 1..limit {
            let token = self.tokens[i];

            if nesting == 0 {
                if TYPE_KEYWORDS.contains(&token.text(self.src)) && self.all_modifiers(&parts) {
                    return (Member::Ignored, resume);
                }
                match token.kind {
                    TokenKind::Punct('{') => return self.property(&parts, i, limit),
                    TokenKind::FatArrow => {
                        return match self.split_name(&parts) {
                            Some(name) => (
                                Member::Skipped(SkippedMember {
                                    name: name.text(self.src).to_string(),
                                    line: self.line_of(name),
                                    reason: SkipReason::ExpressionBodied,
                                }),
                                resume,
                            ),
                            None => (Member::Ignored, resume),
                        };
                    }
                    TokenKind::Punct(';' | '=' | '}') => return (Member::Ignored, resume),
                    TokenKind::Punct('(') if self.is_call_paren(&parts) => {
                        return (Member::Ignored, resume);
                    }
                    _ => {}
                }
            }

            match token.kind {
                TokenKind::Punct('<' | '[' | '(') => nesting += 1,
                TokenKind::Punct('>' | ']' | ')') => nesting = nesting.saturating_sub(1),
                _ => {}
            }
            parts.push(token);
        }

        (Member::Ignored, resume)
    }

    fn all_modifiers(&self, parts: &[Token]) -> bool {
        parts.iter().all(|t| MODIFIERS.contains(&t.text(self.src)))
    }

    /// A `(` after a plain identifier opens a parameter list; after a
    /// modifier (or nothing) it opens a tuple type.
    fn is_call_paren(&self, parts: &[Token]) -> bool {
        parts
            .last()
            .is_some_and(|t| t.is_ident() && !MODIFIERS.contains(&t.text(self.src)))
    }

    /// Name token of a `<Type> <Name>` sequence, if it has that shape.
    fn split_name<'t>(&self, parts: &'t [Token]) -> Option<&'t Token> {
        match parts {
            [.., ty, name] if name.is_ident() && ty.kind != TokenKind::Punct('.') => Some(name),
            _ => None,
        }
    }

    fn property(&self, parts: &[Token], open: usize, limit: usize) -> (Member, usize) {
        let Some(close) = self.matching_brace(open, limit) else {
            return (Member::Ignored, limit);
        };
        let Some(name) = self.split_name(parts) else {
            return (Member::Ignored, open);
        };
        let name_text = name.text(self.src).to_string();

        let accessors = &self.tokens[open + 1..close];
        let is_get_set = accessors.len() == 4
            && accessors[0].is_word(self.src, "get")
            && accessors[1].is_punct(';')
            && accessors[2].is_word(self.src, "set")
            && accessors[3].is_punct(';');

        if !is_get_set {
            let found = self.collapse(self.tokens[open].start, self.tokens[close].end);
            return (
                Member::Skipped(SkippedMember {
                    name: name_text,
                    line: self.line_of(name),
                    reason: SkipReason::Accessors { found },
                }),
                close + 1,
            );
        }

        let type_tokens = &parts[..parts.len() - 1];
        let ty = self.collapse(type_tokens[0].start, type_tokens[type_tokens.len() - 1].end);
        (Member::Property(FieldSpec::new(ty, name_text)), close + 1)
    }

    /// Source text between two offsets with whitespace runs collapsed.
    fn collapse(&self, start: usize, end: usize) -> String {
        self.src[start..end]
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn line_of(&self, token: &Token) -> usize {
        self.src[..token.start].matches('\n').count() + 1
    }
}
