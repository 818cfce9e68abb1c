//! Tokenizer for C#-style type definitions.
//!
//! Only the structure the recognizer needs is kept: identifiers, punctuation
//! and opaque literals. Whitespace, comments and preprocessor lines are
//! dropped. Tokenizing never fails; unknown characters become punctuation.

use miette::SourceSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword (`class`, `public`, `Name`, `@event`).
    Ident,
    /// String, character or numeric literal.
    Literal,
    /// `=>`
    FatArrow,
    /// Any other single character.
    Punct(char),
}

/// A token with its byte range in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Source text covered by this token.
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        &src[self.start..self.end]
    }

    pub fn is_ident(&self) -> bool {
        self.kind == TokenKind::Ident
    }

    /// Whether this is the identifier `word`.
    pub fn is_word(&self, src: &str, word: &str) -> bool {
        self.is_ident() && self.text(src) == word
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }

    pub fn span(&self) -> SourceSpan {
        (self.start, self.end - self.start).into()
    }
}

/// Split `src` into tokens.
pub fn tokenize(src: &str) -> Vec<Token> {
    Lexer { src, pos: 0 }.run()
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl Lexer<'_> {
    fn run(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(c) = self.peek() {
            let start = self.pos;
            match c {
                c if c.is_whitespace() => self.bump(),
                '/' if self.peek_at(1) == Some('/') => self.skip_line(),
                '/' if self.peek_at(1) == Some('*') => self.skip_block_comment(),
                '#' => self.skip_line(),
                '"' => {
                    self.skip_string(false);
                    tokens.push(self.token(TokenKind::Literal, start));
                }
                '\'' => {
                    self.skip_char_literal();
                    tokens.push(self.token(TokenKind::Literal, start));
                }
                '@' | '$' if self.starts_string() => {
                    let verbatim = self.consume_string_prefix();
                    self.skip_string(verbatim);
                    tokens.push(self.token(TokenKind::Literal, start));
                }
                '@' if self.peek_at(1).is_some_and(is_ident_start) => {
                    self.bump();
                    self.skip_while(is_ident_continue);
                    tokens.push(self.token(TokenKind::Ident, start));
                }
                c if is_ident_start(c) => {
                    self.skip_while(is_ident_continue);
                    tokens.push(self.token(TokenKind::Ident, start));
                }
                c if c.is_ascii_digit() => {
                    self.skip_while(|c| c.is_alphanumeric() || c == '.' || c == '_');
                    tokens.push(self.token(TokenKind::Literal, start));
                }
                '=' if self.peek_at(1) == Some('>') => {
                    self.bump();
                    self.bump();
                    tokens.push(self.token(TokenKind::FatArrow, start));
                }
                c => {
                    self.bump();
                    tokens.push(self.token(TokenKind::Punct(c), start));
                }
            }
        }

        tokens
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            start,
            end: self.pos,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_while(&mut self, f: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&f) {
            self.bump();
        }
    }

    fn skip_line(&mut self) {
        self.skip_while(|c| c != '\n');
    }

    fn skip_block_comment(&mut self) {
        self.bump();
        self.bump();
        match self.src[self.pos..].find("*/") {
            Some(offset) => self.pos += offset + 2,
            None => self.pos = self.src.len(),
        }
    }

    /// `@"`, `$"`, `$@"` or `@$"`.
    fn starts_string(&self) -> bool {
        match (self.peek_at(1), self.peek_at(2)) {
            (Some('"'), _) => true,
            (Some('@' | '$'), Some('"')) => true,
            _ => false,
        }
    }

    /// Consume the prefix of a prefixed string and report whether it is verbatim.
    fn consume_string_prefix(&mut self) -> bool {
        let mut verbatim = false;
        while let Some(c @ ('@' | '$')) = self.peek() {
            verbatim |= c == '@';
            self.bump();
        }
        verbatim
    }

    /// Skip a string literal starting at the opening quote.
    ///
    /// Verbatim strings escape a quote by doubling it; regular strings use a
    /// backslash. An unterminated string runs to the end of the line.
    fn skip_string(&mut self, verbatim: bool) {
        self.bump();
        while let Some(c) = self.peek() {
            self.bump();
            match c {
                '"' if verbatim && self.peek() == Some('"') => self.bump(),
                '"' => return,
                '\\' if !verbatim => self.bump(),
                '\n' if !verbatim => return,
                _ => {}
            }
        }
    }

    fn skip_char_literal(&mut self) {
        self.bump();
        while let Some(c) = self.peek() {
            self.bump();
            match c {
                '\\' => self.bump(),
                '\'' | '\n' => return,
                _ => {}
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(src: &str) -> Vec<&str> {
        tokenize(src).iter().map(|t| t.text(src)).collect()
    }

    #[test]
    fn test_tokenize_property() {
        assert_eq!(
            texts("public string Name { get; set; }"),
            ["public", "string", "Name", "{", "get", ";", "set", ";", "}"]
        );
    }

    #[test]
    fn test_tokenize_generic_and_nullable() {
        assert_eq!(
            texts("public List<string>? Tags"),
            ["public", "List", "<", "string", ">", "?", "Tags"]
        );
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = tokenize("class  Café {");
        assert_eq!(tokens[1].start, 7);
        assert_eq!(tokens[1].end, 12);
        assert_eq!(tokens[2].kind, TokenKind::Punct('{'));
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            texts("// class Hidden\n/* public int X { get; set; } */ class Shown"),
            ["class", "Shown"]
        );
    }

    #[test]
    fn test_preprocessor_lines_are_skipped() {
        assert_eq!(texts("#nullable enable\nclass A"), ["class", "A"]);
    }

    #[test]
    fn test_string_literals_are_opaque() {
        let src = r#"string A = "class Fake { \" }"; string B = @"x "" class Y";"#;
        let tokens = tokenize(src);

        assert!(!tokens.iter().any(|t| t.is_word(src, "class")));
        assert_eq!(
            tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Literal)
                .count(),
            2
        );
    }

    #[test]
    fn test_interpolated_and_char_literals() {
        let src = r#"x = $"{a}"; c = '}';"#;
        let tokens = tokenize(src);
        assert!(!tokens.iter().any(|t| t.is_punct('}')));
    }

    #[test]
    fn test_fat_arrow_and_verbatim_identifier() {
        let src = "public int @event => 1;";
        let tokens = tokenize(src);

        assert_eq!(tokens[2].text(src), "@event");
        assert!(tokens[2].is_ident());
        assert_eq!(tokens[3].kind, TokenKind::FatArrow);
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert_eq!(texts("class A /* never closed"), ["class", "A"]);
    }
}
