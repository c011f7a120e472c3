//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! This lexer implements zero-copy lexing: token literals borrow directly from
//! the source string using `Cow::Borrowed`.
//!
//! # Leniency
//!
//! The lexer never fails. Unrecognized characters become
//! [`Illegal`](GraphQLTokenKind::Illegal) tokens carrying that character, and
//! an unterminated string literal silently yields everything up to the end of
//! input.
//!
//! # Usage
//!
//! ```rust
//! use minigql_parser::token_source::StrGraphQLTokenSource;
//!
//! let source = "{ name }";
//! let lexer = StrGraphQLTokenSource::new(source);
//! for token in lexer {
//!     println!("{:?} {:?}", token.kind, token.literal);
//! }
//! // Output:
//! // CurlyBraceOpen "{"
//! // Name "name"
//! // CurlyBraceClose "}"
//! // Eof ""
//! ```

use crate::ByteSpan;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
/// lexes from a `&str` input.
///
/// Besides the [`Iterator`] implementation (which ends after the first `Eof`
/// token), [`next_token()`](Self::next_token) may be called directly and keeps
/// returning `Eof` once the input is exhausted.
///
/// See module documentation for details.
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    ///
    /// The remaining text to lex is `&source[curr_byte_offset..]`. Only ever
    /// advances.
    curr_byte_offset: usize,

    /// Whether the `Eof` token has been yielded through the `Iterator` impl.
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    /// Creates a new token source from a string slice.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use minigql_parser::token_source::StrGraphQLTokenSource;
    /// let lexer = StrGraphQLTokenSource::new("{ name }");
    /// ```
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes the next character, returning it.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Creates a span from `start` to the current offset.
    fn make_span(&self, start: usize) -> ByteSpan {
        ByteSpan::new(to_span_offset(start), to_span_offset(self.curr_byte_offset))
    }

    /// Creates a token whose literal is `source[start..curr_byte_offset]`.
    fn make_token(&self, kind: GraphQLTokenKind, start: usize) -> GraphQLToken<'src> {
        GraphQLToken::new(
            kind,
            &self.source[start..self.curr_byte_offset],
            self.make_span(start),
        )
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Produces the next token.
    ///
    /// Once the input is exhausted every call returns an `Eof` token
    /// positioned at the end of the source.
    pub fn next_token(&mut self) -> GraphQLToken<'src> {
        self.skip_whitespace();
        let start = self.curr_byte_offset;

        let Some(ch) = self.peek_char() else {
            return GraphQLToken::eof(to_span_offset(start));
        };

        if let Some(kind) = GraphQLTokenKind::from_punctuator(ch) {
            self.consume();
            return self.make_token(kind, start);
        }

        match ch {
            '"' => self.lex_string(start),
            ch if is_name_start(ch) => self.lex_name(start),
            ch if ch.is_ascii_digit() => self.lex_int(start),
            _ => {
                self.consume();
                self.make_token(GraphQLTokenKind::Illegal, start)
            },
        }
    }

    /// Skips spaces, tabs, newlines and carriage returns.
    fn skip_whitespace(&mut self) {
        let bytes = self.remaining().as_bytes();
        let skipped = bytes
            .iter()
            .take_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
            .count();
        self.curr_byte_offset += skipped;
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes a name. Keywords are not distinguished here.
    fn lex_name(&mut self, start: usize) -> GraphQLToken<'src> {
        // Consume the first character (already validated as name start)
        self.consume();
        while let Some(ch) = self.peek_char() {
            if !is_name_continue(ch) {
                break;
            }
            self.consume();
        }
        self.make_token(GraphQLTokenKind::Name, start)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes a maximal run of ASCII decimal digits.
    fn lex_int(&mut self, start: usize) -> GraphQLToken<'src> {
        let digits = self
            .remaining()
            .as_bytes()
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        self.curr_byte_offset += digits;
        self.make_token(GraphQLTokenKind::IntValue, start)
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a string literal.
    ///
    /// The literal is the raw text between the quotes. Scanning stops at the
    /// next `"` (there are no escape sequences) or at the end of input, in
    /// which case the unterminated content is returned as-is. The span covers
    /// the quotes that were actually present.
    fn lex_string(&mut self, start: usize) -> GraphQLToken<'src> {
        // Consume the opening quote
        self.consume();
        let content_start = self.curr_byte_offset;
        let rest = self.remaining().as_bytes();

        let content_end = match memchr::memchr(b'"', rest) {
            Some(quote_idx) => {
                let content_end = content_start + quote_idx;
                // Skip past the content and the closing quote
                self.curr_byte_offset = content_end + 1;
                content_end
            },
            None => {
                log::trace!(
                    "Unterminated string literal starting at byte {start}; \
                    taking the rest of the input as its content.",
                );
                self.curr_byte_offset = self.source.len();
                self.source.len()
            },
        };

        GraphQLToken::new(
            GraphQLTokenKind::StringValue,
            &self.source[content_start..content_end],
            self.make_span(start),
        )
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();

        if token.is(GraphQLTokenKind::Eof) {
            self.finished = true;
        }

        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Returns `true` if `ch` can start a name: a letter or underscore.
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

/// Returns `true` if `ch` can continue a name: a letter, underscore or ASCII
/// digit.
fn is_name_continue(ch: char) -> bool {
    is_name_start(ch) || ch.is_ascii_digit()
}

/// Narrows a byte offset to the `u32` used by [`ByteSpan`], saturating for
/// (unrealistically) huge inputs.
fn to_span_offset(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}
