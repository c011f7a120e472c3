use crate::ByteSpan;
use crate::token::GraphQLTokenKind;
use std::borrow::Cow;

/// A lexical token: its kind, the literal text it was lexed from, and the
/// byte span it covers in the source.
///
/// Tokens are immutable once produced. The `literal` of a string token is the
/// raw text between the quotes (no escape processing); the literal of an
/// end-of-input token is empty; every other literal is the exact source text.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime enables zero-copy lexing: `StrGraphQLTokenSource`
/// borrows literals directly from the source text via `Cow::Borrowed`. Token
/// sources that must allocate can produce `GraphQLToken<'static>` with
/// `Cow::Owned` literals.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLToken<'src> {
    /// The kind of token.
    pub kind: GraphQLTokenKind,

    /// The literal source text of this token.
    pub literal: Cow<'src, str>,

    /// The source location span of this token.
    pub span: ByteSpan,
}

impl<'src> GraphQLToken<'src> {
    /// Convenience constructor for a token whose literal borrows from the
    /// source text.
    pub fn new(kind: GraphQLTokenKind, literal: &'src str, span: ByteSpan) -> Self {
        Self {
            kind,
            literal: Cow::Borrowed(literal),
            span,
        }
    }

    /// Creates an end-of-input token positioned at `offset`.
    pub fn eof(offset: u32) -> Self {
        Self {
            kind: GraphQLTokenKind::Eof,
            literal: Cow::Borrowed(""),
            span: ByteSpan::empty_at(offset),
        }
    }

    /// Returns `true` if this token is of the given `kind`.
    #[inline]
    pub fn is(&self, kind: GraphQLTokenKind) -> bool {
        self.kind == kind
    }

    /// Returns `true` if this token's literal equals `keyword`.
    ///
    /// Keywords are never special-cased by the tokenizer, and the parser
    /// matches them on literal text whatever the token kind. A string token
    /// spelling `type` counts.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.literal == keyword
    }

    /// Converts this token into one that owns its literal.
    pub fn into_owned(self) -> GraphQLToken<'static> {
        GraphQLToken {
            kind: self.kind,
            literal: Cow::Owned(self.literal.into_owned()),
            span: self.span,
        }
    }
}
