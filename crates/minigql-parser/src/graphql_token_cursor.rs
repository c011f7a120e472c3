//! A two-token window (current + lookahead) over any
//! [`GraphQLTokenSource`].

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;

/// A two-token window (current + lookahead) over any [`GraphQLTokenSource`].
///
/// This is the only token state the parser keeps. Both slots are filled on
/// construction; every [`advance()`](Self::advance) shifts the lookahead into
/// the current slot and pulls one fresh token from the source.
///
/// Once the source is exhausted (or stops yielding without ever producing an
/// `Eof`), both slots hold `Eof` tokens positioned at the end of the last
/// token seen, so advancing at the end of input is always a harmless no-op.
///
/// # Type Parameters
///
/// * `'src` - The lifetime of the source text that tokens are lexed from.
/// * `TTokenSource` - The underlying token source, which must implement
///   [`GraphQLTokenSource`] (i.e. `Iterator<Item = GraphQLToken>`).
pub struct GraphQLTokenCursor<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_source: TTokenSource,
    current: GraphQLToken<'src>,
    lookahead: GraphQLToken<'src>,
    /// End offset of the last token pulled from the source, used to position
    /// synthesized `Eof` tokens.
    last_end: u32,
    /// Set once the source has produced `Eof` or stopped yielding; it is not
    /// polled again afterwards.
    source_exhausted: bool,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLTokenCursor<'src, TTokenSource> {
    /// Creates a new cursor and fills both the current and lookahead slots.
    pub fn new(token_source: TTokenSource) -> Self {
        let mut cursor = Self {
            token_source,
            current: GraphQLToken::eof(0),
            lookahead: GraphQLToken::eof(0),
            last_end: 0,
            source_exhausted: false,
        };
        cursor.advance();
        cursor.advance();
        cursor
    }

    /// Shifts the lookahead token into the current slot, pulls a new lookahead
    /// token from the source, and returns the token that was current.
    pub fn advance(&mut self) -> GraphQLToken<'src> {
        let next = self.pull();
        let previous_lookahead = std::mem::replace(&mut self.lookahead, next);
        std::mem::replace(&mut self.current, previous_lookahead)
    }

    /// The token under the cursor.
    #[inline]
    pub fn current(&self) -> &GraphQLToken<'src> {
        &self.current
    }

    /// The token immediately after the current one.
    #[inline]
    pub fn lookahead(&self) -> &GraphQLToken<'src> {
        &self.lookahead
    }

    /// Returns `true` if the current token is of the given `kind`.
    #[inline]
    pub fn current_is(&self, kind: GraphQLTokenKind) -> bool {
        self.current.is(kind)
    }

    /// Returns `true` once the current token is `Eof`.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_is(GraphQLTokenKind::Eof)
    }

    fn pull(&mut self) -> GraphQLToken<'src> {
        if !self.source_exhausted {
            match self.token_source.next() {
                Some(token) => {
                    self.last_end = token.span.end;
                    self.source_exhausted = token.is(GraphQLTokenKind::Eof);
                    return token;
                },
                None => self.source_exhausted = true,
            }
        }
        GraphQLToken::eof(self.last_end)
    }
}
