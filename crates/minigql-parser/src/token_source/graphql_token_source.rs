use crate::token::GraphQLToken;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// [`GraphQLToken`]).
///
/// This trait enables extensibility over different sources of query text.
/// [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource) is a
/// lexer over `&str`; tests drive the parser with pre-built token vectors.
///
/// Implementors define an [`Iterator`] that produces tokens one at a time.
/// The two-token window the parser works with (current + lookahead) is
/// maintained by [`GraphQLTokenCursor`](crate::GraphQLTokenCursor).
///
/// Lexers are responsible for:
/// - Skipping whitespace (space, tab, newline, carriage return)
/// - Emitting [`GraphQLTokenKind::Illegal`](crate::token::GraphQLTokenKind::Illegal)
///   for unrecognized input rather than failing
/// - Emitting a final [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof)
///   token. A source that simply stops yielding is treated as if it had
///   emitted `Eof`.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime represents the source text that tokens are lexed from.
/// For string-based lexers, this enables zero-copy lexing where token literals
/// borrow directly from the input.
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
