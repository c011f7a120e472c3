/// The kind of a lexical token.
///
/// Literal text is carried by [`GraphQLToken::literal`](crate::token::GraphQLToken),
/// so kinds are plain discriminants. Keywords (`query`, `type`, `true`, ...)
/// are lexed as [`Name`](GraphQLTokenKind::Name); classifying them is left
/// entirely to the parser.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTokenKind {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `;`
    Semicolon,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals
    // =========================================================================
    /// A letter-or-underscore followed by any run of letters, underscores and
    /// ASCII digits.
    Name,

    /// A maximal run of ASCII decimal digits. No sign, no fraction.
    IntValue,

    /// The raw text between a pair of `"` (or between an opening `"` and the
    /// end of input, for an unterminated string). No escape processing.
    StringValue,

    // =========================================================================
    // End of input and unrecognized input
    // =========================================================================
    /// End of input. Produced repeatedly once the source is exhausted.
    Eof,

    /// A character the tokenizer does not recognize. The token's literal is
    /// that single character.
    Illegal,
}

impl GraphQLTokenKind {
    /// Maps a single punctuation character to its token kind.
    pub fn from_punctuator(ch: char) -> Option<Self> {
        match ch {
            '!' => Some(GraphQLTokenKind::Bang),
            ':' => Some(GraphQLTokenKind::Colon),
            ',' => Some(GraphQLTokenKind::Comma),
            '}' => Some(GraphQLTokenKind::CurlyBraceClose),
            '{' => Some(GraphQLTokenKind::CurlyBraceOpen),
            '$' => Some(GraphQLTokenKind::Dollar),
            '=' => Some(GraphQLTokenKind::Equals),
            ')' => Some(GraphQLTokenKind::ParenClose),
            '(' => Some(GraphQLTokenKind::ParenOpen),
            ';' => Some(GraphQLTokenKind::Semicolon),
            ']' => Some(GraphQLTokenKind::SquareBracketClose),
            '[' => Some(GraphQLTokenKind::SquareBracketOpen),
            _ => None,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::Comma => Some(","),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Semicolon => Some(";"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name
            | GraphQLTokenKind::IntValue
            | GraphQLTokenKind::StringValue
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Illegal => None,
        }
    }

    /// Returns `true` if this token is a literal (`Name`, `IntValue` or
    /// `StringValue`).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::Name
                | GraphQLTokenKind::IntValue
                | GraphQLTokenKind::StringValue
        )
    }

    /// A stable, human-readable name for this kind (used in CLI output and
    /// log messages).
    pub fn name(&self) -> &'static str {
        match self {
            GraphQLTokenKind::Bang => "BANG",
            GraphQLTokenKind::Colon => "COLON",
            GraphQLTokenKind::Comma => "COMMA",
            GraphQLTokenKind::CurlyBraceClose => "RBRACE",
            GraphQLTokenKind::CurlyBraceOpen => "LBRACE",
            GraphQLTokenKind::Dollar => "DOLLAR",
            GraphQLTokenKind::Equals => "ASSIGN",
            GraphQLTokenKind::ParenClose => "RPAREN",
            GraphQLTokenKind::ParenOpen => "LPAREN",
            GraphQLTokenKind::Semicolon => "SEMICOLON",
            GraphQLTokenKind::SquareBracketClose => "RBRACKET",
            GraphQLTokenKind::SquareBracketOpen => "LBRACKET",
            GraphQLTokenKind::Name => "IDENT",
            GraphQLTokenKind::IntValue => "INT",
            GraphQLTokenKind::StringValue => "STRING",
            GraphQLTokenKind::Eof => "EOF",
            GraphQLTokenKind::Illegal => "ILLEGAL",
        }
    }
}

impl std::fmt::Display for GraphQLTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
