//! Recursive descent parser for documents.
//!
//! This module provides [`GraphQLParser`], a generic parser that works with any
//! token source implementing [`GraphQLTokenSource`].
//!
//! # Architecture
//!
//! The parser keeps exactly two tokens of state (current and lookahead, held
//! by a [`GraphQLTokenCursor`]) and has one `parse_*` method per grammar rule.
//! Each rule is entered with the cursor on its first token and returns with
//! the cursor on the first token after it.
//!
//! # Tolerance
//!
//! Parsing never fails. Input the grammar does not expect degrades instead of
//! aborting:
//!
//! - unrecognized top-level tokens are skipped one at a time;
//! - unexpected tokens inside delimited lists (variable definitions,
//!   selection sets, arguments, type definition bodies) are skipped;
//! - unparseable values become [`ast::Value::Illegal`];
//! - unparseable types become absent (`None`).
//!
//! # Termination
//!
//! Every loop over a delimited list consumes at least one token per iteration
//! on every branch, and every loop stops at `Eof`. Nested constructs (values,
//! selection sets, list types) additionally share a recursion depth limit so
//! that adversarial inputs like `[[[[...` cannot overflow the stack.

use crate::GraphQLTokenCursor;
use crate::ast;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use indexmap::IndexMap;

/// A tolerant recursive descent parser.
///
/// Generic over the token source, so it can parse from a string
/// ([`GraphQLParser::new`]) or from any other producer of tokens
/// ([`GraphQLParser::from_token_source`]).
///
/// # Usage
///
/// ```rust
/// use minigql_parser::GraphQLParser;
///
/// let doc = GraphQLParser::new("query MyQuery($id: Int) { hello }").parse_document();
/// let op = doc.first_operation().unwrap();
/// assert_eq!(op.name.as_deref(), Some("MyQuery"));
/// assert_eq!(op.variable_definitions[0].name, "id");
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    cursor: GraphQLTokenCursor<'src, TTokenSource>,

    /// Shared recursion depth counter, incremented on entry to
    /// `parse_value`, `parse_selection_set` and `parse_type_annotation` and
    /// decremented on exit.
    recursion_depth: usize,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a new parser from a string-like source.
    ///
    /// Accepts any type that can be referenced as a `str`, including `&str`
    /// and `&String`.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source.as_ref()))
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Maximum nesting depth for recursive parsing (values, selection sets
    /// and type annotations).
    const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a new parser from a token source.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            cursor: GraphQLTokenCursor::new(token_source),
            recursion_depth: 0,
        }
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    fn current_is(&self, kind: GraphQLTokenKind) -> bool {
        self.cursor.current_is(kind)
    }

    fn current_literal(&self) -> String {
        self.cursor.current().literal.to_string()
    }

    fn advance(&mut self) {
        self.cursor.advance();
    }

    /// Consumes the current token if it is of the given `kind`.
    fn advance_if(&mut self, kind: GraphQLTokenKind) -> bool {
        if self.current_is(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token and returns its literal.
    fn take_literal(&mut self) -> String {
        self.cursor.advance().literal.into_owned()
    }

    /// Skips the current token as unexpected inside `context`.
    fn skip_unexpected(&mut self, context: &str) {
        let token = self.cursor.advance();
        log::trace!(
            "Skipping unexpected {} token {:?} at {} in {context}.",
            token.kind,
            token.literal,
            token.span,
        );
    }

    /// Skips a balanced `open ... close` block. The cursor must be on `open`.
    /// Stops at `Eof` when the block is unterminated.
    fn skip_balanced(&mut self, open: GraphQLTokenKind, close: GraphQLTokenKind) {
        let mut depth = 0usize;
        loop {
            if self.cursor.is_at_end() {
                return;
            }
            let token = self.cursor.advance();
            if token.is(open) {
                depth += 1;
            } else if token.is(close) {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return;
                }
            }
        }
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    /// Increments the depth counter, returning `false` (and leaving the
    /// counter unchanged) when the limit would be exceeded. Callers that get
    /// `true` must call `exit_recursion()` when done.
    fn enter_recursion(&mut self) -> bool {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            log::debug!(
                "Maximum nesting depth ({}) exceeded at {}.",
                Self::MAX_RECURSION_DEPTH,
                self.cursor.current().span,
            );
            return false;
        }
        self.recursion_depth += 1;
        true
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Document and definitions
    // =========================================================================

    /// Parses the whole token stream into a [`ast::Document`].
    ///
    /// Never fails: malformed input yields a partial or empty document.
    pub fn parse_document(mut self) -> ast::Document {
        let mut definitions = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(definition) = self.parse_definition() {
                definitions.push(definition);
            }
        }
        ast::Document { definitions }
    }

    /// Parses one top-level definition, or skips one token and returns `None`
    /// when the current token cannot start a definition.
    fn parse_definition(&mut self) -> Option<ast::Definition> {
        let current = self.cursor.current();

        // Keywords are matched on literal text alone, so `"query"` written as a
        // string still starts an operation.
        if ast::OperationKind::from_keyword(&current.literal).is_some() {
            return Some(ast::Definition::Operation(self.parse_operation_definition()));
        }

        if current.is(GraphQLTokenKind::CurlyBraceOpen) {
            return Some(ast::Definition::Operation(self.parse_operation_definition()));
        }

        if current.is_keyword("type") {
            return self.parse_type_definition().map(ast::Definition::Type);
        }

        self.skip_unexpected("document");
        None
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Parses an operation, either keyword-led
    /// (`query Name($var: Type) { ... }`) or a bare `{ ... }` query.
    fn parse_operation_definition(&mut self) -> ast::OperationDefinition {
        let mut operation = ast::OperationDefinition::default();

        if let Some(kind) = ast::OperationKind::from_keyword(&self.cursor.current().literal) {
            operation.kind = kind;
            self.advance();

            if self.current_is(GraphQLTokenKind::Name) {
                operation.name = Some(self.take_literal());
            }

            if self.current_is(GraphQLTokenKind::ParenOpen) {
                operation.variable_definitions = self.parse_variable_definitions();
            }
        }

        if self.current_is(GraphQLTokenKind::CurlyBraceOpen) {
            operation.selection_set = self.parse_selection_set();
        } else {
            log::debug!(
                "{} `{}` has no selection set (found {} at {}).",
                operation.kind,
                operation.identity(),
                self.cursor.current().kind,
                self.cursor.current().span,
            );
        }

        operation
    }

    /// Parses `( $name: Type, ... )`. The cursor must be on `(`.
    ///
    /// A `$` that is not followed by a name ends the list early, returning
    /// what was accumulated and leaving the cursor on the token after `$`.
    fn parse_variable_definitions(&mut self) -> Vec<ast::VariableDefinition> {
        let mut definitions = Vec::new();
        self.advance(); // `(`

        while !self.current_is(GraphQLTokenKind::ParenClose) && !self.cursor.is_at_end() {
            if self.advance_if(GraphQLTokenKind::Dollar) {
                if !self.current_is(GraphQLTokenKind::Name) {
                    log::debug!(
                        "`$` not followed by a variable name at {}; ending variable \
                        definitions early.",
                        self.cursor.current().span,
                    );
                    return definitions;
                }

                let name = self.take_literal();
                let type_annotation = if self.advance_if(GraphQLTokenKind::Colon) {
                    self.parse_type_annotation()
                } else {
                    None
                };
                definitions.push(ast::VariableDefinition {
                    name,
                    type_annotation,
                });
            } else if !self.advance_if(GraphQLTokenKind::Comma) {
                self.skip_unexpected("variable definitions");
            }
        }

        self.advance(); // `)`
        definitions
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// Parses `{ field, ... }`. The cursor must be on `{`.
    ///
    /// Returns `None` only when the nesting depth limit is reached, in which
    /// case the whole block is skipped.
    fn parse_selection_set(&mut self) -> Option<ast::SelectionSet> {
        if !self.enter_recursion() {
            self.skip_balanced(
                GraphQLTokenKind::CurlyBraceOpen,
                GraphQLTokenKind::CurlyBraceClose,
            );
            return None;
        }
        let selection_set = self.parse_selection_set_impl();
        self.exit_recursion();
        Some(selection_set)
    }

    fn parse_selection_set_impl(&mut self) -> ast::SelectionSet {
        let mut selections = Vec::new();
        self.advance(); // `{`

        while !self.current_is(GraphQLTokenKind::CurlyBraceClose) && !self.cursor.is_at_end() {
            if self.current_is(GraphQLTokenKind::Name) {
                selections.push(ast::Selection::Field(self.parse_field()));
            } else if !self.advance_if(GraphQLTokenKind::Comma) {
                self.skip_unexpected("selection set");
            }
        }

        self.advance(); // `}`
        ast::SelectionSet { selections }
    }

    /// Parses `name(args) { ... }`. The cursor must be on a `Name`.
    fn parse_field(&mut self) -> ast::Field {
        let name = self.take_literal();

        let arguments = if self.current_is(GraphQLTokenKind::ParenOpen) {
            self.parse_arguments()
        } else {
            Vec::new()
        };

        let selection_set = if self.current_is(GraphQLTokenKind::CurlyBraceOpen) {
            self.parse_selection_set()
        } else {
            None
        };

        ast::Field {
            name,
            arguments,
            selection_set,
        }
    }

    /// Parses `( name: value, ... )`. The cursor must be on `(`.
    ///
    /// A name without a following `:` still yields an argument, whose value
    /// is [`ast::Value::Illegal`] carrying the token found instead of the
    /// colon.
    fn parse_arguments(&mut self) -> Vec<ast::Argument> {
        let mut arguments = Vec::new();
        self.advance(); // `(`

        while !self.current_is(GraphQLTokenKind::ParenClose) && !self.cursor.is_at_end() {
            if self.current_is(GraphQLTokenKind::Name) {
                let name = self.take_literal();
                let value = if self.advance_if(GraphQLTokenKind::Colon) {
                    self.parse_value()
                } else {
                    log::debug!(
                        "Argument `{name}` has no `:` (found {} at {}).",
                        self.cursor.current().kind,
                        self.cursor.current().span,
                    );
                    ast::Value::Illegal(self.current_literal())
                };
                arguments.push(ast::Argument { name, value });
            } else if !self.advance_if(GraphQLTokenKind::Comma) {
                self.skip_unexpected("arguments");
            }
        }

        self.advance(); // `)`
        arguments
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value (literal or variable reference).
    ///
    /// Always consumes at least one token.
    fn parse_value(&mut self) -> ast::Value {
        if !self.enter_recursion() {
            let literal = self.current_literal();
            self.advance();
            return ast::Value::Illegal(literal);
        }
        let value = self.parse_value_impl();
        self.exit_recursion();
        value
    }

    fn parse_value_impl(&mut self) -> ast::Value {
        let kind = self.cursor.current().kind;
        match kind {
            GraphQLTokenKind::CurlyBraceOpen => self.parse_object_value(),
            GraphQLTokenKind::SquareBracketOpen => self.parse_list_value(),
            GraphQLTokenKind::IntValue => ast::Value::Int(self.take_literal()),
            GraphQLTokenKind::StringValue => ast::Value::String(self.take_literal()),
            GraphQLTokenKind::Name => {
                let name = self.take_literal();
                match name.as_str() {
                    "true" => ast::Value::Boolean(true),
                    "false" => ast::Value::Boolean(false),
                    _ => ast::Value::Enum(name),
                }
            },
            GraphQLTokenKind::Dollar => {
                self.advance();
                if self.current_is(GraphQLTokenKind::Name) {
                    ast::Value::Variable(self.take_literal())
                } else {
                    ast::Value::Variable(String::new())
                }
            },
            _ => {
                let literal = self.current_literal();
                log::trace!(
                    "Unexpected {kind} token {literal:?} in value position at {}.",
                    self.cursor.current().span,
                );
                self.advance();
                ast::Value::Illegal(literal)
            },
        }
    }

    /// Parses `{ key: value, ... }`. The cursor must be on `{`.
    ///
    /// A missing key or colon ends the object early with an
    /// [`ast::Value::Illegal`] describing what was expected; the offending
    /// token is left for the enclosing list to deal with.
    fn parse_object_value(&mut self) -> ast::Value {
        let mut fields = IndexMap::new();
        self.advance(); // `{`

        while !self.current_is(GraphQLTokenKind::CurlyBraceClose) && !self.cursor.is_at_end() {
            if !self.current_is(GraphQLTokenKind::Name) {
                return ast::Value::Illegal("expected object key".to_string());
            }
            let key = self.take_literal();

            if !self.advance_if(GraphQLTokenKind::Colon) {
                return ast::Value::Illegal("expected colon in object".to_string());
            }
            let value = self.parse_value();
            fields.insert(key, value);

            self.advance_if(GraphQLTokenKind::Comma);
        }

        self.advance(); // `}`
        ast::Value::Object(fields)
    }

    /// Parses `[ value, ... ]`. The cursor must be on `[`.
    fn parse_list_value(&mut self) -> ast::Value {
        let mut items = Vec::new();
        self.advance(); // `[`

        while !self.current_is(GraphQLTokenKind::SquareBracketClose)
            && !self.cursor.is_at_end()
        {
            items.push(self.parse_value());
            self.advance_if(GraphQLTokenKind::Comma);
        }

        self.advance(); // `]`
        ast::Value::List(items)
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    /// Parses `Name`, `Name!`, `[Type]` or `[Type]!`.
    ///
    /// Returns `None` without consuming anything when the current token
    /// cannot start a type.
    fn parse_type_annotation(&mut self) -> Option<ast::TypeAnnotation> {
        if !self.enter_recursion() {
            return None;
        }
        let annotation = self.parse_type_annotation_impl();
        self.exit_recursion();
        annotation
    }

    fn parse_type_annotation_impl(&mut self) -> Option<ast::TypeAnnotation> {
        if self.advance_if(GraphQLTokenKind::SquareBracketOpen) {
            let element_type = self.parse_type_annotation();
            if !self.advance_if(GraphQLTokenKind::SquareBracketClose) {
                log::debug!(
                    "List type is missing its `]` (found {} at {}).",
                    self.cursor.current().kind,
                    self.cursor.current().span,
                );
            }
            let nullability = self.parse_nullability();
            return Some(ast::TypeAnnotation::list(element_type, nullability));
        }

        if self.current_is(GraphQLTokenKind::Name) {
            let name = self.take_literal();
            let nullability = self.parse_nullability();
            return Some(ast::TypeAnnotation::named(name, nullability));
        }

        None
    }

    fn parse_nullability(&mut self) -> ast::Nullability {
        if self.advance_if(GraphQLTokenKind::Bang) {
            ast::Nullability::NonNull
        } else {
            ast::Nullability::Nullable
        }
    }

    // =========================================================================
    // Type definitions
    // =========================================================================

    /// Parses `type Name { field(args): Type ... }`, keeping only the type
    /// name and the field names. The cursor must be on the `type` keyword.
    ///
    /// Returns `None` when the keyword is not followed by a name and `{`.
    fn parse_type_definition(&mut self) -> Option<ast::TypeDefinition> {
        self.advance(); // `type`

        if !self.current_is(GraphQLTokenKind::Name) {
            log::debug!(
                "`type` not followed by a type name at {}.",
                self.cursor.current().span,
            );
            return None;
        }
        let name = self.take_literal();

        if !self.advance_if(GraphQLTokenKind::CurlyBraceOpen) {
            log::debug!("Type `{name}` has no `{{`; skipping it.");
            return None;
        }

        let mut fields = Vec::new();
        while !self.current_is(GraphQLTokenKind::CurlyBraceClose) && !self.cursor.is_at_end() {
            if self.current_is(GraphQLTokenKind::Name) {
                fields.push(self.parse_type_definition_field());
            } else if !self.advance_if(GraphQLTokenKind::Comma) {
                self.skip_unexpected("type definition");
            }
        }
        self.advance_if(GraphQLTokenKind::CurlyBraceClose);

        Some(ast::TypeDefinition { name, fields })
    }

    /// Consumes one `name(args): Type` entry and returns its name. Argument
    /// lists and the type annotation are consumed and discarded.
    fn parse_type_definition_field(&mut self) -> String {
        let name = self.take_literal();

        if self.current_is(GraphQLTokenKind::ParenOpen) {
            self.skip_balanced(GraphQLTokenKind::ParenOpen, GraphQLTokenKind::ParenClose);
        }

        if self.advance_if(GraphQLTokenKind::Colon) {
            let _ = self.parse_type_annotation();
        }

        name
    }
}

/// Parses `source` into a [`ast::Document`]. Never fails.
///
/// ```rust
/// let doc = minigql_parser::parse_document("{ hello }");
/// assert_eq!(doc.identity(), "query");
/// ```
pub fn parse_document(source: &str) -> ast::Document {
    GraphQLParser::new(source).parse_document()
}
