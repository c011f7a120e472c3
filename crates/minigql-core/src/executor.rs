use crate::Arguments;
use crate::EventStream;
use crate::ExecutionError;
use crate::ExecutionResponse;
use crate::Resolved;
use crate::ResolverError;
use crate::ResolverTable;
use crate::Value;
use crate::Variables;
use crate::lookup_member;
use crate::materialize_arguments;
use indexmap::IndexMap;
use minigql_parser::ast;
use std::sync::Arc;

/// Executes parsed documents against registered resolvers.
///
/// An `Executor` owns three [`ResolverTable`]s (query, mutation and
/// subscription), each keyed by field name. It is `Send + Sync`:
/// registration and execution may happen concurrently from any number of
/// threads, and a parsed [`ast::Document`] can be executed repeatedly (and
/// concurrently) with different variable bindings.
///
/// # Example
///
/// ```rust
/// use minigql_core::Executor;
/// use minigql_core::Resolved;
/// use minigql_core::Variables;
///
/// let executor = Executor::new();
/// executor.register_query_resolver("greet", |_source, _args| {
///     Ok(Resolved::value("Hello, World!"))
/// });
///
/// let document = minigql_parser::parse_document("{ greet }");
/// let response = executor.execute(&document, &Variables::new()).unwrap();
/// assert_eq!(
///     response.to_json().unwrap(),
///     serde_json::json!({"data": {"greet": "Hello, World!"}}),
/// );
/// ```
#[derive(Debug, Default)]
pub struct Executor {
    query_resolvers: ResolverTable,
    mutation_resolvers: ResolverTable,
    subscription_resolvers: ResolverTable,
}

impl Executor {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Registers a resolver for a top-level query field, replacing any
    /// previous registration for that field name.
    pub fn register_query_resolver<F>(&self, field_name: impl Into<String>, resolver: F)
    where
        F: Fn(Option<&Value>, &Arguments) -> Result<Resolved, ResolverError>
            + Send
            + Sync
            + 'static,
    {
        register(&self.query_resolvers, "query", field_name.into(), resolver);
    }

    /// Registers a resolver for a top-level mutation field.
    ///
    /// Top-level fields are looked up in the query table first, so a
    /// mutation resolver is shadowed by a query resolver of the same name.
    pub fn register_mutation_resolver<F>(&self, field_name: impl Into<String>, resolver: F)
    where
        F: Fn(Option<&Value>, &Arguments) -> Result<Resolved, ResolverError>
            + Send
            + Sync
            + 'static,
    {
        register(&self.mutation_resolvers, "mutation", field_name.into(), resolver);
    }

    /// Registers a resolver for a subscription field. It must return
    /// [`Resolved::Events`].
    pub fn register_subscription_resolver<F>(&self, field_name: impl Into<String>, resolver: F)
    where
        F: Fn(Option<&Value>, &Arguments) -> Result<Resolved, ResolverError>
            + Send
            + Sync
            + 'static,
    {
        register(
            &self.subscription_resolvers,
            "subscription",
            field_name.into(),
            resolver,
        );
    }

    pub fn query_resolvers(&self) -> &ResolverTable {
        &self.query_resolvers
    }

    pub fn mutation_resolvers(&self) -> &ResolverTable {
        &self.mutation_resolvers
    }

    pub fn subscription_resolvers(&self) -> &ResolverTable {
        &self.subscription_resolvers
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Executes the first definition of `document`, which must be an
    /// operation.
    ///
    /// Only the first definition is ever executed. The operation kind is not
    /// consulted: every top-level field is looked up in the query table, then
    /// the mutation table.
    pub fn execute(
        &self,
        document: &ast::Document,
        variables: &Variables,
    ) -> Result<ExecutionResponse, ExecutionError> {
        let operation = first_operation(document)?;
        log::trace!("Executing {} `{}`.", operation.kind, operation.identity());

        let data = match &operation.selection_set {
            Some(selection_set) => self.execute_selection_set(None, selection_set, variables)?,
            None => IndexMap::new(),
        };
        Ok(ExecutionResponse { data })
    }

    /// Invokes the subscription resolver for `field` and returns the event
    /// stream it produced.
    ///
    /// The stream is returned as-is; events are not transformed and the
    /// field's nested selection set (if any) is not applied to them.
    pub fn execute_subscription(
        &self,
        field: &ast::Field,
        variables: &Variables,
    ) -> Result<EventStream, ExecutionError> {
        let Some(resolver) = self.subscription_resolvers.get(&field.name) else {
            log::debug!("No subscription resolver for field `{}`.", field.name);
            return Err(ExecutionError::NoSubscriptionResolver {
                field_name: field.name.clone(),
            });
        };

        let arguments = materialize_arguments(field, variables);
        match call_resolver(&field.name, || resolver(None, &arguments))? {
            Resolved::Events(events) => Ok(events),
            Resolved::Value(value) => {
                log::debug!(
                    "Subscription resolver for field `{}` returned a {} value.",
                    field.name,
                    value.kind_name(),
                );
                Err(ExecutionError::NotAnEventStream {
                    field_name: field.name.clone(),
                })
            },
        }
    }

    /// Subscribes to the first field of `document`'s first operation, which
    /// must be a subscription.
    pub fn subscribe(
        &self,
        document: &ast::Document,
        variables: &Variables,
    ) -> Result<EventStream, ExecutionError> {
        let operation = first_operation(document)?;
        if operation.kind != ast::OperationKind::Subscription {
            return Err(ExecutionError::NotASubscription {
                operation_kind: operation.kind,
            });
        }

        let field = operation
            .selection_set
            .as_ref()
            .and_then(|selection_set| selection_set.fields().next())
            .ok_or(ExecutionError::EmptySubscription)?;
        self.execute_subscription(field, variables)
    }

    // =========================================================================
    // Selection sets and fields
    // =========================================================================

    /// Resolves every field of `selection_set` against `source` (absent at
    /// the top level), in order.
    fn execute_selection_set(
        &self,
        source: Option<&Value>,
        selection_set: &ast::SelectionSet,
        variables: &Variables,
    ) -> Result<IndexMap<String, Value>, ExecutionError> {
        let mut result = IndexMap::with_capacity(selection_set.len());
        for field in selection_set.fields() {
            let value = self.resolve_field(source, field, variables)?;
            let value = match &field.selection_set {
                Some(nested) => self.resolve_nested_selection(value, nested, variables)?,
                None => value,
            };
            result.insert(field.name.clone(), value);
        }
        Ok(result)
    }

    fn resolve_field(
        &self,
        source: Option<&Value>,
        field: &ast::Field,
        variables: &Variables,
    ) -> Result<Value, ExecutionError> {
        match source {
            None => self.resolve_top_level_field(field, variables),
            Some(source) => resolve_member(source, field),
        }
    }

    /// Dispatches a top-level field to its query resolver or, failing that,
    /// its mutation resolver.
    fn resolve_top_level_field(
        &self,
        field: &ast::Field,
        variables: &Variables,
    ) -> Result<Value, ExecutionError> {
        let resolver = match self.query_resolvers.get(&field.name) {
            Some(resolver) => resolver,
            None => match self.mutation_resolvers.get(&field.name) {
                Some(resolver) => resolver,
                None => {
                    log::debug!("No query or mutation resolver for field `{}`.", field.name);
                    return Err(ExecutionError::NoResolver {
                        field_name: field.name.clone(),
                    });
                },
            },
        };

        log::trace!("Dispatching field `{}` to its resolver.", field.name);
        let arguments = materialize_arguments(field, variables);
        match call_resolver(&field.name, || resolver(None, &arguments))? {
            Resolved::Value(value) => Ok(value),
            Resolved::Events(_) => Err(ExecutionError::UnexpectedEventStream {
                field_name: field.name.clone(),
            }),
        }
    }

    /// Applies a nested selection set to a field's resolved value.
    ///
    /// Records are selected from, lists are selected element by element,
    /// and every other value (null included) is returned unchanged.
    fn resolve_nested_selection(
        &self,
        value: Value,
        selection_set: &ast::SelectionSet,
        variables: &Variables,
    ) -> Result<Value, ExecutionError> {
        match value {
            Value::Record(_) => Ok(Value::Object(self.execute_selection_set(
                Some(&value),
                selection_set,
                variables,
            )?)),
            Value::List(items) => items
                .iter()
                .map(|item| {
                    self.execute_selection_set(Some(item), selection_set, variables)
                        .map(Value::Object)
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            other => Ok(other),
        }
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn register<F>(table: &ResolverTable, table_name: &str, field_name: String, resolver: F)
where
    F: Fn(Option<&Value>, &Arguments) -> Result<Resolved, ResolverError>
        + Send
        + Sync
        + 'static,
{
    log::debug!("Registering {table_name} resolver for field `{field_name}`.");
    if table.insert(field_name.as_str(), resolver) {
        log::debug!("Replaced the previous {table_name} resolver for field `{field_name}`.");
    }
}

/// Invokes a resolver, wrapping its failure with the field name.
fn call_resolver(
    field_name: &str,
    call: impl FnOnce() -> Result<Resolved, ResolverError>,
) -> Result<Resolved, ExecutionError> {
    call().map_err(|source| {
        log::debug!("Resolver for field `{field_name}` failed: {source}");
        ExecutionError::Resolver {
            field_name: field_name.to_string(),
            source: Arc::from(source),
        }
    })
}

/// The first definition of `document`, which must be an operation.
fn first_operation(document: &ast::Document) -> Result<&ast::OperationDefinition, ExecutionError> {
    match document.definitions.first() {
        None => Err(ExecutionError::NoDefinitions),
        Some(ast::Definition::Operation(operation)) => Ok(operation),
        Some(definition) => Err(ExecutionError::UnsupportedDefinition {
            definition: definition.describe(),
        }),
    }
}

/// Structural lookup of `field` on a nested source value.
fn resolve_member(source: &Value, field: &ast::Field) -> Result<Value, ExecutionError> {
    match source {
        Value::Record(record) => {
            lookup_member(record.as_ref(), &field.name).ok_or_else(|| {
                log::debug!(
                    "Type `{}` has no member matching field `{}`.",
                    record.type_name(),
                    field.name,
                );
                ExecutionError::NoMatchingMember {
                    field_name: field.name.clone(),
                    type_name: record.type_name().to_string(),
                }
            })
        },
        Value::Null => Err(ExecutionError::SourceNull {
            field_name: field.name.clone(),
        }),
        other => Err(ExecutionError::SourceNotRecord {
            field_name: field.name.clone(),
            found: other.kind_name(),
        }),
    }
}
