//! A process-wide default [`Executor`].
//!
//! Convenience for programs that register resolvers at startup from
//! scattered places and execute through a single shared engine. Everything
//! here delegates to one lazily-created `Executor`; code that can pass an
//! explicit `Executor` around should prefer doing so.

use crate::Arguments;
use crate::Executor;
use crate::Resolved;
use crate::ResolverError;
use crate::Value;
use once_cell::sync::Lazy;

static GLOBAL_EXECUTOR: Lazy<Executor> = Lazy::new(Executor::new);

/// The process-wide default executor.
pub fn executor() -> &'static Executor {
    &GLOBAL_EXECUTOR
}

/// Registers a query resolver on the default executor.
pub fn register_query_resolver<F>(field_name: impl Into<String>, resolver: F)
where
    F: Fn(Option<&Value>, &Arguments) -> Result<Resolved, ResolverError>
        + Send
        + Sync
        + 'static,
{
    GLOBAL_EXECUTOR.register_query_resolver(field_name, resolver);
}

/// Registers a mutation resolver on the default executor.
pub fn register_mutation_resolver<F>(field_name: impl Into<String>, resolver: F)
where
    F: Fn(Option<&Value>, &Arguments) -> Result<Resolved, ResolverError>
        + Send
        + Sync
        + 'static,
{
    GLOBAL_EXECUTOR.register_mutation_resolver(field_name, resolver);
}

/// Registers a subscription resolver on the default executor.
pub fn register_subscription_resolver<F>(field_name: impl Into<String>, resolver: F)
where
    F: Fn(Option<&Value>, &Arguments) -> Result<Resolved, ResolverError>
        + Send
        + Sync
        + 'static,
{
    GLOBAL_EXECUTOR.register_subscription_resolver(field_name, resolver);
}
