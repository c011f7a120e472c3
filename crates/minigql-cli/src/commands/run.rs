use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use minigql::DynamicRecord;
use minigql::EventStream;
use minigql::Executor;
use minigql::Resolved;
use minigql::Value;
use minigql::Variables;
use minigql::ast;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct RunCmd {
    #[arg(
        help="A JSON object (inline, or a path to a JSON file) whose \
             top-level keys become query and subscription resolvers.",
        long,
    )]
    data: String,

    #[arg(
        help="Variable bindings as a JSON object (inline, or a path to a \
             JSON file).",
        long,
    )]
    variables: Option<String>,

    #[arg(
        default_value_t=16,
        help="Number of events each subscription buffers ahead of the \
             printer.",
        long,
    )]
    event_buffer: usize,

    #[arg(
        help="Path to the document to execute.",
        name="QUERY_FILE",
    )]
    query_file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for RunCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.execute().await {
            Ok(()) => CommandResult::success(),
            Err(e) => CommandResult::error(&e),
        }
    }
}

impl RunCmd {
    async fn execute(&self) -> anyhow::Result<()> {
        let source = std::fs::read_to_string(&self.query_file)
            .with_context(|| format!("Failed to read {:?}", self.query_file))?;

        let serde_json::Value::Object(fixture) =
            read_json_arg(&self.data).context("Failed to load `--data`")?
        else {
            anyhow::bail!("`--data` must be a JSON object");
        };

        let variables = match &self.variables {
            Some(arg) => variables_from_json(
                read_json_arg(arg).context("Failed to load `--variables`")?,
            )?,
            None => Variables::new(),
        };

        let executor = executor_from_fixture(fixture, self.event_buffer);
        run_document(&executor, &source, &variables, &mut std::io::stdout()).await
    }
}

/// Parses `arg` as JSON when it looks like an inline object or array, and
/// otherwise reads it as a path to a JSON file.
pub(crate) fn read_json_arg(arg: &str) -> anyhow::Result<serde_json::Value> {
    let trimmed = arg.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return serde_json::from_str(arg).context("Invalid inline JSON");
    }
    let contents = std::fs::read_to_string(arg)
        .with_context(|| format!("Failed to read {arg:?}"))?;
    serde_json::from_str(&contents).with_context(|| format!("Invalid JSON in {arg:?}"))
}

pub(crate) fn variables_from_json(json: serde_json::Value) -> anyhow::Result<Variables> {
    match json {
        serde_json::Value::Object(bindings) => Ok(bindings
            .into_iter()
            .map(|(name, value)| (name, Value::from(value)))
            .collect()),
        other => anyhow::bail!("Variables must be a JSON object, found `{other}`"),
    }
}

/// Converts fixture JSON into a runtime value. Objects become records named
/// after the key they were found under, so nested selections apply to them.
pub(crate) fn value_from_json(key: &str, json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Object(fields) => {
            let mut record = DynamicRecord::new(type_name_for(key));
            for (name, value) in fields {
                let value = value_from_json(&name, value);
                record.insert(name, value);
            }
            Value::from(record)
        },
        serde_json::Value::Array(items) => Value::List(
            items.into_iter().map(|item| value_from_json(key, item)).collect(),
        ),
        scalar => Value::from(scalar),
    }
}

/// `friends` -> `Friends`.
fn type_name_for(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Registers, for every top-level fixture key, a query resolver returning
/// its value and a subscription resolver emitting its array elements (or
/// the value itself) as events.
pub(crate) fn executor_from_fixture(
    fixture: serde_json::Map<String, serde_json::Value>,
    event_buffer: usize,
) -> Executor {
    let executor = Executor::new();
    for (key, json) in fixture {
        let value = value_from_json(&key, json);

        let query_value = value.clone();
        executor.register_query_resolver(key.as_str(), move |_, _| {
            Ok(Resolved::Value(query_value.clone()))
        });

        let field_name = key.clone();
        executor.register_subscription_resolver(key.as_str(), move |_, _| {
            let events = match &value {
                Value::List(items) => items.clone(),
                other => vec![other.clone()],
            };
            let (sender, stream) = EventStream::channel(event_buffer);
            let field_name = field_name.clone();
            tokio::spawn(async move {
                for event in events {
                    if sender.send(event).await.is_err() {
                        log::debug!("Subscriber to `{field_name}` went away; stopping.");
                        break;
                    }
                }
            });
            Ok(Resolved::Events(stream))
        });
    }
    executor
}

/// Executes `source` and writes the result to `out`: a pretty-printed JSON
/// response for queries and mutations, or one JSON line per event for
/// subscriptions. Each event line is flushed as soon as it arrives.
pub(crate) async fn run_document(
    executor: &Executor,
    source: &str,
    variables: &Variables,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let document = minigql::parse_document(source);
    let is_subscription = document
        .first_operation()
        .is_some_and(|operation| operation.kind == ast::OperationKind::Subscription);

    if !is_subscription {
        let response = executor.execute(&document, variables)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
        out.flush()?;
        return Ok(());
    }

    let mut events = executor.subscribe(&document, variables)?;
    let mut event_count = 0usize;
    while let Some(event) = events.recv().await {
        writeln!(out, "{}", serde_json::to_string(&event)?)?;
        out.flush()?;
        event_count += 1;
    }
    log::debug!("Subscription completed after {event_count} events.");
    Ok(())
}
