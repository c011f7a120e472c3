mod derive_record;


use syn::DeriveInput;
use syn::parse_macro_input;

/// Derives [`Record`](minigql::Record) for a struct with named fields, so
/// nested selection sets can select from its values.
///
/// Every field becomes a member, in declaration order. A member's serialized
/// name comes from `#[record(rename = "...")]` or, failing that, from serde's
/// `#[serde(rename = "...")]` (or `#[serde(rename(serialize = "..."))]`).
/// Selected field names match either name, case-insensitively.
/// `#[record(skip)]` hides a field.
///
/// Exposed field types must be `Clone + Into<minigql::Value>`. The derive
/// also emits `From<T> for minigql::Value`, so `T`, `Vec<T>` and `Option<T>`
/// can be returned straight from resolvers.
///
/// Example usage:
///
/// ```rust
/// use minigql::Executor;
/// use minigql::Resolved;
/// use minigql::Variables;
/// use minigql::macros::Record;
///
/// #[derive(Clone, Debug, Record)]
/// struct Book {
///     title: String,
///     #[record(rename = "pageCount")]
///     pages: i64,
///     #[record(skip)]
///     isbn: String,
/// }
///
/// let executor = Executor::new();
/// executor.register_query_resolver("book", |_, _| {
///     Ok(Resolved::value(Book {
///         title: "Dune".to_string(),
///         pages: 412,
///         isbn: "0441013597".to_string(),
///     }))
/// });
///
/// let document = minigql::parse_document("{ book { title pageCount } }");
/// let response = executor.execute(&document, &Variables::new()).unwrap();
/// assert_eq!(
///     response.to_json().unwrap(),
///     serde_json::json!({"data": {"book": {"title": "Dune", "pageCount": 412}}}),
/// );
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_record::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
