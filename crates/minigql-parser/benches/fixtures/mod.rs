pub const SIMPLE_QUERY: &str = include_str!("simple_query.graphql");
pub const COMPLEX_QUERY: &str = include_str!("complex_query.graphql");
pub const SCHEMA: &str = include_str!("schema.graphql");

/// Builds a wide query with `field_count` top-level fields, each carrying
/// arguments and a small nested selection set.
pub fn wide_query(field_count: usize) -> String {
    let mut source = String::from("query Wide($limit: Int) {\n");
    for i in 0..field_count {
        source.push_str(&format!(
            "  field{i}(id: {i}, name: \"item {i}\", limit: $limit, \
            opts: {{ deep: true, tags: [A, B, C] }}) {{ id name value }}\n",
        ));
    }
    source.push_str("}\n");
    source
}

/// Builds a query whose selection sets nest `depth` levels deep.
pub fn deep_query(depth: usize) -> String {
    format!("{}leaf{}", "{ node ".repeat(depth), " }".repeat(depth))
}
