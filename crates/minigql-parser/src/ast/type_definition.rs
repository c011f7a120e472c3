/// A `type Name { ... }` definition.
///
/// Only the type name and the field names are retained; argument lists and
/// type annotations on fields are consumed and discarded. This is enough for
/// wiring resolvers to the fields of the root object types by convention.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeDefinition {
    pub name: String,
    pub fields: Vec<String>,
}

impl TypeDefinition {
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field == name)
    }
}
