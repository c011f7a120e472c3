/// Whether a type annotation is followed by `!`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Nullability {
    NonNull,
    #[default]
    Nullable,
}

impl Nullability {
    pub fn is_non_null(&self) -> bool {
        matches!(self, Nullability::NonNull)
    }
}

/// A type reference: either a named type or a list of some element type,
/// each with its own [`Nullability`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}

impl TypeAnnotation {
    pub fn named(name: impl Into<String>, nullability: Nullability) -> Self {
        TypeAnnotation::Named(NamedTypeAnnotation {
            name: name.into(),
            nullability,
        })
    }

    pub fn list(element_type: Option<TypeAnnotation>, nullability: Nullability) -> Self {
        TypeAnnotation::List(ListTypeAnnotation {
            element_type: element_type.map(Box::new),
            nullability,
        })
    }

    pub fn nullability(&self) -> Nullability {
        match self {
            TypeAnnotation::List(list) => list.nullability,
            TypeAnnotation::Named(named) => named.nullability,
        }
    }

    pub fn is_non_null(&self) -> bool {
        self.nullability().is_non_null()
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeAnnotation::List(_))
    }

    /// The type name for a named type; `""` for a list type.
    pub fn name(&self) -> &str {
        match self {
            TypeAnnotation::List(_) => "",
            TypeAnnotation::Named(named) => &named.name,
        }
    }

    /// The element type of a list type. `None` for named types and for list
    /// types whose element type could not be parsed.
    pub fn element_type(&self) -> Option<&TypeAnnotation> {
        match self {
            TypeAnnotation::List(list) => list.element_type.as_deref(),
            TypeAnnotation::Named(_) => None,
        }
    }

    /// The innermost named type, unwrapping any list layers. `None` when a
    /// list layer is missing its element type.
    pub fn innermost_name(&self) -> Option<&str> {
        match self {
            TypeAnnotation::List(list) => list.element_type.as_deref()?.innermost_name(),
            TypeAnnotation::Named(named) => Some(&named.name),
        }
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeAnnotation::List(list) => {
                f.write_str("[")?;
                if let Some(element_type) = &list.element_type {
                    write!(f, "{element_type}")?;
                }
                f.write_str("]")?;
            },
            TypeAnnotation::Named(named) => f.write_str(&named.name)?,
        }
        if self.is_non_null() {
            f.write_str("!")?;
        }
        Ok(())
    }
}

/// `Name` or `Name!`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedTypeAnnotation {
    pub name: String,
    pub nullability: Nullability,
}

/// `[Element]` or `[Element]!`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListTypeAnnotation {
    /// Absent when the brackets held nothing parseable as a type, e.g. `[]`.
    pub element_type: Option<Box<TypeAnnotation>>,
    pub nullability: Nullability,
}
