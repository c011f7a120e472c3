use crate::ast::Field;

/// The braced list of selections requested at one level of an operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}

impl SelectionSet {
    /// Iterates over the selected fields, in order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.selections.iter().map(|selection| match selection {
            Selection::Field(field) => field,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }
}

/// One entry of a [`SelectionSet`]. Fragment spreads and inline fragments are
/// not modeled.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
}
