/// The kind of an operation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    /// Also the kind of an operation written without a keyword (`{ ... }`).
    #[default]
    Query,
    Subscription,
}

impl OperationKind {
    /// Maps an operation keyword to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationKind::Query),
            "mutation" => Some(OperationKind::Mutation),
            "subscription" => Some(OperationKind::Subscription),
            _ => None,
        }
    }

    /// The keyword for this kind: `"query"`, `"mutation"` or
    /// `"subscription"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Mutation => "mutation",
            OperationKind::Query => "query",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
