/// A trivia category as the rest of the application sees it.
///
/// Identity is the `id`; uniqueness is whatever the remote service guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryDomain {
    pub id: i64,
    pub name: String,
}

impl CategoryDomain {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
