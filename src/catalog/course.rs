use std::fmt;

/// One course row: identifier, display name and prerequisite descriptor.
///
/// The `id` is kept in its textual form. Lookups compare ids as strings, so
/// `"007"` and `"7"` name different courses even though they share a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Course {
    id: String,
    name: String,
    prerequisite: String,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        prerequisite: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            prerequisite: prerequisite.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form prerequisite text. The table never interprets it.
    pub fn prerequisite(&self) -> &str {
        &self.prerequisite
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} | {} |", self.id, self.name, self.prerequisite)
    }
}
