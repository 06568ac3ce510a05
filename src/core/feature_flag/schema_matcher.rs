use std::collections::HashSet;

/// Set of tenant schemas a flag applies to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SchemaMatcher {
    #[default]
    Nothing,
    All,
    Only(HashSet<String>),
}

impl SchemaMatcher {
    /// Parse a comma separated schema list; `*` matches every schema.
    pub fn parse(raw: &str) -> Self {
        let schemas: HashSet<String> = raw
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if schemas.contains("*") {
            SchemaMatcher::All
        } else if schemas.is_empty() {
            SchemaMatcher::Nothing
        } else {
            SchemaMatcher::Only(schemas)
        }
    }

    pub fn matches(&self, schema_name: &str) -> bool {
        match self {
            SchemaMatcher::Nothing => false,
            SchemaMatcher::All => true,
            SchemaMatcher::Only(schemas) => schemas.contains(schema_name),
        }
    }
}
