#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogError {
    pub code: String,
    pub title: String,
    pub description: String,
}

impl CatalogError {
    pub fn new(code: &str, title: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.title, self.description)
    }
}

impl std::error::Error for CatalogError {}
