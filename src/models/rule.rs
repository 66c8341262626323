use serde::{Deserialize, Serialize};
use std::fmt;

/// A trading rule the trader wants to follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Rule {
    pub fn new(id: &str, name: &str, description: &str, category: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.map(|c| c.to_string()),
        }
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or("uncategorized")
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {} ({})",
            self.id,
            self.name,
            self.description,
            self.category_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_falls_back_to_uncategorized() {
        let rule = Rule::new("risk-02", "Max loss", "Cut at 1R", None);
        assert_eq!(rule.to_string(), "[risk-02] Max loss - Cut at 1R (uncategorized)");
    }

    #[test]
    fn display_includes_category() {
        let rule = Rule::new("setup-01", "A+ only", "Wait for the setup", Some("entry"));
        assert_eq!(rule.to_string(), "[setup-01] A+ only - Wait for the setup (entry)");
    }
}
