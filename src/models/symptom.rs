use serde::{Deserialize, Serialize};

use super::SymptomId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: SymptomId,
    pub name: String,
    pub category: Option<String>,
}

impl Symptom {
    /// True when this symptom belongs to `category` (case-insensitive).
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_match_ignores_case() {
        let s = Symptom {
            id: 1,
            name: "Vomiting".into(),
            category: Some("Digestive".into()),
        };
        assert!(s.in_category("digestive"));
        assert!(!s.in_category("Skin"));
    }

    #[test]
    fn uncategorised_symptom_matches_nothing() {
        let s = Symptom {
            id: 2,
            name: "Lethargy".into(),
            category: None,
        };
        assert!(!s.in_category("General"));
    }
}
