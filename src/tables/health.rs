use std::collections::HashMap;

use serde::Serialize;

/// Dietary guidance for one health condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthGuidelines {
    pub condition: String,
    pub avoid: Vec<String>,
    pub prefer: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl HealthGuidelines {
    pub fn is_known(&self) -> bool {
        self.note.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct GuidelineEntry {
    avoid: Vec<String>,
    prefer: Vec<String>,
}

/// Health condition -> foods to avoid and prefer.
#[derive(Debug, Clone)]
pub struct HealthGuidelineTable {
    entries: HashMap<String, GuidelineEntry>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl HealthGuidelineTable {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.insert(
            "diabetes",
            owned(&["sugar", "white bread", "white rice"]),
            owned(&["whole grains", "vegetables", "lean protein"]),
        );
        table.insert(
            "pcos",
            owned(&["refined carbs", "sugar"]),
            owned(&["low-GI foods", "vegetables", "lean protein"]),
        );
        table.insert(
            "high blood pressure",
            owned(&["high sodium", "processed meats"]),
            owned(&["fruits", "vegetables", "whole grains"]),
        );
        table
    }

    pub fn insert(&mut self, condition: &str, avoid: Vec<String>, prefer: Vec<String>) {
        self.entries
            .insert(condition.trim().to_lowercase(), GuidelineEntry { avoid, prefer });
    }

    /// Guidelines for a condition; unknown conditions get empty lists and a note.
    pub fn lookup(&self, condition: &str) -> HealthGuidelines {
        match self.entries.get(&condition.trim().to_lowercase()) {
            Some(entry) => HealthGuidelines {
                condition: condition.to_string(),
                avoid: entry.avoid.clone(),
                prefer: entry.prefer.clone(),
                note: None,
            },
            None => HealthGuidelines {
                condition: condition.to_string(),
                avoid: Vec::new(),
                prefer: Vec::new(),
                note: Some(format!("No guidelines for {}", condition)),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HealthGuidelineTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = HealthGuidelineTable::builtin();
        let g = table.lookup("Diabetes");
        assert!(g.is_known());
        assert!(g.avoid.contains(&"white rice".to_string()));
        assert_eq!(g.prefer.len(), 3);
    }

    #[test]
    fn test_unknown_condition() {
        let table = HealthGuidelineTable::builtin();
        let g = table.lookup("Gout");
        assert!(!g.is_known());
        assert!(g.avoid.is_empty());
        assert_eq!(g.note.as_deref(), Some("No guidelines for Gout"));
    }
}
