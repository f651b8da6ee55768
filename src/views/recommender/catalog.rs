//! The skill catalog: a fixed table embedded at build time and parsed once at startup.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const CATALOG_JSON: &str = include_str!("../../../assets/skills.json");

/// A skill with its average annual income and yearly growth rate (percent).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub income: u32,
    pub growth: f64,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("skill catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("skill catalog is empty")]
    Empty,
    #[error("skill \"{0}\" appears more than once in the catalog")]
    DuplicateName(String),
    #[error("skill \"{0}\" has a non-finite growth rate")]
    InvalidGrowth(String),
}

/// Read-only, ordered skill table.
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    /// Parse the embedded `assets/skills.json`.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let skills: Vec<Skill> = serde_json::from_str(json)?;
        Self::from_skills(skills)
    }

    pub fn from_skills(skills: Vec<Skill>) -> Result<Self, CatalogError> {
        if skills.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(skills.len());
        for skill in &skills {
            if !skill.growth.is_finite() {
                return Err(CatalogError::InvalidGrowth(skill.name.clone()));
            }
            if !seen.insert(skill.name.as_str()) {
                return Err(CatalogError::DuplicateName(skill.name.clone()));
            }
        }

        Ok(Self { skills })
    }

    /// All skills in catalog order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Autocomplete filter: skills whose name contains `query`, ignoring case.
    /// An empty (or all-whitespace) query matches everything, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Skill> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.skills.iter().collect();
        }
        self.skills
            .iter()
            .filter(|s| s.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(catalog: &'a SkillCatalog, name: &str) -> Option<&'a Skill> {
        catalog.skills().iter().find(|s| s.name == name)
    }

    fn skill(name: &str, income: u32, growth: f64) -> Skill {
        Skill {
            name: name.into(),
            income,
            growth,
        }
    }

    #[test]
    fn embedded_catalog_loads() {
        let catalog = SkillCatalog::load().unwrap();
        assert_eq!(catalog.skills().len(), 15);
        assert_eq!(catalog.skills()[0].name, "Artificial Intelligence");
        assert_eq!(catalog.skills()[14].name, "Mobile Development");
    }

    #[test]
    fn embedded_catalog_values() {
        let catalog = SkillCatalog::load().unwrap();
        let cv = get(&catalog, "Computer Vision").unwrap();
        assert_eq!(cv.income, 125_000);
        assert_eq!(cv.growth, 24.0);
        let js = get(&catalog, "JavaScript").unwrap();
        assert_eq!(js.income, 100_000);
        assert_eq!(js.growth, 12.0);
    }

    #[test]
    fn get_unknown_name() {
        let catalog = SkillCatalog::load().unwrap();
        assert!(get(&catalog, "COBOL").is_none());
        // Lookup is exact, not case-insensitive
        assert!(get(&catalog, "python").is_none());
    }

    #[test]
    fn search_empty_query_returns_all_in_order() {
        let catalog = SkillCatalog::load().unwrap();
        let all = catalog.search("");
        assert_eq!(all.len(), 15);
        assert_eq!(all[3].name, "Computer Vision");
        assert_eq!(catalog.search("   ").len(), 15);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = SkillCatalog::load().unwrap();
        let names: Vec<&str> = catalog.search("LEARN").iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Machine Learning", "Deep Learning"]);

        let names: Vec<&str> = catalog.search("script").iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["JavaScript"]);
    }

    #[test]
    fn search_no_match() {
        let catalog = SkillCatalog::load().unwrap();
        assert!(catalog.search("fortran").is_empty());
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(SkillCatalog::from_json("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SkillCatalog::from_json(r#"[{ "name": "Rust" }]"#);
        assert!(matches!(err, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn rejects_negative_income() {
        let err = SkillCatalog::from_json(r#"[{ "name": "Rust", "income": -1, "growth": 3 }]"#);
        assert!(matches!(err, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = SkillCatalog::from_skills(vec![
            skill("Rust", 130_000, 30.0),
            skill("Go", 120_000, 10.0),
            skill("Rust", 90_000, 1.0),
        ]);
        match err {
            Err(CatalogError::DuplicateName(name)) => assert_eq!(name, "Rust"),
            _ => panic!("expected DuplicateName"),
        }
    }

    #[test]
    fn rejects_non_finite_growth() {
        let err = SkillCatalog::from_skills(vec![skill("Rust", 130_000, f64::NAN)]);
        assert!(matches!(err, Err(CatalogError::InvalidGrowth(_))));
    }

    #[test]
    fn error_messages() {
        assert_eq!(CatalogError::Empty.to_string(), "skill catalog is empty");
        assert_eq!(
            CatalogError::DuplicateName("Go".into()).to_string(),
            "skill \"Go\" appears more than once in the catalog"
        );
    }
}
