use std::path::Path;

use serde::{Deserialize, Serialize};

/// One entry of the static catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub proficiency: String,
}

/// Query-string filters for the catalog listing. Anything unset passes
/// through untouched.
#[derive(Debug, Default, Deserialize)]
pub struct SkillFilters {
    pub proficiency: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Read the catalog fresh from disk; the file is re-read on every request so
/// edits show up without a restart.
pub async fn load(path: &Path) -> anyhow::Result<Vec<Skill>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let skills = serde_json::from_str(&raw)?;
    Ok(skills)
}

/// Case-insensitive exact match on proficiency, case-insensitive substring
/// match on category, optional ascending sort by name.
pub fn apply(mut skills: Vec<Skill>, filters: &SkillFilters) -> Vec<Skill> {
    if let Some(proficiency) = &filters.proficiency {
        let wanted = proficiency.to_lowercase();
        skills.retain(|s| s.proficiency.to_lowercase() == wanted);
    }
    if let Some(category) = &filters.category {
        let wanted = category.to_lowercase();
        skills.retain(|s| s.category.to_lowercase().contains(&wanted));
    }
    if filters.sort.as_deref() == Some("name") {
        skills.sort_by_key(|s| s.name.to_lowercase());
    }
    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Skill> {
        let entries = [
            (1, "Python", "Programming Languages", "Advanced"),
            (2, "docker", "DevOps", "Beginner"),
            (3, "JavaScript", "Programming Languages", "Intermediate"),
            (4, "CSS", "Frontend", "Advanced"),
        ];
        entries
            .into_iter()
            .map(|(id, name, category, proficiency)| Skill {
                id,
                name: name.into(),
                category: category.into(),
                proficiency: proficiency.into(),
            })
            .collect()
    }

    #[test]
    fn no_filters_pass_everything_through() {
        let out = apply(fixture(), &SkillFilters::default());
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn proficiency_match_is_case_insensitive_and_exact() {
        let filters = SkillFilters {
            proficiency: Some("advanced".into()),
            ..Default::default()
        };
        let out = apply(fixture(), &filters);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|s| s.proficiency == "Advanced"));
    }

    #[test]
    fn category_match_is_substring() {
        let filters = SkillFilters {
            category: Some("programming".into()),
            ..Default::default()
        };
        let out = apply(fixture(), &filters);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn sort_by_name_is_ascending_case_insensitive() {
        let filters = SkillFilters {
            sort: Some("name".into()),
            ..Default::default()
        };
        let names: Vec<String> = apply(fixture(), &filters)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["CSS", "docker", "JavaScript", "Python"]);
    }

    #[test]
    fn unknown_sort_key_leaves_order_alone() {
        let filters = SkillFilters {
            sort: Some("id".into()),
            ..Default::default()
        };
        let ids: Vec<i64> = apply(fixture(), &filters).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn load_reads_the_shipped_catalog() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/skills.json");
        let skills = load(&path).await.expect("catalog file parses");
        assert!(!skills.is_empty());
        assert!(skills.iter().any(|s| s.id == 1));
    }

    #[tokio::test]
    async fn load_errors_on_missing_file() {
        let path = std::path::Path::new("no/such/file.json");
        assert!(load(path).await.is_err());
    }
}
