use serde_json::Value;

use crate::ideas::repo::IdeaStatus;

/// Result of checking an incoming payload. Violations accumulate in field
/// order so the caller sees every problem at once.
#[derive(Debug, PartialEq)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl Validation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

fn check_credential_field(
    data: &Value,
    field: &str,
    label: &str,
    min: usize,
    max: usize,
    errors: &mut Vec<String>,
) {
    match data.get(field).and_then(Value::as_str) {
        None | Some("") => errors.push(format!("{label} is required and must be a string")),
        Some(s) if s.chars().count() < min => {
            errors.push(format!("{label} must be at least {min} characters long"))
        }
        Some(s) if s.chars().count() > max => {
            errors.push(format!("{label} must be less than {max} characters"))
        }
        Some(_) => {}
    }
}

/// Checks a registration payload: username 3-50 chars, password 6-100 chars.
pub fn validate_user_input(data: &Value) -> Validation {
    let mut errors = Vec::new();
    check_credential_field(data, "username", "Username", 3, 50, &mut errors);
    check_credential_field(data, "password", "Password", 6, 100, &mut errors);
    Validation::from_errors(errors)
}

/// Checks an idea payload: title required and at most 200 chars, description
/// optional up to 1000 chars, status restricted to the known set.
pub fn validate_idea_input(data: &Value) -> Validation {
    let mut errors = Vec::new();

    match data.get("title").and_then(Value::as_str) {
        None => errors.push("Title is required and must be a string".into()),
        Some("") => errors.push("Title cannot be empty".into()),
        Some(t) if t.chars().count() > 200 => {
            errors.push("Title must be less than 200 characters".into())
        }
        Some(_) => {}
    }

    if let Some(desc) = data.get("description").filter(|v| !v.is_null()) {
        match desc.as_str() {
            Some(s) if s.chars().count() > 1000 => {
                errors.push("Description must be less than 1000 characters".into())
            }
            Some(_) => {}
            None => errors.push("Description must be a string".into()),
        }
    }

    if let Some(status) = data.get("status").filter(|v| !v.is_null()) {
        let recognized = status.as_str().and_then(IdeaStatus::parse).is_some();
        if !recognized {
            errors.push(format!(
                "Status must be one of: {}",
                IdeaStatus::allowed_list()
            ));
        }
    }

    Validation::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_valid_user_input() {
        let result = validate_user_input(&json!({
            "username": "testuser",
            "password": "password123"
        }));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn rejects_short_username() {
        let result = validate_user_input(&json!({"username": "ab", "password": "password123"}));
        assert!(!result.is_valid);
        assert!(result
            .errors
            .contains(&"Username must be at least 3 characters long".to_string()));
    }

    #[test]
    fn rejects_short_password() {
        let result = validate_user_input(&json!({"username": "testuser", "password": "123"}));
        assert!(!result.is_valid);
        assert!(result
            .errors
            .contains(&"Password must be at least 6 characters long".to_string()));
    }

    #[test]
    fn missing_fields_accumulate_both_errors() {
        let result = validate_user_input(&json!({}));
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                "Username is required and must be a string",
                "Password is required and must be a string"
            ]
        );
    }

    #[test]
    fn non_string_fields_report_required_message() {
        let result = validate_user_input(&json!({"username": 42, "password": true}));
        assert_eq!(
            result.errors,
            vec![
                "Username is required and must be a string",
                "Password is required and must be a string"
            ]
        );
    }

    #[test]
    fn overlong_username_is_rejected() {
        let result = validate_user_input(&json!({
            "username": "x".repeat(51),
            "password": "password123"
        }));
        assert!(result
            .errors
            .contains(&"Username must be less than 50 characters".to_string()));
    }

    #[test]
    fn accepts_valid_idea_input() {
        let result = validate_idea_input(&json!({
            "title": "Test Idea",
            "description": "This is a test idea",
            "status": "Concept"
        }));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn rejects_missing_title() {
        let result = validate_idea_input(&json!({
            "description": "This is a test idea",
            "status": "Concept"
        }));
        assert!(!result.is_valid);
        assert!(result
            .errors
            .contains(&"Title is required and must be a string".to_string()));
    }

    #[test]
    fn rejects_empty_title() {
        let result = validate_idea_input(&json!({"title": ""}));
        assert!(result.errors.contains(&"Title cannot be empty".to_string()));
    }

    #[test]
    fn rejects_unknown_status_naming_the_allowed_set() {
        let result = validate_idea_input(&json!({
            "title": "Test Idea",
            "status": "Invalid Status"
        }));
        assert!(!result.is_valid);
        assert!(result.errors.contains(
            &"Status must be one of: Concept, In Progress, Completed, On Hold".to_string()
        ));
    }

    #[test]
    fn allows_absent_description_and_status() {
        let result = validate_idea_input(&json!({"title": "Test Idea"}));
        assert!(result.is_valid);
    }

    #[test]
    fn rejects_non_string_description() {
        let result = validate_idea_input(&json!({"title": "Test Idea", "description": 7}));
        assert!(result
            .errors
            .contains(&"Description must be a string".to_string()));
    }

    #[test]
    fn rejects_overlong_description() {
        let result = validate_idea_input(&json!({
            "title": "Test Idea",
            "description": "d".repeat(1001)
        }));
        assert!(result
            .errors
            .contains(&"Description must be less than 1000 characters".to_string()));
    }

    #[test]
    fn boundary_lengths_are_valid() {
        let result = validate_idea_input(&json!({
            "title": "t".repeat(200),
            "description": "d".repeat(1000)
        }));
        assert!(result.is_valid);
    }
}
