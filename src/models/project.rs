use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Name of the project, unique within a catalog
    pub name: String,
    /// Free text description
    #[serde(default)]
    pub description: String,
    /// When the project was saved, assigned by the repository
    pub creation_date: Timestamp,
    /// Last time the project was touched
    #[serde(default)]
    pub last_edit: Timestamp,
}

impl Project {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Project::default()
        }
    }

    /// Stamps both timestamps, overwriting whatever the caller put there
    pub fn stamped(self, now: Timestamp) -> Self {
        Self {
            creation_date: now,
            last_edit: now,
            ..self
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidNameReason {
    #[error("name cannot be empty")]
    Empty,

    #[error("'.' and '..' are not valid names")]
    DotSegment,

    #[error("name cannot contain '{0}'")]
    ForbiddenCharacter(char),
}

/// Names double as directory names, so they must be a single path segment.
pub fn validate_name(name: &str) -> Result<(), InvalidNameReason> {
    if name.trim().is_empty() {
        return Err(InvalidNameReason::Empty);
    }

    if name == "." || name == ".." {
        return Err(InvalidNameReason::DotSegment);
    }

    if let Some(c) = name.chars().find(|c| matches!(*c, '/' | '\\' | '\0')) {
        return Err(InvalidNameReason::ForbiddenCharacter(c));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamped_overwrites_caller_dates() {
        let caller_date = Timestamp::from_second(42).unwrap();
        let now = Timestamp::from_second(1_000).unwrap();
        let project = Project {
            creation_date: caller_date,
            last_edit: caller_date,
            ..Project::new("Apollo", "moon")
        };

        let stamped = project.stamped(now);

        assert_eq!(stamped.creation_date, now);
        assert_eq!(stamped.last_edit, now);
        assert_eq!(stamped.name, "Apollo");
        assert_eq!(stamped.description, "moon");
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let project = Project::new("Apollo", "moon").stamped(Timestamp::from_second(0).unwrap());
        let value = serde_json::to_value(&project).unwrap();

        assert_eq!(value["name"], "Apollo");
        assert_eq!(value["description"], "moon");
        assert_eq!(value["creationDate"], "1970-01-01T00:00:00Z");
        assert_eq!(value["lastEdit"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_deserializes_record_without_optional_fields() {
        let json = r#"{"name": "Gemini", "creationDate": "2009-11-10T23:00:00Z"}"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.name, "Gemini");
        assert_eq!(project.description, "");
        assert_eq!(project.creation_date.to_string(), "2009-11-10T23:00:00Z");
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Apollo 11").is_ok());
        assert!(validate_name("día-1").is_ok());
        assert_eq!(validate_name(""), Err(InvalidNameReason::Empty));
        assert_eq!(validate_name("   "), Err(InvalidNameReason::Empty));
        assert_eq!(validate_name(".."), Err(InvalidNameReason::DotSegment));
        assert_eq!(
            validate_name("a/b"),
            Err(InvalidNameReason::ForbiddenCharacter('/'))
        );
        assert_eq!(
            validate_name("a\\b"),
            Err(InvalidNameReason::ForbiddenCharacter('\\'))
        );
    }
}
