use serde::{Deserialize, Serialize};

use crate::models::project::Project;

/// Every stored project, in insertion order.
///
/// Serialized as a bare JSON array.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn get_project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_project(name).is_some()
    }

    pub fn add_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    pub fn remove_project(&mut self, name: &str) -> Option<Project> {
        let index = self.projects.iter().position(|p| p.name == name)?;
        Some(self.projects.remove(index))
    }

    /// Stable sort, so projects created in the same instant keep insertion order
    pub fn into_sorted_by_creation(self) -> Vec<Project> {
        let mut projects = self.projects;
        projects.sort_by_key(|p| p.creation_date);
        projects
    }
}

impl From<Vec<Project>> for Catalog {
    fn from(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn project_at(name: &str, second: i64) -> Project {
        Project::new(name, "").stamped(Timestamp::from_second(second).unwrap())
    }

    #[test]
    fn test_sorted_by_creation_ascending() {
        let catalog = Catalog::from(vec![
            project_at("A", 1),
            project_at("B", 3),
            project_at("C", 2),
        ]);

        let names: Vec<_> = catalog
            .into_sorted_by_creation()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, ["A", "C", "B"]);
    }

    #[test]
    fn test_sort_keeps_insertion_order_on_ties() {
        let catalog = Catalog::from(vec![
            project_at("late", 5),
            project_at("first", 1),
            project_at("second", 1),
            project_at("third", 1),
        ]);

        let names: Vec<_> = catalog
            .into_sorted_by_creation()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, ["first", "second", "third", "late"]);
    }

    #[test]
    fn test_remove_project() {
        let mut catalog = Catalog::from(vec![project_at("A", 1), project_at("B", 2)]);

        assert_eq!(catalog.remove_project("A").map(|p| p.name), Some("A".into()));
        assert!(catalog.remove_project("A").is_none());
        assert!(!catalog.contains("A"));
        assert!(catalog.contains("B"));
    }

    #[test]
    fn test_serializes_as_array() {
        let catalog = Catalog::from(vec![project_at("A", 0)]);
        let json = serde_json::to_string(&catalog).unwrap();

        assert!(json.starts_with('['));
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
