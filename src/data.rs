//! Project Activity Store
//!
//! Holds the shared project activities that the questionnaire fetched for
//! each project. The store is loaded once from a JSON file shaped as
//! `{ "<project id>": [ { "activityType": "bus", "distanceKm": 120 }, ... ] }`.

use crate::answers::ProjectActivity;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct ProjectActivityStore {
    /// Project ID → activities attributed to the whole project
    projects: FxHashMap<String, Vec<ProjectActivity>>,
}

impl ProjectActivityStore {
    /// Load all projects from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read project activities file: {:?}", path))?;

        let store = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse project activities: {:?}", path))?;

        let skipped = store
            .projects
            .values()
            .flatten()
            .filter(|a| a.contributing_km().is_none())
            .count();
        if skipped > 0 {
            tracing::warn!("{} project activities have no usable distance and will be skipped", skipped);
        }

        tracing::info!(
            "Loaded {} projects ({} activities) from {:?}",
            store.projects.len(),
            store.activity_count(),
            path
        );

        Ok(store)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let projects: FxHashMap<String, Vec<ProjectActivity>> =
            serde_json::from_str(json).context("Invalid project activities JSON")?;
        Ok(Self { projects })
    }

    pub fn contains(&self, project_id: &str) -> bool {
        self.projects.contains_key(project_id)
    }

    /// Activities of a project; empty when the project has none recorded
    pub fn activities(&self, project_id: &str) -> &[ProjectActivity] {
        self.projects
            .get(project_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn activity_count(&self) -> usize {
        self.projects.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::ActivityType;

    const STORE_JSON: &str = r#"{
        "youth-exchange-2024": [
            {"activityType": "bus", "distanceKm": 120, "description": "Day trip"},
            {"activityType": "boat", "distanceKm": "35"}
        ],
        "training-course": []
    }"#;

    #[test]
    fn test_from_json() {
        let store = ProjectActivityStore::from_json(STORE_JSON).unwrap();

        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        assert_eq!(store.activity_count(), 2);

        let activities = store.activities("youth-exchange-2024");
        assert_eq!(activities[0].activity_type, ActivityType::Bus);
        assert_eq!(activities[0].description.as_deref(), Some("Day trip"));
        assert_eq!(activities[1].contributing_km(), Some(35.0));
    }

    #[test]
    fn test_unknown_project_is_empty() {
        let store = ProjectActivityStore::from_json(STORE_JSON).unwrap();
        assert!(store.activities("missing").is_empty());
        assert!(!store.contains("missing"));
        assert!(store.contains("training-course"));
    }

    #[test]
    fn test_empty_store() {
        let store = ProjectActivityStore::from_json("{}").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.activity_count(), 0);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = ProjectActivityStore::from_json(r#"{"p": [{"activityType": "plane"}]}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = ProjectActivityStore::load(Path::new("/nonexistent/activities.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read project activities file"));
    }
}
