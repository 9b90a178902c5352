//! Client-side Filtering
//!
//! Narrows the loaded project list by status, priority and search text.

use crate::models::{Priority, Project, ProjectStatus};

/// Current filter selection on the projects page; `None` means "all"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub query: String,
}

impl ProjectFilter {
    pub fn is_active(&self) -> bool {
        self.status.is_some() || self.priority.is_some() || !blank(&self.query)
    }

    pub fn matches(&self, project: &Project) -> bool {
        let status_ok = self.status.map_or(true, |s| project.status == s);
        let priority_ok = self.priority.map_or(true, |p| project.priority == p);
        status_ok && priority_ok && matches_query(project, &self.query)
    }

    pub fn apply(&self, projects: &[Project]) -> Vec<Project> {
        projects.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

fn blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive substring on name or description; blank matches all
fn matches_query(project: &Project, query: &str) -> bool {
    if blank(query) {
        return true;
    }
    let query = query.trim().to_lowercase();
    project.name.to_lowercase().contains(&query)
        || project
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&query))
}

/// Parse a `<select>` value where "all" clears the filter
pub fn parse_choice<T: std::str::FromStr>(value: &str) -> Option<T> {
    if value == "all" {
        None
    } else {
        value.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: i64, name: &str, description: Option<&str>, status: ProjectStatus, priority: Priority) -> Project {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "description": description,
            "status": status,
            "priority": priority,
        }))
        .unwrap()
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, "Website redesign", Some("New landing page"), ProjectStatus::Active, Priority::High),
            project(2, "Mobile app", None, ProjectStatus::Completed, Priority::High),
            project(3, "Quarterly report", Some("Finance WEBSITE numbers"), ProjectStatus::Active, Priority::Low),
        ]
    }

    fn ids(projects: &[Project]) -> Vec<i64> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let filter = ProjectFilter::default();
        assert!(!filter.is_active());
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 2, 3]);
    }

    #[test]
    fn test_status_and_priority_narrow_the_list() {
        let by_status = ProjectFilter { status: Some(ProjectStatus::Active), ..Default::default() };
        assert_eq!(ids(&by_status.apply(&sample())), vec![1, 3]);

        let both = ProjectFilter {
            status: Some(ProjectStatus::Active),
            priority: Some(Priority::High),
            ..Default::default()
        };
        assert!(both.is_active());
        assert_eq!(ids(&both.apply(&sample())), vec![1]);
    }

    #[test]
    fn test_query_matches_name_or_description_case_insensitively() {
        let filter = ProjectFilter { query: "website".into(), ..Default::default() };
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 3]);

        let none = ProjectFilter { query: "zebra".into(), ..Default::default() };
        assert!(none.apply(&sample()).is_empty());
    }

    #[test]
    fn test_whitespace_query_is_inactive_and_keeps_everything() {
        let filter = ProjectFilter { query: "   ".into(), ..Default::default() };
        assert!(!filter.is_active());
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 2, 3]);

        let padded = ProjectFilter { query: "  mobile ".into(), ..Default::default() };
        assert!(padded.is_active());
        assert_eq!(ids(&padded.apply(&sample())), vec![2]);
    }

    #[test]
    fn test_select_all_clears_choice() {
        assert_eq!(parse_choice::<Priority>("all"), None);
        assert_eq!(parse_choice::<Priority>("URGENT"), Some(Priority::Urgent));
        assert_eq!(parse_choice::<ProjectStatus>("bogus"), None);
    }
}
