//! Permission Rules
//!
//! UI gating derived from backend flags and ownership. The backend still
//! enforces access; these only decide which controls are shown.

use crate::models::{Project, Task, User};

pub fn is_owner(project: &Project, user: Option<&User>) -> bool {
    match (project.owner.as_ref(), user) {
        (Some(owner), Some(user)) => owner.id == user.id,
        _ => false,
    }
}

pub fn can_create_tasks(project: &Project) -> bool {
    project.can_edit
}

pub fn can_edit_task(project: &Project, task: &Task, user: Option<&User>) -> bool {
    project.can_edit || is_creator(task, user) || is_assignee(task, user)
}

pub fn can_delete_task(project: &Project, task: &Task, user: Option<&User>) -> bool {
    project.can_edit || is_creator(task, user)
}

fn is_creator(task: &Task, user: Option<&User>) -> bool {
    same_user(task.creator.as_ref(), user)
}

fn is_assignee(task: &Task, user: Option<&User>) -> bool {
    same_user(task.assignee.as_ref(), user)
}

fn same_user(a: Option<&User>, b: Option<&User>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a.id == b.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: i64) -> User {
        User { id, first_name: "U".into(), last_name: id.to_string(), email: format!("u{}@example.com", id) }
    }

    fn project(owner: i64, can_edit: bool) -> Project {
        serde_json::from_value(json!({
            "id": 1, "name": "P", "status": "ACTIVE", "priority": "LOW",
            "owner": user(owner), "canEdit": can_edit
        }))
        .unwrap()
    }

    fn task(creator: Option<i64>, assignee: Option<i64>) -> Task {
        serde_json::from_value(json!({
            "id": 5, "title": "T", "status": "TODO", "priority": "LOW",
            "creator": creator.map(user), "assignee": assignee.map(user)
        }))
        .unwrap()
    }

    #[test]
    fn test_owner_check_needs_a_user() {
        let p = project(1, false);
        assert!(is_owner(&p, Some(&user(1))));
        assert!(!is_owner(&p, Some(&user(2))));
        assert!(!is_owner(&p, None));
    }

    #[test]
    fn test_editors_can_do_everything() {
        let p = project(1, true);
        let t = task(Some(8), None);
        assert!(can_create_tasks(&p));
        assert!(can_edit_task(&p, &t, None));
        assert!(can_delete_task(&p, &t, None));
    }

    #[test]
    fn test_assignee_may_edit_but_not_delete() {
        let p = project(1, false);
        let t = task(Some(8), Some(9));
        let me = user(9);
        assert!(!can_create_tasks(&p));
        assert!(can_edit_task(&p, &t, Some(&me)));
        assert!(!can_delete_task(&p, &t, Some(&me)));
    }

    #[test]
    fn test_creator_may_edit_and_delete() {
        let p = project(1, false);
        let t = task(Some(8), None);
        let me = user(8);
        assert!(can_edit_task(&p, &t, Some(&me)));
        assert!(can_delete_task(&p, &t, Some(&me)));
        assert!(!can_delete_task(&p, &t, Some(&user(3))));
    }
}
