//! List Helpers
//!
//! Pure functions behind the task filters, the attachment grouping, and
//! the manager dashboard totals.

use chrono::NaiveDate;

use crate::models::{Attachment, ProjectSummary, Task, Tool, User};

/// Apply the project-detail filters to a fetched task list. `status` is a
/// status value or "all"; assignee and tool narrow by id when set. The
/// filters compose.
pub fn filter_tasks(
    tasks: &[Task],
    status: &str,
    assignee: Option<u32>,
    tool: Option<u32>,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| status == "all" || task.status == status)
        .filter(|task| assignee.is_none() || task.assigned_to == assignee)
        .filter(|task| tool.is_none() || task.tool_id == tool)
        .cloned()
        .collect()
}

/// Username for an assignee id, for rendering task rows.
pub fn user_name(users: &[User], id: Option<u32>) -> String {
    let Some(id) = id else {
        return "Unassigned".to_string();
    };
    users
        .iter()
        .find(|user| user.id == id)
        .map(|user| user.username.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Module name for a tool id.
pub fn tool_name(tools: &[Tool], id: Option<u32>) -> String {
    id.and_then(|id| tools.iter().find(|tool| tool.id == id))
        .map(|tool| tool.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Group attachments by upload date, newest day first. Order within a day
/// follows the server's list order.
pub fn group_attachments_by_date(attachments: &[Attachment]) -> Vec<(NaiveDate, Vec<Attachment>)> {
    let mut groups: Vec<(NaiveDate, Vec<Attachment>)> = Vec::new();
    for attachment in attachments {
        let date = attachment.created_at.date();
        match groups.iter_mut().find(|(day, _)| *day == date) {
            Some((_, group)) => group.push(attachment.clone()),
            None => groups.push((date, vec![attachment.clone()])),
        }
    }
    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups
}

/// Aggregate totals for the manager dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectTotals {
    pub total_projects: u32,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub pending_tasks: u32,
}

pub fn project_totals(rows: &[ProjectSummary]) -> ProjectTotals {
    let mut totals = ProjectTotals {
        total_projects: rows.len() as u32,
        ..Default::default()
    };
    for row in rows {
        totals.total_tasks += row.total_tasks;
        totals.completed_tasks += row.completed_tasks;
        totals.pending_tasks += row.pending_tasks;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use chrono::NaiveDateTime;

    fn make_task(id: u32, status: &str, assigned_to: Option<u32>, tool_id: Option<u32>) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: String::new(),
            status: status.to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
            assigned_to,
            tool_id,
            project_id: 1,
            due_date_change_reason: None,
            due_date_edited: false,
        }
    }

    fn make_attachment(id: u32, created_at: &str) -> Attachment {
        Attachment {
            id,
            filename: format!("mail-{}.eml", id),
            task_id: 1,
            created_at: NaiveDateTime::parse_from_str(created_at, "%Y-%m-%dT%H:%M:%S").unwrap(),
        }
    }

    #[test]
    fn test_filter_tasks() {
        let tasks = vec![
            make_task(1, "pending", Some(1), Some(10)),
            make_task(2, "completed", Some(1), Some(11)),
            make_task(3, "pending", Some(2), None),
            make_task(4, "in_progress", None, Some(10)),
        ];

        assert_eq!(filter_tasks(&tasks, "all", None, None).len(), 4);

        let pending = filter_tasks(&tasks, "pending", None, None);
        assert_eq!(pending.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);

        let for_user = filter_tasks(&tasks, "all", Some(1), None);
        assert_eq!(for_user.len(), 2);

        // Composed: pending AND user 1 AND tool 10
        let narrowed = filter_tasks(&tasks, "pending", Some(1), Some(10));
        assert_eq!(narrowed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);

        assert!(filter_tasks(&tasks, "completed", Some(2), None).is_empty());
    }

    #[test]
    fn test_user_and_tool_names() {
        let users = vec![User {
            id: 5,
            username: "dana".to_string(),
            email: "dana@example.com".to_string(),
            role: crate::session::Role::Member,
        }];
        assert_eq!(user_name(&users, Some(5)), "dana");
        assert_eq!(user_name(&users, Some(9)), "Unknown");
        assert_eq!(user_name(&users, None), "Unassigned");

        let tools = vec![Tool {
            id: 2,
            name: "Backend".to_string(),
            project_id: Some(1),
        }];
        assert_eq!(tool_name(&tools, Some(2)), "Backend");
        assert_eq!(tool_name(&tools, Some(3)), "Unknown");
        assert_eq!(tool_name(&tools, None), "Unknown");
    }

    #[test]
    fn test_group_attachments_by_date() {
        let attachments = vec![
            make_attachment(1, "2025-07-01T09:00:00"),
            make_attachment(2, "2025-07-03T10:00:00"),
            make_attachment(3, "2025-07-01T17:30:00"),
        ];
        let groups = group_attachments_by_date(&attachments);
        assert_eq!(groups.len(), 2);
        // Newest day first
        assert_eq!(groups[0].0, NaiveDate::from_ymd_opt(2025, 7, 3).unwrap());
        assert_eq!(groups[0].1.len(), 1);
        assert_eq!(groups[1].1.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_project_totals() {
        let rows = vec![
            ProjectSummary {
                project_name: "Alpha".to_string(),
                total_tasks: 4,
                completed_tasks: 1,
                pending_tasks: 3,
            },
            ProjectSummary {
                project_name: "Beta".to_string(),
                total_tasks: 2,
                completed_tasks: 2,
                pending_tasks: 0,
            },
        ];
        let totals = project_totals(&rows);
        assert_eq!(totals.total_projects, 2);
        assert_eq!(totals.total_tasks, 6);
        assert_eq!(totals.completed_tasks, 3);
        assert_eq!(totals.pending_tasks, 3);

        assert_eq!(project_totals(&[]), ProjectTotals::default());
    }
}
