//! Client Session
//!
//! Derives the signed-in user from the stored bearer token and holds the
//! role policy applied across views. The token is opaque to the client
//! except for its payload segment, which carries the user claims.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Comment, Task};

/// User roles, least to most privileged. Order matches the role dropdown.
pub const ROLES: &[Role] = &[Role::Member, Role::Manager, Role::Admin];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Member,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Member => "member",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "member" => Some(Role::Member),
            _ => None,
        }
    }

    /// Admins and managers can create/delete projects and tasks and manage
    /// a project's modules.
    pub fn can_manage(self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims carried in the token payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub user_id: u32,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Session {
    /// A task can be updated by its assignee or by admins/managers.
    pub fn can_edit_task(&self, task: &Task) -> bool {
        task.assigned_to == Some(self.user_id) || self.role.can_manage()
    }

    /// Comments are editable by their author only.
    pub fn can_edit_comment(&self, comment: &Comment) -> bool {
        comment.user.id == self.user_id
    }

    /// Comment deletion is admin-only.
    pub fn can_delete_comment(&self) -> bool {
        self.role.is_admin()
    }
}

/// Decode the payload segment of a JWT into a [`Session`].
///
/// header.payload.signature, payload base64url without padding. The
/// signature is not checked here; the server validates every request.
/// Returns None for anything malformed.
pub fn decode_token(token: &str) -> Option<Session> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload),
            URL_SAFE_NO_PAD.encode("signature")
        )
    }

    fn task_assigned_to(user_id: Option<u32>) -> Task {
        Task {
            id: 1,
            title: "Write report".to_string(),
            description: "".to_string(),
            status: "pending".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
            assigned_to: user_id,
            tool_id: None,
            project_id: 1,
            due_date_change_reason: None,
            due_date_edited: false,
        }
    }

    #[test]
    fn test_decode_token() {
        let token = token_with_payload(
            r#"{"user_id":7,"username":"alice","email":"alice@example.com","role":"manager","exp":1754300000}"#,
        );
        let session = decode_token(&token).unwrap();
        assert_eq!(session.user_id, 7);
        assert_eq!(session.username, "alice");
        assert_eq!(session.role, Role::Manager);
        assert_eq!(session.exp, Some(1754300000));
    }

    #[test]
    fn test_decode_token_without_exp() {
        let token = token_with_payload(
            r#"{"user_id":2,"username":"bob","email":"bob@example.com","role":"member"}"#,
        );
        let session = decode_token(&token).unwrap();
        assert_eq!(session.exp, None);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(decode_token(""), None);
        assert_eq!(decode_token("not-a-token"), None);
        assert_eq!(decode_token("a.!!!.c"), None);
        // Valid base64 but not the expected JSON shape
        let token = token_with_payload(r#"{"sub":"7"}"#);
        assert_eq!(decode_token(&token), None);
    }

    #[test]
    fn test_decode_rejects_unknown_role() {
        let token = token_with_payload(
            r#"{"user_id":1,"username":"x","email":"x@example.com","role":"owner"}"#,
        );
        assert_eq!(decode_token(&token), None);
    }

    #[test]
    fn test_role_policy() {
        assert!(Role::Admin.can_manage());
        assert!(Role::Manager.can_manage());
        assert!(!Role::Member.can_manage());
        assert!(Role::Admin.is_admin());
        assert!(!Role::Manager.is_admin());
        assert_eq!(Role::parse("manager"), Some(Role::Manager));
        assert_eq!(Role::parse("root"), None);
    }

    #[test]
    fn test_task_edit_policy() {
        let member = Session {
            user_id: 3,
            username: "carol".to_string(),
            email: "carol@example.com".to_string(),
            role: Role::Member,
            exp: None,
        };
        // Members may only edit their own tasks
        assert!(member.can_edit_task(&task_assigned_to(Some(3))));
        assert!(!member.can_edit_task(&task_assigned_to(Some(4))));
        assert!(!member.can_edit_task(&task_assigned_to(None)));

        let manager = Session { role: Role::Manager, ..member };
        assert!(manager.can_edit_task(&task_assigned_to(Some(4))));
    }
}
