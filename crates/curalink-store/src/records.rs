//! Record schemas for locally-owned documents.
//!
//! Each struct maps to one collection (lowercase name). Roles and question
//! status are closed enumerations checked at deserialization; the forum
//! write gates live here next to the records they protect.

use curalink_common::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const COLLECTION_PATIENT: &str = "patient";
pub const COLLECTION_RESEARCHER: &str = "researcher";
pub const COLLECTION_FORUM_QUESTION: &str = "forumquestion";
pub const COLLECTION_FORUM_REPLY: &str = "forumreply";
pub const COLLECTION_FAVORITE: &str = "favorite";

/// Closed set of user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Researcher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient    => "patient",
            Role::Researcher => "researcher",
        }
    }
}

/// Closed set of forum question states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    #[default]
    Open,
    Closed,
    Answered,
}

// ── Profiles ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub global_experts: bool,
    #[serde(default)]
    pub pub_query: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Researcher {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub orcid: Option<String>,
    #[serde(default)]
    pub researchgate: Option<String>,
    #[serde(default)]
    pub available_meetings: bool,
}

// ── Forums ─────────────────────────────────────────────────────────────────

fn patient_role() -> Role {
    Role::Patient
}

fn researcher_role() -> Role {
    Role::Researcher
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumQuestion {
    #[serde(default = "patient_role")]
    pub author_role: Role,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: QuestionStatus,
}

impl ForumQuestion {
    /// Write gate: only patients may create questions. Checked before any
    /// persistence side effect.
    pub fn authorize(&self) -> Result<(), ApiError> {
        if self.author_role != Role::Patient {
            return Err(ApiError::Forbidden(
                "only patients can create questions".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumReply {
    pub question_id: String,
    #[serde(default = "researcher_role")]
    pub author_role: Role,
    #[serde(default)]
    pub author_id: Option<String>,
    pub body: String,
}

impl ForumReply {
    /// Write gate: only researchers may reply.
    pub fn authorize(&self) -> Result<(), ApiError> {
        if self.author_role != Role::Researcher {
            return Err(ApiError::Forbidden(
                "only researchers can reply".to_string(),
            ));
        }
        Ok(())
    }
}

// ── Favorites ──────────────────────────────────────────────────────────────

/// Saved item payload, tagged by `item_type`. The payload itself stays
/// opaque; unknown tags are rejected at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "item_type", content = "item", rename_all = "lowercase")]
pub enum FavoriteItem {
    Publication(Value),
    Trial(Value),
    Expert(Value),
    Collaborator(Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    #[serde(default)]
    pub user_id: Option<String>,
    pub user_role: Role,
    #[serde(flatten)]
    pub item: FavoriteItem,
}

/// Expert record shape carried by `FavoriteItem::Expert` payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expert {
    pub name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_question_gate_rejects_researcher() {
        let q = ForumQuestion {
            author_role: Role::Researcher,
            author_id: None,
            category: None,
            title: "t".into(),
            body: "b".into(),
            tags: vec![],
            status: QuestionStatus::Open,
        };
        assert!(matches!(q.authorize(), Err(ApiError::Forbidden(_))));
    }

    #[test]
    fn test_question_gate_accepts_patient() {
        let q: ForumQuestion =
            serde_json::from_value(json!({"title": "t", "body": "b"})).unwrap();
        assert_eq!(q.author_role, Role::Patient);
        assert_eq!(q.status, QuestionStatus::Open);
        assert!(q.authorize().is_ok());
    }

    #[test]
    fn test_reply_gate() {
        let ok: ForumReply =
            serde_json::from_value(json!({"question_id": "q1", "body": "b"})).unwrap();
        assert!(ok.authorize().is_ok());

        let bad: ForumReply = serde_json::from_value(
            json!({"question_id": "q1", "body": "b", "author_role": "patient"}),
        )
        .unwrap();
        assert!(matches!(bad.authorize(), Err(ApiError::Forbidden(_))));
    }

    #[test]
    fn test_role_rejects_unknown_value() {
        assert!(serde_json::from_value::<Role>(json!("admin")).is_err());
    }

    #[test]
    fn test_favorite_wire_shape() {
        let fav: Favorite = serde_json::from_value(json!({
            "user_id": "u1",
            "user_role": "patient",
            "item_type": "trial",
            "item": {"nct_id": "NCT01234567", "title": "A study"}
        }))
        .unwrap();
        assert!(matches!(fav.item, FavoriteItem::Trial(_)));

        let back = serde_json::to_value(&fav).unwrap();
        assert_eq!(back["item_type"], "trial");
        assert_eq!(back["item"]["nct_id"], "NCT01234567");
    }

    #[test]
    fn test_favorite_rejects_unknown_item_type() {
        let result = serde_json::from_value::<Favorite>(json!({
            "user_role": "patient",
            "item_type": "bookmark",
            "item": {}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_expert_payload_round_trips_through_favorite() {
        let expert = Expert {
            name: "Dr. Chen".into(),
            affiliation: Some("MGH".into()),
            specialties: vec!["oncology".into()],
            city: None,
            country: Some("US".into()),
            contact: None,
        };
        let fav = Favorite {
            user_id: Some("u2".into()),
            user_role: Role::Researcher,
            item: FavoriteItem::Expert(serde_json::to_value(&expert).unwrap()),
        };
        let value = serde_json::to_value(&fav).unwrap();
        assert_eq!(value["item_type"], "expert");
        assert_eq!(value["item"]["name"], "Dr. Chen");
    }
}
