use serde::{Deserialize, Serialize};

use super::status::IdeaStatus;
use crate::models::user::UserBrief;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdeaCategory {
    Innovation,
    #[serde(rename = "Cost-Saving")]
    CostSaving,
    Productivity,
}

impl IdeaCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaCategory::Innovation => "Innovation",
            IdeaCategory::CostSaving => "Cost-Saving",
            IdeaCategory::Productivity => "Productivity",
        }
    }

    pub fn parse(s: &str) -> Option<IdeaCategory> {
        match s {
            "Innovation" => Some(IdeaCategory::Innovation),
            "Cost-Saving" => Some(IdeaCategory::CostSaving),
            "Productivity" => Some(IdeaCategory::Productivity),
            _ => None,
        }
    }
}

/// Terminal reward denormalized onto the idea.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaReward {
    pub points: i64,
    pub given_by: i64,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub created_by: i64,
    pub created_at: String,
}

/// Comment with the author's details joined in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithUser {
    pub id: i64,
    pub text: String,
    pub created_by: i64,
    pub created_at: String,
    pub created_by_user: Option<UserBrief>,
}

/// Full idea document: row plus its child collections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: IdeaCategory,
    pub submitted_by: i64,
    pub status: IdeaStatus,
    pub files: Vec<String>,
    pub likes: Vec<i64>,
    pub comments: Vec<Comment>,
    pub feedback: Vec<i64>,
    pub reward: Option<IdeaReward>,
    pub updated_by: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// Idea with submitter and comment-author details joined in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaWithUsers {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: IdeaCategory,
    pub status: IdeaStatus,
    pub submitted_by: Option<UserBrief>,
    pub files: Vec<String>,
    pub likes: Vec<i64>,
    pub comments: Vec<CommentWithUser>,
    pub created_at: String,
}

pub struct NewIdea {
    pub title: String,
    pub description: String,
    pub category: IdeaCategory,
    pub submitted_by: i64,
    pub files: Vec<String>,
}

/// Create request. File URLs are passed directly from the client.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdeaRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub submitted_by: i64,
    #[serde(default)]
    pub files: Option<Vec<String>>,
}

/// Update request; absent fields keep their current value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIdeaRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Status update request; a non-empty `suggestions` string additionally
/// files Actionable feedback against the idea.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub status: String,
    #[serde(default)]
    pub suggestions: Option<String>,
    pub provided_by: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardRequest {
    pub rewards_points: i64,
    #[serde(default)]
    pub comments: Option<String>,
    pub provided_by: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub text: String,
    pub user_id: i64,
}
