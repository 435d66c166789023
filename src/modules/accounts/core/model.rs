use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub post_count: usize,
    pub comment_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub comment_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostWithComments {
    #[serde(flatten)]
    pub post: Post,
    pub comment: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: String,
    pub post_id: i64,
    pub user_id: i64,
    pub comment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: String,
    pub password: Option<String>,
}

/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub post_id: i64,
    pub user_id: i64,
    pub comment: String,
}
