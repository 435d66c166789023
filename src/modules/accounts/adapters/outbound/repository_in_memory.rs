// In memory accounts repository. One lock guards all tables so the checks and
// the writes of a call happen atomically.

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::accounts::adapters::outbound::repository::AccountsRepository;
use crate::modules::accounts::core::model::{
    Comment, NewComment, NewPost, NewUser, Post, PostWithComments, User, UserChanges, UserSummary,
};
use crate::modules::accounts::core::rules::{AccountsError, apply_user_changes, check_new_user};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    next_user_id: i64,
    next_post_id: i64,
}

#[derive(Default)]
pub struct InMemoryAccounts {
    tables: RwLock<Tables>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AccountsRepository for InMemoryAccounts {
    async fn create_user(&self, new: NewUser) -> Result<User, AccountsError> {
        let mut tables = self.tables.write().await;
        check_new_user(&tables.users, &new)?;
        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            name: new.name,
            email: new.email.trim().to_string(),
            password: new.password,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: i64, changes: UserChanges) -> Result<User, AccountsError> {
        let mut tables = self.tables.write().await;
        let position = tables
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(AccountsError::UserNotFound)?;
        let updated = apply_user_changes(&tables.users, &tables.users[position], changes)?;
        tables.users[position] = updated.clone();
        Ok(updated)
    }

    async fn user(&self, id: i64) -> Result<Option<User>, AccountsError> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn users(&self) -> Result<Vec<UserSummary>, AccountsError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .map(|u| UserSummary {
                id: u.id,
                name: u.name.clone(),
                email: u.email.clone(),
                post_count: tables.posts.iter().filter(|p| p.user_id == u.id).count(),
                comment_count: tables.comments.iter().filter(|c| c.user_id == u.id).count(),
            })
            .collect())
    }

    async fn create_post(&self, new: NewPost) -> Result<Post, AccountsError> {
        let mut tables = self.tables.write().await;
        if !tables.users.iter().any(|u| u.id == new.user_id) {
            return Err(AccountsError::UserNotFound);
        }
        tables.next_post_id += 1;
        let post = Post {
            id: tables.next_post_id,
            user_id: new.user_id,
            title: new.title,
            description: new.description,
            comment_count: 0,
        };
        tables.posts.push(post.clone());
        Ok(post)
    }

    async fn post(&self, id: i64) -> Result<Option<Post>, AccountsError> {
        Ok(self
            .tables
            .read()
            .await
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn posts(&self) -> Result<Vec<PostWithComments>, AccountsError> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .iter()
            .map(|p| PostWithComments {
                post: p.clone(),
                comment: tables
                    .comments
                    .iter()
                    .filter(|c| c.post_id == p.id)
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    async fn create_comment(&self, new: NewComment) -> Result<Comment, AccountsError> {
        let mut tables = self.tables.write().await;
        let post = tables
            .posts
            .iter_mut()
            .find(|p| p.id == new.post_id)
            .ok_or(AccountsError::PostNotFound)?;
        post.comment_count += 1;
        let comment = Comment {
            id: Uuid::now_v7().to_string(),
            post_id: new.post_id,
            user_id: new.user_id,
            comment: new.comment,
        };
        tables.comments.push(comment.clone());
        Ok(comment)
    }

    async fn comment(&self, id: &str) -> Result<Option<Comment>, AccountsError> {
        Ok(self
            .tables
            .read()
            .await
            .comments
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn comments(&self) -> Result<Vec<Comment>, AccountsError> {
        Ok(self.tables.read().await.comments.clone())
    }
}
