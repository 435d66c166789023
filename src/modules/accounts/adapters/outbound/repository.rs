// Accounts repository port.
//
// Responsibilities
// - Keep user emails unique.
// - Only attach posts to existing users and comments to existing posts.
// - Count the comments of a post together with the insert.

use async_trait::async_trait;

use crate::modules::accounts::core::model::{
    Comment, NewComment, NewPost, NewUser, Post, PostWithComments, User, UserChanges, UserSummary,
};
use crate::modules::accounts::core::rules::AccountsError;

#[async_trait]
pub trait AccountsRepository: Send + Sync {
    async fn create_user(&self, new: NewUser) -> Result<User, AccountsError>;
    async fn update_user(&self, id: i64, changes: UserChanges) -> Result<User, AccountsError>;
    async fn user(&self, id: i64) -> Result<Option<User>, AccountsError>;
    async fn users(&self) -> Result<Vec<UserSummary>, AccountsError>;

    async fn create_post(&self, new: NewPost) -> Result<Post, AccountsError>;
    async fn post(&self, id: i64) -> Result<Option<Post>, AccountsError>;
    async fn posts(&self) -> Result<Vec<PostWithComments>, AccountsError>;

    async fn create_comment(&self, new: NewComment) -> Result<Comment, AccountsError>;
    async fn comment(&self, id: &str) -> Result<Option<Comment>, AccountsError>;
    async fn comments(&self) -> Result<Vec<Comment>, AccountsError>;
}
