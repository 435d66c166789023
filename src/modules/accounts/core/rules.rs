// Rules shared by every accounts repository.

use thiserror::Error;

use crate::modules::accounts::core::model::{NewUser, User, UserChanges};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountsError {
    #[error("Email exist.")]
    EmailTaken,

    #[error("User not found.")]
    UserNotFound,

    #[error("Post not found.")]
    PostNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("backend error: {0}")]
    Backend(String),
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn email_in_use(users: &[User], email: &str, except_id: Option<i64>) -> bool {
    let email = normalize_email(email);
    users
        .iter()
        .any(|u| Some(u.id) != except_id && normalize_email(&u.email) == email)
}

pub fn check_new_user(users: &[User], new: &NewUser) -> Result<(), AccountsError> {
    if new.email.trim().is_empty() {
        return Err(AccountsError::Validation("email is required".into()));
    }
    if email_in_use(users, &new.email, None) {
        return Err(AccountsError::EmailTaken);
    }
    Ok(())
}

pub fn apply_user_changes(
    users: &[User],
    current: &User,
    changes: UserChanges,
) -> Result<User, AccountsError> {
    let mut updated = current.clone();
    if let Some(email) = changes.email {
        if email.trim().is_empty() {
            return Err(AccountsError::Validation("email is required".into()));
        }
        if email_in_use(users, &email, Some(current.id)) {
            return Err(AccountsError::EmailTaken);
        }
        updated.email = email;
    }
    if changes.name.is_some() {
        updated.name = changes.name;
    }
    if changes.password.is_some() {
        updated.password = changes.password;
    }
    Ok(updated)
}
