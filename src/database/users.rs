use super::connection::{DbPool, get_connection};
use super::query::{SqlParam, execute, select_rows};
use crate::models::user::{NewUser, StoredCredentials, User};

/// User-related database operations
pub struct UserOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> UserOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Every stored hash/id pair for an exact username
    pub fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Vec<StoredCredentials>, diesel::result::Error> {
        let mut conn = get_connection(self.pool)?;

        select_rows(
            &mut conn,
            "SELECT password, user_ID AS user_id FROM USERS WHERE username = ?",
            &[username.into()],
        )
    }

    pub fn find_by_username(&self, username: &str) -> Result<Vec<User>, diesel::result::Error> {
        let mut conn = get_connection(self.pool)?;

        select_rows(
            &mut conn,
            "SELECT user_ID AS user_id, username, password, name, email
             FROM USERS
             WHERE username = ?",
            &[username.into()],
        )
    }

    /// Inserts the user and reads the row back
    pub fn insert_user(&self, new_user: &NewUser) -> Result<User, diesel::result::Error> {
        let mut conn = get_connection(self.pool)?;

        execute(
            &mut conn,
            "INSERT INTO USERS (name, username, password, email) VALUES (?, ?, ?, ?)",
            &[
                SqlParam::from(new_user.name.as_str()),
                SqlParam::from(new_user.username.as_str()),
                SqlParam::from(new_user.password.as_str()),
                SqlParam::from(new_user.email.as_str()),
            ],
        )?;

        select_rows::<User>(
            &mut conn,
            "SELECT user_ID AS user_id, username, password, name, email
             FROM USERS
             WHERE username = ?",
            &[new_user.username.as_str().into()],
        )?
        .into_iter()
        .next()
        .ok_or(diesel::result::Error::NotFound)
    }
}
