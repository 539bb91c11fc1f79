use super::connection::{DbPool, get_connection};
use crate::models::session::{NewSession, SessionRecord};
use crate::schema::{sessions, users};
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Server-side session store
pub struct SessionOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> SessionOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn create_session(
        &self,
        new_session: &NewSession,
    ) -> Result<SessionRecord, diesel::result::Error> {
        let mut conn = get_connection(self.pool)?;

        diesel::insert_into(sessions::table)
            .values(new_session)
            .execute(&mut conn)?;

        sessions::table
            .filter(sessions::token.eq(&new_session.token))
            .select(SessionRecord::as_select())
            .first(&mut conn)
    }

    /// Live session for a token. The owning user must still exist.
    pub fn find_active_session(
        &self,
        token: &str,
        now: NaiveDateTime,
    ) -> Result<Option<SessionRecord>, diesel::result::Error> {
        let mut conn = get_connection(self.pool)?;

        sessions::table
            .inner_join(users::table)
            .filter(sessions::token.eq(token))
            .filter(sessions::expires_at.gt(now))
            .select(SessionRecord::as_select())
            .first(&mut conn)
            .optional()
    }

    pub fn delete_session(&self, token: &str) -> Result<usize, diesel::result::Error> {
        let mut conn = get_connection(self.pool)?;

        diesel::delete(sessions::table.filter(sessions::token.eq(token))).execute(&mut conn)
    }

    pub fn purge_expired_sessions(&self, now: NaiveDateTime) -> Result<usize, diesel::result::Error> {
        let mut conn = get_connection(self.pool)?;

        diesel::delete(sessions::table.filter(sessions::expires_at.le(now))).execute(&mut conn)
    }
}
