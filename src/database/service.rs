use super::catalog::CatalogOperations;
use super::connection::{DbConnection, DbPool, create_pool, get_connection};
use super::profile::ProfileOperations;
use super::sessions::SessionOperations;
use super::users::UserOperations;
use crate::models::catalog::{DlcMatch, GameDetail, GameSummary, VideoGame};
use crate::models::profile::Profile;
use crate::models::session::{NewSession, SessionRecord};
use crate::models::user::{NewUser, StoredCredentials, User};
use chrono::NaiveDateTime;

/// Main database service that provides a unified interface to all database operations
#[derive(Debug)]
pub struct DatabaseService {
    pub pool: DbPool,
}

impl DatabaseService {
    /// Creates a new DatabaseService with an initialized connection pool
    pub fn new(database_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = create_pool(database_url)?;
        Ok(Self { pool })
    }

    pub fn get_connection(&self) -> Result<DbConnection, diesel::result::Error> {
        get_connection(&self.pool)
    }

    // User operations
    pub fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Vec<StoredCredentials>, diesel::result::Error> {
        let ops = UserOperations::new(&self.pool);
        ops.find_credentials(username)
    }

    pub fn find_users_by_username(
        &self,
        username: &str,
    ) -> Result<Vec<User>, diesel::result::Error> {
        let ops = UserOperations::new(&self.pool);
        ops.find_by_username(username)
    }

    pub fn insert_user(&self, new_user: &NewUser) -> Result<User, diesel::result::Error> {
        let ops = UserOperations::new(&self.pool);
        ops.insert_user(new_user)
    }

    // Catalog operations
    pub fn get_game_detail(
        &self,
        game_id: i32,
    ) -> Result<Option<GameDetail>, diesel::result::Error> {
        let ops = CatalogOperations::new(&self.pool);
        ops.get_game_detail(game_id)
    }

    pub fn search_games_by_name(
        &self,
        term: &str,
    ) -> Result<Vec<GameSummary>, diesel::result::Error> {
        let ops = CatalogOperations::new(&self.pool);
        ops.search_by_name(term)
    }

    pub fn search_games_by_genre(
        &self,
        term: &str,
    ) -> Result<Vec<VideoGame>, diesel::result::Error> {
        let ops = CatalogOperations::new(&self.pool);
        ops.search_by_genre(term)
    }

    pub fn search_dlc(&self, term: &str) -> Result<Vec<DlcMatch>, diesel::result::Error> {
        let ops = CatalogOperations::new(&self.pool);
        ops.search_dlc(term)
    }

    // Profile operations
    pub fn get_profile(&self, user_id: i32) -> Result<Profile, diesel::result::Error> {
        let ops = ProfileOperations::new(&self.pool);
        ops.get_profile(user_id)
    }

    // Session operations
    pub fn create_session(
        &self,
        new_session: &NewSession,
    ) -> Result<SessionRecord, diesel::result::Error> {
        let ops = SessionOperations::new(&self.pool);
        ops.create_session(new_session)
    }

    pub fn find_active_session(
        &self,
        token: &str,
        now: NaiveDateTime,
    ) -> Result<Option<SessionRecord>, diesel::result::Error> {
        let ops = SessionOperations::new(&self.pool);
        ops.find_active_session(token, now)
    }

    pub fn delete_session(&self, token: &str) -> Result<usize, diesel::result::Error> {
        let ops = SessionOperations::new(&self.pool);
        ops.delete_session(token)
    }

    pub fn purge_expired_sessions(
        &self,
        now: NaiveDateTime,
    ) -> Result<usize, diesel::result::Error> {
        let ops = SessionOperations::new(&self.pool);
        ops.purge_expired_sessions(now)
    }
}
