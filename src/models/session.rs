use crate::schema::sessions;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::{
    State,
    http::Status,
    request::{FromRequest, Outcome, Request},
};

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "gamestore_session";

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = sessions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SessionRecord {
    pub session_id: i32,
    pub token: String,
    pub user_id: i32,
    pub username: String,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

impl SessionRecord {
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        now >= self.expires_at
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = sessions)]
pub struct NewSession {
    pub token: String,
    pub user_id: i32,
    pub username: String,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

impl NewSession {
    pub fn new(user_id: i32, username: String, ttl_hours: i64) -> Self {
        let token = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().naive_utc();

        Self {
            token,
            user_id,
            username,
            created_at: now,
            expires_at: now + chrono::Duration::hours(ttl_hours),
        }
    }
}

/// Session state visible to a single request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub is_user: bool,
    pub user: String,
    pub cnum: Option<i32>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_record(record: SessionRecord) -> Self {
        Self {
            token: Some(record.token),
            is_user: true,
            user: record.username,
            cnum: Some(record.user_id),
        }
    }

    /// Username when logged in, otherwise an empty string
    pub fn display_name(&self) -> &str {
        if self.is_user { &self.user } else { "" }
    }
}

// Never fails for a missing or stale cookie; only a broken store yields an error
#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = crate::error::AppError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        use crate::services::SessionService;
        use crate::state::AppState;

        let state = match request.guard::<&State<AppState>>().await {
            Outcome::Success(state) => state,
            _ => {
                return Outcome::Error((
                    Status::InternalServerError,
                    crate::error::AppError::InternalServerError(
                        "Application state not configured".to_string(),
                    ),
                ));
            }
        };

        let token = match request.cookies().get(SESSION_COOKIE) {
            Some(cookie) => cookie.value().to_string(),
            None => return Outcome::Success(Session::anonymous()),
        };

        match SessionService::load(&state.database, &token) {
            Ok(Some(session)) => Outcome::Success(session),
            Ok(None) => Outcome::Success(Session::anonymous()),
            Err(e) => Outcome::Error((Status::InternalServerError, e)),
        }
    }
}
