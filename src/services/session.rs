use crate::database::DatabaseService;
use crate::error::AppError;
use crate::models::session::{NewSession, SESSION_COOKIE, Session};
use log::{debug, warn};
use rocket::http::{Cookie, CookieJar, SameSite};

pub struct SessionService;

impl SessionService {
    /// Records a logged-in session and hands its token to the browser.
    /// A session already carried by the request is revoked first.
    pub fn establish(
        db: &DatabaseService,
        cookies: &CookieJar<'_>,
        user_id: i32,
        username: &str,
        ttl_hours: i64,
    ) -> Result<Session, AppError> {
        if let Some(previous) = cookies.get(SESSION_COOKIE) {
            let revoked = db.delete_session(previous.value())?;
            debug!("Revoked {revoked} previous session rows for {username}");
        }

        let now = chrono::Utc::now().naive_utc();
        match db.purge_expired_sessions(now) {
            Ok(0) => {}
            Ok(purged) => debug!("Purged {purged} expired sessions"),
            Err(e) => warn!("Failed to purge expired sessions: {e}"),
        }

        let record = db.create_session(&NewSession::new(user_id, username.to_string(), ttl_hours))?;

        let cookie = Cookie::build((SESSION_COOKIE, record.token.clone()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(rocket::time::Duration::hours(ttl_hours));
        cookies.add(cookie);

        debug!("Session established for {username}");
        Ok(Session::from_record(record))
    }

    /// Resolves a cookie token. Unknown or expired tokens yield `None`.
    pub fn load(db: &DatabaseService, token: &str) -> Result<Option<Session>, AppError> {
        let now = chrono::Utc::now().naive_utc();
        let record = db.find_active_session(token, now)?;
        Ok(record.map(Session::from_record))
    }

    /// Drops the cookie, then the stored session (if any).
    /// The cookie is gone even when the delete fails.
    pub fn clear(db: &DatabaseService, cookies: &CookieJar<'_>) -> Result<(), AppError> {
        let token = cookies
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string());
        cookies.remove(Cookie::build(SESSION_COOKIE).path("/"));

        if let Some(token) = token {
            let removed = db.delete_session(&token)?;
            debug!("Cleared session ({removed} stored rows removed)");
        }
        Ok(())
    }
}
