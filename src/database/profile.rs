use super::connection::{DbPool, get_connection};
use super::query::select_rows;
use crate::models::profile::{Friend, OwnedGame, Profile};

/// Friend and collection lookups for the profile page
pub struct ProfileOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> ProfileOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Friends in either direction of the relation. UNION drops duplicates.
    pub fn get_friends(&self, user_id: i32) -> Result<Vec<Friend>, diesel::result::Error> {
        let mut conn = get_connection(self.pool)?;

        select_rows(
            &mut conn,
            "SELECT u.name AS name, u.username AS username, u.email AS email
             FROM FRIEND f
             INNER JOIN USERS u ON u.user_ID = f.user_ID1
             WHERE f.user_ID2 = ?
             UNION
             SELECT u.name AS name, u.username AS username, u.email AS email
             FROM FRIEND f
             INNER JOIN USERS u ON u.user_ID = f.user_ID2
             WHERE f.user_ID1 = ?
             ORDER BY name, username",
            &[user_id.into(), user_id.into()],
        )
    }

    pub fn get_owned_games(&self, user_id: i32) -> Result<Vec<OwnedGame>, diesel::result::Error> {
        let mut conn = get_connection(self.pool)?;

        select_rows(
            &mut conn,
            "SELECT v.name AS name, v.release_date AS release_date, v.reviews AS reviews,
                    v.url AS url
             FROM OWNED o
             INNER JOIN VIDEO_GAME v ON o.game_ID = v.game_ID
             WHERE o.user_ID = ?
             ORDER BY v.name",
            &[user_id.into()],
        )
    }

    pub fn get_profile(&self, user_id: i32) -> Result<Profile, diesel::result::Error> {
        Ok(Profile {
            friends: self.get_friends(user_id)?,
            collection: self.get_owned_games(user_id)?,
        })
    }
}
