use super::connection::{DbPool, get_connection};
use super::query::{contains_pattern, select_rows};
use crate::models::catalog::{DlcMatch, GameDetail, GameSummary, VideoGame};

/// Read-only catalog queries
pub struct CatalogOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> CatalogOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Game joined with its publisher; `None` when the id is unknown
    pub fn get_game_detail(
        &self,
        game_id: i32,
    ) -> Result<Option<GameDetail>, diesel::result::Error> {
        let mut conn = get_connection(self.pool)?;

        let rows: Vec<GameDetail> = select_rows(
            &mut conn,
            "SELECT v.game_ID AS game_id, v.name AS vname, p.name AS pname,
                    v.release_date AS release_date, v.reviews AS reviews,
                    v.description AS description, v.genre AS genre, v.url AS url
             FROM VIDEO_GAME v
             INNER JOIN PUBLISHERS p ON v.pub_ID = p.pub_ID
             WHERE v.game_ID = ?",
            &[game_id.into()],
        )?;

        Ok(rows.into_iter().next())
    }

    pub fn search_by_name(&self, term: &str) -> Result<Vec<GameSummary>, diesel::result::Error> {
        let mut conn = get_connection(self.pool)?;

        select_rows(
            &mut conn,
            "SELECT game_ID AS game_id, name, release_date, url
             FROM VIDEO_GAME
             WHERE name LIKE ? ESCAPE '\\'
             ORDER BY name",
            &[contains_pattern(term)],
        )
    }

    pub fn search_by_genre(&self, term: &str) -> Result<Vec<VideoGame>, diesel::result::Error> {
        let mut conn = get_connection(self.pool)?;

        select_rows(
            &mut conn,
            "SELECT game_ID AS game_id, name, pub_ID AS pub_id, release_date, reviews,
                    description, genre, url
             FROM VIDEO_GAME
             WHERE genre LIKE ? ESCAPE '\\'
             ORDER BY name",
            &[contains_pattern(term)],
        )
    }

    /// DLC for every game whose name contains `term`
    pub fn search_dlc(&self, term: &str) -> Result<Vec<DlcMatch>, diesel::result::Error> {
        let mut conn = get_connection(self.pool)?;

        select_rows(
            &mut conn,
            "SELECT d.dlc_name AS dname, v.game_ID AS game_id, v.name AS vname,
                    p.name AS pname, d.release_date AS drelease_date
             FROM DOWNLOADABLE_CONTENT d
             INNER JOIN VIDEO_GAME v ON d.game_ID = v.game_ID
             INNER JOIN PUBLISHERS p ON p.pub_ID = v.pub_ID
             WHERE v.name LIKE ? ESCAPE '\\'
             ORDER BY v.name, d.dlc_name",
            &[contains_pattern(term)],
        )
    }
}
