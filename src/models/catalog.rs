use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use rocket::serde::Serialize;

// Catalog rows are read through raw parameterized SQL, so they map by column name

/// Game joined with its publisher, shown on the item page
#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq)]
pub struct GameDetail {
    #[diesel(sql_type = Integer)]
    pub game_id: i32,
    #[diesel(sql_type = Text)]
    pub vname: String,
    #[diesel(sql_type = Text)]
    pub pname: String,
    #[diesel(sql_type = Text)]
    pub release_date: String,
    #[diesel(sql_type = Text)]
    pub reviews: String,
    #[diesel(sql_type = Text)]
    pub description: String,
    #[diesel(sql_type = Text)]
    pub genre: String,
    #[diesel(sql_type = Text)]
    pub url: String,
}

/// Name search hit
#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq)]
pub struct GameSummary {
    #[diesel(sql_type = Integer)]
    pub game_id: i32,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Text)]
    pub release_date: String,
    #[diesel(sql_type = Text)]
    pub url: String,
}

/// Full `VIDEO_GAME` row, listed by the genre search
#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq)]
pub struct VideoGame {
    #[diesel(sql_type = Integer)]
    pub game_id: i32,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Integer)]
    pub pub_id: i32,
    #[diesel(sql_type = Text)]
    pub release_date: String,
    #[diesel(sql_type = Text)]
    pub reviews: String,
    #[diesel(sql_type = Text)]
    pub description: String,
    #[diesel(sql_type = Text)]
    pub genre: String,
    #[diesel(sql_type = Text)]
    pub url: String,
}

#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq)]
pub struct DlcMatch {
    #[diesel(sql_type = Text)]
    pub dname: String,
    #[diesel(sql_type = Integer)]
    pub game_id: i32,
    #[diesel(sql_type = Text)]
    pub vname: String,
    #[diesel(sql_type = Text)]
    pub pname: String,
    #[diesel(sql_type = Text)]
    pub drelease_date: String,
}

/// Which column a catalog search matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Name,
    Genre,
    Dlc,
}

impl SearchKind {
    pub fn template(&self) -> &'static str {
        match self {
            SearchKind::Name => "search",
            SearchKind::Genre => "genreSearch",
            SearchKind::Dlc => "searchDlc",
        }
    }

    pub fn page_title(&self) -> &'static str {
        match self {
            SearchKind::Name => "Search",
            SearchKind::Genre => "Genre Search",
            SearchKind::Dlc => "Search DLC",
        }
    }

    pub fn field_label(&self) -> &'static str {
        self.page_title()
    }

    pub fn action(&self) -> &'static str {
        match self {
            SearchKind::Name => "/search",
            SearchKind::Genre => "/genreSearch",
            SearchKind::Dlc => "/searchDlc",
        }
    }
}
