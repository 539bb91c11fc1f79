use diesel::prelude::*;
use diesel::sql_types::Text;
use rocket::serde::Serialize;

#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Friend {
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Text)]
    pub username: String,
    #[diesel(sql_type = Text)]
    pub email: String,
}

#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq)]
pub struct OwnedGame {
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Text)]
    pub release_date: String,
    #[diesel(sql_type = Text)]
    pub reviews: String,
    #[diesel(sql_type = Text)]
    pub url: String,
}

/// Everything the profile page lists. Empty for anonymous visitors.
#[derive(Serialize, Debug, Default)]
pub struct Profile {
    pub friends: Vec<Friend>,
    pub collection: Vec<OwnedGame>,
}
