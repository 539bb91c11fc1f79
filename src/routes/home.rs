use crate::models::Session;
use crate::views;
use rocket::get;
use rocket_dyn_templates::Template;

#[get("/")]
pub async fn index(session: Session) -> Template {
    views::home(&session)
}
