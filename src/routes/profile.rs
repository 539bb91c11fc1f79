use crate::error::AppError;
use crate::models::{Profile, Session};
use crate::state::AppState;
use crate::views;
use rocket::{State, get, post};
use rocket_dyn_templates::Template;

fn render_profile(session: &Session, state: &AppState) -> Result<Template, AppError> {
    // Anonymous visitors get the page with nothing listed
    let profile = match (session.is_user, session.cnum) {
        (true, Some(cnum)) => state.database.get_profile(cnum)?,
        _ => Profile::default(),
    };

    Ok(views::profile_page(&profile, session))
}

#[get("/profile")]
pub async fn profile(session: Session, state: &State<AppState>) -> Result<Template, AppError> {
    render_profile(&session, state)
}

#[post("/profile")]
pub async fn profile_post(
    session: Session,
    state: &State<AppState>,
) -> Result<Template, AppError> {
    render_profile(&session, state)
}
