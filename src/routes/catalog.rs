use crate::error::AppError;
use crate::models::{SearchForm, SearchKind, Session};
use crate::state::AppState;
use crate::views::{self, FormView};
use log::debug;
use rocket::form::{Contextual, Form};
use rocket::{State, get, post};
use rocket_dyn_templates::Template;

fn game_not_found() -> AppError {
    AppError::NotFound("Game not found".to_string())
}

/// Any id that names no game is a 404, including ids that are not integers
#[get("/item/<game_id>")]
pub async fn item(
    game_id: &str,
    session: Session,
    state: &State<AppState>,
) -> Result<Template, AppError> {
    let game_id = game_id.parse::<i32>().map_err(|_| game_not_found())?;
    let game = state
        .database
        .get_game_detail(game_id)?
        .ok_or_else(game_not_found)?;

    Ok(views::item_page(&game, &session))
}

fn empty_search(kind: SearchKind, session: &Session) -> Template {
    let fields = views::search_fields(kind);
    views::search_page::<()>(kind, &FormView::blank(&fields), None, session)
}

/// Runs the search for a valid submission; a blank one only redisplays the form
fn run_search(
    kind: SearchKind,
    form: Contextual<'_, SearchForm>,
    session: &Session,
    state: &AppState,
) -> Result<Template, AppError> {
    let fields = views::search_fields(kind);
    let view = FormView::from_context(&fields, &form.context);

    let Some(SearchForm { search }) = form.value else {
        return Ok(views::search_page::<()>(kind, &view, None, session));
    };

    let db = &state.database;
    let page = match kind {
        SearchKind::Name => {
            let rows = db.search_games_by_name(&search)?;
            debug!("Name search '{search}' matched {} games", rows.len());
            views::search_page(kind, &view, Some(&rows), session)
        }
        SearchKind::Genre => {
            let rows = db.search_games_by_genre(&search)?;
            debug!("Genre search '{search}' matched {} games", rows.len());
            views::search_page(kind, &view, Some(&rows), session)
        }
        SearchKind::Dlc => {
            let rows = db.search_dlc(&search)?;
            debug!("DLC search '{search}' matched {} entries", rows.len());
            views::search_page(kind, &view, Some(&rows), session)
        }
    };

    Ok(page)
}

#[get("/search")]
pub async fn search_form(session: Session) -> Template {
    empty_search(SearchKind::Name, &session)
}

#[post("/search", data = "<form>")]
pub async fn search(
    form: Form<Contextual<'_, SearchForm>>,
    session: Session,
    state: &State<AppState>,
) -> Result<Template, AppError> {
    run_search(SearchKind::Name, form.into_inner(), &session, state)
}

#[get("/searchDlc")]
pub async fn search_dlc_form(session: Session) -> Template {
    empty_search(SearchKind::Dlc, &session)
}

#[post("/searchDlc", data = "<form>")]
pub async fn search_dlc(
    form: Form<Contextual<'_, SearchForm>>,
    session: Session,
    state: &State<AppState>,
) -> Result<Template, AppError> {
    run_search(SearchKind::Dlc, form.into_inner(), &session, state)
}

#[get("/genreSearch")]
pub async fn genre_search_form(session: Session) -> Template {
    empty_search(SearchKind::Genre, &session)
}

#[post("/genreSearch", data = "<form>")]
pub async fn genre_search(
    form: Form<Contextual<'_, SearchForm>>,
    session: Session,
    state: &State<AppState>,
) -> Result<Template, AppError> {
    run_search(SearchKind::Genre, form.into_inner(), &session, state)
}
