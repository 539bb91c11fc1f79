use crate::error::AppError;
use crate::models::{LoginForm, RegisterForm, Session};
use crate::routes::PageResponse;
use crate::services::auth::{INVALID_CREDENTIALS, USERNAME_TAKEN};
use crate::services::{AuthService, LoginOutcome, RegistrationOutcome, SessionService};
use crate::state::AppState;
use crate::views::{self, FormView, LOGIN_FIELDS, REGISTER_FIELDS};
use rocket::form::{Contextual, Form};
use rocket::http::CookieJar;
use rocket::response::Redirect;
use rocket::{State, get, post};
use rocket_dyn_templates::Template;

fn login_page(form: &FormView, results: &str, session: &Session) -> Template {
    views::form_page("Login", "/login", "Login", form, results, session)
}

fn register_page(form: &FormView, results: &str, session: &Session) -> Template {
    views::form_page("Register", "/register", "Register", form, results, session)
}

#[get("/login")]
pub async fn login_form(session: Session) -> Template {
    login_page(&FormView::blank(LOGIN_FIELDS), "", &session)
}

#[post("/login", data = "<form>")]
pub async fn login(
    form: Form<Contextual<'_, LoginForm>>,
    session: Session,
    cookies: &CookieJar<'_>,
    state: &State<AppState>,
) -> Result<PageResponse, AppError> {
    let form = form.into_inner();
    let view = FormView::from_context(LOGIN_FIELDS, &form.context);

    let Some(credentials) = form.value else {
        return Ok(PageResponse::Page(login_page(&view, "", &session)));
    };

    match AuthService::authenticate_user(&state.database, &credentials)? {
        LoginOutcome::Authenticated { user_id, username } => {
            SessionService::establish(
                &state.database,
                cookies,
                user_id,
                &username,
                state.config.session_ttl_hours,
            )?;
            Ok(PageResponse::Redirect(Redirect::to("/")))
        }
        LoginOutcome::Rejected => Ok(PageResponse::Page(login_page(
            &view,
            INVALID_CREDENTIALS,
            &session,
        ))),
    }
}

#[get("/register")]
pub async fn register_form(session: Session) -> Template {
    register_page(&FormView::blank(REGISTER_FIELDS), "", &session)
}

#[post("/register", data = "<form>")]
pub async fn register(
    form: Form<Contextual<'_, RegisterForm>>,
    session: Session,
    cookies: &CookieJar<'_>,
    state: &State<AppState>,
) -> Result<PageResponse, AppError> {
    let form = form.into_inner();
    let mut view = FormView::from_context(REGISTER_FIELDS, &form.context);

    if form.context.field_value("password") != form.context.field_value("confirm") {
        view.push_error("confirm", RegisterForm::MISMATCH_MESSAGE);
    }

    let registration = match form.value {
        Some(registration) if !view.has_errors() => registration,
        _ => return Ok(PageResponse::Page(register_page(&view, "", &session))),
    };

    match AuthService::register_user(&state.database, &registration, state.config.bcrypt_cost)? {
        RegistrationOutcome::UsernameTaken => Ok(PageResponse::Page(register_page(
            &view,
            USERNAME_TAKEN,
            &session,
        ))),
        RegistrationOutcome::Registered(user) => {
            // New accounts start logged in
            SessionService::establish(
                &state.database,
                cookies,
                user.user_id,
                &user.username,
                state.config.session_ttl_hours,
            )?;
            Ok(PageResponse::Redirect(Redirect::to("/")))
        }
    }
}

#[get("/logout")]
pub async fn logout(
    cookies: &CookieJar<'_>,
    state: &State<AppState>,
) -> Result<Redirect, AppError> {
    SessionService::clear(&state.database, cookies)?;
    Ok(Redirect::to("/"))
}
