use crate::error::error_page;
use rocket::http::Status;
use rocket::{Request, catch, catchers};
use rocket_dyn_templates::Template;

#[catch(404)]
pub fn not_found(_: &Request<'_>) -> Template {
    error_page(Status::NotFound, "Page not found")
}

#[catch(500)]
pub fn internal_error(_: &Request<'_>) -> Template {
    error_page(
        Status::InternalServerError,
        "Something went wrong - please try again later",
    )
}

#[catch(default)]
pub fn default_catcher(status: Status, _: &Request<'_>) -> (Status, Template) {
    (status, error_page(status, "The request could not be processed"))
}

pub fn get_catchers() -> Vec<rocket::Catcher> {
    catchers![not_found, internal_error, default_catcher]
}
