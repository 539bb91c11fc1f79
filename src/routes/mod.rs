pub mod auth;
pub mod catalog;
pub mod catchers;
pub mod health;
pub mod home;
pub mod profile;

use rocket::response::Redirect;
use rocket::{Responder, routes};
use rocket_dyn_templates::Template;

/// A rendered page, or a redirect once a form has done its job
#[derive(Responder, Debug)]
pub enum PageResponse {
    Page(Template),
    Redirect(Redirect),
}

pub fn get_routes() -> Vec<rocket::Route> {
    routes![
        home::index,
        health::health_check,
        // Authentication
        auth::login_form,
        auth::login,
        auth::register_form,
        auth::register,
        auth::logout,
        // Catalog
        catalog::item,
        catalog::search_form,
        catalog::search,
        catalog::search_dlc_form,
        catalog::search_dlc,
        catalog::genre_search_form,
        catalog::genre_search,
        // Profile
        profile::profile,
        profile::profile_post,
    ]
}
