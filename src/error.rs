use log::error;
use rocket::response::{Responder, Response};
use rocket::{Request, http::Status};
use rocket_dyn_templates::{Template, context};

#[derive(Debug)]
pub enum AppError {
    DatabaseError(String),
    NotFound(String),
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> Status {
        match self {
            AppError::DatabaseError(_) => Status::InternalServerError,
            AppError::NotFound(_) => Status::NotFound,
            AppError::InternalServerError(_) => Status::InternalServerError,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not found: {msg}"),
            AppError::InternalServerError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

/// Renders the error page for a status. Infrastructure details never reach the client.
pub fn error_page(status: Status, message: &str) -> Template {
    Template::render(
        "error",
        context! {
            page_title: status.reason().unwrap_or("Error"),
            code: status.code,
            message: message,
            user: "",
        },
    )
}

impl<'r> Responder<'r, 'static> for AppError {
    fn respond_to(self, req: &'r Request<'_>) -> rocket::response::Result<'static> {
        let status = self.status();
        let message = match &self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                error!("{} {}: {}", req.method(), req.uri(), self);
                "Something went wrong - please try again later".to_string()
            }
        };

        let page = error_page(status, &message).respond_to(req)?;
        Response::build_from(page).status(status).ok()
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        AppError::DatabaseError(format!("Database query error: {err}"))
    }
}

impl From<diesel::r2d2::Error> for AppError {
    fn from(err: diesel::r2d2::Error) -> Self {
        AppError::DatabaseError(format!("Database connection error: {err}"))
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {err}"))
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::InternalServerError(format!("Password hashing error: {err}"))
    }
}
