pub mod auth;
pub mod session;

pub use auth::{AuthService, LoginOutcome, RegistrationOutcome};
pub use session::SessionService;
