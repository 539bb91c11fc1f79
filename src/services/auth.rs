use crate::database::DatabaseService;
use crate::error::AppError;
use crate::models::{LoginForm, NewUser, RegisterForm, User};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use log::{debug, warn};

pub const INVALID_CREDENTIALS: &str = "Invalid User Name or Password - Try again";
pub const USERNAME_TAKEN: &str = "Username already exists - Try again";

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated { user_id: i32, username: String },
    Rejected,
}

#[derive(Debug)]
pub enum RegistrationOutcome {
    Registered(User),
    UsernameTaken,
}

pub struct AuthService;

impl AuthService {
    pub fn authenticate_user(
        db: &DatabaseService,
        form: &LoginForm,
    ) -> Result<LoginOutcome, AppError> {
        let username = form.username();
        let mut matches = db.find_credentials(username)?;

        // Anything but a single match is a failed login
        if matches.len() != 1 {
            warn!("Login rejected for {username}: {} matching users", matches.len());
            return Ok(LoginOutcome::Rejected);
        }
        let credentials = matches.remove(0);

        if !credentials.verify_password(&form.password)? {
            warn!("Login rejected for {username}: wrong password");
            return Ok(LoginOutcome::Rejected);
        }

        debug!("User authenticated successfully: {username}");
        Ok(LoginOutcome::Authenticated {
            user_id: credentials.user_id,
            username: username.to_string(),
        })
    }

    pub fn register_user(
        db: &DatabaseService,
        form: &RegisterForm,
        bcrypt_cost: u32,
    ) -> Result<RegistrationOutcome, AppError> {
        let username = form.username();
        if !db.find_users_by_username(username)?.is_empty() {
            return Ok(RegistrationOutcome::UsernameTaken);
        }

        let new_user = NewUser::new(
            username.to_string(),
            &form.password,
            form.cname.trim().to_string(),
            form.email.trim().to_string(),
            bcrypt_cost,
        )?;

        match db.insert_user(&new_user) {
            Ok(user) => {
                debug!("User registered successfully: {}", user.username);
                Ok(RegistrationOutcome::Registered(user))
            }
            // A concurrent registration won the race for the name
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Ok(RegistrationOutcome::UsernameTaken)
            }
            Err(e) => Err(e.into()),
        }
    }
}
