use rocket::FromForm;
use rocket::form;

pub const MIN_CREDENTIAL_LEN: usize = 5;

#[derive(FromForm, Debug, Clone)]
pub struct LoginForm {
    #[field(validate = not_blank())]
    pub uname: String,
    #[field(validate = not_blank())]
    pub password: String,
}

#[derive(FromForm, Debug, Clone)]
pub struct RegisterForm {
    #[field(validate = trimmed_min_chars(MIN_CREDENTIAL_LEN))]
    pub uname: String,
    #[field(validate = min_chars(MIN_CREDENTIAL_LEN))]
    pub password: String,
    pub confirm: String,
    #[field(validate = not_blank())]
    pub cname: String,
    #[field(validate = valid_email())]
    pub email: String,
}

impl LoginForm {
    pub fn username(&self) -> &str {
        self.uname.trim()
    }
}

impl RegisterForm {
    pub const MISMATCH_MESSAGE: &'static str = "Password and Verify Password must match";

    /// Text inputs are stored trimmed; passwords are taken as typed
    pub fn username(&self) -> &str {
        self.uname.trim()
    }

    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm
    }
}

#[derive(FromForm, Debug, Clone)]
pub struct SearchForm {
    #[field(validate = not_blank())]
    pub search: String,
}

pub fn not_blank<'v>(value: &str) -> form::Result<'v, ()> {
    if value.trim().is_empty() {
        return Err(form::Error::validation("This value should not be blank.").into());
    }
    Ok(())
}

pub fn min_chars<'v>(value: &str, min: usize) -> form::Result<'v, ()> {
    not_blank(value)?;
    if value.chars().count() < min {
        return Err(form::Error::validation(format!(
            "This value is too short. It should have {min} characters or more."
        ))
        .into());
    }
    Ok(())
}

/// Length check on the value with surrounding whitespace removed
pub fn trimmed_min_chars<'v>(value: &str, min: usize) -> form::Result<'v, ()> {
    min_chars(value.trim(), min)
}

/// Accepts `local@domain.tld` with no whitespace and a single `@`
pub fn valid_email<'v>(value: &str) -> form::Result<'v, ()> {
    let invalid = || -> form::Result<'v, ()> {
        Err(form::Error::validation("This value is not a valid email address.").into())
    };

    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return invalid();
    }

    let Some((local, domain)) = value.split_once('@') else {
        return invalid();
    };

    if local.is_empty() || domain.contains('@') {
        return invalid();
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return invalid();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("mario").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
    }

    #[test]
    fn test_min_chars() {
        assert!(min_chars("peach", 5).is_ok());
        assert!(min_chars("toad", 5).is_err());
        assert!(min_chars("     ", 5).is_err());
        // counts characters, not bytes
        assert!(min_chars("ééé", 5).is_err());
    }

    #[test]
    fn test_trimmed_min_chars() {
        assert!(trimmed_min_chars("  ab ", 5).is_err());
        assert!(trimmed_min_chars(" yoshi ", 5).is_ok());
        // untrimmed counting still applies to passwords
        assert!(min_chars("  ab ", 5).is_ok());
    }

    #[test]
    fn test_username_is_trimmed() {
        let login = LoginForm {
            uname: " peach01 ".into(),
            password: " castle ".into(),
        };
        assert_eq!(login.username(), "peach01");
        assert_eq!(login.password, " castle ");
    }

    #[test]
    fn test_email() {
        assert!(valid_email("mario@mushroom.kingdom").is_ok());
        assert!(valid_email("a.b+c@example.co.uk").is_ok());
        assert!(valid_email("mario").is_err());
        assert!(valid_email("@example.com").is_err());
        assert!(valid_email("mario@localhost").is_err());
        assert!(valid_email("mario@@example.com").is_err());
        assert!(valid_email("mario@example..com").is_err());
        assert!(valid_email("ma rio@example.com").is_err());
        assert!(valid_email("").is_err());
    }

    #[test]
    fn test_passwords_match() {
        let mut form = RegisterForm {
            uname: "bowser".into(),
            password: "castle".into(),
            confirm: "castle".into(),
            cname: "Bowser".into(),
            email: "bowser@koopa.com".into(),
        };
        assert!(form.passwords_match());

        form.confirm = "castles".into();
        assert!(!form.passwords_match());
    }
}
