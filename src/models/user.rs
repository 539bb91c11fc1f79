use diesel::prelude::*;
use diesel::sql_types::{Integer, Text};
use rocket::serde::Serialize;

/// Stored hash and id for a username, as read by the login lookup
#[derive(QueryableByName, Debug, Clone)]
pub struct StoredCredentials {
    #[diesel(sql_type = Text)]
    pub password: String,
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
}

impl StoredCredentials {
    pub fn verify_password(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::verify(password, &self.password)
    }
}

#[derive(QueryableByName, Serialize, Debug, Clone)]
pub struct User {
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
    #[diesel(sql_type = Text)]
    pub username: String,
    #[diesel(sql_type = Text)]
    #[serde(skip_serializing)]
    pub password: String,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Text)]
    pub email: String,
}

/// A user row ready for insertion; the password is already hashed
#[derive(Debug)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(
        username: String,
        password: &str,
        name: String,
        email: String,
        cost: u32,
    ) -> Result<Self, bcrypt::BcryptError> {
        let password = bcrypt::hash(password, cost)?;

        Ok(Self {
            username,
            password,
            name,
            email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_hashes_password() {
        let user = NewUser::new(
            "mario64".into(),
            "itsame",
            "Mario".into(),
            "mario@example.com".into(),
            4,
        )
        .expect("hash");

        assert_ne!(user.password, "itsame");
        assert!(bcrypt::verify("itsame", &user.password).expect("verify"));

        let stored = StoredCredentials {
            password: user.password,
            user_id: 1,
        };
        assert!(stored.verify_password("itsame").expect("verify"));
        assert!(!stored.verify_password("itsyou").expect("verify"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = NewUser::new("aaaaa".into(), "secret", "A".into(), "a@x.io".into(), 4)
            .expect("hash");
        let b = NewUser::new("bbbbb".into(), "secret", "B".into(), "b@x.io".into(), 4)
            .expect("hash");
        assert_ne!(a.password, b.password);
    }
}
