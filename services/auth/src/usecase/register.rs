use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::{AuthUser, password_meets_policy, validate_email, validate_name};
use crate::error::AuthServiceError;
use crate::usecase::password::hash_password;

pub struct RegisterInput {
    pub surname: String,
    pub given_name: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUseCase<R> {
    /// Validate the input, hash the password, and persist the new account.
    /// Nothing is written when any validation fails.
    pub async fn execute(&self, input: RegisterInput) -> Result<AuthUser, AuthServiceError> {
        let surname = input.surname.trim();
        let given_name = input.given_name.trim();
        let email = input.email.trim();

        if surname.is_empty() || given_name.is_empty() || email.is_empty()
            || input.password.is_empty()
        {
            return Err(AuthServiceError::MissingData);
        }
        if !validate_email(email) {
            return Err(AuthServiceError::InvalidEmail);
        }
        if !validate_name(surname) || !validate_name(given_name) {
            return Err(AuthServiceError::InvalidName);
        }
        if !password_meets_policy(&input.password) {
            return Err(AuthServiceError::WeakPassword);
        }
        if self.repo.find_by_email(email).await?.is_some() {
            return Err(AuthServiceError::DuplicateEmail);
        }

        let user = AuthUser {
            id: Uuid::now_v7(),
            surname: surname.to_owned(),
            given_name: given_name.to_owned(),
            email: email.to_owned(),
            password_digest: hash_password(&input.password),
            reward_points: 0,
            is_active: true,
            registered_at: Utc::now(),
        };
        self.repo.create(&user).await?;
        Ok(user)
    }
}
