use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::types::{
    ConnectionState, SESSION_USER_ID_KEY, SESSION_USER_NAME_KEY, Session,
};
use crate::error::AuthServiceError;
use crate::usecase::password::verify_password;
use crate::usecase::session::SessionCache;

pub struct AuthenticateUseCase<R: UserRepository, S: SessionStore> {
    pub users: R,
    pub store: S,
    pub cache: Arc<SessionCache>,
    pub connection: watch::Sender<ConnectionState>,
}

impl<R: UserRepository, S: SessionStore> AuthenticateUseCase<R, S> {
    /// Validate credentials, persist the session, and broadcast the login.
    ///
    /// Unknown email, wrong password, and inactive account all map to the
    /// same `InvalidCredentials` variant.
    pub async fn execute(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthServiceError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthServiceError::InvalidCredentials);
        }
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;
        if !user.is_active || !verify_password(password, &user.password_digest) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let session = Session {
            user_id: user.id,
            display_name: user.display_name(),
        };
        self.store
            .set(SESSION_USER_ID_KEY, &session.user_id.to_string())
            .await?;
        self.store
            .set(SESSION_USER_NAME_KEY, &session.display_name)
            .await?;
        self.cache.put(session.clone()).await;
        self.connection
            .send_replace(ConnectionState::Connected(user.id));
        Ok(session)
    }
}
