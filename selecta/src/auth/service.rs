use super::{LoginRequest, RegisterRequest, TwoFactorKind, UserRecord, UserStore};
use crate::ClosedRegistry;
use std::sync::Arc;

const USER_NOT_FOUND: &str = "User not found!";
const INVALID_PASSWORD: &str = "Invalid password!";
const LOGIN_SUCCESS: &str = "Login success!";

/// Stores new users and starts their second-factor challenge.
#[derive(Clone)]
pub struct RegisterService {
    store: Arc<dyn UserStore>,
    authenticators: ClosedRegistry<TwoFactorKind>,
}

impl RegisterService {
    /// Create a service over `store`.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            authenticators: ClosedRegistry::new(),
        }
    }

    /// Save a record for `request` and answer with the authenticator for
    /// the requested kind, or the default authenticator if none was given.
    ///
    /// The stored record keeps the kind exactly as requested, so a user who
    /// registered without one logs in without a second factor.
    pub fn register(&self, request: &RegisterRequest) -> String {
        let user = UserRecord::from(request);
        let message = self.authenticators.dispatch(request.two_factor, &user);

        #[cfg(feature = "tracing")]
        tracing::debug!(username = %user.username, id = %user.id, "user registered");

        self.store.save(user);
        message
    }
}

/// Checks credentials and starts the second-factor challenge.
#[derive(Clone)]
pub struct LoginService {
    store: Arc<dyn UserStore>,
    authenticators: ClosedRegistry<TwoFactorKind>,
}

impl LoginService {
    /// Create a service over `store`.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            authenticators: ClosedRegistry::new(),
        }
    }

    /// Answer a login attempt.
    ///
    /// Unknown users and wrong passwords are reported as messages, not
    /// errors. Users without a second factor log in directly.
    pub fn login(&self, request: &LoginRequest) -> String {
        let Some(user) = self.store.find_by_username(&request.username) else {
            return USER_NOT_FOUND.to_string();
        };

        if user.password != request.password {
            return INVALID_PASSWORD.to_string();
        }

        match user.two_factor {
            None => LOGIN_SUCCESS.to_string(),
            Some(kind) => self.authenticators.dispatch(Some(kind), &user),
        }
    }
}
