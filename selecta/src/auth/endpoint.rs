use super::{LoginRequest, LoginService, RegisterRequest, RegisterService, UserStore};
use crate::{
    Dispatch,
    endpoint::{Response, respond},
};
use std::{convert::Infallible, sync::Arc};

/// Entry point for registration and login.
///
/// Both operations always produce a message; the only failure a caller can
/// see is a malformed body at the JSON boundary.
#[derive(Clone)]
pub struct AuthEndpoint {
    register: RegisterService,
    login: LoginService,
}

impl AuthEndpoint {
    /// Create an endpoint whose services share `store`.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            register: RegisterService::new(Arc::clone(&store)),
            login: LoginService::new(store),
        }
    }

    /// Register a user.
    pub fn register(&self, request: &RegisterRequest) -> String {
        self.register.register(request)
    }

    /// Log a user in.
    pub fn login(&self, request: &LoginRequest) -> String {
        self.login.login(request)
    }

    /// JSON variant of [`register`](Self::register).
    pub fn register_json(&self, body: &str) -> Response {
        respond(body, |request: RegisterRequest| {
            Ok::<_, Infallible>(self.register(&request))
        })
    }

    /// JSON variant of [`login`](Self::login).
    pub fn login_json(&self, body: &str) -> Response {
        respond(body, |request: LoginRequest| {
            Ok::<_, Infallible>(self.login(&request))
        })
    }
}

impl Dispatch<RegisterRequest> for AuthEndpoint {
    type Output = String;
    type Error = Infallible;

    fn dispatch(&self, request: &RegisterRequest) -> Result<String, Infallible> {
        Ok(self.register(request))
    }
}

impl Dispatch<LoginRequest> for AuthEndpoint {
    type Output = String;
    type Error = Infallible;

    fn dispatch(&self, request: &LoginRequest) -> Result<String, Infallible> {
        Ok(self.login(request))
    }
}
