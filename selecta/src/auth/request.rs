use super::TwoFactorKind;
use crate::Payload;
use serde::{Deserialize, Serialize};

/// A registration request.
///
/// `twoFactorAuthenticationType` may be omitted or `null`; registration
/// then answers with the default authenticator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Login name.
    pub username: String,
    /// Plain password.
    pub password: String,
    /// Contact email.
    pub email_address: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Requested second factor.
    #[serde(
        rename = "twoFactorAuthenticationType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub two_factor: Option<TwoFactorKind>,
}

impl RegisterRequest {
    /// Create a registration request.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email_address: impl Into<String>,
        phone_number: impl Into<String>,
        two_factor: Option<TwoFactorKind>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email_address: email_address.into(),
            phone_number: phone_number.into(),
            two_factor,
        }
    }
}

impl Payload for RegisterRequest {}

/// A login request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plain password.
    pub password: String,
}

impl LoginRequest {
    /// Create a login request.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Payload for LoginRequest {}

#[cfg(test)]
mod tests {
    use super::{RegisterRequest, TwoFactorKind};

    #[test]
    fn test_register_request_wire_format() {
        let body = r#"{
            "username": "agitrubard",
            "password": "1234",
            "emailAddress": "agitrubard@software.eng",
            "phoneNumber": "1234567890",
            "twoFactorAuthenticationType": "PASSKEY"
        }"#;

        let request: RegisterRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.email_address, "agitrubard@software.eng");
        assert_eq!(request.two_factor, Some(TwoFactorKind::Passkey));
    }

    #[test]
    fn test_two_factor_may_be_absent_or_null() {
        let absent = r#"{"username":"a","password":"b","emailAddress":"c","phoneNumber":"d"}"#;
        let null = r#"{"username":"a","password":"b","emailAddress":"c","phoneNumber":"d","twoFactorAuthenticationType":null}"#;

        let absent: RegisterRequest = serde_json::from_str(absent).unwrap();
        let null: RegisterRequest = serde_json::from_str(null).unwrap();
        assert_eq!(absent.two_factor, None);
        assert_eq!(absent, null);
    }
}
