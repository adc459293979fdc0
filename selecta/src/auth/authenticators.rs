use super::{TwoFactorKind, UserRecord};
use crate::{Handler, HandlerFactory, enum_handler};

/// Starts a passkey challenge.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasskeyAuthenticator;

impl Handler<UserRecord> for PasskeyAuthenticator {
    type Output = String;

    fn handle(&self, _user: &UserRecord) -> String {
        "User authenticating via Passkey...".to_string()
    }
}

/// Starts an email code challenge.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailAuthenticator;

impl Handler<UserRecord> for EmailAuthenticator {
    type Output = String;

    fn handle(&self, _user: &UserRecord) -> String {
        "User authenticating via Email...".to_string()
    }
}

/// Starts an SMS code challenge.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsAuthenticator;

impl Handler<UserRecord> for SmsAuthenticator {
    type Output = String;

    fn handle(&self, _user: &UserRecord) -> String {
        "User authenticating via SMS...".to_string()
    }
}

enum_handler! {
    /// Every second-factor authenticator.
    #[derive(Debug, Clone, Copy)]
    pub enum TwoFactorAuthenticator<UserRecord, Output = String> {
        Passkey(PasskeyAuthenticator),
        Email(EmailAuthenticator),
        Sms(SmsAuthenticator),
    }
}

impl HandlerFactory for TwoFactorKind {
    type Handler = TwoFactorAuthenticator;

    fn create(self) -> TwoFactorAuthenticator {
        match self {
            TwoFactorKind::Passkey => PasskeyAuthenticator.into(),
            TwoFactorKind::Email => EmailAuthenticator.into(),
            TwoFactorKind::Sms => SmsAuthenticator.into(),
        }
    }
}
