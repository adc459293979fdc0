use super::{RegisterRequest, TwoFactorKind};
use crate::Payload;
use parking_lot::RwLock;
use uuid::Uuid;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Random identifier assigned on creation.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Plain password.
    pub password: String,
    /// Contact email.
    pub email_address: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Second factor, if the user enabled one.
    pub two_factor: Option<TwoFactorKind>,
}

impl UserRecord {
    /// Create a record with a fresh random id.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email_address: impl Into<String>,
        phone_number: impl Into<String>,
        two_factor: Option<TwoFactorKind>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password: password.into(),
            email_address: email_address.into(),
            phone_number: phone_number.into(),
            two_factor,
        }
    }

    /// Whether the user enabled a second factor.
    pub fn has_two_factor(&self) -> bool {
        self.two_factor.is_some()
    }
}

impl From<&RegisterRequest> for UserRecord {
    fn from(request: &RegisterRequest) -> Self {
        UserRecord::new(
            request.username.as_str(),
            request.password.as_str(),
            request.email_address.as_str(),
            request.phone_number.as_str(),
            request.two_factor,
        )
    }
}

impl Payload for UserRecord {}

/// Storage for user records.
///
/// Implementations must be safe to share between concurrent requests.
pub trait UserStore: Send + Sync {
    /// Persist `record`.
    fn save(&self, record: UserRecord);

    /// Find the first record with `username`.
    fn find_by_username(&self, username: &str) -> Option<UserRecord>;
}

/// A [`UserStore`] backed by a vector in memory.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with one demo user per second factor:
    /// `user1` (passkey), `user2` (email) and `user3` (SMS), with passwords
    /// `password1` to `password3`.
    pub fn with_demo_users() -> Self {
        let store = Self::new();
        store.save(UserRecord::new(
            "user1",
            "password1",
            "user1@agitrubard.dev",
            "1234567890",
            Some(TwoFactorKind::Passkey),
        ));
        store.save(UserRecord::new(
            "user2",
            "password2",
            "user2@agitrubard.dev",
            "1234567891",
            Some(TwoFactorKind::Email),
        ));
        store.save(UserRecord::new(
            "user3",
            "password3",
            "user3@agitrubard.dev",
            "1234567892",
            Some(TwoFactorKind::Sms),
        ));
        store
    }

    /// Get the number of stored records.
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

impl UserStore for InMemoryUserStore {
    fn save(&self, record: UserRecord) {
        self.users.write().push(record);
    }

    fn find_by_username(&self, username: &str) -> Option<UserRecord> {
        self.users
            .read()
            .iter()
            .find(|user| user.username == username)
            .cloned()
    }
}
