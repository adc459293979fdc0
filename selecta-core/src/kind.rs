//! Discriminator trait.

use crate::error::ParseKindError;
use std::fmt::Debug;

/// A closed enumeration of request kinds.
///
/// Each member selects exactly one handler. The member list is fixed at
/// compile time, so adding a member is a code change that the compiler can
/// follow into every exhaustive `match` over the kind.
///
/// Usually derived with `#[derive(Kind)]` from the `selecta` crate.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Kind, Debug, Clone, Copy, PartialEq, Eq)]
/// enum Channel {
///     Email,
///     Sms,
/// }
///
/// assert_eq!(Channel::Sms.name(), "SMS");
/// assert_eq!(Channel::from_name("EMAIL"), Ok(Channel::Email));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Kind",
    label = "missing `Kind` implementation",
    note = "Derive `Kind` on a fieldless enum to use it as a discriminator."
)]
pub trait Kind: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The stable wire name of this member (e.g. `"EMAIL"`).
    fn name(&self) -> &'static str;

    /// Look up a member by its wire name.
    fn from_name(name: &str) -> Result<Self, ParseKindError> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ParseKindError::new(name))
    }
}
