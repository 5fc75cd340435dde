use serde::{Deserialize, Serialize};

/// The coarse role label attached to a user account.
///
/// This is only consulted for coarse gating at the application layer
/// and the role-grouped reporting aggregate; the permission engine
/// decides purely on the grants persisted for the individual user.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum Role {
    // catch-all for whenever infallable conversion is needed
    #[default]
    Undefined,
    Admin,
    Teacher,
    Principal,
}

mod impls;
