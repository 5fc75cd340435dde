use sekcore::ac::user;

use crate::Platform;

/// A user account bound to the platform that produced it.
///
/// The resolved permission set obtained through [`permissions`] is the
/// snapshot delivered to the client inside the authenticated-user
/// payload; checks against that copy are advisory only and the server
/// side re-runs the decision on every mutation.
///
/// [`permissions`]: Principal::permissions
pub struct Principal<'a> {
    platform: &'a Platform,
    user: user::User,
}

mod impls;
