use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Resolved permission set
///
/// The set of permission name strings currently granted to one user,
/// resolved on demand by joining the grant rows to their permission
/// names.  Serializes transparently as a plain collection of strings so
/// it can ship inside the authenticated-user payload for the advisory
/// client-side checks; the server-side check remains the enforcement
/// boundary.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PermissionSet(HashSet<String>);

mod impls;
