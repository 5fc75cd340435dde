use serde::{Deserialize, Serialize};

/// Permission grant
///
/// Associates a user with a permission.  At most one grant exists per
/// (user, permission) pair; the backend rejects duplicates by simply
/// reporting that nothing new was created.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct PermissionGrant {
    pub id: i64,
    pub user_id: i64,
    pub permission_id: i64,
    pub created_ts: i64,
}
