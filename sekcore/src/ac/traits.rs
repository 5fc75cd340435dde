use async_trait::async_trait;
use crate::error::BackendError;
use super::{
    action::Action,
    grant::PermissionGrant,
    permission::Permission,
    role::Role,
    user::User,
};

#[async_trait]
pub trait UserBackend {
    async fn add_user(
        &self,
        name: &str,
        role: Role,
    ) -> Result<i64, BackendError>;
    async fn get_user_by_id(
        &self,
        id: i64,
    ) -> Result<Option<User>, BackendError>;
    async fn get_user_by_name(
        &self,
        name: &str,
    ) -> Result<Option<User>, BackendError>;
    /// Removes the user and every grant held by them.
    async fn remove_user(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
}

/// Administrative seeding of the permission table.  End-user flows only
/// ever read these records through grants.
#[async_trait]
pub trait PermissionBackend {
    async fn add_permission(
        &self,
        name: &str,
        resource: &str,
        action: Action,
        description: Option<&str>,
    ) -> Result<i64, BackendError>;
    async fn get_permission_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Permission>, BackendError>;
    async fn list_permissions(
        &self,
    ) -> Result<Vec<Permission>, BackendError>;
    async fn remove_permission(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
}

#[async_trait]
pub trait GrantBackend {
    /// Returns false when the (user, permission) pair is already
    /// granted, making repeated assignment idempotent.
    async fn grant_permission_to_user(
        &self,
        user_id: i64,
        permission_id: i64,
    ) -> Result<bool, BackendError>;
    async fn revoke_permission_from_user(
        &self,
        user_id: i64,
        permission_id: i64,
    ) -> Result<bool, BackendError>;
    /// The grant row for the (user, permission) pair, when one exists.
    async fn get_grant_for_user_permission(
        &self,
        user_id: i64,
        permission_id: i64,
    ) -> Result<Option<PermissionGrant>, BackendError>;
    /// The permissions granted to the user, joined through the grant
    /// rows.  An unknown user id simply yields an empty list.
    async fn get_grants_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Permission>, BackendError>;
    /// Informational aggregate of existing grants grouped by the role
    /// of the holding user.  Reporting only; enforcement never reads
    /// this.
    async fn get_grants_by_role(
        &self,
    ) -> Result<Vec<(Role, Vec<String>)>, BackendError>;
}
