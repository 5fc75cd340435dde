use sekcore::ac::{
    action::Action,
    permset::PermissionSet,
    role::Role,
    user,
};

use crate::{
    Platform,
    error::Error,
};
use super::Principal;

impl<'a> Principal<'a> {
    pub(crate) fn new(
        platform: &'a Platform,
        user: user::User,
    ) -> Self {
        Self {
            platform,
            user,
        }
    }

    pub fn id(&self) -> i64 {
        self.user.id
    }

    pub fn name(&'a self) -> &'a str {
        self.user.name.as_ref()
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub async fn permissions(&self) -> Result<PermissionSet, Error> {
        self.platform.resolve_permissions(self.user.id).await
    }

    pub async fn enforce(
        &self,
        requested: impl AsRef<str>,
    ) -> Result<bool, Error> {
        self.platform.enforce(self.user.id, requested).await
    }

    pub async fn can(
        &self,
        resource: &str,
        action: Action,
    ) -> Result<bool, Error> {
        self.platform.can(self.user.id, resource, action).await
    }
}

impl From<Principal<'_>> for user::User {
    fn from(principal: Principal<'_>) -> Self {
        principal.user
    }
}

impl From<&Principal<'_>> for user::User {
    fn from(principal: &Principal<'_>) -> Self {
        principal.user.clone()
    }
}
