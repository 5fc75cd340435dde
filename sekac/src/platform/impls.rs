use sekcore::{
    ac::{
        action::Action,
        grant::PermissionGrant,
        permission::Permission,
        permset::PermissionSet,
        role::Role,
    },
    platform::ACPlatform,
};
use sekrbac::Enforcer;

use crate::{
    error::Error,
    principal::Principal,
};
use super::{
    Builder,
    Platform,
};

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ac_platform(mut self, val: impl ACPlatform + 'static) -> Self {
        self.ac_platform = Some(Box::new(val));
        self
    }

    pub fn enforcer(mut self, val: Enforcer) -> Self {
        self.enforcer = val;
        self
    }

    pub fn build(self) -> Platform {
        Platform {
            ac_platform: self.ac_platform
                .expect("missing required argument ac_platform"),
            enforcer: self.enforcer,
        }
    }
}

// User management.

impl<'a> Platform {
    pub async fn create_user(
        &'a self,
        name: &str,
        role: Role,
    ) -> Result<Principal<'a>, Error> {
        let id = self.ac_platform.add_user(name, role).await?;
        self.get_user(id).await?
            .ok_or(Error::UnknownUser(id))
    }

    pub async fn get_user(
        &'a self,
        id: i64,
    ) -> Result<Option<Principal<'a>>, Error> {
        let user = self.ac_platform.get_user_by_id(id).await?;
        Ok(user.map(|user| Principal::new(self, user)))
    }

    pub async fn get_user_by_name(
        &'a self,
        name: &str,
    ) -> Result<Option<Principal<'a>>, Error> {
        let user = self.ac_platform.get_user_by_name(name).await?;
        Ok(user.map(|user| Principal::new(self, user)))
    }

    pub async fn remove_user(
        &self,
        id: i64,
    ) -> Result<bool, Error> {
        Ok(self.ac_platform.remove_user(id).await?)
    }
}

// Permission administration - seeding only; end-user flows never touch
// these.

impl Platform {
    pub async fn create_permission(
        &self,
        name: &str,
        resource: &str,
        action: Action,
        description: Option<&str>,
    ) -> Result<i64, Error> {
        Ok(self.ac_platform.add_permission(
            name,
            resource,
            action,
            description,
        ).await?)
    }

    pub async fn get_permission_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Permission>, Error> {
        Ok(self.ac_platform.get_permission_by_name(name).await?)
    }

    pub async fn list_permissions(
        &self,
    ) -> Result<Vec<Permission>, Error> {
        Ok(self.ac_platform.list_permissions().await?)
    }

    pub async fn remove_permission(
        &self,
        id: i64,
    ) -> Result<bool, Error> {
        Ok(self.ac_platform.remove_permission(id).await?)
    }
}

// Grant lifecycle.

impl Platform {
    /// Grants the named permission to the user.  Returns false when the
    /// grant already existed; repeated assignment never duplicates the
    /// underlying row.
    pub async fn grant_permission_to_user(
        &self,
        user_id: i64,
        permission_name: &str,
    ) -> Result<bool, Error> {
        self.ac_platform.get_user_by_id(user_id).await?
            .ok_or(Error::UnknownUser(user_id))?;
        let permission = self.ac_platform
            .get_permission_by_name(permission_name).await?
            .ok_or_else(|| Error::UnknownPermission(permission_name.to_string()))?;
        let created = self.ac_platform.grant_permission_to_user(
            user_id,
            permission.id,
        ).await?;
        log::debug!("grant {permission_name:?} to user {user_id}: created={created}");
        Ok(created)
    }

    /// Revokes the named permission from the user.  Returns false when
    /// there was nothing to revoke.
    pub async fn revoke_permission_from_user(
        &self,
        user_id: i64,
        permission_name: &str,
    ) -> Result<bool, Error> {
        let permission = self.ac_platform
            .get_permission_by_name(permission_name).await?
            .ok_or_else(|| Error::UnknownPermission(permission_name.to_string()))?;
        Ok(self.ac_platform.revoke_permission_from_user(
            user_id,
            permission.id,
        ).await?)
    }

    /// The grant row for the named permission, when the user holds it.
    pub async fn get_grant_for_user(
        &self,
        user_id: i64,
        permission_name: &str,
    ) -> Result<Option<PermissionGrant>, Error> {
        Ok(match self.ac_platform.get_permission_by_name(permission_name).await? {
            Some(permission) => self.ac_platform
                .get_grant_for_user_permission(user_id, permission.id)
                .await?,
            None => None,
        })
    }

    /// The informational aggregate of existing grants grouped by the
    /// role of the holding user.  Enforcement never consults this.
    pub async fn grants_by_role(
        &self,
    ) -> Result<Vec<(Role, Vec<String>)>, Error> {
        Ok(self.ac_platform.get_grants_by_role().await?)
    }
}

// Resolution and enforcement.
//
// Every entry point takes the principal id explicitly; there is no
// ambient session state threaded through here.  Resolution is fresh per
// call, so a revoke is visible to the next check.

impl Platform {
    /// The set of permission names currently granted to the user.
    /// Empty for unknown principals; absence of grants is a normal
    /// state meaning "no access", not an error.
    pub async fn resolve_permissions(
        &self,
        user_id: i64,
    ) -> Result<PermissionSet, Error> {
        Ok(self.ac_platform.get_grants_for_user(user_id).await?
            .into_iter()
            .map(|permission| permission.name)
            .collect())
    }

    pub async fn enforce(
        &self,
        user_id: i64,
        requested: impl AsRef<str>,
    ) -> Result<bool, Error> {
        let granted = self.resolve_permissions(user_id).await?;
        Ok(self.enforcer.enforce(&granted, requested.as_ref()))
    }

    pub async fn enforce_any(
        &self,
        user_id: i64,
        requested: &[impl AsRef<str>],
    ) -> Result<bool, Error> {
        let granted = self.resolve_permissions(user_id).await?;
        Ok(self.enforcer.enforce_any(&granted, requested))
    }

    pub async fn enforce_all(
        &self,
        user_id: i64,
        requested: &[impl AsRef<str>],
    ) -> Result<bool, Error> {
        let granted = self.resolve_permissions(user_id).await?;
        Ok(self.enforcer.enforce_all(&granted, requested))
    }

    pub async fn can(
        &self,
        user_id: i64,
        resource: &str,
        action: Action,
    ) -> Result<bool, Error> {
        let granted = self.resolve_permissions(user_id).await?;
        Ok(self.enforcer.can(&granted, resource, action))
    }
}
