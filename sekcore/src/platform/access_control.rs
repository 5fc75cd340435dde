use async_trait::async_trait;
use crate::{
    platform::PlatformUrl,
    ac::{
        traits::{
            GrantBackend,
            PermissionBackend,
            UserBackend,
        },
    },
};

/// ACPlatform - Access Control Platform
///
/// This platform is used to persist the access control information of
/// the school administrative system: user accounts, the seeded
/// permission table, and the grants joining them.
///
/// This trait is applicable to everything that correctly implements the
/// relevant backends that compose this trait.
#[async_trait]
pub trait ACPlatform: GrantBackend
    + PermissionBackend
    + UserBackend

    + PlatformUrl

    + Send
    + Sync
{
    fn as_dyn(&self) -> &dyn ACPlatform;
}

pub trait DefaultACPlatform: ACPlatform {}

impl<P: GrantBackend
    + PermissionBackend
    + UserBackend

    + PlatformUrl

    + DefaultACPlatform

    + Send
    + Sync
> ACPlatform for P {
    fn as_dyn(&self) -> &(dyn ACPlatform) {
        self
    }
}
