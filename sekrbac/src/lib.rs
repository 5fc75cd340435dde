use sekcore::ac::{
    action::Action,
    permset::PermissionSet,
};

pub mod cache;
pub mod pattern;

use crate::cache::PatternCache;

/// Decides whether a resolved permission set authorizes a requested
/// permission string.
///
/// The decision is evaluated in order, first match wins:
///
/// 1. exact membership of the requested string in the granted set;
/// 2. when the requested string itself carries a `*` glob, each granted
///    string is tested against its compiled form (the reverse direction
///    used by administrative "anything under `program.*`?" checks);
/// 3. otherwise each granted string carrying a `*` glob is compiled and
///    tested against the requested string;
/// 4. deny.
///
/// The enforcer is stateless apart from the compiled pattern cache and
/// never fails: malformed input (such as an empty requested string)
/// simply denies.  Matching is case-sensitive and nothing is trimmed;
/// callers pass canonical permission strings.
#[derive(Default)]
pub struct Enforcer {
    cache: PatternCache,
}

impl Enforcer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enforce(
        &self,
        granted: &PermissionSet,
        requested: &str,
    ) -> bool {
        if requested.is_empty() {
            return false;
        }
        if granted.contains(requested) {
            return true;
        }
        if requested.contains('*') {
            granted.iter()
                .any(|name| self.cache.matches(requested, name))
        } else {
            granted.iter()
                .filter(|name| name.contains('*'))
                .any(|pattern| self.cache.matches(pattern, requested))
        }
    }

    /// True iff at least one of the requested permissions is granted.
    pub fn enforce_any(
        &self,
        granted: &PermissionSet,
        requested: &[impl AsRef<str>],
    ) -> bool {
        requested.iter()
            .any(|r| self.enforce(granted, r.as_ref()))
    }

    /// True iff every requested permission is granted; vacuously true
    /// for an empty request list.
    pub fn enforce_all(
        &self,
        granted: &PermissionSet,
        requested: &[impl AsRef<str>],
    ) -> bool {
        requested.iter()
            .all(|r| self.enforce(granted, r.as_ref()))
    }

    /// Checks the conventional `<resource>.<action>` permission.
    pub fn can(
        &self,
        granted: &PermissionSet,
        resource: &str,
        action: Action,
    ) -> bool {
        self.enforce(granted, &format!("{resource}.{action}"))
    }

    pub fn can_view(&self, granted: &PermissionSet, resource: &str) -> bool {
        self.can(granted, resource, Action::View)
    }

    pub fn can_create(&self, granted: &PermissionSet, resource: &str) -> bool {
        self.can(granted, resource, Action::Create)
    }

    pub fn can_edit(&self, granted: &PermissionSet, resource: &str) -> bool {
        self.can(granted, resource, Action::Edit)
    }

    pub fn can_delete(&self, granted: &PermissionSet, resource: &str) -> bool {
        self.can(granted, resource, Action::Delete)
    }

    pub fn can_export(&self, granted: &PermissionSet, resource: &str) -> bool {
        self.can(granted, resource, Action::Export)
    }

    pub fn can_import(&self, granted: &PermissionSet, resource: &str) -> bool {
        self.can(granted, resource, Action::Import)
    }
}
