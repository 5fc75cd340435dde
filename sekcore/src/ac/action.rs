use serde::{Deserialize, Serialize};

/// The fixed set of actions a permission may name on a resource.  The
/// canonical permission name is `<resource>.<action>` with the action
/// rendered in lowercase.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum Action {
    // catch-all for whenever infallable conversion is needed
    #[default]
    Undefined,
    View,
    Create,
    Edit,
    Delete,
    Export,
    Import,
}

mod impls;
