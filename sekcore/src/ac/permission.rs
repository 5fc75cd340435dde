use serde::{Deserialize, Serialize};
use super::action::Action;

/// A named capability.
///
/// The name is globally unique, conventionally `<resource>.<action>`
/// (e.g. `siswa.create`), and may itself contain `*` glob tokens when
/// an administrator seeds a wildcard permission (e.g. `program.*`).
/// Permissions are created and deleted by administrative seeding only;
/// once referenced by grants the record is treated as immutable.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Permission {
    pub id: i64,
    pub name: String,
    pub resource: String,
    pub action: Action,
    pub description: Option<String>,
}
