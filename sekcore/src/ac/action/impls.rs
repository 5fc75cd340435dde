use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::Action;

impl From<Action> for &'static str {
    fn from(action: Action) -> &'static str {
        match action {
            Action::Undefined => "undefined",
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Export => "export",
            Action::Import => "import",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(<&'static str>::from(*self))
    }
}

impl FromStr for Action {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Action::View),
            "create" => Ok(Action::Create),
            "edit" => Ok(Action::Edit),
            "delete" => Ok(Action::Delete),
            "export" => Ok(Action::Export),
            "import" => Ok(Action::Import),
            // Undefined,
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}
