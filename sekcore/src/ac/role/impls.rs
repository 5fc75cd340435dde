use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::Role;

impl From<Role> for &'static str {
    fn from(role: Role) -> &'static str {
        match role {
            Role::Undefined => "UNDEFINED",
            Role::Admin => "ADMIN",
            Role::Teacher => "TEACHER",
            Role::Principal => "PRINCIPAL",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(<&'static str>::from(*self))
    }
}

impl FromStr for Role {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "TEACHER" => Ok(Role::Teacher),
            "PRINCIPAL" => Ok(Role::Principal),
            // Undefined,
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;
    use super::Role;
    use crate::error::ValueError;

    #[test]
    fn smoke() -> anyhow::Result<()> {
        // sample of standard conversions
        assert_eq!(Role::Admin.to_string(), "ADMIN");
        assert_eq!(Role::Admin, Role::from_str("ADMIN")?);
        assert_eq!(Role::Teacher.to_string(), "TEACHER");
        assert_eq!(Role::Teacher, Role::from_str("TEACHER")?);

        // error conversion
        assert!(Role::from_str("UNDEFINED").is_err());
        assert!(matches!(
            Role::from_str("no_such_role")
                .expect_err("should be an error"),
            ValueError::Unsupported(s) if s == "no_such_role".to_string(),
        ));

        // infallable conversion
        assert_eq!(
            Role::from_str("no_such_role")
                .unwrap_or_default(),
            Role::Undefined,
        );
        Ok(())
    }
}
