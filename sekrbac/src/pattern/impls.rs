use regex::Regex;
use std::fmt;
use super::PermissionPattern;

impl PermissionPattern {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.contains('*') {
            Self::Glob(raw)
        } else {
            Self::Literal(raw)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) | Self::Glob(s) => s,
        }
    }

    pub fn is_glob(&self) -> bool {
        matches!(self, Self::Glob(_))
    }

    /// The anchored regex source for this pattern.  Literals escape to
    /// an exact match; globs substitute each run of `*` with `.*`.
    pub fn regex_source(&self) -> String {
        let raw = self.as_str();
        let mut source = String::with_capacity(raw.len() + 8);
        source.push('^');
        let mut in_run = false;
        let mut literal = String::new();
        for c in raw.chars() {
            if c == '*' {
                if !in_run {
                    source.push_str(&regex::escape(&literal));
                    literal.clear();
                    source.push_str(".*");
                    in_run = true;
                }
            } else {
                literal.push(c);
                in_run = false;
            }
        }
        source.push_str(&regex::escape(&literal));
        source.push('$');
        source
    }

    /// Compiles the pattern.  The escaped source should never be
    /// rejected by the regex engine; if it somehow is, the pattern is
    /// treated as matching nothing.
    pub fn compile(&self) -> Option<Regex> {
        match Regex::new(&self.regex_source()) {
            Ok(re) => Some(re),
            Err(e) => {
                log::warn!("permission pattern {:?} failed to compile: {e}", self.as_str());
                None
            }
        }
    }
}

impl From<&str> for PermissionPattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for PermissionPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::PermissionPattern;

    #[test]
    fn classify() {
        assert!(!PermissionPattern::new("siswa.create").is_glob());
        assert!(PermissionPattern::new("program.*").is_glob());
        assert!(PermissionPattern::new("*").is_glob());
        assert!(!PermissionPattern::new("").is_glob());
    }

    #[test]
    fn regex_source() {
        assert_eq!(
            PermissionPattern::new("siswa.create").regex_source(),
            r"^siswa\.create$",
        );
        assert_eq!(
            PermissionPattern::new("program.*").regex_source(),
            r"^program\..*$",
        );
        // a run of stars collapses to a single wildcard
        assert_eq!(
            PermissionPattern::new("a**b").regex_source(),
            r"^a.*b$",
        );
        assert_eq!(
            PermissionPattern::new("*").regex_source(),
            r"^.*$",
        );
    }

    #[test]
    fn literal_dots_do_not_wildcard() -> anyhow::Result<()> {
        let re = PermissionPattern::new("program.siswa.create")
            .compile()
            .expect("escaped source must compile");
        assert!(re.is_match("program.siswa.create"));
        assert!(!re.is_match("programXsiswaXcreate"));
        Ok(())
    }

    #[test]
    fn glob_crosses_segments() -> anyhow::Result<()> {
        let re = PermissionPattern::new("program.*")
            .compile()
            .expect("escaped source must compile");
        assert!(re.is_match("program.edit"));
        assert!(re.is_match("program.jurusan.PPLG.edit"));
        assert!(!re.is_match("siswa.edit"));
        Ok(())
    }
}
