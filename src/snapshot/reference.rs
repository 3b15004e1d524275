//! Repository reference parsing
//!
//! Accepts web URLs (`https://github.com/acme/widgets`), clone URLs with a
//! `.git` suffix, scp-style SSH references (`git@github.com:acme/widgets.git`)
//! and bare `owner/name` paths. The last two path segments win, so extra
//! leading components such as an enterprise path prefix are ignored.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Owner and name of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Resolve a repository reference into owner and name
    pub fn parse(reference: &str) -> Result<Self, Error> {
        let path = strip_host(reference.trim());
        let path = path.trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        let path = path.trim_end_matches('/');

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [.., owner, name] => Ok(Self {
                owner: (*owner).to_string(),
                name: (*name).to_string(),
            }),
            _ => Err(Error::InvalidReference(reference.to_string())),
        }
    }
}

/// Drop a `scheme://host` or `user@host:` prefix, leaving the path
fn strip_host(reference: &str) -> &str {
    if let Some((_, rest)) = reference.split_once("://") {
        return rest.split_once('/').map_or("", |(_, path)| path);
    }

    // scp-style: git@github.com:owner/name.git
    if let Some((prefix, path)) = reference.split_once(':') {
        if !prefix.contains('/') {
            return path;
        }
    }

    reference
}

impl FromStr for RepoRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(reference: &str) -> (String, String) {
        let repo = RepoRef::parse(reference).unwrap();
        (repo.owner, repo.name)
    }

    fn pair(owner: &str, name: &str) -> (String, String) {
        (owner.to_string(), name.to_string())
    }

    #[test]
    fn test_bare_owner_name() {
        assert_eq!(parsed("acme/widgets"), pair("acme", "widgets"));
    }

    #[test]
    fn test_web_url() {
        assert_eq!(
            parsed("https://github.com/acme/widgets"),
            pair("acme", "widgets")
        );
    }

    #[test]
    fn test_clone_url_with_git_suffix() {
        assert_eq!(
            parsed("https://github.com/acme/widgets.git"),
            pair("acme", "widgets")
        );
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(
            parsed("https://github.com/acme/widgets/"),
            pair("acme", "widgets")
        );
        assert_eq!(parsed("acme/widgets.git/"), pair("acme", "widgets"));
    }

    #[test]
    fn test_extra_leading_segments_ignored() {
        assert_eq!(
            parsed("https://ghe.example.com/mirrors/github/acme/widgets"),
            pair("acme", "widgets")
        );
        assert_eq!(parsed("github.com/acme/widgets"), pair("acme", "widgets"));
    }

    #[test]
    fn test_scp_style_ssh() {
        assert_eq!(
            parsed("git@github.com:acme/widgets.git"),
            pair("acme", "widgets")
        );
    }

    #[test]
    fn test_whitespace_and_empty_segments() {
        assert_eq!(parsed("  acme//widgets \n"), pair("acme", "widgets"));
    }

    #[test]
    fn test_single_segment_rejected() {
        let err = RepoRef::parse("widgets").unwrap_err();
        assert!(matches!(err, Error::InvalidReference(ref r) if r == "widgets"));
    }

    #[test]
    fn test_host_only_rejected() {
        assert!(RepoRef::parse("https://github.com").is_err());
        assert!(RepoRef::parse("https://github.com/acme").is_err());
        assert!(RepoRef::parse("https://github.com/acme.git/").is_err());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(RepoRef::parse("").is_err());
        assert!(RepoRef::parse("/").is_err());
    }

    #[test]
    fn test_from_str_and_display() {
        let repo: RepoRef = "acme/widgets".parse().unwrap();
        assert_eq!(repo.to_string(), "acme/widgets");
    }
}
