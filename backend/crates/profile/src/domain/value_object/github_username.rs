//! GitHub Username Value Object
//!
//! GitHub のユーザー名規則に従う（英数字とハイフン、最大 39 文字、
//! 先頭・末尾のハイフン不可）。外部 API の URL パスに埋め込むため、
//! それ以外の文字列はここで弾く。

use std::fmt;

/// Maximum length GitHub allows for a username
pub const GITHUB_USERNAME_MAX_LENGTH: usize = 39;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubUsername(String);

impl GithubUsername {
    /// `None` when `raw` cannot be a GitHub username
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let valid = !raw.is_empty()
            && raw.len() <= GITHUB_USERNAME_MAX_LENGTH
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !raw.starts_with('-')
            && !raw.ends_with('-');

        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GithubUsername {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(GithubUsername::parse("octocat").is_some());
        assert!(GithubUsername::parse("mona-lisa-42").is_some());
    }

    #[test]
    fn test_rejects_path_characters() {
        for bad in ["", "-lead", "trail-", "a/b", "../x", "a b", "a?x=1"] {
            assert!(GithubUsername::parse(bad).is_none(), "{bad} accepted");
        }
        assert!(GithubUsername::parse(&"a".repeat(40)).is_none());
    }
}
