//! Student identity detection
//!
//! Assignment repositories are created as `<assignment>-<username>`, so the
//! username is the last dash-separated part of the repository name. The
//! repository name comes from, in order:
//!
//! 1. the `GITHUB_REPOSITORY` environment variable (`owner/repo`)
//! 2. the `origin` remote URL of the git checkout
//! 3. the current directory name

use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Username used when no repository name can be resolved
pub const UNKNOWN_STUDENT: &str = "unknown";

/// Pure resolution of the repository name from its possible sources
pub fn resolve_repo_name(
    github_repository: Option<&str>,
    origin_url: Option<&str>,
    cwd: Option<&Path>,
) -> Option<String> {
    if let Some(repo) = github_repository.map(str::trim).filter(|r| !r.is_empty()) {
        return last_segment(repo, &['/']);
    }
    if let Some(url) = origin_url.map(str::trim).filter(|u| !u.is_empty()) {
        let url = url.trim_end_matches('/');
        let url = url.strip_suffix(".git").unwrap_or(url);
        return last_segment(url, &['/', ':']);
    }
    cwd.and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}

/// Username part of a repository name
///
/// # Example
/// ```
/// use geolab_core_rs::variant::username_from_repo;
///
/// assert_eq!(username_from_repo("lab04-file-io-jdoe"), "jdoe");
/// assert_eq!(username_from_repo("jdoe"), "jdoe");
/// ```
pub fn username_from_repo(repo_name: &str) -> String {
    match repo_name.rsplit_once('-') {
        Some((_, user)) => user.to_string(),
        None => repo_name.to_string(),
    }
}

/// Detect the repository name from the environment, git and the cwd
pub fn detect_repo_name() -> Option<String> {
    let github_repository = std::env::var("GITHUB_REPOSITORY").ok();
    let origin_url = git_origin_url();
    let cwd = std::env::current_dir().ok();

    let name = resolve_repo_name(
        github_repository.as_deref(),
        origin_url.as_deref(),
        cwd.as_deref(),
    );
    debug!(repo = ?name, "detected repository name");
    name
}

/// Detect the student username of the current checkout
pub fn detect_username() -> String {
    detect_repo_name()
        .map(|repo| username_from_repo(&repo))
        .unwrap_or_else(|| UNKNOWN_STUDENT.to_string())
}

fn git_origin_url() -> Option<String> {
    let output = Command::new("git")
        .args(["remote", "get-url", "origin"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!url.is_empty()).then_some(url)
}

fn last_segment(text: &str, separators: &[char]) -> Option<String> {
    text.rsplit(separators)
        .next()
        .filter(|s| !s.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_repository_wins() {
        let name = resolve_repo_name(
            Some("ggy3061/lab04-alice"),
            Some("https://github.com/other/lab04-bob.git"),
            Some(Path::new("/work/lab04-carol")),
        );
        assert_eq!(name.as_deref(), Some("lab04-alice"));
    }

    #[test]
    fn test_https_origin() {
        let name = resolve_repo_name(None, Some("https://github.com/ggy3061/lab04-bob.git"), None);
        assert_eq!(name.as_deref(), Some("lab04-bob"));
    }

    #[test]
    fn test_ssh_origin() {
        let name = resolve_repo_name(None, Some("git@github.com:ggy3061/lab04-bob.git"), None);
        assert_eq!(name.as_deref(), Some("lab04-bob"));
    }

    #[test]
    fn test_ssh_origin_without_owner() {
        let name = resolve_repo_name(None, Some("git@host:lab04-dave"), None);
        assert_eq!(name.as_deref(), Some("lab04-dave"));
    }

    #[test]
    fn test_git_suffix_only_stripped_once() {
        // A trailing ".git" is a suffix, not a character set
        let name = resolve_repo_name(None, Some("https://host/org/lab04-tig.git"), None);
        assert_eq!(name.as_deref(), Some("lab04-tig"));
    }

    #[test]
    fn test_cwd_fallback() {
        let name = resolve_repo_name(None, None, Some(Path::new("/home/me/lab04-carol")));
        assert_eq!(name.as_deref(), Some("lab04-carol"));
    }

    #[test]
    fn test_nothing_resolves() {
        assert_eq!(resolve_repo_name(Some(""), None, None), None);
    }

    #[test]
    fn test_username_from_repo() {
        assert_eq!(username_from_repo("lab04-alice"), "alice");
        assert_eq!(username_from_repo("solo"), "solo");
        assert_eq!(username_from_repo("trailing-"), "");
    }
}
