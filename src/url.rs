//! Turn git remote urls into urls a browser can open

use crate::{PageType, Platform};

const GIT_SUFFIX: &str = ".git";
const SSH_SCHEME: &str = "ssh://";
const HTTPS_SCHEME: &str = "https://";

// Checked in order, first hit wins
const GITHUB_HOSTS: &[&str] = &["github.com"];
const GITLAB_HOSTS: &[&str] = &["gitlab.com", "gitlab.", "code.pan.run"];
const BITBUCKET_HOSTS: &[&str] = &["bitbucket.org", "bitbucket."];

/// Convert a git remote url into a browsable https url.
///
/// Handles, in this order:
/// - ssh shorthand `git@github.com:user/repo.git` → `https://github.com/user/repo`
/// - `http://` and `https://` urls, which only lose the `.git` suffix
/// - `ssh://[user@]host/path.git` → `https://host/path`
///
/// Anything else is returned as-is.
pub fn translate(url: &str) -> String {
    if let Some((host, path)) = split_scp_like(url) {
        return format!("{HTTPS_SCHEME}{host}/{}", trim_git_suffix(path));
    }

    if url.starts_with("https://") || url.starts_with("http://") {
        return trim_git_suffix(url).to_string();
    }

    if let Some(rest) = url.strip_prefix(SSH_SCHEME) {
        let rest = strip_user(rest);
        return format!("{HTTPS_SCHEME}{}", trim_git_suffix(rest));
    }

    url.to_string()
}

/// Like `translate()`, with the path of `page` on the detected platform appended
pub fn translate_with_page(url: &str, page: PageType) -> String {
    let base = translate(url);
    let platform = detect_platform(url);
    format!("{base}{}", page_path(platform, page))
}

/// Guess the hosting platform from the host portion of a remote url
pub fn detect_platform(url: &str) -> Platform {
    let host = host_of(url);
    let matches = |fragments: &[&str]| fragments.iter().any(|f| host.contains(f));

    if matches(GITHUB_HOSTS) {
        Platform::GitHub
    } else if matches(GITLAB_HOSTS) {
        Platform::GitLab
    } else if matches(BITBUCKET_HOSTS) {
        Platform::Bitbucket
    } else {
        Platform::Unknown
    }
}

/// Path suffix for `page` on `platform`. Always empty for `PageType::Repository`.
pub fn page_path(platform: Platform, page: PageType) -> &'static str {
    if page == PageType::Repository {
        return "";
    }

    match platform {
        Platform::GitHub => "/actions",
        Platform::GitLab => "/-/pipelines",
        Platform::Bitbucket => "/pipelines",
        Platform::Unknown => "",
    }
}

/// Split `user@host:path` on the first colon into `(host, path)`.
/// Returns `None` for urls with a scheme or without a user marker.
fn split_scp_like(url: &str) -> Option<(&str, &str)> {
    let (user_host, path) = url.split_once(':')?;

    // A scheme (`ssh://`) or a local path puts a `/` before the first colon
    if user_host.contains('/') {
        return None;
    }

    let (user, host) = user_host.split_once('@')?;
    if user.is_empty() {
        return None;
    }

    Some((host, path))
}

fn strip_user(authority_and_path: &str) -> &str {
    let authority_end = authority_and_path
        .find('/')
        .unwrap_or(authority_and_path.len());

    match authority_and_path[..authority_end].rfind('@') {
        Some(at) => &authority_and_path[at + 1..],
        None => authority_and_path,
    }
}

// Strip repeatedly so translating twice gives the same result
fn trim_git_suffix(mut s: &str) -> &str {
    while let Some(trimmed) = s.strip_suffix(GIT_SUFFIX) {
        s = trimmed;
    }
    s
}

fn host_of(url: &str) -> &str {
    if let Some((host, _)) = split_scp_like(url) {
        return host;
    }

    match url.split_once("://") {
        Some((_, rest)) => {
            let rest = strip_user(rest);
            let end = rest.find(['/', ':']).unwrap_or(rest.len());
            &rest[..end]
        }
        None => url,
    }
}
