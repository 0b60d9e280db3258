use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::locate::find_repo_root;
use crate::url::{detect_platform, translate_with_page};
use crate::{GitfabRepo, PageType, RemoteUrls};

use git2::Repository;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::debug;

impl GitfabRepo {
    /// Returns the `GitfabRepo` enclosing `start`, searching upward for the repo root
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<Self> {
        let root = find_repo_root(start)?;
        Self::open(root)
    }

    /// Returns a `GitfabRepo` after reading the remotes of the repo rooted at `path`
    pub fn open(path: PathBuf) -> Result<Self> {
        let local_repo = Self::to_repository_from_path(&path)?;
        let remotes = Self::remote_urls_from_repo(&local_repo)?;

        debug!("Found {} remote(s) in {}", remotes.len(), path.display());

        Ok(Self { path, remotes })
    }

    /// The first configured url of remote `name`
    pub fn remote_url(&self, name: &str) -> Result<&str> {
        let urls = if let Some(urls) = self.remotes.get(name) {
            urls
        } else {
            return Err(eyre!("Remote '{name}' not found"));
        };

        urls.first()
            .map(String::as_str)
            .ok_or_else(|| eyre!("Remote '{name}' has no URLs configured"))
    }

    /// The browsable url for `page` of remote `name`
    pub fn web_url(&self, name: &str, page: PageType) -> Result<String> {
        let remote_url = self.remote_url(name)?;
        let web_url = translate_with_page(remote_url, page);

        debug!(
            "Remote '{name}' on {}: {remote_url} -> {web_url}",
            detect_platform(remote_url)
        );
        Ok(web_url)
    }

    /// Returns a `git2::Repository` from a given repo directory path
    pub fn to_repository_from_path<P: AsRef<Path> + Debug>(path: P) -> Result<Repository> {
        if let Ok(repo) = Repository::open(path.as_ref()) {
            Ok(repo)
        } else {
            Err(eyre!("Failed to open repo at {path:#?}"))
        }
    }

    /// Read every `remote.<name>.url` value of `repo`, in config order
    pub fn remote_urls_from_repo(repo: &Repository) -> Result<RemoteUrls> {
        let config = repo.config().wrap_err("Failed to read git config")?;
        let mut remotes = RemoteUrls::new();

        for name in repo.remotes()?.iter().flatten() {
            let key = format!("remote.{name}.url");
            let mut urls = Vec::new();

            for entry in &config.multivar(&key, None)? {
                let entry = entry?;
                if let Some(url) = entry.value() {
                    urls.push(url.to_string());
                }
            }

            remotes.insert(name.to_string(), urls);
        }

        Ok(remotes)
    }
}
