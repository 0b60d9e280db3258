use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The git hosting provider a remote url points at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    GitHub,
    GitLab,
    Bitbucket,
    Unknown,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::GitHub => "github",
            Platform::GitLab => "gitlab",
            Platform::Bitbucket => "bitbucket",
            Platform::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Which page of the hosted repo to open
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageType {
    /// The repo landing page
    #[default]
    Repository,
    /// GitHub Actions, GitLab or Bitbucket pipelines
    PipelineOrActions,
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageType::Repository => f.write_str("repo"),
            PageType::PipelineOrActions => f.write_str("pipeline"),
        }
    }
}

impl FromStr for PageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "repo" | "repository" => Ok(PageType::Repository),
            "pipeline" | "pipelines" | "actions" => Ok(PageType::PipelineOrActions),
            other => Err(format!("unknown page type '{other}', expected repo or pipeline")),
        }
    }
}

/// Remote name mapped to its configured urls, in config file order.
/// The first url of a remote is the one that gets opened.
pub type RemoteUrls = BTreeMap<String, Vec<String>>;

/// Use `GitfabRepo::discover()` to find the repo enclosing a directory,
/// or `GitfabRepo::open()` if you already have the repo root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GitfabRepo {
    /// The repo root, the directory holding `.git`
    pub path: PathBuf,
    /// Every remote configured for the repo
    pub remotes: RemoteUrls,
}
