//! # Gitfab
//!
//! Gitfab finds the git repo you are standing in and opens its remote in a web browser

//! Find the repo enclosing a directory and work out the browsable url of a remote
//!
//! ```ignore
//! use gitfab::{GitfabRepo, PageType};
//! let repo = GitfabRepo::discover("/path/to/repo/src").expect("Not in a git repo");
//! let url = repo
//!     .web_url("origin", PageType::Repository)
//!     .expect("Remote not found");
//! ```
//!
//! The url translation is available on its own, with no repo needed
//!
//! ```
//! use gitfab::{translate, translate_with_page, PageType};
//! assert_eq!(
//!     translate("git@github.com:JamesWoolfenden/gitfab.git"),
//!     "https://github.com/JamesWoolfenden/gitfab"
//! );
//! assert_eq!(
//!     translate_with_page("git@gitlab.com:group/project.git", PageType::PipelineOrActions),
//!     "https://gitlab.com/group/project/-/pipelines"
//! );
//! ```

pub mod browser;
pub mod locate;
#[doc(hidden)]
pub mod repo;
#[doc(hidden)]
pub mod types;
pub mod url;

// Re-export our types in the root
#[doc(inline)]
pub use crate::types::*;

pub use crate::browser::Launcher;
pub use crate::locate::{find_repo_root, LocateError};
pub use crate::url::{detect_platform, page_path, translate, translate_with_page};
