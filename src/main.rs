use std::env;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use gitfab::{GitfabRepo, Launcher, PageType};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gitfab")]
#[command(about = "Opens a git repository in a browser", long_about = None)]
#[command(version)]
struct Cli {
    /// Name of the remote to open
    #[arg(long, default_value = "origin")]
    remote: String,

    /// Page to open: repo or pipeline
    #[arg(long, default_value_t = PageType::Repository)]
    page: PageType,

    /// Open the CI page (GitHub Actions, GitLab or Bitbucket pipelines)
    #[arg(long, conflicts_with = "page")]
    pipeline: bool,

    /// Print the url instead of opening a browser
    #[arg(long)]
    print: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn page(&self) -> PageType {
        if self.pipeline {
            PageType::PipelineOrActions
        } else {
            self.page
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let current_dir = env::current_dir().wrap_err("Failed to get current directory")?;
    let repo = GitfabRepo::discover(current_dir).wrap_err("Failed to find git repository")?;
    let url = repo.web_url(&cli.remote, cli.page())?;

    if cli.print {
        println!("{url}");
        return Ok(());
    }

    Launcher::current().launch(&url)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
