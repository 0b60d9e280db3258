use std::env::consts::OS;
use std::process::Command;

use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::info;

/// Opens urls with the host OS's default browser
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Launcher {
    /// `xdg-open`
    Linux,
    /// `rundll32 url.dll,FileProtocolHandler`
    Windows,
    /// `open`
    MacOs,
    /// No known way to open a browser on this OS
    Unsupported(String),
}

impl Launcher {
    /// Pick a launcher from an OS name as given by `std::env::consts::OS`
    pub fn for_os(os: &str) -> Self {
        match os {
            "linux" => Launcher::Linux,
            "windows" => Launcher::Windows,
            "macos" => Launcher::MacOs,
            other => Launcher::Unsupported(other.to_string()),
        }
    }

    /// The launcher for the OS we were built for
    pub fn current() -> Self {
        Self::for_os(OS)
    }

    /// Build the command that opens `url`, without running it
    pub fn command(&self, url: &str) -> Result<Command> {
        let command = match self {
            Launcher::Linux => {
                let mut cmd = Command::new("xdg-open");
                cmd.arg(url);
                cmd
            }
            Launcher::Windows => {
                let mut cmd = Command::new("rundll32");
                cmd.arg("url.dll,FileProtocolHandler").arg(url);
                cmd
            }
            Launcher::MacOs => {
                let mut cmd = Command::new("open");
                cmd.arg(url);
                cmd
            }
            Launcher::Unsupported(os) => return Err(eyre!("unsupported platform: {os}")),
        };

        Ok(command)
    }

    /// Start the browser on `url`. Doesn't wait for it to exit.
    pub fn launch(&self, url: &str) -> Result<()> {
        let mut command = self.command(url)?;

        info!("Opening {url} in browser");
        command
            .spawn()
            .wrap_err_with(|| format!("Failed to open browser for {url}"))?;

        Ok(())
    }
}
