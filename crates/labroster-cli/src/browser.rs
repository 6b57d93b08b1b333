use std::process::{Command, Stdio};

use anyhow::{Result, anyhow};

/// Overrides the platform URL opener with a command of the user's choice.
pub const ENV_BROWSER: &str = "LABROSTER_BROWSER";

/// Open `url` in a new browser tab with the platform opener.
pub fn open_url(url: &str) -> Result<()> {
    let mut command = match std::env::var(ENV_BROWSER) {
        Ok(program) if !program.trim().is_empty() => {
            let mut cmd = Command::new(program.trim());
            cmd.arg(url);
            cmd
        }
        _ => platform_command(url)?,
    };

    let status = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|err| anyhow!("failed to launch url opener: {err}"))?;
    if !status.success() {
        return Err(anyhow!("url opener exited with status {status}"));
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn platform_command(url: &str) -> Result<Command> {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    Ok(cmd)
}

#[cfg(target_os = "windows")]
fn platform_command(url: &str) -> Result<Command> {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    Ok(cmd)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn platform_command(url: &str) -> Result<Command> {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    Ok(cmd)
}

#[cfg(not(any(unix, target_os = "windows")))]
fn platform_command(_url: &str) -> Result<Command> {
    Err(anyhow!("no url opener known for this platform; set {ENV_BROWSER}"))
}
