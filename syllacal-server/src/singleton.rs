//! Single-instance guard for syllacal-server.
//!
//! Holds an exclusive advisory lock on a file in the platform runtime
//! directory. The file records the owning PID so a refused startup can
//! say which process is already serving.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use fs2::FileExt;

/// Releases the lock when dropped
pub struct LockGuard {
    _file: File,
}

/// Acquire the instance lock, failing if another server holds it.
pub fn acquire_lock() -> Result<LockGuard> {
    let path = lock_file_path()?;
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(&path)
        .with_context(|| format!("Failed to open lock file {}", path.display()))?;

    if file.try_lock_exclusive().is_err() {
        let mut holder = String::new();
        let _ = file.read_to_string(&mut holder);

        let holder = holder.trim();
        if holder.is_empty() {
            anyhow::bail!("Another syllacal-server instance is already running");
        }
        anyhow::bail!("Another syllacal-server instance is already running (pid {holder})");
    }

    // Replace whatever a previous holder left behind with our own PID
    file.set_len(0)?;
    write!(file, "{}", std::process::id())?;

    Ok(LockGuard { _file: file })
}

fn lock_file_path() -> Result<PathBuf> {
    let base = dirs::runtime_dir()
        .or_else(dirs::cache_dir)
        .context("Could not determine a runtime directory for the lock file")?;

    let dir = base.join("syllacal");
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    Ok(dir.join("server.lock"))
}
