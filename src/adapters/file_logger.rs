//! Session log files with rotation

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{Error, Result, ports::MatchLogger};

/// Default cap on retained session logs per directory.
pub const DEFAULT_MAX_LOG_FILES: usize = 10;

/// Line-oriented logger writing one file per match session.
///
/// Files are named `nim_<mode>_<unix-seconds>.log`. On creation the log
/// directory is pruned down to the newest `max_files` session logs, so a
/// directory never accumulates unbounded history.
pub struct FileLogger {
    path: PathBuf,
    file: File,
    started: SystemTime,
}

impl FileLogger {
    /// Open a fresh session log under `log_dir`, creating the directory if
    /// needed and pruning old logs first.
    pub fn create(log_dir: &Path, mode_name: &str, max_files: usize) -> Result<Self> {
        fs::create_dir_all(log_dir)
            .map_err(|source| Error::io(format!("create log dir {}", log_dir.display()), source))?;

        // prune to max_files - 1 so the new session fits under the cap
        prune_logs(log_dir, max_files.saturating_sub(1))?;

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        let path = log_dir.join(format!("nim_{mode_name}_{stamp}.log"));
        let file = File::create(&path)
            .map_err(|source| Error::io(format!("create log file {}", path.display()), source))?;

        Ok(FileLogger {
            path,
            file,
            started: SystemTime::now(),
        })
    }

    /// Path of the session log backing this logger.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MatchLogger for FileLogger {
    fn info(&mut self, message: &str) {
        let elapsed = self
            .started
            .elapsed()
            .map(|elapsed| elapsed.as_secs_f64())
            .unwrap_or(0.0);
        // log writes are best-effort; a full disk must not abort the match
        let _ = writeln!(self.file, "[{elapsed:9.3}] INFO {message}");
    }
}

/// Delete the oldest `*.log` files until at most `keep` remain.
pub fn prune_logs(log_dir: &Path, keep: usize) -> Result<usize> {
    let entries = fs::read_dir(log_dir)
        .map_err(|source| Error::io(format!("read log dir {}", log_dir.display()), source))?;

    let mut logs: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|source| Error::io("read log dir entry".to_string(), source))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "log") {
            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .unwrap_or(UNIX_EPOCH);
            logs.push((modified, path));
        }
    }

    if logs.len() <= keep {
        return Ok(0);
    }

    logs.sort_by(|a, b| a.0.cmp(&b.0));
    let excess = logs.len() - keep;
    for (_, path) in logs.iter().take(excess) {
        fs::remove_file(path)
            .map_err(|source| Error::io(format!("remove old log {}", path.display()), source))?;
    }
    Ok(excess)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "nim-file-logger-{tag}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn creates_a_session_log_and_writes_lines() {
        let dir = scratch_dir("write");
        let mut logger = FileLogger::create(&dir, "classic", DEFAULT_MAX_LOG_FILES).unwrap();
        logger.info("Player 1 takes 2 objects from pile 1");

        let contents = fs::read_to_string(logger.path()).unwrap();
        assert!(contents.contains("INFO Player 1 takes 2 objects from pile 1"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn prune_removes_only_the_oldest_logs() {
        let dir = scratch_dir("prune");
        fs::create_dir_all(&dir).unwrap();
        for index in 0..4 {
            fs::write(dir.join(format!("nim_classic_{index}.log")), "x").unwrap();
        }
        fs::write(dir.join("notes.txt"), "keep me").unwrap();

        let removed = prune_logs(&dir, 2).unwrap();
        assert_eq!(removed, 2);

        let remaining = fs::read_dir(&dir).unwrap().count();
        // two logs plus the unrelated file survive
        assert_eq!(remaining, 3);
        assert!(dir.join("notes.txt").exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
