//! Process table lookup via /proc

use std::path::Path;
use tracing::debug;

/// Whether any process under `proc_root` has the given `comm` name.
///
/// Unreadable entries are skipped: a process may exit between the
/// directory listing and the read, and some entries are simply not ours
/// to inspect. Both cases report "not running" rather than an error.
///
/// Note that the kernel truncates `comm` to 15 characters; callers
/// looking up longer executable names will never match.
pub fn process_running(proc_root: &Path, name: &str) -> bool {
    let entries = match std::fs::read_dir(proc_root) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(path = %proc_root.display(), error = %e, "Failed to read proc root");
            return false;
        }
    };

    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let is_pid = file_name
            .to_str()
            .is_some_and(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()));
        if !is_pid {
            continue;
        }

        if let Ok(comm) = std::fs::read_to_string(entry.path().join("comm"))
            && comm.trim_end() == name
        {
            return true;
        }
    }

    false
}
