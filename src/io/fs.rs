use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use tempfile::NamedTempFile;

/// Write-then-rename wrapper so a failed render never leaves a truncated map behind.
pub struct PendingWrite {
    target: PathBuf,
    tmp: NamedTempFile,
}

/// Open a temporary file next to `target`. Refuses to clobber an existing
/// file unless `force` is set; `-` (stdout) is rejected.
pub fn open_for_write(target: &Path, force: bool) -> Result<PendingWrite> {
    if target == Path::new("-") {
        bail!("[io::fs] stdout is not supported; provide a real file path.");
    }
    if !force && target.exists() {
        bail!("[io::fs] Refusing to overwrite existing file: {} (use --force)", target.display());
    }

    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("[io::fs] Failed to create directory {}", parent.display()))?;

    let tmp = NamedTempFile::new_in(parent).context("[io::fs] Failed to create temp file")?;
    Ok(PendingWrite { target: target.to_path_buf(), tmp })
}

impl Write for PendingWrite {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> { self.tmp.write(buf) }

    fn flush(&mut self) -> io::Result<()> { self.tmp.flush() }
}

/// Flush, fsync (best effort), and atomically move the file into place.
pub fn finalize_write(mut pending: PendingWrite) -> Result<()> {
    pending.tmp.flush().context("[io::fs] Failed to flush output")?;
    pending.tmp.as_file().sync_all().ok();

    let target = pending.target;
    pending.tmp.persist(&target)
        .with_context(|| format!("[io::fs] Failed to rename into {}", target.display()))?;

    if let Some(dir) = target.parent() {
        let _ = File::open(dir).and_then(|f| f.sync_all());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn writes_atomically_and_respects_force() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/map.svg");

        let mut pending = open_for_write(&target, false).unwrap();
        pending.write_all(b"<svg/>").unwrap();
        assert!(!target.exists());
        finalize_write(pending).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "<svg/>");

        assert!(open_for_write(&target, false).is_err());
        let mut pending = open_for_write(&target, true).unwrap();
        pending.write_all(b"<svg></svg>").unwrap();
        finalize_write(pending).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "<svg></svg>");
    }

    #[test]
    fn stdout_is_rejected() {
        assert!(open_for_write(Path::new("-"), true).is_err());
    }
}
