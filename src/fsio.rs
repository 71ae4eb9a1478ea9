use crate::constants::{TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX};
use crate::error::Result;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::Builder;

/// Replaces the contents of `path` with `contents` without ever exposing a
/// partially written file.
///
/// The bytes go to a temporary file in the same directory, which is then
/// renamed over the target. If anything fails before the rename, the
/// temporary file is removed when it goes out of scope and the original is
/// left as it was. Permissions of an existing target are carried over.
///
/// A symlinked target is resolved first: the link stays, the file it points
/// to gets the new contents.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(e.into()),
    };
    let path = target.as_path();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(TEMP_FILE_SUFFIX)
        .tempfile_in(dir)?;

    temp.write_all(contents)?;
    temp.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp.path(), metadata.permissions())?;
    }

    temp.persist(path)?;
    Ok(())
}
