//! Whole-file read/write helpers.
//!
//! Private files are created with mode 0600 and private directories with
//! 0700 on Unix. The mode is applied at creation so key material is never
//! readable by group or others, even briefly.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::trace;

use crate::error::{Error, Result};

/// Read a whole file.
pub fn read(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path).map_err(|e| Error::file(path, e))?;
    trace!(path = %path.display(), len = data.len(), "read file");
    Ok(data)
}

/// Write a whole file with default permissions, replacing any existing file.
pub fn write(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|e| Error::file(path, e))?;
    trace!(path = %path.display(), len = data.len(), "wrote file");
    Ok(())
}

/// Write a whole file readable only by the owner, replacing any existing file.
pub fn write_private(path: &Path, data: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    write_with(path, data, options)?;

    // The creation mode does not apply to a file that already existed
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| Error::file(path, e))?;
    }

    Ok(())
}

/// Create a new file readable only by the owner.
///
/// Fails with `io::ErrorKind::AlreadyExists` (wrapped in `Error::File`) if the
/// path is taken.
pub fn create_private(path: &Path, data: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    write_with(path, data, options)
}

/// Create a directory (and parents) accessible only by the owner.
pub fn create_private_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    builder.create(path).map_err(|e| Error::file(path, e))
}

fn write_with(path: &Path, data: &[u8], mut options: OpenOptions) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path).map_err(|e| Error::file(path, e))?;
    file.write_all(data).map_err(|e| Error::file(path, e))?;
    file.sync_all().map_err(|e| Error::file(path, e))?;

    trace!(path = %path.display(), len = data.len(), "wrote private file");
    Ok(())
}
