//! Size-limited document reads shared by every backend

use crate::error::ExtractError;
use std::path::Path;
use tracing::debug;

/// Default per-document size limit (10 MiB)
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Read the whole document at `path`, refusing files over `max_bytes`
pub(crate) fn read_document(path: &Path, max_bytes: u64) -> Result<Vec<u8>, ExtractError> {
    let io_err = |source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > max_bytes {
        return Err(ExtractError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}
