//! Catalog scanner — which catalog files exist in a workspace directory.
//!
//! The directory is listed exactly once; catalog membership and sizes are
//! taken from that single listing so the result is one consistent snapshot.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{io_err, CoreError};
use crate::types::{ContextFileSpec, DiscoveredFile};

/// Return the catalog entries present in `dir`, in catalog order, with sizes.
///
/// A missing directory yields an empty list. Entries that are not regular
/// files (after following symlinks) are ignored.
pub fn scan(dir: &Path, catalog: &[ContextFileSpec]) -> Result<Vec<DiscoveredFile>, CoreError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "workspace directory does not exist");
            return Ok(vec![]);
        }
        Err(e) => return Err(io_err(dir, e)),
    };

    let mut present: HashMap<OsString, u64> = HashMap::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let name = entry.file_name();
        if !catalog.iter().any(|spec| name == spec.name) {
            continue;
        }
        // Follows symlinks; a file removed since the listing is simply skipped.
        match std::fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => {
                present.insert(name, meta.len());
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(path = %entry.path().display(), error = %e, "skipping entry");
            }
        }
    }

    let found: Vec<DiscoveredFile> = catalog
        .iter()
        .filter_map(|spec| {
            present.get(OsStr::new(spec.name)).map(|size| DiscoveredFile {
                spec: *spec,
                path: dir.join(spec.name),
                size: *size,
            })
        })
        .collect();
    tracing::debug!(dir = %dir.display(), found = found.len(), "scanned workspace");
    Ok(found)
}
