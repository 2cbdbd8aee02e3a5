//! FILENAME: tables/src/cache.rs
//! PURPOSE: Read-through cache of parsed `TableSet`s.
//! CONTEXT: Workbooks change rarely but get consulted on every
//! calculation, so parsed tables are kept keyed by source identity
//! (canonical path + mtime + length) and recomputed when the file on
//! disk differs. Purely an optimization: `TableSet::load` stays the
//! canonical path.

use log::{debug, warn};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::UNIX_EPOCH;

use crate::{TableError, TableSchema, TableSet, XlsxSource};

/// Source identity: same path with a different mtime or length is a
/// different source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SourceId {
    path: PathBuf,
    mtime_ns: u128,
    len: u64,
}

static CACHE: Lazy<Mutex<HashMap<PathBuf, (SourceId, Arc<TableSet>)>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn source_id(path: &Path) -> Result<SourceId, TableError> {
    let canonical = path.canonicalize()?;
    let meta = std::fs::metadata(&canonical)?;
    let mtime_ns = meta
        .modified()?
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    Ok(SourceId {
        path: canonical,
        mtime_ns,
        len: meta.len(),
    })
}

/// Loads the tables at `path`, reusing a previously parsed `TableSet`
/// when the file has not changed since.
pub fn load_cached(path: &Path, schema: &TableSchema) -> Result<Arc<TableSet>, TableError> {
    let id = source_id(path)?;

    {
        let cache = CACHE.lock().expect("table cache poisoned");
        if let Some((cached_id, tables)) = cache.get(&id.path) {
            if cached_id == &id {
                debug!("table cache hit for {:?}", id.path);
                return Ok(Arc::clone(tables));
            }
            warn!("table source {:?} changed on disk, reloading", id.path);
        }
    }

    let source = XlsxSource::open(&id.path, &schema.sheet)?;
    let tables = Arc::new(TableSet::load(&source, schema)?);

    let mut cache = CACHE.lock().expect("table cache poisoned");
    cache.insert(id.path.clone(), (id, Arc::clone(&tables)));
    Ok(tables)
}
