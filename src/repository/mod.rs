use std::path::Path;
use std::sync::OnceLock;

use crate::domain::table::ProductTable;
use crate::repository::errors::RepositoryResult;

pub mod csv_file;
pub mod errors;

pub use csv_file::CsvRepository;

/// Location of the clustered export when no other path is configured.
pub const DEFAULT_DATA_PATH: &str = "./data/clustered_data.csv";

pub trait ProductTableReader {
    fn read_table(&self) -> RepositoryResult<ProductTable>;
}

/// Memoizes the table produced by a [`ProductTableReader`].
///
/// The reader runs at most once, even when several threads ask for the
/// table before the first read finishes. A failed read is memoized too.
pub struct CachedTable<R> {
    reader: R,
    table: OnceLock<RepositoryResult<ProductTable>>,
}

impl<R: ProductTableReader> CachedTable<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            table: OnceLock::new(),
        }
    }

    pub fn get(&self) -> RepositoryResult<&ProductTable> {
        match self.table.get_or_init(|| self.reader.read_table()) {
            Ok(table) => Ok(table),
            Err(e) => Err(e.clone()),
        }
    }
}

static PRODUCT_TABLE: OnceLock<CachedTable<CsvRepository>> = OnceLock::new();

/// Loads the process-wide product table from [`DEFAULT_DATA_PATH`].
pub fn load() -> RepositoryResult<&'static ProductTable> {
    load_from(DEFAULT_DATA_PATH)
}

/// Loads the process-wide product table from `path`.
///
/// The first call decides the source; later calls return the same table
/// regardless of the path they pass and log a warning when it names a
/// different file.
pub fn load_from(path: impl AsRef<Path>) -> RepositoryResult<&'static ProductTable> {
    let path = path.as_ref();
    let cache = PRODUCT_TABLE.get_or_init(|| CachedTable::new(CsvRepository::new(path)));
    if !same_file(cache.reader.path(), path) {
        log::warn!(
            "Product table already loaded from {}; ignoring {}",
            cache.reader.path().display(),
            path.display()
        );
    }
    cache.get()
}

/// Compares resolved paths, falling back to the literal paths when either
/// cannot be resolved.
fn same_file(left: &Path, right: &Path) -> bool {
    match (left.canonicalize(), right.canonicalize()) {
        (Ok(left), Ok(right)) => left == right,
        _ => left == right,
    }
}
