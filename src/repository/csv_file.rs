use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::domain::product::{ClusterLabel, Product, ProductId};
use crate::domain::table::ProductTable;
use crate::repository::ProductTableReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};

const CLUSTER_COLUMN: &str = "cluster";
const TITLE_COLUMN: &str = "title";
const DESCRIPTION_COLUMN: &str = "description";

/// Reads the clustered product export from a CSV file.
///
/// The first column is the product id whatever its header says; the
/// `cluster`, `title` and `description` columns are located by name and
/// any other column is ignored.
#[derive(Clone, Debug)]
pub struct CsvRepository {
    path: PathBuf,
}

impl CsvRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductTableReader for CsvRepository {
    fn read_table(&self) -> RepositoryResult<ProductTable> {
        let file = File::open(&self.path).map_err(|e| RepositoryError::Read {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        let table = parse_products(file)?;

        let clustered = table.iter().filter(|p| !p.cluster.is_unclustered()).count();
        log::info!(
            "Loaded {} products ({clustered} clustered) from {}",
            table.len(),
            self.path.display()
        );

        Ok(table)
    }
}

struct Columns {
    cluster: usize,
    title: usize,
    description: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> RepositoryResult<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .enumerate()
                .skip(1)
                .find(|(_, header)| header.trim() == name)
                .map(|(index, _)| index)
                .ok_or(RepositoryError::MissingColumn(name))
        };

        Ok(Self {
            cluster: find(CLUSTER_COLUMN)?,
            title: find(TITLE_COLUMN)?,
            description: find(DESCRIPTION_COLUMN)?,
        })
    }
}

/// Parses a product table from CSV data with a header row.
pub fn parse_products<R: Read>(reader: R) -> RepositoryResult<ProductTable> {
    let mut reader = csv::Reader::from_reader(reader);
    let columns = Columns::locate(reader.headers()?)?;

    let mut products = Vec::new();
    for record in reader.records() {
        let record = record?;
        products.push(parse_product(&record, &columns)?);
    }

    ProductTable::from_products(products).map_err(RepositoryError::DuplicateProduct)
}

fn parse_product(record: &StringRecord, columns: &Columns) -> RepositoryResult<Product> {
    let line = record.position().map(|p| p.line()).unwrap_or_default();
    let invalid = |message: String| RepositoryError::ValidationError { line, message };
    let field = |index: usize| record.get(index).unwrap_or_default();

    let raw_id = field(0).trim();
    let id = raw_id
        .parse::<i64>()
        .map_err(|_| invalid(format!("product id `{raw_id}` is not an integer")))?;

    let raw_cluster = field(columns.cluster).trim();
    let cluster = raw_cluster
        .parse::<i64>()
        .map_err(|_| invalid(format!("cluster `{raw_cluster}` is not an integer")))?;

    Ok(Product {
        id: ProductId::new(id),
        cluster: ClusterLabel::new(cluster),
        title: field(columns.title).to_string(),
        description: field(columns.description).to_string(),
    })
}
