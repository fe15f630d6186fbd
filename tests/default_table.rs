use std::ptr;

use cluster_recommender::domain::product::ProductId;
use cluster_recommender::processing::similar::find_similar;
use cluster_recommender::repository;

// Integration tests run from the package root, where the bundled export
// lives at the default location.
#[test]
fn default_table_is_the_bundled_export() {
    let table = repository::load().expect("bundled export loads");

    assert_eq!(table.len(), 10);
    assert_eq!(
        find_similar(table, ProductId::new(0), 5),
        vec![ProductId::new(1), ProductId::new(2)]
    );

    let again = repository::load().expect("cached table is returned");
    assert!(ptr::eq(table, again));
}
