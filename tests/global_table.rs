mod common;

use std::ptr;

use cluster_recommender::domain::product::ProductId;
use cluster_recommender::repository;

use common::TestCsv;

// The process-wide table can only be initialised once, so this binary
// holds a single test.
#[test]
fn process_table_is_loaded_once() {
    let first_csv = TestCsv::new(&[(1, 0, "Jacket"), (2, 0, "Parka")]);
    let second_csv = TestCsv::new(&[(7, 3, "Backpack")]);

    let first = repository::load_from(first_csv.path()).expect("first load succeeds");
    let second = repository::load_from(second_csv.path()).expect("cached table is returned");

    assert!(ptr::eq(first, second));
    assert!(second.contains(ProductId::new(1)));
    assert!(!second.contains(ProductId::new(7)));
}
