use crate::domain::product::ProductId;
use crate::domain::table::ProductTable;

/// Returns up to `n` products that share the cluster of `item_id`.
///
/// Matches come back in table order and never include `item_id` itself.
/// Unknown ids and unclustered products have no neighbours and produce an
/// empty list.
pub fn find_similar(table: &ProductTable, item_id: ProductId, n: usize) -> Vec<ProductId> {
    let Some(item) = table.get(item_id) else {
        log::debug!("Product {item_id} is not in the table");
        return Vec::new();
    };

    if item.cluster.is_unclustered() {
        log::debug!("Product {item_id} is an outlier");
        return Vec::new();
    }

    table
        .iter()
        .filter(|product| product.cluster == item.cluster && product.id != item_id)
        .map(|product| product.id)
        .take(n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::find_similar;
    use crate::domain::product::{ClusterLabel, Product, ProductId};
    use crate::domain::table::ProductTable;

    fn table(rows: &[(i64, i64)]) -> ProductTable {
        let products = rows
            .iter()
            .map(|&(id, cluster)| Product {
                id: ProductId::new(id),
                cluster: ClusterLabel::new(cluster),
                title: format!("Product {id}"),
                description: String::new(),
            })
            .collect();
        ProductTable::from_products(products).expect("unique ids")
    }

    fn ids(values: &[i64]) -> Vec<ProductId> {
        values.iter().copied().map(ProductId::new).collect()
    }

    #[test]
    fn small_table_examples() {
        let table = table(&[(1, 0), (2, 0), (3, 1), (4, -1)]);

        assert_eq!(find_similar(&table, ProductId::new(1), 5), ids(&[2]));
        assert_eq!(find_similar(&table, ProductId::new(3), 5), ids(&[]));
        assert_eq!(find_similar(&table, ProductId::new(4), 5), ids(&[]));
        assert_eq!(find_similar(&table, ProductId::new(99), 5), ids(&[]));
    }

    #[test]
    fn truncates_in_table_order() {
        let table = table(&[(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0)]);

        assert_eq!(find_similar(&table, ProductId::new(1), 3), ids(&[2, 3, 4]));
        assert_eq!(find_similar(&table, ProductId::new(4), 3), ids(&[1, 2, 3]));
    }

    #[test]
    fn skips_other_clusters_and_outliers() {
        let table = table(&[(10, 2), (11, -1), (12, 3), (13, 2), (14, -1), (15, 2)]);

        assert_eq!(find_similar(&table, ProductId::new(15), 5), ids(&[10, 13]));
    }

    #[test]
    fn outliers_are_not_neighbours_of_each_other() {
        let table = table(&[(1, -1), (2, -1), (3, -1)]);

        assert!(find_similar(&table, ProductId::new(2), 5).is_empty());
    }

    #[test]
    fn zero_count_returns_nothing() {
        let table = table(&[(1, 0), (2, 0)]);

        assert!(find_similar(&table, ProductId::new(1), 0).is_empty());
    }

    #[test]
    fn results_hold_lookup_invariants() {
        let table = table(&[
            (1, 0),
            (2, 1),
            (3, 0),
            (4, -1),
            (5, 1),
            (6, 0),
            (7, 2),
            (8, 0),
            (9, 1),
        ]);

        for product in table.iter() {
            for n in 0..5 {
                let result = find_similar(&table, product.id, n);
                assert!(result.len() <= n);
                assert!(!result.contains(&product.id));
                for id in &result {
                    let other = table.get(*id).expect("result ids exist");
                    assert_eq!(other.cluster, product.cluster);
                    assert!(!other.cluster.is_unclustered());
                }
                assert_eq!(result, find_similar(&table, product.id, n));
            }
        }
    }
}
