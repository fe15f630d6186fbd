//! Data the presentation layer renders for a recommendation request.

use serde::{Deserialize, Serialize};

use crate::domain::product::{ProductId, ProductSummary};
use crate::domain::table::ProductTable;
use crate::processing::similar::find_similar;

/// Number of clustered ids offered as a hint when a lookup finds nothing.
pub const VALID_ID_HINT_LIMIT: usize = 50;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Recommendation {
    /// The query product and its cluster neighbours in table order.
    Found {
        query: ProductSummary,
        similar: Vec<ProductSummary>,
    },
    /// The id is unknown or an outlier; `valid_ids` lists ids worth trying.
    NotFound {
        item_id: ProductId,
        valid_ids: Vec<ProductId>,
    },
}

/// Looks up neighbours of `item_id` and attaches their display fields.
pub fn recommend(table: &ProductTable, item_id: ProductId, n: usize) -> Recommendation {
    let similar = find_similar(table, item_id, n);

    let query = match table.get(item_id) {
        Some(query) if !similar.is_empty() => query,
        _ => {
            return Recommendation::NotFound {
                item_id,
                valid_ids: clustered_ids(table, VALID_ID_HINT_LIMIT),
            };
        }
    };

    Recommendation::Found {
        query: query.into(),
        similar: similar
            .into_iter()
            .filter_map(|id| table.get(id))
            .map(ProductSummary::from)
            .collect(),
    }
}

/// Ids of products that belong to a cluster, in table order.
pub fn clustered_ids(table: &ProductTable, limit: usize) -> Vec<ProductId> {
    table
        .iter()
        .filter(|product| !product.cluster.is_unclustered())
        .map(|product| product.id)
        .take(limit)
        .collect()
}
