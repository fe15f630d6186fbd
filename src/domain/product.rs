use std::fmt;

use serde::{Deserialize, Serialize};

/// Row key of the product table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Cluster assignment produced by the offline clustering job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterLabel(i64);

impl ClusterLabel {
    /// Label reserved for outliers that belong to no cluster.
    pub const UNCLUSTERED: ClusterLabel = ClusterLabel(-1);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    pub fn is_unclustered(self) -> bool {
        self == Self::UNCLUSTERED
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub cluster: ClusterLabel,
    pub title: String,
    pub description: String,
}

/// Display fields of a product handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub title: String,
    pub description: String,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClusterLabel, ProductId};

    #[test]
    fn only_minus_one_is_unclustered() {
        assert!(ClusterLabel::new(-1).is_unclustered());
        assert!(!ClusterLabel::new(0).is_unclustered());
        assert!(!ClusterLabel::new(-2).is_unclustered());
    }

    #[test]
    fn product_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&ProductId::new(42)).expect("serialize id");
        assert_eq!(json, "42");

        let id: ProductId = serde_json::from_str("7").expect("deserialize id");
        assert_eq!(id.get(), 7);
    }
}
