//! In-memory product table indexed by product id.

use std::collections::HashMap;

use crate::domain::product::{Product, ProductId};

/// Immutable set of products in file order.
#[derive(Debug, Default)]
pub struct ProductTable {
    products: Vec<Product>,
    positions: HashMap<ProductId, usize>,
}

/// Smallest and largest product id of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IdRange {
    pub min: ProductId,
    pub max: ProductId,
}

impl ProductTable {
    /// Builds a table from products in their natural order.
    ///
    /// Fails with the offending id when the same id appears twice.
    pub fn from_products(products: Vec<Product>) -> Result<Self, ProductId> {
        let mut positions = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if positions.insert(product.id, position).is_some() {
                return Err(product.id);
            }
        }
        Ok(Self {
            products,
            positions,
        })
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.positions.get(&id).map(|&position| &self.products[position])
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Products in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn id_range(&self) -> Option<IdRange> {
        let min = self.products.iter().map(|p| p.id).min()?;
        let max = self.products.iter().map(|p| p.id).max()?;
        Some(IdRange { min, max })
    }
}
