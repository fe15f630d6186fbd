pub mod product;
pub mod table;
