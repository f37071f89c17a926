pub mod a001_product;
pub mod a002_brand;
pub mod a003_category;
