mod product;

pub use self::product::{
    ALL_CATEGORIES, CreateProductRequest, FindAllProducts, ProductSort, UpdateProductRequest,
};
