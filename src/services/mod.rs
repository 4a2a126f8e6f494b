pub mod hashtags;
pub mod products;
pub mod validation;
