mod hashtag;
mod product;
mod product_hashtag;

pub use hashtag::*;
pub use product::*;
pub use product_hashtag::*;
