use crate::db::Result;
use crate::models::{
    Hashtag, NewProduct, Product, ProductChanges, ProductHashtag, ProductWithHashtags,
};
use crate::Database;

/// Appends the product, records its hashtag mapping and resolves the
/// hashtags for the response.
///
/// The two documents are written one after the other. If the mapping write
/// fails the product stays saved without a mapping entry.
pub async fn create_product(db: &Database, new: NewProduct) -> Result<ProductWithHashtags> {
    let mut products: Vec<Product> = db.load().await?;

    let hashtag_ids = new.hashtag_ids.clone();
    let product = Product::new(db.next_id(&products), new);
    products.push(product.clone());
    db.save(&products).await?;

    let mapping = ProductHashtag::new(product.id, hashtag_ids);

    if let Err(e) = save_mapping(db, mapping.clone()).await {
        tracing::error!(
            product_id = product.id,
            "Product saved without its hashtag mapping: {}",
            e
        );
        return Err(e);
    }

    let hashtags = resolve_hashtags(db, &mapping.hashtag_ids).await?;

    Ok(ProductWithHashtags { product, hashtags })
}

async fn save_mapping(db: &Database, mapping: ProductHashtag) -> Result<()> {
    let mut mappings: Vec<ProductHashtag> = db.load().await?;
    mappings.push(mapping);
    db.save(&mappings).await
}

/// Looks up each id in order. Unknown ids yield `None` in their position.
pub async fn resolve_hashtags(db: &Database, ids: &[i64]) -> Result<Vec<Option<Hashtag>>> {
    let hashtags: Vec<Hashtag> = db.load().await?;
    Ok(ids
        .iter()
        .map(|id| hashtags.iter().find(|h| h.id == *id).cloned())
        .collect())
}

pub async fn list_products(db: &Database) -> Result<Vec<Product>> {
    db.load().await
}

pub async fn get_product(db: &Database, id: i64) -> Result<Option<Product>> {
    let products: Vec<Product> = db.load().await?;
    Ok(products.into_iter().find(|p| p.id == id))
}

/// Applies `changes` to the first product with `id` and returns the whole
/// collection, or `None` when no product matches.
pub async fn update_product(
    db: &Database,
    id: i64,
    changes: ProductChanges,
) -> Result<Option<Vec<Product>>> {
    let mut products: Vec<Product> = db.load().await?;

    let Some(product) = products.iter_mut().find(|p| p.id == id) else {
        return Ok(None);
    };
    changes.apply(product);

    db.save(&products).await?;
    Ok(Some(products))
}

/// Removes the first product with `id`. Mapping entries are left as they are.
pub async fn delete_product(db: &Database, id: i64) -> Result<Option<Product>> {
    let mut products: Vec<Product> = db.load().await?;

    let Some(index) = products.iter().position(|p| p.id == id) else {
        return Ok(None);
    };
    let removed = products.remove(index);

    db.save(&products).await?;
    Ok(Some(removed))
}

pub async fn list_product_hashtags(db: &Database) -> Result<Vec<ProductHashtag>> {
    db.load().await
}
