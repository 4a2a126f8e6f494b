use crate::db::Result;
use crate::models::Hashtag;
use crate::Database;

pub async fn create_hashtag(db: &Database, hashtag_name: String) -> Result<Hashtag> {
    let mut hashtags: Vec<Hashtag> = db.load().await?;

    let hashtag = Hashtag::new(db.next_id(&hashtags), hashtag_name);
    hashtags.push(hashtag.clone());

    db.save(&hashtags).await?;
    Ok(hashtag)
}

pub async fn list_hashtags(db: &Database) -> Result<Vec<Hashtag>> {
    db.load().await
}

pub async fn get_hashtag(db: &Database, id: i64) -> Result<Option<Hashtag>> {
    let hashtags: Vec<Hashtag> = db.load().await?;
    Ok(hashtags.into_iter().find(|h| h.id == id))
}

pub async fn update_hashtag(
    db: &Database,
    id: i64,
    hashtag_name: String,
) -> Result<Option<Hashtag>> {
    let mut hashtags: Vec<Hashtag> = db.load().await?;

    let Some(hashtag) = hashtags.iter_mut().find(|h| h.id == id) else {
        return Ok(None);
    };
    hashtag.hashtag_name = hashtag_name;
    let updated = hashtag.clone();

    db.save(&hashtags).await?;
    Ok(Some(updated))
}

/// Removes the first hashtag with `id`. Products mapped to it keep the
/// dangling id.
pub async fn delete_hashtag(db: &Database, id: i64) -> Result<Option<Hashtag>> {
    let mut hashtags: Vec<Hashtag> = db.load().await?;

    let Some(index) = hashtags.iter().position(|h| h.id == id) else {
        return Ok(None);
    };
    let removed = hashtags.remove(index);

    db.save(&hashtags).await?;
    Ok(Some(removed))
}
