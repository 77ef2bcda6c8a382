use sqlx::{Result, SqlitePool};

use super::ImageRecord;

/// 添加图片记录，返回自增 ID
pub async fn add_image(pool: &SqlitePool, filename: &str, histogram: &[u8]) -> Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO image (filename, histogram)
        VALUES (?, ?)
        RETURNING id
        "#,
    )
    .bind(filename)
    .bind(histogram)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// 按插入顺序返回所有图片记录
pub async fn get_all_images(pool: &SqlitePool) -> Result<Vec<ImageRecord>> {
    sqlx::query_as(
        r#"
        SELECT id, filename, histogram FROM image ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// 查询数据库中的图片数量
pub async fn count_images(pool: &SqlitePool) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as(
        r#"
        SELECT COUNT(*) FROM image
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
