/// 图片记录
#[derive(Debug, sqlx::FromRow)]
pub struct ImageRecord {
    /// 图片 ID
    pub id: i64,
    /// 上传时的文件名，不保证唯一
    pub filename: String,
    /// 256 个 f32 的小端编码灰度直方图
    pub histogram: Vec<u8>,
}
