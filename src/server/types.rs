use axum::body::Bytes;
use axum_typed_multipart::{FieldData, TryFromMultipart};
use serde::Serialize;

/// 上传请求参数
#[derive(TryFromMultipart)]
pub struct ImageUpload {
    /// 上传的图片文件
    pub file: Option<FieldData<Bytes>>,
}

/// 识别响应，matches 格式为 `(文件名, 相似度)`，按相似度降序排列
#[derive(Debug, Serialize)]
pub struct RecognizeResponse {
    pub matches: Vec<(String, f32)>,
}
