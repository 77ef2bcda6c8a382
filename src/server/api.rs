use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum_typed_multipart::TypedMultipart;
use log::info;
use serde_json::{Value, json};

use super::error::{ApiError, Result};
use super::state::AppState;
use super::types::*;
use crate::hist;

/// 上传一张图片并保存其直方图
pub async fn upload_handler(
    State(state): State<Arc<AppState>>,
    data: TypedMultipart<ImageUpload>,
) -> Result<Json<Value>> {
    let (file_name, contents) = extract_file(data.0)?;

    info!("正在处理上传图片: {file_name}");

    let hist = hist::histogram_from_bytes(&contents).map_err(ApiError::Decode)?;
    state.db.save_upload(&file_name, &contents).await?;
    state.db.add_image(&file_name, &hist).await?;

    Ok(Json(json!({ "message": "Image uploaded and histogram stored" })))
}

/// 识别一张图片，返回数据库中相似度最高的图片
pub async fn recognize_handler(
    State(state): State<Arc<AppState>>,
    data: TypedMultipart<ImageUpload>,
) -> Result<Json<RecognizeResponse>> {
    let (file_name, contents) = extract_file(data.0)?;

    info!("正在识别上传图片: {file_name}");
    let start = Instant::now();

    let query = hist::histogram_from_bytes(&contents).map_err(ApiError::Decode)?;
    state.db.save_upload(&file_name, &contents).await?;
    let matches = state.db.search(&query, state.search.count).await?;

    info!("识别完成，耗时 {}ms", start.elapsed().as_millis());

    Ok(Json(RecognizeResponse { matches }))
}

/// 取出上传的文件名和内容，缺少 file 字段时报错
fn extract_file(data: ImageUpload) -> Result<(String, Bytes)> {
    let file = data.file.ok_or(ApiError::MissingFile)?;
    let file_name = file.metadata.file_name.ok_or(ApiError::MissingFile)?;
    Ok((file_name, file.contents))
}
