use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// API错误类型
pub enum ApiError {
    /// 请求中缺少 file 字段
    MissingFile,
    /// 上传内容无法解码为图片
    Decode(image::ImageError),
    /// 其他内部错误
    Internal(anyhow::Error),
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingFile => (StatusCode::BAD_REQUEST, "No file uploaded".to_string()),
            Self::Decode(err) => (StatusCode::BAD_REQUEST, format!("Invalid image: {}", err)),
            Self::Internal(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Something went wrong: {}", err))
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
