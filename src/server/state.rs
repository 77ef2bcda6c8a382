use std::sync::Arc;

use crate::IMDB;
use crate::cli::server::ServerCommand;
use crate::config::SearchOptions;

/// 应用状态
pub struct AppState {
    /// 数据库连接
    pub db: IMDB,
    /// 搜索配置选项
    pub search: SearchOptions,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(db: IMDB, opts: ServerCommand) -> Arc<Self> {
        Arc::new(AppState { db, search: opts.search })
    }
}
