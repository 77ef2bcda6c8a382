use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info};

use crate::config::ConfDir;
use crate::db::{self, Database, ImageRecord};
use crate::hist::{self, Histogram};
use crate::matcher::{self, Candidate};
use crate::utils;

/// 图片直方图数据库
pub struct IMDB {
    conf_dir: ConfDir,
    db: Database,
}

pub struct IMDBBuilder {
    conf_dir: ConfDir,
}

impl IMDBBuilder {
    pub fn new(conf_dir: ConfDir) -> Self {
        Self { conf_dir }
    }

    /// 打开数据库，不存在时自动创建
    pub async fn open(self) -> Result<IMDB> {
        std::fs::create_dir_all(self.conf_dir.path())?;
        std::fs::create_dir_all(self.conf_dir.uploads())?;
        let db = db::init_db(self.conf_dir.database()).await?;
        Ok(IMDB { conf_dir: self.conf_dir, db })
    }
}

impl IMDB {
    /// 添加图片直方图到数据库，返回分配的 ID
    pub async fn add_image(&self, filename: &str, hist: &Histogram) -> Result<i64> {
        let blob = hist::encode_histogram(hist);
        let id = db::crud::add_image(&self.db, filename, &blob).await?;
        debug!("已添加图片 #{id}: {filename}");
        Ok(id)
    }

    /// 将上传的图片保存到本地目录，同名文件会被覆盖
    pub async fn save_upload(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        let path = self.conf_dir.uploads().join(utils::safe_file_name(filename));
        tokio::fs::write(&path, data).await?;
        Ok(path)
    }

    /// 对数据库中的所有图片评分，返回相似度最高的 count 个结果
    pub async fn search(&self, query: &Histogram, count: usize) -> Result<Vec<(String, f32)>> {
        let records = db::crud::get_all_images(&self.db).await?;
        info!("对 {} 张图片进行评分", records.len());

        let mut candidates = Vec::with_capacity(records.len());
        for ImageRecord { id, filename, histogram } in records {
            let histogram = hist::decode_histogram(&histogram)?;
            candidates.push(Candidate { id, filename, histogram });
        }

        Ok(matcher::rank(query, candidates, count))
    }

    /// 数据库中的图片数量
    pub async fn count_images(&self) -> Result<i64> {
        Ok(db::crud::count_images(&self.db).await?)
    }
}
