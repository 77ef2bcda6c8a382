use std::path::PathBuf;

use clap::Parser;
use log::info;
use regex::Regex;
use walkdir::WalkDir;

use crate::IMDBBuilder;
use crate::cli::SubCommandExtend;
use crate::config::Opts;
use crate::hist;

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// 图片所在目录，也支持单个图片文件
    pub path: PathBuf,
    /// 扫描的文件后缀名，多个后缀用逗号分隔
    #[arg(short, long, default_value = "jpg,png,webp")]
    pub suffix: String,
}

impl SubCommandExtend for AddCommand {
    async fn run(&self, opts: &Opts) -> anyhow::Result<()> {
        let re_suf = format!(r"(?i)\.({})$", self.suffix.replace(',', "|"));
        let re_suf = Regex::new(&re_suf).expect("failed to build regex");

        let db = IMDBBuilder::new(opts.conf_dir.clone()).open().await?;

        for entry in WalkDir::new(&self.path).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if !re_suf.is_match(&path.to_string_lossy()) {
                continue;
            }

            let data = std::fs::read(path)?;
            match hist::histogram_from_bytes(&data) {
                Ok(hist) => {
                    db.add_image(&path.to_string_lossy(), &hist).await?;
                    println!("[OK] {}", path.display());
                }
                Err(e) => eprintln!("[ERR] {}: {}", path.display(), e),
            }
        }

        info!("数据库中共有 {} 张图片", db.count_images().await?);
        Ok(())
    }
}
