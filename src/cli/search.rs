use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::debug;

use crate::IMDBBuilder;
use crate::cli::SubCommandExtend;
use crate::config::{Opts, SearchOptions};
use crate::hist;

#[derive(Parser, Debug, Clone)]
pub struct SearchCommand {
    #[command(flatten)]
    pub search: SearchOptions,
    /// 被搜索的图片路径
    pub image: PathBuf,
    /// 输出格式
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    pub output_format: OutputFormat,
}

impl SubCommandExtend for SearchCommand {
    async fn run(&self, opts: &Opts) -> anyhow::Result<()> {
        let data = std::fs::read(&self.image)?;
        let query = hist::histogram_from_bytes(&data)?;

        let db = IMDBBuilder::new(opts.conf_dir.clone()).open().await?;
        let result = db.search(&query, self.search.count).await?;

        debug!("返回 {} 条结果", result.len());
        print_result(&result, self)
    }
}

fn print_result(result: &[(String, f32)], opts: &SearchCommand) -> Result<()> {
    match opts.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?)
        }
        OutputFormat::Table => {
            for (filename, score) in result {
                println!("{:.4}\t{}", score, filename);
            }
        }
    }
    Ok(())
}

#[derive(ValueEnum, Debug, Clone)]
pub enum OutputFormat {
    Json,
    Table,
}
