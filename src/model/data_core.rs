//! ContentStore：帮助内容文件的加载与带备份的保存

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::document::HelpDocument;
use crate::utils::config::StoreConfig;
use crate::utils::fs::{backup_existing, read_json_file, write_json_file};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("文件不存在: {}", .0.display())]
    NotFound(PathBuf),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("文档结构不符合要求: {0}")]
    Schema(#[source] serde_json::Error),
    #[error("{collection} 中存在重复的键: {key}")]
    DuplicateKey {
        collection: &'static str,
        key: String,
    },
    #[error("读取内容文件 {} 失败: {source}", path.display())]
    ContentFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("参数错误: {0}")]
    Validation(String),
}

impl AppError {
    /// 文件缺失或不是合法JSON：前端按“没有现有文档”处理。
    /// 结构不符（`Schema`）不在此列，避免覆盖已有内容
    pub fn is_absent_document(&self) -> bool {
        matches!(self, AppError::NotFound(_) | AppError::Parse(_))
    }
}

/// 帮助内容存储：路径由配置显式给出
#[derive(Debug, Clone)]
pub struct ContentStore {
    config: StoreConfig,
}

impl ContentStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.content_path
    }

    /// 读取并解析文档
    pub fn load(&self) -> Result<HelpDocument, AppError> {
        let path = self.path();
        let value = read_json_file(path).map_err(|e| match e {
            AppError::Io(io) if io.kind() == ErrorKind::NotFound => {
                AppError::NotFound(path.to_path_buf())
            }
            other => other,
        })?;
        let doc = HelpDocument::from_value(value)?;
        tracing::debug!(
            "已加载 {}: {} 个分类, {} 个章节, {} 个提示词",
            path.display(),
            doc.categories.len(),
            doc.guide_content.len(),
            doc.predefined_prompts.len()
        );
        Ok(doc)
    }

    /// 保存文档；已有文件先重命名为备份，返回备份路径
    pub fn save(&self, doc: &HelpDocument) -> Result<Option<PathBuf>, AppError> {
        let path = self.path();
        // 先序列化，避免备份后才发现无法输出
        let value = doc.to_value()?;

        let backup = backup_existing(path)?;
        if let Some(b) = &backup {
            tracing::info!("已创建备份: {}", b.display());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        write_json_file(path, &value)?;
        tracing::info!("帮助内容已保存到: {}", path.display());
        Ok(backup)
    }
}
