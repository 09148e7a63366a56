//! 存储配置：帮助内容文件的位置

use std::path::{Path, PathBuf};

/// 数据目录名
pub const DATA_DIR: &str = "data";
/// 帮助内容文件名
pub const CONTENT_FILE_NAME: &str = "help_content.json";

/// 内容存储配置，显式传入 [`ContentStore`](crate::model::data_core::ContentStore)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub content_path: PathBuf,
}

impl StoreConfig {
    pub fn new(content_path: impl Into<PathBuf>) -> Self {
        Self {
            content_path: content_path.into(),
        }
    }

    /// 相对程序所在目录的默认位置：`<程序目录>/../data/help_content.json`
    pub fn relative_to_program(program_dir: &Path) -> Self {
        let base = program_dir.parent().unwrap_or(program_dir);
        Self::new(base.join(DATA_DIR).join(CONTENT_FILE_NAME))
    }

    /// 根据当前可执行文件推导默认配置
    pub fn from_current_exe() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let program_dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::relative_to_program(program_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_is_one_level_above_program_dir() {
        let config = StoreConfig::relative_to_program(Path::new("/opt/app/bin"));
        assert_eq!(
            config.content_path,
            PathBuf::from("/opt/app/data/help_content.json")
        );
    }
}
