//! 帮助内容管理工具库
//! 
//! 提供帮助内容JSON文件的加载、带备份的保存，以及指南章节与示例提示词的增改
//! 遵循 model / utils / vm 分层：命令行参数经桥接层转换为变更请求

pub mod model;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use model::data_core::{AppError, ContentStore};
pub use model::document::{Category, GuideSection, HelpDocument, LocalizedText, Prompt};
pub use model::request::{Applied, ContentRequest, NewPrompt, NewSection, Rejection, SectionPatch};
pub use utils::config::StoreConfig;
