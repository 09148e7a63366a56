//! 桥接层：命令行参数 → 变更请求
//!
//! 负责必填字段检查与内容文件读取，并提供面向用户的提示文本常量。

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::model::data_core::AppError;
use crate::model::document::LocalizedText;
use crate::model::request::{Applied, ContentRequest, NewPrompt, NewSection, SectionPatch};
use crate::utils::fs::read_text_file;

// === 常量定义（消除魔法值） ===
pub const STATUS_CREATING_DOCUMENT: &str = "正在创建新的帮助内容文件...";
pub const STATUS_CANCELLED: &str = "操作已取消，未做任何修改。";
pub const STATUS_ERROR_PREFIX: &str = "错误: ";
pub const ERR_ADD_GUIDE_FIELDS: &str = "添加指南章节需要提供全部参数: --section-id --title-fr --title-en --content-fr-file --content-en-file --icon";
pub const ERR_UPDATE_GUIDE_ID: &str = "更新章节需要提供 --section-id";
pub const ERR_ADD_PROMPT_FIELDS: &str = "添加提示词需要提供全部参数: --category --prompt-title-fr --prompt-title-en --prompt-desc-fr --prompt-desc-en --prompt-fr --prompt-en";

/// 帮助内容管理工具
#[derive(Parser, Debug, Default)]
#[command(name = "help_content_updater", about = "帮助内容管理工具")]
pub struct Cli {
    /// 添加新的指南章节
    #[arg(long, help_heading = "操作")]
    pub add_guide: bool,
    /// 更新已有的指南章节
    #[arg(long, help_heading = "操作")]
    pub update_guide: bool,
    /// 添加新的示例提示词
    #[arg(long, help_heading = "操作")]
    pub add_prompt: bool,

    /// 章节唯一ID（例: getting-started）
    #[arg(long, help_heading = "指南章节参数")]
    pub section_id: Option<String>,
    /// 章节法语标题
    #[arg(long, help_heading = "指南章节参数")]
    pub title_fr: Option<String>,
    /// 章节英语标题
    #[arg(long, help_heading = "指南章节参数")]
    pub title_en: Option<String>,
    /// 法语内容文件路径（Markdown）
    #[arg(long, help_heading = "指南章节参数")]
    pub content_fr_file: Option<PathBuf>,
    /// 英语内容文件路径（Markdown）
    #[arg(long, help_heading = "指南章节参数")]
    pub content_en_file: Option<PathBuf>,
    /// 图标名称（FluentUI）
    #[arg(long, help_heading = "指南章节参数")]
    pub icon: Option<String>,

    /// 提示词分类（例: general, documents）
    #[arg(long, help_heading = "提示词参数")]
    pub category: Option<String>,
    #[arg(long, help_heading = "提示词参数")]
    pub prompt_title_fr: Option<String>,
    #[arg(long, help_heading = "提示词参数")]
    pub prompt_title_en: Option<String>,
    #[arg(long, help_heading = "提示词参数")]
    pub prompt_desc_fr: Option<String>,
    #[arg(long, help_heading = "提示词参数")]
    pub prompt_desc_en: Option<String>,
    #[arg(long, help_heading = "提示词参数")]
    pub prompt_fr: Option<String>,
    #[arg(long, help_heading = "提示词参数")]
    pub prompt_en: Option<String>,

    /// 帮助内容文件路径（默认: <程序目录>/../data/help_content.json）
    #[arg(long)]
    pub content_path: Option<PathBuf>,
    /// 输出调试日志
    #[arg(short, long)]
    pub verbose: bool,
}

/// 选中的操作（优先级: 添加章节 > 更新章节 > 添加提示词）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddGuide,
    UpdateGuide,
    AddPrompt,
}

impl Cli {
    pub fn action(&self) -> Option<Action> {
        if self.add_guide {
            Some(Action::AddGuide)
        } else if self.update_guide {
            Some(Action::UpdateGuide)
        } else if self.add_prompt {
            Some(Action::AddPrompt)
        } else {
            None
        }
    }
}

/// 空字符串视为未提供
fn non_empty(v: &Option<String>) -> Option<String> {
    v.as_ref().filter(|s| !s.is_empty()).cloned()
}

fn non_empty_path(v: &Option<PathBuf>) -> Option<&Path> {
    v.as_deref().filter(|p| !p.as_os_str().is_empty())
}

fn required(v: &Option<String>, message: &str) -> Result<String, AppError> {
    non_empty(v).ok_or_else(|| AppError::Validation(message.to_string()))
}

fn required_path<'a>(v: &'a Option<PathBuf>, message: &str) -> Result<&'a Path, AppError> {
    non_empty_path(v).ok_or_else(|| AppError::Validation(message.to_string()))
}

/// 根据选中的操作构建变更请求
pub fn build_request(cli: &Cli, action: Action) -> Result<ContentRequest, AppError> {
    match action {
        Action::AddGuide => {
            let id = required(&cli.section_id, ERR_ADD_GUIDE_FIELDS)?;
            let title_fr = required(&cli.title_fr, ERR_ADD_GUIDE_FIELDS)?;
            let title_en = required(&cli.title_en, ERR_ADD_GUIDE_FIELDS)?;
            let fr_file = required_path(&cli.content_fr_file, ERR_ADD_GUIDE_FIELDS)?;
            let en_file = required_path(&cli.content_en_file, ERR_ADD_GUIDE_FIELDS)?;
            let icon = required(&cli.icon, ERR_ADD_GUIDE_FIELDS)?;

            let content_fr = read_text_file(fr_file)?;
            let content_en = read_text_file(en_file)?;

            Ok(ContentRequest::AddSection(NewSection {
                id,
                title: LocalizedText::new(title_fr, title_en),
                content: LocalizedText::new(content_fr, content_en),
                icon,
            }))
        }
        Action::UpdateGuide => {
            let id = required(&cli.section_id, ERR_UPDATE_GUIDE_ID)?;
            let content_fr = non_empty_path(&cli.content_fr_file)
                .map(read_text_file)
                .transpose()?;
            let content_en = non_empty_path(&cli.content_en_file)
                .map(read_text_file)
                .transpose()?;

            Ok(ContentRequest::UpdateSection(SectionPatch {
                id,
                title_fr: non_empty(&cli.title_fr),
                title_en: non_empty(&cli.title_en),
                content_fr,
                content_en,
                icon: non_empty(&cli.icon),
            }))
        }
        Action::AddPrompt => {
            let category = required(&cli.category, ERR_ADD_PROMPT_FIELDS)?;
            let title_fr = required(&cli.prompt_title_fr, ERR_ADD_PROMPT_FIELDS)?;
            let title_en = required(&cli.prompt_title_en, ERR_ADD_PROMPT_FIELDS)?;
            let desc_fr = required(&cli.prompt_desc_fr, ERR_ADD_PROMPT_FIELDS)?;
            let desc_en = required(&cli.prompt_desc_en, ERR_ADD_PROMPT_FIELDS)?;
            let prompt_fr = required(&cli.prompt_fr, ERR_ADD_PROMPT_FIELDS)?;
            let prompt_en = required(&cli.prompt_en, ERR_ADD_PROMPT_FIELDS)?;

            Ok(ContentRequest::AddPrompt(NewPrompt {
                category,
                title: LocalizedText::new(title_fr, title_en),
                description: LocalizedText::new(desc_fr, desc_en),
                prompt: LocalizedText::new(prompt_fr, prompt_en),
            }))
        }
    }
}

/// 成功提示
pub fn describe_applied(applied: &Applied) -> String {
    match applied {
        Applied::SectionAdded(id) => format!("已添加章节 '{}'", id),
        Applied::SectionUpdated(id) => format!("已更新章节 '{}'", id),
        Applied::PromptAdded(id) => format!("已添加提示词 #{}", id),
    }
}
