//! 变更请求：新增章节、更新章节、新增提示词
//!
//! 所有请求先校验再应用；被拒绝的请求不会改动文档。

use serde_json::Map;
use thiserror::Error;

use crate::model::document::{GuideSection, HelpDocument, LocalizedText, Prompt};

/// 新增指南章节所需字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSection {
    pub id: String,
    pub title: LocalizedText,
    pub content: LocalizedText,
    pub icon: String,
}

/// 章节的部分更新；`None` 或空字符串表示保持原值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionPatch {
    pub id: String,
    pub title_fr: Option<String>,
    pub title_en: Option<String>,
    pub content_fr: Option<String>,
    pub content_en: Option<String>,
    pub icon: Option<String>,
}

/// 新增示例提示词所需字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPrompt {
    pub category: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub prompt: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRequest {
    AddSection(NewSection),
    UpdateSection(SectionPatch),
    AddPrompt(NewPrompt),
}

/// 请求成功应用后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    SectionAdded(String),
    SectionUpdated(String),
    PromptAdded(u64),
}

/// 前置条件不满足
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("章节 '{0}' 已存在，请使用 --update-guide 修改")]
    DuplicateSection(String),
    #[error("章节 '{0}' 不存在，请使用 --add-guide 添加")]
    MissingSection(String),
    #[error("分类 '{category}' 不存在，可选: {}", valid.join(", "))]
    UnknownCategory { category: String, valid: Vec<String> },
    #[error("提示词ID已达上限，无法再分配新ID")]
    PromptIdExhausted,
}

fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl HelpDocument {
    /// 只检查前置条件，不修改文档
    pub fn validate(&self, request: &ContentRequest) -> Result<(), Rejection> {
        match request {
            ContentRequest::AddSection(s) => {
                if self.guide_content.contains_key(&s.id) {
                    return Err(Rejection::DuplicateSection(s.id.clone()));
                }
            }
            ContentRequest::UpdateSection(p) => {
                if !self.guide_content.contains_key(&p.id) {
                    return Err(Rejection::MissingSection(p.id.clone()));
                }
            }
            ContentRequest::AddPrompt(p) => {
                if !self.categories.contains_key(&p.category) {
                    return Err(Rejection::UnknownCategory {
                        category: p.category.clone(),
                        valid: self.category_keys(),
                    });
                }
                if self.next_prompt_id().is_none() {
                    return Err(Rejection::PromptIdExhausted);
                }
            }
        }
        Ok(())
    }

    /// 校验并应用请求
    pub fn apply(&mut self, request: ContentRequest) -> Result<Applied, Rejection> {
        self.validate(&request)?;
        let applied = match request {
            ContentRequest::AddSection(s) => self.add_guide_section(s)?,
            ContentRequest::UpdateSection(p) => self.update_guide_section(p)?,
            ContentRequest::AddPrompt(p) => self.add_prompt(p)?,
        };
        tracing::debug!("请求已应用: {:?}", applied);
        Ok(applied)
    }

    /// 在 `guideContent` 末尾追加新章节
    pub fn add_guide_section(&mut self, section: NewSection) -> Result<Applied, Rejection> {
        if self.guide_content.contains_key(&section.id) {
            return Err(Rejection::DuplicateSection(section.id));
        }
        let id = section.id.clone();
        self.guide_content.insert(
            id.clone(),
            GuideSection {
                id: section.id,
                title: section.title,
                content: section.content,
                icon: section.icon,
                extra: Map::new(),
            },
        );
        Ok(Applied::SectionAdded(id))
    }

    /// 只覆盖提供了的字段
    pub fn update_guide_section(&mut self, patch: SectionPatch) -> Result<Applied, Rejection> {
        let Some(section) = self.guide_content.get_mut(&patch.id) else {
            return Err(Rejection::MissingSection(patch.id));
        };

        if let Some(v) = provided(&patch.title_fr) {
            section.title.fr = v.to_string();
        }
        if let Some(v) = provided(&patch.title_en) {
            section.title.en = v.to_string();
        }
        if let Some(v) = provided(&patch.content_fr) {
            section.content.fr = v.to_string();
        }
        if let Some(v) = provided(&patch.content_en) {
            section.content.en = v.to_string();
        }
        if let Some(v) = provided(&patch.icon) {
            section.icon = v.to_string();
        }
        Ok(Applied::SectionUpdated(patch.id))
    }

    /// 追加提示词，ID 为现有最大值 + 1
    pub fn add_prompt(&mut self, prompt: NewPrompt) -> Result<Applied, Rejection> {
        if !self.categories.contains_key(&prompt.category) {
            return Err(Rejection::UnknownCategory {
                category: prompt.category,
                valid: self.category_keys(),
            });
        }
        let id = self.next_prompt_id().ok_or(Rejection::PromptIdExhausted)?;
        self.predefined_prompts.push(Prompt {
            id,
            category: prompt.category,
            title: prompt.title,
            description: prompt.description,
            prompt: prompt.prompt,
            extra: Map::new(),
        });
        Ok(Applied::PromptAdded(id))
    }
}
