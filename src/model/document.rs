//! 帮助内容文档：分类、指南章节与示例提示词的强类型模型

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::data_core::AppError;

/// 双语文本（键名固定为 FR / EN）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(rename = "FR")]
    pub fr: String,
    #[serde(rename = "EN")]
    pub en: String,
    /// 其他语言键原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocalizedText {
    pub fn new(fr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            fr: fr.into(),
            en: en.into(),
            extra: Map::new(),
        }
    }
}

/// 提示词分类
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub name: LocalizedText,
    pub icon: String,
    /// 未识别的字段原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 指南章节
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSection {
    pub id: String,
    pub title: LocalizedText,
    pub content: LocalizedText,
    pub icon: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 示例提示词
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: u64,
    pub category: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub prompt: LocalizedText,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 磁盘上的文档形态：集合均为数组
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentRepr {
    #[serde(default)]
    translations: IndexMap<String, Map<String, Value>>,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    guide_content: Vec<GuideSection>,
    #[serde(default)]
    predefined_prompts: Vec<Prompt>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// 序列化视图：借用文档，按插入顺序输出数组
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentView<'a> {
    translations: &'a IndexMap<String, Map<String, Value>>,
    categories: Vec<&'a Category>,
    guide_content: Vec<&'a GuideSection>,
    predefined_prompts: &'a [Prompt],
    #[serde(flatten)]
    extra: &'a Map<String, Value>,
}

/// 内存中的帮助内容文档
///
/// `categories` 与 `guide_content` 以 key / id 为索引，保持插入顺序，
/// 写回磁盘时仍是 JSON 数组。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelpDocument {
    pub translations: IndexMap<String, Map<String, Value>>,
    pub categories: IndexMap<String, Category>,
    pub guide_content: IndexMap<String, GuideSection>,
    pub predefined_prompts: Vec<Prompt>,
    pub extra: Map<String, Value>,
}

impl HelpDocument {
    /// 新建文档时使用的默认内容：两个种子分类，其余为空
    pub fn seeded() -> Self {
        let mut translations = IndexMap::new();
        translations.insert("FR".to_string(), Map::new());
        translations.insert("EN".to_string(), Map::new());

        let mut categories = IndexMap::new();
        for (key, fr, en, icon) in [
            ("general", "Général", "General", "Info"),
            ("documents", "Documents", "Documents", "Document"),
        ] {
            categories.insert(
                key.to_string(),
                Category {
                    key: key.to_string(),
                    name: LocalizedText::new(fr, en),
                    icon: icon.to_string(),
                    extra: Map::new(),
                },
            );
        }

        Self {
            translations,
            categories,
            ..Self::default()
        }
    }

    /// 文档没有任何有效内容（等同于文件不存在）
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
            && self.categories.is_empty()
            && self.guide_content.is_empty()
            && self.predefined_prompts.is_empty()
            && self.extra.is_empty()
    }

    pub fn category_keys(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    /// 下一个提示词ID：现有最大ID + 1，没有提示词时为 1；溢出时返回 `None`
    pub fn next_prompt_id(&self) -> Option<u64> {
        self.predefined_prompts
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
    }

    /// 从JSON值构建文档，拒绝重复的章节ID与分类键
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        let repr: DocumentRepr = serde_json::from_value(value).map_err(AppError::Schema)?;

        let mut categories = IndexMap::with_capacity(repr.categories.len());
        for category in repr.categories {
            if categories.contains_key(&category.key) {
                return Err(AppError::DuplicateKey {
                    collection: "categories",
                    key: category.key,
                });
            }
            categories.insert(category.key.clone(), category);
        }

        let mut guide_content = IndexMap::with_capacity(repr.guide_content.len());
        for section in repr.guide_content {
            if guide_content.contains_key(&section.id) {
                return Err(AppError::DuplicateKey {
                    collection: "guideContent",
                    key: section.id,
                });
            }
            guide_content.insert(section.id.clone(), section);
        }

        Ok(Self {
            translations: repr.translations,
            categories,
            guide_content,
            predefined_prompts: repr.predefined_prompts,
            extra: repr.extra,
        })
    }

    /// 转换为磁盘格式的JSON值
    pub fn to_value(&self) -> Result<Value, AppError> {
        let view = DocumentView {
            translations: &self.translations,
            categories: self.categories.values().collect(),
            guide_content: self.guide_content.values().collect(),
            predefined_prompts: &self.predefined_prompts,
            extra: &self.extra,
        };
        Ok(serde_json::to_value(view)?)
    }
}
