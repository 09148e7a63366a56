//! IO helper: safe file read/write for JSON

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::Local;
use serde_json::Value;

use crate::model::data_core::AppError;

/// 备份文件时间戳格式（可按字典序排序）
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// 从文件读取JSON数据
pub fn read_json_file(p: &Path) -> Result<Value, AppError> {
    let f = File::open(p)?;
    let rdr = BufReader::new(f);
    let v: Value = serde_json::from_reader(rdr)?;
    Ok(v)
}

/// 将JSON数据保存到文件（两空格缩进，非ASCII字符原样输出）
pub fn write_json_file(p: &Path, value: &Value) -> Result<(), AppError> {
    let f = File::create(p)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, value)?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

/// 读取UTF-8文本文件（章节内容）
pub fn read_text_file(p: &Path) -> Result<String, AppError> {
    fs::read_to_string(p).map_err(|source| AppError::ContentFile {
        path: p.to_path_buf(),
        source,
    })
}

/// 为 `p` 计算一个尚不存在的备份路径：`<文件名>.backup.<时间戳>`，
/// 同一秒内重复时追加三位计数 `.001`、`.002`……，保证按名称排序即创建顺序
pub fn backup_path_for(p: &Path, timestamp: &str) -> PathBuf {
    let file_name = p
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = p.with_file_name(format!("{}.backup.{}", file_name, timestamp));
    if !base.exists() {
        return base;
    }

    let mut counter = 1u32;
    loop {
        let candidate = p.with_file_name(format!("{}.backup.{}.{:03}", file_name, timestamp, counter));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// 若文件存在，将其重命名为带时间戳的备份，返回备份路径
pub fn backup_existing(p: &Path) -> Result<Option<PathBuf>, AppError> {
    if !p.exists() {
        return Ok(None);
    }
    let timestamp = Local::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
    let backup = backup_path_for(p, &timestamp);
    fs::rename(p, &backup)?;
    Ok(Some(backup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_write_keeps_non_ascii_and_two_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json_file(&path, &json!({ "title": "Démarrage rapide" })).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"title\": \"Démarrage rapide\"\n}\n");
    }

    #[test]
    fn test_backup_path_adds_counter_on_collision() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("help_content.json");

        let first = backup_path_for(&path, "20260101120000");
        assert_eq!(
            first.file_name().unwrap().to_string_lossy(),
            "help_content.json.backup.20260101120000"
        );
        fs::write(&first, "{}").unwrap();

        let second = backup_path_for(&path, "20260101120000");
        assert_eq!(
            second.file_name().unwrap().to_string_lossy(),
            "help_content.json.backup.20260101120000.001"
        );
        assert!(first.to_string_lossy() < second.to_string_lossy());

        // 计数超过 9 后仍按创建顺序排序
        let mut names = vec![first.to_string_lossy().into_owned()];
        fs::write(&second, "{}").unwrap();
        names.push(second.to_string_lossy().into_owned());
        for _ in 2..=10 {
            let next = backup_path_for(&path, "20260101120000");
            fs::write(&next, "{}").unwrap();
            names.push(next.to_string_lossy().into_owned());
        }
        assert!(names[10].ends_with(".010"));
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(sorted, names, "备份名称排序应与创建顺序一致");
    }

    #[test]
    fn test_backup_existing_without_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(backup_existing(&path).unwrap().is_none());
    }

    #[test]
    fn test_read_text_file_missing() {
        let dir = tempdir().unwrap();
        let result = read_text_file(&dir.path().join("absent.md"));
        assert!(matches!(result, Err(AppError::ContentFile { .. })));
    }

    #[test]
    fn test_read_text_file_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.md");
        fs::write(&path, [0x44, 0xe9, 0x6d, 0x6f]).unwrap();
        assert!(read_text_file(&path).is_err(), "非UTF-8内容应读取失败");
    }
}
