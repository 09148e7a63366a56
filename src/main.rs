//! 程序入口：解析参数、加载帮助内容、执行一个变更操作并保存

use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::fmt::SubscriberBuilder;

use help_content_updater::model::data_core::ContentStore;
use help_content_updater::model::document::HelpDocument;
use help_content_updater::utils::config::StoreConfig;
use help_content_updater::vm::bridge::*;

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let Some(action) = cli.action() else {
        Cli::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    };

    let config = match &cli.content_path {
        Some(path) => StoreConfig::new(path),
        None => StoreConfig::from_current_exe().context("无法确定程序所在目录")?,
    };
    let store = ContentStore::new(config);

    let mut doc = match store.load() {
        Ok(doc) if !doc.is_empty() => doc,
        Ok(_) => {
            println!("{}", STATUS_CREATING_DOCUMENT);
            HelpDocument::seeded()
        }
        Err(e) if e.is_absent_document() => {
            println!("{}", e);
            println!("{}", STATUS_CREATING_DOCUMENT);
            HelpDocument::seeded()
        }
        Err(e) => return Err(e).context(format!("无法加载 {}", store.path().display())),
    };

    let request = match build_request(&cli, action) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{}{}", STATUS_ERROR_PREFIX, e);
            return Ok(ExitCode::FAILURE);
        }
    };
    tracing::debug!("操作: {:?}", action);

    match doc.apply(request) {
        Ok(applied) => {
            let backup = store
                .save(&doc)
                .with_context(|| format!("无法保存 {}", store.path().display()))?;
            if let Some(backup) = backup {
                println!("已创建备份: {}", backup.display());
            }
            println!("{}", describe_applied(&applied));
            println!("帮助内容已成功更新: {}", store.path().display());
            Ok(ExitCode::SUCCESS)
        }
        Err(rejection) => {
            eprintln!("{}", rejection);
            eprintln!("{}", STATUS_CANCELLED);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 初始化日志输出（写到stderr，避免与结果提示混在一起）
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = SubscriberBuilder::default()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}{:#}", STATUS_ERROR_PREFIX, e);
            ExitCode::FAILURE
        }
    }
}
