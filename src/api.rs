//! 高层 API - 供 CLI 和库用户使用
//!
//! 文件读取、配置加载和统一错误类型。词法错误不是失败：
//! 它们包含在 `AnalysisResult` 中返回。
//!
//! # 使用示例
//! ```ignore
//! use lexdfa::{analyze_file, load_config};
//!
//! let config = load_config("lexdfa.json")?;
//! let result = analyze_file("program.txt", &config)?;
//! println!("{}", result.report());
//! ```

use std::path::{Path, PathBuf};

use lexdfa_config::LexdfaConfig;
use lexdfa_core::{AnalysisResult, Analyzer, Stepper};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Lexdfa 错误类型
#[derive(Error, Debug)]
pub enum LexdfaError {
    /// 读取输入或配置文件失败
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件格式错误
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 全局配置重复初始化
    #[error("config already initialized")]
    AlreadyInitialized,
}

impl LexdfaError {
    /// 出错的文件路径（如果有）
    pub fn path(&self) -> Option<&Path> {
        match self {
            LexdfaError::Io { path, .. } | LexdfaError::Config { path, .. } => Some(path),
            LexdfaError::AlreadyInitialized => None,
        }
    }
}

/// 从 JSON 文件加载配置，缺省字段取默认值
///
/// # Errors
/// 文件不可读返回 `LexdfaError::Io`，JSON 非法返回 `LexdfaError::Config`
pub fn load_config(path: impl AsRef<Path>) -> Result<LexdfaConfig, LexdfaError> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let config = serde_json::from_str(&text).map_err(|source| LexdfaError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(target: "lexdfa::analyzer", path = %path.display(), "config loaded");
    Ok(config)
}

/// 按给定配置分析一段源码
#[instrument(target = "lexdfa::analyzer", skip(source, config), fields(len = source.len()))]
pub fn analyze_source(source: &str, config: &LexdfaConfig) -> AnalysisResult {
    let mut analyzer = Analyzer::with_config(config.analyzer.clone());
    analyzer.analyze(source);
    let result = analyzer.into_result();
    info!(
        target: "lexdfa::analyzer",
        tokens = result.tokens.len(),
        errors = result.errors.len(),
        "source analyzed"
    );
    result
}

/// 读取并分析一个文件
///
/// # Errors
/// 文件不可读时返回 `LexdfaError::Io`
pub fn analyze_file(
    path: impl AsRef<Path>,
    config: &LexdfaConfig,
) -> Result<AnalysisResult, LexdfaError> {
    let path = path.as_ref();
    let source = read_text(path)?;
    Ok(analyze_source(&source, config))
}

/// 为一段源码创建单步执行器
pub fn stepper(source: &str) -> Stepper {
    Stepper::new(source)
}

/// 读取 UTF-8 源文件
pub fn read_text(path: &Path) -> Result<String, LexdfaError> {
    std::fs::read_to_string(path).map_err(|source| LexdfaError::Io {
        path: path.to_path_buf(),
        source,
    })
}
