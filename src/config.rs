//! 全局配置
//!
//! 可选的写一次全局配置，供 CLI 等便捷路径使用。
//! 核心库不读取全局状态：配置总是显式传入 `lexdfa_core`。
//!
//! # 使用示例
//! ```
//! use lexdfa::config::{config, init};
//! use lexdfa::LexdfaConfig;
//!
//! let mut cfg = LexdfaConfig::default();
//! cfg.analyzer.record_transitions = false;
//!
//! init(cfg).unwrap();
//! assert!(!config().analyzer.record_transitions);
//! ```

use crate::api::LexdfaError;
use lexdfa_config::LexdfaConfig;
use once_cell::sync::OnceCell;

static GLOBAL_CONFIG: OnceCell<LexdfaConfig> = OnceCell::new();

/// 初始化全局配置（只能成功一次）
///
/// # Errors
/// 已初始化时返回 `LexdfaError::AlreadyInitialized`
pub fn init(config: LexdfaConfig) -> Result<(), LexdfaError> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| LexdfaError::AlreadyInitialized)
}

/// 获取全局配置引用
///
/// 未初始化时以默认配置完成初始化。
pub fn config() -> &'static LexdfaConfig {
    GLOBAL_CONFIG.get_or_init(LexdfaConfig::default)
}

/// 检查配置是否已初始化
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
