//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;

#[derive(Error, Debug)]
pub enum RsuadetectError {
    // 规则相关错误
    #[error("规则解析失败：{0}")]
    RuleParseError(String),

    // 编译相关错误
    #[error("规则正则编译失败：{0}")]
    PatternCompileError(#[from] fancy_regex::Error),
    #[error("替换正则编译失败：{0}")]
    ReplaceCompileError(#[from] regex::Error),

    // 检测相关错误
    #[error("检测器未初始化")]
    DetectorNotInitialized,

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type UadResult<T> = Result<T, RsuadetectError>;
