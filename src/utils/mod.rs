//! 工具模块：主版本号提取、签名拼接
pub mod major_version;
pub mod signature;

// 导出核心接口
pub use self::major_version::MajorVersionExtractor;
pub use self::signature::UaSignature;
