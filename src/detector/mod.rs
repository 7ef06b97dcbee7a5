//! 检测模块：UA分类核心逻辑
pub mod analyzer;
pub mod detector;
pub mod global;
pub mod mapper;

// 导出核心接口
pub use self::analyzer::{
    BrowserAnalyzer, CpuAnalyzer, DeviceAnalyzer, EngineAnalyzer, OsAnalyzer,
};
pub use self::detector::UaDetector;
pub use self::global::{
    init_uadetect, init_uadetect_with_config, parse_user_agent, parse_user_agent_with_env,
};
pub use self::mapper::{FieldMap, RuleMapper};
