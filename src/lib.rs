//! rsuadetect - 规则化User-Agent分类检测工具

// 导出全局错误类型
pub use self::error::{RsuadetectError, UadResult};

// 导出配置模块
pub use self::config::{
    ConfigManager, CustomConfigBuilder, EnvironmentSignals, EnvironmentSignalsBuilder,
    GlobalConfig,
};

// 导出规则模块核心接口
pub use self::rule::{
    builtin_catalog, BrowserInfo, CpuInfo, DeviceInfo, EngineInfo, ExtensionLoader,
    FieldDirective, OsInfo, RuleCatalog, UaCategory, UaField, UaParseResult, UaRule,
};

// 导出编译模块核心接口
pub use self::compiler::{CompiledCatalog, CompiledDirective, CompiledRule, RuleCompiler};

// 导出检测模块核心接口（含兼容直接调用的简化接口）
pub use self::detector::{
    init_uadetect, init_uadetect_with_config, parse_user_agent, parse_user_agent_with_env,
    UaDetector,
};

// 导出工具模块核心接口
pub use self::utils::{MajorVersionExtractor, UaSignature};

// 声明所有子模块
pub mod compiler;
pub mod config;
pub mod detector;
pub mod error;
pub mod rule;
pub mod utils;
