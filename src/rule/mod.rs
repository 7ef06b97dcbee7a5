//! 规则模块：规则数据模型、共享常量、捕获转换函数、内置目录与扩展加载
pub mod builtin;
pub mod consts;
pub mod loader;
pub mod model;
pub mod transformer;

// 导出核心接口
pub use self::builtin::builtin_catalog;
pub use self::loader::ExtensionLoader;
pub use self::model::{
    BrowserInfo, CpuInfo, DeviceInfo, EngineInfo, FieldDirective, OsInfo, RuleCatalog,
    UaCategory, UaField, UaParseResult, UaRule,
};
pub use self::transformer::TransformFn;
