//! 编译模块：规则目录到可执行正则模式的一次性编译
pub mod compiler;
pub mod pattern;

// 导出核心接口
pub use self::compiler::RuleCompiler;
pub use self::pattern::{CompiledCatalog, CompiledDirective, CompiledRule};
