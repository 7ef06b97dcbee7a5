//! 规则数据模型定义
//! 仅存储规则数据与分类结果，无任何业务逻辑

use std::fmt;
use serde::{Deserialize, Serialize};

use super::transformer::TransformFn;

/// 输出字段名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UaField {
    Name,
    Version,
    Major,
    Vendor,
    Model,
    Type,
    Architecture,
}

impl UaField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UaField::Name => "name",
            UaField::Version => "version",
            UaField::Major => "major",
            UaField::Vendor => "vendor",
            UaField::Model => "model",
            UaField::Type => "type",
            UaField::Architecture => "architecture",
        }
    }
}

impl fmt::Display for UaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 捕获提取指令
/// 显式标签联合：指令按位置与捕获分组一一对应（第k条指令消费第k个分组）
#[derive(Debug, Clone)]
pub enum FieldDirective {
    /// 分组原样写入字段
    Plain(UaField),
    /// 忽略分组内容，写入固定值（规则命中本身即代表身份）
    Constant(UaField, String),
    /// 分组经命名函数转换后写入
    Transform(UaField, TransformFn),
    /// 分组经正则替换后写入
    Replace(UaField, String, String),
    /// 分组先正则替换，再经命名函数转换后写入
    ReplaceThenTransform(UaField, String, String, TransformFn),
}

impl FieldDirective {
    /// 指令目标字段
    pub fn field(&self) -> UaField {
        match self {
            FieldDirective::Plain(field)
            | FieldDirective::Constant(field, _)
            | FieldDirective::Transform(field, _)
            | FieldDirective::Replace(field, _, _)
            | FieldDirective::ReplaceThenTransform(field, _, _, _) => *field,
        }
    }
}

/// 单条分类规则
/// 多个候选正则按序尝试，首个命中的正则终止该规则的扫描
#[derive(Debug, Clone)]
pub struct UaRule {
    pub description: String,
    pub patterns: Vec<String>,
    pub directives: Vec<FieldDirective>,
}

impl UaRule {
    pub fn new(
        description: impl Into<String>,
        patterns: &[&str],
        directives: Vec<FieldDirective>,
    ) -> Self {
        Self {
            description: description.into(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            directives,
        }
    }
}

/// 分类维度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UaCategory {
    Browser,
    Cpu,
    Device,
    Engine,
    Os,
}

impl UaCategory {
    pub const ALL: [UaCategory; 5] = [
        UaCategory::Browser,
        UaCategory::Cpu,
        UaCategory::Device,
        UaCategory::Engine,
        UaCategory::Os,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UaCategory::Browser => "browser",
            UaCategory::Cpu => "cpu",
            UaCategory::Device => "device",
            UaCategory::Engine => "engine",
            UaCategory::Os => "os",
        }
    }
}

/// 完整规则目录：每个维度一张有序规则表
/// 表序即优先级：自上而下首个命中的规则生效，不回溯
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    pub browser: Vec<UaRule>,
    pub cpu: Vec<UaRule>,
    pub device: Vec<UaRule>,
    pub engine: Vec<UaRule>,
    pub os: Vec<UaRule>,
}

impl RuleCatalog {
    /// 空目录
    pub fn empty() -> Self {
        Self::default()
    }

    /// 按维度取规则表
    pub fn category(&self, category: UaCategory) -> &[UaRule] {
        match category {
            UaCategory::Browser => &self.browser,
            UaCategory::Cpu => &self.cpu,
            UaCategory::Device => &self.device,
            UaCategory::Engine => &self.engine,
            UaCategory::Os => &self.os,
        }
    }

    /// 合并扩展目录与内置目录
    /// 采用逐维度拼接：扩展规则置前，因而优先于内置规则命中
    pub fn merge(extensions: RuleCatalog, builtin: RuleCatalog) -> RuleCatalog {
        fn concat(mut head: Vec<UaRule>, tail: Vec<UaRule>) -> Vec<UaRule> {
            head.extend(tail);
            head
        }

        RuleCatalog {
            browser: concat(extensions.browser, builtin.browser),
            cpu: concat(extensions.cpu, builtin.cpu),
            device: concat(extensions.device, builtin.device),
            engine: concat(extensions.engine, builtin.engine),
            os: concat(extensions.os, builtin.os),
        }
    }

    /// 规则总数（调试统计用）
    pub fn rule_count(&self) -> usize {
        self.browser.len() + self.cpu.len() + self.device.len() + self.engine.len() + self.os.len()
    }
}

// ======== 分类结果模型 ========

/// 浏览器分类结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserInfo {
    pub name: Option<String>,
    pub version: Option<String>,
    pub major: Option<String>,
}

/// 渲染引擎分类结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// 操作系统分类结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsInfo {
    pub name: Option<String>,
}

/// 设备分类结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub vendor: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "type")]
    pub device_type: Option<String>,
}

/// CPU架构分类结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuInfo {
    pub architecture: Option<String>,
}

/// UA完整分类结果
/// 未命中的字段保持None，键集恒定，序列化时输出null而非缺键
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UaParseResult {
    pub ua: String,
    pub browser: BrowserInfo,
    pub engine: EngineInfo,
    pub os: OsInfo,
    pub device: DeviceInfo,
    pub cpu: CpuInfo,
}

impl fmt::Display for UaParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} / {}",
            self.browser.name.as_deref().unwrap_or("?"),
            self.browser.version.as_deref().unwrap_or("?"),
            self.os.name.as_deref().unwrap_or("?"),
        )
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    fn named_rule(description: &str) -> UaRule {
        UaRule::new(
            description,
            &[r"(x)"],
            vec![FieldDirective::Constant(UaField::Name, description.to_string())],
        )
    }

    #[test]
    fn test_merge_puts_extensions_first() {
        // 测试场景：合并后扩展规则必须整体位于内置规则之前
        let extensions = RuleCatalog {
            browser: vec![named_rule("ext-a"), named_rule("ext-b")],
            ..RuleCatalog::empty()
        };
        let builtin = RuleCatalog {
            browser: vec![named_rule("builtin-a")],
            ..RuleCatalog::empty()
        };

        let merged = RuleCatalog::merge(extensions, builtin);
        let order: Vec<&str> = merged.browser.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(order, vec!["ext-a", "ext-b", "builtin-a"]);
    }

    #[test]
    fn test_merge_keeps_untouched_categories() {
        // 测试场景：仅扩展browser时，其余维度保持内置表原样
        let extensions = RuleCatalog {
            browser: vec![named_rule("ext")],
            ..RuleCatalog::empty()
        };
        let builtin = RuleCatalog {
            cpu: vec![named_rule("builtin-cpu")],
            ..RuleCatalog::empty()
        };

        let merged = RuleCatalog::merge(extensions, builtin);
        assert_eq!(merged.browser.len(), 1);
        assert_eq!(merged.cpu.len(), 1);
        assert_eq!(merged.cpu[0].description, "builtin-cpu");
        assert!(merged.device.is_empty());
    }

    #[test]
    fn test_parse_result_serializes_absent_fields_as_null() {
        // 测试场景：未命中字段序列化为null，键不丢失
        let result = UaParseResult::default();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["browser"].get("name").is_some());
        assert!(json["browser"]["name"].is_null());
        assert!(json["device"].get("type").is_some());
    }
}
