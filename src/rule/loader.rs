//! 扩展规则加载管理器
//! 负责将调用方提供的JSON规则文档解析为内部规则目录
//! JSON中仅支持数据可表达的指令（plain/constant/replace），
//! 函数型指令（transform）只能通过代码内目录提供

use serde::Deserialize;

use super::model::{FieldDirective, RuleCatalog, UaField, UaRule};
use crate::error::{RsuadetectError, UadResult};

// ======== JSON原始结构 ========

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    browser: Vec<RawRule>,
    #[serde(default)]
    cpu: Vec<RawRule>,
    #[serde(default)]
    device: Vec<RawRule>,
    #[serde(default)]
    engine: Vec<RawRule>,
    #[serde(default)]
    os: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(default)]
    desc: String,
    patterns: Vec<String>,
    props: Vec<RawDirective>,
}

#[derive(Debug, Deserialize)]
struct RawDirective {
    field: String,
    #[serde(default)]
    constant: Option<String>,
    #[serde(default)]
    replace: Option<RawReplace>,
}

#[derive(Debug, Deserialize)]
struct RawReplace {
    pattern: String,
    with: String,
}

// ======== 加载器 ========

/// 扩展规则加载管理器
pub struct ExtensionLoader;

impl ExtensionLoader {
    /// 从JSON文本解析扩展规则目录
    pub fn from_json(json: &str) -> UadResult<RuleCatalog> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        Ok(RuleCatalog {
            browser: Self::convert_rules(raw.browser)?,
            cpu: Self::convert_rules(raw.cpu)?,
            device: Self::convert_rules(raw.device)?,
            engine: Self::convert_rules(raw.engine)?,
            os: Self::convert_rules(raw.os)?,
        })
    }

    /// 转换单个维度的原始规则列表
    fn convert_rules(raw_rules: Vec<RawRule>) -> UadResult<Vec<UaRule>> {
        raw_rules.into_iter().map(Self::convert_rule).collect()
    }

    /// 转换单条原始规则
    fn convert_rule(raw: RawRule) -> UadResult<UaRule> {
        if raw.patterns.is_empty() {
            return Err(RsuadetectError::RuleParseError(format!(
                "扩展规则缺少正则：{}",
                raw.desc
            )));
        }

        let directives = raw
            .props
            .into_iter()
            .map(Self::convert_directive)
            .collect::<UadResult<Vec<FieldDirective>>>()?;

        Ok(UaRule {
            description: raw.desc,
            patterns: raw.patterns,
            directives,
        })
    }

    /// 转换单条原始指令
    fn convert_directive(raw: RawDirective) -> UadResult<FieldDirective> {
        let field = Self::parse_field(&raw.field)?;

        match (raw.constant, raw.replace) {
            (Some(value), None) => Ok(FieldDirective::Constant(field, value)),
            (None, Some(replace)) => Ok(FieldDirective::Replace(field, replace.pattern, replace.with)),
            (None, None) => Ok(FieldDirective::Plain(field)),
            (Some(_), Some(_)) => Err(RsuadetectError::RuleParseError(format!(
                "扩展指令不能同时指定constant与replace：{}",
                raw.field
            ))),
        }
    }

    /// 解析字段名
    fn parse_field(name: &str) -> UadResult<UaField> {
        match name {
            "name" => Ok(UaField::Name),
            "version" => Ok(UaField::Version),
            "major" => Ok(UaField::Major),
            "vendor" => Ok(UaField::Vendor),
            "model" => Ok(UaField::Model),
            "type" => Ok(UaField::Type),
            "architecture" => Ok(UaField::Architecture),
            other => Err(RsuadetectError::RuleParseError(format!(
                "未知输出字段：{}",
                other
            ))),
        }
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_parses_rules() {
        // 测试场景：合法JSON解析出各维度规则
        let json = r#"{
            "browser": [
                {
                    "desc": "In-house shell",
                    "patterns": ["myshell\\/([\\w\\.]+)"],
                    "props": [
                        { "field": "version" },
                        { "field": "name", "constant": "MyShell" }
                    ]
                }
            ],
            "device": [
                {
                    "desc": "In-house terminal",
                    "patterns": ["(term-\\d+)"],
                    "props": [
                        { "field": "model", "replace": { "pattern": "-", "with": " " } }
                    ]
                }
            ]
        }"#;

        let catalog = ExtensionLoader::from_json(json).unwrap();
        assert_eq!(catalog.browser.len(), 1);
        assert_eq!(catalog.device.len(), 1);
        assert!(catalog.os.is_empty());

        let shell = &catalog.browser[0];
        assert_eq!(shell.description, "In-house shell");
        assert!(matches!(shell.directives[0], FieldDirective::Plain(UaField::Version)));
        assert!(matches!(
            shell.directives[1],
            FieldDirective::Constant(UaField::Name, ref v) if v == "MyShell"
        ));
        assert!(matches!(
            catalog.device[0].directives[0],
            FieldDirective::Replace(UaField::Model, _, _)
        ));
    }

    #[test]
    fn test_from_json_rejects_unknown_field() {
        // 测试场景：未知字段名返回规则解析错误
        let json = r#"{
            "browser": [
                { "patterns": ["(x)"], "props": [{ "field": "flavor" }] }
            ]
        }"#;

        let err = ExtensionLoader::from_json(json).unwrap_err();
        assert!(matches!(err, RsuadetectError::RuleParseError(_)));
    }

    #[test]
    fn test_from_json_rejects_empty_patterns() {
        // 测试场景：规则缺少正则返回规则解析错误
        let json = r#"{ "browser": [ { "patterns": [], "props": [] } ] }"#;

        let err = ExtensionLoader::from_json(json).unwrap_err();
        assert!(matches!(err, RsuadetectError::RuleParseError(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        // 测试场景：非法JSON返回JSON解析错误
        let err = ExtensionLoader::from_json("not json").unwrap_err();
        assert!(matches!(err, RsuadetectError::JsonError(_)));
    }
}
