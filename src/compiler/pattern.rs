//! 编译后规则模型
//! 正则编译后的结构，构建完成后只读

use fancy_regex::Regex as FancyRegex;
use regex::Regex;

use crate::rule::{TransformFn, UaField};

/// 编译后的提取指令
/// replace类指令的替换正则在编译期构建，匹配期零开销
#[derive(Debug, Clone)]
pub enum CompiledDirective {
    Plain(UaField),
    Constant(UaField, String),
    Transform(UaField, TransformFn),
    Replace(UaField, Regex, String),
    ReplaceThenTransform(UaField, Regex, String, TransformFn),
}

impl CompiledDirective {
    /// 按指令策略计算字段值
    /// capture为对应捕获分组的内容；分组未参与匹配时除Constant外均产出"缺失"
    pub fn evaluate(&self, capture: Option<&str>) -> (UaField, Option<String>) {
        match self {
            CompiledDirective::Plain(field) => (*field, capture.map(str::to_string)),
            CompiledDirective::Constant(field, value) => (*field, Some(value.clone())),
            CompiledDirective::Transform(field, func) => (*field, capture.map(|m| func(m))),
            CompiledDirective::Replace(field, pattern, with) => (
                *field,
                capture.map(|m| pattern.replace_all(m, with.as_str()).into_owned()),
            ),
            CompiledDirective::ReplaceThenTransform(field, pattern, with, func) => (
                *field,
                capture.map(|m| func(&pattern.replace_all(m, with.as_str()))),
            ),
        }
    }
}

/// 编译后的单条规则
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub description: String,
    pub patterns: Vec<FancyRegex>,
    pub directives: Vec<CompiledDirective>,
}

/// 编译后的完整规则目录
#[derive(Debug, Clone)]
pub struct CompiledCatalog {
    pub browser: Vec<CompiledRule>,
    pub cpu: Vec<CompiledRule>,
    pub device: Vec<CompiledRule>,
    pub engine: Vec<CompiledRule>,
    pub os: Vec<CompiledRule>,
}
