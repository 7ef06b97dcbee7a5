//! 规则编译器核心
//! 仅负责将原始规则目录编译为可执行的正则模式

use std::time::Instant;

use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use tracing::debug;

use super::pattern::{CompiledCatalog, CompiledDirective, CompiledRule};
use crate::error::UadResult;
use crate::rule::{FieldDirective, RuleCatalog, UaRule};

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译规则目录
    pub fn compile(catalog: &RuleCatalog) -> UadResult<CompiledCatalog> {
        let start = Instant::now();

        // 1. 逐维度编译规则表
        let compiled = CompiledCatalog {
            browser: Self::compile_rule_list(&catalog.browser)?,
            cpu: Self::compile_rule_list(&catalog.cpu)?,
            device: Self::compile_rule_list(&catalog.device)?,
            engine: Self::compile_rule_list(&catalog.engine)?,
            os: Self::compile_rule_list(&catalog.os)?,
        };

        // 2. 输出编译统计
        debug!("规则编译完成，总耗时{:?}", start.elapsed());
        debug!(
            "编译统计：browser{}条、cpu{}条、device{}条、engine{}条、os{}条",
            compiled.browser.len(),
            compiled.cpu.len(),
            compiled.device.len(),
            compiled.engine.len(),
            compiled.os.len()
        );

        Ok(compiled)
    }

    /// 编译单个维度的规则表（保持表序）
    fn compile_rule_list(rules: &[UaRule]) -> UadResult<Vec<CompiledRule>> {
        rules.iter().map(Self::compile_rule).collect()
    }

    /// 编译单条规则
    fn compile_rule(rule: &UaRule) -> UadResult<CompiledRule> {
        // 规则正则统一忽略大小写；fancy-regex支持目录数据中的环视与反向引用
        let patterns = rule
            .patterns
            .iter()
            .map(|pattern| FancyRegex::new(&format!("(?i){}", pattern)))
            .collect::<Result<Vec<FancyRegex>, fancy_regex::Error>>()?;

        let directives = rule
            .directives
            .iter()
            .map(Self::compile_directive)
            .collect::<UadResult<Vec<CompiledDirective>>>()?;

        Ok(CompiledRule {
            description: rule.description.clone(),
            patterns,
            directives,
        })
    }

    /// 编译单条指令（替换正则用regex编译即可，无环视需求）
    fn compile_directive(directive: &FieldDirective) -> UadResult<CompiledDirective> {
        Ok(match directive {
            FieldDirective::Plain(field) => CompiledDirective::Plain(*field),
            FieldDirective::Constant(field, value) => {
                CompiledDirective::Constant(*field, value.clone())
            }
            FieldDirective::Transform(field, func) => CompiledDirective::Transform(*field, *func),
            FieldDirective::Replace(field, pattern, with) => {
                CompiledDirective::Replace(*field, Regex::new(pattern)?, with.clone())
            }
            FieldDirective::ReplaceThenTransform(field, pattern, with, func) => {
                CompiledDirective::ReplaceThenTransform(
                    *field,
                    Regex::new(pattern)?,
                    with.clone(),
                    *func,
                )
            }
        })
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::builtin_catalog;
    use crate::rule::{FieldDirective, UaField, UaRule};

    #[test]
    fn test_compile_builtin_catalog() {
        // 测试场景：完整内置目录可编译，规则数量与表序不变
        let catalog = builtin_catalog();
        let compiled = RuleCompiler::compile(&catalog).unwrap();

        assert_eq!(compiled.browser.len(), catalog.browser.len());
        assert_eq!(compiled.cpu.len(), catalog.cpu.len());
        assert_eq!(compiled.device.len(), catalog.device.len());
        assert_eq!(compiled.engine.len(), catalog.engine.len());
        assert_eq!(compiled.os.len(), catalog.os.len());
        assert_eq!(compiled.browser[0].description, catalog.browser[0].description);
    }

    #[test]
    fn test_compile_rejects_bad_pattern() {
        // 测试场景：非法正则返回编译错误
        let catalog = crate::rule::RuleCatalog {
            browser: vec![UaRule::new(
                "broken",
                &[r"(unclosed"],
                vec![FieldDirective::Plain(UaField::Name)],
            )],
            ..Default::default()
        };

        assert!(RuleCompiler::compile(&catalog).is_err());
    }

    #[test]
    fn test_compiled_patterns_are_case_insensitive() {
        // 测试场景：规则正则统一忽略大小写
        let catalog = crate::rule::RuleCatalog {
            browser: vec![UaRule::new(
                "case",
                &[r"(chrome)\/([\w\.]+)"],
                vec![
                    FieldDirective::Plain(UaField::Name),
                    FieldDirective::Plain(UaField::Version),
                ],
            )],
            ..Default::default()
        };

        let compiled = RuleCompiler::compile(&catalog).unwrap();
        assert!(compiled.browser[0].patterns[0]
            .is_match("Chrome/110.0.0.0")
            .unwrap());
    }
}
