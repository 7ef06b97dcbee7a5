//! 规则映射器：分类核心算法
//! 按表序遍历规则，规则内按序尝试候选正则；首个命中的规则独占该维度，
//! 命中后按位置将第k条指令与第k个捕获分组配对写入字段表

use std::collections::HashMap;

use tracing::debug;

use crate::compiler::CompiledRule;
use crate::rule::UaField;

/// 分类输出字段表
/// 值为None表示"字段存在但未命中"，与键缺失严格区分
pub type FieldMap = HashMap<UaField, Option<String>>;

/// 以"缺失"状态预置字段表
pub fn seed_fields(fields: &[UaField]) -> FieldMap {
    fields.iter().map(|field| (*field, None)).collect()
}

/// 规则映射器
pub struct RuleMapper;

impl RuleMapper {
    /// 对单个维度执行分类
    /// 无任何规则命中时字段表保持预置状态，不视为错误；
    /// 正则运行期错误（回溯上限等）等同于该正则未命中
    pub fn map_category(rules: &[CompiledRule], subject: &str, fields: &mut FieldMap) {
        for rule in rules {
            for pattern in &rule.patterns {
                let captures = match pattern.captures(subject) {
                    Ok(Some(captures)) => captures,
                    Ok(None) | Err(_) => continue,
                };

                debug!("规则命中：{}", rule.description);

                for (index, directive) in rule.directives.iter().enumerate() {
                    // 指令按位置消费捕获分组（1起始）
                    let capture = captures.get(index + 1).map(|m| m.as_str());
                    let (field, value) = directive.evaluate(capture);
                    fields.insert(field, value);
                }

                // 每个维度只允许一条规则生效
                return;
            }
        }
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::RuleCompiler;
    use crate::rule::{FieldDirective, RuleCatalog, UaRule};

    fn compile_browser_rules(rules: Vec<UaRule>) -> Vec<crate::compiler::CompiledRule> {
        let catalog = RuleCatalog {
            browser: rules,
            ..Default::default()
        };
        RuleCompiler::compile(&catalog).unwrap().browser
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // 测试场景：两条规则都能命中时，前一条的指令决定字段值
        let rules = compile_browser_rules(vec![
            UaRule::new(
                "earlier",
                &[r"(foo)\/([\w\.]+)"],
                vec![
                    FieldDirective::Constant(UaField::Name, "Earlier".to_string()),
                    FieldDirective::Plain(UaField::Version),
                ],
            ),
            UaRule::new(
                "later",
                &[r"(foo)\/([\w\.]+)"],
                vec![
                    FieldDirective::Constant(UaField::Name, "Later".to_string()),
                    FieldDirective::Plain(UaField::Version),
                ],
            ),
        ]);

        let mut fields = seed_fields(&[UaField::Name, UaField::Version]);
        RuleMapper::map_category(&rules, "Foo/1.2.3", &mut fields);

        assert_eq!(fields[&UaField::Name].as_deref(), Some("Earlier"));
        assert_eq!(fields[&UaField::Version].as_deref(), Some("1.2.3"));
    }

    #[test]
    fn test_patterns_within_rule_tried_in_order() {
        // 测试场景：规则内首个命中的候选正则终止扫描
        let rules = compile_browser_rules(vec![UaRule::new(
            "multi-pattern",
            &[r"(bar)\/([\w\.]+)", r"(foo)\/([\w\.]+)"],
            vec![
                FieldDirective::Plain(UaField::Name),
                FieldDirective::Plain(UaField::Version),
            ],
        )]);

        let mut fields = seed_fields(&[UaField::Name, UaField::Version]);
        RuleMapper::map_category(&rules, "Foo/9.0 Bar/1.0", &mut fields);

        // 第一条候选正则命中Bar，Foo不再参与
        assert_eq!(fields[&UaField::Name].as_deref(), Some("Bar"));
        assert_eq!(fields[&UaField::Version].as_deref(), Some("1.0"));
    }

    #[test]
    fn test_no_match_keeps_seeded_fields() {
        // 测试场景：全表未命中时字段表保持预置的缺失态
        let rules = compile_browser_rules(vec![UaRule::new(
            "never",
            &[r"(impossible-token)\/(\d+)"],
            vec![
                FieldDirective::Plain(UaField::Name),
                FieldDirective::Plain(UaField::Version),
            ],
        )]);

        let mut fields = seed_fields(&[UaField::Name, UaField::Version]);
        RuleMapper::map_category(&rules, "Foo/1.0", &mut fields);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[&UaField::Name], None);
        assert_eq!(fields[&UaField::Version], None);
    }

    #[test]
    fn test_unmatched_optional_group_clears_field() {
        // 测试场景：可选分组未参与匹配时对应字段为缺失而非报错
        let rules = compile_browser_rules(vec![UaRule::new(
            "optional-version",
            &[r"(foo)(?:\/([\w\.]+))?"],
            vec![
                FieldDirective::Plain(UaField::Name),
                FieldDirective::Plain(UaField::Version),
            ],
        )]);

        let mut fields = seed_fields(&[UaField::Name, UaField::Version]);
        RuleMapper::map_category(&rules, "foo", &mut fields);

        assert_eq!(fields[&UaField::Name].as_deref(), Some("foo"));
        assert_eq!(fields[&UaField::Version], None);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        // 测试场景：相同输入两次映射产出结构一致的结果
        let rules = compile_browser_rules(vec![UaRule::new(
            "det",
            &[r"(foo)\/([\w\.]+)"],
            vec![
                FieldDirective::Plain(UaField::Name),
                FieldDirective::Plain(UaField::Version),
            ],
        )]);

        let mut first = seed_fields(&[UaField::Name, UaField::Version]);
        let mut second = seed_fields(&[UaField::Name, UaField::Version]);
        RuleMapper::map_category(&rules, "Foo/4.5", &mut first);
        RuleMapper::map_category(&rules, "Foo/4.5", &mut second);

        assert_eq!(first, second);
    }
}
