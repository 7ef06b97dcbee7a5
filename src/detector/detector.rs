//! 检测器核心：整合五个维度分析器，输出完整分类结果

use std::sync::Arc;

use tracing::debug;

use super::analyzer::{BrowserAnalyzer, CpuAnalyzer, DeviceAnalyzer, EngineAnalyzer, OsAnalyzer};
use crate::compiler::{CompiledCatalog, RuleCompiler};
use crate::config::{ConfigManager, EnvironmentSignals, GlobalConfig};
use crate::error::UadResult;
use crate::rule::{builtin_catalog, RuleCatalog, UaParseResult};

/// UA检测器
/// 构建时完成目录合并与正则编译，之后只读，可跨线程共享
#[derive(Debug, Clone)]
pub struct UaDetector {
    compiled: Arc<CompiledCatalog>,
    config: GlobalConfig,
}

impl UaDetector {
    /// 创建检测器（默认配置）
    pub fn new() -> UadResult<Self> {
        Self::with_config(ConfigManager::get_default())
    }

    /// 带自定义配置创建检测器
    pub fn with_config(mut config: GlobalConfig) -> UadResult<Self> {
        // 1. 合并扩展目录与内置目录（扩展优先）
        let catalog = match config.extensions.take() {
            Some(extensions) => RuleCatalog::merge(extensions, builtin_catalog()),
            None => builtin_catalog(),
        };
        debug!("规则目录构建完成，共{}条规则", catalog.rule_count());

        // 2. 编译规则目录
        let compiled = RuleCompiler::compile(&catalog)?;

        Ok(Self {
            compiled: Arc::new(compiled),
            config,
        })
    }

    /// 核心分类接口（无环境信号）
    pub fn parse(&self, ua: &str) -> UaParseResult {
        self.parse_with_env(ua, None)
    }

    /// 核心分类接口（带环境信号）
    pub fn parse_with_env(
        &self,
        ua: &str,
        env: Option<&EnvironmentSignals>,
    ) -> UaParseResult {
        // 1. 解析生效UA：入参去除首尾空白，为空则回退宿主UA
        let trimmed = ua.trim();
        let resolved = if trimmed.is_empty() {
            env.map(|signals| signals.user_agent.trim()).unwrap_or("")
        } else {
            trimmed
        };

        // 2. 生效UA为空时短路返回：ua为空串，各维度保持缺失态
        if resolved.is_empty() {
            return UaParseResult::default();
        }

        // 3. self-UA判定：生效UA与宿主UA完全一致（截断前比较）
        let is_self_ua = env
            .map(|signals| signals.user_agent == resolved)
            .unwrap_or(false);

        // 4. 超长UA仅截断匹配输入，结果中的ua字段保留完整串
        let subject = match resolved.char_indices().nth(self.config.max_ua_length) {
            Some((index, _)) => &resolved[..index],
            None => resolved,
        };

        // 5. 五个维度依次分类
        let result = UaParseResult {
            ua: resolved.to_string(),
            browser: BrowserAnalyzer::analyze(&self.compiled.browser, subject, is_self_ua, env),
            engine: EngineAnalyzer::analyze(&self.compiled.engine, subject),
            os: OsAnalyzer::analyze(&self.compiled.os, subject, is_self_ua, env),
            device: DeviceAnalyzer::analyze(&self.compiled.device, subject, is_self_ua, env),
            cpu: CpuAnalyzer::analyze(&self.compiled.cpu, subject),
        };

        debug!("分类完成：{}", result);
        result
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::rule::{ExtensionLoader, FieldDirective, RuleCatalog, UaField, UaRule};

    const CHROME_WIN_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/110.0.0.0 Safari/537.36";
    const FIREFOX_LINUX_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";
    const IPHONE_SAFARI_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_5 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.5 Mobile/15E148 Safari/604.1";
    const GALAXY_CHROME_UA: &str = "Mozilla/5.0 (Linux; Android 13; SM-S901B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/112.0.0.0 Mobile Safari/537.36";
    const EDGE_WIN_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/110.0.0.0 Safari/537.36 Edg/110.0.1587.57";
    const XBOX_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; Xbox; Xbox One) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/70.0.3538.102 Safari/537.36 Edge/18.19041";

    fn detector() -> UaDetector {
        UaDetector::new().unwrap()
    }

    #[test]
    fn test_chrome_on_windows_end_to_end() {
        // 测试场景：Chrome/Windows的五维度联合分类
        let result = detector().parse(CHROME_WIN_UA);

        assert_eq!(result.ua, CHROME_WIN_UA);
        assert_eq!(result.browser.name.as_deref(), Some("Chrome"));
        assert_eq!(result.browser.major.as_deref(), Some("110"));
        assert_eq!(result.os.name.as_deref(), Some("Windows"));
        assert_eq!(result.cpu.architecture.as_deref(), Some("amd64"));
        assert_eq!(result.engine.name.as_deref(), Some("Blink"));
    }

    #[test]
    fn test_firefox_on_linux() {
        let result = detector().parse(FIREFOX_LINUX_UA);

        assert_eq!(result.browser.name.as_deref(), Some("Firefox"));
        assert_eq!(result.browser.major.as_deref(), Some("115"));
        assert_eq!(result.engine.name.as_deref(), Some("Gecko"));
        assert_eq!(result.os.name.as_deref(), Some("Linux"));
        assert_eq!(result.cpu.architecture.as_deref(), Some("amd64"));
    }

    #[test]
    fn test_mobile_safari_on_iphone() {
        let result = detector().parse(IPHONE_SAFARI_UA);

        assert_eq!(result.browser.name.as_deref(), Some("Mobile Safari"));
        assert_eq!(result.browser.major.as_deref(), Some("16"));
        assert_eq!(result.engine.name.as_deref(), Some("WebKit"));
        assert_eq!(result.os.name.as_deref(), Some("iOS"));
        assert_eq!(result.device.vendor.as_deref(), Some("Apple"));
        assert_eq!(result.device.model.as_deref(), Some("iPhone"));
        assert_eq!(result.device.device_type.as_deref(), Some("mobile"));
    }

    #[test]
    fn test_samsung_galaxy_chrome() {
        let result = detector().parse(GALAXY_CHROME_UA);

        assert_eq!(result.browser.name.as_deref(), Some("Chrome"));
        assert_eq!(result.os.name.as_deref(), Some("Android"));
        assert_eq!(result.device.vendor.as_deref(), Some("Samsung"));
        assert_eq!(result.device.model.as_deref(), Some("SM-S901B"));
        assert_eq!(result.device.device_type.as_deref(), Some("mobile"));
    }

    #[test]
    fn test_edge_wins_over_chrome_token() {
        // 测试场景：Edge规则先于Chrome规则命中
        let result = detector().parse(EDGE_WIN_UA);

        assert_eq!(result.browser.name.as_deref(), Some("Edge"));
        assert_eq!(result.browser.major.as_deref(), Some("110"));
        assert_eq!(result.engine.name.as_deref(), Some("Blink"));
    }

    #[test]
    fn test_xbox_console_os_guard() {
        // 测试场景：含xbox的Windows UA由Xbox规则接管系统与设备
        let result = detector().parse(XBOX_UA);

        assert_eq!(result.os.name.as_deref(), Some("Xbox"));
        assert_eq!(result.device.device_type.as_deref(), Some("console"));
        assert_eq!(result.device.vendor.as_deref(), Some("Microsoft"));
    }

    #[test]
    fn test_empty_input_short_circuits() {
        // 测试场景：空输入且无环境回退时返回全缺失结果，不报错
        let result = detector().parse("");

        assert_eq!(result.ua, "");
        assert_eq!(result.browser.name, None);
        assert_eq!(result.engine.name, None);
        assert_eq!(result.os.name, None);
        assert_eq!(result.device.model, None);
        assert_eq!(result.cpu.architecture, None);
    }

    #[test]
    fn test_blank_input_falls_back_to_environment_ua() {
        // 测试场景：空白输入回退宿主UA，且回退后即为self-UA
        let env = crate::config::EnvironmentSignals::builder(CHROME_WIN_UA)
            .brave(true)
            .build();
        let result = detector().parse_with_env("   ", Some(&env));

        assert_eq!(result.ua, CHROME_WIN_UA);
        // 回退后self-UA成立，Brave覆盖生效
        assert_eq!(result.browser.name.as_deref(), Some("Brave"));
    }

    #[test]
    fn test_parse_is_deterministic() {
        // 测试场景：相同输入与环境两次分类结果结构相等
        let detector = detector();
        let env = crate::config::EnvironmentSignals::builder(CHROME_WIN_UA)
            .mobile(false)
            .build();

        let first = detector.parse_with_env(CHROME_WIN_UA, Some(&env));
        let second = detector.parse_with_env(CHROME_WIN_UA, Some(&env));
        assert_eq!(first, second);
    }

    #[test]
    fn test_extension_rules_win_over_builtin() {
        // 测试场景：扩展目录中的同类规则优先于内置规则
        let extensions = RuleCatalog {
            browser: vec![UaRule::new(
                "in-house chrome rebrand",
                &[r"(chrome)\/([\w\.]+)"],
                vec![
                    FieldDirective::Constant(UaField::Name, "HouseChrome".to_string()),
                    FieldDirective::Plain(UaField::Version),
                ],
            )],
            ..Default::default()
        };

        let config = ConfigManager::custom().extensions(extensions).build();
        let detector = UaDetector::with_config(config).unwrap();
        let result = detector.parse(CHROME_WIN_UA);

        assert_eq!(result.browser.name.as_deref(), Some("HouseChrome"));
        assert_eq!(result.browser.major.as_deref(), Some("110"));
        // 其余维度不受browser扩展影响
        assert_eq!(result.os.name.as_deref(), Some("Windows"));
    }

    #[test]
    fn test_json_extension_round_through_detector() {
        // 测试场景：JSON扩展目录经加载器进入检测器并生效
        let json = r#"{
            "browser": [
                {
                    "desc": "QA harness browser",
                    "patterns": ["qaharness\\/([\\w\\.]+)"],
                    "props": [
                        { "field": "version" },
                        { "field": "name", "constant": "QA Harness" }
                    ]
                }
            ]
        }"#;
        let extensions = ExtensionLoader::from_json(json).unwrap();

        let config = ConfigManager::custom().extensions(extensions).build();
        let detector = UaDetector::with_config(config).unwrap();
        let result = detector.parse("QAHarness/3.1.4");

        assert_eq!(result.browser.name.as_deref(), Some("QA Harness"));
        assert_eq!(result.browser.version.as_deref(), Some("3.1.4"));
        assert_eq!(result.browser.major.as_deref(), Some("3"));
    }

    #[test]
    fn test_overlong_ua_is_truncated_for_matching_only() {
        // 测试场景：超长UA保留完整ua字段，匹配仅用截断后输入
        let config = ConfigManager::custom().max_ua_length(16).build();
        let detector = UaDetector::with_config(config).unwrap();

        let long_ua = format!("PaddingPadding {}", CHROME_WIN_UA);
        let result = detector.parse(&long_ua);

        assert_eq!(result.ua, long_ua);
        // 截断后Chrome标记不在匹配窗口内
        assert_eq!(result.browser.name, None);
    }
}
