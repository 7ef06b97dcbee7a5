//! 分类分析器：五个维度各一个，负责字段预置、规则映射与维度后处理
//! 环境启发式只在 is_self_ua 为真时参与，保证外来UA字符串的分类纯粹由规则决定

use once_cell::sync::Lazy;
use regex::Regex;

use super::mapper::{seed_fields, FieldMap, RuleMapper};
use crate::compiler::CompiledRule;
use crate::config::EnvironmentSignals;
use crate::rule::consts::{dev, osn};
use crate::rule::{BrowserInfo, CpuInfo, DeviceInfo, EngineInfo, OsInfo, UaField};
use crate::utils::MajorVersionExtractor;

/// 从字段表取出字段值
fn take(fields: &mut FieldMap, field: UaField) -> Option<String> {
    fields.remove(&field).flatten()
}

/// 浏览器分析器
pub struct BrowserAnalyzer;

impl BrowserAnalyzer {
    pub fn analyze(
        rules: &[CompiledRule],
        subject: &str,
        is_self_ua: bool,
        env: Option<&EnvironmentSignals>,
    ) -> BrowserInfo {
        let mut fields = seed_fields(&[UaField::Name, UaField::Version]);
        RuleMapper::map_category(rules, subject, &mut fields);

        let mut name = take(&mut fields, UaField::Name);
        let version = take(&mut fields, UaField::Version);
        let major = MajorVersionExtractor::extract(version.as_deref());

        // Brave不修改UA，仅能通过宿主专有API识别；因此该覆盖只对self-UA生效
        if is_self_ua && env.map(|signals| signals.brave).unwrap_or(false) {
            name = Some("Brave".to_string());
        }

        BrowserInfo { name, version, major }
    }
}

/// 渲染引擎分析器
pub struct EngineAnalyzer;

impl EngineAnalyzer {
    pub fn analyze(rules: &[CompiledRule], subject: &str) -> EngineInfo {
        let mut fields = seed_fields(&[UaField::Name, UaField::Version]);
        RuleMapper::map_category(rules, subject, &mut fields);

        EngineInfo {
            name: take(&mut fields, UaField::Name),
            version: take(&mut fields, UaField::Version),
        }
    }
}

/// 操作系统分析器
pub struct OsAnalyzer;

impl OsAnalyzer {
    pub fn analyze(
        rules: &[CompiledRule],
        subject: &str,
        is_self_ua: bool,
        env: Option<&EnvironmentSignals>,
    ) -> OsInfo {
        static CHROME_OS_SYNONYM: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(?i)chrome os").unwrap()
        });
        static MAC_OS_SYNONYM: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(?i)macos").unwrap()
        });

        let mut fields = seed_fields(&[UaField::Name]);
        RuleMapper::map_category(rules, subject, &mut fields);

        let mut name = take(&mut fields, UaField::Name);

        // 规则未命中时回退到宿主平台提示；"Unknown"提示不可用
        if is_self_ua && name.is_none() {
            if let Some(platform) = env.and_then(|signals| signals.platform.as_deref()) {
                if platform != "Unknown" {
                    let normalized =
                        CHROME_OS_SYNONYM.replace_all(platform, osn::CHROMIUM_OS);
                    let normalized =
                        MAC_OS_SYNONYM.replace_all(&normalized, osn::MAC_OS);
                    name = Some(normalized.into_owned());
                }
            }
        }

        OsInfo { name }
    }
}

/// 设备分析器
pub struct DeviceAnalyzer;

impl DeviceAnalyzer {
    pub fn analyze(
        rules: &[CompiledRule],
        subject: &str,
        is_self_ua: bool,
        env: Option<&EnvironmentSignals>,
    ) -> DeviceInfo {
        let mut fields = seed_fields(&[UaField::Vendor, UaField::Model, UaField::Type]);
        RuleMapper::map_category(rules, subject, &mut fields);

        let mut device = DeviceInfo {
            vendor: take(&mut fields, UaField::Vendor),
            model: take(&mut fields, UaField::Model),
            device_type: take(&mut fields, UaField::Type),
        };

        if !is_self_ua {
            return device;
        }

        if let Some(signals) = env {
            // 规则未给出形态但宿主声明移动形态
            if device.device_type.is_none() && signals.mobile {
                device.device_type = Some(dev::MOBILE.to_string());
            }

            // iPadOS自报为桌面Macintosh，但多点触控暴露了真实形态
            if device.model.as_deref() == Some("Macintosh") && signals.max_touch_points > 2 {
                device.model = Some("iPad".to_string());
                device.device_type = Some(dev::TABLET.to_string());
            }
        }

        device
    }
}

/// CPU架构分析器
pub struct CpuAnalyzer;

impl CpuAnalyzer {
    pub fn analyze(rules: &[CompiledRule], subject: &str) -> CpuInfo {
        let mut fields = seed_fields(&[UaField::Architecture]);
        RuleMapper::map_category(rules, subject, &mut fields);

        CpuInfo {
            architecture: take(&mut fields, UaField::Architecture),
        }
    }
}
