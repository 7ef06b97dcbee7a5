//! 全局检测器单例管理
use once_cell::sync::OnceCell;

use super::detector::UaDetector;
use crate::config::{ConfigManager, EnvironmentSignals, GlobalConfig};
use crate::error::{RsuadetectError, UadResult};
use crate::rule::UaParseResult;

/// 全局检测器实例
static GLOBAL_DETECTOR: OnceCell<UaDetector> = OnceCell::new();

/// 初始化全局检测器（默认配置）
pub fn init_uadetect() -> UadResult<()> {
    init_uadetect_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局检测器
pub fn init_uadetect_with_config(config: GlobalConfig) -> UadResult<()> {
    if GLOBAL_DETECTOR.get().is_some() {
        return Ok(());
    }

    let detector = UaDetector::with_config(config)?;
    // 并发初始化时先到者生效，后到者沿用已有实例
    let _ = GLOBAL_DETECTOR.set(detector);

    Ok(())
}

/// 获取全局检测器
pub(crate) fn get_global_detector() -> UadResult<&'static UaDetector> {
    GLOBAL_DETECTOR
        .get()
        .ok_or(RsuadetectError::DetectorNotInitialized)
}

// 对外暴露的简化接口（兼容直接函数调用方式）

pub fn parse_user_agent(ua: &str) -> UadResult<UaParseResult> {
    let detector = get_global_detector()?;
    Ok(detector.parse(ua))
}

pub fn parse_user_agent_with_env(
    ua: &str,
    env: Option<&EnvironmentSignals>,
) -> UadResult<UaParseResult> {
    let detector = get_global_detector()?;
    Ok(detector.parse_with_env(ua, env))
}
