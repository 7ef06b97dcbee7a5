//! 全局配置管理,存储所有可配置项
//! 同时定义宿主环境信号：分类引擎不读取任何全局状态，
//! 环境信息一律由调用方显式传入

use crate::rule::RuleCatalog;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 参与匹配的UA最大长度（超出部分只截断匹配输入，不影响结果中的ua字段）
    pub max_ua_length: usize,
    // 调用方扩展规则目录（优先级高于内置规则）
    pub extensions: Option<RuleCatalog>,
}

/// UA匹配长度上限默认值
pub const UA_MAX_LENGTH: usize = 500;

impl GlobalConfig {
    pub fn new() -> Self {
        Self {
            max_ua_length: UA_MAX_LENGTH,
            extensions: None,
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::new()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::new(),
        }
    }

    pub fn max_ua_length(mut self, max_ua_length: usize) -> Self {
        self.config.max_ua_length = max_ua_length;
        self
    }

    pub fn extensions(mut self, extensions: RuleCatalog) -> Self {
        self.config.extensions = Some(extensions);
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 宿主环境信号
/// 仅当被分类的字符串恰好等于 user_agent 时（self-UA），
/// 其余字段才会参与启发式修正；信号缺失时静默降级为"未知"
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSignals {
    /// 宿主环境自身上报的UA字符串
    pub user_agent: String,
    /// UA-Data平台提示（如 "Windows" / "macOS"，无法获取时为None）
    pub platform: Option<String>,
    /// UA-Data移动形态标记
    pub mobile: bool,
    /// 同时触控点数量（iPadOS识别依据）
    pub max_touch_points: u32,
    /// 是否暴露Brave专有API
    pub brave: bool,
}

impl EnvironmentSignals {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }

    pub fn builder(user_agent: impl Into<String>) -> EnvironmentSignalsBuilder {
        EnvironmentSignalsBuilder {
            signals: Self::new(user_agent),
        }
    }
}

/// 环境信号构建器
#[derive(Debug, Clone)]
pub struct EnvironmentSignalsBuilder {
    signals: EnvironmentSignals,
}

impl EnvironmentSignalsBuilder {
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.signals.platform = Some(platform.into());
        self
    }

    pub fn mobile(mut self, mobile: bool) -> Self {
        self.signals.mobile = mobile;
        self
    }

    pub fn max_touch_points(mut self, max_touch_points: u32) -> Self {
        self.signals.max_touch_points = max_touch_points;
        self
    }

    pub fn brave(mut self, brave: bool) -> Self {
        self.signals.brave = brave;
        self
    }

    pub fn build(self) -> EnvironmentSignals {
        self.signals
    }
}
