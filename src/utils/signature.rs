//! 分类结果签名拼接工具
//! 为下游组件采集器生成紧凑签名行，缺失字段以固定占位填充，
//! 保证同一结果的拼接输出恒定

use crate::rule::UaParseResult;

/// 缺失字段占位值
const ABSENT: &str = "undefined";

/// 签名拼接工具类
pub struct UaSignature;

impl UaSignature {
    /// 拼接紧凑签名行：`vendor:type:model|架构|系统|引擎|浏览器`
    /// 版本字段不参与拼接
    pub fn compose(result: &UaParseResult) -> String {
        let device = format!(
            "{}:{}:{}",
            Self::field(&result.device.vendor),
            Self::field(&result.device.device_type),
            Self::field(&result.device.model),
        );

        [
            device.as_str(),
            Self::field(&result.cpu.architecture),
            Self::field(&result.os.name),
            Self::field(&result.engine.name),
            Self::field(&result.browser.name),
        ]
        .join("|")
    }

    fn field(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or(ABSENT)
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::UaParseResult;

    #[test]
    fn test_compose_with_absent_fields() {
        // 测试场景：全部缺失时每个槽位填充占位值
        let result = UaParseResult::default();
        assert_eq!(
            UaSignature::compose(&result),
            "undefined:undefined:undefined|undefined|undefined|undefined|undefined"
        );
    }

    #[test]
    fn test_compose_with_populated_fields() {
        // 测试场景：已知字段按 vendor:type:model|cpu|os|engine|browser 顺序拼接
        let mut result = UaParseResult::default();
        result.device.vendor = Some("Apple".to_string());
        result.device.device_type = Some("mobile".to_string());
        result.device.model = Some("iPhone".to_string());
        result.cpu.architecture = Some("arm64".to_string());
        result.os.name = Some("iOS".to_string());
        result.engine.name = Some("WebKit".to_string());
        result.browser.name = Some("Mobile Safari".to_string());

        assert_eq!(
            UaSignature::compose(&result),
            "Apple:mobile:iPhone|arm64|iOS|WebKit|Mobile Safari"
        );
    }
}
