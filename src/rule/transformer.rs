//! 捕获值命名转换函数
//! Transform类指令引用的具名函数集合，规则数据中不出现闭包

use super::consts::UNKNOWN;

/// 捕获值转换函数签名
pub type TransformFn = fn(&str) -> String;

/// 转为小写
pub fn lowercase(value: &str) -> String {
    value.to_lowercase()
}

/// 去除首尾空白
pub fn trim_value(value: &str) -> String {
    value.trim().to_string()
}

/// 早期Safari的WebKit构建号映射为零售版本号
/// 构建号以 "/412" 这样的路径片段出现在UA中；按片段长度降序匹配，
/// 未知构建号返回 "?" 占位
pub fn legacy_safari_version(value: &str) -> String {
    const BUILD_MARKERS: [(&str, &str); 7] = [
        ("/419", "2.0.4"),
        ("/417", "2.0.3"),
        ("/416", "2.0.2"),
        ("/412", "2.0"),
        ("/8", "1.0"),
        ("/3", "1.3"),
        ("/1", "1.2"),
    ];

    for (marker, version) in BUILD_MARKERS {
        if value.contains(marker) {
            return version.to_string();
        }
    }
    UNKNOWN.to_string()
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        assert_eq!(lowercase("PowerPC"), "powerpc");
    }

    #[test]
    fn test_trim_value() {
        assert_eq!(trim_value("  Roku DVP  "), "Roku DVP");
    }

    #[test]
    fn test_legacy_safari_version_known_builds() {
        // 测试场景：已知构建号映射到对应零售版本
        assert_eq!(legacy_safari_version("/412.6"), "2.0");
        assert_eq!(legacy_safari_version("/419.3"), "2.0.4");
        assert_eq!(legacy_safari_version("/85.8"), "1.0");
    }

    #[test]
    fn test_legacy_safari_version_unknown_build() {
        // 测试场景：未知构建号返回占位符
        assert_eq!(legacy_safari_version("/999"), UNKNOWN);
    }
}
