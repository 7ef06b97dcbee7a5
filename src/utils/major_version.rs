//! 主版本号提取工具模块
//! 负责从完整版本号中提取首段主版本号

/// 主版本号提取工具类
/// 提供静态方法 `extract` 用于主版本号提取
pub struct MajorVersionExtractor;

impl MajorVersionExtractor {
    /// 从完整版本号提取主版本号
    ///
    /// # 参数
    /// - `version`: 完整版本号（可选字符串），如 "110.0.5481.178"、"v2,3"
    ///
    /// # 返回值
    /// - `Some(String)`: 首个分隔符之前的主版本段
    /// - `None`: 版本缺失时主版本同样缺失
    ///
    /// # 功能特性
    /// 1. 逗号视作版本分隔符，先归一为 "."
    /// 2. 剔除 [0-9.] 之外的全部字符后再切分
    pub fn extract(version: Option<&str>) -> Option<String> {
        version.map(|v| {
            let cleaned: String = v
                .replace(',', ".")
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            cleaned.split('.').next().unwrap_or("").to_string()
        })
    }
}
