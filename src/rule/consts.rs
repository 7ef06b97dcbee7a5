//! 规则目录共享常量
//! 厂商/品牌/引擎/系统名称与设备形态取值，供内置规则表复用

/// 设备形态取值
pub mod dev {
    pub const CONSOLE: &str = "console";
    pub const EMBEDDED: &str = "embedded";
    pub const MOBILE: &str = "mobile";
    pub const SMARTTV: &str = "smarttv";
    pub const TABLET: &str = "tablet";
    pub const WEARABLE: &str = "wearable";
}

/// 厂商名称
pub mod vnd {
    pub const AMAZON: &str = "Amazon";
    pub const APPLE: &str = "Apple";
    pub const ASUS: &str = "ASUS";
    pub const BAIDU: &str = "Baidu";
    pub const BLACKBERRY: &str = "BlackBerry";
    pub const FACEBOOK: &str = "Facebook";
    pub const GOOGLE: &str = "Google";
    pub const HTC: &str = "HTC";
    pub const HUAWEI: &str = "Huawei";
    pub const LENOVO: &str = "Lenovo";
    pub const LG: &str = "LG";
    pub const MICROSOFT: &str = "Microsoft";
    pub const MOTOROLA: &str = "Motorola";
    pub const NOKIA: &str = "Nokia";
    pub const NVIDIA: &str = "Nvidia";
    pub const ONEPLUS: &str = "OnePlus";
    pub const OPPO: &str = "Oppo";
    pub const REALME: &str = "Realme";
    pub const SAMSUNG: &str = "Samsung";
    pub const SHARP: &str = "Sharp";
    pub const SONY: &str = "Sony";
    pub const VIVO: &str = "Vivo";
    pub const XIAOMI: &str = "Xiaomi";
    pub const ZEBRA: &str = "Zebra";
    pub const ZTE: &str = "ZTE";
}

/// 浏览器品牌名称
pub mod bnd {
    pub const CHROME: &str = "Chrome";
    pub const EDGE: &str = "Edge";
    pub const FIREFOX: &str = "Firefox";
    pub const OPERA: &str = "Opera";
}

/// 渲染引擎名称
pub mod eng {
    pub const BLINK: &str = "Blink";
    pub const GECKO: &str = "Gecko";
}

/// 操作系统规范名称
pub mod osn {
    pub const CHROMIUM_OS: &str = "Chromium OS";
    pub const MAC_OS: &str = "Mac OS";
    pub const WINDOWS: &str = "Windows";
}

/// 版本未知占位
pub const UNKNOWN: &str = "?";
