//! 竞艇场模型
//!
//! 原系统用一张全局字典做「場名 → 场代码」映射，未命中时静默回退到江戸川。
//! 这里改为返回 `Option` 的纯查找，回退与否由调用方决定。

use phf::phf_map;

/// 竞艇场枚举
///
/// 枚举值即官方场代码（jcd）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Venue {
    /// 桐生
    Kiryu = 1,
    /// 戸田
    Toda = 2,
    /// 江戸川
    Edogawa = 3,
    /// 平和島
    Heiwajima = 4,
    /// 多摩川
    Tamagawa = 5,
    /// 蒲郡
    Gamagori = 7,
    /// 住之江
    Suminoe = 12,
    /// 下関
    Shimonoseki = 19,
}

/// 場名 → 場 的静态映射表
static VENUE_BY_NAME: phf::Map<&'static str, Venue> = phf_map! {
    "桐生" => Venue::Kiryu,
    "戸田" => Venue::Toda,
    "江戸川" => Venue::Edogawa,
    "平和島" => Venue::Heiwajima,
    "多摩川" => Venue::Tamagawa,
    "蒲郡" => Venue::Gamagori,
    "住之江" => Venue::Suminoe,
    "下関" => Venue::Shimonoseki,
};

impl Venue {
    /// 場名未命中时的回退场（沿用原系统行为）
    pub const DEFAULT: Venue = Venue::Edogawa;

    /// 获取场代码
    pub fn code(self) -> u8 {
        self as u8
    }

    /// 获取查询参数使用的两位数场代码（jcd）
    pub fn jcd(self) -> String {
        format!("{:02}", self.code())
    }

    /// 获取場名
    pub fn name(self) -> &'static str {
        match self {
            Venue::Kiryu => "桐生",
            Venue::Toda => "戸田",
            Venue::Edogawa => "江戸川",
            Venue::Heiwajima => "平和島",
            Venue::Tamagawa => "多摩川",
            Venue::Gamagori => "蒲郡",
            Venue::Suminoe => "住之江",
            Venue::Shimonoseki => "下関",
        }
    }

    /// 从場名查找
    ///
    /// 未命中返回 `None`，由调用方决定是报错还是回退到 [`Venue::DEFAULT`]。
    pub fn find(s: &str) -> Option<Self> {
        VENUE_BY_NAME.get(s.trim()).copied()
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_names() {
        assert_eq!(Venue::find("江戸川"), Some(Venue::Edogawa));
        assert_eq!(Venue::find("桐生"), Some(Venue::Kiryu));
        assert_eq!(Venue::find("下関"), Some(Venue::Shimonoseki));
        // 前后空白应被忽略
        assert_eq!(Venue::find(" 住之江 "), Some(Venue::Suminoe));
    }

    #[test]
    fn test_find_unknown_name_returns_none() {
        assert_eq!(Venue::find("常滑"), None);
        assert_eq!(Venue::find(""), None);
    }

    #[test]
    fn test_jcd_is_zero_padded() {
        assert_eq!(Venue::Kiryu.jcd(), "01");
        assert_eq!(Venue::Edogawa.jcd(), "03");
        assert_eq!(Venue::Suminoe.jcd(), "12");
        assert_eq!(Venue::Shimonoseki.jcd(), "19");
    }

    #[test]
    fn test_default_is_edogawa() {
        assert_eq!(Venue::DEFAULT, Venue::Edogawa);
        assert_eq!(Venue::DEFAULT.jcd(), "03");
    }
}
