//! 天地图 key 格式检查

use serde::Serialize;

/// 天地图 key 的固定长度
pub const KEY_LENGTH: usize = 32;

/// key 格式检查结果，两项相互独立
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KeyFormat {
    /// 长度不是 32
    pub wrong_length: bool,
    /// 含有字母数字以外的字符
    pub has_special_character: bool,
}

impl KeyFormat {
    /// 格式正确（不代表服务端认可该 key）
    pub fn is_well_formed(&self) -> bool {
        !self.wrong_length && !self.has_special_character
    }
}

/// 检查 key 格式
///
/// 空字符串同时视为长度错误和含有特殊字符。
pub fn check_key_format(key: &str) -> KeyFormat {
    KeyFormat {
        wrong_length: key.chars().count() != KEY_LENGTH,
        has_special_character: key.is_empty() || !key.chars().all(char::is_alphanumeric),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_key() {
        let result = check_key_format("a1b2c3d4e5f6a7b8c9d0E1F2A3B4C5D6");
        assert_eq!(result, KeyFormat::default());
        assert!(result.is_well_formed());
    }

    #[test]
    fn test_wrong_length() {
        for key in ["abc", "a1b2c3d4e5f6a7b8c9d0E1F2A3B4C5D6X"] {
            let result = check_key_format(key);
            assert!(result.wrong_length, "{}", key);
            assert!(!result.has_special_character, "{}", key);
        }
    }

    #[test]
    fn test_special_character_any_length() {
        let result = check_key_format("a1b2c3d4e5f6a7b8c9d0E1F2A3B4C5-6");
        assert!(!result.wrong_length);
        assert!(result.has_special_character);

        let result = check_key_format("bad key!");
        assert!(result.wrong_length);
        assert!(result.has_special_character);
    }

    #[test]
    fn test_unicode_letters_and_digits_allowed() {
        let key = format!("{}天", "a".repeat(31));
        let result = check_key_format(&key);
        assert!(!result.wrong_length);
        assert!(!result.has_special_character);

        // 全角数字和阿拉伯-印度数字
        let key = format!("{}１٣", "b".repeat(30));
        assert_eq!(check_key_format(&key), KeyFormat::default());

        let key = format!("{}。", "a".repeat(31));
        assert!(check_key_format(&key).has_special_character);
    }

    #[test]
    fn test_empty_key() {
        let result = check_key_format("");
        assert!(result.wrong_length);
        assert!(result.has_special_character);
    }
}
