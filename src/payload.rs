pub mod payload {
    use std::cmp::Ordering;
    use std::fmt::Display;

    /// 链表载荷的排序抽象。
    ///
    /// 排序以 `length` 为第一关键字升序，长度相同时再用 `lex_cmp`
    /// 的字典序作为第二关键字。节点中缺失的载荷（`None`）不经过本
    /// trait，直接按长度 0 处理，排在一切非缺失值之前。
    ///
    /// `Display` 用于诊断输出（见 `list` 模块的 `print`）。
    pub trait Payload: Display {
        /// 载荷长度，排序的第一关键字
        fn length(&self) -> usize;

        /// 字典序比较，长度相同时的第二关键字
        fn lex_cmp(&self, other: &Self) -> Ordering;
    }

    // 标准字符串类型按字节长度和逐字节字典序比较
    impl Payload for String {
        fn length(&self) -> usize {
            self.len()
        }

        fn lex_cmp(&self, other: &Self) -> Ordering {
            self.as_bytes().cmp(other.as_bytes())
        }
    }

    impl Payload for &str {
        fn length(&self) -> usize {
            self.len()
        }

        fn lex_cmp(&self, other: &Self) -> Ordering {
            self.as_bytes().cmp(other.as_bytes())
        }
    }

    impl Payload for Box<str> {
        fn length(&self) -> usize {
            self.len()
        }

        fn lex_cmp(&self, other: &Self) -> Ordering {
            self.as_bytes().cmp(other.as_bytes())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_length_is_byte_length() {
            assert_eq!("goat".length(), 4);
            assert_eq!(String::from("").length(), 0);
            // 多字节字符按字节计数
            assert_eq!("中".length(), 3);
        }

        #[test]
        fn test_lex_cmp_is_bytewise() {
            assert_eq!("cat".lex_cmp(&"dog"), Ordering::Less);
            assert_eq!("dog".lex_cmp(&"dog"), Ordering::Equal);
            assert_eq!("duck".lex_cmp(&"dual"), Ordering::Greater);
        }
    }
}
