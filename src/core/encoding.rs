//! 规范文本编码模块
//!
//! 列表用方括号包裹、逗号分隔、不含空白，嵌套列表规则相同。
//! 整数经 `Display` 输出，负数带前导 `-`。

use std::fmt::Display;

/// Encodes `items` as `[a,b,c]`.
pub fn encode_list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut out = String::from("[");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&item.to_string());
    }
    out.push(']');
    out
}

/// Encodes a sequence of rows as `[[..],[..]]`.
pub fn encode_rows<R, I, T>(rows: R) -> String
where
    R: IntoIterator<Item = I>,
    I: IntoIterator<Item = T>,
    T: Display,
{
    encode_list(rows.into_iter().map(|row| encode_list(row)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_list_empty() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(encode_list(empty), "[]");
    }

    #[test]
    fn test_encode_list_negative_values() {
        assert_eq!(encode_list(vec![3, -7, 0]), "[3,-7,0]");
    }

    #[test]
    fn test_encode_rows() {
        let rows = vec![vec![0, 1], vec![1, 0]];
        assert_eq!(encode_rows(rows), "[[0,1],[1,0]]");

        let no_rows: Vec<Vec<i32>> = Vec::new();
        assert_eq!(encode_rows(no_rows), "[]");
    }

    #[test]
    fn test_encode_rows_with_empty_row() {
        let rows = vec![vec![], vec![5]];
        assert_eq!(encode_rows(rows), "[[],[5]]");
    }
}
