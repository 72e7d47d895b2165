//! Configuration Text Parser
//!
//! 「Package Detail selection ( Configuration )」セルの自由記述テキストから
//! 選択肢（ConfigurationItem）のリストを抽出するモジュール。
//!
//! # 入力例
//!
//! ```text
//! ขนาดพื้นที่
//! - 25 - 40 ตร.ม. (2 ชั่วโมง)
//! - 40 - 60 ตร.ม. (3 ชั่วโมง) +250 THB
//! ```
//!
//! `-`で始まる行だけが選択肢になり、見出し行は無視されます。
//! `+250 THB`のような追加料金の表記は金額として取り出され、表示テキストから除去されます。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::ConfigurationItem;
use crate::types::parse_integer_text;

/// 追加料金の表記（`+1,000 THB`、大文字小文字を区別しない）
///
/// 金額はASCII数字とタイ数字のみ。
static PRICE_ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\+([0-9\x{0E50}-\x{0E59},]+)\s*THB").expect("price annotation pattern is valid")
});

/// 設定テキストを選択肢のリストに変換
///
/// 空・空白だけの入力は空のリストになります。選択肢のIDは`"1"`から順に振られ、
/// 呼び出しごとにリセットされます。
pub fn parse_configuration_text(text: Option<&str>) -> Vec<ConfigurationItem> {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Vec::new(),
    };

    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with('-'))
        .enumerate()
        .map(|(index, line)| {
            let (value, additional_price) = split_price(strip_marker(line));
            ConfigurationItem {
                id: (index + 1).to_string(),
                value,
                additional_price,
            }
        })
        .collect()
}

/// 先頭の`-`と空白を除去
fn strip_marker(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == '-' || c == ' ').trim()
}

/// 表示テキストと追加料金に分割
///
/// 最初に見つかった表記の金額を採用し、表記はすべて除去します。
fn split_price(line: &str) -> (String, i64) {
    match PRICE_ANNOTATION.captures(line) {
        Some(caps) => {
            let price = caps
                .get(1)
                .and_then(|m| parse_integer_text(m.as_str()))
                .unwrap_or(0);
            let value = PRICE_ANNOTATION.replace_all(line, "").trim().to_string();
            (value, price)
        }
        None => (line.to_string(), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, value: &str, additional_price: i64) -> ConfigurationItem {
        ConfigurationItem {
            id: id.to_string(),
            value: value.to_string(),
            additional_price,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_configuration_text(None).is_empty());
        assert!(parse_configuration_text(Some("")).is_empty());
        assert!(parse_configuration_text(Some("  \n \t")).is_empty());
    }

    #[test]
    fn test_area_sizes_with_price() {
        let text = "- 25 - 40 ตร.ม. (2 ชั่วโมง)\n- 40 - 60 ตร.ม. (3 ชั่วโมง) +250 THB";
        let items = parse_configuration_text(Some(text));
        assert_eq!(
            items,
            vec![
                item("1", "25 - 40 ตร.ม. (2 ชั่วโมง)", 0),
                item("2", "40 - 60 ตร.ม. (3 ชั่วโมง)", 250),
            ]
        );
    }

    #[test]
    fn test_header_line_is_ignored() {
        let text = "ขนาดพื้นที่\n- 25 - 40 ตร.ม. (2 ชั่วโมง)\n- 60 - 80 ตร.ม. (4 ชั่วโมง) +500 THB";
        let items = parse_configuration_text(Some(text));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[1], item("2", "60 - 80 ตร.ม. (4 ชั่วโมง)", 500));
    }

    #[test]
    fn test_thousands_separator() {
        let items = parse_configuration_text(Some("- ล้างแอร์ 2 เครื่อง +1,000 THB"));
        assert_eq!(items, vec![item("1", "ล้างแอร์ 2 เครื่อง", 1000)]);
    }

    #[test]
    fn test_thai_digit_price() {
        let items = parse_configuration_text(Some("- ตัวเลือก +๒๕๐ THB\n- เพิ่ม +๑,๐๐๐ THB"));
        assert_eq!(
            items,
            vec![item("1", "ตัวเลือก", 250), item("2", "เพิ่ม", 1000)]
        );
    }

    #[test]
    fn test_other_script_digits_stay_in_label() {
        let items = parse_configuration_text(Some("- ตัวเลือก +٢٥٠ THB"));
        assert_eq!(items, vec![item("1", "ตัวเลือก +٢٥٠ THB", 0)]);
    }

    #[test]
    fn test_case_insensitive_currency() {
        let items = parse_configuration_text(Some("- Extra +300thb\n- More +50 Thb"));
        assert_eq!(items[0], item("1", "Extra", 300));
        assert_eq!(items[1], item("2", "More", 50));
    }

    #[test]
    fn test_bare_dash_yields_empty_value() {
        let items = parse_configuration_text(Some("-\n- ok"));
        assert_eq!(items, vec![item("1", "", 0), item("2", "ok", 0)]);
    }

    #[test]
    fn test_indented_lines_and_crlf() {
        let items = parse_configuration_text(Some("Title\r\n   - first\r\n\t- second +20 THB\r\n"));
        assert_eq!(items, vec![item("1", "first", 0), item("2", "second", 20)]);
    }

    #[test]
    fn test_annotation_in_middle_of_line() {
        let items = parse_configuration_text(Some("- Deep clean +250 THB (weekend)"));
        assert_eq!(items, vec![item("1", "Deep clean  (weekend)", 250)]);
    }

    #[test]
    fn test_ids_restart_per_call() {
        let first = parse_configuration_text(Some("- a\n- b"));
        let second = parse_configuration_text(Some("- c"));
        assert_eq!(first[1].id, "2");
        assert_eq!(second[0].id, "1");
    }

    #[test]
    fn test_unparseable_price_keeps_zero() {
        let items = parse_configuration_text(Some("- Huge +99999999999999999999 THB"));
        assert_eq!(items, vec![item("1", "Huge", 0)]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // `-`で始まる行がなければ、常に空のリスト
            #[test]
            fn test_no_dash_lines_yield_nothing(lines in prop::collection::vec("[^-\\s][^\\n]{0,30}", 0..8)) {
                let text = lines.join("\n");
                prop_assert!(parse_configuration_text(Some(&text)).is_empty());
            }

            // IDは1から連番で、選択肢の数は`-`行の数と一致
            #[test]
            fn test_ids_are_sequential(values in prop::collection::vec("[a-zA-Z0-9 ]{0,20}", 1..10)) {
                let text: Vec<String> = values.iter().map(|v| format!("- {}", v)).collect();
                let items = parse_configuration_text(Some(&text.join("\n")));
                prop_assert_eq!(items.len(), values.len());
                for (i, item) in items.iter().enumerate() {
                    prop_assert_eq!(item.id.clone(), (i + 1).to_string());
                }
            }

            // 追加料金の表記は金額として取り出され、表示テキストに残らない
            #[test]
            fn test_price_is_extracted(price in 0i64..10_000_000, label in "[a-z]{1,12}") {
                let text = format!("- {} +{} THB", label, price);
                let items = parse_configuration_text(Some(&text));
                prop_assert_eq!(items.len(), 1);
                prop_assert_eq!(items[0].additional_price, price);
                prop_assert_eq!(items[0].value.clone(), label);
            }
        }
    }
}
