//! Formatter Module
//!
//! calamineのセル値を変換エンジンのセル値（`CellValue`）に変換するモジュール。
//! 日付セルはISO 8601形式（YYYY-MM-DD）の文字列として扱います。

use std::borrow::Cow;

use calamine::Data;
use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::CatalogError;
use crate::types::CellValue;

/// セルフォーマッター
///
/// calamineの`Data`から`CellValue`への変換のファサードとして機能します。
#[derive(Debug, Default)]
pub(crate) struct CellFormatter {
    /// 日付フォーマッター
    date_formatter: DateFormatter,
}

impl CellFormatter {
    /// 新しいCellFormatterインスタンスを生成
    pub fn new() -> Self {
        Self {
            date_formatter: DateFormatter,
        }
    }

    /// セル値を変換
    ///
    /// エラー値（`#N/A`など）は空セルとして扱います。
    pub fn format_cell(&self, cell: &Data) -> Result<CellValue, CatalogError> {
        let value = match cell {
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::String(decode_ooxml_escapes(s).into_owned()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::String(self.date_formatter.format(dt.as_f64())?),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
            // Data::Error / Data::Empty
            _ => CellValue::Empty,
        };
        Ok(value)
    }

    /// 1行分のセル値を変換
    pub fn format_row(&self, row: &[Data]) -> Result<Vec<CellValue>, CatalogError> {
        row.iter().map(|cell| self.format_cell(cell)).collect()
    }
}

/// OOXMLの文字エスケープ（`_x000D_`など）
static OOXML_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_x([0-9A-Fa-f]{4})_").expect("ooxml escape pattern is valid"));

/// 共有文字列中の`_xHHHH_`を元の文字に戻す
///
/// calamineはこのエスケープを解除しないため、CRを含むセルは`_x000D_`のまま届きます。
/// `_x005F_`は`_`になるので、`_x005F_x000D_`はリテラルの`_x000D_`として残ります。
/// 文字として不正なコード（サロゲートなど）はそのまま残します。
fn decode_ooxml_escapes(text: &str) -> Cow<'_, str> {
    if !text.contains("_x") {
        return Cow::Borrowed(text);
    }
    OOXML_ESCAPE.replace_all(text, |caps: &Captures<'_>| {
        u32::from_str_radix(&caps[1], 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    })
}

/// 日付フォーマッター
///
/// Excelのシリアル日付値をISO 8601形式の文字列に変換します。
/// 1900年エポック（1899年12月30日起算）として処理します。
#[derive(Debug, Default)]
pub(crate) struct DateFormatter;

impl DateFormatter {
    /// シリアル日付値をフォーマット
    ///
    /// 時刻部分は切り捨てます。
    pub fn format(&self, serial_value: f64) -> Result<String, CatalogError> {
        let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
            .ok_or_else(|| CatalogError::Config("Invalid epoch date".to_string()))?;

        let days = serial_value.floor() as i64;
        let date = epoch
            .checked_add_signed(Duration::days(days))
            .ok_or_else(|| {
                CatalogError::Config(format!(
                    "Date calculation overflow: serial_value={}",
                    serial_value
                ))
            })?;

        Ok(date.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cell_scalars() {
        let formatter = CellFormatter::new();
        assert_eq!(
            formatter.format_cell(&Data::Int(7)).unwrap(),
            CellValue::Number(7.0)
        );
        assert_eq!(
            formatter.format_cell(&Data::Float(12.5)).unwrap(),
            CellValue::Number(12.5)
        );
        assert_eq!(
            formatter
                .format_cell(&Data::String("ทำความสะอาด".to_string()))
                .unwrap(),
            CellValue::String("ทำความสะอาด".to_string())
        );
        assert_eq!(
            formatter.format_cell(&Data::Bool(false)).unwrap(),
            CellValue::Bool(false)
        );
        assert_eq!(formatter.format_cell(&Data::Empty).unwrap(), CellValue::Empty);
    }

    #[test]
    fn test_format_cell_error_is_empty() {
        let formatter = CellFormatter::new();
        let cell = Data::Error(calamine::CellErrorType::NA);
        assert_eq!(formatter.format_cell(&cell).unwrap(), CellValue::Empty);
    }

    #[test]
    fn test_format_row() {
        let formatter = CellFormatter::new();
        let row = vec![Data::String("a".to_string()), Data::Empty, Data::Float(3.0)];
        let values = formatter.format_row(&row).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[2].as_text(), Some("3".to_string()));
    }

    #[test]
    fn test_format_cell_decodes_carriage_return() {
        let formatter = CellFormatter::new();
        let cell = Data::String("ความยาวผม_x000D_\n- สั้น_x000D_\n- ยาว +200 THB".to_string());
        assert_eq!(
            formatter.format_cell(&cell).unwrap(),
            CellValue::String("ความยาวผม\r\n- สั้น\r\n- ยาว +200 THB".to_string())
        );
    }

    #[test]
    fn test_decode_ooxml_escapes() {
        assert_eq!(decode_ooxml_escapes("a_x0009_b"), "a\tb");
        assert_eq!(decode_ooxml_escapes("_x000d_"), "\r");
        // エスケープされたアンダースコア
        assert_eq!(decode_ooxml_escapes("_x005F_x000D_"), "_x000D_");
        // 不正なコード・形式違いはそのまま
        assert_eq!(decode_ooxml_escapes("_xD800_"), "_xD800_");
        assert_eq!(decode_ooxml_escapes("_x00zz_ _x41"), "_x00zz_ _x41");
        assert!(matches!(decode_ooxml_escapes("plain_text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_date_formatter() {
        let formatter = DateFormatter;
        // 2026-01-15 = シリアル値 46037
        assert_eq!(formatter.format(46037.0).unwrap(), "2026-01-15");
        // 時刻部分は切り捨て
        assert_eq!(formatter.format(46037.75).unwrap(), "2026-01-15");
        assert_eq!(formatter.format(1.0).unwrap(), "1899-12-31");
    }
}
