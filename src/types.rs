//! Types Module
//!
//! 変換エンジンの入力となるテーブル・行・セル値の型を定義するモジュール。

use std::collections::HashMap;

use crate::error::CatalogError;

/// 入力テーブルで参照する論理列名
///
/// ヘッダーの列名は前後の空白を除去したうえで、大文字小文字を区別して照合します。
pub mod columns {
    pub const CATEGORY_SLUG: &str = "Category slug";
    pub const CATEGORY: &str = "Category";
    pub const PACKAGE_NAME: &str = "Package Name";
    pub const PACKAGE_ID: &str = "Package Id";
    pub const PACKAGE_DESCRIPTION: &str = "Package Description";
    pub const STARTING_PRICE: &str = "Starting price";
    pub const QUANTITY_MIN: &str = "min";
    pub const QUANTITY_MAX: &str = "max";
    pub const QUANTITY_PLACEHOLDER: &str = "quantity.placeholder";
    pub const CONFIGURATION_TYPE: &str = "Configurations.type";
    pub const CONFIGURATION_TITLE: &str = "Configurations.title";
    pub const CONFIGURATION_ID: &str = "Configurations.id";
    pub const CONFIGURATION_TEXT: &str = "Package Detail selection ( Configuration )";
    pub const NOTE_PLACEHOLDER: &str = "other text field - placeholder";
    pub const SERVICE_LOCATION_TYPES: &str = "service_location_types";
    pub const CART_LIMIT: &str = "Cart limit";

    /// 列が欠けているとテーブル全体を変換できない列
    pub const REQUIRED: [&str; 4] = [CATEGORY_SLUG, CATEGORY, PACKAGE_NAME, PACKAGE_ID];

    /// タイ語サブカテゴリ列の判定（`*subcat*thai*`、大文字小文字を区別しない）
    pub fn is_thai_subcategory(name: &str) -> bool {
        let lower = name.to_lowercase();
        lower.contains("subcat") && lower.contains("thai")
    }
}

/// セルの値を表す列挙型
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 数値（f64）
    Number(f64),

    /// 文字列
    String(String),

    /// 論理値
    Bool(bool),

    /// 空セル
    Empty,
}

impl CellValue {
    /// 値が空かどうかを判定
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// 値が空、または空白だけの文字列かどうかを判定
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// 値をテキストとして取得
    ///
    /// 空セルは`None`。整数値の数値は小数点なしで表現します（`500.0` → `"500"`）。
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Number(n) => Some(format_number(*n)),
            CellValue::String(s) => Some(s.clone()),
            CellValue::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
            CellValue::Empty => None,
        }
    }

    /// 値を整数として解釈
    ///
    /// 文字列の場合は桁区切りのカンマを除去してから解釈します（`"1,500"` → `1500`）。
    /// 小数は切り捨てます。解釈できない場合は`None`。
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Number(n) => float_to_integer(*n),
            CellValue::String(s) => parse_integer_text(s),
            CellValue::Bool(_) | CellValue::Empty => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::String(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn float_to_integer(n: f64) -> Option<i64> {
    if n.is_finite() && n.abs() < 9.0e18 {
        Some(n.trunc() as i64)
    } else {
        None
    }
}

/// タイ数字（๐〜๙）をASCII数字に変換
fn ascii_digit(c: char) -> char {
    match c {
        '\u{0E50}'..='\u{0E59}' => {
            char::from_u32(u32::from(c) - 0x0E50 + u32::from('0')).unwrap_or(c)
        }
        _ => c,
    }
}

/// 桁区切り付きの数値文字列を整数に変換
///
/// タイ数字も受け付けます。
pub(crate) fn parse_integer_text(text: &str) -> Option<i64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .map(ascii_digit)
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .parse::<i64>()
        .ok()
        .or_else(|| cleaned.parse::<f64>().ok().and_then(float_to_integer))
}

/// 変換エンジンの入力テーブル
///
/// 列名のリストと、列順に並んだセル値の行からなります。
/// 変換中は読み取り専用として扱われます。
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// 列名とデータ行からテーブルを生成
    ///
    /// 列名は前後の空白を除去します。同名の列が複数ある場合は最初の列が参照されます。
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let columns: Vec<String> = columns.into_iter().map(|c| c.trim().to_string()).collect();
        let mut index = HashMap::new();
        for (i, name) in columns.iter().enumerate() {
            if !name.is_empty() {
                index.entry(name.clone()).or_insert(i);
            }
        }
        Self {
            columns,
            index,
            rows,
        }
    }

    /// 生の行データからテーブルを生成（最初の行をヘッダーとして扱う）
    ///
    /// # 戻り値
    ///
    /// * `Err(CatalogError::MissingHeader)` - 行が1つもない、またはヘッダー行が空の場合
    pub fn from_rows(mut rows: Vec<Vec<CellValue>>) -> Result<Self, CatalogError> {
        if rows.is_empty() {
            return Err(CatalogError::MissingHeader(
                "table has no rows".to_string(),
            ));
        }
        let header = rows.remove(0);
        if header.iter().all(CellValue::is_blank) {
            return Err(CatalogError::MissingHeader(
                "header row is empty".to_string(),
            ));
        }
        let columns = header
            .iter()
            .map(|cell| cell.as_text().unwrap_or_default())
            .collect();
        Ok(Self::new(columns, rows))
    }

    /// 列名のリスト（ヘッダー順）
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 列名から列インデックスを取得
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// 条件に一致する最初の列名を取得（ヘッダー順）
    pub fn find_column<P: Fn(&str) -> bool>(&self, predicate: P) -> Option<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .find(|name| predicate(name))
    }

    /// データ行の数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// データ行が存在しないかどうか
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// データ行を順に走査
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |values| Row {
            table: self,
            values,
        })
    }

    /// 必須列がすべて存在することを検証
    pub(crate) fn require_columns(&self, required: &[&str]) -> Result<(), CatalogError> {
        match required.iter().find(|name| self.column_index(name).is_none()) {
            Some(missing) => Err(CatalogError::MissingColumn {
                column: missing.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// テーブルの1行への参照
///
/// 列名でセル値を参照します。存在しない列や行の長さを超える列は空セルとして扱います。
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    values: &'a [CellValue],
}

impl<'a> Row<'a> {
    /// 列名でセル値を取得（空セルは`None`）
    pub fn get(&self, column: &str) -> Option<&'a CellValue> {
        self.table
            .column_index(column)
            .and_then(|i| self.values.get(i))
            .filter(|value| !value.is_empty())
    }

    /// セル値をテキストとして取得（空白の除去なし）
    pub fn text(&self, column: &str) -> Option<String> {
        self.get(column).and_then(CellValue::as_text)
    }

    /// 前後の空白を除去したテキストを取得（空文字列は`None`）
    pub fn trimmed(&self, column: &str) -> Option<String> {
        self.text(column)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// セル値を整数として取得
    pub fn integer(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(CellValue::as_integer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::from_rows(vec![
            vec![" Category slug ".into(), "Package Id".into(), "Starting price".into()],
            vec!["cleaning".into(), "cleaning-001".into(), "1,500".into()],
            vec![CellValue::Empty, 42.0.into()],
        ])
        .unwrap()
    }

    #[test]
    fn test_cell_value_is_blank() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::String("  ".to_string()).is_blank());
        assert!(!CellValue::String("x".to_string()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_cell_value_as_text() {
        assert_eq!(CellValue::Empty.as_text(), None);
        assert_eq!(CellValue::Number(500.0).as_text(), Some("500".to_string()));
        assert_eq!(CellValue::Number(42.5).as_text(), Some("42.5".to_string()));
        assert_eq!(CellValue::Bool(true).as_text(), Some("TRUE".to_string()));
    }

    #[test]
    fn test_cell_value_as_integer() {
        assert_eq!(CellValue::Number(500.0).as_integer(), Some(500));
        assert_eq!(CellValue::Number(99.9).as_integer(), Some(99));
        assert_eq!(CellValue::from("1,000").as_integer(), Some(1000));
        assert_eq!(CellValue::from(" 250 ").as_integer(), Some(250));
        assert_eq!(CellValue::from("12.0").as_integer(), Some(12));
        assert_eq!(CellValue::from("ฟรี").as_integer(), None);
        assert_eq!(CellValue::from("๑,๕๐๐").as_integer(), Some(1500));
        assert_eq!(CellValue::from("٢٥٠").as_integer(), None);
        assert_eq!(CellValue::from("").as_integer(), None);
        assert_eq!(CellValue::Number(f64::NAN).as_integer(), None);
        assert_eq!(CellValue::Empty.as_integer(), None);
    }

    #[test]
    fn test_table_trims_column_names() {
        let table = sample_table();
        assert_eq!(table.columns()[0], "Category slug");
        assert_eq!(table.column_index("Category slug"), Some(0));
        assert_eq!(table.column_index("category slug"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_table_from_rows_without_header() {
        assert!(matches!(
            Table::from_rows(vec![]),
            Err(CatalogError::MissingHeader(_))
        ));
        assert!(matches!(
            Table::from_rows(vec![vec![CellValue::Empty, "".into()]]),
            Err(CatalogError::MissingHeader(_))
        ));
    }

    #[test]
    fn test_require_columns() {
        let table = sample_table();
        assert!(table.require_columns(&["Package Id"]).is_ok());
        match table.require_columns(&["Package Id", "Category"]) {
            Err(CatalogError::MissingColumn { column }) => assert_eq!(column, "Category"),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_row_accessors() {
        let table = sample_table();
        let rows: Vec<Row<'_>> = table.rows().collect();

        assert_eq!(rows[0].trimmed("Category slug"), Some("cleaning".to_string()));
        assert_eq!(rows[0].integer("Starting price"), Some(1500));
        assert_eq!(rows[0].get("Unknown column"), None);

        // 短い行・空セル・数値セル
        assert_eq!(rows[1].get("Category slug"), None);
        assert_eq!(rows[1].text("Package Id"), Some("42".to_string()));
        assert_eq!(rows[1].get("Starting price"), None);
    }

    #[test]
    fn test_find_column() {
        let table = Table::new(
            vec!["Category".to_string(), "Subcat Thai ".to_string()],
            vec![],
        );
        assert_eq!(
            table.find_column(columns::is_thai_subcategory),
            Some("Subcat Thai")
        );
    }
}
