//! Workbook Parser
//!
//! calamineのラッパーとして、ワークブックからカタログテーブルを読み込みます。

use calamine::{open_workbook_auto_from_rs, Reader, Sheets};
use std::io::{Cursor, Read};
use tracing::debug;

use crate::api::SheetSelector;
use crate::error::CatalogError;
use crate::formatter::CellFormatter;
use crate::security::SecurityConfig;
use crate::types::Table;

/// ワークブックパーサー
///
/// XLSX / XLS / XLSB / ODS をcalamineの自動判定で開きます。
pub(crate) struct WorkbookParser {
    /// calamineのワークブック（メモリ上のバッファから読み込み）
    workbook: Sheets<Cursor<Vec<u8>>>,

    /// セルフォーマッター
    formatter: CellFormatter,
}

impl WorkbookParser {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - ワークブックのバイト列を読み込むためのリーダー
    /// * `security` - 入力サイズの上限
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - 読み込みに成功した場合
    /// * `Err(CatalogError::SecurityViolation)` - 入力サイズが上限を超えた場合
    /// * `Err(CatalogError::Parse)` - スプレッドシートとして解釈できない場合
    pub fn open<R: Read>(reader: R, security: &SecurityConfig) -> Result<Self, CatalogError> {
        // 上限+1バイトまでしか読まない
        let mut buffer = Vec::new();
        let bytes_read = reader
            .take(security.max_input_file_size.saturating_add(1))
            .read_to_end(&mut buffer)?;
        security.check_input_size(bytes_read as u64)?;

        let workbook = open_workbook_auto_from_rs(Cursor::new(buffer))?;
        debug!(
            bytes = bytes_read,
            sheets = workbook.sheet_names().len(),
            "workbook opened"
        );

        Ok(Self {
            workbook,
            formatter: CellFormatter::new(),
        })
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// シート選択方式に基づいてシート名を解決
    ///
    /// # 戻り値
    ///
    /// * `Err(CatalogError::SheetNotFound)` - シートが存在しない、またはインデックスが範囲外の場合
    pub fn select_sheet(&self, selector: &SheetSelector) -> Result<String, CatalogError> {
        let names = self.sheet_names();

        match selector {
            SheetSelector::Index(index) => names.get(*index).cloned().ok_or_else(|| {
                CatalogError::SheetNotFound(format!(
                    "index {} is out of range (total: {})",
                    index,
                    names.len()
                ))
            }),
            SheetSelector::Name(name) => {
                if names.iter().any(|n| n == name) {
                    Ok(name.clone())
                } else {
                    Err(CatalogError::SheetNotFound(format!("'{}'", name)))
                }
            }
        }
    }

    /// シートを読み込み、テーブルを構築する
    ///
    /// # 引数
    ///
    /// * `sheet_name` - 読み込むシート名
    /// * `header_row` - ヘッダー行のインデックス（使用範囲の先頭行から数えた0始まり）。
    ///   これより上の行は読み飛ばします。
    ///
    /// # 戻り値
    ///
    /// * `Ok(Table)` - ヘッダー行以降を読み込んだテーブル
    /// * `Err(CatalogError::MissingHeader)` - ヘッダー行が存在しない、または空の場合
    pub fn read_table(&mut self, sheet_name: &str, header_row: usize) -> Result<Table, CatalogError> {
        let range = self.workbook.worksheet_range(sheet_name)?;
        let (height, width) = range.get_size();
        debug!(sheet = sheet_name, height, width, "sheet loaded");

        if header_row >= height {
            return Err(CatalogError::MissingHeader(format!(
                "sheet '{}' has {} rows, header row index is {}",
                sheet_name, height, header_row
            )));
        }

        let rows = range
            .rows()
            .skip(header_row)
            .map(|row| self.formatter.format_row(row))
            .collect::<Result<Vec<_>, _>>()?;

        Table::from_rows(rows)
    }
}

// テストは統合テスト（tests/）で実装します。
// 実際のスプレッドシートが必要なため、rust_xlsxwriterでフィクスチャを生成します。
