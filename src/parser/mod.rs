//! Parser Module
//!
//! calamineを使用したスプレッドシート読み込みの実装。
//! シートの使用範囲を読み込み、変換エンジンの入力テーブルを構築します。

mod workbook;

pub(crate) use workbook::WorkbookParser;
