//! Output Module
//!
//! 出力ドキュメントのJSONレンダリングと、カテゴリごとのファイル出力を提供するモジュール。
//!
//! JSONは2スペースのインデント、改行はLF、非ASCII文字はエスケープせずに出力し、
//! 末尾に改行を1つ付けます。

mod summary;
mod writers;

use serde::Serialize;
use std::io::Write;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::model::OutputDocument;

pub use summary::render_summary;
pub use writers::{BatchReport, BatchWriter, INDEX_FILE_NAME};

/// 値を整形済みJSONとして書き出す（末尾に改行）
pub(crate) fn render_json<T: Serialize + ?Sized, W: Write>(
    value: &T,
    mut writer: W,
) -> Result<(), CatalogError> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// 1カテゴリ分のドキュメントを書き出す
pub fn render_document<W: Write>(document: &OutputDocument, writer: W) -> Result<(), CatalogError> {
    render_json(document, writer)
}

/// カタログ全体をスラッグをキーとするJSONオブジェクトとして書き出す
pub fn render_catalog<W: Write>(catalog: &Catalog, writer: W) -> Result<(), CatalogError> {
    render_json(catalog, writer)
}

/// 1カテゴリ分のドキュメントをJSON文字列に変換
pub fn document_to_string(document: &OutputDocument) -> Result<String, CatalogError> {
    let mut buffer = Vec::new();
    render_document(document, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| CatalogError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
