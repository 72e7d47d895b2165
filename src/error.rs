//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// catalogzeroクレート全体で使用するエラー型
///
/// ワークブックの読み込み、テーブルの構造検証、JSON出力の各段階で発生する
/// 致命的なエラーを統一的に扱います。
///
/// 行単位の欠損（パッケージ名やIDが空、数値が不正など）はエラーにならず、
/// 変換エンジン内でデフォルト値の適用またはスキップとして処理されます。
/// このエラー型に現れるのは、変換全体を中断すべき問題だけです。
///
/// # 使用例
///
/// ```rust,no_run
/// use catalogzero::CatalogError;
/// use std::fs::File;
///
/// fn open_catalog(path: &str) -> Result<File, CatalogError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     Ok(file)
/// }
/// ```
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// スプレッドシートの解析中に発生したエラー（calamine由来）
    #[error("Failed to parse spreadsheet: {0}")]
    Parse(#[from] calamine::Error),

    /// JSONのシリアライズ・デシリアライズ中に発生したエラー
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ConverterBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。
    ///
    /// # 例
    ///
    /// ```rust,no_run
    /// use catalogzero::{CatalogError, ConverterBuilder};
    ///
    /// let result = ConverterBuilder::new()
    ///     .with_default_location_type("")
    ///     .build();
    ///
    /// match result {
    ///     Err(CatalogError::Config(msg)) => println!("設定エラー: {}", msg),
    ///     _ => {}
    /// }
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// ヘッダー行が存在しない、または空である
    #[error("Missing header row: {0}")]
    MissingHeader(String),

    /// 変換に必須の列がヘッダーに存在しない
    #[error("Missing required column '{column}'")]
    MissingColumn {
        /// 見つからなかった列名
        column: String,
    },

    /// 指定されたシートが見つからない
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力サイズの上限超過や、出力ファイル名として安全でないスラッグなど。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}
