//! Builder Module
//!
//! Fluent Builder APIを提供し、`Converter`インスタンスを段階的に構築する。

use std::io::{Read, Write};

use crate::api::{DocumentFormat, SheetSelector};
use crate::assembler::assemble_document;
use crate::catalog::{Catalog, CatalogEntry};
use crate::error::CatalogError;
use crate::output::render_catalog;
use crate::parser::WorkbookParser;
use crate::partition::partition_table;
use crate::security::{SecurityConfig, DEFAULT_MAX_INPUT_SIZE};
use crate::types::Table;

/// サービス提供場所のデフォルト値
pub(crate) const DEFAULT_LOCATION_TYPE: &str = "AT_PIN";

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// 出力ドキュメントの形式
    pub document_format: DocumentFormat,

    /// ヘッダー行のインデックス（使用範囲の先頭から0始まり）
    pub header_row: usize,

    /// サービス提供場所が空の場合に使う値
    pub default_location_type: String,

    /// 入力の最大サイズ（バイト）
    pub max_input_size: u64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::default(),
            document_format: DocumentFormat::default(),
            header_row: 0,
            default_location_type: DEFAULT_LOCATION_TYPE.to_string(),
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Converter`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみをオーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use catalogzero::{ConverterBuilder, DocumentFormat, SheetSelector};
///
/// # fn main() -> Result<(), catalogzero::CatalogError> {
/// let converter = ConverterBuilder::new()
///     .with_sheet_selector(SheetSelector::Name("Mint".to_string()))
///     .with_document_format(DocumentFormat::Simplified)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConverterBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 最初のシート
    /// - ドキュメント形式: INLINE
    /// - ヘッダー行: 0
    /// - サービス提供場所のデフォルト: `AT_PIN`
    /// - 入力サイズ上限: 100MB
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// カタログが記載されたシートを選択する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use catalogzero::{ConverterBuilder, SheetSelector};
    ///
    /// let builder = ConverterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Index(1));
    /// ```
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// 出力ドキュメントの形式を指定する
    pub fn with_document_format(mut self, format: DocumentFormat) -> Self {
        self.config.document_format = format;
        self
    }

    /// ヘッダー行の位置を指定する
    ///
    /// ヘッダーの上にタイトル行などがあるワークブックで使用します。
    /// インデックスはシートの使用範囲の先頭行から数えます。
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use catalogzero::ConverterBuilder;
    ///
    /// // 1行目はタイトル、2行目がヘッダー
    /// let builder = ConverterBuilder::new().with_header_row(1);
    /// ```
    pub fn with_header_row(mut self, row: usize) -> Self {
        self.config.header_row = row;
        self
    }

    /// サービス提供場所が空のパッケージに使う値を指定する
    ///
    /// # 制約
    ///
    /// * 空白だけの値は`build()`時に`CatalogError::Config`になる
    pub fn with_default_location_type(mut self, location_type: impl Into<String>) -> Self {
        self.config.default_location_type = location_type.into();
        self
    }

    /// 入力の最大サイズ（バイト）を指定する
    ///
    /// # 制約
    ///
    /// * `0`は`build()`時に`CatalogError::Config`になる
    pub fn with_max_input_size(mut self, bytes: u64) -> Self {
        self.config.max_input_size = bytes;
        self
    }

    /// 設定を検証し、`Converter`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Converter)`: 設定が有効な場合
    /// * `Err(CatalogError::Config)`: 設定が無効な場合
    pub fn build(mut self) -> Result<Converter, CatalogError> {
        // 1. サービス提供場所のデフォルト値
        let location_type = self.config.default_location_type.trim();
        if location_type.is_empty() {
            return Err(CatalogError::Config(
                "Default service location type must not be empty".to_string(),
            ));
        }
        self.config.default_location_type = location_type.to_string();

        // 2. 入力サイズ上限
        if self.config.max_input_size == 0 {
            return Err(CatalogError::Config(
                "Maximum input size must be greater than 0".to_string(),
            ));
        }

        Ok(Converter::new(self.config))
    }
}

/// 変換処理のファサード
///
/// ワークブック（またはプログラムで組み立てた`Table`）をカテゴリごとの
/// サービス定義ドキュメントに変換するためのメインエントリーポイントです。
/// 変換呼び出しは互いに独立しており、状態を持ち越しません。
///
/// # 使用例
///
/// ```rust,no_run
/// use catalogzero::ConverterBuilder;
/// use std::fs::File;
///
/// # fn main() -> Result<(), catalogzero::CatalogError> {
/// let converter = ConverterBuilder::new().build()?;
/// let catalog = converter.convert(File::open("catalog.xlsx")?)?;
/// for summary in catalog.summaries() {
///     println!("{}: {} packages", summary.slug, summary.packages);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    /// 変換設定
    config: ConversionConfig,
}

impl Converter {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// 出力ドキュメントの形式
    pub fn document_format(&self) -> DocumentFormat {
        self.config.document_format
    }

    /// ワークブックを読み込み、カタログに変換
    ///
    /// # 引数
    ///
    /// * `input` - ワークブック（XLSX / XLS / XLSB / ODS）のバイト列を読み込むためのリーダー
    ///
    /// # 戻り値
    ///
    /// * `Ok(Catalog)` - カテゴリごとのドキュメント
    /// * `Err(CatalogError)` - 読み込み、シート選択、構造検証のいずれかに失敗した場合
    ///
    /// # 処理フロー
    ///
    /// 1. ワークブックを開く（サイズ上限を検証）
    /// 2. シート選択
    /// 3. ヘッダー行以降をテーブルとして読み込む
    /// 4. テーブルを変換（`convert_table`）
    pub fn convert<R: Read>(&self, input: R) -> Result<Catalog, CatalogError> {
        let security = SecurityConfig {
            max_input_file_size: self.config.max_input_size,
        };
        let mut parser = WorkbookParser::open(input, &security)?;
        let sheet_name = parser.select_sheet(&self.config.sheet_selector)?;
        let table = parser.read_table(&sheet_name, self.config.header_row)?;

        self.convert_table(&table)
    }

    /// テーブルをカタログに変換
    ///
    /// 入出力を伴わない純粋な変換です。同じテーブルからは常に同じカタログが得られます。
    ///
    /// # 戻り値
    ///
    /// * `Err(CatalogError::MissingColumn)` - 必須列が欠けている場合
    pub fn convert_table(&self, table: &Table) -> Result<Catalog, CatalogError> {
        let entries = partition_table(table, &self.config.default_location_type)?
            .into_iter()
            .map(|group| CatalogEntry {
                category_name: group.name.clone(),
                thai_name: group.thai_name.clone(),
                document: assemble_document(group, self.config.document_format),
            })
            .collect();

        Ok(Catalog::new(entries))
    }

    /// ワークブックを変換し、スラッグをキーとするJSONオブジェクトとして書き出す
    pub fn convert_to_writer<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<(), CatalogError> {
        let catalog = self.convert(input)?;
        render_catalog(&catalog, output)
    }

    /// ワークブックを変換し、JSON文字列として取得
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use std::fs::File;
    /// use catalogzero::ConverterBuilder;
    ///
    /// # fn main() -> Result<(), catalogzero::CatalogError> {
    /// let converter = ConverterBuilder::new().build()?;
    /// let json = converter.convert_to_string(File::open("catalog.xlsx")?)?;
    /// println!("{}", json);
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert_to_string<R: Read>(&self, input: R) -> Result<String, CatalogError> {
        let mut buffer = Vec::new();
        self.convert_to_writer(input, &mut buffer)?;

        let result = String::from_utf8(buffer).map_err(|e| {
            CatalogError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellValue;

    fn cleaning_table() -> Table {
        Table::new(
            vec![
                "Category slug".to_string(),
                "Category".to_string(),
                "Package Name".to_string(),
                "Package Id".to_string(),
                "Starting price".to_string(),
            ],
            vec![vec![
                "cleaning".into(),
                "Cleaning".into(),
                "Basic Clean".into(),
                "cleaning-001".into(),
                CellValue::Number(500.0),
            ]],
        )
    }

    #[test]
    fn test_converter_builder_new() {
        let builder = ConverterBuilder::new();
        assert_eq!(builder.config.sheet_selector, SheetSelector::Index(0));
        assert_eq!(builder.config.document_format, DocumentFormat::Inline);
        assert_eq!(builder.config.header_row, 0);
        assert_eq!(builder.config.default_location_type, "AT_PIN");
        assert_eq!(builder.config.max_input_size, 104_857_600);
    }

    #[test]
    fn test_builder_method_chaining() {
        let builder = ConverterBuilder::new()
            .with_sheet_selector(SheetSelector::Name("Mint".to_string()))
            .with_document_format(DocumentFormat::Simplified)
            .with_header_row(2)
            .with_default_location_type("AT_STORE")
            .with_max_input_size(1024);

        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Name(ref name) if name == "Mint"
        ));
        assert_eq!(builder.config.document_format, DocumentFormat::Simplified);
        assert_eq!(builder.config.header_row, 2);
        assert_eq!(builder.config.default_location_type, "AT_STORE");
        assert_eq!(builder.config.max_input_size, 1024);
    }

    #[test]
    fn test_build_success() {
        let converter = ConverterBuilder::new()
            .with_default_location_type(" ONLINE ")
            .build()
            .unwrap();
        assert_eq!(converter.config.default_location_type, "ONLINE");
    }

    #[test]
    fn test_build_with_empty_location_type() {
        match ConverterBuilder::new().with_default_location_type("  ").build() {
            Err(CatalogError::Config(msg)) => assert!(msg.contains("location type")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_build_with_zero_input_size() {
        match ConverterBuilder::new().with_max_input_size(0).build() {
            Err(CatalogError::Config(msg)) => assert!(msg.contains("input size")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_table() {
        let converter = ConverterBuilder::new().build().unwrap();
        let catalog = converter.convert_table(&cleaning_table()).unwrap();

        assert_eq!(catalog.len(), 1);
        let doc = catalog.get("cleaning").unwrap();
        assert_eq!(doc.packages.len(), 1);
        assert_eq!(doc.packages[0].base_price, 500);
        assert!(doc.packages[0].configurations.is_empty());
    }

    #[test]
    fn test_convert_table_uses_default_location_type() {
        let converter = ConverterBuilder::new()
            .with_default_location_type("AT_STORE")
            .build()
            .unwrap();
        let catalog = converter.convert_table(&cleaning_table()).unwrap();
        let doc = catalog.get("cleaning").unwrap();
        assert_eq!(doc.service_location_types, vec!["AT_STORE"]);
        assert_eq!(
            doc.components.location_box.default_service_location_type,
            "AT_STORE"
        );
    }

    #[test]
    fn test_convert_table_is_deterministic() {
        let converter = ConverterBuilder::new().build().unwrap();
        let table = cleaning_table();
        let first = serde_json::to_string(&converter.convert_table(&table).unwrap()).unwrap();
        let second = serde_json::to_string(&converter.convert_table(&table).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_convert_with_invalid_input() {
        let converter = ConverterBuilder::new().build().unwrap();
        let result = converter.convert(std::io::Cursor::new(Vec::<u8>::new()));
        assert!(result.is_err());
    }

    #[test]
    fn test_convert_rejects_oversized_input() {
        let converter = ConverterBuilder::new().with_max_input_size(8).build().unwrap();
        let result = converter.convert(std::io::Cursor::new(vec![0u8; 64]));
        assert!(matches!(result, Err(CatalogError::SecurityViolation(_))));
    }

    #[test]
    fn test_converter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }
}
