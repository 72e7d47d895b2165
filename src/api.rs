//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// 出力ドキュメントの形式
///
/// 同じカタログデータから、テキスト項目の表現だけが異なる2種類の
/// ドキュメントを生成できます。選択は設定で行い、データ内容には依存しません。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum DocumentFormat {
    /// テキスト項目をタイ語・英語のペア（INLINE）で出力（デフォルト）
    ///
    /// # 出力例
    ///
    /// ```json
    /// {
    ///   "title": {
    ///     "kind": "INLINE",
    ///     "values": { "en": "Cleaning", "th": "ทำความสะอาด" }
    ///   }
    /// }
    /// ```
    #[default]
    Inline,

    /// テキスト項目をタイ語の文字列のまま出力
    ///
    /// 共通コンポーネント（バナー、バッジなど）は引き続きI18Nキー参照で出力します。
    ///
    /// # 出力例
    ///
    /// ```json
    /// { "title": "ทำความสะอาด" }
    /// ```
    Simplified,
}

impl DocumentFormat {
    /// 名前から形式を取得（大文字小文字を区別しない）
    ///
    /// `"inline"` / `"simplified"` を受け付けます。
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "inline" => Some(DocumentFormat::Inline),
            "simplified" | "simple" => Some(DocumentFormat::Simplified),
            _ => None,
        }
    }
}

/// シート選択方式
///
/// カタログが記載されたシートを選択する方法を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// インデックス指定（0始まり）
    ///
    /// 例: `SheetSelector::Index(0)` は最初のシートを選択（デフォルト）
    Index(usize),

    /// シート名指定
    ///
    /// 例: `SheetSelector::Name("Mint".to_string())`
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}
