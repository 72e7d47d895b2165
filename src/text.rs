//! Text Wrapper / Reference Builder
//!
//! 出力ドキュメント内のテキスト値を表現するモジュール。
//!
//! - インラインテキスト: タイ語と英語のペア（`kind: "INLINE"`）
//! - シンボリック参照: 下流システムが解決する翻訳キー（`kind: "I18N"`）
//! - 素の文字列

use serde::{Deserialize, Serialize};

use crate::api::DocumentFormat;

/// テキスト値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Text {
    /// タイ語・英語のペア
    Inline(InlineText),

    /// 翻訳キーへの参照
    Reference(TextReference),

    /// 素の文字列
    Plain(String),
}

impl Text {
    /// インラインテキストを生成
    ///
    /// 英語が空の場合はタイ語を英語側にも複製します。
    pub fn inline(th: impl Into<String>, en: impl Into<String>) -> Self {
        let th = th.into();
        let en = en.into();
        let en = if en.is_empty() { th.clone() } else { en };
        Text::Inline(InlineText {
            kind: InlineKind::Inline,
            values: LocalizedValues { en, th },
        })
    }

    /// 翻訳キー参照を生成（キーは解決しない）
    pub fn i18n(key: impl Into<String>) -> Self {
        Text::Reference(TextReference {
            key: key.into(),
            kind: ReferenceKind::I18n,
        })
    }

    /// 素の文字列を生成
    pub fn plain(value: impl Into<String>) -> Self {
        Text::Plain(value.into())
    }

    /// ドキュメント形式に応じてローカルなテキストを表現
    ///
    /// * `Inline` - タイ語・英語のペア
    /// * `Simplified` - タイ語の文字列のまま
    pub fn localized(format: DocumentFormat, th: impl Into<String>, en: impl Into<String>) -> Self {
        match format {
            DocumentFormat::Inline => Text::inline(th, en),
            DocumentFormat::Simplified => Text::plain(th),
        }
    }
}

/// インラインテキスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineText {
    pub kind: InlineKind,
    pub values: LocalizedValues,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineKind {
    #[serde(rename = "INLINE")]
    Inline,
}

/// 言語ごとの値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedValues {
    pub en: String,
    pub th: String,
}

/// 翻訳キー参照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextReference {
    pub key: String,
    pub kind: ReferenceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceKind {
    #[serde(rename = "I18N")]
    I18n,
}
