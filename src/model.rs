//! Document Model
//!
//! 出力ドキュメント（サービス定義）のデータ構造を定義するモジュール。
//! フィールド順はそのままJSONのキー順になります。

use serde::{Deserialize, Serialize};

use crate::text::Text;

/// 設定グループの種類
///
/// 入力は大文字小文字を区別せず、出力は大文字で表現します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigurationType {
    /// 設定なし（グループを生成しない）
    None,
    /// 単一選択
    Radio,
    /// 複数選択
    Checkbox,
    /// 日時範囲
    DateTimeRange,
}

impl ConfigurationType {
    /// セルの値から種類を取得（前後の空白と大文字小文字を無視）
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "NONE" => Some(ConfigurationType::None),
            "RADIO" => Some(ConfigurationType::Radio),
            "CHECKBOX" => Some(ConfigurationType::Checkbox),
            "DATE_TIME_RANGE" => Some(ConfigurationType::DateTimeRange),
            _ => None,
        }
    }

    /// 選択が必須かどうか（RADIOのみ）
    pub fn is_required(&self) -> bool {
        matches!(self, ConfigurationType::Radio)
    }
}

/// 設定グループ内の選択肢
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationItem {
    /// 1始まりの連番（文字列）
    pub id: String,
    /// 表示テキスト（追加料金の表記を除去済み）
    pub value: String,
    /// 追加料金（THB）
    pub additional_price: i64,
}

/// 設定グループ（ラジオボタン・チェックボックスなど）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationGroup {
    pub id: String,
    pub data: ConfigurationData,
    #[serde(rename = "type")]
    pub kind: ConfigurationType,
    pub title: String,
    pub validation: ConfigurationValidation,
    pub description: Option<Text>,
    pub default_value: Option<String>,
}

impl ConfigurationGroup {
    /// 設定グループを生成（`required`は種類から決まる）
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: ConfigurationType,
        items: Vec<ConfigurationItem>,
    ) -> Self {
        Self {
            id: id.into(),
            data: ConfigurationData { items },
            kind,
            title: title.into(),
            validation: ConfigurationValidation {
                required: kind.is_required(),
            },
            description: None,
            default_value: None,
        }
    }

    /// 選択肢のリスト
    pub fn items(&self) -> &[ConfigurationItem] {
        &self.data.items
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationData {
    pub items: Vec<ConfigurationItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationValidation {
    pub required: bool,
}

/// パッケージ（購入可能なサービス単位）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub note: PackageNote,
    pub image: PackageImage,
    pub title: Text,
    pub quantity: Quantity,
    pub base_price: i64,
    pub description: Text,
    pub configurations: Vec<ConfigurationGroup>,
}

/// 備考欄（プレースホルダーは形式によらず素の文字列）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageNote {
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageImage {
    pub cover: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    pub validation: QuantityValidation,
    pub placeholder: Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityValidation {
    pub max: i64,
    pub min: i64,
}

/// カテゴリごとの出力ドキュメント
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDocument {
    /// カテゴリスラッグ
    pub id: String,
    pub title: Text,
    pub packages: Vec<Package>,
    pub cart_limit: i64,
    pub components: Components,
    pub cover_image: String,
    pub service_location_types: Vec<String>,
}

impl OutputDocument {
    /// 設定グループを1つ以上持つパッケージの数
    pub fn packages_with_configurations(&self) -> usize {
        self.packages
            .iter()
            .filter(|p| !p.configurations.is_empty())
            .count()
    }

    /// 設定グループの総数
    pub fn configuration_count(&self) -> usize {
        self.packages.iter().map(|p| p.configurations.len()).sum()
    }
}

/// 画面コンポーネントの骨格
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    pub banner: Banner,
    pub info_badge: Vec<InfoBadge>,
    pub location_box: LocationBox,
    pub cashback_section: CashbackSection,
    pub summary_info_badge: Vec<InfoBadge>,
    pub summary_location_box: SummaryLocationBox,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub title: Text,
    pub button: BannerButton,
    pub subtitle: Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerButton {
    pub url: String,
    pub text: Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoBadge {
    pub icon: String,
    pub full_text: Text,
    pub more_content: Option<Text>,
    pub highlight_text: Text,
}

/// サービス提供場所の選択ボックス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationBox {
    pub text: LocationTexts,
    pub visible: bool,
    pub service_location_types: Vec<String>,
    pub default_service_location_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTexts {
    pub at_pin: LocationText,
    pub online: LocationText,
    pub at_store: LocationText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationText {
    pub description: Option<Text>,
    pub placeholder: Option<Text>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashbackSection {
    pub icon: String,
    pub full_text: Text,
    pub highlight_text: Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLocationBox {
    pub location: LocationBox,
    pub date_time: DateTimeBox,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeBox {
    pub visible: bool,
    pub placeholder: Text,
}
