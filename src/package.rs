//! Row Grouping & Package Builder
//!
//! 1カテゴリ分の行を順に畳み込み、パッケージのリストを構築するモジュール。
//!
//! パッケージ名のある行で新しいパッケージが始まり、続く行（パッケージ名なし）は
//! 設定グループだけを現在のパッケージに追加します。状態は「現在構築中のパッケージ」
//! ひとつだけで、次のパッケージ開始行または行の終わりで確定されます。

use crate::api::DocumentFormat;
use crate::config_text::parse_configuration_text;
use crate::model::{
    ConfigurationGroup, ConfigurationType, Package, PackageImage, PackageNote, Quantity,
    QuantityValidation,
};
use crate::text::Text;
use crate::types::{columns, Row};

pub(crate) const DEFAULT_BASE_PRICE: i64 = 0;
pub(crate) const DEFAULT_QUANTITY_MIN: i64 = 1;
pub(crate) const DEFAULT_QUANTITY_MAX: i64 = 10;
pub(crate) const DEFAULT_QUANTITY_PLACEHOLDER: &str = "จำนวน";
pub(crate) const DEFAULT_NOTE_PLACEHOLDER: &str = "ระบุข้อมูลเพิ่มเติม";
pub(crate) const DEFAULT_CONFIGURATION_TITLE: &str = "ตัวเลือก";

const QUANTITY_PLACEHOLDER_EN: &str = "Quantity";
const PACKAGE_COVER_IMAGE: &str = "https://example.com/inspection-cover.jpg";
const PACKAGE_THUMBNAIL_IMAGE: &str = "https://example.com/inspection-thumb.jpg";

/// 構築中のパッケージ
///
/// 複数行にまたがって設定グループを蓄積します。IDと名前は必ず空でない値を持ちます。
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDraft {
    pub id: String,
    pub name: String,
    pub base_price: i64,
    pub quantity_min: i64,
    pub quantity_max: i64,
    pub quantity_placeholder: String,
    pub note_placeholder: String,
    pub description: String,
    pub location_types: Vec<String>,
    pub configurations: Vec<ConfigurationGroup>,
}

impl PackageDraft {
    /// パッケージ開始行からドラフトを生成
    ///
    /// 名前またはIDが空（空白のみを含む）の場合は`None`。
    pub(crate) fn from_row(row: &Row<'_>, default_location_type: &str) -> Option<Self> {
        let name = row.trimmed(columns::PACKAGE_NAME)?;
        let id = row.trimmed(columns::PACKAGE_ID)?;

        Some(Self {
            id,
            name,
            base_price: row
                .integer(columns::STARTING_PRICE)
                .unwrap_or(DEFAULT_BASE_PRICE),
            quantity_min: row
                .integer(columns::QUANTITY_MIN)
                .unwrap_or(DEFAULT_QUANTITY_MIN),
            quantity_max: row
                .integer(columns::QUANTITY_MAX)
                .unwrap_or(DEFAULT_QUANTITY_MAX),
            quantity_placeholder: row
                .text(columns::QUANTITY_PLACEHOLDER)
                .unwrap_or_else(|| DEFAULT_QUANTITY_PLACEHOLDER.to_string()),
            note_placeholder: row
                .text(columns::NOTE_PLACEHOLDER)
                .unwrap_or_else(|| DEFAULT_NOTE_PLACEHOLDER.to_string()),
            description: row.text(columns::PACKAGE_DESCRIPTION).unwrap_or_default(),
            location_types: parse_location_types(
                row.text(columns::SERVICE_LOCATION_TYPES).as_deref(),
                default_location_type,
            ),
            configurations: Vec::new(),
        })
    }

    /// 出力用のパッケージに変換
    pub fn into_package(self, format: DocumentFormat) -> Package {
        Package {
            title: Text::localized(format, self.name.clone(), self.name),
            note: PackageNote {
                placeholder: self.note_placeholder,
            },
            image: PackageImage {
                cover: PACKAGE_COVER_IMAGE.to_string(),
                thumbnail: PACKAGE_THUMBNAIL_IMAGE.to_string(),
            },
            quantity: Quantity {
                validation: QuantityValidation {
                    max: self.quantity_max,
                    min: self.quantity_min,
                },
                placeholder: Text::localized(
                    format,
                    self.quantity_placeholder,
                    QUANTITY_PLACEHOLDER_EN,
                ),
            },
            base_price: self.base_price,
            description: Text::localized(format, self.description.clone(), self.description),
            configurations: self.configurations,
            id: self.id,
        }
    }
}

/// カンマ区切りのサービス提供場所を分割
///
/// 空の要素は除外し、結果が空ならデフォルトの1要素だけのリストを返します。
pub(crate) fn parse_location_types(value: Option<&str>, default_location_type: &str) -> Vec<String> {
    let types: Vec<String> = value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if types.is_empty() {
        vec![default_location_type.to_string()]
    } else {
        types
    }
}

/// 行から設定グループを生成
///
/// 種類が空・NONE・未知の値の場合、または選択肢が1つも取れない場合は`None`。
/// IDの列が空なら、既存のグループ数から`config-001`形式で採番します。
fn configuration_from_row(row: &Row<'_>, existing: usize) -> Option<ConfigurationGroup> {
    let kind = row
        .trimmed(columns::CONFIGURATION_TYPE)
        .and_then(|value| ConfigurationType::parse(&value))
        .filter(|kind| *kind != ConfigurationType::None)?;

    let items = parse_configuration_text(row.text(columns::CONFIGURATION_TEXT).as_deref());
    if items.is_empty() {
        return None;
    }

    let id = row
        .trimmed(columns::CONFIGURATION_ID)
        .unwrap_or_else(|| format!("config-{:03}", existing + 1));
    let title = row
        .trimmed(columns::CONFIGURATION_TITLE)
        .unwrap_or_else(|| DEFAULT_CONFIGURATION_TITLE.to_string());

    Some(ConfigurationGroup::new(id, title, kind, items))
}

/// 行の畳み込み状態
///
/// `current`が構築中のパッケージ、`packages`が確定済みのパッケージ。
#[derive(Debug)]
pub(crate) struct PackageFolder<'c> {
    default_location_type: &'c str,
    current: Option<PackageDraft>,
    packages: Vec<PackageDraft>,
}

impl<'c> PackageFolder<'c> {
    pub fn new(default_location_type: &'c str) -> Self {
        Self {
            default_location_type,
            current: None,
            packages: Vec::new(),
        }
    }

    /// 1行を畳み込む
    pub fn push(mut self, row: Row<'_>) -> Self {
        if row.trimmed(columns::PACKAGE_NAME).is_some() {
            // IDが空の開始行では新しいドラフトを作らず、現在のドラフトを開いたままにする
            if let Some(draft) = PackageDraft::from_row(&row, self.default_location_type) {
                if let Some(finished) = self.current.replace(draft) {
                    self.packages.push(finished);
                }
            }
        }

        if let Some(current) = self.current.as_mut() {
            if let Some(group) = configuration_from_row(&row, current.configurations.len()) {
                current.configurations.push(group);
            }
        }

        self
    }

    /// 構築中のパッケージを確定し、すべてのパッケージを返す
    pub fn finish(mut self) -> Vec<PackageDraft> {
        if let Some(last) = self.current.take() {
            self.packages.push(last);
        }
        self.packages
    }
}

/// 行の並びをパッケージのリストに畳み込む
pub(crate) fn build_packages<'a, I>(rows: I, default_location_type: &str) -> Vec<PackageDraft>
where
    I: IntoIterator<Item = Row<'a>>,
{
    rows.into_iter()
        .fold(PackageFolder::new(default_location_type), PackageFolder::push)
        .finish()
}
