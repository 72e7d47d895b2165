//! Category Partitioner
//!
//! テーブル全体をカテゴリごとの行の部分集合に分割し、
//! カテゴリのメタデータ（表示名・タイ語名・カート上限・サービス提供場所）を導出するモジュール。

use crate::error::CatalogError;
use crate::package::{build_packages, PackageDraft};
use crate::types::{columns, Row, Table};

/// カート上限のデフォルト値
pub(crate) const DEFAULT_CART_LIMIT: i64 = 30;

/// カテゴリ1つ分の変換結果
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    /// カテゴリスラッグ（出力ドキュメントのID）
    pub slug: String,
    /// 表示名
    pub name: String,
    /// タイ語の表示名
    pub thai_name: String,
    pub cart_limit: i64,
    pub packages: Vec<PackageDraft>,
    /// サービス提供場所（先頭がデフォルト）
    pub location_types: Vec<String>,
}

/// カテゴリのメタデータ
#[derive(Debug, Clone, PartialEq)]
struct CategoryMetadata {
    name: String,
    thai_name: String,
    cart_limit: i64,
}

impl CategoryMetadata {
    /// `Category`列が空でない最初の行から取得
    fn from_row(row: &Row<'_>, name: String, thai_column: Option<&str>) -> Self {
        let thai_name = thai_column
            .and_then(|column| row.trimmed(column))
            .unwrap_or_else(|| name.clone());

        Self {
            cart_limit: row.integer(columns::CART_LIMIT).unwrap_or(DEFAULT_CART_LIMIT),
            name,
            thai_name,
        }
    }

    /// メタデータ行がない場合はスラッグから生成
    fn from_slug(slug: &str) -> Self {
        let name = title_case(&slug.replace('-', " "));
        Self {
            thai_name: name.clone(),
            name,
            cart_limit: DEFAULT_CART_LIMIT,
        }
    }
}

/// テーブルをカテゴリごとに分割する
///
/// # 引数
///
/// * `table` - 入力テーブル
/// * `default_location_type` - サービス提供場所が空の場合に使う値
///
/// # 戻り値
///
/// * `Ok(Vec<CategoryGroup>)` - スラッグの初出順に並んだカテゴリのリスト。
///   行が1つも一致しないカテゴリは含まれません。
/// * `Err(CatalogError::MissingColumn)` - 必須列が欠けている場合
pub fn partition_table(
    table: &Table,
    default_location_type: &str,
) -> Result<Vec<CategoryGroup>, CatalogError> {
    table.require_columns(&columns::REQUIRED)?;

    let thai_column = table.find_column(columns::is_thai_subcategory);

    let groups = distinct_slugs(table)
        .into_iter()
        .filter_map(|slug| {
            let rows: Vec<Row<'_>> = table.rows().filter(|row| belongs_to(row, &slug)).collect();
            if rows.is_empty() {
                return None;
            }

            let metadata = rows
                .iter()
                .find_map(|row| {
                    row.trimmed(columns::CATEGORY)
                        .map(|name| CategoryMetadata::from_row(row, name, thai_column))
                })
                .unwrap_or_else(|| CategoryMetadata::from_slug(&slug));

            let packages = build_packages(rows, default_location_type);
            let location_types = packages
                .first()
                .map(|p| p.location_types.clone())
                .unwrap_or_else(|| vec![default_location_type.to_string()]);

            Some(CategoryGroup {
                slug,
                name: metadata.name,
                thai_name: metadata.thai_name,
                cart_limit: metadata.cart_limit,
                packages,
                location_types,
            })
        })
        .collect();

    Ok(groups)
}

/// `Category slug`列の値を初出順に重複なく取得
fn distinct_slugs(table: &Table) -> Vec<String> {
    let mut slugs: Vec<String> = Vec::new();
    for slug in table.rows().filter_map(|row| row.trimmed(columns::CATEGORY_SLUG)) {
        if !slugs.contains(&slug) {
            slugs.push(slug);
        }
    }
    slugs
}

/// スラッグが一致するか、パッケージIDがスラッグで始まる行
fn belongs_to(row: &Row<'_>, slug: &str) -> bool {
    row.trimmed(columns::CATEGORY_SLUG).as_deref() == Some(slug)
        || row
            .trimmed(columns::PACKAGE_ID)
            .map_or(false, |id| id.starts_with(slug))
}

/// 単語の先頭を大文字、それ以外を小文字にする
///
/// 英字以外の文字の直後を単語の先頭とみなします（`"part time 2nd"` → `"Part Time 2Nd"`）。
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_alphabetic = false;
    for c in text.chars() {
        if previous_is_alphabetic {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_is_alphabetic = c.is_alphabetic();
    }
    result
}
