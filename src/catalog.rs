//! Catalog Module
//!
//! 1回の変換で得られたカテゴリごとの出力ドキュメントをまとめて保持するモジュール。

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::model::OutputDocument;

/// カタログ内の1カテゴリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// カテゴリの表示名
    pub category_name: String,
    /// タイ語の表示名
    pub thai_name: String,
    pub document: OutputDocument,
}

/// カテゴリごとの集計
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub slug: String,
    pub category_name: String,
    pub thai_name: String,
    pub packages: usize,
    pub packages_with_configurations: usize,
    pub configurations: usize,
    pub cart_limit: i64,
}

/// 変換結果
///
/// ドキュメントはスラッグの初出順に並びます。
/// JSONにシリアライズするとスラッグをキーとするオブジェクトになり、キー順も保たれます。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub(crate) fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// カテゴリ数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// スラッグでドキュメントを取得
    pub fn get(&self, slug: &str) -> Option<&OutputDocument> {
        self.entry(slug).map(|entry| &entry.document)
    }

    /// スラッグでカテゴリを取得
    pub fn entry(&self, slug: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.document.id == slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entry(slug).is_some()
    }

    /// スラッグを順に走査
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.document.id.as_str())
    }

    /// カテゴリを順に走査
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// ドキュメントを順に走査
    pub fn documents(&self) -> impl Iterator<Item = &OutputDocument> {
        self.entries.iter().map(|entry| &entry.document)
    }

    /// 指定したスラッグだけを残したカタログ
    pub fn retain_slug(mut self, slug: &str) -> Self {
        self.entries.retain(|entry| entry.document.id == slug);
        self
    }

    /// カテゴリごとの集計
    pub fn summaries(&self) -> Vec<CatalogSummary> {
        self.entries
            .iter()
            .map(|entry| CatalogSummary {
                slug: entry.document.id.clone(),
                category_name: entry.category_name.clone(),
                thai_name: entry.thai_name.clone(),
                packages: entry.document.packages.len(),
                packages_with_configurations: entry.document.packages_with_configurations(),
                configurations: entry.document.configuration_count(),
                cart_limit: entry.document.cart_limit,
            })
            .collect()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.document.id, &entry.document)?;
        }
        map.end()
    }
}
