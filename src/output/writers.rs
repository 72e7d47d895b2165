//! Batch Writer
//!
//! カタログをカテゴリごとの`<slug>.json`と、一覧の`index.json`に書き出す。

use rayon::prelude::*;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{render_document, render_json};
use crate::catalog::{Catalog, CatalogEntry};
use crate::error::CatalogError;
use crate::security::validate_output_name;

/// 一覧ファイルの名前
pub const INDEX_FILE_NAME: &str = "index.json";

/// 一覧ファイルの1エントリ
///
/// `file`は出力先ディレクトリを含むパス。
#[derive(Debug, Serialize)]
struct IndexEntry<'a> {
    file: String,
    packages: usize,
    category_name: &'a str,
    subcat_thai: &'a str,
}

/// スラッグの初出順を保つ一覧
struct Index<'a>(Vec<(&'a str, IndexEntry<'a>)>);

impl Serialize for Index<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (slug, entry) in &self.0 {
            map.serialize_entry(slug, entry)?;
        }
        map.end()
    }
}

/// 書き出し結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// 書き出したドキュメント（カタログの順）
    pub files: Vec<PathBuf>,
    /// 一覧ファイル（書き出した場合）
    pub index: Option<PathBuf>,
}

/// カテゴリごとのファイル出力
///
/// # 使用例
///
/// ```rust,no_run
/// use catalogzero::{BatchWriter, ConverterBuilder};
/// use std::fs::File;
///
/// # fn main() -> Result<(), catalogzero::CatalogError> {
/// let catalog = ConverterBuilder::new().build()?.convert(File::open("catalog.xlsx")?)?;
/// let report = BatchWriter::new("out").write(&catalog)?;
/// println!("{} files", report.files.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BatchWriter {
    output_dir: PathBuf,
    write_index: bool,
}

impl BatchWriter {
    /// 出力先ディレクトリを指定して生成（存在しない場合は作成される）
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            write_index: true,
        }
    }

    /// `index.json`を書き出すかどうか（デフォルト: 書き出す）
    pub fn with_index(mut self, write_index: bool) -> Self {
        self.write_index = write_index;
        self
    }

    /// カタログを書き出す
    ///
    /// # 戻り値
    ///
    /// * `Ok(BatchReport)` - 書き出したファイルのパス
    /// * `Err(CatalogError::SecurityViolation)` - ファイル名として使えないスラッグがある場合
    ///   （この場合は何も書き出さない）
    /// * `Err(CatalogError::Io)` - 書き込みに失敗した場合
    pub fn write(&self, catalog: &Catalog) -> Result<BatchReport, CatalogError> {
        for slug in catalog.slugs() {
            validate_output_name(slug).map_err(CatalogError::SecurityViolation)?;
        }

        fs::create_dir_all(&self.output_dir)?;

        let entries: Vec<&CatalogEntry> = catalog.entries().collect();
        let files = entries
            .par_iter()
            .map(|entry| self.write_entry(entry))
            .collect::<Result<Vec<PathBuf>, CatalogError>>()?;

        let index = if self.write_index {
            Some(self.write_index_file(&entries)?)
        } else {
            None
        };

        info!(
            dir = %self.output_dir.display(),
            files = files.len(),
            "catalog written"
        );

        Ok(BatchReport { files, index })
    }

    fn write_entry(&self, entry: &CatalogEntry) -> Result<PathBuf, CatalogError> {
        let path = self.output_dir.join(file_name(&entry.document.id));
        write_file(&path, |writer| render_document(&entry.document, writer))?;
        debug!(
            path = %path.display(),
            packages = entry.document.packages.len(),
            "document written"
        );
        Ok(path)
    }

    fn write_index_file(&self, entries: &[&CatalogEntry]) -> Result<PathBuf, CatalogError> {
        let index = Index(
            entries
                .iter()
                .map(|entry| {
                    (
                        entry.document.id.as_str(),
                        IndexEntry {
                            file: self
                                .output_dir
                                .join(file_name(&entry.document.id))
                                .display()
                                .to_string(),
                            packages: entry.document.packages.len(),
                            category_name: &entry.category_name,
                            subcat_thai: &entry.thai_name,
                        },
                    )
                })
                .collect(),
        );

        let path = self.output_dir.join(INDEX_FILE_NAME);
        write_file(&path, |writer| render_json(&index, writer))?;
        Ok(path)
    }
}

fn file_name(slug: &str) -> String {
    format!("{}.json", slug)
}

fn write_file<F>(path: &Path, render: F) -> Result<(), CatalogError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), CatalogError>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    render(&mut writer)?;
    writer.flush()?;
    Ok(())
}
