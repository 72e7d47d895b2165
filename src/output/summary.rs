//! Summary Table
//!
//! カテゴリごとの集計をMarkdownのテーブルとして出力する。
//! 列幅は表示幅で計算するため、タイ語の結合文字（幅0）を含んでも列が揃います。

use std::io::Write;
use unicode_width::UnicodeWidthStr;

use crate::catalog::CatalogSummary;
use crate::error::CatalogError;

const HEADERS: [&str; 7] = [
    "Slug",
    "Category",
    "Thai name",
    "Packages",
    "With config",
    "Configs",
    "Cart limit",
];

/// 集計をテーブルとして書き出す
///
/// 集計が空の場合はヘッダー行と区切り行だけを出力します。
pub fn render_summary<W: Write>(
    summaries: &[CatalogSummary],
    writer: &mut W,
) -> Result<(), CatalogError> {
    let mut rows: Vec<Vec<String>> = vec![HEADERS.iter().map(|h| h.to_string()).collect()];
    rows.extend(summaries.iter().map(|s| {
        vec![
            s.slug.clone(),
            s.category_name.clone(),
            s.thai_name.clone(),
            s.packages.to_string(),
            s.packages_with_configurations.to_string(),
            s.configurations.to_string(),
            s.cart_limit.to_string(),
        ]
    }));

    // 1. 列幅の計算
    let col_widths = calculate_column_widths(&rows);

    // 2. ヘッダー区切り行
    let separator = generate_separator(&col_widths);

    // 3. 各行の出力
    for (row_idx, row) in rows.iter().enumerate() {
        write!(writer, "|")?;
        for (cell, &width) in row.iter().zip(&col_widths) {
            let content = cell.trim();
            let padding = width.saturating_sub(content.width());
            write!(writer, " {}{} |", content, " ".repeat(padding))?;
        }
        writeln!(writer)?;

        if row_idx == 0 {
            writeln!(writer, "{}", separator)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// 列ごとの最大表示幅（最小3）
fn calculate_column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths = vec![3; HEADERS.len()];
    for row in rows {
        for (col_idx, cell) in row.iter().enumerate() {
            widths[col_idx] = widths[col_idx].max(cell.trim().width());
        }
    }
    widths
}

fn generate_separator(col_widths: &[usize]) -> String {
    let mut line = String::from("|");
    for &width in col_widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('|');
    }
    line
}
