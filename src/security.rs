//! Security Module
//!
//! 入力サイズの上限と、出力ファイル名の検証を提供するモジュール。
//! バッチ出力ではカテゴリスラッグがそのままファイル名になるため、
//! パストラバーサルにつながるスラッグを拒否します。

use crate::error::CatalogError;

/// 入力ファイルのデフォルト上限（バイト）
/// 100MB (104_857_600 bytes)
pub(crate) const DEFAULT_MAX_INPUT_SIZE: u64 = 104_857_600;

/// セキュリティ設定
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

impl SecurityConfig {
    /// 読み込んだバイト数が上限以内かを検証
    pub fn check_input_size(&self, bytes_read: u64) -> Result<(), CatalogError> {
        if bytes_read > self.max_input_file_size {
            return Err(CatalogError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes_read, self.max_input_file_size
            )));
        }
        Ok(())
    }
}

/// 出力ファイル名（拡張子なし）の検証
///
/// # 戻り値
///
/// * `Ok(())` - 名前が安全な場合
/// * `Err(String)` - 名前が危険な場合（空、パス区切り、`..`、先頭の`.`、制御文字）
pub(crate) fn validate_output_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Empty output name is not allowed".to_string());
    }

    if name.contains('/') || name.contains('\\') {
        return Err(format!("Path separator in output name: {}", name));
    }

    if name.contains("..") {
        return Err(format!("Path traversal detected: {}", name));
    }

    if name.starts_with('.') {
        return Err(format!("Hidden file name is not allowed: {}", name));
    }

    if name.chars().any(|c| c.is_control() || c == ':') {
        return Err(format!("Invalid character in output name: {:?}", name));
    }

    Ok(())
}
