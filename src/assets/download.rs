//! 行ごとの画像ダウンロード

use crate::error::{CloudError, Result};
use crate::fetch::Fetcher;
use reqwest::Url;
use std::path::Path;

/// URLのパス末尾をファイル名として使う（クエリ・フラグメントは除く）
pub fn image_file_name(url: &str) -> Option<String> {
    let last = match Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .and_then(|path| path.rsplit('/').find(|s| !s.is_empty()))
            .map(str::to_string),
    }?;

    if last == "." || last == ".." || last.contains('\\') {
        return None;
    }
    Some(last)
}

/// 画像を取得して出力フォルダに保存し、ファイル名を返す
pub async fn download_image<F: Fetcher>(fetcher: &F, url: &str, out_dir: &Path) -> Result<String> {
    let file_name = image_file_name(url)
        .ok_or_else(|| CloudError::fetch(url, "URLからファイル名を決定できません"))?;

    let bytes = fetcher.fetch(url).await?;
    std::fs::write(out_dir.join(&file_name), bytes)?;

    tracing::debug!(url, file = %file_name, "画像を保存");
    Ok(file_name)
}
