//! 表データ取得モジュール
//!
//! GoogleスプレッドシートのCSVエクスポート、またはローカルCSVを読み込む。

use crate::error::{CloudError, Result};
use crate::fetch::Fetcher;
use regex::Regex;
use std::path::{Path, PathBuf};

/// 取得したCSVの控え
pub const SNAPSHOT_FILE_NAME: &str = "sheet.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSource {
    GoogleSheet { id: String },
    LocalFile { path: PathBuf },
}

impl SheetSource {
    pub fn describe(&self) -> String {
        match self {
            SheetSource::GoogleSheet { id } => csv_export_url(id),
            SheetSource::LocalFile { path } => path.display().to_string(),
        }
    }
}

/// シートIDまたはスプレッドシートURLからIDを取り出す
pub fn sheet_id_from_input(input: &str) -> Result<String> {
    lazy_static::lazy_static! {
        // https://docs.google.com/spreadsheets/d/<id>/edit...
        static ref SHEET_URL_RE: Regex = Regex::new(r"/spreadsheets/d/([A-Za-z0-9_-]+)").unwrap();
        static ref SHEET_ID_RE: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
    }

    let input = input.trim();

    if let Some(caps) = SHEET_URL_RE.captures(input) {
        return Ok(caps[1].to_string());
    }

    if SHEET_ID_RE.is_match(input) {
        return Ok(input.to_string());
    }

    Err(CloudError::Config(format!("シートIDを認識できません: {}", input)))
}

/// CSVエクスポートURL
pub fn csv_export_url(sheet_id: &str) -> String {
    format!(
        "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:csv",
        sheet_id
    )
}

/// CSVテキストを取得
///
/// シート取得の失敗は致命的エラーとして返す（画像と違って継続しない）。
pub async fn load_csv<F: Fetcher>(fetcher: &F, source: &SheetSource) -> Result<String> {
    let bytes = match source {
        SheetSource::GoogleSheet { id } => fetcher.fetch(&csv_export_url(id)).await?,
        SheetSource::LocalFile { path } => std::fs::read(path)?,
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// CSVの控えを出力フォルダに保存
pub fn save_snapshot(out_dir: &Path, text: &str) -> Result<PathBuf> {
    let path = out_dir.join(SNAPSHOT_FILE_NAME);
    std::fs::write(&path, text)?;
    Ok(path)
}
