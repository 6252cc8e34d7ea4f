//! アセット生成モジュール
//!
//! 各行について QRコードPNG の生成と画像のダウンロードを行い、
//! タグ → ファイル名 の対応表を返す。
//!
//! - QRコード生成の失敗は致命的（ネットワークに依存しないため想定外）
//! - 画像取得の失敗は警告のみで、その行の画像は `None` として続行

pub mod download;
pub mod qr;

pub use self::download::{download_image, image_file_name};
pub use self::qr::{generate_qr_code, qr_file_name};

use crate::error::Result;
use crate::extractor::Row;
use crate::fetch::Fetcher;
use crate::progress::ProgressObserver;
use std::collections::BTreeMap;
use std::path::Path;

/// タグ → 生成ファイル名
///
/// 同じタグが複数行にある場合は後の行で上書きされる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMap {
    qr_codes: BTreeMap<String, String>,
    images: BTreeMap<String, Option<String>>,
}

impl AssetMap {
    pub fn qr_code(&self, tag: &str) -> Option<&str> {
        self.qr_codes.get(tag).map(String::as_str)
    }

    /// 外側の `None` は未処理のタグ、内側の `None` は画像取得失敗
    pub fn image(&self, tag: &str) -> Option<Option<&str>> {
        self.images.get(tag).map(Option::as_deref)
    }

    pub fn qr_codes(&self) -> &BTreeMap<String, String> {
        &self.qr_codes
    }

    pub fn images(&self) -> &BTreeMap<String, Option<String>> {
        &self.images
    }

    /// 画像なしのタグ数
    pub fn missing_images(&self) -> usize {
        self.images.values().filter(|v| v.is_none()).count()
    }

    pub fn insert(&mut self, tag: &str, qr_code: String, image: Option<String>) {
        self.qr_codes.insert(tag.to_string(), qr_code);
        self.images.insert(tag.to_string(), image);
    }
}

/// 全行のアセットを入力順に1件ずつ生成
pub async fn materialize<F, O>(
    fetcher: &F,
    rows: &[Row],
    out_dir: &Path,
    observer: &mut O,
) -> Result<AssetMap>
where
    F: Fetcher,
    O: ProgressObserver + ?Sized,
{
    let total = rows.len();
    let mut assets = AssetMap::default();

    for (index, row) in rows.iter().enumerate() {
        let qr_code = generate_qr_code(&row.target_url, out_dir)?;

        let image = match download_image(fetcher, &row.image_source_url, out_dir).await {
            Ok(file_name) => Some(file_name),
            Err(e) => {
                tracing::warn!(tag = %row.tag, url = %row.image_source_url, "画像を取得できません: {}", e);
                observer.image_skipped(row, &e);
                None
            }
        };

        assets.insert(&row.tag, qr_code, image);
        observer.row_done(index + 1, total, row);
    }

    Ok(assets)
}
