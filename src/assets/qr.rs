//! QRコード生成
//!
//! ファイル名はリンク先URLのMD5から決まるため、同じURLなら同じファイルになる。

use crate::error::{CloudError, Result};
use image::Rgb;
use md5::{Digest, Md5};
use qrcode::{EcLevel, QrCode};
use std::path::Path;

/// 1モジュールのピクセル数
const MODULE_PX: u32 = 10;
const DARK: Rgb<u8> = Rgb([0, 0, 0]);
const LIGHT: Rgb<u8> = Rgb([211, 211, 211]); // lightgrey

/// `qr_<md5hex>.png`
pub fn qr_file_name(target_url: &str) -> String {
    let digest = Md5::digest(target_url.as_bytes());
    format!("qr_{}.png", hex::encode(digest))
}

/// QRコードPNGを出力フォルダに生成し、ファイル名を返す
///
/// 既に同名ファイルがあれば再生成しない。
pub fn generate_qr_code(target_url: &str, out_dir: &Path) -> Result<String> {
    let file_name = qr_file_name(target_url);
    let path = out_dir.join(&file_name);

    if path.exists() {
        tracing::debug!(file = %file_name, "QRコードは生成済み");
        return Ok(file_name);
    }

    let code = QrCode::with_error_correction_level(target_url.as_bytes(), EcLevel::L)
        .map_err(|e| CloudError::QrEncode(format!("{}: {}", target_url, e)))?;

    let img = code
        .render::<Rgb<u8>>()
        .dark_color(DARK)
        .light_color(LIGHT)
        .quiet_zone(false)
        .module_dimensions(MODULE_PX, MODULE_PX)
        .build();

    img.save(&path)
        .map_err(|e| CloudError::QrEncode(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(file = %file_name, "QRコード生成");
    Ok(file_name)
}
