//! ページ生成モジュール
//!
//! 行と生成済みアセットから `RenderContext` を組み立て、
//! `templates/index.html` に埋め込んで `index.html` を出力する。

use crate::assets::AssetMap;
use crate::error::{CloudError, Result};
use crate::extractor::Row;
use askama::Template;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const PAGE_FILE_NAME: &str = "index.html";
const EDITION_DATE_FORMAT: &str = "%d.%m.%Y, %H:%M";

/// テンプレートに渡す値一式
///
/// 対応表はキー順にJSON化される。画像取得に失敗したタグは `null`。
#[derive(Debug, Clone, Template)]
#[template(path = "index.html")]
pub struct RenderContext {
    pub tags: Vec<String>,
    pub tag_descriptions: BTreeMap<String, String>,
    pub tag_bottom_descriptions: BTreeMap<String, String>,
    pub qr_codes: BTreeMap<String, String>,
    pub urls: BTreeMap<String, String>,
    pub images: BTreeMap<String, Option<String>>,
    pub edition_date: String,
}

/// 版表示用の日時文字列
pub fn format_edition_date(generated_at: NaiveDateTime) -> String {
    generated_at.format(EDITION_DATE_FORMAT).to_string()
}

impl RenderContext {
    pub fn build(rows: &[Row], assets: &AssetMap, generated_at: NaiveDateTime) -> Result<Self> {
        let mut ctx = RenderContext {
            tags: Vec::with_capacity(rows.len()),
            tag_descriptions: BTreeMap::new(),
            tag_bottom_descriptions: BTreeMap::new(),
            qr_codes: BTreeMap::new(),
            urls: BTreeMap::new(),
            images: BTreeMap::new(),
            edition_date: format_edition_date(generated_at),
        };

        for row in rows {
            let qr_code = assets.qr_code(&row.tag).ok_or_else(|| {
                CloudError::Render(format!("QRコードが未生成のタグ: {}", row.tag))
            })?;
            let image = assets.image(&row.tag).ok_or_else(|| {
                CloudError::Render(format!("画像が未処理のタグ: {}", row.tag))
            })?;

            ctx.tags.push(row.tag.clone());
            ctx.tag_descriptions
                .insert(row.tag.clone(), row.top_description.clone());
            ctx.tag_bottom_descriptions
                .insert(row.tag.clone(), row.bottom_description.clone());
            ctx.qr_codes.insert(row.tag.clone(), qr_code.to_string());
            ctx.urls.insert(row.tag.clone(), row.target_url.clone());
            ctx.images
                .insert(row.tag.clone(), image.map(str::to_string));
        }

        Ok(ctx)
    }
}

pub fn render_page(ctx: &RenderContext) -> Result<String> {
    Ok(ctx.render()?)
}

/// 一時ファイルに書いてから `index.html` に置き換える
pub fn write_page(ctx: &RenderContext, out_dir: &Path) -> Result<PathBuf> {
    let html = render_page(ctx)?;

    let page_path = out_dir.join(PAGE_FILE_NAME);
    let tmp_path = out_dir.join(format!("{}.tmp", PAGE_FILE_NAME));

    std::fs::write(&tmp_path, html)?;
    std::fs::rename(&tmp_path, &page_path)?;

    Ok(page_path)
}
