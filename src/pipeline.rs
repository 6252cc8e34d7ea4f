//! 生成処理の一括実行
//!
//! 取得 → 行抽出 → アセット生成 → ページ出力 を順に1回だけ行う。

use crate::assets;
use crate::error::Result;
use crate::extractor;
use crate::fetch::Fetcher;
use crate::progress::{ProgressObserver, Stage};
use crate::render::{self, RenderContext};
use crate::source::{self, SheetSource};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// 実行結果
#[derive(Debug, Clone)]
pub struct Summary {
    pub rows: usize,
    pub images_missing: usize,
    pub page_path: PathBuf,
}

pub async fn generate<F, O>(
    fetcher: &F,
    source: &SheetSource,
    out_dir: &Path,
    observer: &mut O,
    generated_at: NaiveDateTime,
) -> Result<Summary>
where
    F: Fetcher,
    O: ProgressObserver + ?Sized,
{
    observer.stage(Stage::Fetch);
    let text = source::load_csv(fetcher, source).await?;
    // 不正なCSVならファイルを書く前に失敗させる
    let rows = extractor::extract_rows(&text)?;
    tracing::debug!(rows = rows.len(), "行を抽出");

    std::fs::create_dir_all(out_dir)?;
    source::save_snapshot(out_dir, &text)?;

    observer.stage(Stage::Materialize);
    let assets = assets::materialize(fetcher, &rows, out_dir, observer).await?;

    observer.stage(Stage::Render);
    let ctx = RenderContext::build(&rows, &assets, generated_at)?;
    let page_path = render::write_page(&ctx, out_dir)?;

    Ok(Summary {
        rows: rows.len(),
        images_missing: assets.missing_images(),
        page_path,
    })
}
