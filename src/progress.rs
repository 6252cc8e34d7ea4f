//! 進捗通知
//!
//! 生成処理そのものは表示を持たず、段階と行ごとの完了をここへ通知する。

use crate::error::CloudError;
use crate::extractor::Row;
use indicatif::{ProgressBar, ProgressStyle};

/// 生成処理の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Materialize,
    Render,
}

impl Stage {
    pub const COUNT: usize = 3;

    /// 1始まりの段階番号
    pub fn number(self) -> usize {
        match self {
            Stage::Fetch => 1,
            Stage::Materialize => 2,
            Stage::Render => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Fetch => "表データを取得中...",
            Stage::Materialize => "画像とQRコードを生成中...",
            Stage::Render => "ページを出力中...",
        }
    }
}

pub trait ProgressObserver {
    /// 段階の開始
    fn stage(&mut self, _stage: Stage) {}

    /// `done` 行目（1始まり）の処理が終わった
    fn row_done(&mut self, done: usize, total: usize, row: &Row);

    /// 画像取得に失敗した
    fn image_skipped(&mut self, _row: &Row, _error: &CloudError) {}
}

/// 何も通知しない
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn row_done(&mut self, _done: usize, _total: usize, _row: &Row) {}
}

/// indicatifのプログレスバーで表示
pub struct ConsoleProgress {
    bar: Option<ProgressBar>,
    verbose: bool,
}

impl ConsoleProgress {
    pub fn new(verbose: bool) -> Self {
        Self { bar: None, verbose }
    }

    fn bar(&mut self, total: usize) -> &ProgressBar {
        self.bar.get_or_insert_with(|| {
            let bar = ProgressBar::new(total as u64);
            if let Ok(style) = ProgressStyle::with_template("  [{bar:30}] {pos}/{len} {msg}") {
                bar.set_style(style.progress_chars("=> "));
            }
            bar
        })
    }

    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl ProgressObserver for ConsoleProgress {
    fn stage(&mut self, stage: Stage) {
        self.finish();
        println!("[{}/{}] {}", stage.number(), Stage::COUNT, stage.label());
    }

    fn row_done(&mut self, done: usize, total: usize, row: &Row) {
        let verbose = self.verbose;
        let bar = self.bar(total);
        bar.set_position(done as u64);
        bar.set_message(format!("残り{}行", total.saturating_sub(done)));
        if verbose {
            bar.println(format!("  ✔ {}", row.tag));
        }
    }

    fn image_skipped(&mut self, row: &Row, error: &CloudError) {
        let message = format!("  ⚠ 画像なし: {} ({})", row.tag, error);
        match &self.bar {
            Some(bar) => bar.println(message),
            None => eprintln!("{}", message),
        }
    }
}

impl Drop for ConsoleProgress {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_numbers() {
        let stages = [Stage::Fetch, Stage::Materialize, Stage::Render];
        let numbers: Vec<usize> = stages.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(Stage::COUNT, stages.len());
    }

    #[test]
    fn test_console_progress_without_bar() {
        let mut progress = ConsoleProgress::new(false);
        let row = Row::default();
        progress.image_skipped(&row, &CloudError::fetch("u", "x"));
        progress.row_done(1, 1, &row);
        assert!(progress.bar.is_some());
        progress.finish();
        assert!(progress.bar.is_none());
    }
}
