//! HTTP取得モジュール
//!
//! スプレッドシートCSVと各行の画像取得で共有する。
//! テストではメモリ上の実装に差し替える。

use crate::config::Config;
use crate::error::{CloudError, Result};
use std::time::Duration;

/// URLからバイト列を取得する
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// reqwestによる実装
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        // 0はタイムアウトなし
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }

        let client = builder
            .build()
            .map_err(|e| CloudError::Config(format!("HTTPクライアント初期化エラー: {}", e)))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CloudError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CloudError::fetch(url, format!("HTTPステータス {}", status.as_u16())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CloudError::fetch(url, e))?;

        tracing::debug!(url, bytes = body.len(), "取得完了");
        Ok(body.to_vec())
    }
}
