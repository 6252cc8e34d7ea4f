//! opportunity-cloud
//!
//! スプレッドシート（CSV）の各行を、タグクラウド形式の静的HTMLページに変換する。

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod pipeline;
pub mod progress;
pub mod render;
pub mod source;

pub use assets::AssetMap;
pub use progress::{NoProgress, ProgressObserver, Stage};
pub use error::{CloudError, Result};
pub use extractor::Row;
pub use render::RenderContext;
