use anyhow::Context;
use clap::Parser;
use opportunity_cloud::{cli, config, fetch, pipeline, progress, source};
use cli::{Cli, Commands};
use config::Config;
use source::SheetSource;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ エラーが発生しました: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load().context("設定の読み込みに失敗")?;

    match cli.command {
        None => generate(&config, None, None, None, cli.verbose).await,

        Some(Commands::Generate { sheet, csv, output }) => {
            generate(&config, sheet, csv, output, cli.verbose).await
        }

        Some(Commands::Config { set_sheet, set_output, show }) => {
            let mut changed = false;

            if let Some(sheet) = set_sheet {
                config.set_sheet(&sheet)?;
                changed = true;
                println!("✔ シートIDを設定しました: {}", config.sheet_id);
            }

            if let Some(output) = set_output {
                config.output_dir = output;
                changed = true;
                println!("✔ 出力フォルダを設定しました: {}", config.output_dir.display());
            }

            if changed {
                config.save().context("設定の保存に失敗")?;
            }

            if show || !changed {
                println!("設定:");
                println!("  シートID: {}", config.sheet_id);
                println!("  出力フォルダ: {}", config.output_dir.display());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  User-Agent: {}", config.user_agent);
            }

            Ok(())
        }
    }
}

async fn generate(
    config: &Config,
    sheet: Option<String>,
    csv: Option<PathBuf>,
    output: Option<PathBuf>,
    verbose: bool,
) -> anyhow::Result<()> {
    println!("☁ opportunity-cloud - サイト生成\n");

    let source = match (csv, sheet) {
        (Some(path), _) => SheetSource::LocalFile { path },
        (None, Some(input)) => SheetSource::GoogleSheet {
            id: source::sheet_id_from_input(&input)?,
        },
        (None, None) => SheetSource::GoogleSheet {
            id: config.sheet_id.clone(),
        },
    };
    let out_dir = output.unwrap_or_else(|| config.output_dir.clone());

    let fetcher = fetch::HttpFetcher::new(config)?;
    let mut observer = progress::ConsoleProgress::new(verbose);
    let generated_at = chrono::Local::now().naive_local();

    tracing::debug!(source = %source.describe(), out_dir = %out_dir.display(), "生成開始");
    let summary = pipeline::generate(&fetcher, &source, &out_dir, &mut observer, generated_at)
        .await
        .context("サイト生成に失敗")?;
    observer.finish();

    println!("✔ {}行を処理", summary.rows);
    if summary.images_missing > 0 {
        println!("⚠ 画像を取得できなかった行: {}", summary.images_missing);
    }
    println!("✔ 出力: {}", summary.page_path.display());

    println!("\n✅ 完了");
    Ok(())
}
