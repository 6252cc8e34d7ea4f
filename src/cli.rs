use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "opportunity-cloud")]
#[command(about = "スプレッドシートからタグクラウドの静的サイトを生成するツール", long_about = None)]
pub struct Cli {
    /// 省略時は設定値で generate を実行
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSVを取得してサイトを生成
    Generate {
        /// シートIDまたはスプレッドシートURL（省略時は設定値）
        #[arg(short, long, conflicts_with = "csv")]
        sheet: Option<String>,

        /// ローカルCSVファイルを使う
        #[arg(long)]
        csv: Option<PathBuf>,

        /// 出力フォルダ（省略時は設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// シートIDまたはスプレッドシートURLを設定
        #[arg(long)]
        set_sheet: Option<String>,

        /// 出力フォルダを設定
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["opportunity-cloud"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::parse_from(["opportunity-cloud", "generate", "--csv", "data.csv", "-o", "site", "-v"]);
        match cli.command {
            Some(Commands::Generate { sheet, csv, output }) => {
                assert!(sheet.is_none());
                assert_eq!(csv, Some(PathBuf::from("data.csv")));
                assert_eq!(output, Some(PathBuf::from("site")));
            }
            _ => panic!("generate expected"),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn test_sheet_conflicts_with_csv() {
        let result = Cli::try_parse_from(["opportunity-cloud", "generate", "--sheet", "abc", "--csv", "a.csv"]);
        assert!(result.is_err());
    }
}
