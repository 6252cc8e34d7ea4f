//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use opportunity_cloud::error::CloudError;
use opportunity_cloud::extractor;

/// CloudErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CloudError::Config("テスト設定エラー".to_string()),
        CloudError::fetch("https://example.com/a.png", "HTTPステータス 500"),
        CloudError::Parse("列数不足".to_string()),
        CloudError::QrEncode("データが長すぎます".to_string()),
        CloudError::Render("未生成のタグ".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 取得エラーにURLと理由が含まれる
#[test]
fn test_fetch_error_message() {
    let err = CloudError::fetch("https://example.com/a.png", "HTTPステータス 404");
    let display = format!("{}", err);

    assert!(display.contains("https://example.com/a.png"));
    assert!(display.contains("404"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CloudError = io_err.into();

    assert!(matches!(err, CloudError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: CloudError = json_err.into();

    assert!(matches!(err, CloudError::JsonParse(_)));
}

/// 列数不足はParseエラー
#[test]
fn test_short_row_is_parse_error() {
    let text = "a,b,c,d,e,f,g,h\n1,2,3\n";
    let err = extractor::extract_rows(text).unwrap_err();

    assert!(matches!(err, CloudError::Parse(_)));
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = CloudError::Render("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Render"));
    assert!(debug.contains("テスト"));
}
