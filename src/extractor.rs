//! 行抽出モジュール
//!
//! 先頭行をヘッダとして読み飛ばし、固定の列位置から `Row` を組み立てる。

use crate::error::{CloudError, Result};
use csv::ReaderBuilder;

const COL_TAG: usize = 0;
const COL_IMAGE_URL: usize = 2;
const COL_TOP_DESCRIPTION: usize = 4;
const COL_BOTTOM_DESCRIPTION: usize = 5;
const COL_TARGET_URL: usize = 7;

/// 1行に必要な最小列数
pub const REQUIRED_COLUMNS: usize = COL_TARGET_URL + 1;

/// スプレッドシートの1行
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub tag: String,                 // 表示ラベル（キー）
    pub top_description: String,     // 選択時の本文
    pub bottom_description: String,  // 選択時の補足
    pub image_source_url: String,    // 画像URL
    pub target_url: String,          // QRコードとリンク先
}

/// CSVテキストから行を抽出
///
/// 列の間にある未使用の列（1, 3, 6列目）と8列目以降は無視する。
pub fn extract_rows(text: &str) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?;
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(CloudError::Parse("ヘッダ行がありません".into()));
    }

    let mut rows = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        // ヘッダが1行目なのでデータは2行目から
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);

        if record.len() < REQUIRED_COLUMNS {
            return Err(CloudError::Parse(format!(
                "{}行目の列数が不足しています（{}列、必要: {}列）",
                line,
                record.len(),
                REQUIRED_COLUMNS
            )));
        }

        rows.push(Row {
            tag: record[COL_TAG].to_string(),
            top_description: record[COL_TOP_DESCRIPTION].to_string(),
            bottom_description: record[COL_BOTTOM_DESCRIPTION].to_string(),
            image_source_url: record[COL_IMAGE_URL].to_string(),
            target_url: record[COL_TARGET_URL].to_string(),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "tag,note,image,x,top,bottom,y,url\n";

    #[test]
    fn test_extract_single_row() {
        let text = format!(
            "{}Grants,-,https://example.com/img/grants.png,-,Apply here,Deadline soon,-,https://example.com/apply\n",
            HEADER
        );
        let rows = extract_rows(&text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tag, "Grants");
        assert_eq!(rows[0].image_source_url, "https://example.com/img/grants.png");
        assert_eq!(rows[0].top_description, "Apply here");
        assert_eq!(rows[0].bottom_description, "Deadline soon");
        assert_eq!(rows[0].target_url, "https://example.com/apply");
    }

    #[test]
    fn test_extract_preserves_order() {
        let mut text = HEADER.to_string();
        for tag in ["c", "a", "b"] {
            text.push_str(&format!("{},,i,,t,b,,u\n", tag));
        }
        let rows = extract_rows(&text).unwrap();
        let tags: Vec<&str> = rows.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_extract_quoted_fields() {
        let text = format!(
            "{}\"Tag, with comma\",,i,,\"line1\nline2\",b,,u\n",
            HEADER
        );
        let rows = extract_rows(&text).unwrap();
        assert_eq!(rows[0].tag, "Tag, with comma");
        assert_eq!(rows[0].top_description, "line1\nline2");
    }

    #[test]
    fn test_extract_extra_columns_ignored() {
        let text = format!("{}t,,i,,top,bottom,,u,extra,more\n", HEADER);
        let rows = extract_rows(&text).unwrap();
        assert_eq!(rows[0].target_url, "u");
    }

    #[test]
    fn test_extract_header_only() {
        let rows = extract_rows(HEADER).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_extract_missing_header() {
        let err = extract_rows("").unwrap_err();
        assert!(matches!(err, CloudError::Parse(_)));
    }

    #[test]
    fn test_extract_short_row() {
        let text = format!("{}a,b,c\n", HEADER);
        let err = extract_rows(&text).unwrap_err();
        match err {
            CloudError::Parse(msg) => {
                assert!(msg.contains("2行目"), "{}", msg);
                assert!(msg.contains("3列"), "{}", msg);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_extract_whitespace_kept() {
        let text = format!("{} spaced ,,i,,t,b,,u\n", HEADER);
        let rows = extract_rows(&text).unwrap();
        assert_eq!(rows[0].tag, " spaced ");
    }
}
