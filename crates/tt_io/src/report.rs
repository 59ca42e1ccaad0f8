// crates/tt_io/src/report.rs

//! CSV 报表
//!
//! 每张报表一个文件：行是变量（固定顺序），列是 "模式/情景" 键，
//! 列按发现顺序追加。单元格可能包含逗号（units 字符串），
//! 读写时做引号转义。

use crate::error::{IoError, IoResult};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// 变量 × 列键 的报表
#[derive(Debug, Clone)]
pub struct ReportTable {
    /// 行名（变量），固定顺序
    rows: Vec<String>,
    /// 列键（"模式/情景"），按发现顺序
    columns: Vec<String>,
    /// (行, 列) -> 单元格
    cells: HashMap<(String, String), String>,
}

impl ReportTable {
    /// 空报表（给定变量行）
    pub fn new(variables: &[&str]) -> Self {
        Self {
            rows: variables.iter().map(|v| v.to_string()).collect(),
            columns: Vec::new(),
            cells: HashMap::new(),
        }
    }

    /// 从文件加载，不存在时创建空报表
    pub fn load_or_create(path: &Path, variables: &[&str]) -> IoResult<Self> {
        if !path.exists() {
            return Ok(Self::new(variables));
        }
        let text = fs::read_to_string(path)?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> IoResult<Self> {
        let mut lines = text.lines().enumerate();
        let (_, header) = lines.next().ok_or_else(|| IoError::CsvParse {
            file: path.display().to_string(),
            line: 1,
            message: "empty report".into(),
        })?;
        let header_fields = split_csv_line(header);
        // 首列是行名列，无表头
        let columns: Vec<String> = header_fields.into_iter().skip(1).collect();

        let mut rows = Vec::new();
        let mut cells = HashMap::new();
        for (idx, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_csv_line(line);
            let row = fields.first().cloned().ok_or_else(|| IoError::CsvParse {
                file: path.display().to_string(),
                line: idx + 1,
                message: "missing row name".into(),
            })?;
            for (col, value) in columns.iter().zip(fields.iter().skip(1)) {
                if !value.is_empty() {
                    cells.insert((row.clone(), col.clone()), value.clone());
                }
            }
            rows.push(row);
        }

        Ok(Self { rows, columns, cells })
    }

    /// 写入单元格，列不存在时追加
    pub fn set(&mut self, row: &str, column: &str, value: impl Into<String>) {
        if !self.rows.iter().any(|r| r == row) {
            self.rows.push(row.to_string());
        }
        if !self.columns.iter().any(|c| c == column) {
            self.columns.push(column.to_string());
        }
        self.cells
            .insert((row.to_string(), column.to_string()), value.into());
    }

    /// 读取单元格
    pub fn get(&self, row: &str, column: &str) -> Option<&str> {
        self.cells
            .get(&(row.to_string(), column.to_string()))
            .map(|s| s.as_str())
    }

    /// 行名列表
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// 列键列表
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 序列化为 CSV 文本
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&quote_if_needed(""));
        for col in &self.columns {
            out.push(',');
            out.push_str(&quote_if_needed(col));
        }
        out.push('\n');
        for row in &self.rows {
            out.push_str(&quote_if_needed(row));
            for col in &self.columns {
                out.push(',');
                let value = self.get(row, col).unwrap_or("");
                out.push_str(&quote_if_needed(value));
            }
            out.push('\n');
        }
        out
    }

    /// 保存到文件（父目录需已存在）
    pub fn save(&self, path: &Path) -> IoResult<()> {
        fs::write(path, self.to_csv())?;
        Ok(())
    }
}

/// 含逗号或引号的字段加引号
fn quote_if_needed(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// 解析一行 CSV（支持引号字段）
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut table = ReportTable::new(&["gpp", "npp"]);
        table.set("gpp", "CLASSIC/S2", "1488");
        table.set("npp", "CLASSIC/S2", "124");
        assert_eq!(table.get("gpp", "CLASSIC/S2"), Some("1488"));
        assert_eq!(table.get("npp", "CLASSIC/S3"), None);
        assert_eq!(table.columns(), ["CLASSIC/S2"]);
    }

    #[test]
    fn test_column_discovery_order() {
        let mut table = ReportTable::new(&["gpp"]);
        table.set("gpp", "JULES/S3", "x");
        table.set("gpp", "CLASSIC/S2", "y");
        assert_eq!(table.columns(), ["JULES/S3", "CLASSIC/S2"]);
    }

    #[test]
    fn test_csv_round_trip_with_commas() {
        let mut table = ReportTable::new(&["gpp", "lai"]);
        table.set("gpp", "CABLE-POP/S2", "days since 1700-1-1 0:0:0");
        table.set("lai", "CABLE-POP/S2", "hours, since 1860");
        let text = table.to_csv();
        let parsed = ReportTable::parse(&text, Path::new("test.csv")).unwrap();
        assert_eq!(
            parsed.get("gpp", "CABLE-POP/S2"),
            Some("days since 1700-1-1 0:0:0")
        );
        assert_eq!(parsed.get("lai", "CABLE-POP/S2"), Some("hours, since 1860"));
        assert_eq!(parsed.rows(), ["gpp", "lai"]);
    }

    #[test]
    fn test_quote_escaping() {
        assert_eq!(quote_if_needed("plain"), "plain");
        assert_eq!(quote_if_needed("a,b"), "\"a,b\"");
        assert_eq!(quote_if_needed("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_split_csv_line() {
        let fields = split_csv_line("gpp,\"a,b\",plain,");
        assert_eq!(fields, ["gpp", "a,b", "plain", ""]);
    }

    #[test]
    fn test_load_or_create_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Num_Timesteps.csv");
        let table = ReportTable::load_or_create(&path, &["gpp"]).unwrap();
        assert_eq!(table.rows(), ["gpp"]);
        assert!(table.columns().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Interval.csv");
        let mut table = ReportTable::new(&["gpp"]);
        table.set("gpp", "ISBA-CTRIP/S2", "monthly");
        table.save(&path).unwrap();

        let reloaded = ReportTable::load_or_create(&path, &["gpp"]).unwrap();
        assert_eq!(reloaded.get("gpp", "ISBA-CTRIP/S2"), Some("monthly"));
        assert_eq!(reloaded.columns(), ["ISBA-CTRIP/S2"]);
    }

    #[test]
    fn test_new_rows_appended_on_set() {
        let mut table = ReportTable::new(&["gpp"]);
        table.set("extra_var", "M/S2", "v");
        assert_eq!(table.rows(), ["gpp", "extra_var"]);
    }
}
