// ==========================================
// 球员交易计算器 - 文件解析器实现
// ==========================================
// 职责: 字节流 → RawTable（仅读取第一个工作表, 第 1 行为表头）
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================

use crate::domain::table::{RawCell, RawTable};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::SheetParser;
use calamine::{Data, Reader, Xls, Xlsx};
use csv::ReaderBuilder;
use std::fmt::Display;
use std::io::{Cursor, Read, Seek};
use tracing::debug;

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE2_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

// ==========================================
// 容器格式嗅探
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookFormat {
    Xlsx,
    Xls,
}

impl WorkbookFormat {
    pub fn sniff(source: &[u8]) -> Option<Self> {
        if source.starts_with(ZIP_MAGIC) {
            Some(WorkbookFormat::Xlsx)
        } else if source.starts_with(OLE2_MAGIC) {
            Some(WorkbookFormat::Xls)
        } else {
            None
        }
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl SheetParser for ExcelParser {
    fn parse_to_raw_table(&self, source: &[u8]) -> ImportResult<RawTable> {
        let format = WorkbookFormat::sniff(source).ok_or_else(|| {
            ImportError::Decode("无法识别的工作簿格式（非 xlsx/xls 容器）".to_string())
        })?;
        debug!(?format, bytes = source.len(), "识别工作簿格式");

        let rows = match format {
            WorkbookFormat::Xlsx => {
                let workbook: Xlsx<_> = Xlsx::new(Cursor::new(source))?;
                first_sheet_rows(workbook)?
            }
            WorkbookFormat::Xls => {
                let workbook: Xls<_> = Xls::new(Cursor::new(source))?;
                first_sheet_rows(workbook)?
            }
        };

        Ok(into_raw_table(rows))
    }
}

/// 读取第一个工作表的所有行（其余工作表忽略）, 附带 1 起始的工作表行号
fn first_sheet_rows<RS, R>(mut workbook: R) -> ImportResult<Vec<(usize, Vec<RawCell>)>>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: Display,
{
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| ImportError::Decode(e.to_string()))?,
        // 无工作表: 视为空表
        None => return Ok(Vec::new()),
    };

    // Range 从首个非空单元格开始, 前导空行不在其中
    let first_row = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);
    Ok(range
        .rows()
        .enumerate()
        .map(|(idx, row)| (first_row + idx, row.iter().map(cell_from_excel).collect()))
        .collect())
}

/// calamine 单元格 → RawCell
fn cell_from_excel(cell: &Data) -> RawCell {
    match cell {
        Data::String(s) => RawCell::Text(s.clone()),
        Data::Float(f) => RawCell::Number(*f),
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Bool(b) => RawCell::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => RawCell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Error(_) | Data::Empty => RawCell::Empty,
    }
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl SheetParser for CsvParser {
    fn parse_to_raw_table(&self, source: &[u8]) -> ImportResult<RawTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(source);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            // 读取器跳过空行, 行号取自源文件位置
            let row_number = record
                .position()
                .map(|pos| pos.line() as usize)
                .unwrap_or(rows.len() + 1);
            rows.push((
                row_number,
                record
                    .iter()
                    .map(|value| {
                        if value.is_empty() {
                            RawCell::Empty
                        } else {
                            RawCell::Text(value.to_string())
                        }
                    })
                    .collect(),
            ));
        }

        Ok(into_raw_table(rows))
    }
}

/// 首行作表头, 其余为数据行
fn into_raw_table(rows: Vec<(usize, Vec<RawCell>)>) -> RawTable {
    let mut rows = rows.into_iter();
    match rows.next() {
        Some((_, header)) => RawTable::from_rows(header, rows),
        None => RawTable::default(),
    }
}
