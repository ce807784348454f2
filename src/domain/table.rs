// ==========================================
// 球员交易计算器 - 原始表格模型
// ==========================================
// 用途: 导入管道中间产物（工作表 → RawTable → PlayerRecord）
// 生命周期: 仅在单次导入流程内
// ==========================================

use std::collections::HashMap;

// ==========================================
// RawCell - 未定型单元格
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Text(String),
    Number(f64),
    Empty,
}

impl RawCell {
    /// 无内容（空单元格或空字符串）; 纯空白文本仍算有内容
    pub fn is_empty(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Text(s) => s.is_empty(),
            RawCell::Number(_) => false,
        }
    }

    /// 渲染为文本（整数值不带小数部分）
    pub fn to_text(&self) -> String {
        match self {
            RawCell::Text(s) => s.clone(),
            RawCell::Number(n) => format_number(*n),
            RawCell::Empty => String::new(),
        }
    }
}

/// 数值转文本: 12.0 → "12", 12.5 → "12.5"
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// ==========================================
// RawRow - 原始数据行
// ==========================================
#[derive(Debug, Clone)]
pub struct RawRow {
    pub row_number: usize, // 源文件行号（1 起始）
    pub cells: HashMap<String, RawCell>,
}

impl RawRow {
    pub fn get(&self, header: &str) -> &RawCell {
        self.cells.get(header).unwrap_or(&RawCell::Empty)
    }
}

// ==========================================
// RawTable - 原始表格
// ==========================================
// 红线: headers 保持源文件列顺序，rows 保持源文件行顺序
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// 由表头行 + 数据行（工作表行号, 单元格）构造
    ///
    /// # 规则
    /// - 表头去空白；空表头命名为 __EMPTY / __EMPTY_1 ...
    /// - 重复表头追加 _1 / _2 ... 保证行内键唯一
    /// - 无内容数据行丢弃（不计入跳过行）; 含空白文本的行保留, 交由行转换判定
    /// - 短行以 Empty 补齐
    pub fn from_rows<I>(header_cells: Vec<RawCell>, data_rows: I) -> Self
    where
        I: IntoIterator<Item = (usize, Vec<RawCell>)>,
    {
        let headers = unique_headers(&header_cells);

        let mut rows = Vec::new();
        for (row_number, cells) in data_rows {
            if cells.iter().all(RawCell::is_empty) {
                continue;
            }

            let mut map = HashMap::with_capacity(headers.len());
            let mut cells = cells.into_iter();
            for header in &headers {
                let cell = cells.next().unwrap_or(RawCell::Empty);
                map.insert(header.clone(), cell);
            }

            rows.push(RawRow {
                row_number,
                cells: map,
            });
        }

        Self { headers, rows }
    }

    pub fn data_row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn unique_headers(header_cells: &[RawCell]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::with_capacity(header_cells.len());

    for cell in header_cells {
        let text = cell.to_text().trim().to_string();
        let base = if text.is_empty() {
            "__EMPTY".to_string()
        } else {
            text
        };

        let mut candidate = base.clone();
        while let Some(count) = seen.get_mut(&base) {
            *count += 1;
            candidate = format!("{}_{}", base, count);
            if !seen.contains_key(&candidate) {
                break;
            }
        }
        seen.entry(base).or_insert(0);
        seen.insert(candidate.clone(), 0);
        headers.push(candidate);
    }

    headers
}
