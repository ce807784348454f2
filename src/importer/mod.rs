// ==========================================
// 球员交易计算器 - 导入层
// ==========================================
// 职责: 外部表格导入, 生成规范化球员数据集
// 支持: Excel (.xlsx/.xls), CSV
// ==========================================

// 模块声明
pub mod column_resolver;
pub mod error;
pub mod file_parser;
pub mod import_engine;
pub mod importer_trait;
pub mod row_coercer;

// 重导出核心类型
pub use column_resolver::{ColumnRoleMap, ResolvedColumns, SubstringRoleResolver};
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, WorkbookFormat};
pub use import_engine::TabularImportEngine;
pub use row_coercer::{parse_decimal, AcceptedRow, RowCoercer};

// 重导出 Trait 接口
pub use importer_trait::{ColumnRoleResolver, SheetParser};
