// ==========================================
// 球员交易计算器 - 导入管道 Trait
// ==========================================
// 职责: 定义导入各阶段接口（不包含实现）
// 流程: 解析(SheetParser) → 列角色推断(ColumnRoleResolver) → 行转换 → 排序
// ==========================================

use crate::domain::table::RawTable;
use crate::importer::column_resolver::ColumnRoleMap;
use crate::importer::error::ImportResult;

// ==========================================
// SheetParser Trait
// ==========================================
// 用途: 字节流 → RawTable（阶段 1）
// 实现者: ExcelParser, CsvParser
pub trait SheetParser: Send + Sync {
    /// 解析首个工作表为原始表格
    ///
    /// # 参数
    /// - source: 文件字节内容
    ///
    /// # 返回
    /// - Ok(RawTable): 表头 + 数据行（可能为空，由调用方判定 EmptySheet）
    /// - Err(ImportError::Decode): 字节无法解析为表格
    fn parse_to_raw_table(&self, source: &[u8]) -> ImportResult<RawTable>;
}

// ==========================================
// ColumnRoleResolver Trait
// ==========================================
// 用途: 表头列表 → 角色映射（阶段 2）
// 实现者: SubstringRoleResolver
// 说明: 纯函数，与行转换解耦，可替换为其他匹配策略
pub trait ColumnRoleResolver: Send + Sync {
    /// 推断列角色
    ///
    /// # 参数
    /// - headers: 表头（源文件列顺序）
    ///
    /// # 返回
    /// - ColumnRoleMap: 各角色选中的表头（可能缺失）
    fn resolve(&self, headers: &[String]) -> ColumnRoleMap;
}
