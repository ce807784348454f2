// ==========================================
// 球员交易计算器 - 列角色推断
// ==========================================
// 规则: 不区分大小写的子串匹配, 按表头顺序首个命中者胜出
//   nb10       ← 含 "nb10"
//   valueScore ← 同时含 "value" 与 "score"
//   ppg        ← 含 "ppg" 或 "point"（可选）
//   name       ← 含 "name" 或 "player"; 无命中时回退到第一列
// ==========================================

use crate::domain::types::ColumnRole;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::ColumnRoleResolver;
use serde::Serialize;

// ==========================================
// ColumnRoleMap - 角色 → 表头
// ==========================================
// 生命周期: 每次导入构建一次, 复用于所有行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnRoleMap {
    pub name: Option<String>,
    pub nb10: Option<String>,
    pub value_score: Option<String>,
    pub ppg: Option<String>,
}

impl ColumnRoleMap {
    pub fn get(&self, role: ColumnRole) -> Option<&str> {
        match role {
            ColumnRole::Name => self.name.as_deref(),
            ColumnRole::Nb10 => self.nb10.as_deref(),
            ColumnRole::ValueScore => self.value_score.as_deref(),
            ColumnRole::Ppg => self.ppg.as_deref(),
        }
    }

    /// 校验必需列（先 nb10 后 valueScore），通过后返回已定型的列集合
    pub fn require(&self) -> ImportResult<ResolvedColumns> {
        let nb10 = self.nb10.clone().ok_or(ImportError::MissingColumn {
            kind: ColumnRole::Nb10,
        })?;
        let value_score = self.value_score.clone().ok_or(ImportError::MissingColumn {
            kind: ColumnRole::ValueScore,
        })?;
        let name = self.name.clone().ok_or(ImportError::MissingColumn {
            kind: ColumnRole::Name,
        })?;

        Ok(ResolvedColumns {
            name,
            nb10,
            value_score,
            ppg: self.ppg.clone(),
        })
    }
}

/// 必需列均已确定的列集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub name: String,
    pub nb10: String,
    pub value_score: String,
    pub ppg: Option<String>,
}

// ==========================================
// SubstringRoleResolver - 默认推断策略
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringRoleResolver;

impl SubstringRoleResolver {
    fn find<F>(headers: &[String], predicate: F) -> Option<String>
    where
        F: Fn(&str) -> bool,
    {
        headers
            .iter()
            .find(|h| predicate(&h.to_lowercase()))
            .cloned()
    }
}

impl ColumnRoleResolver for SubstringRoleResolver {
    fn resolve(&self, headers: &[String]) -> ColumnRoleMap {
        let nb10 = Self::find(headers, |h| h.contains("nb10"));
        let value_score = Self::find(headers, |h| h.contains("value") && h.contains("score"));
        let ppg = Self::find(headers, |h| h.contains("ppg") || h.contains("point"));
        let name = Self::find(headers, |h| h.contains("name") || h.contains("player"))
            .or_else(|| headers.first().cloned());

        ColumnRoleMap {
            name,
            nb10,
            value_score,
            ppg,
        }
    }
}
