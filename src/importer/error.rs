// ==========================================
// 球员交易计算器 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类优先级: Decode → EmptySheet → MissingColumn → NoValidRows
// ==========================================

use crate::domain::types::ColumnRole;
use crate::i18n;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    // ===== 分类错误（导入引擎） =====
    #[error("工作簿解析失败: {0}")]
    Decode(String),

    #[error("工作表无数据行")]
    EmptySheet,

    #[error("缺少必需列: {kind}")]
    MissingColumn { kind: ColumnRole },

    #[error("无有效数据行 (跳过 {skipped} 行)")]
    NoValidRows { skipped: usize },

    // ===== 调用方文件错误（按路径导入） =====
    #[error("文件读取失败: {0}")]
    FileRead(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),
}

impl ImportError {
    /// 稳定的错误类别码（供调用方分支/埋点）
    pub fn kind(&self) -> &'static str {
        match self {
            ImportError::Decode(_) => "decode_error",
            ImportError::EmptySheet => "empty_sheet",
            ImportError::MissingColumn { .. } => "missing_column",
            ImportError::NoValidRows { .. } => "no_valid_rows",
            ImportError::FileRead(_) => "file_read_error",
            ImportError::UnsupportedFormat(_) => "unsupported_format",
        }
    }

    /// 面向用户的提示信息（按指定语言）
    pub fn user_message(&self, locale: &str) -> String {
        match self {
            ImportError::Decode(reason) => {
                i18n::t_in(locale, "import.decode_failed", &[("reason", reason)])
            }
            ImportError::EmptySheet => i18n::t_in(locale, "import.empty_sheet", &[]),
            ImportError::MissingColumn { kind } => match kind {
                ColumnRole::Nb10 => i18n::t_in(locale, "import.missing_nb10", &[]),
                ColumnRole::ValueScore => i18n::t_in(locale, "import.missing_value_score", &[]),
                other => i18n::t_in(
                    locale,
                    "import.missing_column",
                    &[("column", other.as_str())],
                ),
            },
            ImportError::NoValidRows { skipped } => i18n::t_in(
                locale,
                "import.no_valid_rows",
                &[("skipped", &skipped.to_string())],
            ),
            ImportError::FileRead(reason) => {
                i18n::t_in(locale, "import.file_read_failed", &[("reason", reason)])
            }
            ImportError::UnsupportedFormat(ext) => {
                i18n::t_in(locale, "import.unsupported_format", &[("ext", ext)])
            }
        }
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileRead(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::Decode(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::Decode(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::Decode(err.to_string())
    }
}

impl From<calamine::XlsError> for ImportError {
    fn from(err: calamine::XlsError) -> Self {
        ImportError::Decode(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
