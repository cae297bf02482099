use std::fmt;

#[derive(Debug, Clone)]
pub enum DynQrError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    CodeGeneration(String),
    Internal(String),
}

impl DynQrError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            DynQrError::DatabaseConfig(_) => "E001",
            DynQrError::DatabaseConnection(_) => "E002",
            DynQrError::DatabaseOperation(_) => "E003",
            DynQrError::FileOperation(_) => "E004",
            DynQrError::Validation(_) => "E005",
            DynQrError::NotFound(_) => "E006",
            DynQrError::Serialization(_) => "E007",
            DynQrError::CodeGeneration(_) => "E008",
            DynQrError::Internal(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            DynQrError::DatabaseConfig(_) => "Database Configuration Error",
            DynQrError::DatabaseConnection(_) => "Database Connection Error",
            DynQrError::DatabaseOperation(_) => "Database Operation Error",
            DynQrError::FileOperation(_) => "File Operation Error",
            DynQrError::Validation(_) => "Validation Error",
            DynQrError::NotFound(_) => "Resource Not Found",
            DynQrError::Serialization(_) => "Serialization Error",
            DynQrError::CodeGeneration(_) => "Code Generation Error",
            DynQrError::Internal(_) => "Internal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            DynQrError::DatabaseConfig(msg)
            | DynQrError::DatabaseConnection(msg)
            | DynQrError::DatabaseOperation(msg)
            | DynQrError::FileOperation(msg)
            | DynQrError::Validation(msg)
            | DynQrError::NotFound(msg)
            | DynQrError::Serialization(msg)
            | DynQrError::CodeGeneration(msg)
            | DynQrError::Internal(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 启动失败）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for DynQrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DynQrError {}

// 便捷的构造函数
impl DynQrError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        DynQrError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        DynQrError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        DynQrError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        DynQrError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        DynQrError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        DynQrError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        DynQrError::Serialization(msg.into())
    }

    pub fn code_generation<T: Into<String>>(msg: T) -> Self {
        DynQrError::CodeGeneration(msg.into())
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        DynQrError::Internal(msg.into())
    }
}

impl From<sea_orm::DbErr> for DynQrError {
    fn from(err: sea_orm::DbErr) -> Self {
        DynQrError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for DynQrError {
    fn from(err: std::io::Error) -> Self {
        DynQrError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for DynQrError {
    fn from(err: serde_json::Error) -> Self {
        DynQrError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DynQrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            DynQrError::database_config("x"),
            DynQrError::database_connection("x"),
            DynQrError::database_operation("x"),
            DynQrError::file_operation("x"),
            DynQrError::validation("x"),
            DynQrError::not_found("x"),
            DynQrError::serialization("x"),
            DynQrError::code_generation("x"),
            DynQrError::internal("x"),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = DynQrError::not_found("code abc123 not found");
        assert_eq!(err.to_string(), "Resource Not Found: code abc123 not found");
        assert_eq!(err.message(), "code abc123 not found");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DynQrError = io.into();
        assert_eq!(err.code(), "E004");
        assert!(err.message().contains("denied"));
    }
}
