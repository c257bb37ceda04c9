//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_aula_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AulaError {
            $($variant(String),)*
        }

        impl AulaError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AulaError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AulaError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AulaError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AulaError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AulaError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_aula_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    StoragePluginNotFound("E010", "Storage Plugin Not Found"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
}

impl AulaError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AulaError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for AulaError {
    fn from(err: sea_orm::DbErr) -> Self {
        AulaError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for AulaError {
    fn from(err: std::io::Error) -> Self {
        AulaError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for AulaError {
    fn from(err: serde_json::Error) -> Self {
        AulaError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for AulaError {
    fn from(err: chrono::ParseError) -> Self {
        AulaError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AulaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AulaError::cache_connection("test").code(), "E001");
        assert_eq!(AulaError::database_operation("test").code(), "E005");
        assert_eq!(AulaError::validation("test").code(), "E007");
        assert_eq!(AulaError::authorization("test").code(), "E013");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AulaError::authentication("test").error_type(),
            "Authentication Error"
        );
        assert_eq!(
            AulaError::not_found("test").error_type(),
            "Resource Not Found"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AulaError::validation("Fecha inválida");
        assert_eq!(err.message(), "Fecha inválida");
    }

    #[test]
    fn test_from_chrono_parse_error() {
        let parse_err = "no-es-fecha".parse::<chrono::NaiveDate>().unwrap_err();
        let err: AulaError = parse_err.into();
        assert_eq!(err.code(), "E011");
    }
}
