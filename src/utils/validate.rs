use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("Invalid phone regex"));

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    // 手机号：7-15 位数字，可带国家码前缀
    if !PHONE_RE.is_match(phone) {
        return Err("Phone number format is invalid");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证新密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：6 字符（与历史平台的找回密码流程一致）
/// - 不能与证件号相同（否则等于没改）
/// - 不能是常见弱密码
pub fn validate_new_password(password: &str, document_number: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 6 {
        errors.push("Password must be at least 6 characters long");
    }

    if !document_number.is_empty() && password == document_number {
        errors.push("Password must be different from the document number");
    }

    let weak_passwords = [
        "password", "123456", "1234567", "12345678", "123456789", "qwerty", "abc123", "admin123",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_new_password_simple(password: &str, document_number: &str) -> Result<(), String> {
    let result = validate_new_password(password, document_number);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("docente@colegio.edu.co").is_ok());
        assert!(validate_email("sin-arroba.com").is_err());
    }

    #[test]
    fn test_valid_phone() {
        assert!(validate_phone("3001234567").is_ok());
        assert!(validate_phone("+573001234567").is_ok());
        assert!(validate_phone("12-34").is_err());
    }

    #[test]
    fn test_short_password() {
        let result = validate_new_password("abc", "123");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 6 characters long")
        );
    }

    #[test]
    fn test_password_equal_to_document() {
        let result = validate_new_password("1032456789", "1032456789");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be different from the document number")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_new_password("123456789", "55");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_new_password("ClaveNueva1", "1032456789").is_valid);
    }
}
