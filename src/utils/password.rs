//! 密码校验
//!
//! 历史平台的约定：persons.password_hash 为空时，密码就是证件号；
//! 用户通过找回密码流程设置自定义密码后，只认 bcrypt 哈希。

use crate::errors::AulaError;

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, AulaError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AulaError::validation(format!("密码哈希失败: {e}")))
}

/// 校验密码
///
/// `stored_hash` 为 None 时走证件号回退校验。
pub fn verify_password(password: &str, stored_hash: Option<&str>, document_number: &str) -> bool {
    match stored_hash {
        Some(hash) if !hash.is_empty() => bcrypt::verify(password, hash).unwrap_or(false),
        _ => !document_number.is_empty() && password == document_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Clave-Segura-9").unwrap();
        assert!(verify_password("Clave-Segura-9", Some(&hash), "12345"));
        assert!(!verify_password("otra-clave", Some(&hash), "12345"));
    }

    #[test]
    fn test_legacy_document_fallback() {
        assert!(verify_password("1032456789", None, "1032456789"));
        assert!(!verify_password("1032456789", None, "999"));
    }

    #[test]
    fn test_custom_password_disables_fallback() {
        // 设置了自定义密码后，证件号不再是有效密码
        let hash = hash_password("MiClaveNueva1").unwrap();
        assert!(!verify_password("1032456789", Some(&hash), "1032456789"));
    }

    #[test]
    fn test_empty_hash_behaves_as_legacy() {
        assert!(verify_password("555", Some(""), "555"));
    }

    #[test]
    fn test_garbage_hash_rejected() {
        assert!(!verify_password("555", Some("no-es-un-hash"), "555"));
    }
}
