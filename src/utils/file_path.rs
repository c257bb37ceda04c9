//! 附件路径解析
//!
//! stored_files.unique_name 的三种历史形态：
//! 1. 绝对路径（当前写入格式）：直接使用
//! 2. 相对路径：拼在存储根目录下
//! 3. 裸文件名（最老的记录）：先补上学校 DANE 代码目录，再拼根目录
//!
//! 路径分隔符统一按 '/' 处理，Windows 反斜杠在入口处归一化。

use std::path::{Path, PathBuf};

/// 查不到 DANE 代码时使用的目录名
pub const UNKNOWN_DANE_CODE: &str = "SIN_DANE";

/// 把 unique_name 解析为磁盘上的完整路径
pub fn resolve_stored_path(storage_root: &Path, unique_name: &str, dane_code: &str) -> PathBuf {
    let normalized = unique_name.replace('\\', "/");

    if Path::new(&normalized).is_absolute() {
        return PathBuf::from(normalized);
    }

    if normalized.contains('/') {
        return storage_root.join(normalized);
    }

    storage_root.join(dane_code).join(normalized)
}

/// 新附件的存放路径：<root>/<dane>/<uuid>-<original_name>
pub fn build_upload_path(storage_root: &Path, dane_code: &str, original_name: &str) -> PathBuf {
    let stored_name = format!("{}-{}", uuid::Uuid::new_v4(), original_name);
    storage_root.join(dane_code).join(stored_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_used_verbatim() {
        let root = Path::new("/srv/aula/files");
        let resolved = resolve_stored_path(root, "/data/old/guia.pdf", "111222");
        assert_eq!(resolved, PathBuf::from("/data/old/guia.pdf"));
    }

    #[test]
    fn test_relative_path_joined_to_root() {
        let root = Path::new("/srv/aula/files");
        let resolved = resolve_stored_path(root, "111222/guia.pdf", "999999");
        assert_eq!(resolved, PathBuf::from("/srv/aula/files/111222/guia.pdf"));
    }

    #[test]
    fn test_bare_name_prefixed_with_dane_code() {
        let root = Path::new("/srv/aula/files");
        let resolved = resolve_stored_path(root, "guia.pdf", "111222");
        assert_eq!(resolved, PathBuf::from("/srv/aula/files/111222/guia.pdf"));
    }

    #[test]
    fn test_backslashes_normalized() {
        let root = Path::new("/srv/aula/files");
        let resolved = resolve_stored_path(root, "111222\\guia.pdf", "999999");
        assert_eq!(resolved, PathBuf::from("/srv/aula/files/111222/guia.pdf"));
    }

    #[test]
    fn test_upload_path_keeps_original_name_suffix() {
        let root = Path::new("/srv/aula/files");
        let path = build_upload_path(root, "111222", "taller.docx");
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.ends_with("-taller.docx"));
        assert_eq!(path.parent().unwrap(), root.join("111222"));
    }
}
