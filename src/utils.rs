use std::path::Path;

/// 提取文件名的最后一段，避免上传的文件名逃逸出保存目录
pub fn safe_file_name(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_unchanged() {
        assert_eq!(safe_file_name("cat.png"), "cat.png");
    }

    #[test]
    fn path_components_stripped() {
        assert_eq!(safe_file_name("../../etc/passwd"), "passwd");
        assert_eq!(safe_file_name("a/b/c.jpg"), "c.jpg");
    }

    #[test]
    fn empty_name_replaced() {
        assert_eq!(safe_file_name(""), "unnamed");
        assert_eq!(safe_file_name(".."), "unnamed");
    }
}
