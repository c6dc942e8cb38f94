//! CSV 写入服务 - 业务能力层
//!
//! 只负责"把成绩表写成 marks.csv"能力，不关心流程

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, error};

use crate::error::{AppError, AppResult};
use crate::models::MarkTable;

/// CSV 写入服务
///
/// 先写入同目录下的临时文件，再整体替换目标文件，
/// 失败时目标文件保持原样
pub struct CsvWriter {
    output_path: PathBuf,
}

impl CsvWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// 写入成绩表，覆盖已有文件
    ///
    /// # 参数
    /// - `table`: 待写入的成绩表
    ///
    /// # 返回
    /// 成功返回 `Ok(())`；目标无法写入时返回 `AppError::Write`，原文件保持不变
    pub fn write(&self, table: &MarkTable) -> AppResult<()> {
        let content = table.to_csv();
        debug!(
            "写入 CSV: {} | {} 行 | {} 字节",
            self.output_path.display(),
            table.row_count(),
            content.len()
        );

        self.write_atomic(content.as_bytes()).map_err(|e| {
            error!("❌ 写入 CSV 文件失败 {}: {}", self.output_path.display(), e);
            AppError::write_failed(&self.output_path, e)
        })
    }

    fn write_atomic(&self, data: &[u8]) -> std::io::Result<()> {
        let dir = match self.output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(data)?;
        tmp.as_file().set_permissions(self.target_permissions(&tmp)?)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.output_path).map_err(|e| e.error)?;
        Ok(())
    }

    /// 替换后的文件权限：沿用已有目标文件的权限，否则使用 0644
    fn target_permissions(&self, tmp: &NamedTempFile) -> std::io::Result<fs::Permissions> {
        if let Ok(meta) = fs::metadata(&self.output_path) {
            return Ok(meta.permissions());
        }

        #[allow(unused_mut)]
        let mut perms = tmp.as_file().metadata()?.permissions();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            perms.set_mode(0o644);
        }
        Ok(perms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> MarkTable {
        let mut table = MarkTable::new(&["HW1".to_string(), "HW2".to_string()]);
        table.push_row("Alice", [70, 81]);
        table
    }

    #[test]
    fn writes_csv_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marks.csv");

        CsvWriter::new(&path).write(&sample_table()).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Student,HW1,HW2\nAlice,70,81"
        );
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marks.csv");
        fs::write(&path, "old content that is longer than the new one\n\n\n").unwrap();

        CsvWriter::new(&path).write(&sample_table()).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Student,HW1,HW2\nAlice,70,81"
        );
    }

    #[test]
    fn missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("marks.csv");

        let err = CsvWriter::new(&path).write(&sample_table()).unwrap_err();
        assert!(err.is_write());
        assert_eq!(err.path(), path.as_path());
        assert!(!path.exists());
    }

    #[test]
    fn failed_write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        // 目标路径是一个目录，替换必然失败
        let path = dir.path().join("marks.csv");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "x").unwrap();

        let err = CsvWriter::new(&path).write(&sample_table()).unwrap_err();
        assert!(err.is_write());

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert!(path.join("keep.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marks.csv");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        CsvWriter::new(&path).write(&sample_table()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_not_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marks.csv");

        CsvWriter::new(&path).write(&sample_table()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
