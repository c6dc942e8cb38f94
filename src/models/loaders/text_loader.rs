use crate::error::{AppError, AppResult};
use crate::models::student::StudentRecord;
use std::fs;
use std::path::Path;
use tracing::{debug, error};

/// 读取整个文本文件，失败时记录诊断信息
fn read_text(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        error!("❌ 无法读取文件 {}: {}", path.display(), e);
        AppError::read_failed(path, e)
    })
}

/// 按行（`\n`）和字段（`,`）拆分文本文件
///
/// 末尾的空行会得到 `[""]`，不做过滤
///
/// # 参数
/// - `path`: 文本文件路径
///
/// # 返回
/// 每行一个字段列表；文件无法读取或不是 UTF-8 时返回 `AppError::Read`
pub fn read_rows(path: &Path) -> AppResult<Vec<Vec<String>>> {
    let content = read_text(path)?;
    let rows: Vec<Vec<String>> = content
        .split('\n')
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect();

    debug!("从 {} 读取了 {} 行", path.display(), rows.len());
    Ok(rows)
}

/// 读取学生名单，每行一名学生
///
/// # 参数
/// - `path`: 学生名单路径
///
/// # 返回
/// 按文件顺序排列的学生记录，包括空行
pub fn read_student_records(path: &Path) -> AppResult<Vec<StudentRecord>> {
    let records = read_rows(path)?
        .into_iter()
        .map(StudentRecord::new)
        .collect();
    Ok(records)
}

/// 读取作业列表
///
/// 整个文件按逗号拆分，换行不作为分隔符；文件末尾的换行会被去掉，
/// 内容为空时返回空列表
///
/// # 参数
/// - `path`: 作业列表路径
///
/// # 返回
/// 按文件顺序排列的作业名称，决定成绩表的列顺序
pub fn read_assignments(path: &Path) -> AppResult<Vec<String>> {
    let content = read_text(path)?;
    let content = content.trim_end_matches(['\r', '\n']);

    if content.is_empty() {
        debug!("作业文件 {} 为空", path.display());
        return Ok(Vec::new());
    }

    let assignments: Vec<String> = content.split(',').map(str::to_string).collect();
    debug!("从 {} 读取了 {} 项作业", path.display(), assignments.len());
    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn students_are_split_by_line_and_comma() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "students.txt", "Alice,foo\nBob,bar");

        let records = read_student_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), Some("Alice"));
        assert_eq!(records[0].fields(), &["Alice".to_string(), "foo".to_string()]);
        assert_eq!(records[1].name(), Some("Bob"));
    }

    #[test]
    fn trailing_newline_keeps_blank_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "students.txt", "Alice\nBob\n");

        let records = read_student_records(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].fields(), &[String::new()]);
        assert!(records[2].is_blank());
    }

    #[test]
    fn assignments_ignore_newlines_as_separators() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "assignments.txt", "HW1,HW2,Final\n");

        let assignments = read_assignments(&path).unwrap();
        assert_eq!(assignments, vec!["HW1", "HW2", "Final"]);
    }

    #[test]
    fn empty_assignments_file_gives_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "assignments.txt", "");

        assert!(read_assignments(&path).unwrap().is_empty());
    }

    #[test]
    fn newline_only_assignments_file_gives_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "assignments.txt", "\n");

        assert!(read_assignments(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.txt");

        let err = read_student_records(&path).unwrap_err();
        assert!(err.is_read());
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assignments.txt");
        fs::write(&path, [0xff, 0xfe, b',', 0x80]).unwrap();

        assert!(read_assignments(&path).unwrap_err().is_read());
    }
}
