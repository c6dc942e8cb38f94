//! 成绩表
//!
//! 第 0 行是表头 `["Student", 作业1, 作业2, ...]`，之后每行对应一名学生，
//! 所有行的宽度都等于表头宽度

/// 表头第一列的标签
pub const HEADER_LABEL: &str = "Student";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkTable {
    rows: Vec<Vec<String>>,
}

impl MarkTable {
    /// 根据作业列表创建只含表头的成绩表
    pub fn new(assignments: &[String]) -> Self {
        let mut header = Vec::with_capacity(assignments.len() + 1);
        header.push(HEADER_LABEL.to_string());
        header.extend(assignments.iter().cloned());
        Self { rows: vec![header] }
    }

    /// 追加一名学生的成绩行
    ///
    /// `marks` 的数量必须与作业数量一致
    pub fn push_row(&mut self, name: &str, marks: impl IntoIterator<Item = u32>) {
        let mut row = Vec::with_capacity(self.column_count());
        row.push(name.to_string());
        row.extend(marks.into_iter().map(|mark| mark.to_string()));
        debug_assert_eq!(row.len(), self.column_count(), "成绩行宽度与表头不一致");
        self.rows.push(row);
    }

    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// 全部行（含表头）
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// 学生行（不含表头）
    pub fn student_rows(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header().len()
    }

    /// 序列化为 CSV 文本
    ///
    /// 字段用逗号连接，行用 `\n` 连接，不做转义，末尾没有换行
    pub fn to_csv(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join(","))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
