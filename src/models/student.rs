//! 学生记录

/// 学生名单中的一行
///
/// 第一个字段是学生姓名，其余字段保留但不参与成绩生成
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentRecord(Vec<String>);

impl StudentRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    /// 将一行文本按逗号拆分为字段
    pub fn parse_line(line: &str) -> Self {
        Self(line.split(',').map(str::to_string).collect())
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// 学生姓名（第一个字段）
    pub fn name(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// 空行或姓名为空的记录
    pub fn is_blank(&self) -> bool {
        self.name().map_or(true, str::is_empty)
    }
}
