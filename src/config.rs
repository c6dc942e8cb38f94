use std::path::{Path, PathBuf};

/// 学生名单文件
pub const STUDENTS_FILE: &str = "students.txt";
/// 作业列表文件
pub const ASSIGNMENTS_FILE: &str = "assignments.txt";
/// 成绩表输出文件
pub const OUTPUT_FILE: &str = "marks.csv";

/// 分数区间（闭区间）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkRange {
    pub min: u32,
    pub max: u32,
}

impl MarkRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// 判断分数是否落在区间内
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for MarkRange {
    fn default() -> Self {
        Self::new(65, 85)
    }
}

/// 程序配置
///
/// 文件名和分数区间都是固定值，不读取环境变量或命令行参数
#[derive(Clone, Debug)]
pub struct Config {
    /// 学生名单路径
    pub students_file: PathBuf,
    /// 作业列表路径
    pub assignments_file: PathBuf,
    /// 成绩表输出路径
    pub output_file: PathBuf,
    /// 随机分数区间
    pub mark_range: MarkRange,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            students_file: PathBuf::from(STUDENTS_FILE),
            assignments_file: PathBuf::from(ASSIGNMENTS_FILE),
            output_file: PathBuf::from(OUTPUT_FILE),
            mark_range: MarkRange::default(),
        }
    }
}

impl Config {
    /// 在指定目录下使用固定文件名
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            students_file: dir.join(STUDENTS_FILE),
            assignments_file: dir.join(ASSIGNMENTS_FILE),
            output_file: dir.join(OUTPUT_FILE),
            ..Self::default()
        }
    }
}
