//! 成绩生成服务 - 业务能力层
//!
//! 只负责"给学生打随机分"能力，随机数源由调用方注入

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::MarkRange;
use crate::models::{MarkTable, StudentRecord};

/// 成绩生成器
///
/// 每个分数独立地从闭区间 `range` 中均匀抽取
pub struct MarkGenerator<R: Rng = StdRng> {
    rng: R,
    range: MarkRange,
}

impl MarkGenerator<StdRng> {
    /// 使用系统熵初始化随机数源，每次运行结果不同
    pub fn from_entropy(range: MarkRange) -> Self {
        Self::with_rng(StdRng::from_entropy(), range)
    }

    /// 使用固定种子，结果可复现
    pub fn with_seed(range: MarkRange, seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), range)
    }
}

impl<R: Rng> MarkGenerator<R> {
    pub fn with_rng(rng: R, range: MarkRange) -> Self {
        Self { rng, range }
    }

    pub fn range(&self) -> MarkRange {
        self.range
    }

    /// 抽取一个分数
    ///
    /// # 返回
    /// 闭区间 `range` 内的随机整数
    pub fn draw(&mut self) -> u32 {
        self.rng.gen_range(self.range.min..=self.range.max)
    }

    /// 生成成绩表
    ///
    /// 没有字段或姓名为空的记录（通常来自文件末尾的空行）会被跳过
    ///
    /// # 参数
    /// - `students`: 学生记录，取第一个字段作为姓名
    /// - `assignments`: 作业名称，决定列顺序
    ///
    /// # 返回
    /// 表头加每名学生一行的成绩表，每行宽度都是作业数加一
    pub fn generate(&mut self, students: &[StudentRecord], assignments: &[String]) -> MarkTable {
        let mut table = MarkTable::new(assignments);

        for (index, student) in students.iter().enumerate() {
            let name = match student.name() {
                Some(name) if !name.is_empty() => name,
                _ => {
                    debug!("跳过第 {} 行空白学生记录", index + 1);
                    continue;
                }
            };

            let marks: Vec<u32> = (0..assignments.len()).map(|_| self.draw()).collect();
            table.push_row(name, marks);
        }

        table
    }
}
