//! 成绩表处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **读取输入**：学生名单和作业列表，任何一个失败都不写输出
//! 2. **生成成绩**：委托 `MarkGenerator`
//! 3. **写出结果**：委托 `CsvWriter`
//! 4. **汇报结果**：成功或失败都只输出一条汇总信息

use rand::Rng;
use std::path::PathBuf;
use tracing::{error, info};

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{read_assignments, read_student_records, MarkTable, StudentRecord};
use crate::services::{CsvWriter, MarkGenerator};

/// 一次运行的统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// 写入成绩表的学生数
    pub students: usize,
    /// 作业数
    pub assignments: usize,
    /// 被跳过的空白学生记录数
    pub skipped_rows: usize,
    pub output_path: PathBuf,
}

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 使用系统随机数源运行
    pub fn run(&self) -> AppResult<RunSummary> {
        let mut generator = MarkGenerator::from_entropy(self.config.mark_range);
        self.run_with(&mut generator)
    }

    /// 使用指定的成绩生成器运行
    pub fn run_with<R: Rng>(&self, generator: &mut MarkGenerator<R>) -> AppResult<RunSummary> {
        let (students, assignments) = self.load_inputs().map_err(|e| {
            error!("❌ 读取学生或作业数据失败");
            e
        })?;

        let table = generator.generate(&students, &assignments);
        let skipped_rows = students.len() - table.student_rows().len();

        let writer = CsvWriter::new(&self.config.output_file);
        writer.write(&table)?;
        info!("✓ CSV 文件已成功生成: {}", writer.output_path().display());

        Ok(summarize(&table, assignments.len(), skipped_rows, writer))
    }

    /// 依次读取学生名单和作业列表
    fn load_inputs(&self) -> AppResult<(Vec<StudentRecord>, Vec<String>)> {
        let students = read_student_records(&self.config.students_file)?;
        let assignments = read_assignments(&self.config.assignments_file)?;
        info!(
            "✓ 读取到 {} 行学生记录，{} 项作业",
            students.len(),
            assignments.len()
        );
        Ok((students, assignments))
    }
}

fn summarize(
    table: &MarkTable,
    assignments: usize,
    skipped_rows: usize,
    writer: CsvWriter,
) -> RunSummary {
    RunSummary {
        students: table.student_rows().len(),
        assignments,
        skipped_rows,
        output_path: writer.output_path().to_path_buf(),
    }
}
