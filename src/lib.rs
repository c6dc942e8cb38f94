//! # Mark Sheet
//!
//! 读取学生名单和作业列表，为每名学生的每项作业生成随机分数，并写出 CSV 成绩表
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `StudentRecord`、`MarkTable`
//! - `models/loaders` - 解析 students.txt / assignments.txt
//!
//! ### ② 业务能力层（Services）
//! - `MarkGenerator` - 随机分数生成能力（随机数源可注入）
//! - `CsvWriter` - 原子写入 marks.csv 能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/mark_processor` - 读取 → 生成 → 写入，汇报成功或失败
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::{Config, MarkRange};
pub use error::{AppError, AppResult};
pub use models::{MarkTable, StudentRecord};
pub use orchestrator::{App, RunSummary};
pub use services::{CsvWriter, MarkGenerator};
pub use utils::logging;
