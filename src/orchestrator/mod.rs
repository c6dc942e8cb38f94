//! 编排层（Orchestration Layer）
//!
//! 按固定顺序串联各个能力：
//!
//! ```text
//! models::loaders (读取 students.txt / assignments.txt)
//!     ↓
//! services::MarkGenerator (生成成绩表)
//!     ↓
//! services::CsvWriter (写入 marks.csv)
//! ```
//!
//! 本层不做具体业务判断，只负责调度、失败汇报和统计

pub mod mark_processor;

pub use mark_processor::{App, RunSummary};
