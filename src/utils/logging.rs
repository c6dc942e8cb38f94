//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::orchestrator::RunSummary;

/// 初始化日志
///
/// 默认级别为 `info`，可通过 `RUST_LOG` 覆盖；重复调用不会报错
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 随机成绩表生成");
    info!("📄 学生名单: {}", config.students_file.display());
    info!("📄 作业列表: {}", config.assignments_file.display());
    info!(
        "🎯 分数区间: {}-{}",
        config.mark_range.min, config.mark_range.max
    );
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn log_summary(summary: &RunSummary) {
    info!("\n{}", "=".repeat(60));
    info!("📊 处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("👥 学生: {}", summary.students);
    info!("📝 作业: {}", summary.assignments);
    if summary.skipped_rows > 0 {
        info!("⏭️ 跳过空白行: {}", summary.skipped_rows);
    }
    info!("{}", "=".repeat(60));
    info!("\n成绩表已保存至: {}", summary.output_path.display());
}
