use anyhow::Result;
use mark_sheet::{logging, App, Config};

fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 固定配置
    let config = Config::default();
    logging::log_startup(&config);

    // 读取 → 生成 → 写入
    let summary = App::new(config).run()?;
    logging::log_summary(&summary);

    Ok(())
}
