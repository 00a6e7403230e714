//! itemcheck - 商品状态模拟服务
//!
//! POST /check 按前缀返回商品状态，GET / 返回运行提示

use std::sync::Arc;

use itemcheck::config::{load_config, print_config, LogConfig};
use itemcheck::infrastructure::adapters::{MockStatusClient, MockStatusClientConfig};
use itemcheck::infrastructure::http::{AppState, HttpServer, ServerConfig};

/// 初始化日志（RUST_LOG 优先于配置）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},itemcheck={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("itemcheck - Mock item status service");
    print_config(&config);

    let rules = config
        .check
        .prefix_rules()
        .map_err(|e| anyhow::anyhow!("Invalid prefix rules: {}", e))?;

    let status_client = Arc::new(MockStatusClient::new(MockStatusClientConfig {
        latency: config.check.latency(),
        rules,
    }));

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let state = AppState::new(status_client);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                // 无法监听信号时保持运行
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
