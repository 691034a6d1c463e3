//! Soccer Portal - 足球门户网关代理
//!
//! 架构:
//! - Domain: user, soccer 记录
//! - Application: store, actions, api_client, ports
//! - Infrastructure: http, adapters, memory, persistence

use std::sync::Arc;

use soccer_portal::config::{load_config, print_config, ExecutionContext};
use soccer_portal::infrastructure::adapters::{HttpGatewayClient, HttpGatewayClientConfig};
use soccer_portal::infrastructure::http::{AppState, HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：网关覆盖变量 > 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},soccer_portal={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Soccer Portal - 网关代理");
    print_config(&config);

    // 创建网关客户端（服务端上下文）
    let mut gateway_config =
        HttpGatewayClientConfig::new(config.gateway.base_url(ExecutionContext::Server));
    if let Some(secs) = config.gateway.timeout_secs {
        gateway_config = gateway_config.with_timeout(secs);
    }
    let gateway = Arc::new(HttpGatewayClient::new(gateway_config)?);

    // 创建 HTTP 服务器
    let state = AppState::new(gateway);
    let server = HttpServer::new((&config.server).into(), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
