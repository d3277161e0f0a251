use catalog_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 非生产环境加载 .env
    let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
    if environment != "production" {
        let _ = dotenv::dotenv();
    }

    // 2. 加载配置并初始化日志
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    // 打印横幅
    print_banner();

    tracing::info!("Catalog server starting...");

    // 3. 初始化服务器状态 (连接池、迁移、分类缓存)
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
