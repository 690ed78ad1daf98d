//! DNet 服务商元数据 Web 服务
//!
//! 为控制台表单渲染层提供服务商元数据查询（RPC 风格）

mod config;
mod error;
mod handlers;
mod state;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::AppConfig;
use state::AppState;

/// 配置路由
fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/invoke", web::post().to(handlers::invoke::invoke_handler)),
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志（tracing-log 桥接 log 记录：核心库与 actix Logger）
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,dnet_registry_web=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("DNet 元数据服务启动中...");

    // 加载配置
    let config = AppConfig::load()?;
    tracing::info!("配置加载完成");

    // 构建注册表（启动时一次，之后只读）
    let state = AppState::from_config(&config.registry)?;

    // 启动服务器
    let bind_addr = config.bind_addr();
    let workers = if config.server.workers == 0 {
        num_cpus::get()
    } else {
        config.server.workers
    };

    tracing::info!("服务器启动于 http://{} (workers: {})", bind_addr, workers);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .workers(workers)
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
