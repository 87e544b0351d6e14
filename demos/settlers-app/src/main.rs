//! # Settlers 装配演示应用
//!
//! 演示服务器的启动契约：进程启动时对 `services` 和 `controllers`
//! 两个命名空间做一次扫描注册，之后所有组件都通过解析门面获取依赖。

mod controllers;
mod services;

use controllers::GameController;
use tracing::info;
use wiring_common::Namespace;
use wiring_composition::ContextBootstrapper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("启动 Settlers 演示应用");

    let resolver = ContextBootstrapper::new()
        .add_namespace(Namespace("services"))
        .add_namespace(Namespace("controllers"))
        .bootstrap_resolver()
        .await?;

    let controller = resolver.get::<GameController>().await?;
    info!("状态查询: {}", controller.handle_status());

    info!("应用退出");
    Ok(())
}
