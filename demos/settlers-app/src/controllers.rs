//! 控制器命名空间
//!
//! 真实服务器中这里把传输层请求映射到服务调用；演示应用只保留
//! 装配所需的组件骨架。

use crate::services::{GameService, LobbyService};
use std::sync::Arc;
use wiring_common::{DependencySet, Registerable, ResolveResult, TypeInfo};
use wiring_macros::component;

/// 对局控制器
#[component(namespace = "controllers")]
#[derive(Debug)]
pub struct GameController {
    game: Arc<GameService>,
    lobby: Arc<LobbyService>,
}

impl GameController {
    /// 处理状态查询
    pub fn handle_status(&self) -> String {
        format!(
            "game: {}, {}",
            self.game.status(),
            self.lobby.announcement()
        )
    }
}

impl Registerable for GameController {
    fn dependencies() -> Vec<TypeInfo> {
        vec![TypeInfo::of::<GameService>(), TypeInfo::of::<LobbyService>()]
    }

    fn assemble(deps: &DependencySet) -> ResolveResult<Self> {
        Ok(Self {
            game: deps.get::<GameService>()?,
            lobby: deps.get::<LobbyService>()?,
        })
    }
}
