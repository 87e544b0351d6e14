//! 服务命名空间
//!
//! 真实服务器中这里承载对局和大厅的业务逻辑；演示应用只保留
//! 装配所需的组件骨架。

use std::sync::Arc;
use wiring_common::{DependencySet, Registerable, ResolveResult, TypeInfo};
use wiring_macros::component;

/// 对局服务
#[component(namespace = "services")]
#[derive(Debug)]
pub struct GameService;

impl GameService {
    /// 当前对局状态
    pub fn status(&self) -> &'static str {
        "no game in progress"
    }
}

impl Registerable for GameService {
    fn assemble(_deps: &DependencySet) -> ResolveResult<Self> {
        Ok(Self)
    }
}

/// 大厅服务
#[component(namespace = "services")]
#[derive(Debug)]
pub struct LobbyService {
    game: Arc<GameService>,
}

impl LobbyService {
    /// 大厅公告
    pub fn announcement(&self) -> String {
        format!("lobby open ({})", self.game.status())
    }
}

impl Registerable for LobbyService {
    fn dependencies() -> Vec<TypeInfo> {
        vec![TypeInfo::of::<GameService>()]
    }

    fn assemble(deps: &DependencySet) -> ResolveResult<Self> {
        Ok(Self {
            game: deps.get::<GameService>()?,
        })
    }
}
