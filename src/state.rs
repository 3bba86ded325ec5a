use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::{
    config::Config,
    models::{comment::Comment, tweet::Tweet},
    services::ResourceManager,
    store::{
        memory::{MemoryCollection, MemoryDirectory},
        postgres::{PgCollection, PgUserDirectory},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub comments: ResourceManager<Comment>,
    pub tweets: ResourceManager<Tweet>,
    pub config: Config,
}

impl AppState {
    /// Comments trust their parent video; tweets require the owning user to
    /// exist in the `users` table.
    pub fn postgres(pool: PgPool, config: Config) -> Self {
        Self {
            comments: ResourceManager::new(Arc::new(PgCollection::<Comment>::new(pool.clone()))),
            tweets: ResourceManager::new(Arc::new(PgCollection::<Tweet>::new(pool.clone())))
                .with_scope_directory(Arc::new(PgUserDirectory::new(pool))),
            config,
        }
    }

    /// Process-local storage with `users` as the user directory.
    pub fn in_memory(users: Arc<MemoryDirectory>, config: Config) -> Self {
        Self {
            comments: ResourceManager::new(Arc::new(MemoryCollection::<Comment>::new())),
            tweets: ResourceManager::new(Arc::new(MemoryCollection::<Tweet>::new()))
                .with_scope_directory(users),
            config,
        }
    }
}

impl FromRef<AppState> for ResourceManager<Comment> {
    fn from_ref(state: &AppState) -> Self {
        state.comments.clone()
    }
}

impl FromRef<AppState> for ResourceManager<Tweet> {
    fn from_ref(state: &AppState) -> Self {
        state.tweets.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
