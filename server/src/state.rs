// server/src/state.rs
use crate::config::AppConfig;
use crate::services::ProductService;
use catalog::UserMenu;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub products: ProductService,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn user_menu(&self) -> UserMenu {
    UserMenu::for_user(self.config.display_user.clone())
  }
}

#[cfg(test)]
impl AppState {
  /// Fresh in-memory state with the default config values.
  pub fn in_memory() -> Self {
    use crate::config::LogFormat;
    use crate::store::MemoryProductStore;
    use catalog::User;

    let config = AppConfig {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      database_url: None,
      app_base_url: "http://127.0.0.1:8080".to_string(),
      display_user: User::new("Test User", "test@example.com"),
      log_format: LogFormat::Pretty,
      seed_db: false,
    };
    Self {
      products: ProductService::new(Arc::new(MemoryProductStore::new())),
      config: Arc::new(config),
    }
  }
}
