/*
 * Responsibility
 * - 環境変数や設定の読み込み (APP_ENV)
 * - 401 応答に詳細メッセージを載せるかどうかの判断
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        std::env::var("APP_ENV")
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub app_env: AppEnv,
}

impl Config {
    pub fn new(app_env: AppEnv) -> Self {
        Self { app_env }
    }

    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            app_env: AppEnv::from_env(),
        }
    }

    /// Development builds echo why a header was rejected; production keeps it generic.
    pub fn expose_error_detail(&self) -> bool {
        !self.app_env.is_production()
    }
}
