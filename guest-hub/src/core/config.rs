use crate::hotel::HotelDirectory;
use crate::utils::time::DEFAULT_TIMEZONE;

/// 服务器配置 - Guest Hub 的所有配置项
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (存在时写入滚动日志) |
/// | HOTEL_TIMEZONE | Europe/Sofia | 默认酒店时区 |
/// | SOURCE_TIMEOUT_MS | 10000 | 表格拉取超时(毫秒) |
/// | DEFAULT_HOTEL_SLUG | demo | 默认酒店 slug |
/// | CHAT_REPLY_URL | - | 聊天回复服务地址 |
///
/// 酒店表格地址见 [`HotelDirectory`]。
///
/// # 示例
///
/// ```ignore
/// SHEET_CONFIG_URL=https://... SHEET_I18N_URL=https://... cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 酒店未配置时区时使用
    pub default_timezone: String,
    /// 单个表格的拉取超时 (毫秒)
    pub source_timeout_ms: u64,
    /// 聊天回复服务地址，未设置时聊天接口不可用
    pub chat_reply_url: Option<String>,
    /// slug → 表格地址
    pub hotels: HotelDirectory,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let default_slug =
            std::env::var("DEFAULT_HOTEL_SLUG").unwrap_or_else(|_| crate::hotel::builder::DEFAULT_SLUG.into());

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: non_blank_var("LOG_DIR"),
            default_timezone: std::env::var("HOTEL_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.into()),
            source_timeout_ms: std::env::var("SOURCE_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            chat_reply_url: non_blank_var("CHAT_REPLY_URL"),
            hotels: HotelDirectory::from_env(&default_slug),
        }
    }

    /// 使用指定的酒店目录构建配置 (其余取默认值)
    ///
    /// 常用于测试场景
    pub fn with_hotels(hotels: HotelDirectory) -> Self {
        Self {
            http_port: 3000,
            environment: "test".into(),
            log_level: "info".into(),
            log_dir: None,
            default_timezone: DEFAULT_TIMEZONE.into(),
            source_timeout_ms: 10000,
            chat_reply_url: None,
            hotels,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
