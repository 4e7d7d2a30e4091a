//! 服务器状态
//!
//! 启动后不可变，通过 `Arc` 在请求间廉价克隆。酒店配置不缓存，
//! 每个请求重新拉取表格。

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveTime;
use shared::error::{AppError, AppResult};
use shared::hotel::HotelConfiguration;

use crate::chat::{ChatReplyService, HttpChatReplyClient};
use crate::core::{Config, Result};
use crate::hotel::{BuildDefaults, load_hotel};
use crate::sheets::{HttpTableFetcher, TableFetcher};
use crate::utils::time::{hotel_timezone, local_time};
use crate::utils::{SharedClock, SystemClock};

#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub fetcher: Arc<dyn TableFetcher>,
    pub chat: Option<Arc<dyn ChatReplyService>>,
    pub clock: SharedClock,
}

impl ServerState {
    /// 初始化服务器状态 (HTTP 拉取 + 系统时钟)
    pub fn initialize(config: &Config) -> Result<Self> {
        let timeout = Duration::from_millis(config.source_timeout_ms);
        let fetcher = Arc::new(HttpTableFetcher::new(timeout)?);

        let chat: Option<Arc<dyn ChatReplyService>> = match &config.chat_reply_url {
            Some(url) => Some(Arc::new(HttpChatReplyClient::new(url.clone(), timeout)?)),
            None => {
                tracing::info!("CHAT_REPLY_URL not set, chat endpoint disabled");
                None
            }
        };

        Ok(Self {
            config: Arc::new(config.clone()),
            fetcher,
            chat,
            clock: Arc::new(SystemClock),
        })
    }

    /// 使用自定义组件构建状态 (测试、本地运行)
    pub fn with_parts(
        config: Config,
        fetcher: Arc<dyn TableFetcher>,
        chat: Option<Arc<dyn ChatReplyService>>,
        clock: SharedClock,
    ) -> Self {
        Self {
            config: Arc::new(config),
            fetcher,
            chat,
            clock,
        }
    }

    /// 加载酒店配置
    ///
    /// 未知 slug 或必需表格不可用 ⇒ `HotelNotFound`
    pub async fn load_hotel(&self, slug: &str) -> AppResult<HotelConfiguration> {
        let sources = self
            .config
            .hotels
            .get(slug)
            .ok_or_else(|| AppError::hotel_not_found(slug))?;

        let defaults = BuildDefaults {
            slug: crate::hotel::directory::normalize_slug(slug),
            timezone: self.config.default_timezone.clone(),
        };

        load_hotel(self.fetcher.as_ref(), sources, &defaults)
            .await
            .map_err(|e| {
                tracing::error!(slug = %slug, error = %e, "Hotel configuration unavailable");
                AppError::hotel_not_found(slug).with_detail("reason", e.to_string())
            })
    }

    /// 酒店本地时间
    pub fn hotel_now(&self, config: &HotelConfiguration) -> NaiveTime {
        let tz = hotel_timezone(&config.timezone, &self.config.default_timezone);
        local_time(self.clock.now_utc(), tz)
    }

    pub fn chat_service(&self) -> Option<&Arc<dyn ChatReplyService>> {
        self.chat.as_ref()
    }
}
