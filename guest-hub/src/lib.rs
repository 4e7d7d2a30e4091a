//! Guest Hub - 酒店宾客服务中心
//!
//! # 架构概述
//!
//! 每家酒店的配置来自发布的表格 (设置、多语言文案、菜单)。每个请求重新加载配置，
//! 然后按部门营业时间路由宾客请求，生成发给员工的 WhatsApp 预填消息。
//!
//! - **表格读取** (`sheets`): CSV 拉取与解析，宽/长两种文案表格式
//! - **配置构建** (`hotel`): 备选键解析 → `HotelConfiguration`
//! - **路由** (`routing`): 营业时间判断 (含跨午夜)，关闭时转前台
//! - **消息** (`messaging`): 员工语言 + 辅助语言消息，`wa.me` / `tel:` 链接
//! - **订座** (`intake`): 四步状态机与字段校验
//! - **HTTP API** (`api`): axum 路由
//!
//! # 模块结构
//!
//! ```text
//! guest-hub/src/
//! ├── core/          # 配置、状态、服务器
//! ├── sheets/        # 表格拉取与解析
//! ├── hotel/         # 酒店目录、加载、构建
//! ├── routing/       # 营业时间与路由
//! ├── messaging/     # 服务目录、消息、链接
//! ├── intake/        # 订座流程
//! ├── hub/           # 首页数据
//! ├── chat/          # 聊天回复服务客户端
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、时间
//! ```

pub mod api;
pub mod chat;
pub mod core;
pub mod hotel;
pub mod hub;
pub mod intake;
pub mod messaging;
pub mod routing;
pub mod sheets;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use hotel::{HotelDirectory, HotelSources};
pub use messaging::{Dispatcher, GuestContext};
pub use sheets::{HttpTableFetcher, MemoryTableFetcher, TableFetcher};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
   ______                 __     __  __      __
  / ____/_  _____  _____/ /_   / / / /_  __/ /_
 / / __/ / / / _ \/ ___/ __/  / /_/ / / / / __ \
/ /_/ / /_/ /  __(__  ) /_   / __  / /_/ / /_/ /
\____/\__,_/\___/____/\__/  /_/ /_/\__,_/_.___/
"#
    );
}

/// 加载 .env 文件
pub fn setup_environment() {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {e}");
    }
}
