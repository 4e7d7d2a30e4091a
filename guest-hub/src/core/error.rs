use thiserror::Error;

/// 服务器启动错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("HTTP 客户端初始化失败: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("端口绑定失败: {0}")]
    Bind(#[source] std::io::Error),

    #[error("服务运行错误: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
