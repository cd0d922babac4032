//! LocalStorage 会话存储
//!
//! token 以原始字符串保存在单个命名条目下，刷新页面后仍然存在。

use articles_client::SessionStore;
use gloo_storage::{LocalStorage, Storage};

/// 浏览器会话存储
#[derive(Clone, Debug)]
pub struct BrowserSession {
    key: String,
}

impl BrowserSession {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        LocalStorage::raw().get_item(&self.key).ok().flatten()
    }

    fn set_token(&self, token: &str) {
        if LocalStorage::raw().set_item(&self.key, token).is_err() {
            log::error!("[Session] failed to persist token under {:?}", self.key);
        }
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}
