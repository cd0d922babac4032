//! 会话凭据存储
//!
//! 控制器和路由守卫只通过 [`SessionStore`] 读写 token，
//! 浏览器端实现落在 LocalStorage，测试和原生环境用 [`MemorySessionStore`]。

use std::cell::RefCell;
use std::rc::Rc;

/// 单个不透明 token 的存取能力
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear(&self);

    fn has_token(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn set_token(&self, token: &str) {
        (**self).set_token(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Rc<S> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn set_token(&self, token: &str) {
        (**self).set_token(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// 进程内存储，不跨进程保留
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}
