//! 请求生命周期控制器
//!
//! 每个用户操作都遵循同一个三段式流程：
//! 1. 置 busy、清空消息并通知视图；
//! 2. 发出且只发出一个网络请求；
//! 3. 请求结束后重新计算 busy、写入消息，并按操作规则对账本地状态。
//!
//! 允许多个请求并发，但用序号和会话纪元隔离过期的完成：
//! - 序号：集合类操作在发出时领取递增序号。
//!   整体替换（list）早于任何已对账操作时丢弃；
//!   单条变更只会被之后发出且已对账的 list，或同一 id 上之后发出且已对账的变更覆盖，
//!   互不相关的单条变更（不同 id、新建）之间不互相隔离；
//! - 会话纪元：登出（主动或被动）时递增，旧纪元发出的请求完成后一律丢弃。

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use articles_shared::{Article, ArticleFields, ArticleId, Credentials, FAREWELL_MESSAGE};
use log::{debug, info, warn};

use crate::api::ArticlesApi;
use crate::collection::ArticleCollection;
use crate::config::ClientConfig;
use crate::error::ClientErrorStatus;
use crate::request::HttpClient;
use crate::route::AppRoute;
use crate::selection::Selection;
use crate::session::SessionStore;

#[cfg(test)]
mod tests;

// =========================================================
// 视图状态 (View State)
// =========================================================

/// 视图渲染所需的全部状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// 至少有一个请求在途
    pub busy: bool,
    /// 最近一次完成的操作给出的单行消息
    pub message: String,
    pub articles: ArticleCollection,
    pub selection: Selection,
}

impl ViewState {
    /// 当前正在编辑的文章
    pub fn current_article(&self) -> Option<&Article> {
        self.selection
            .editing_id()
            .and_then(|id| self.articles.get(id))
    }
}

/// 视图层的接收端
///
/// 控制器在每次状态变化后调用 `state_changed`，需要切换页面时调用 `navigate`。
pub trait StateObserver {
    fn state_changed(&self, state: &ViewState);
    fn navigate(&self, route: AppRoute);
}

/// 无界面运行时使用
impl StateObserver for () {
    fn state_changed(&self, _state: &ViewState) {}
    fn navigate(&self, _route: AppRoute) {}
}

impl<O: StateObserver + ?Sized> StateObserver for Rc<O> {
    fn state_changed(&self, state: &ViewState) {
        (**self).state_changed(state)
    }

    fn navigate(&self, route: AppRoute) {
        (**self).navigate(route)
    }
}

/// 单次操作的结局，仅用于日志和测试；视图不需要处理它
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationOutcome {
    /// 成功并已对账
    Reconciled,
    /// 失败，消息已更新
    Failed(ClientErrorStatus),
    /// 完成时已过期，结果被丢弃
    Discarded,
}

// =========================================================
// 内部账本 (Ledger)
// =========================================================

#[derive(Debug, Clone, Copy)]
enum Operation {
    Authenticate,
    List,
    Create,
    Update(ArticleId),
    Delete(ArticleId),
}

impl Operation {
    fn touches_collection(&self) -> bool {
        !matches!(self, Operation::Authenticate)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Authenticate => write!(f, "authenticate"),
            Operation::List => write!(f, "list_articles"),
            Operation::Create => write!(f, "create_article"),
            Operation::Update(id) => write!(f, "update_article({})", id),
            Operation::Delete(id) => write!(f, "delete_article({})", id),
        }
    }
}

/// 发出请求时领取的凭证
#[derive(Debug, Clone, Copy)]
struct Ticket {
    op: Operation,
    seq: Option<u64>,
    epoch: u64,
}

#[derive(Debug, Default)]
struct Ledger {
    next_seq: u64,
    /// 任意集合操作中最新的已对账序号
    reconciled_seq: u64,
    /// 最近一次已对账 list 的序号
    listed_seq: u64,
    /// 单条变更：id -> 该 id 上最新的已对账序号（早于 listed_seq 的条目会被清理）
    touched: HashMap<ArticleId, u64>,
    epoch: u64,
    in_flight: usize,
}

impl Ledger {
    fn is_stale(&self, ticket: &Ticket) -> bool {
        let Some(seq) = ticket.seq else {
            return false;
        };
        match ticket.op {
            Operation::Authenticate => false,
            Operation::List => seq < self.reconciled_seq,
            Operation::Create => seq < self.listed_seq,
            Operation::Update(id) | Operation::Delete(id) => {
                seq < self.listed_seq || self.touched.get(&id).is_some_and(|&last| seq < last)
            }
        }
    }

    fn record(&mut self, ticket: &Ticket) {
        let Some(seq) = ticket.seq else {
            return;
        };
        self.reconciled_seq = self.reconciled_seq.max(seq);
        match ticket.op {
            Operation::List => {
                self.listed_seq = self.listed_seq.max(seq);
                self.touched.retain(|_, last| *last > seq);
            }
            Operation::Update(id) | Operation::Delete(id) => {
                let last = self.touched.entry(id).or_default();
                *last = (*last).max(seq);
            }
            Operation::Authenticate | Operation::Create => {}
        }
    }
}

/// 对账闭包的结果
enum Applied {
    /// 成功，本地状态已按响应更新
    Reconciled,
    /// 失败，集合未动
    Failed(ClientErrorStatus),
    /// 失败，但集合已按服务端事实修正
    Corrected(ClientErrorStatus),
}

#[derive(Default)]
struct Inner {
    view: ViewState,
    ledger: Ledger,
}

// =========================================================
// 控制器 (Controller)
// =========================================================

pub struct ArticlesController<C: HttpClient, S: SessionStore, O: StateObserver> {
    api: ArticlesApi<C>,
    session: S,
    observer: O,
    inner: RefCell<Inner>,
}

impl<C: HttpClient, S: SessionStore, O: StateObserver> ArticlesController<C, S, O> {
    pub fn new(config: ClientConfig, client: C, session: S, observer: O) -> Self {
        Self {
            api: ArticlesApi::new(client, config),
            session,
            observer,
            inner: RefCell::new(Inner::default()),
        }
    }

    // --- Accessors ---

    pub fn state(&self) -> ViewState {
        self.inner.borrow().view.clone()
    }

    pub fn current_article(&self) -> Option<Article> {
        self.inner.borrow().view.current_article().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.has_token()
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        self.api.config()
    }

    // --- Network operations ---

    /// 登录；成功后保存 token 并跳转到文章页
    pub async fn authenticate(&self, credentials: Credentials) -> OperationOutcome {
        let ticket = self.begin(Operation::Authenticate);
        let result = self.api.login(credentials).await;

        let session = &self.session;
        let outcome = self.settle(ticket, |view| match result {
            Ok(res) => {
                session.set_token(&res.token);
                view.message = res.message;
                Applied::Reconciled
            }
            Err(e) => {
                view.message = e.detail().to_string();
                Applied::Failed(e.status)
            }
        });

        if outcome == OperationOutcome::Reconciled {
            info!("[Controller] session started");
            self.observer.navigate(AppRoute::auth_success_redirect());
        }
        outcome
    }

    /// 拉取全部文章并整体替换本地集合
    pub async fn list_articles(&self) -> OperationOutcome {
        let ticket = self.begin(Operation::List);
        let token = self.session.token();
        let result = self.api.list_articles(token.as_deref()).await;

        let outcome = self.settle(ticket, |view| match result {
            Ok(res) => {
                view.message = res.message;
                view.articles.replace_all(res.articles);
                Applied::Reconciled
            }
            Err(e) => {
                view.message = e.summary();
                Applied::Failed(e.status)
            }
        });
        self.after_failure(outcome)
    }

    /// 新建文章，追加服务端确认的记录
    pub async fn create_article(&self, fields: ArticleFields) -> OperationOutcome {
        let ticket = self.begin(Operation::Create);
        let token = self.session.token();
        let result = self.api.create_article(fields, token.as_deref()).await;

        let outcome = self.settle(ticket, |view| match result {
            Ok(res) => {
                view.message = res.message;
                view.articles.append(res.article);
                view.selection.clear();
                Applied::Reconciled
            }
            Err(e) => {
                view.message = e.summary();
                Applied::Failed(e.status)
            }
        });
        self.after_failure(outcome)
    }

    /// 更新文章，原地替换并退出编辑模式
    pub async fn update_article(&self, id: ArticleId, fields: ArticleFields) -> OperationOutcome {
        let ticket = self.begin(Operation::Update(id));
        let token = self.session.token();
        let result = self.api.update_article(id, fields, token.as_deref()).await;

        let outcome = self.settle(ticket, |view| match result {
            Ok(res) => {
                view.message = res.message;
                view.articles.replace_by_id(id, res.article);
                view.selection.clear();
                Applied::Reconciled
            }
            Err(e) => {
                view.message = e.detail().to_string();
                Applied::Failed(e.status)
            }
        });
        self.after_failure(outcome)
    }

    /// 删除文章
    ///
    /// 服务端返回 404 时同样移除本地记录：服务端才是事实来源。
    pub async fn delete_article(&self, id: ArticleId) -> OperationOutcome {
        let ticket = self.begin(Operation::Delete(id));
        let token = self.session.token();
        let result = self.api.delete_article(id, token.as_deref()).await;

        let outcome = self.settle(ticket, |view| match result {
            Ok(res) => {
                view.message = res.message;
                view.articles.remove_by_id(id);
                Applied::Reconciled
            }
            Err(e) if e.status == ClientErrorStatus::NotFound => {
                view.message = e.summary();
                view.articles.remove_by_id(id);
                Applied::Corrected(e.status)
            }
            Err(e) => {
                view.message = e.summary();
                Applied::Failed(e.status)
            }
        });
        self.after_failure(outcome)
    }

    /// 表单提交：编辑模式下更新，否则新建
    pub async fn submit_article(&self, fields: ArticleFields) -> OperationOutcome {
        let selection = self.inner.borrow().view.selection;
        match selection {
            Selection::Editing(id) => self.update_article(id, fields).await,
            Selection::Creating => self.create_article(fields).await,
        }
    }

    // --- Local operations ---

    /// 结束会话；纯本地操作，不会失败
    pub fn end_session(&self) {
        self.session.clear();
        {
            let mut inner = self.inner.borrow_mut();
            Self::reset_session(&mut inner);
            inner.view.message = FAREWELL_MESSAGE.to_string();
        }
        info!("[Controller] session ended");
        self.notify();
        self.observer.navigate(AppRoute::auth_failure_redirect());
    }

    /// 进入编辑模式；文章不存在时返回 false
    pub fn edit_article(&self, id: ArticleId) -> bool {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let view = &mut inner.view;
            view.selection.begin_edit(id, &view.articles)
        };
        if changed {
            self.notify();
        }
        changed
    }

    pub fn cancel_edit(&self) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let was_editing = inner.view.selection.is_editing();
            inner.view.selection.clear();
            was_editing
        };
        if changed {
            self.notify();
        }
    }

    // --- Lifecycle internals ---

    fn begin(&self, op: Operation) -> Ticket {
        let ticket = {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;
            inner.ledger.in_flight += 1;
            inner.view.busy = true;
            inner.view.message.clear();
            let seq = op.touches_collection().then(|| {
                inner.ledger.next_seq += 1;
                inner.ledger.next_seq
            });
            Ticket {
                op,
                seq,
                epoch: inner.ledger.epoch,
            }
        };
        debug!(
            "[Controller] {} issued seq={:?} epoch={}",
            ticket.op, ticket.seq, ticket.epoch
        );
        self.notify();
        ticket
    }

    fn settle<F>(&self, ticket: Ticket, apply: F) -> OperationOutcome
    where
        F: FnOnce(&mut ViewState) -> Applied,
    {
        let outcome = {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;

            // 旧纪元的请求不计入当前在途数
            if ticket.epoch != inner.ledger.epoch {
                warn!(
                    "[Controller] {} settled after session change, discarded",
                    ticket.op
                );
                return OperationOutcome::Discarded;
            }

            inner.ledger.in_flight = inner.ledger.in_flight.saturating_sub(1);
            inner.view.busy = inner.ledger.in_flight > 0;

            if inner.ledger.is_stale(&ticket) {
                warn!(
                    "[Controller] {} seq={:?} superseded (reconciled={}, listed={}), discarded",
                    ticket.op, ticket.seq, inner.ledger.reconciled_seq, inner.ledger.listed_seq
                );
                OperationOutcome::Discarded
            } else {
                let applied = apply(&mut inner.view);
                let view = &mut inner.view;
                view.selection.reconcile(&view.articles);

                match applied {
                    Applied::Reconciled => {
                        inner.ledger.record(&ticket);
                        OperationOutcome::Reconciled
                    }
                    Applied::Corrected(status) => {
                        inner.ledger.record(&ticket);
                        OperationOutcome::Failed(status)
                    }
                    Applied::Failed(status) => OperationOutcome::Failed(status),
                }
            }
        };

        debug!("[Controller] {} settled: {:?}", ticket.op, outcome);
        self.notify();
        outcome
    }

    /// 受保护请求被拒绝时强制登出，保留失败消息
    fn after_failure(&self, outcome: OperationOutcome) -> OperationOutcome {
        if outcome == OperationOutcome::Failed(ClientErrorStatus::Unauthorized) {
            warn!("[Controller] credential rejected, forcing logout");
            self.session.clear();
            Self::reset_session(&mut self.inner.borrow_mut());
            self.notify();
            self.observer.navigate(AppRoute::auth_failure_redirect());
        }
        outcome
    }

    /// 进入新纪元：丢弃在途请求、清空集合和选择
    fn reset_session(inner: &mut Inner) {
        inner.ledger.epoch += 1;
        inner.ledger.in_flight = 0;
        inner.ledger.touched.clear();
        inner.view.busy = false;
        inner.view.articles.clear();
        inner.view.selection.clear();
    }

    fn notify(&self) {
        let snapshot = self.inner.borrow().view.clone();
        self.observer.state_changed(&snapshot);
    }
}
