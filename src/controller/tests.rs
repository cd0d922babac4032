use super::*;
use crate::request::{HttpMethod, MockHttpClient};
use crate::route::{GuardDecision, RouteGuard};
use crate::session::MemorySessionStore;
use articles_shared::Topic;
use serde_json::{Value, json};

// =========================================================
// 辅助函数
// =========================================================

const LOGIN_URL: &str = "http://localhost:9000/api/login";
const ARTICLES_URL: &str = "http://localhost:9000/api/articles";

fn article_url(id: u64) -> String {
    format!("{}/{}", ARTICLES_URL, id)
}

#[derive(Default)]
struct RecordingObserver {
    states: RefCell<Vec<ViewState>>,
    routes: RefCell<Vec<AppRoute>>,
}

impl StateObserver for RecordingObserver {
    fn state_changed(&self, state: &ViewState) {
        self.states.borrow_mut().push(state.clone());
    }

    fn navigate(&self, route: AppRoute) {
        self.routes.borrow_mut().push(route);
    }
}

type TestController =
    ArticlesController<MockHttpClient, Rc<MemorySessionStore>, Rc<RecordingObserver>>;

struct Harness {
    ctrl: TestController,
    http: MockHttpClient,
    session: Rc<MemorySessionStore>,
    observer: Rc<RecordingObserver>,
}

fn harness() -> Harness {
    let http = MockHttpClient::new();
    let session = Rc::new(MemorySessionStore::with_token("abc"));
    let observer = Rc::new(RecordingObserver::default());
    let ctrl = ArticlesController::new(
        ClientConfig::default(),
        http.clone(),
        Rc::clone(&session),
        Rc::clone(&observer),
    );
    Harness {
        ctrl,
        http,
        session,
        observer,
    }
}

fn article_json(id: u64, title: &str, text: &str, topic: &str) -> Value {
    json!({"article_id": id, "title": title, "text": text, "topic": topic})
}

fn fields(title: &str, text: &str, topic: Topic) -> ArticleFields {
    ArticleFields::new(title, text, topic).unwrap()
}

async fn seed(h: &Harness, ids: &[u64]) {
    let articles: Vec<Value> = ids
        .iter()
        .map(|&id| article_json(id, &format!("title {}", id), "body", "React"))
        .collect();
    h.http.mock_response(
        HttpMethod::Get,
        ARTICLES_URL,
        200,
        json!({"articles": articles, "message": "Here are your articles"}),
    );
    assert_eq!(h.ctrl.list_articles().await, OperationOutcome::Reconciled);
}

fn ids(h: &Harness) -> Vec<u64> {
    h.ctrl.state().articles.iter().map(|a| a.article_id.0).collect()
}

// =========================================================
// authenticate 测试
// =========================================================

#[tokio::test]
async fn test_authenticate_stores_token_and_navigates() {
    let h = harness();
    h.session.clear();
    h.http.mock_response(
        HttpMethod::Post,
        LOGIN_URL,
        200,
        json!({"token": "fresh", "message": "Welcome back, foo!"}),
    );

    let outcome = h
        .ctrl
        .authenticate(Credentials::new("foo", "12345678").unwrap())
        .await;

    assert_eq!(outcome, OperationOutcome::Reconciled);
    assert_eq!(h.session.token().as_deref(), Some("fresh"));
    assert!(h.ctrl.is_authenticated());
    assert_eq!(*h.observer.routes.borrow(), vec![AppRoute::Articles]);

    let state = h.ctrl.state();
    assert!(!state.busy);
    assert_eq!(state.message, "Welcome back, foo!");

    // 第一次通知：请求发出时 busy 且消息已清空
    let first = h.observer.states.borrow()[0].clone();
    assert!(first.busy);
    assert!(first.message.is_empty());
}

#[tokio::test]
async fn test_authenticate_failure_leaves_state_alone() {
    let h = harness();
    h.session.clear();
    h.http.mock_response(
        HttpMethod::Post,
        LOGIN_URL,
        401,
        json!({"message": "Invalid credentials"}),
    );

    let outcome = h
        .ctrl
        .authenticate(Credentials::new("foo", "wrong").unwrap())
        .await;

    assert_eq!(
        outcome,
        OperationOutcome::Failed(ClientErrorStatus::Unauthorized)
    );
    assert_eq!(h.ctrl.state().message, "Invalid credentials");
    assert!(!h.ctrl.is_authenticated());
    assert!(h.observer.routes.borrow().is_empty());
}

// =========================================================
// list 测试
// =========================================================

#[tokio::test]
async fn test_list_replaces_the_whole_collection() {
    let h = harness();
    seed(&h, &[1, 2, 3]).await;
    assert_eq!(ids(&h), vec![1, 2, 3]);

    seed(&h, &[7]).await;
    assert_eq!(ids(&h), vec![7]);
    assert_eq!(h.ctrl.state().message, "Here are your articles");
}

#[tokio::test]
async fn test_list_failure_combines_detail_and_status_text() {
    let h = harness();
    seed(&h, &[1]).await;
    h.http
        .mock_response(HttpMethod::Get, ARTICLES_URL, 500, json!({"message": "boom"}));

    let outcome = h.ctrl.list_articles().await;

    assert_eq!(outcome, OperationOutcome::Failed(ClientErrorStatus::Server));
    let state = h.ctrl.state();
    assert_eq!(state.message, "boom, Internal Server Error");
    assert_eq!(ids(&h), vec![1]);
    assert!(!state.busy);
}

// =========================================================
// create 测试
// =========================================================

#[tokio::test]
async fn test_login_then_create_into_empty_collection() {
    let h = harness();
    h.session.clear();
    h.http.mock_response(
        HttpMethod::Post,
        LOGIN_URL,
        200,
        json!({"token": "abc", "message": "Welcome back, foo!"}),
    );
    h.ctrl
        .authenticate(Credentials::new("foo", "12345678").unwrap())
        .await;
    seed(&h, &[]).await;
    assert!(h.ctrl.state().articles.is_empty());

    h.http.mock_response(
        HttpMethod::Post,
        ARTICLES_URL,
        201,
        json!({"article": article_json(1, "A", "B", "React"), "message": "Well done, foo. Great article!"}),
    );
    let outcome = h.ctrl.create_article(fields("A", "B", Topic::React)).await;

    assert_eq!(outcome, OperationOutcome::Reconciled);
    let state = h.ctrl.state();
    assert_eq!(state.articles.len(), 1);
    let created = state.articles.get(ArticleId(1)).unwrap();
    assert_eq!(created.topic, Topic::React);
    assert_eq!(created.title, "A");
    assert_eq!(state.message, "Well done, foo. Great article!");

    let sent = h.http.requests();
    let body: Value = serde_json::from_str(sent.last().unwrap().body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"title": "A", "text": "B", "topic": "React"}));
}

#[tokio::test]
async fn test_sequential_creates_grow_by_one_with_unique_ids() {
    let h = harness();
    seed(&h, &[]).await;

    for id in 1..=4u64 {
        h.http.mock_response(
            HttpMethod::Post,
            ARTICLES_URL,
            201,
            json!({"article": article_json(id, "t", "b", "Node"), "message": "ok"}),
        );
        let before = h.ctrl.state().articles.len();
        h.ctrl.create_article(fields("t", "b", Topic::Node)).await;
        assert_eq!(h.ctrl.state().articles.len(), before + 1);
    }

    let mut seen = ids(&h);
    seen.dedup();
    assert_eq!(seen, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_transport_failure_becomes_a_message() {
    let h = harness();
    seed(&h, &[1]).await;
    h.http.set_offline(true);

    let outcome = h.ctrl.create_article(fields("t", "b", Topic::Node)).await;

    assert_eq!(outcome, OperationOutcome::Failed(ClientErrorStatus::Transport));
    let state = h.ctrl.state();
    assert_eq!(state.message, "Network Error");
    assert!(!state.busy);
    assert_eq!(ids(&h), vec![1]);
    // 传输失败不会触发登出
    assert!(h.ctrl.is_authenticated());
}

// =========================================================
// update 测试
// =========================================================

#[tokio::test]
async fn test_update_replaces_in_place_and_clears_selection() {
    let h = harness();
    seed(&h, &[1, 2, 3]).await;
    assert!(h.ctrl.edit_article(ArticleId(2)));
    assert_eq!(h.ctrl.current_article().map(|a| a.article_id), Some(ArticleId(2)));

    h.http.mock_response(
        HttpMethod::Put,
        &article_url(2),
        200,
        json!({"article": article_json(2, "New", "Text", "Node"), "message": "Nice update, foo!"}),
    );
    let outcome = h
        .ctrl
        .update_article(ArticleId(2), fields("New", "Text", Topic::Node))
        .await;

    assert_eq!(outcome, OperationOutcome::Reconciled);
    let state = h.ctrl.state();
    assert_eq!(ids(&h), vec![1, 2, 3]);
    let updated = state.articles.get(ArticleId(2)).unwrap();
    assert_eq!(updated.fields(), fields("New", "Text", Topic::Node));
    assert_eq!(state.selection, Selection::Creating);
    assert_eq!(state.message, "Nice update, foo!");
}

#[tokio::test]
async fn test_update_failure_shows_detail_only_and_keeps_selection() {
    let h = harness();
    seed(&h, &[1, 2]).await;
    h.ctrl.edit_article(ArticleId(2));
    h.http.mock_response(
        HttpMethod::Put,
        &article_url(2),
        422,
        json!({"message": "title is too long"}),
    );

    let outcome = h
        .ctrl
        .update_article(ArticleId(2), fields("x", "y", Topic::React))
        .await;

    assert_eq!(
        outcome,
        OperationOutcome::Failed(ClientErrorStatus::Validation)
    );
    let state = h.ctrl.state();
    assert_eq!(state.message, "title is too long");
    assert_eq!(state.selection, Selection::Editing(ArticleId(2)));
}

// =========================================================
// delete 测试
// =========================================================

#[tokio::test]
async fn test_delete_removes_exactly_one_and_repeat_is_a_noop() {
    let h = harness();
    seed(&h, &[1, 2]).await;
    h.http.mock_response(
        HttpMethod::Delete,
        &article_url(1),
        200,
        json!({"message": "Article 1 was deleted, foo!"}),
    );

    assert_eq!(
        h.ctrl.delete_article(ArticleId(1)).await,
        OperationOutcome::Reconciled
    );
    assert_eq!(ids(&h), vec![2]);
    assert_eq!(h.ctrl.state().message, "Article 1 was deleted, foo!");

    h.http.mock_response(
        HttpMethod::Delete,
        &article_url(1),
        404,
        json!({"message": "Article not found"}),
    );
    let outcome = h.ctrl.delete_article(ArticleId(1)).await;
    assert_eq!(outcome, OperationOutcome::Failed(ClientErrorStatus::NotFound));
    assert_eq!(ids(&h), vec![2]);
    assert_eq!(h.ctrl.state().message, "Article not found, Not Found");
}

#[tokio::test]
async fn test_delete_not_found_drops_the_local_copy() {
    let h = harness();
    seed(&h, &[1, 2]).await;
    h.ctrl.edit_article(ArticleId(2));
    h.http.mock_response(
        HttpMethod::Delete,
        &article_url(2),
        404,
        json!({"message": "Article not found"}),
    );

    h.ctrl.delete_article(ArticleId(2)).await;

    let state = h.ctrl.state();
    assert_eq!(ids(&h), vec![1]);
    assert_eq!(state.selection, Selection::Creating);
}

#[tokio::test]
async fn test_delete_of_other_article_keeps_editing() {
    let h = harness();
    seed(&h, &[1, 2]).await;
    h.ctrl.edit_article(ArticleId(2));
    h.http
        .mock_response(HttpMethod::Delete, &article_url(1), 200, json!({"message": "gone"}));

    h.ctrl.delete_article(ArticleId(1)).await;

    assert_eq!(h.ctrl.state().selection, Selection::Editing(ArticleId(2)));
}

// =========================================================
// 会话测试
// =========================================================

#[tokio::test]
async fn test_end_session_always_says_goodbye() {
    let h = harness();
    seed(&h, &[1]).await;
    h.ctrl.edit_article(ArticleId(1));

    h.ctrl.end_session();

    let state = h.ctrl.state();
    assert_eq!(state.message, "Goodbye!");
    assert!(state.articles.is_empty());
    assert_eq!(state.selection, Selection::Creating);
    assert!(!h.ctrl.is_authenticated());
    assert_eq!(h.observer.routes.borrow().last(), Some(&AppRoute::Login));

    // 未登录时再次登出也一样
    h.ctrl.end_session();
    assert_eq!(h.ctrl.state().message, "Goodbye!");
    assert_eq!(h.session.token(), None);
}

#[tokio::test]
async fn test_rejected_credential_forces_logout() {
    let h = harness();
    seed(&h, &[1, 2]).await;
    h.http.mock_response(
        HttpMethod::Get,
        ARTICLES_URL,
        401,
        json!({"message": "Token expired"}),
    );

    let outcome = h.ctrl.list_articles().await;

    assert_eq!(
        outcome,
        OperationOutcome::Failed(ClientErrorStatus::Unauthorized)
    );
    let state = h.ctrl.state();
    assert_eq!(state.message, "Token expired, Unauthorized");
    assert!(state.articles.is_empty());
    assert!(!h.ctrl.is_authenticated());
    assert_eq!(*h.observer.routes.borrow(), vec![AppRoute::Login]);
}

#[tokio::test]
async fn test_rejected_credential_on_any_change_forces_logout() {
    for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete] {
        let h = harness();
        seed(&h, &[1]).await;
        let url = match method {
            HttpMethod::Post => ARTICLES_URL.to_string(),
            _ => article_url(1),
        };
        h.http
            .mock_response(method, &url, 403, json!({"message": "Forbidden token"}));

        let outcome = match method {
            HttpMethod::Post => h.ctrl.create_article(fields("A", "B", Topic::React)).await,
            HttpMethod::Put => {
                h.ctrl
                    .update_article(ArticleId(1), fields("A", "B", Topic::React))
                    .await
            }
            _ => h.ctrl.delete_article(ArticleId(1)).await,
        };

        assert_eq!(
            outcome,
            OperationOutcome::Failed(ClientErrorStatus::Unauthorized),
            "{:?}",
            method
        );
        let state = h.ctrl.state();
        assert!(state.articles.is_empty(), "{:?}", method);
        assert_eq!(state.selection, Selection::Creating);
        assert!(!state.message.is_empty());
        assert!(!h.ctrl.is_authenticated(), "{:?}", method);
        assert_eq!(*h.observer.routes.borrow(), vec![AppRoute::Login]);
    }
}

// =========================================================
// 并发与过期测试
// =========================================================

#[tokio::test]
async fn test_busy_while_request_in_flight() {
    let h = harness();
    h.http.mock_response(
        HttpMethod::Get,
        ARTICLES_URL,
        200,
        json!({"articles": [], "message": "ok"}),
    );
    let gate = h.http.hold(HttpMethod::Get, ARTICLES_URL);

    let (outcome, _) = futures::join!(h.ctrl.list_articles(), async {
        let state = h.ctrl.state();
        assert!(state.busy);
        assert!(state.message.is_empty());
        gate.release();
    });

    assert_eq!(outcome, OperationOutcome::Reconciled);
    assert!(!h.ctrl.state().busy);
}

#[tokio::test]
async fn test_stale_create_is_discarded_after_newer_list() {
    let h = harness();
    seed(&h, &[1]).await;
    h.http.mock_response(
        HttpMethod::Post,
        ARTICLES_URL,
        201,
        json!({"article": article_json(9, "slow", "b", "Node"), "message": "created"}),
    );
    h.http.mock_response(
        HttpMethod::Get,
        ARTICLES_URL,
        200,
        json!({"articles": [article_json(1, "t", "b", "React"), article_json(2, "t", "b", "React")], "message": "listed"}),
    );
    let gate = h.http.hold(HttpMethod::Post, ARTICLES_URL);

    let (created, listed) = futures::join!(
        h.ctrl.create_article(fields("slow", "b", Topic::Node)),
        async {
            let outcome = h.ctrl.list_articles().await;
            // 慢请求仍在途
            assert!(h.ctrl.state().busy);
            gate.release();
            outcome
        }
    );

    assert_eq!(listed, OperationOutcome::Reconciled);
    assert_eq!(created, OperationOutcome::Discarded);
    let state = h.ctrl.state();
    assert_eq!(ids(&h), vec![1, 2]);
    assert_eq!(state.message, "listed");
    assert!(!state.busy);
}

#[tokio::test]
async fn test_completion_after_end_session_is_discarded() {
    let h = harness();
    h.http.mock_response(
        HttpMethod::Get,
        ARTICLES_URL,
        200,
        json!({"articles": [article_json(1, "t", "b", "React")], "message": "listed"}),
    );
    let gate = h.http.hold(HttpMethod::Get, ARTICLES_URL);

    let (outcome, _) = futures::join!(h.ctrl.list_articles(), async {
        h.ctrl.end_session();
        assert!(!h.ctrl.state().busy);
        gate.release();
    });

    assert_eq!(outcome, OperationOutcome::Discarded);
    let state = h.ctrl.state();
    assert!(state.articles.is_empty());
    assert_eq!(state.message, "Goodbye!");
    assert!(!state.busy);
}

#[tokio::test]
async fn test_delete_settling_first_resets_pending_edit() {
    let h = harness();
    seed(&h, &[1, 2]).await;
    assert!(h.ctrl.edit_article(ArticleId(2)));
    h.http.mock_response(
        HttpMethod::Put,
        &article_url(2),
        200,
        json!({"article": article_json(2, "late", "b", "Node"), "message": "updated"}),
    );
    h.http
        .mock_response(HttpMethod::Delete, &article_url(2), 200, json!({"message": "deleted"}));
    let gate = h.http.hold(HttpMethod::Put, &article_url(2));

    let (updated, deleted) = futures::join!(
        h.ctrl.update_article(ArticleId(2), fields("late", "b", Topic::Node)),
        async {
            let outcome = h.ctrl.delete_article(ArticleId(2)).await;
            assert_eq!(h.ctrl.state().selection, Selection::Creating);
            gate.release();
            outcome
        }
    );

    assert_eq!(deleted, OperationOutcome::Reconciled);
    assert_eq!(updated, OperationOutcome::Discarded);
    let state = h.ctrl.state();
    assert_eq!(ids(&h), vec![1]);
    assert_eq!(state.selection, Selection::Creating);
    assert!(state.current_article().is_none());
}

#[tokio::test]
async fn test_overlapping_deletes_of_different_ids_both_apply() {
    let h = harness();
    seed(&h, &[1, 2, 3]).await;
    h.http
        .mock_response(HttpMethod::Delete, &article_url(1), 200, json!({"message": "deleted 1"}));
    h.http
        .mock_response(HttpMethod::Delete, &article_url(2), 200, json!({"message": "deleted 2"}));
    let gate = h.http.hold(HttpMethod::Delete, &article_url(1));

    let (first, second) = futures::join!(h.ctrl.delete_article(ArticleId(1)), async {
        let outcome = h.ctrl.delete_article(ArticleId(2)).await;
        assert_eq!(ids(&h), vec![1, 3]);
        gate.release();
        outcome
    });

    assert_eq!(first, OperationOutcome::Reconciled);
    assert_eq!(second, OperationOutcome::Reconciled);
    let state = h.ctrl.state();
    assert_eq!(ids(&h), vec![3]);
    assert_eq!(state.message, "deleted 1");
    assert!(!state.busy);
}

#[tokio::test]
async fn test_slow_create_survives_a_faster_delete() {
    let h = harness();
    seed(&h, &[1, 2]).await;
    h.http.mock_response(
        HttpMethod::Post,
        ARTICLES_URL,
        201,
        json!({"article": article_json(7, "new", "b", "Node"), "message": "created"}),
    );
    h.http
        .mock_response(HttpMethod::Delete, &article_url(1), 200, json!({"message": "deleted"}));
    let gate = h.http.hold(HttpMethod::Post, ARTICLES_URL);

    let (created, deleted) = futures::join!(
        h.ctrl.create_article(fields("new", "b", Topic::Node)),
        async {
            let outcome = h.ctrl.delete_article(ArticleId(1)).await;
            gate.release();
            outcome
        }
    );

    assert_eq!(deleted, OperationOutcome::Reconciled);
    assert_eq!(created, OperationOutcome::Reconciled);
    assert_eq!(ids(&h), vec![2, 7]);
}

#[tokio::test]
async fn test_slow_update_survives_delete_of_another_id() {
    let h = harness();
    seed(&h, &[1, 2]).await;
    assert!(h.ctrl.edit_article(ArticleId(2)));
    h.http.mock_response(
        HttpMethod::Put,
        &article_url(2),
        200,
        json!({"article": article_json(2, "edited", "b", "Node"), "message": "updated"}),
    );
    h.http
        .mock_response(HttpMethod::Delete, &article_url(1), 200, json!({"message": "deleted"}));
    let gate = h.http.hold(HttpMethod::Put, &article_url(2));

    let (updated, deleted) = futures::join!(
        h.ctrl.update_article(ArticleId(2), fields("edited", "b", Topic::Node)),
        async {
            let outcome = h.ctrl.delete_article(ArticleId(1)).await;
            // 另一个 id 的删除不影响编辑状态
            assert_eq!(h.ctrl.state().selection, Selection::Editing(ArticleId(2)));
            gate.release();
            outcome
        }
    );

    assert_eq!(deleted, OperationOutcome::Reconciled);
    assert_eq!(updated, OperationOutcome::Reconciled);
    let state = h.ctrl.state();
    assert_eq!(ids(&h), vec![2]);
    assert_eq!(state.articles.get(ArticleId(2)).unwrap().title, "edited");
    assert_eq!(state.selection, Selection::Creating);
}

#[tokio::test]
async fn test_slow_list_is_discarded_after_newer_delete() {
    let h = harness();
    seed(&h, &[1, 2]).await;
    h.http
        .mock_response(HttpMethod::Delete, &article_url(1), 200, json!({"message": "deleted"}));
    let gate = h.http.hold(HttpMethod::Get, ARTICLES_URL);

    let (listed, deleted) = futures::join!(h.ctrl.list_articles(), async {
        let outcome = h.ctrl.delete_article(ArticleId(1)).await;
        gate.release();
        outcome
    });

    // list 的快照可能不包含这次删除，不能覆盖它
    assert_eq!(deleted, OperationOutcome::Reconciled);
    assert_eq!(listed, OperationOutcome::Discarded);
    assert_eq!(ids(&h), vec![2]);
    assert_eq!(h.ctrl.state().message, "deleted");
}

// =========================================================
// 表单意图测试
// =========================================================

#[tokio::test]
async fn test_submit_dispatches_on_selection() {
    let h = harness();
    seed(&h, &[1]).await;
    h.http.mock_response(
        HttpMethod::Post,
        ARTICLES_URL,
        201,
        json!({"article": article_json(2, "n", "b", "Node"), "message": "created"}),
    );
    h.http.mock_response(
        HttpMethod::Put,
        &article_url(1),
        200,
        json!({"article": article_json(1, "e", "b", "Node"), "message": "updated"}),
    );

    h.ctrl.submit_article(fields("n", "b", Topic::Node)).await;
    h.ctrl.edit_article(ArticleId(1));
    h.ctrl.submit_article(fields("e", "b", Topic::Node)).await;

    let methods: Vec<HttpMethod> = h.http.requests().iter().map(|r| r.method).collect();
    assert_eq!(
        methods,
        vec![HttpMethod::Get, HttpMethod::Post, HttpMethod::Put]
    );
    assert_eq!(ids(&h), vec![1, 2]);
    assert_eq!(h.ctrl.state().articles.get(ArticleId(1)).unwrap().title, "e");
}

#[tokio::test]
async fn test_edit_unknown_article_and_cancel() {
    let h = harness();
    seed(&h, &[1]).await;

    assert!(!h.ctrl.edit_article(ArticleId(5)));
    assert_eq!(h.ctrl.state().selection, Selection::Creating);

    assert!(h.ctrl.edit_article(ArticleId(1)));
    h.ctrl.cancel_edit();
    assert_eq!(h.ctrl.state().selection, Selection::Creating);
    assert!(h.ctrl.current_article().is_none());
}

#[tokio::test]
async fn test_guard_follows_credential_cleared_outside_controller() {
    let h = harness();
    seed(&h, &[1]).await;
    let guard = RouteGuard::new(h.ctrl.session());
    let before = h.ctrl.state();
    assert!(guard.resolve(AppRoute::Articles).allows());

    // 例如其他标签页登出：控制器状态没有任何变化
    h.session.clear();

    assert_eq!(h.ctrl.state(), before);
    assert_eq!(
        guard.resolve(AppRoute::Articles),
        GuardDecision::Redirect(AppRoute::Login)
    );
    assert!(!h.ctrl.is_authenticated());
}
