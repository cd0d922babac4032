use crate::collection::ArticleCollection;
use articles_shared::ArticleId;

/// 文章表单所处的模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// 新建模式，不持有 ID
    #[default]
    Creating,
    /// 正在编辑某篇文章
    Editing(ArticleId),
}

impl Selection {
    pub fn editing_id(&self) -> Option<ArticleId> {
        match self {
            Selection::Creating => None,
            Selection::Editing(id) => Some(*id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Selection::Editing(_))
    }

    /// 进入编辑；集合中不存在该 ID 时保持不变
    pub fn begin_edit(&mut self, id: ArticleId, articles: &ArticleCollection) -> bool {
        if !articles.contains(id) {
            return false;
        }
        *self = Selection::Editing(id);
        true
    }

    pub fn clear(&mut self) {
        *self = Selection::Creating;
    }

    /// 每次对账后调用：被编辑的文章已不存在时回到新建模式
    pub fn reconcile(&mut self, articles: &ArticleCollection) {
        if let Selection::Editing(id) = *self {
            if !articles.contains(id) {
                log::debug!("[Selection] article_id={} gone, back to creating", id);
                *self = Selection::Creating;
            }
        }
    }
}
