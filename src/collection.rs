use articles_shared::{Article, ArticleId};

/// 本地文章集合
///
/// 按插入顺序保存，ID 唯一。只由控制器在对账时修改。
/// 所有修改都是全函数：目标 ID 不存在时替换和删除不做任何事。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleCollection {
    items: Vec<Article>,
}

impl ArticleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 整体替换，重复 ID 只保留第一次出现
    pub fn replace_all(&mut self, records: Vec<Article>) {
        let mut items: Vec<Article> = Vec::with_capacity(records.len());
        for record in records {
            if items.iter().any(|a| a.article_id == record.article_id) {
                log::warn!(
                    "[Collection] duplicate article_id={} in list response, dropped",
                    record.article_id
                );
                continue;
            }
            items.push(record);
        }
        self.items = items;
    }

    /// 追加；ID 已存在时原地替换以保持唯一
    pub fn append(&mut self, record: Article) {
        match self.position(record.article_id) {
            Some(idx) => self.items[idx] = record,
            None => self.items.push(record),
        }
    }

    /// 原地替换，返回是否命中
    pub fn replace_by_id(&mut self, id: ArticleId, record: Article) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        // 记录的 ID 与目标不同且已被其他元素占用时，移除那个元素
        if record.article_id != id {
            if let Some(other) = self.position(record.article_id) {
                self.items[idx] = record;
                self.items.remove(other);
                return true;
            }
        }
        self.items[idx] = record;
        true
    }

    /// 删除，返回被删除的记录
    pub fn remove_by_id(&mut self, id: ArticleId) -> Option<Article> {
        self.position(id).map(|idx| self.items.remove(idx))
    }

    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.items.iter().find(|a| a.article_id == id)
    }

    pub fn contains(&self, id: ArticleId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.items.iter()
    }

    pub fn ids(&self) -> Vec<ArticleId> {
        self.items.iter().map(|a| a.article_id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn position(&self, id: ArticleId) -> Option<usize> {
        self.items.iter().position(|a| a.article_id == id)
    }
}

impl<'a> IntoIterator for &'a ArticleCollection {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
