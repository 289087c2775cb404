//! 出走表抽取策略
//!
//! 对第三方页面固定结构选择器的依赖全部集中在本模块：
//! 站点改版时只需要调整这里的一个实现，流水线其余部分不受影响。

use scraper::{Html, Selector};

/// 出走表所在节点的结构选择器（boatrace.jp racelist 页面当前布局）
const ENTRY_TABLE_SELECTOR: &str =
    "body > main > div > div > div > div.contentsFrame1_inner > div.table1.is-tableFixed__3rdadd";

/// 从整页 HTML 中抽取出走表标记的策略接口
pub trait EntryExtractor: Send + Sync {
    /// 定位出走表节点并返回其序列化标记
    ///
    /// 返回 `None` 表示页面中不存在目标节点（该场次当日未开催）。
    fn extract(&self, html: &str) -> Option<String>;
}

/// 针对当前 racelist 页面布局的抽取实现
#[derive(Debug, Default)]
pub struct RaceListExtractor;

impl EntryExtractor for RaceListExtractor {
    fn extract(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(ENTRY_TABLE_SELECTOR).ok()?;
        let node = document.select(&selector).next()?;

        // colgroup 只携带列宽提示，对提示词没有信息量，序列化前全部去掉
        let colgroup = Selector::parse("colgroup").ok()?;
        let mut markup = node.html();
        for cg in node.select(&colgroup) {
            markup = markup.replace(&cg.html(), "");
        }

        Some(markup)
    }
}
