//! Document queries: by id, class, tag; generic predicate matching.

use super::document::Document;
use super::node::{NodeData, NodeId};

impl Document {
    /// Find the first connected element whose `id` attribute matches.
    ///
    /// Searches the tree in document order starting at the body, so detached
    /// nodes never match, as with `getElementById`.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk_depth_first(self.body())
            .into_iter()
            .find(|&n| self.nodes[n].attribute("id") == Some(id))
    }

    /// All elements under `root` (inclusive) with the given tag, in document order.
    pub fn query_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.query_all(root, |data| data.tag() == Some(tag))
    }

    /// All elements under `root` (inclusive) carrying the given class.
    pub fn query_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.query_all(root, |data| data.has_class(class))
    }

    /// All nodes under `root` (inclusive) matching a predicate, in document order.
    pub fn query_all(&self, root: NodeId, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.walk_depth_first(root)
            .into_iter()
            .filter(|&n| predicate(&self.nodes[n]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::host::document::Document;
    use crate::host::node::{NodeData, NodeId};

    fn element(tag: &str, attrs: &[(&str, &str)]) -> NodeData {
        let mut data = NodeData::element(tag);
        let el = data.as_element_mut().unwrap();
        for (k, v) in attrs {
            el.attributes.insert(*k, (*v).to_owned());
        }
        data
    }

    /// Build a test tree for queries:
    /// ```text
    ///   body
    ///    └─ div #app
    ///        ├─ ul .menu
    ///        │   ├─ li .item
    ///        │   └─ li .item .active
    ///        └─ p #note
    /// ```
    fn build_query_tree() -> (Document, NodeId) {
        let mut doc = Document::new();
        let app = doc.create(element("div", &[("id", "app")]));
        let ul = doc.create(element("ul", &[("class", "menu")]));
        let li1 = doc.create(element("li", &[("class", "item")]));
        let li2 = doc.create(element("li", &[("class", "item active")]));
        let p = doc.create(element("p", &[("id", "note")]));
        doc.append_child(doc.body(), app).unwrap();
        doc.append_child(app, ul).unwrap();
        doc.append_child(ul, li1).unwrap();
        doc.append_child(ul, li2).unwrap();
        doc.append_child(app, p).unwrap();
        (doc, app)
    }

    #[test]
    fn get_element_by_id_found() {
        let (doc, app) = build_query_tree();
        assert_eq!(doc.get_element_by_id("app"), Some(app));
        let note = doc.get_element_by_id("note").unwrap();
        assert_eq!(doc.get(note).unwrap().tag(), Some("p"));
    }

    #[test]
    fn get_element_by_id_not_found() {
        let (doc, _) = build_query_tree();
        assert!(doc.get_element_by_id("missing").is_none());
    }

    #[test]
    fn get_element_by_id_ignores_detached() {
        let (mut doc, _) = build_query_tree();
        doc.create(element("div", &[("id", "floating")]));
        assert!(doc.get_element_by_id("floating").is_none());
    }

    #[test]
    fn query_by_tag_in_document_order() {
        let (doc, app) = build_query_tree();
        let items = doc.query_by_tag(app, "li");
        assert_eq!(items.len(), 2);
        assert!(!doc.get(items[0]).unwrap().has_class("active"));
        assert!(doc.get(items[1]).unwrap().has_class("active"));
    }

    #[test]
    fn query_by_class() {
        let (doc, app) = build_query_tree();
        assert_eq!(doc.query_by_class(app, "item").len(), 2);
        assert_eq!(doc.query_by_class(app, "active").len(), 1);
        assert!(doc.query_by_class(app, "nonexistent").is_empty());
    }

    #[test]
    fn query_all_custom_predicate() {
        let (doc, app) = build_query_tree();
        let with_id = doc.query_all(app, |data| data.attribute("id").is_some());
        assert_eq!(with_id.len(), 2);
    }

    #[test]
    fn query_on_empty_document() {
        let doc = Document::new();
        assert!(doc.get_element_by_id("x").is_none());
        assert!(doc.query_by_tag(doc.body(), "li").is_empty());
    }
}
