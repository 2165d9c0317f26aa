//! Post list rendering.

use crate::builders::*;
use crate::client::PostsApi;
use crate::config::AppConfig;
use crate::dom::{Document, Fragment, NodeId};
use crate::toggle::SHOW_COMMENTS_LABEL;
use crate::types::{present_id, Post};

/// What [`PostRenderer::render_posts`] appended to the main container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Posts(Vec<NodeId>),
    Placeholder(NodeId),
}

/// Builds post articles, fetching authors and comments as it goes.
pub struct PostRenderer<'a, A> {
    api: &'a A,
    config: &'a AppConfig,
}

impl<'a, A: PostsApi> PostRenderer<'a, A> {
    pub fn new(api: &'a A, config: &'a AppConfig) -> Self {
        Self { api, config }
    }

    /// Hidden `<section>` holding the comments of one post.
    pub async fn build_comment_section(&self, doc: &mut Document, post_id: Option<u64>) -> Option<NodeId> {
        let post_id = present_id(post_id)?;

        let section = doc.create_element("section");
        if let Some(element) = doc.element_mut(section) {
            element.set_data(DATA_POST_ID, post_id.to_string());
            element.add_class(CLASS_COMMENTS);
            element.add_class(CLASS_HIDE);
        }

        let comments = self.api.list_post_comments(Some(post_id)).await;
        if let Some(fragment) = build_comment_fragment(doc, comments.as_deref()) {
            doc.append_fragment(section, fragment);
        }

        Some(section)
    }

    pub async fn build_post_list(&self, doc: &mut Document, posts: Option<&[Post]>) -> Option<Fragment> {
        let posts = posts?;
        let mut fragment = Fragment::new();

        // Authors are fetched one post at a time, in list order.
        for post in posts {
            let article = doc.create_element("article");

            let mut children = vec![
                build_labeled_element(doc, "h2", &post.title, None),
                build_labeled_element(doc, "p", &post.body, None),
                build_labeled_element(doc, "p", &format!("Post ID: {}", post.id), None),
            ];

            match self.api.get_user(Some(post.user_id)).await {
                Some(author) => {
                    let byline = format!("Author: {} with {}", author.name, author.company.name);
                    children.push(build_labeled_element(doc, "p", &byline, None));
                    children.push(build_labeled_element(doc, "p", &author.company.catch_phrase, None));
                }
                None => tracing::warn!(
                    "Author {} unavailable, rendering post {} without a byline",
                    post.user_id,
                    post.id
                ),
            }

            let button = build_labeled_element(doc, "button", SHOW_COMMENTS_LABEL, None);
            if let Some(element) = doc.element_mut(button) {
                element.set_data(DATA_POST_ID, post.id.to_string());
            }
            children.push(button);

            if let Some(section) = self.build_comment_section(doc, Some(post.id)).await {
                children.push(section);
            }

            for child in children {
                doc.append_child(article, child);
            }
            fragment.push(article);
        }

        Some(fragment)
    }

    /// Appends the post list, or the placeholder text when there are no posts.
    pub async fn render_posts(&self, doc: &mut Document, main: NodeId, posts: Option<&[Post]>) -> Option<Rendered> {
        if !doc.contains(main) {
            return None;
        }

        match posts {
            Some(posts) if !posts.is_empty() => {
                let fragment = self.build_post_list(doc, Some(posts)).await.unwrap_or_default();
                let articles = fragment.roots().to_vec();
                doc.append_fragment(main, fragment);
                Some(Rendered::Posts(articles))
            }
            _ => {
                let placeholder =
                    build_labeled_element(doc, "p", &self.config.placeholder_text, Some(CLASS_DEFAULT_TEXT));
                doc.append_child(main, placeholder);
                Some(Rendered::Placeholder(placeholder))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{post, StaticApi};

    #[tokio::test]
    async fn test_comment_section_is_hidden_and_filled() {
        let api = StaticApi::sample();
        let config = AppConfig::default();
        let renderer = PostRenderer::new(&api, &config);
        let mut doc = Document::new();

        let section = renderer.build_comment_section(&mut doc, Some(1)).await.unwrap();
        let element = doc.element(section).unwrap();
        assert_eq!(element.class_name(), "comments hide");
        assert_eq!(element.data(DATA_POST_ID), Some("1"));
        assert_eq!(doc.children(section).len(), 2);

        assert!(renderer.build_comment_section(&mut doc, None).await.is_none());
    }

    #[tokio::test]
    async fn test_failed_comments_leave_empty_hidden_section() {
        let mut api = StaticApi::sample();
        api.failing_comments.push(1);
        let config = AppConfig::default();
        let renderer = PostRenderer::new(&api, &config);
        let mut doc = Document::new();

        let section = renderer.build_comment_section(&mut doc, Some(1)).await.unwrap();
        let element = doc.element(section).unwrap();
        assert_eq!(element.class_name(), "comments hide");
        assert!(doc.children(section).is_empty());

        let posts = [post(1, 1)];
        let fragment = renderer.build_post_list(&mut doc, Some(&posts)).await.unwrap();
        let article = fragment.roots()[0];
        let button = doc.find(article, |el| el.tag() == "button").unwrap();
        assert_eq!(doc.element(button).unwrap().data(DATA_POST_ID), Some("1"));
        let section = doc.find(article, |el| el.tag() == "section").unwrap();
        assert!(doc.children(section).is_empty());
    }

    #[tokio::test]
    async fn test_post_list_article_layout() {
        let api = StaticApi::sample();
        let config = AppConfig::default();
        let renderer = PostRenderer::new(&api, &config);
        let mut doc = Document::new();

        let posts = [post(1, 1)];
        let fragment = renderer.build_post_list(&mut doc, Some(&posts)).await.unwrap();
        assert_eq!(fragment.len(), 1);

        let article = fragment.roots()[0];
        let tags: Vec<&str> = doc
            .children(article)
            .iter()
            .map(|&id| doc.element(id).unwrap().tag())
            .collect();
        assert_eq!(tags, ["h2", "p", "p", "p", "p", "button", "section"]);

        let texts: Vec<&str> = doc.children(article)[..5]
            .iter()
            .map(|&id| doc.element(id).unwrap().text())
            .collect();
        assert_eq!(
            texts,
            [
                "post 1",
                "body of post 1",
                "Post ID: 1",
                "Author: Leanne Graham with Romaguera-Crona",
                "Romaguera-Crona catch phrase",
            ]
        );

        let button = doc.element(doc.children(article)[5]).unwrap();
        assert_eq!(button.text(), "Show Comments");
        assert_eq!(button.data(DATA_POST_ID), Some("1"));
    }

    #[tokio::test]
    async fn test_fetches_run_sequentially_per_post() {
        let api = StaticApi::sample();
        let config = AppConfig::default();
        let renderer = PostRenderer::new(&api, &config);
        let mut doc = Document::new();

        let posts = [post(3, 2), post(4, 2)];
        renderer.build_post_list(&mut doc, Some(&posts)).await;
        assert_eq!(
            api.calls(),
            ["/users/2", "/posts/3/comments", "/users/2", "/posts/4/comments"]
        );
    }

    #[tokio::test]
    async fn test_missing_author_omits_byline() {
        let api = StaticApi::sample();
        let config = AppConfig::default();
        let renderer = PostRenderer::new(&api, &config);
        let mut doc = Document::new();

        let posts = [post(10, 42)];
        let fragment = renderer.build_post_list(&mut doc, Some(&posts)).await.unwrap();
        let article = fragment.roots()[0];
        assert_eq!(doc.children(article).len(), 5);
        assert!(renderer.build_post_list(&mut doc, None).await.is_none());
    }

    #[tokio::test]
    async fn test_empty_posts_render_one_placeholder() {
        let api = StaticApi::sample();
        let config = AppConfig::default();
        let renderer = PostRenderer::new(&api, &config);
        let mut doc = Document::new();
        let main = doc.create_element("main");

        let rendered = renderer.render_posts(&mut doc, main, Some(&[])).await.unwrap();
        let Rendered::Placeholder(placeholder) = rendered else {
            panic!("expected placeholder, got {rendered:?}");
        };
        assert_eq!(doc.children(main), &[placeholder]);
        let element = doc.element(placeholder).unwrap();
        assert_eq!(element.tag(), "p");
        assert!(element.has_class(CLASS_DEFAULT_TEXT));
        assert_eq!(element.text(), "Select an Employee to display their posts.");
    }

    #[tokio::test]
    async fn test_render_posts_appends_articles() {
        let api = StaticApi::sample();
        let config = AppConfig::default();
        let renderer = PostRenderer::new(&api, &config);
        let mut doc = Document::new();
        let main = doc.create_element("main");

        let posts = [post(1, 1), post(2, 1)];
        let rendered = renderer.render_posts(&mut doc, main, Some(&posts)).await;
        assert_eq!(rendered, Some(Rendered::Posts(doc.children(main).to_vec())));
        assert_eq!(doc.children(main).len(), 2);
    }

    #[tokio::test]
    async fn test_render_without_main() {
        let api = StaticApi::sample();
        let config = AppConfig::default();
        let renderer = PostRenderer::new(&api, &config);
        let mut doc = Document::new();
        let main = doc.create_element("main");
        doc.remove(main);

        assert!(renderer.render_posts(&mut doc, main, None).await.is_none());
    }
}
