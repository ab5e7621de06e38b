//! Container abstraction and HTML output
//!
//! The client never looks elements up by ID. It writes [`Node`]s into the
//! [`Container`] handles it was constructed with, and the host decides how
//! to display them. [`Surface`] is the in-memory container used by the
//! Tauri host and by tests.

use serde::Serialize;

use crate::url::PLACEHOLDER_THUMBNAIL;

/// Visual weight of a placeholder message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Info,
    Error,
}

/// Views and publish date, present only on non-search cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardStats {
    pub views: String,
    pub published: String,
}

/// A fully resolved video card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Playable URL the thumbnail links to
    pub url: String,
    pub video_id: Option<String>,
    pub thumbnail: String,
    pub title: String,
    pub channel: String,
    pub stats: Option<CardStats>,
}

/// One element written into a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Message { text: String, tone: Tone },
    Card(Card),
    /// Call-to-action that triggers a YouTube scrape for `query`
    ScrapePrompt { query: String },
}

impl Node {
    pub fn info(text: impl Into<String>) -> Self {
        Node::Message {
            text: text.into(),
            tone: Tone::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Node::Message {
            text: text.into(),
            tone: Tone::Error,
        }
    }

    /// Renders the node as an HTML fragment
    pub fn to_html(&self) -> String {
        match self {
            Node::Message { text, tone } => {
                let class = match tone {
                    Tone::Info => "message",
                    Tone::Error => "message error",
                };
                format!("<p class=\"{}\">{}</p>", class, escape_html(text))
            }
            Node::Card(card) => card_html(card),
            Node::ScrapePrompt { query } => format!(
                "<button class=\"btn scrape-button\" data-query=\"{}\">\
                 <i class=\"fab fa-youtube\"></i> Search on YouTube for \"{}\"</button>",
                escape_html(query),
                escape_html(query)
            ),
        }
    }
}

fn card_html(card: &Card) -> String {
    let title = escape_html(&card.title);
    let mut html = format!(
        "<div class=\"video-card\">\
         <a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">\
         <img class=\"thumbnail\" src=\"{thumb}\" alt=\"Video thumbnail for {title}\" \
         onerror=\"this.onerror=null;this.src='{placeholder}';this.alt='Fallback thumbnail';\">\
         </a>\
         <div class=\"video-info\">\
         <div class=\"video-title\">{title}</div>\
         <div class=\"channel\"><i class=\"fas fa-user-circle\"></i> {channel}</div>",
        url = escape_html(&card.url),
        thumb = escape_html(&card.thumbnail),
        title = title,
        placeholder = PLACEHOLDER_THUMBNAIL,
        channel = escape_html(&card.channel),
    );

    if let Some(stats) = &card.stats {
        html.push_str(&format!(
            "<div class=\"views-time\">\
             <span class=\"views\"><i class=\"fas fa-eye\"></i> {}</span>\
             <span class=\"published\"><i class=\"fas fa-calendar-alt\"></i> {}</span>\
             </div>",
            escape_html(&stats.views),
            escape_html(&stats.published)
        ));
    }

    html.push_str("</div></div>");
    html
}

/// Escapes text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A display region the client writes into
pub trait Container {
    /// Removes everything from the container
    fn clear(&mut self);

    /// Appends a node after the existing ones
    fn append(&mut self, node: Node);

    /// Replaces the contents with a single message
    fn show(&mut self, node: Node) {
        self.clear();
        self.append(node);
    }
}

impl<C: Container + ?Sized> Container for &mut C {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn append(&mut self, node: Node) {
        (**self).append(node);
    }
}

/// In-memory container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Surface {
    nodes: Vec<Node>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Cards currently shown, in display order
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Card(card) => Some(card),
            _ => None,
        })
    }

    /// Text of every message currently shown
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Message { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Renders every node, in order, as one HTML fragment
    pub fn to_html(&self) -> String {
        self.nodes.iter().map(Node::to_html).collect()
    }
}

impl Container for Surface {
    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn append(&mut self, node: Node) {
        self.nodes.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn sample_card(stats: Option<CardStats>) -> Card {
        Card {
            url: "https://www.youtube.com/watch?v=abc".to_string(),
            video_id: Some("abc".to_string()),
            thumbnail: "https://img.youtube.com/vi/abc/hqdefault.jpg".to_string(),
            title: "Cats & Dogs <live>".to_string(),
            channel: "Pets".to_string(),
            stats,
        }
    }

    fn select<'a>(doc: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
        let selector = Selector::parse(css).expect("valid selector");
        doc.select(&selector).collect()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_card_html_link_and_thumbnail() {
        let html = Node::Card(sample_card(None)).to_html();
        let doc = Html::parse_fragment(&html);

        let links = select(&doc, "div.video-card > a");
        assert_eq!(links.len(), 1);
        assert_eq!(
            links[0].value().attr("href"),
            Some("https://www.youtube.com/watch?v=abc")
        );
        assert_eq!(links[0].value().attr("target"), Some("_blank"));
        assert_eq!(links[0].value().attr("rel"), Some("noopener noreferrer"));

        let imgs = select(&doc, "img.thumbnail");
        assert_eq!(
            imgs[0].value().attr("src"),
            Some("https://img.youtube.com/vi/abc/hqdefault.jpg")
        );
        let onerror = imgs[0].value().attr("onerror").unwrap_or_default();
        assert!(onerror.contains(PLACEHOLDER_THUMBNAIL));
    }

    #[test]
    fn test_card_html_escapes_title() {
        let html = Node::Card(sample_card(None)).to_html();
        let doc = Html::parse_fragment(&html);
        let titles = select(&doc, ".video-title");
        assert_eq!(titles[0].text().collect::<String>(), "Cats & Dogs <live>");
    }

    #[test]
    fn test_card_html_stats_only_when_present() {
        let plain = Html::parse_fragment(&Node::Card(sample_card(None)).to_html());
        assert!(select(&plain, ".views-time").is_empty());

        let stats = CardStats {
            views: "10K".to_string(),
            published: "N/A".to_string(),
        };
        let full = Html::parse_fragment(&Node::Card(sample_card(Some(stats))).to_html());
        assert_eq!(select(&full, ".views-time").len(), 1);
        assert!(select(&full, ".views")[0].text().collect::<String>().contains("10K"));
    }

    #[test]
    fn test_scrape_prompt_html() {
        let html = Node::ScrapePrompt {
            query: "cats".to_string(),
        }
        .to_html();
        let doc = Html::parse_fragment(&html);
        let buttons = select(&doc, "button.scrape-button");
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].value().attr("data-query"), Some("cats"));
        assert!(buttons[0].text().collect::<String>().contains("Search on YouTube"));
    }

    #[test]
    fn test_message_html_tone() {
        assert_eq!(Node::info("hi").to_html(), "<p class=\"message\">hi</p>");
        assert_eq!(
            Node::error("boom").to_html(),
            "<p class=\"message error\">boom</p>"
        );
    }

    #[test]
    fn test_surface_show_replaces_contents() {
        let mut surface = Surface::new();
        surface.append(Node::Card(sample_card(None)));
        surface.append(Node::Card(sample_card(None)));
        assert_eq!(surface.cards().count(), 2);

        surface.show(Node::info("Searching on server..."));
        assert_eq!(surface.nodes().len(), 1);
        assert_eq!(surface.messages().collect::<Vec<_>>(), vec!["Searching on server..."]);
    }

    #[test]
    fn test_node_serialize_tagged() {
        let json = serde_json::to_value(Node::info("x")).expect("Serialization should succeed");
        assert_eq!(json, serde_json::json!({"kind": "message", "text": "x", "tone": "info"}));
    }
}
