use serde::{Deserialize, Serialize};

/// Page metadata handed to the rendering layer.
///
/// Field names serialize in the camelCase shape page renderers expect
/// (`alternates.canonical`, `openGraph`, `twitter`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDocument {
    pub title: String,
    pub description: String,
    pub alternates: Alternates,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternates {
    pub canonical: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterCard {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub card: TwitterCardKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCardKind {
    #[default]
    SummaryLargeImage,
}

impl TwitterCardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TwitterCardKind::SummaryLargeImage => "summary_large_image",
        }
    }
}

impl MetadataDocument {
    /// Build a document whose Open Graph and Twitter fields mirror the
    /// top-level title, description and image.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        canonical: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let description = description.into();
        let image = image.into();

        Self {
            alternates: Alternates {
                canonical: canonical.into(),
            },
            open_graph: OpenGraph {
                title: title.clone(),
                description: description.clone(),
                images: vec![image.clone()],
            },
            twitter: TwitterCard {
                title: title.clone(),
                description: description.clone(),
                images: vec![image],
                card: TwitterCardKind::SummaryLargeImage,
            },
            title,
            description,
        }
    }

    pub fn canonical_url(&self) -> &str {
        &self.alternates.canonical
    }

    /// Primary preview image (first Open Graph image)
    pub fn image(&self) -> Option<&str> {
        self.open_graph.images.first().map(String::as_str)
    }

    /// True when every string field carries a value and every image list is non-empty
    pub fn is_fully_populated(&self) -> bool {
        let strings = [
            &self.title,
            &self.description,
            &self.alternates.canonical,
            &self.open_graph.title,
            &self.open_graph.description,
            &self.twitter.title,
            &self.twitter.description,
        ];

        strings.iter().all(|s| !s.is_empty())
            && !self.open_graph.images.is_empty()
            && !self.twitter.images.is_empty()
            && self
                .open_graph
                .images
                .iter()
                .chain(self.twitter.images.iter())
                .all(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_fields_mirror_top_level() {
        let doc = MetadataDocument::new(
            "Demo",
            "A demo project",
            "https://example.com/share/t2",
            "https://example.com/og.png",
        );

        assert_eq!(doc.open_graph.title, "Demo");
        assert_eq!(doc.twitter.description, "A demo project");
        assert_eq!(doc.twitter.images, vec!["https://example.com/og.png"]);
        assert_eq!(doc.twitter.card, TwitterCardKind::SummaryLargeImage);
        assert_eq!(doc.canonical_url(), "https://example.com/share/t2");
        assert_eq!(doc.image(), Some("https://example.com/og.png"));
        assert!(doc.is_fully_populated());
    }

    #[test]
    fn test_serializes_camel_case_shape() {
        let doc = MetadataDocument::new("T", "D", "https://x/share/1", "https://x/i.png");
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["alternates"]["canonical"], "https://x/share/1");
        assert_eq!(json["openGraph"]["images"][0], "https://x/i.png");
        assert_eq!(json["twitter"]["card"], "summary_large_image");
    }

    #[test]
    fn test_empty_title_is_not_fully_populated() {
        let doc = MetadataDocument::new("", "D", "https://x/share/1", "https://x/i.png");
        assert!(!doc.is_fully_populated());
    }
}
