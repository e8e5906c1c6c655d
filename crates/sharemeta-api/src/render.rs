//! `<head>` markup for a metadata document.
//!
//! All values are escaped by maud.

use maud::{html, Markup};
use sharemeta_types::MetadataDocument;

pub fn head_tags(doc: &MetadataDocument) -> Markup {
    html! {
        title { (doc.title) }
        meta name="description" content=(doc.description);
        link rel="canonical" href=(doc.canonical_url());

        meta property="og:type" content="website";
        meta property="og:url" content=(doc.canonical_url());
        meta property="og:title" content=(doc.open_graph.title);
        meta property="og:description" content=(doc.open_graph.description);
        @for image in &doc.open_graph.images {
            meta property="og:image" content=(image);
        }

        meta name="twitter:card" content=(doc.twitter.card.as_str());
        meta name="twitter:title" content=(doc.twitter.title);
        meta name="twitter:description" content=(doc.twitter.description);
        @for image in &doc.twitter.images {
            meta name="twitter:image" content=(image);
        }
    }
}
