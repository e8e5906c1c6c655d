use sharemeta_types::ShareBranding;
use url::form_urlencoded;

/// Absolute URLs for one origin
pub(crate) struct ShareUrls<'a> {
    origin: &'a str,
    branding: &'a ShareBranding,
}

impl<'a> ShareUrls<'a> {
    pub(crate) fn new(origin: &'a str, branding: &'a ShareBranding) -> Self {
        Self {
            origin: origin.trim_end_matches('/'),
            branding,
        }
    }

    pub(crate) fn canonical(&self, thread_id: &str) -> String {
        format!("{}/share/{}", self.origin, thread_id)
    }

    pub(crate) fn fallback_image(&self) -> String {
        format!("{}{}", self.origin, self.branding.fallback_image_path)
    }

    pub(crate) fn og_image(&self, title: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("title", title)
            .finish();
        format!("{}{}?{}", self.origin, self.branding.og_image_path, query)
    }
}
