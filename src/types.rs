#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub key: String,
    pub content: Option<String>,
    pub attrs: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub meta_tags: Vec<MetaTag>,
    pub title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub html: String,
    pub status: u16,
}
