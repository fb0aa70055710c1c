pub mod render;
mod types;

pub use types::*;

use anyhow::{Context as _, Result};
use log::info;
use once_cell::sync::Lazy;
use select::document::Document;
use select::node::{Data, Node};
use select::predicate::Name;
use std::path::Path;
use std::time::Duration;

// WhatsApp's link-preview crawler; some sites serve different markup to known bots.
const CRAWLER_USER_AGENT: &str = "WhatsApp/2.21.12.21 A";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(CRAWLER_USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .unwrap()
});

pub async fn fetch_html(url: &str) -> Result<FetchedPage> {
    info!("fetch_html: url = {url}");
    let response = CLIENT
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to fetch {url}"))?;
    let status = response.status().as_u16();
    let html = response
        .text()
        .await
        .with_context(|| format!("failed to read body of {url}"))?;
    Ok(FetchedPage { html, status })
}

pub fn load_html(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    info!("load_html: path = {}", path.display());
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn inspect_html(html: &str) -> PageReport {
    let document = Document::from(html);
    PageReport {
        meta_tags: meta_tags_of(&document),
        title: title_of(&document),
    }
}

pub fn get_meta_tags(html: &str) -> Vec<MetaTag> {
    meta_tags_of(&Document::from(html))
}

pub fn get_title(html: &str) -> Option<String> {
    title_of(&Document::from(html))
}

fn meta_tags_of(document: &Document) -> Vec<MetaTag> {
    document
        .find(Name("meta"))
        .filter_map(|node| {
            let key = node.attr("property").or_else(|| node.attr("name"))?;
            Some(MetaTag {
                key: key.to_string(),
                content: node.attr("content").map(str::to_string),
                attrs: element_attrs(&node),
            })
        })
        .collect()
}

fn title_of(document: &Document) -> Option<String> {
    document.find(Name("title")).next().map(|node| node.text())
}

fn element_attrs(node: &Node) -> Vec<(String, String)> {
    match node.data() {
        Data::Element(_, attrs) => attrs
            .iter()
            .map(|(name, value)| (name.local.to_string(), value.to_string()))
            .collect(),
        _ => Vec::new(),
    }
}
