use log::info;
use meta_inspector::{fetch_html, inspect_html, render};

const DEFAULT_URL: &str =
    "https://voiceofupsa.com/articles/beyond-the-lecture-hall-how-upsa-students-are-redefining-success";

#[tokio::main]
async fn main() {
    let _ = dotenv::dotenv();
    env_logger::init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_URL.to_string());
    info!("url = {url}");

    match fetch_html(&url).await {
        Ok(page) => {
            let report = inspect_html(&page.html);
            print!("{}", render::verbose(&report, Some(page.status)));
        }
        Err(e) => println!("Error: {e:#}"),
    }
}
