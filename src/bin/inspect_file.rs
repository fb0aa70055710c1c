use log::info;
use meta_inspector::{inspect_html, load_html, render};

const DEFAULT_FILE: &str = "article_debug_3.html";

fn main() {
    let _ = dotenv::dotenv();
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_FILE.to_string());
    info!("path = {path}");

    match load_html(&path) {
        Ok(html) => {
            let report = inspect_html(&html);
            print!("{}", render::normalized(&report));
        }
        Err(e) => println!("Error: {e:#}"),
    }
}
