use gloo_console::error;
use pagekit::app::{current_path, App, AppProps};
use pagekit::pages::PageKind;
use pagekit::site::{Link, MetaTag, PageRoute, SiteOptions};
use serde_json::json;

fn site() -> SiteOptions {
    SiteOptions {
        title: "Picsel".to_string(),
        class: "dark".to_string(),
        meta_tags: vec![
            MetaTag::new("description", "Picsel is a simple image selector", "og:description"),
            MetaTag::new("keywords", "image selector, image picker, image gallery", "og:keywords"),
            MetaTag::new("og:title", "Picsel", "og:title"),
        ],
        links: vec![Link::new("icon", "/public/favicon.ico")],
        pages: vec![
            PageRoute::new("/", PageKind::Home).with_props(json!({"Name": "Picsel", "InitialNumber": 0})),
            PageRoute::new("/about", PageKind::About).with_title("About | Picsel"),
        ],
        ..Default::default()
    }
}

fn main() {
    let site = site();
    if let Err(err) = site.apply(&current_path()) {
        error!(format!("{err}"));
    }
    yew::Renderer::<App>::with_props(AppProps { site }).render();
}
