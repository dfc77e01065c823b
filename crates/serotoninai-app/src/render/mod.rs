//! Terminal renderers. Every function returns a `String` so output can be
//! composed and tested; printing happens in the shell.

pub mod card;
pub mod radar;
pub mod smiles;
pub mod structure;
pub mod table;

use console::style;

use crate::router::{Route, NAV_ITEMS};

pub use card::{ResultCard, Tone};

/// Fixed header: brand plus navigation, current route highlighted.
pub fn header(current: &Route, api_url: &str) -> String {
    let nav: Vec<String> = NAV_ITEMS
        .iter()
        .map(|route| {
            let item = format!("{} {}", route.label(), style(route.path()).dim());
            if route == current {
                style(format!("[{item}]")).cyan().bold().to_string()
            } else {
                item
            }
        })
        .collect();

    format!(
        "{}  {}\n{}\n",
        style("SerotoninAI").magenta().bold(),
        style(format!("backend {api_url}")).dim(),
        nav.join("  ")
    )
}

pub fn footer() -> String {
    style("© 2025 SerotoninAI | All Rights Reserved").dim().to_string()
}

/// Page title with a subtitle line.
pub fn title(heading: &str, subtitle: &str) -> String {
    format!("{}\n{}\n", style(heading).bold().underlined(), style(subtitle).dim())
}

/// "Core concept" blurb shown under each page title.
pub fn concept(text: &str) -> String {
    format!("{} {}\n", style("Core concept:").cyan().bold(), text)
}
