//! SMILES panel and clipboard copy.
//!
//! Copy uses the OSC 52 terminal escape, which most modern terminals (and
//! tmux with `set-clipboard on`) forward to the system clipboard.

use std::io::Write;

use base64::Engine as _;
use console::{style, Term};

use crate::notify::Toaster;

pub fn render_smiles(compound_name: &str, smiles: &str) -> String {
    let badge = if smiles.trim().is_empty() {
        style("[Invalid]").red().to_string()
    } else {
        style("[Valid]").green().to_string()
    };
    format!(
        "{} {}\n{}\n    {}\n",
        style("SMILES Structure").bold(),
        badge,
        style(format!("Canonical SMILES representation for {compound_name}")).dim(),
        style(smiles).cyan()
    )
}

/// OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{payload}\x07")
}

/// Put `smiles` on the clipboard and report the outcome as a toast.
pub fn copy_smiles(term: &Term, toasts: &Toaster, smiles: &str) -> bool {
    if !term.is_term() {
        toasts.error("Failed to copy SMILES");
        return false;
    }
    let mut out = term.clone();
    match out.write_all(osc52_sequence(smiles).as_bytes()).and_then(|_| out.flush()) {
        Ok(()) => {
            toasts.success("SMILES copied to clipboard!");
            true
        }
        Err(e) => {
            tracing::warn!("Clipboard write failed: {}", e);
            toasts.error("Failed to copy SMILES");
            false
        }
    }
}
