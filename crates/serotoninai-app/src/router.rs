//! Route table: maps shell paths to pages.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Receptors,
    Sert,
    Hia,
    Bbb,
    Batch,
    Help,
    /// Catch-all; carries the path that failed to match.
    NotFound(String),
}

/// Navigation bar entries, in display order.
pub const NAV_ITEMS: [Route; 7] = [
    Route::Home,
    Route::Receptors,
    Route::Sert,
    Route::Hia,
    Route::Bbb,
    Route::Batch,
    Route::Help,
];

impl Route {
    /// Resolve a user-typed path. Leading `/` is optional, a trailing one is
    /// ignored and matching is case-insensitive.
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_matches('/').to_lowercase();
        match normalized.as_str() {
            ""          => Route::Home,
            "receptors" => Route::Receptors,
            "sert"      => Route::Sert,
            "hia"       => Route::Hia,
            "bbb"       => Route::Bbb,
            "batch"     => Route::Batch,
            "help"      => Route::Help,
            _ => {
                let shown = if trimmed.starts_with('/') { trimmed.to_string() } else { format!("/{trimmed}") };
                Route::NotFound(shown)
            }
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home      => "/",
            Route::Receptors => "/receptors",
            Route::Sert      => "/sert",
            Route::Hia       => "/hia",
            Route::Bbb       => "/bbb",
            Route::Batch     => "/batch",
            Route::Help      => "/help",
            Route::NotFound(path) => path,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home      => "Home",
            Route::Receptors => "5-HT Receptors",
            Route::Sert      => "SERT",
            Route::Hia       => "HIA",
            Route::Bbb       => "BBB",
            Route::Batch     => "Batch",
            Route::Help      => "Help",
            Route::NotFound(_) => "Not Found",
        }
    }
}
