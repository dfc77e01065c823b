//! Interactive shell: one screen per route, commands typed at a prompt.
//!
//! Navigation resets the page being left. Bare text on a prediction page
//! is submitted as a compound name.

use std::path::PathBuf;

use anyhow::Context;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, Input, MultiSelect};
use serotoninai_common::entities::{ModelId, ModelSelection, RECEPTORS};

use crate::context::AppContext;
use crate::pages::{self, help, home, BatchPage, BbbPage, HiaPage, Outcome, ReceptorsPage, SertPage};
use crate::progress::with_spinner;
use crate::render::{self, smiles::copy_smiles};
use crate::router::Route;

pub const COMMANDS: &str = "\
Commands:
  go <path>          navigate (/, /receptors, /sert, /hia, /bbb, /batch, /help)
  <compound>         on a prediction page, predict for that compound
  receptor [id]      /receptors: choose the receptor subtype
  copy               copy the SMILES of the current result
  load <file.csv>    /batch: load a CSV of compound names
  models             /batch: pick prediction models
  toggle <model>     /batch: toggle receptors, sert, hia or bbb
  run                /batch: process the loaded file
  export [dir]       /batch: write results as CSV
  commands           show this list
  quit               leave the shell";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Empty,
    Go(Route),
    Submit(String),
    Receptor(Option<String>),
    Copy,
    Load(PathBuf),
    Models,
    Toggle(ModelId),
    Run,
    Export(Option<PathBuf>),
    Commands,
    Quit,
    Invalid(String),
}

fn accepts_compounds(route: &Route) -> bool {
    matches!(route, Route::Receptors | Route::Sert | Route::Hia | Route::Bbb)
}

/// Parse one input line in the context of the current route.
pub fn parse_command(line: &str, route: &Route) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    if line.starts_with('/') {
        return Command::Go(Route::resolve(line));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    match word.to_lowercase().as_str() {
        "go" | "cd" => Command::Go(Route::resolve(rest)),
        "quit" | "exit" => Command::Quit,
        "commands" | "?" => Command::Commands,
        "copy" => Command::Copy,
        "receptor" => Command::Receptor(arg),
        "load" => match arg {
            Some(path) => Command::Load(PathBuf::from(path)),
            None => Command::Invalid("Usage: load <file.csv>".into()),
        },
        "models" => Command::Models,
        "toggle" => match rest.parse::<ModelId>() {
            Ok(id) => Command::Toggle(id),
            Err(e) => Command::Invalid(e.to_string()),
        },
        "run" => Command::Run,
        "export" => Command::Export(arg.map(PathBuf::from)),
        _ if accepts_compounds(route) => Command::Submit(line.to_string()),
        _ => Command::Invalid(format!("Unknown command: {word} (type `commands`)")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    ctx: AppContext,
    term: Term,
    route: Route,
    receptors: ReceptorsPage,
    sert: SertPage,
    hia: HiaPage,
    bbb: BbbPage,
    batch: BatchPage,
}

impl Shell {
    pub fn new(ctx: AppContext) -> Self {
        let batch = BatchPage::new(ctx.batch.selection());
        Self {
            ctx,
            term: Term::stdout(),
            route: Route::Home,
            receptors: ReceptorsPage::new(),
            sert: SertPage::new(),
            hia: HiaPage::new(),
            bbb: BbbPage::new(),
            batch,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Switch route, resetting the page being left.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        match self.route {
            Route::Receptors => self.receptors.leave(),
            Route::Sert => self.sert.leave(),
            Route::Hia => self.hia.leave(),
            Route::Bbb => self.bbb.leave(),
            Route::Batch => self.batch.leave(self.ctx.batch.selection()),
            Route::Home | Route::Help | Route::NotFound(_) => {}
        }
        tracing::debug!(from = self.route.path(), to = route.path(), "Navigate");
        self.route = route;
    }

    /// Body of the current screen, without header and footer.
    pub fn page_body(&self) -> String {
        match &self.route {
            Route::Home => home::render(),
            Route::Receptors => self.receptors.render(),
            Route::Sert => self.sert.render(),
            Route::Hia => self.hia.render(),
            Route::Bbb => self.bbb.render(),
            Route::Batch => self.batch.render(),
            Route::Help => help::render(),
            Route::NotFound(path) => pages::not_found(path),
        }
    }

    pub fn screen(&self) -> String {
        format!(
            "{}\n{}\n{}\n",
            render::header(&self.route, &self.ctx.api_url),
            self.page_body(),
            render::footer()
        )
    }

    fn current_smiles(&self) -> Option<&str> {
        match self.route {
            Route::Receptors => self.receptors.controller.result().map(|p| p.smiles.as_str()),
            Route::Sert => self.sert.controller.result().map(|p| p.smiles.as_str()),
            Route::Hia => self.hia.controller.result().map(|p| p.smiles.as_str()),
            Route::Bbb => self.bbb.controller.result().map(|p| p.smiles.as_str()),
            _ => None,
        }
    }

    fn require(&self, route: Route, command: &str) -> bool {
        if self.route == route {
            return true;
        }
        self.ctx
            .toasts
            .error(format!("`{command}` is only available on {}", route.path()));
        false
    }

    fn show_page(&self) {
        println!("{}", self.page_body());
    }

    pub async fn execute(&mut self, command: Command) -> anyhow::Result<Flow> {
        match command {
            Command::Empty => {}
            Command::Quit => return Ok(Flow::Exit),
            Command::Commands => println!("{COMMANDS}"),
            Command::Invalid(message) => self.ctx.toasts.error(message),
            Command::Go(route) => {
                self.navigate(route);
                println!("{}", self.screen());
            }
            Command::Submit(compound) => {
                let ctx = &self.ctx;
                let outcome = match self.route {
                    Route::Receptors => with_spinner("Predicting…", self.receptors.submit(ctx, &compound)).await,
                    Route::Sert => with_spinner("Predicting…", self.sert.submit(ctx, &compound)).await,
                    Route::Hia => with_spinner("Predicting…", self.hia.submit(ctx, &compound)).await,
                    Route::Bbb => with_spinner("Predicting…", self.bbb.submit(ctx, &compound)).await,
                    _ => Outcome::Rejected,
                };
                if outcome != Outcome::Rejected {
                    self.show_page();
                }
            }
            Command::Receptor(id) => {
                if self.require(Route::Receptors, "receptor") {
                    let id = match id {
                        Some(id) => Some(id),
                        None => {
                            self.ctx.toasts.settle().await;
                            pick_receptor().await?
                        }
                    };
                    if let Some(id) = id {
                        if self.receptors.select(&self.ctx, &id) {
                            self.show_page();
                        }
                    }
                }
            }
            Command::Copy => match self.current_smiles() {
                Some(smiles) => {
                    copy_smiles(&self.term, &self.ctx.toasts, smiles);
                }
                None => self.ctx.toasts.error("Nothing to copy yet"),
            },
            Command::Load(path) => {
                if self.require(Route::Batch, "load") {
                    match self.batch.load_file(&self.ctx, &path) {
                        Ok(()) => self.show_page(),
                        Err(e) => self.ctx.toasts.error(format!("{e:#}")),
                    }
                }
            }
            Command::Models => {
                if self.require(Route::Batch, "models") {
                    self.ctx.toasts.settle().await;
                    if let Some(selection) = pick_models(self.batch.selection().clone()).await? {
                        self.batch.set_selection(selection);
                        self.show_page();
                    }
                }
            }
            Command::Toggle(id) => {
                if self.require(Route::Batch, "toggle") {
                    self.batch.toggle_model(id);
                    self.show_page();
                }
            }
            Command::Run => {
                if self.require(Route::Batch, "run") {
                    let outcome = with_spinner("Processing batch…", self.batch.process(&self.ctx)).await;
                    if outcome != Outcome::Rejected {
                        self.show_page();
                    }
                }
            }
            Command::Export(dir) => {
                if self.require(Route::Batch, "export") {
                    let dir = dir.unwrap_or_else(|| self.ctx.output_dir());
                    let today = chrono::Utc::now().date_naive();
                    match self.batch.export(&self.ctx, &dir, today) {
                        Ok(Some(path)) => println!("{}", style(path.display()).dim()),
                        Ok(None) => self.ctx.toasts.error("No results to export"),
                        Err(e) => tracing::warn!("Export failed: {:#}", e),
                    }
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Prompt-and-dispatch loop until `quit` or end of input.
    pub async fn run(mut self) -> anyhow::Result<()> {
        println!("{}", self.screen());
        println!("{}", style("Type `commands` for help.").dim());
        loop {
            self.ctx.toasts.settle().await;
            let Some(line) = read_line(self.term.is_term(), self.route.path().to_string()).await? else {
                break;
            };
            let command = parse_command(&line, &self.route);
            if self.execute(command).await? == Flow::Exit {
                break;
            }
        }
        tracing::debug!("Shell closed");
        Ok(())
    }
}

// ── Prompts ───────────────────────────────────────────────────────────────────
//
// dialoguer blocks, so prompts run on the blocking pool and the toast
// printer keeps draining meanwhile. Callers settle the toaster first so
// queued toasts are printed before the prompt is drawn.

async fn read_line(interactive: bool, prompt: String) -> anyhow::Result<Option<String>> {
    tokio::task::spawn_blocking(move || -> anyhow::Result<Option<String>> {
        if interactive {
            let line = Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            return Ok(Some(line));
        }
        let mut line = String::new();
        let read = std::io::stdin().read_line(&mut line).context("Failed to read stdin")?;
        Ok((read > 0).then_some(line))
    })
    .await
    .context("Prompt task failed")?
}

async fn pick_receptor() -> anyhow::Result<Option<String>> {
    tokio::task::spawn_blocking(|| -> anyhow::Result<Option<String>> {
        let items: Vec<&str> = RECEPTORS.iter().map(|r| r.name).collect();
        let picked = FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose a receptor")
            .items(&items)
            .default(0)
            .interact_opt()?;
        Ok(picked.map(|i| RECEPTORS[i].id.to_string()))
    })
    .await
    .context("Prompt task failed")?
}

async fn pick_models(current: ModelSelection) -> anyhow::Result<Option<ModelSelection>> {
    tokio::task::spawn_blocking(move || -> anyhow::Result<Option<ModelSelection>> {
        let items: Vec<String> = ModelId::ALL
            .iter()
            .map(|id| format!("{} ({})", id.label(), id.description()))
            .collect();
        let checked: Vec<bool> = ModelId::ALL.iter().map(|id| current.contains(*id)).collect();
        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Prediction models")
            .items(&items)
            .defaults(&checked)
            .interact_opt()?;
        Ok(picked.map(|indices| ModelSelection::from_ids(indices.into_iter().map(|i| ModelId::ALL[i]))))
    })
    .await
    .context("Prompt task failed")?
}
