//! Page flows against an in-memory backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use serotoninai_client::PredictionService;
use serotoninai_common::entities::{
    BatchResponse, BbbPrediction, HiaPrediction, ModelId, ModelSelection, MolecularProperties, ReceptorPrediction,
    SertPrediction,
};
use serotoninai_common::error::{Result, SerotoninError};
use tokio::sync::broadcast;

use super::batch::{NO_FILE, NO_MODELS};
use super::receptors::NO_RECEPTOR;
use super::*;
use crate::config::Config;
use crate::notify::{Toast, ToastLevel};
use crate::render::Tone;

const PROPS: MolecularProperties =
    MolecularProperties { molecular_weight: 176.2, log_p: 0.2, hbd: 3.0, hba: 2.0, tpsa: 62.0 };

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Receptor(String, String),
    Sert(String),
    Hia(String),
    Bbb(String),
    Batch(Vec<String>, Vec<String>),
}

/// Answers every compound except "Unobtainium", which the backend does
/// not know.
#[derive(Default)]
struct FakeBackend {
    calls: Mutex<Vec<Call>>,
}

impl FakeBackend {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(name: &str) -> Result<()> {
        if name == "Unobtainium" {
            return Err(SerotoninError::Api { status: 404, message: "Compound not found".into() });
        }
        Ok(())
    }
}

#[async_trait]
impl PredictionService for FakeBackend {
    async fn predict_receptor(&self, compound_name: &str, receptor: &str) -> Result<ReceptorPrediction> {
        self.record(Call::Receptor(compound_name.into(), receptor.into()));
        Self::check(compound_name)?;
        Ok(ReceptorPrediction {
            success: true,
            compound_name: compound_name.into(),
            smiles: "NCCc1c[nH]c2ccc(O)cc12".into(),
            p_ki: 7.9,
            is_active: true,
            receptor: receptor.into(),
            applicability_domain: "Within".into(),
            properties: PROPS,
        })
    }

    async fn predict_sert(&self, compound_name: &str) -> Result<SertPrediction> {
        self.record(Call::Sert(compound_name.into()));
        Self::check(compound_name)?;
        Ok(SertPrediction {
            success: true,
            compound_name: compound_name.into(),
            smiles: "NCCc1c[nH]c2ccc(O)cc12".into(),
            p_ki: 8.2,
            is_active: true,
            applicability_domain: "Within".into(),
            properties: PROPS,
        })
    }

    async fn predict_hia(&self, compound_name: &str) -> Result<HiaPrediction> {
        self.record(Call::Hia(compound_name.into()));
        Self::check(compound_name)?;
        Ok(HiaPrediction {
            success: true,
            compound_name: compound_name.into(),
            smiles: "CCO".into(),
            hia_classification: "High".into(),
            hia_value: 98.0,
            hia_probability: 0.97,
            properties: PROPS,
        })
    }

    async fn predict_bbb(&self, compound_name: &str) -> Result<BbbPrediction> {
        self.record(Call::Bbb(compound_name.into()));
        Self::check(compound_name)?;
        Ok(BbbPrediction {
            success: true,
            compound_name: compound_name.into(),
            smiles: "CCO".into(),
            bbb_classification: "BBB+".into(),
            bbb_probability: 0.9,
            properties: PROPS,
        })
    }

    async fn predict_batch(&self, compounds: &[String], selection: &ModelSelection) -> Result<BatchResponse> {
        self.record(Call::Batch(compounds.to_vec(), selection.backend_models()));
        let results = compounds
            .iter()
            .enumerate()
            .map(|(i, c)| json!({"compound": c, "predictions": {"SERT": {"pKi": 8.0 + i as f64, "isActive": true}}}))
            .collect::<Vec<_>>();
        Ok(serde_json::from_value(json!({ "results": results }))?)
    }
}

fn setup(config: Config) -> (Arc<FakeBackend>, AppContext, broadcast::Receiver<Toast>) {
    let backend = Arc::new(FakeBackend::default());
    let ctx = AppContext::with_service(backend.clone(), &config);
    let rx = ctx.toasts.subscribe();
    (backend, ctx, rx)
}

fn drain(rx: &mut broadcast::Receiver<Toast>) -> Vec<Toast> {
    let mut out = Vec::new();
    while let Ok(toast) = rx.try_recv() {
        out.push(toast);
    }
    out
}

// ── Single-compound pages ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_sert_success_shows_cards() {
    let (backend, ctx, mut rx) = setup(Config::default());
    let mut page = SertPage::new();

    assert_eq!(page.submit(&ctx, "  Serotonin ").await, Outcome::Shown);
    assert_eq!(backend.calls(), vec![Call::Sert("Serotonin".into())]);

    let pred = page.controller.result().unwrap();
    let cards = sert::cards(pred);
    assert_eq!(cards[0].tone, Tone::Success);
    assert_eq!(cards[0].value.as_deref(), Some("8.2"));
    assert_eq!(cards[1].tone, Tone::Success);
    assert_eq!(cards[1].value.as_deref(), Some("Within"));

    let toasts = drain(&mut rx);
    assert_eq!(toasts, vec![Toast { level: ToastLevel::Success, message: "SERT prediction complete!".into() }]);

    let text = console::strip_ansi_codes(&page.render()).to_string();
    assert!(text.contains("SERT Binding Affinity"));
    assert!(text.contains("NCCc1c[nH]c2ccc(O)cc12"));
}

#[tokio::test]
async fn test_blank_compound_never_reaches_backend() {
    let (backend, ctx, mut rx) = setup(Config::default());
    let mut page = HiaPage::new();

    assert_eq!(page.submit(&ctx, "   ").await, Outcome::Rejected);
    assert!(backend.calls().is_empty());
    assert_eq!(page.controller.state(), &state::PageState::Idle);
    assert_eq!(drain(&mut rx)[0].message, EMPTY_COMPOUND);
}

#[tokio::test]
async fn test_backend_error_hides_result_and_allows_retry() {
    let (_backend, ctx, mut rx) = setup(Config::default());
    let mut page = BbbPage::new();

    assert_eq!(page.submit(&ctx, "Caffeine").await, Outcome::Shown);
    assert_eq!(page.submit(&ctx, "Unobtainium").await, Outcome::Failed);
    assert!(page.controller.result().is_none());
    assert_eq!(page.controller.last_error(), Some("Compound not found"));

    let toasts = drain(&mut rx);
    assert_eq!(toasts.last().unwrap(), &Toast { level: ToastLevel::Error, message: "Compound not found".into() });

    assert_eq!(page.submit(&ctx, "Caffeine").await, Outcome::Shown);
}

#[tokio::test]
async fn test_receptor_required_before_submit() {
    let (backend, ctx, mut rx) = setup(Config::default());
    let mut page = ReceptorsPage::new();

    assert_eq!(page.submit(&ctx, "LSD").await, Outcome::Rejected);
    assert!(backend.calls().is_empty());
    assert_eq!(drain(&mut rx)[0].message, NO_RECEPTOR);

    assert!(!page.select(&ctx, "5-HT9"));
    assert!(page.select(&ctx, "5-ht2a"));
    assert_eq!(page.submit(&ctx, "LSD").await, Outcome::Shown);
    assert_eq!(backend.calls(), vec![Call::Receptor("LSD".into(), "5-HT2A".into())]);

    let text = console::strip_ansi_codes(&page.render()).to_string();
    assert!(text.contains("5-HT2A Binding Affinity"));
    assert!(text.contains("Lipinski's Rule of Five  [Compliant]"));
    assert!(text.contains("Rule of Three Compliance  [1 Violations]"));
}

#[tokio::test]
async fn test_leaving_page_discards_result() {
    let (_backend, ctx, _rx) = setup(Config::default());
    let mut page = ReceptorsPage::new();
    page.select(&ctx, "5-HT1A");
    page.submit(&ctx, "Buspirone").await;
    assert!(page.controller.result().is_some());

    page.leave();
    assert!(page.controller.result().is_none());
    assert!(page.selected().is_none());
}

#[tokio::test]
async fn test_structure_svg_written_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.display.svg_dir = Some(dir.path().display().to_string());
    let (_backend, ctx, _rx) = setup(config);

    let mut page = SertPage::new();
    page.submit(&ctx, "Serotonin").await;
    let svg = std::fs::read_to_string(dir.path().join("Serotonin.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
}

// ── Batch ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_batch_sends_compounds_and_models() {
    let (backend, ctx, mut rx) = setup(Config::default());
    let mut page = BatchPage::new(ModelSelection::from_ids([ModelId::Sert]));

    page.load_text(&ctx, "drugs.csv", "name\nFluoxetine\nSertraline");
    assert_eq!(page.process(&ctx).await, Outcome::Shown);
    assert_eq!(
        backend.calls(),
        vec![Call::Batch(vec!["Fluoxetine".into(), "Sertraline".into()], vec!["SERT".into()])]
    );

    let table = page.preview().unwrap();
    assert_eq!(table.headers, vec!["Compound", "Status", "SERT pKi", "SERT Active"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1], vec!["Sertraline", "OK", "9.0", "Yes"]);

    let messages: Vec<String> = drain(&mut rx).into_iter().map(|t| t.message).collect();
    assert_eq!(
        messages,
        vec![
            "File \"drugs.csv\" uploaded successfully".to_string(),
            "Predictions Complete! Processed 2 compounds".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_batch_validation_prevents_call() {
    let (backend, ctx, mut rx) = setup(Config::default());
    let mut page = BatchPage::new(ModelSelection::default());

    assert_eq!(page.process(&ctx).await, Outcome::Rejected);

    page.load_text(&ctx, "empty.csv", "compound_name\n");
    assert_eq!(page.process(&ctx).await, Outcome::Rejected);

    page.load_text(&ctx, "ok.csv", "compound_name\nPsilocybin");
    page.toggle_model(ModelId::Receptors);
    assert_eq!(page.process(&ctx).await, Outcome::Rejected);

    assert!(backend.calls().is_empty());
    let errors: Vec<String> = drain(&mut rx)
        .into_iter()
        .filter(|t| t.level == ToastLevel::Error)
        .map(|t| t.message)
        .collect();
    assert_eq!(errors, vec![NO_FILE.to_string(), "No compounds found in file".to_string(), NO_MODELS.to_string()]);
}

#[tokio::test]
async fn test_batch_export_writes_named_csv() {
    let (_backend, ctx, mut rx) = setup(Config::default());
    let dir = tempfile::tempdir().unwrap();
    let mut page = BatchPage::new(ModelSelection::from_ids([ModelId::Sert]));
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    assert_eq!(page.export(&ctx, dir.path(), date).unwrap(), None);

    page.load_text(&ctx, "drugs.csv", "name\nFluoxetine");
    page.process(&ctx).await;
    let path = page.export(&ctx, dir.path(), date).unwrap().unwrap();
    assert_eq!(path.file_name().unwrap(), "SerotoninAI_results_sert_2025-03-01.csv");

    let csv = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        csv,
        "compound,predictions.SERT.pKi,predictions.SERT.isActive\nFluoxetine,8.0,true"
    );
    let last = drain(&mut rx).pop().unwrap();
    assert_eq!(last.message, "Downloaded SerotoninAI_results_sert_2025-03-01.csv");
}

#[tokio::test]
async fn test_export_into_unusable_directory_toasts_error() {
    let (_backend, ctx, mut rx) = setup(Config::default());
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("results.txt");
    std::fs::write(&blocker, "not a directory").unwrap();

    let mut page = BatchPage::new(ModelSelection::from_ids([ModelId::Sert]));
    page.load_text(&ctx, "drugs.csv", "name\nFluoxetine");
    page.process(&ctx).await;
    drain(&mut rx);

    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    assert!(page.export(&ctx, &blocker.join("out"), date).is_err());
    assert_eq!(
        drain(&mut rx),
        vec![Toast {
            level: ToastLevel::Error,
            message: "Could not write SerotoninAI_results_sert_2025-03-01.csv".into()
        }]
    );
}
