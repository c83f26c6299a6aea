// ==========================================
// Guardas del envío - pruebas de integración
// ==========================================
// Alcance:
// 1. rechazo del portal: el borrador queda en revisión
// 2. falla de transporte: aviso de error sin perder el borrador
// 3. cancelación y reapertura de la solicitud
// 4. fases ilegales, doble apertura y reapertura en revisión
// ==========================================

mod helpers;

use std::sync::Arc;

use chrono::NaiveDate;
use cost_update_engine::api::ApiError;
use cost_update_engine::domain::types::{NotificationType, WorkflowPhase};
use cost_update_engine::services::buyers::StaticBuyerDirectory;
use cost_update_engine::services::notify::OptionalNotificationSink;
use cost_update_engine::DraftApi;
use helpers::mock_services::{
    MockCatalogService, MockSubmissionService, RecordingNotificationSink, ScriptedResponse,
};
use helpers::test_data_builder::{test_buyers, CatalogItemBuilder, CatalogSnapshotBuilder};

// ==========================================
// Ambiente de prueba
// ==========================================

fn snapshot_of_one() -> cost_update_engine::CatalogSnapshot {
    CatalogSnapshotBuilder::new()
        .item(
            CatalogItemBuilder::new("A001")
                .description("Gaseosa cola 1.5L")
                .current_cost(1000.0)
                .build(),
        )
        .build()
}

struct GuardTestEnv {
    api: DraftApi,
    catalog: Arc<MockCatalogService>,
    submission: Arc<MockSubmissionService>,
    sink: Arc<RecordingNotificationSink>,
}

fn build_env(responses: Vec<ScriptedResponse>) -> GuardTestEnv {
    helpers::init_test_env();

    let catalog = Arc::new(MockCatalogService::with_snapshot(snapshot_of_one()));
    let submission = Arc::new(MockSubmissionService::scripted(responses));
    let sink = Arc::new(RecordingNotificationSink::new());

    let api = DraftApi::with_default_config(
        catalog.clone(),
        submission.clone(),
        Arc::new(StaticBuyerDirectory::new(test_buyers())),
        OptionalNotificationSink::with_sink(sink.clone()),
    );

    GuardTestEnv {
        api,
        catalog,
        submission,
        sink,
    }
}

/// Lleva la solicitud hasta la fase de revisión
async fn advance_to_review(env: &mut GuardTestEnv) {
    env.api.open_new_request("900123456-7").await.unwrap();
    env.api.toggle_item("A001", "UND").unwrap();
    env.api
        .set_effective_start_date(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        .unwrap();
    env.api.set_buyer("B01").unwrap();
    env.api.advance_to_review().unwrap();
}

// ==========================================
// Rechazo del portal
// ==========================================

#[tokio::test]
async fn test_rechazo_mantiene_la_revision() {
    let mut env = build_env(vec![ScriptedResponse::Reject(
        "fecha de vigencia en el pasado".to_string(),
    )]);
    advance_to_review(&mut env).await;

    // El rechazo llega como acuse, no como error
    let receipt = env.api.submit().await.unwrap();
    assert!(!receipt.success);
    assert_eq!(env.api.phase(), WorkflowPhase::Reviewing, "se puede corregir");
    assert!(env.api.draft_id().is_some(), "el borrador sigue vivo");

    let messages = env.sink.messages();
    let last = messages.last().unwrap();
    assert_eq!(last.kind, NotificationType::Error);
    assert_eq!(
        last.message,
        "La solicitud fue rechazada: fecha de vigencia en el pasado"
    );

    // El guion agotado acepta: reintentar desde la misma revisión funciona
    let receipt = env.api.submit().await.unwrap();
    assert!(receipt.success);
    assert_eq!(env.api.phase(), WorkflowPhase::Idle);
    assert_eq!(env.submission.captured_requests().len(), 2);
}

// ==========================================
// Falla de transporte
// ==========================================

#[tokio::test]
async fn test_transporte_caido_no_pierde_el_borrador() {
    let mut env = build_env(vec![ScriptedResponse::TransportError(
        "timeout tras 30s".to_string(),
    )]);
    advance_to_review(&mut env).await;

    let err = env.api.submit().await.unwrap_err();
    assert!(matches!(err, ApiError::Service(_)));
    assert_eq!(env.api.phase(), WorkflowPhase::Reviewing);
    assert!(!env.api.is_busy(), "la bandera de ocupado se libera");

    let messages = env.sink.messages();
    let last = messages.last().unwrap();
    assert_eq!(last.kind, NotificationType::Error);
    assert!(last
        .message
        .starts_with("No fue posible enviar la solicitud"));
    assert!(last.message.contains("timeout tras 30s"));
}

// ==========================================
// Cancelación y reapertura
// ==========================================

#[tokio::test]
async fn test_cancelar_descarta_y_reabrir_recarga() {
    let mut env = build_env(vec![]);
    advance_to_review(&mut env).await;
    assert_eq!(env.catalog.call_count(), 1);

    let first_draft = env.api.draft_id().unwrap();
    env.api.cancel();
    assert_eq!(env.api.phase(), WorkflowPhase::Cancelled);
    assert!(env.api.draft_id().is_none());

    // Reabrir consulta el catálogo de nuevo y estrena identidad
    env.api.open_new_request("900123456-7").await.unwrap();
    assert_eq!(env.api.phase(), WorkflowPhase::Selecting);
    assert_eq!(env.catalog.call_count(), 2);
    assert_ne!(env.api.draft_id().unwrap(), first_draft);
    assert_eq!(env.api.selected_count().unwrap(), 0, "selección limpia");
}

#[tokio::test]
async fn test_doble_apertura_se_rechaza() {
    let mut env = build_env(vec![]);
    env.api.open_new_request("900123456-7").await.unwrap();

    let err = env.api.open_new_request("900123456-7").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidStateTransition { .. }));
    assert_eq!(env.catalog.call_count(), 1, "no hubo segunda consulta");
}

#[tokio::test]
async fn test_reabrir_en_revision_se_rechaza() {
    let mut env = build_env(vec![]);
    advance_to_review(&mut env).await;
    let first_draft = env.api.draft_id().unwrap();

    // Con un borrador en revisión, abrir otra solicitud no pasa
    let err = env.api.open_new_request("800999999-1").await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::InvalidStateTransition {
            from: WorkflowPhase::Reviewing,
            ..
        }
    ));
    assert_eq!(env.api.phase(), WorkflowPhase::Reviewing);
    assert_eq!(
        env.api.draft_id().unwrap(),
        first_draft,
        "el borrador en revisión sigue intacto"
    );
    assert_eq!(env.api.lines().unwrap().len(), 1);
    assert_eq!(env.catalog.call_count(), 1, "no hubo segunda consulta");

    // Cancelar primero sí habilita la reapertura
    env.api.cancel();
    env.api.open_new_request("800999999-1").await.unwrap();
    assert_eq!(env.api.phase(), WorkflowPhase::Selecting);
    assert_ne!(env.api.draft_id().unwrap(), first_draft);
}

// ==========================================
// Catálogo caído en la apertura
// ==========================================

#[tokio::test]
async fn test_catalogo_caido_notifica_y_queda_idle() {
    helpers::init_test_env();

    let sink = Arc::new(RecordingNotificationSink::new());
    let mut api = DraftApi::with_default_config(
        Arc::new(MockCatalogService::failing("timeout")),
        Arc::new(MockSubmissionService::accepting()),
        Arc::new(StaticBuyerDirectory::new(test_buyers())),
        OptionalNotificationSink::with_sink(sink.clone()),
    );

    let err = api.open_new_request("900123456-7").await.unwrap_err();
    assert!(matches!(err, ApiError::Service(_)));
    assert_eq!(api.phase(), WorkflowPhase::Idle);

    let messages = sink.messages();
    let last = messages.last().unwrap();
    assert_eq!(last.kind, NotificationType::Error);
    assert!(last.message.starts_with("No fue posible cargar el catálogo"));
    assert!(last.message.contains("timeout"));
}
