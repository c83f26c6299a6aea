// ==========================================
// Portal de Proveedores - API de borradores
// ==========================================
// Responsabilidad: fachada única del flujo de solicitud de
// actualización de costos (apertura, selección, revisión, envío)
// Reglas:
// - una sola solicitud en curso por sesión
// - las operaciones asíncronas marcan busy y verifican vigencia
//   de la solicitud al volver (las respuestas tardías no mutan estado)
// - el envío exitoso reinicia el flujo a IDLE
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::config::DraftEngineConfig;
use crate::domain::catalog::{BuyerRef, CatalogItem, CatalogSnapshot, SelectionKey};
use crate::domain::draft::{CostUpdateRequest, DraftLine};
use crate::domain::types::{DraftField, FieldClass, PricingMode, WorkflowPhase};
use crate::engine::catalog_filter::CatalogFilter;
use crate::engine::draft_builder::DraftBuilder;
use crate::engine::edit_session::{numeric_value, EditCommit, EditController};
use crate::engine::format;
use crate::engine::recalc::RecalcEngine;
use crate::engine::selection::SelectionSet;
use crate::engine::summary::ReviewSummary;
use crate::engine::validator::DraftValidator;
use crate::engine::workflow::PhaseMachine;
use crate::i18n;
use crate::services::buyers::BuyerDirectory;
use crate::services::catalog::CatalogService;
use crate::services::notify::{Notification, OptionalNotificationSink};
use crate::services::submission::{SubmissionReceipt, SubmissionService};

// ==========================================
// DraftSession - Estado de la solicitud en curso
// ==========================================
struct DraftSession {
    draft_id: Uuid,                          // Identidad de la solicitud en curso
    supplier_nit: String,                    // NIT del proveedor autenticado
    catalog: CatalogSnapshot,                // Catálogo congelado al abrir
    filter: CatalogFilter,                   // Filtros de la pantalla de selección
    selection: SelectionSet,                 // Artículos elegidos, en orden
    mode: PricingMode,                       // Modalidad de precio
    effective_start_date: Option<NaiveDate>, // Inicio de vigencia elegido
    buyer_id: Option<String>,                // Comprador destinatario
    lines: Vec<DraftLine>,                   // Líneas del borrador (fase de revisión)
    editor: EditController,                  // Celda en edición, si la hay
}

// ==========================================
// DraftApi - Fachada del motor
// ==========================================

/// Fachada del flujo de actualización de costos
///
/// Responsabilidad:
/// 1. custodiar la fase del flujo y la solicitud en curso
/// 2. orquestar selección, armado, edición y validación del borrador
/// 3. enviar la solicitud y notificar el resultado al usuario
pub struct DraftApi {
    catalog_service: Arc<dyn CatalogService>,
    submission_service: Arc<dyn SubmissionService>,
    buyer_directory: Arc<dyn BuyerDirectory>,
    notifier: OptionalNotificationSink,
    machine: PhaseMachine,
    builder: DraftBuilder,
    recalc: RecalcEngine,
    validator: DraftValidator,
    config: DraftEngineConfig,
    session: Option<DraftSession>,
    busy: bool,
}

impl DraftApi {
    /// Crea la fachada con sus dependencias
    ///
    /// # Parámetros
    /// - `catalog_service`: puerto de consulta del catálogo
    /// - `submission_service`: puerto de creación de solicitudes
    /// - `buyer_directory`: directorio de compradores del comercio
    /// - `notifier`: receptor de avisos para el usuario (opcional)
    /// - `config`: parámetros del motor
    pub fn new(
        catalog_service: Arc<dyn CatalogService>,
        submission_service: Arc<dyn SubmissionService>,
        buyer_directory: Arc<dyn BuyerDirectory>,
        notifier: OptionalNotificationSink,
        config: DraftEngineConfig,
    ) -> Self {
        let builder = DraftBuilder::new(config.clone());
        let recalc = RecalcEngine::new(config.clone());
        Self {
            catalog_service,
            submission_service,
            buyer_directory,
            notifier,
            machine: PhaseMachine::new(),
            builder,
            recalc,
            validator: DraftValidator::new(),
            config,
            session: None,
            busy: false,
        }
    }

    /// Crea la fachada con la configuración por defecto
    pub fn with_default_config(
        catalog_service: Arc<dyn CatalogService>,
        submission_service: Arc<dyn SubmissionService>,
        buyer_directory: Arc<dyn BuyerDirectory>,
        notifier: OptionalNotificationSink,
    ) -> Self {
        Self::new(
            catalog_service,
            submission_service,
            buyer_directory,
            notifier,
            DraftEngineConfig::default(),
        )
    }

    // ==========================================
    // Apertura y cancelación
    // ==========================================

    /// Abre una solicitud nueva: carga el catálogo y pasa a SELECTING
    ///
    /// # Parámetros
    /// - `supplier_nit`: NIT del proveedor autenticado
    ///
    /// # Retorna
    /// - `Ok(())`: catálogo cargado, flujo en SELECTING
    /// - `Err`: fase ilegal, operación en curso o falla del catálogo
    #[instrument(skip(self))]
    pub async fn open_new_request(&mut self, supplier_nit: &str) -> ApiResult<()> {
        if self.busy {
            return Err(ApiError::Busy);
        }
        if supplier_nit.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "El NIT del proveedor no puede estar vacío".to_string(),
            ));
        }
        // Reabrir solo vale desde las fases de reposo; en REVIEWING el
        // borrador vivo debe cancelarse o enviarse primero
        let phase = self.machine.phase();
        if !matches!(
            phase,
            WorkflowPhase::Idle | WorkflowPhase::Submitted | WorkflowPhase::Cancelled
        ) {
            return Err(ApiError::InvalidStateTransition {
                from: phase,
                to: WorkflowPhase::Selecting,
            });
        }

        self.busy = true;
        let result = self.catalog_service.items_for_supplier(supplier_nit).await;
        self.busy = false;

        match result {
            Ok(mut catalog) => {
                catalog.sort_items_by_code();
                self.machine.transition_to(WorkflowPhase::Selecting)?;
                self.session = Some(DraftSession {
                    draft_id: Uuid::new_v4(),
                    supplier_nit: supplier_nit.to_string(),
                    catalog,
                    filter: CatalogFilter::new(),
                    selection: SelectionSet::new(),
                    mode: PricingMode::Absolute,
                    effective_start_date: None,
                    buyer_id: None,
                    lines: Vec::new(),
                    editor: EditController::new(),
                });
                info!("Solicitud abierta para el NIT {}", supplier_nit);
                Ok(())
            }
            Err(err) => {
                let message =
                    i18n::t_with_args("catalog.load_failed", &[("reason", &err.to_string())]);
                self.notifier.notify(Notification::error(message));
                Err(ApiError::Service(err))
            }
        }
    }

    /// Cancela la solicitud en curso y descarta todo su estado
    ///
    /// Es tolerante: fuera de SELECTING/REVIEWING no hace nada.
    pub fn cancel(&mut self) {
        match self.machine.phase() {
            WorkflowPhase::Selecting | WorkflowPhase::Reviewing => {
                if let Err(err) = self.machine.transition_to(WorkflowPhase::Cancelled) {
                    warn!("Cancelación rechazada: {}", err);
                    return;
                }
                self.busy = false;
                self.session = None;
                info!("Solicitud cancelada por el usuario");
            }
            phase => {
                debug!("Cancelación sin efecto en fase {}", phase);
            }
        }
    }

    // ==========================================
    // Pantalla de selección
    // ==========================================

    /// Texto de búsqueda libre sobre código y descripción
    pub fn set_search_text(&mut self, text: &str) -> ApiResult<()> {
        self.require_phase(WorkflowPhase::Selecting)?;
        let session = self.session_mut()?;
        session.filter.search_text = text.to_string();
        Ok(())
    }

    /// Filtro por línea de producto (None lo despeja)
    pub fn set_product_line(&mut self, product_line: Option<String>) -> ApiResult<()> {
        self.require_phase(WorkflowPhase::Selecting)?;
        let session = self.session_mut()?;
        session.filter.product_line = product_line;
        Ok(())
    }

    /// Filtro por casa comercial (None lo despeja)
    pub fn set_brand_house(&mut self, brand_house_id: Option<String>) -> ApiResult<()> {
        self.require_phase(WorkflowPhase::Selecting)?;
        let session = self.session_mut()?;
        session.filter.brand_house_id = brand_house_id;
        Ok(())
    }

    /// Modalidad de precio de la solicitud
    ///
    /// El rango del porcentaje se verifica al avanzar a revisión.
    pub fn set_pricing_mode(&mut self, mode: PricingMode) -> ApiResult<()> {
        self.require_phase(WorkflowPhase::Selecting)?;
        let session = self.session_mut()?;
        session.mode = mode;
        Ok(())
    }

    /// Fecha de inicio de vigencia de los costos nuevos
    pub fn set_effective_start_date(&mut self, date: NaiveDate) -> ApiResult<()> {
        self.require_phase(WorkflowPhase::Selecting)?;
        let session = self.session_mut()?;
        session.effective_start_date = Some(date);
        Ok(())
    }

    /// Comprador destinatario de la solicitud
    ///
    /// La pertenencia al directorio se verifica al avanzar a revisión.
    pub fn set_buyer(&mut self, buyer_id: &str) -> ApiResult<()> {
        self.require_phase(WorkflowPhase::Selecting)?;
        let session = self.session_mut()?;
        session.buyer_id = Some(buyer_id.to_string());
        Ok(())
    }

    /// Artículos visibles bajo los filtros actuales, en orden de catálogo
    pub fn visible_items(&self) -> ApiResult<Vec<CatalogItem>> {
        let session = self.session_ref()?;
        Ok(session
            .filter
            .apply(&session.catalog.items)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Artículos visibles con los seleccionados primero (orden de selección)
    pub fn ordered_display(&self) -> ApiResult<Vec<CatalogItem>> {
        let session = self.session_ref()?;
        let visible_keys: Vec<SelectionKey> = session
            .filter
            .apply(&session.catalog.items)
            .into_iter()
            .map(|item| item.selection_key())
            .collect();

        let ordered = session.selection.ordered_display(&visible_keys);
        Ok(ordered
            .iter()
            .filter_map(|key| session.catalog.find_by_key(key))
            .cloned()
            .collect())
    }

    /// Alterna la selección de un artículo del catálogo
    ///
    /// # Retorna
    /// - true si quedó seleccionado, false si quedó deseleccionado
    pub fn toggle_item(&mut self, item_code: &str, unit_of_measure: &str) -> ApiResult<bool> {
        self.require_phase(WorkflowPhase::Selecting)?;
        let session = self.session_mut()?;
        let key = SelectionKey::new(item_code, unit_of_measure);

        if session.catalog.find_by_key(&key).is_none() {
            return Err(ApiError::NotFound(format!(
                "Artículo {} no está en el catálogo",
                key
            )));
        }
        Ok(session.selection.toggle(key))
    }

    /// Alterna la selección de todos los artículos visibles
    pub fn toggle_select_all(&mut self) -> ApiResult<()> {
        self.require_phase(WorkflowPhase::Selecting)?;
        let session = self.session_mut()?;
        let visible_keys: Vec<SelectionKey> = session
            .filter
            .apply(&session.catalog.items)
            .into_iter()
            .map(|item| item.selection_key())
            .collect();

        session.selection.toggle_select_all(&visible_keys);
        Ok(())
    }

    /// Insignia (#N) del artículo en el orden de selección, si está elegido
    pub fn selection_badge(
        &self,
        item_code: &str,
        unit_of_measure: &str,
    ) -> ApiResult<Option<usize>> {
        let session = self.session_ref()?;
        Ok(session
            .selection
            .badge(&SelectionKey::new(item_code, unit_of_measure)))
    }

    /// Cantidad de artículos seleccionados
    pub fn selected_count(&self) -> ApiResult<usize> {
        Ok(self.session_ref()?.selection.len())
    }

    /// Compradores disponibles para dirigir la solicitud
    pub fn buyers(&self) -> Vec<BuyerRef> {
        self.buyer_directory.buyers()
    }

    // ==========================================
    // Avance y regreso entre fases
    // ==========================================

    /// Pasa de la selección a la revisión, armando las líneas del borrador
    ///
    /// Requisitos, verificados en este orden:
    /// 1. al menos un artículo seleccionado
    /// 2. fecha de inicio de vigencia elegida
    /// 3. comprador elegido y conocido por el directorio
    /// 4. porcentaje de variación dentro del rango configurado
    pub fn advance_to_review(&mut self) -> ApiResult<()> {
        self.require_phase(WorkflowPhase::Selecting)?;
        let session = self.session_ref()?;

        if session.selection.is_empty() {
            return Err(ApiError::PreconditionFailed(i18n::t(
                "workflow.empty_selection",
            )));
        }
        if session.effective_start_date.is_none() {
            return Err(ApiError::PreconditionFailed(i18n::t(
                "workflow.missing_start_date",
            )));
        }
        let buyer_id = match &session.buyer_id {
            Some(id) => id.clone(),
            None => {
                return Err(ApiError::PreconditionFailed(i18n::t(
                    "workflow.missing_buyer",
                )))
            }
        };
        if self.buyer_directory.find(&buyer_id).is_none() {
            return Err(ApiError::PreconditionFailed(i18n::t_with_args(
                "workflow.unknown_buyer",
                &[("id", &buyer_id)],
            )));
        }
        if let PricingMode::PercentageVariation(percent) = session.mode {
            // NaN no es comparable: se exige un valor finito dentro del rango
            if !percent.is_finite()
                || percent < self.config.min_variation_percent
                || percent > self.config.max_variation_percent
            {
                return Err(ApiError::PreconditionFailed(i18n::t_with_args(
                    "workflow.percent_out_of_range",
                    &[
                        ("min", &self.config.min_variation_percent.to_string()),
                        ("max", &self.config.max_variation_percent.to_string()),
                    ],
                )));
            }
        }

        let lines = self
            .builder
            .build(&session.selection, &session.catalog, session.mode)?;

        self.machine.transition_to(WorkflowPhase::Reviewing)?;
        let session = self.session_mut()?;
        session.lines = lines;
        session.editor.clear();
        debug!("Borrador armado con {} línea(s)", session.lines.len());
        Ok(())
    }

    /// Regresa de la revisión a la selección
    ///
    /// Descarta las líneas del borrador pero conserva filtros y selección.
    pub fn back_to_selection(&mut self) -> ApiResult<()> {
        self.require_phase(WorkflowPhase::Reviewing)?;
        self.machine.transition_to(WorkflowPhase::Selecting)?;
        let session = self.session_mut()?;
        session.lines.clear();
        session.editor.clear();
        Ok(())
    }

    // ==========================================
    // Edición de la grilla de revisión
    // ==========================================

    /// Enfoca una celda y retorna el texto semilla (valor crudo)
    ///
    /// Si otra celda estaba en edición, su valor se confirma primero,
    /// como lo haría el desenfoque del navegador.
    pub fn focus_field(&mut self, line_index: usize, field: DraftField) -> ApiResult<String> {
        self.require_phase(WorkflowPhase::Reviewing)?;
        let recalc = &self.recalc;
        let session = match self.session.as_mut() {
            Some(s) => s,
            None => return Err(no_active_draft()),
        };

        if let Some(commit) = session.editor.blur() {
            apply_commit(&mut session.lines, recalc, &commit);
        }

        let line = session
            .lines
            .get(line_index)
            .ok_or_else(|| line_out_of_range(line_index))?;
        Ok(session.editor.focus(line_index, field, line))
    }

    /// Propone el texto completo de la celda activa tras un tecleo
    ///
    /// # Retorna
    /// - true si el texto cumple el patrón del campo
    /// - false si se rechazó en silencio (sin celda activa, o patrón roto)
    pub fn edit_keystroke(&mut self, text: &str) -> ApiResult<bool> {
        self.require_phase(WorkflowPhase::Reviewing)?;
        let session = self.session_mut()?;
        Ok(session.editor.keystroke(text))
    }

    /// Desenfoca la celda activa, confirma el valor y recalcula derivados
    pub fn blur_field(&mut self) -> ApiResult<()> {
        self.require_phase(WorkflowPhase::Reviewing)?;
        let recalc = &self.recalc;
        let session = match self.session.as_mut() {
            Some(s) => s,
            None => return Err(no_active_draft()),
        };

        if let Some(commit) = session.editor.blur() {
            apply_commit(&mut session.lines, recalc, &commit);
        }
        Ok(())
    }

    /// Escribe el código de barras manual de una línea y lo aplica
    pub fn enter_manual_barcode(&mut self, line_index: usize, barcode: &str) -> ApiResult<()> {
        self.require_phase(WorkflowPhase::Reviewing)?;
        let recalc = &self.recalc;
        let session = match self.session.as_mut() {
            Some(s) => s,
            None => return Err(no_active_draft()),
        };

        let line = session
            .lines
            .get_mut(line_index)
            .ok_or_else(|| line_out_of_range(line_index))?;
        line.manual_barcode = barcode.to_string();
        *line = recalc.recompute(line, DraftField::ManualBarcode);
        Ok(())
    }

    /// Texto a mostrar en una celda: lo tecleado si está en edición,
    /// el valor formateado si no
    pub fn display_value(&self, line_index: usize, field: DraftField) -> ApiResult<String> {
        let session = self.session_ref()?;

        if session.editor.is_editing(line_index, field) {
            return Ok(session.editor.staged_text().unwrap_or("").to_string());
        }

        let line = session
            .lines
            .get(line_index)
            .ok_or_else(|| line_out_of_range(line_index))?;
        let text = match field.field_class() {
            FieldClass::Currency => format::currency(numeric_value(line, field)),
            FieldClass::Percent => format::percent(numeric_value(line, field)),
            FieldClass::Weight => format::weight(numeric_value(line, field)),
            FieldClass::Text => line.manual_barcode.clone(),
        };
        Ok(text)
    }

    /// Totales del borrador para la cabecera de revisión
    pub fn review_summary(&self) -> ApiResult<ReviewSummary> {
        let session = self.session_ref()?;
        Ok(ReviewSummary::from_lines(&session.lines))
    }

    /// Líneas del borrador en su estado actual
    pub fn lines(&self) -> ApiResult<Vec<DraftLine>> {
        Ok(self.session_ref()?.lines.clone())
    }

    // ==========================================
    // Estado observable
    // ==========================================

    /// Fase actual del flujo
    pub fn phase(&self) -> WorkflowPhase {
        self.machine.phase()
    }

    /// ¿Hay una operación asíncrona en curso?
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Identidad de la solicitud en curso, si la hay
    pub fn draft_id(&self) -> Option<Uuid> {
        self.session.as_ref().map(|s| s.draft_id)
    }

    /// Modalidad de precio de la solicitud en curso
    pub fn pricing_mode(&self) -> ApiResult<PricingMode> {
        Ok(self.session_ref()?.mode)
    }

    // ==========================================
    // Envío
    // ==========================================

    /// Valida el borrador y lo envía al portal del comercio
    ///
    /// # Retorna
    /// - `Ok(receipt)` con `success=true`: enviado; el flujo vuelve a IDLE
    /// - `Ok(receipt)` con `success=false`: rechazado; el flujo queda en REVIEWING
    /// - `Err`: validación bloqueada o falla de transporte
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> ApiResult<SubmissionReceipt> {
        self.require_phase(WorkflowPhase::Reviewing)?;
        if self.busy {
            return Err(ApiError::Busy);
        }

        let (request, token) = {
            let session = self.session_ref()?;

            let report = self.validator.validate(&session.lines);
            if !report.is_ok() {
                let message = i18n::t_with_args(
                    "validation.blocked",
                    &[("count", &report.blocked_lines().to_string())],
                );
                self.notifier.notify(Notification::error(message));
                return Err(ApiError::ValidationFailed(report));
            }

            let effective_start_date = match session.effective_start_date {
                Some(date) => date,
                None => {
                    return Err(ApiError::PreconditionFailed(i18n::t(
                        "workflow.missing_start_date",
                    )))
                }
            };
            let buyer_id = match &session.buyer_id {
                Some(id) => id.clone(),
                None => {
                    return Err(ApiError::PreconditionFailed(i18n::t(
                        "workflow.missing_buyer",
                    )))
                }
            };

            (
                CostUpdateRequest {
                    supplier_nit: session.supplier_nit.clone(),
                    effective_start_date,
                    buyer_id,
                    lines: session.lines.clone(),
                },
                session.draft_id,
            )
        };

        self.busy = true;
        let result = self.submission_service.create(&request).await;
        self.busy = false;

        // Vigencia: si la solicitud cambió durante la espera, la respuesta
        // es tardía y no debe mutar el estado ni avisar al usuario
        let still_current = self
            .session
            .as_ref()
            .map(|s| s.draft_id == token)
            .unwrap_or(false);
        if !still_current {
            warn!("Respuesta tardía descartada para la solicitud {}", token);
            return result.map_err(ApiError::Service);
        }

        match result {
            Err(err) => {
                let message =
                    i18n::t_with_args("submit.transport_failed", &[("reason", &err.to_string())]);
                self.notifier.notify(Notification::error(message));
                Err(ApiError::Service(err))
            }
            Ok(receipt) if !receipt.success => {
                let reason = receipt.message.clone().unwrap_or_default();
                let message = i18n::t_with_args("submit.rejected", &[("reason", &reason)]);
                self.notifier.notify(Notification::error(message));
                Ok(receipt)
            }
            Ok(receipt) => {
                self.machine.transition_to(WorkflowPhase::Submitted)?;
                self.notifier
                    .notify(Notification::success(i18n::t("submit.success")));
                self.session = None;
                self.machine.transition_to(WorkflowPhase::Idle)?;
                info!("Solicitud {} enviada y aceptada", token);
                Ok(receipt)
            }
        }
    }

    // ==========================================
    // Ayudantes internos
    // ==========================================

    fn require_phase(&self, expected: WorkflowPhase) -> ApiResult<()> {
        if self.machine.phase() != expected {
            return Err(ApiError::InvalidStateTransition {
                from: self.machine.phase(),
                to: expected,
            });
        }
        Ok(())
    }

    fn session_ref(&self) -> ApiResult<&DraftSession> {
        self.session.as_ref().ok_or_else(no_active_draft)
    }

    fn session_mut(&mut self) -> ApiResult<&mut DraftSession> {
        self.session.as_mut().ok_or_else(no_active_draft)
    }
}

/// Confirma un commit sobre la línea y dispara el recálculo derivado
fn apply_commit(lines: &mut [DraftLine], recalc: &RecalcEngine, commit: &EditCommit) {
    let (index, field) = match commit {
        EditCommit::Discarded => return,
        EditCommit::Number {
            line_index, field, ..
        } => (*line_index, *field),
        EditCommit::Text {
            line_index, field, ..
        } => (*line_index, *field),
    };

    if let Some(line) = lines.get_mut(index) {
        commit.apply_to(line);
        *line = recalc.recompute(line, field);
    }
}

fn no_active_draft() -> ApiError {
    ApiError::PreconditionFailed(i18n::t("workflow.no_active_draft"))
}

fn line_out_of_range(line_index: usize) -> ApiError {
    ApiError::NotFound(format!("Línea {} fuera de rango", line_index))
}
