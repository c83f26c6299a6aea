// ==========================================
// Portal de Proveedores - Capa de motor
// ==========================================
// Responsabilidad: reglas de negocio del borrador de costos
// Regla: los motores son puros; el estado por solicitud vive en la capa API
// ==========================================

pub mod catalog_filter;
pub mod draft_builder;
pub mod edit_session;
pub mod format;
pub mod recalc;
pub mod selection;
pub mod summary;
pub mod tax_table;
pub mod validator;
pub mod workflow;

// Re-exportación de motores centrales
pub use catalog_filter::CatalogFilter;
pub use draft_builder::{DraftBuildError, DraftBuilder};
pub use edit_session::{EditCommit, EditController, EditSession};
pub use recalc::RecalcEngine;
pub use selection::SelectionSet;
pub use summary::ReviewSummary;
pub use tax_table::TaxTable;
pub use validator::{DraftValidator, LineValidationError, ValidationReport};
pub use workflow::{PhaseMachine, WorkflowError};
