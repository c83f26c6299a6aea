// ==========================================
// Portal de Proveedores - Capa API
// ==========================================
// Responsabilidad: fachada del motor para la capa de presentación
// ==========================================

pub mod draft_api;
pub mod error;

// Reexporta los tipos centrales
pub use draft_api::DraftApi;
pub use error::{ApiError, ApiResult};
