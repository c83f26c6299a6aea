// ==========================================
// Portal de Proveedores - Capa de dominio
// ==========================================
// Responsabilidad: entidades y tipos del negocio
// Regla: sin acceso a datos, sin lógica de motor
// ==========================================

pub mod catalog;
pub mod draft;
pub mod types;

// Re-exportación de tipos centrales
pub use catalog::{Barcode, BrandHouse, BuyerRef, CatalogItem, CatalogSnapshot, SelectionKey};
pub use draft::{CostUpdateLineBody, CostUpdateRequest, CostUpdateRequestBody, DraftLine};
pub use types::{DraftField, FieldClass, NotificationType, PricingMode, WorkflowPhase};
