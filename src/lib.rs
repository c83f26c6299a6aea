// ==========================================
// Portal de Proveedores - Motor de Actualización de Costos
// ==========================================
// Núcleo: borradores de solicitudes de cambio de costo mayorista
// Alcance: selección de catálogo, cálculo derivado (IVA/ICUI/variación),
//          edición por celda, validación y flujo de envío
// Colaboradores externos (catálogo, compradores, envío) se inyectan como traits
// ==========================================

// Inicialización del sistema de internacionalización
rust_i18n::i18n!("locales", fallback = "es-CO");

// ==========================================
// Declaración de módulos
// ==========================================

// Capa de dominio - entidades y tipos
pub mod domain;

// Capa de motor - reglas de negocio
pub mod engine;

// Capa de servicios - colaboradores externos (inyectados)
pub mod services;

// Capa de configuración
pub mod config;

// Sistema de logs
pub mod logging;

// Internacionalización
pub mod i18n;

// Capa API - interfaz de negocio
pub mod api;

// ==========================================
// Re-exportación de tipos centrales
// ==========================================

// Tipos de dominio
pub use domain::types::{DraftField, NotificationType, PricingMode, WorkflowPhase};

// Entidades de dominio
pub use domain::{
    Barcode, BrandHouse, BuyerRef, CatalogItem, CatalogSnapshot, CostUpdateRequest, DraftLine,
    SelectionKey,
};

// Motores
pub use engine::{
    CatalogFilter, DraftBuilder, DraftValidator, EditController, PhaseMachine, RecalcEngine,
    ReviewSummary, SelectionSet, TaxTable,
};

// Servicios
pub use services::{
    BuyerDirectory, CatalogService, Notification, NotificationSink, SearchDebouncer,
    SubmissionReceipt, SubmissionService,
};

// API
pub use api::DraftApi;

// Configuración
pub use config::DraftEngineConfig;

// ==========================================
// Constantes del sistema
// ==========================================

// Versión del sistema
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nombre del sistema
pub const APP_NAME: &str = "Portal de Proveedores - Actualización de Costos";
