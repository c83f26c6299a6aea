// ==========================================
// Portal de Proveedores - Capa de servicios
// ==========================================
// Responsabilidad: puertos hacia el mundo exterior (portal del
// comercio, compradores, notificaciones) y utilidades asíncronas
// ==========================================

pub mod buyers;
pub mod catalog;
pub mod debounce;
pub mod error;
pub mod notify;
pub mod submission;

pub use buyers::{BuyerDirectory, StaticBuyerDirectory};
pub use catalog::CatalogService;
pub use debounce::SearchDebouncer;
pub use error::{ServiceError, ServiceResult};
pub use notify::{NoOpNotificationSink, Notification, NotificationSink, OptionalNotificationSink};
pub use submission::{SubmissionReceipt, SubmissionService};
