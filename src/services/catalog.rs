// ==========================================
// Portal de Proveedores - Servicio de catálogo
// ==========================================
// Responsabilidad: puerto de consulta del catálogo del proveedor
// Nota: el motor define el trait; el adaptador HTTP del portal
// lo implementa fuera de este crate
// ==========================================

use crate::domain::catalog::CatalogSnapshot;
use crate::services::error::ServiceResult;
use async_trait::async_trait;

/// Puerto de consulta del catálogo vigente de un proveedor
///
/// # Implementación
/// - el adaptador del portal consulta por NIT y arma el snapshot
/// - el snapshot es de solo lectura durante toda la solicitud
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Catálogo completo del proveedor identificado por su NIT
    ///
    /// # Parámetros
    /// - `supplier_nit`: NIT del proveedor autenticado
    ///
    /// # Retorna
    /// - snapshot con artículos, líneas de producto y casas de marca
    async fn items_for_supplier(&self, supplier_nit: &str) -> ServiceResult<CatalogSnapshot>;
}
