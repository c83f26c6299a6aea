// ==========================================
// Portal de Proveedores - Directorio de compradores
// ==========================================
// Responsabilidad: resolver los compradores del comercio a los que
// se les puede dirigir una solicitud
// ==========================================

use crate::domain::catalog::BuyerRef;

/// Directorio de compradores del comercio
///
/// La solicitud debe dirigirse a un comprador conocido; el directorio
/// es la fuente de verdad para validar el elegido.
pub trait BuyerDirectory: Send + Sync {
    /// Compradores disponibles, en el orden de presentación
    fn buyers(&self) -> Vec<BuyerRef>;

    /// Busca un comprador por su identificador
    fn find(&self, buyer_id: &str) -> Option<BuyerRef> {
        self.buyers().into_iter().find(|b| b.id == buyer_id)
    }
}

// ==========================================
// StaticBuyerDirectory - Lista fija
// ==========================================
/// Directorio respaldado por una lista fija, cargada al iniciar sesión
#[derive(Debug, Clone, Default)]
pub struct StaticBuyerDirectory {
    buyers: Vec<BuyerRef>,
}

impl StaticBuyerDirectory {
    pub fn new(buyers: Vec<BuyerRef>) -> Self {
        Self { buyers }
    }
}

impl BuyerDirectory for StaticBuyerDirectory {
    fn buyers(&self) -> Vec<BuyerRef> {
        self.buyers.clone()
    }
}
