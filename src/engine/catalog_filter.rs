// ==========================================
// Portal de Proveedores - Filtro de catálogo
// ==========================================
// Responsabilidad: filtrado puro del catálogo del proveedor
// Criterios: texto libre (código/descripción), línea de producto,
// casa comercial; todos combinables con AND
// ==========================================

use crate::domain::catalog::CatalogItem;
use serde::{Deserialize, Serialize};

// ==========================================
// CatalogFilter - Filtro de catálogo
// ==========================================
// Valor por defecto: sin criterios (todo el catálogo es visible)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub search_text: String,             // Texto libre sobre código y descripción
    pub product_line: Option<String>,    // Línea de producto exacta
    pub brand_house_id: Option<String>,  // Casa comercial exacta
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// ¿El artículo pasa todos los criterios activos?
    ///
    /// El texto libre compara sin distinguir mayúsculas sobre
    /// código y descripción; un criterio vacío no filtra
    pub fn matches(&self, item: &CatalogItem) -> bool {
        let text = self.search_text.trim();
        if !text.is_empty() {
            let needle = text.to_lowercase();
            let in_code = item.item_code.to_lowercase().contains(&needle);
            let in_description = item.description.to_lowercase().contains(&needle);
            if !in_code && !in_description {
                return false;
            }
        }

        if let Some(ref line) = self.product_line {
            if &item.product_line != line {
                return false;
            }
        }

        if let Some(ref brand) = self.brand_house_id {
            if &item.brand_house_id != brand {
                return false;
            }
        }

        true
    }

    /// Aplica el filtro preservando el orden de entrada
    pub fn apply<'a>(&self, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }

    /// ¿Hay algún criterio activo?
    pub fn is_active(&self) -> bool {
        !self.search_text.trim().is_empty()
            || self.product_line.is_some()
            || self.brand_house_id.is_some()
    }
}
