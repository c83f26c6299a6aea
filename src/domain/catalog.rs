// ==========================================
// Portal de Proveedores - Modelo de catálogo
// ==========================================
// Datos inmutables entregados por el servicio de catálogo del minorista
// Se cargan una vez por solicitud y son de solo lectura para el motor
// Serialización: camelCase (contrato del servicio externo)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Barcode - Código de barras de un artículo
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barcode {
    pub code: String,           // Código EAN/interno
    pub is_supplier_owned: bool, // true si lo registró el proveedor
}

// ==========================================
// CatalogItem - Artículo del catálogo del proveedor
// ==========================================
// Solo lectura: el borrador copia de aquí, nunca escribe de vuelta
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub item_code: String,          // Código del artículo
    pub unit_of_measure: String,    // Unidad de medida
    pub description: String,        // Descripción comercial
    pub product_line: String,       // Línea de producto
    pub brand_house_id: String,     // Casa comercial
    pub tax_code: String,           // Código de impuesto (tabla IVA)
    pub current_cost_ex_vat: f64,   // Costo actual sin IVA
    pub weight_grams: f64,          // Gramaje declarado (9999 = no aplica)
    pub barcodes: Vec<Barcode>,     // Códigos de barras registrados
}

impl CatalogItem {
    /// Clave de selección del artículo: itemCode + "_" + unitOfMeasure
    pub fn selection_key(&self) -> SelectionKey {
        SelectionKey::new(&self.item_code, &self.unit_of_measure)
    }

    /// Primer código de barras registrado, si existe
    pub fn first_barcode(&self) -> Option<&str> {
        self.barcodes.first().map(|b| b.code.as_str())
    }
}

// ==========================================
// SelectionKey - Clave de selección
// ==========================================
// Invariante: única dentro de un SelectionSet
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionKey(String);

impl SelectionKey {
    pub fn new(item_code: &str, unit_of_measure: &str) -> Self {
        Self(format!("{}_{}", item_code, unit_of_measure))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// BrandHouse - Casa comercial
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandHouse {
    pub id: String,          // Identificador
    pub description: String, // Nombre visible
}

// ==========================================
// BuyerRef - Comprador del minorista
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerRef {
    pub id: String,   // Identificador del comprador
    pub name: String, // Nombre visible
}

// ==========================================
// CatalogSnapshot - Carga completa del catálogo
// ==========================================
// Respuesta del servicio de catálogo para un NIT de proveedor;
// vive mientras dure la solicitud en curso (sin recargas intermedias)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub items: Vec<CatalogItem>,        // Artículos del proveedor
    #[serde(rename = "lines")]
    pub product_lines: Vec<String>,     // Líneas de producto disponibles
    pub brand_houses: Vec<BrandHouse>,  // Casas comerciales disponibles
}

impl CatalogSnapshot {
    /// Instantánea vacía (estado antes de cargar)
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            product_lines: Vec::new(),
            brand_houses: Vec::new(),
        }
    }

    /// Busca un artículo por su clave de selección
    pub fn find_by_key(&self, key: &SelectionKey) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.selection_key() == key)
    }

    /// Ordena los artículos por código (orden de catálogo para visualización)
    pub fn sort_items_by_code(&mut self) {
        self.items.sort_by(|a, b| a.item_code.cmp(&b.item_code));
    }
}
