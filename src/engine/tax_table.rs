// ==========================================
// Portal de Proveedores - Tabla de IVA
// ==========================================
// Responsabilidad: mapear el código de impuesto de un artículo
// al porcentaje de IVA vigente
// Regla: código desconocido → 0% (exento/no gravado)
// ==========================================

// ==========================================
// TaxTable - Tabla estática de IVA
// ==========================================
pub struct TaxTable;

impl TaxTable {
    /// Porcentaje de IVA para un código de impuesto
    ///
    /// Tabla vigente:
    /// - "1", "9", "c" → 19
    /// - "5" → 5
    /// - "7" → 15
    /// - "8" → 7
    /// - otro → 0
    pub fn percent_for(tax_code: &str) -> f64 {
        match tax_code {
            "1" | "9" | "c" => 19.0,
            "5" => 5.0,
            "7" => 15.0,
            "8" => 7.0,
            _ => 0.0,
        }
    }
}
