// ==========================================
// Constructores de datos de prueba - para pruebas de integración
// ==========================================

use cost_update_engine::domain::catalog::{
    Barcode, BrandHouse, BuyerRef, CatalogItem, CatalogSnapshot,
};

// ==========================================
// Constructor de CatalogItem
// ==========================================

pub struct CatalogItemBuilder {
    item_code: String,
    unit_of_measure: String,
    description: String,
    product_line: String,
    brand_house_id: String,
    tax_code: String,
    current_cost_ex_vat: f64,
    weight_grams: f64,
    barcodes: Vec<Barcode>,
}

impl CatalogItemBuilder {
    pub fn new(item_code: &str) -> Self {
        Self {
            item_code: item_code.to_string(),
            unit_of_measure: "UND".to_string(),
            description: format!("Artículo {}", item_code),
            product_line: "Bebidas".to_string(),
            brand_house_id: "CM01".to_string(),
            tax_code: "1".to_string(),
            current_cost_ex_vat: 1000.0,
            weight_grams: 350.0,
            barcodes: vec![Barcode {
                code: format!("770{}000011", item_code),
                is_supplier_owned: true,
            }],
        }
    }

    pub fn unit_of_measure(mut self, uom: &str) -> Self {
        self.unit_of_measure = uom.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn product_line(mut self, product_line: &str) -> Self {
        self.product_line = product_line.to_string();
        self
    }

    pub fn brand_house(mut self, brand_house_id: &str) -> Self {
        self.brand_house_id = brand_house_id.to_string();
        self
    }

    pub fn tax_code(mut self, tax_code: &str) -> Self {
        self.tax_code = tax_code.to_string();
        self
    }

    pub fn current_cost(mut self, cost: f64) -> Self {
        self.current_cost_ex_vat = cost;
        self
    }

    pub fn weight_grams(mut self, weight: f64) -> Self {
        self.weight_grams = weight;
        self
    }

    pub fn barcode(mut self, code: &str) -> Self {
        self.barcodes = vec![Barcode {
            code: code.to_string(),
            is_supplier_owned: true,
        }];
        self
    }

    pub fn no_barcodes(mut self) -> Self {
        self.barcodes.clear();
        self
    }

    pub fn build(self) -> CatalogItem {
        CatalogItem {
            item_code: self.item_code,
            unit_of_measure: self.unit_of_measure,
            description: self.description,
            product_line: self.product_line,
            brand_house_id: self.brand_house_id,
            tax_code: self.tax_code,
            current_cost_ex_vat: self.current_cost_ex_vat,
            weight_grams: self.weight_grams,
            barcodes: self.barcodes,
        }
    }
}

// ==========================================
// Constructor de CatalogSnapshot
// ==========================================

pub struct CatalogSnapshotBuilder {
    items: Vec<CatalogItem>,
    product_lines: Vec<String>,
    brand_houses: Vec<BrandHouse>,
}

impl CatalogSnapshotBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            product_lines: vec!["Bebidas".to_string(), "Aseo".to_string()],
            brand_houses: vec![BrandHouse {
                id: "CM01".to_string(),
                description: "Casa Matriz".to_string(),
            }],
        }
    }

    pub fn item(mut self, item: CatalogItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn build(self) -> CatalogSnapshot {
        CatalogSnapshot {
            items: self.items,
            product_lines: self.product_lines,
            brand_houses: self.brand_houses,
        }
    }
}

impl Default for CatalogSnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// Compradores de prueba
// ==========================================

pub fn test_buyers() -> Vec<BuyerRef> {
    vec![
        BuyerRef {
            id: "B01".to_string(),
            name: "Compras Bebidas".to_string(),
        },
        BuyerRef {
            id: "B02".to_string(),
            name: "Compras Aseo".to_string(),
        },
    ]
}
