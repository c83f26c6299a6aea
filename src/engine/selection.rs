// ==========================================
// Portal de Proveedores - Conjunto de selección
// ==========================================
// Responsabilidad: mantener los artículos elegidos en orden de selección
// Invariantes:
// - una clave aparece a lo más una vez
// - la insignia visible (#N) es la posición 1-based en el orden actual
// - la visualización es una partición estable: seleccionados primero
//   (en orden de selección), luego el resto visible en orden de catálogo
// ==========================================

use crate::domain::catalog::SelectionKey;
use serde::{Deserialize, Serialize};

// ==========================================
// SelectionSet - Selección ordenada
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionSet {
    keys: Vec<SelectionKey>, // Orden de inserción = orden de selección
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alterna una clave: la agrega al final si no está, la quita si está
    ///
    /// # Retorna
    /// - true si la clave quedó seleccionada
    /// - false si quedó deseleccionada
    pub fn toggle(&mut self, key: SelectionKey) -> bool {
        if let Some(pos) = self.keys.iter().position(|k| k == &key) {
            self.keys.remove(pos);
            false
        } else {
            self.keys.push(key);
            true
        }
    }

    /// ¿Está seleccionada la clave?
    pub fn contains(&self, key: &SelectionKey) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Insignia visible de la clave: posición 1-based en el orden actual
    pub fn badge(&self, key: &SelectionKey) -> Option<usize> {
        self.keys.iter().position(|k| k == key).map(|p| p + 1)
    }

    /// Alterna la selección completa del conjunto visible
    ///
    /// Si todo lo visible ya está seleccionado, lo deselecciona;
    /// si falta alguno, agrega los faltantes al final en orden visible.
    /// Las claves seleccionadas que no están visibles no se tocan.
    pub fn toggle_select_all(&mut self, visible: &[SelectionKey]) {
        let all_selected = !visible.is_empty() && visible.iter().all(|k| self.contains(k));

        if all_selected {
            self.keys.retain(|k| !visible.contains(k));
        } else {
            for key in visible {
                if !self.contains(key) {
                    self.keys.push(key.clone());
                }
            }
        }
    }

    /// Vacía la selección
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Orden de visualización sobre la lista visible (partición estable):
    /// primero las claves seleccionadas en orden de selección,
    /// luego las visibles no seleccionadas en su orden de entrada
    pub fn ordered_display(&self, visible: &[SelectionKey]) -> Vec<SelectionKey> {
        let mut result: Vec<SelectionKey> = self
            .keys
            .iter()
            .filter(|k| visible.contains(k))
            .cloned()
            .collect();

        result.extend(visible.iter().filter(|k| !self.contains(k)).cloned());

        result
    }

    /// Claves en orden de selección
    pub fn keys(&self) -> &[SelectionKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
