// ==========================================
// Portal de Proveedores - Formato de celdas
// ==========================================
// Responsabilidad: presentación de valores numéricos en la grilla
// y semillas "crudas" para la edición en línea
// Regla: formato solo para mostrar; la edición siempre opera sobre
// el texto crudo sin símbolos ni separadores de miles
// ==========================================

/// Moneda con símbolo, separador de miles y dos decimales: `$1,234.50`
///
/// Los negativos llevan el signo antes del símbolo: `-$1,234.50`
pub fn currency(value: f64) -> String {
    let negative = value < 0.0;
    let text = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), "00"),
    };

    let grouped = group_thousands(int_part);
    if negative {
        format!("-${}.{}", grouped, frac_part)
    } else {
        format!("${}.{}", grouped, frac_part)
    }
}

/// Porcentaje con un decimal: `19.0%`
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Gramaje como entero sin decimales: `150`
pub fn weight(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

/// Semilla cruda de moneda para la celda en edición: `1234.50`
pub fn raw_currency(value: f64) -> String {
    format!("{:.2}", value)
}

/// Semilla cruda de porcentaje: `10.5`
pub fn raw_percent(value: f64) -> String {
    format!("{:.1}", value)
}

/// Semilla cruda de gramaje: `150`
pub fn raw_weight(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}

/// Inserta separador de miles cada tres dígitos, de derecha a izquierda
fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_1_moneda_con_miles() {
        // Escenario 1: separador de miles y dos decimales fijos
        assert_eq!(currency(1234.5), "$1,234.50");
        assert_eq!(currency(1000000.0), "$1,000,000.00");
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(999.999), "$1,000.00", "redondeo a dos decimales");
    }

    #[test]
    fn test_scenario_2_moneda_negativa() {
        // Escenario 2: el signo va antes del símbolo
        assert_eq!(currency(-1234.5), "-$1,234.50");
        assert_eq!(currency(-0.5), "-$0.50");
    }

    #[test]
    fn test_scenario_3_porcentaje_un_decimal() {
        // Escenario 3: porcentaje siempre con un decimal
        assert_eq!(percent(19.0), "19.0%");
        assert_eq!(percent(-3.75), "-3.8%");
        assert_eq!(percent(0.0), "0.0%");
    }

    #[test]
    fn test_scenario_4_gramaje_entero() {
        // Escenario 4: gramaje sin decimales
        assert_eq!(weight(150.0), "150");
        assert_eq!(weight(0.0), "0");
    }

    #[test]
    fn test_scenario_5_semillas_crudas() {
        // Escenario 5: la semilla cruda no lleva símbolos ni miles
        assert_eq!(raw_currency(1234.5), "1234.50");
        assert_eq!(raw_percent(10.0), "10.0");
        assert_eq!(raw_weight(150.0), "150");
    }
}
