//! 計量單位分類

use cpd_core::IngredientKind;

/// 計數類單位同義詞（小寫精確比對）
const COUNT_UNITS: &[&str] = &["un", "unidade", "unidades", "pcs", "pc", "peça", "peças"];

/// 已知的重量/體積單位
const MASS_VOLUME_UNITS: &[&str] = &["kg", "g", "ml", "l"];

/// 計量單位分類器
pub struct UnitClassifier;

impl UnitClassifier {
    /// 依計量單位判斷原料消耗類型
    ///
    /// 只有精確列出的計數同義詞才視為按數量消耗（例如 "pç" 不在清單中），
    /// 其餘一律按重量消耗
    pub fn classify(unit_of_measure: &str) -> IngredientKind {
        let unit = unit_of_measure.to_lowercase();
        if COUNT_UNITS.contains(&unit.as_str()) {
            IngredientKind::CountProportional
        } else {
            IngredientKind::WeightProportional
        }
    }

    /// 檢查單位是否可識別（計數同義詞或已知重量/體積單位）
    pub fn is_recognized(unit_of_measure: &str) -> bool {
        let unit = unit_of_measure.to_lowercase();
        COUNT_UNITS.contains(&unit.as_str()) || MASS_VOLUME_UNITS.contains(&unit.as_str())
    }

    /// 無法識別單位時的診斷訊息
    pub fn unrecognized_message(unit_of_measure: &str) -> String {
        format!(
            "unrecognized unit of measure: {} (defaulted to weight-proportional)",
            unit_of_measure
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("un")]
    #[case("UN")]
    #[case("Unidade")]
    #[case("unidades")]
    #[case("PCS")]
    #[case("pc")]
    #[case("peça")]
    #[case("PEÇAS")]
    fn test_count_synonyms(#[case] unit: &str) {
        assert_eq!(UnitClassifier::classify(unit), IngredientKind::CountProportional);
        assert!(UnitClassifier::is_recognized(unit));
    }

    #[rstest]
    #[case("kg")]
    #[case("g")]
    #[case("ML")]
    #[case("l")]
    fn test_weight_units(#[case] unit: &str) {
        assert_eq!(UnitClassifier::classify(unit), IngredientKind::WeightProportional);
        assert!(UnitClassifier::is_recognized(unit));
    }

    #[rstest]
    #[case("pç")]
    #[case("caixa")]
    #[case("")]
    #[case(" un")]
    fn test_unknown_units_default_to_weight(#[case] unit: &str) {
        assert_eq!(UnitClassifier::classify(unit), IngredientKind::WeightProportional);
        assert!(!UnitClassifier::is_recognized(unit));
    }

    #[test]
    fn test_unrecognized_message() {
        let msg = UnitClassifier::unrecognized_message("pç");
        assert!(msg.contains("pç"));
        assert!(msg.contains("weight-proportional"));
    }
}
