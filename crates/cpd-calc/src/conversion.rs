//! 單位換算（g/ml → kg）

use rust_decimal::Decimal;

/// 需要除以 1000 換算為公斤的單位
const MILLI_UNITS: &[&str] = &["g", "ml"];

/// 檢查單位是否為克或毫升
pub fn is_milli_unit(unit_of_measure: &str) -> bool {
    MILLI_UNITS.contains(&unit_of_measure.to_lowercase().as_str())
}

/// 將原料單位的消耗換算為公斤
///
/// g/ml 除以 1000，其他單位原值返回
pub fn to_kilograms(quantity: Decimal, unit_of_measure: &str) -> Decimal {
    if is_milli_unit(unit_of_measure) {
        quantity / Decimal::ONE_THOUSAND
    } else {
        quantity
    }
}
