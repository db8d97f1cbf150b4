//! 消耗計算結果

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 防爆守衛評估結果
///
/// 只報告，不修改消耗值；是否阻擋生產由呼叫方決定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionGuardResult {
    /// 是否超出合理上限
    pub exceeds_limit: bool,

    /// 物理上合理的消耗上限
    pub max_allowed: Decimal,

    /// 實際觀察到的消耗
    pub observed_consumption: Decimal,

    /// 超出倍率（observed / max_allowed），未超出時為 0
    pub excess_ratio: Decimal,

    /// 診斷訊息
    pub diagnostic_message: Option<String>,
}

impl ExplosionGuardResult {
    /// 創建未超出上限的結果
    pub fn within_limit(max_allowed: Decimal, observed_consumption: Decimal) -> Self {
        Self {
            exceeds_limit: false,
            max_allowed,
            observed_consumption,
            excess_ratio: Decimal::ZERO,
            diagnostic_message: None,
        }
    }
}

/// 消耗計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionResult {
    /// 以原料配置單位表示的消耗
    pub raw_consumption: Decimal,

    /// 換算為公斤的消耗（按數量消耗時等於 raw_consumption）
    pub consumption_in_kg: Decimal,

    /// 成品總重量（未計損耗，kg）
    pub finished_goods_weight_kg: Decimal,

    /// 成品總重量（含損耗，kg）
    pub finished_goods_weight_with_waste_kg: Decimal,

    /// 消耗過高的軟警告
    pub excessive_consumption_warning: bool,

    /// 計算是否超出 Decimal 數值範圍（超出時數值已飽和為 MAX/MIN）
    pub overflowed: bool,

    /// 防爆守衛結果
    pub guard: ExplosionGuardResult,
}

impl ConsumptionResult {
    /// 檢查是否有任何異常（軟警告、守衛觸發或數值溢出）
    pub fn has_anomaly(&self) -> bool {
        self.excessive_consumption_warning || self.guard.exceeds_limit || self.overflowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_limit() {
        let guard = ExplosionGuardResult::within_limit(Decimal::from(60), Decimal::from(20));

        assert!(!guard.exceeds_limit);
        assert_eq!(guard.excess_ratio, Decimal::ZERO);
        assert!(guard.diagnostic_message.is_none());
    }

    #[test]
    fn test_has_anomaly() {
        let mut result = ConsumptionResult {
            raw_consumption: Decimal::from(20),
            consumption_in_kg: Decimal::from(20),
            finished_goods_weight_kg: Decimal::from(20),
            finished_goods_weight_with_waste_kg: Decimal::from(20),
            excessive_consumption_warning: false,
            overflowed: false,
            guard: ExplosionGuardResult::within_limit(Decimal::from(60), Decimal::from(20)),
        };
        assert!(!result.has_anomaly());

        result.overflowed = true;
        assert!(result.has_anomaly());

        result.overflowed = false;
        result.guard.exceeds_limit = true;
        assert!(result.has_anomaly());
    }
}
