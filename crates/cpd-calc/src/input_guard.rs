//! 輸入檢查層（在純計算核心之上）

use cpd_core::{CalcError, ConsumptionRequest};
use rust_decimal::Decimal;

/// 輸入守衛
pub struct InputGuard;

impl InputGuard {
    /// 檢查請求輸入
    ///
    /// 拒絕負數需求、負數單重、負數損耗；損耗 >= 100% 只記錄不拒絕
    pub fn check(request: &ConsumptionRequest) -> cpd_core::Result<()> {
        Self::check_values(
            &request.ingredient.ingredient_id,
            request.demand_total_units,
            request.unit_weight_grams,
            request.waste_percent,
        )
    }

    /// 檢查一組生產數值（`label` 只用於日誌，可為原料或成品ID）
    pub fn check_values(
        label: &str,
        demand_total_units: Decimal,
        unit_weight_grams: Decimal,
        waste_percent: Decimal,
    ) -> cpd_core::Result<()> {
        if demand_total_units < Decimal::ZERO {
            return Err(CalcError::NegativeDemand(demand_total_units));
        }

        if unit_weight_grams < Decimal::ZERO {
            return Err(CalcError::NegativeUnitWeight(unit_weight_grams));
        }

        if waste_percent < Decimal::ZERO {
            return Err(CalcError::NegativeWastePercent(waste_percent));
        }

        if waste_percent >= Decimal::ONE_HUNDRED {
            tracing::warn!("{} 損耗百分比異常偏高: {}%", label, waste_percent);
        }

        Ok(())
    }
}
