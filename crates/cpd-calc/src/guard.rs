//! 防爆守衛
//!
//! 捕捉配置錯誤（例如把「每批 500 個」的用量誤填為「每個」），
//! 避免產生荒謬的消耗與採購數量。只報告，不修正消耗值。

use cpd_core::{CalcConfig, ExplosionGuardResult, IngredientKind};
use rust_decimal::Decimal;

use crate::arith::SaturatingOps;

/// 守衛觸發時的診斷訊息（固定、不做本地化）
pub const EXPLOSION_MESSAGE: &str =
    "logical error detected: consumption above physically plausible limit - check batch/lot configuration";

/// 防爆守衛
pub struct ExplosionGuard {
    weight_ratio: Decimal,
    count_per_unit: Decimal,
}

impl ExplosionGuard {
    /// 從配置創建守衛（配置必須通過驗證）
    pub fn new(config: &CalcConfig) -> cpd_core::Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    pub(crate) fn from_validated(config: &CalcConfig) -> Self {
        Self {
            weight_ratio: config.weight_explosion_ratio,
            count_per_unit: config.count_explosion_per_unit,
        }
    }

    /// 評估消耗是否超出物理上合理的上限
    ///
    /// # 參數
    /// * `finished_goods_weight_with_waste_kg` - 成品含損耗重量
    /// * `consumption_in_kg` - 按重量消耗時比對的值
    /// * `raw_consumption` - 按數量消耗時比對的值
    pub fn evaluate(
        &self,
        kind: IngredientKind,
        demand_total_units: Decimal,
        finished_goods_weight_with_waste_kg: Decimal,
        raw_consumption: Decimal,
        consumption_in_kg: Decimal,
    ) -> ExplosionGuardResult {
        let mut ops = SaturatingOps::new();
        let (max_allowed, observed) = match kind {
            IngredientKind::WeightProportional => (
                ops.mul(finished_goods_weight_with_waste_kg, self.weight_ratio),
                consumption_in_kg,
            ),
            IngredientKind::CountProportional => {
                (ops.mul(demand_total_units, self.count_per_unit), raw_consumption)
            }
        };

        if observed <= max_allowed {
            return ExplosionGuardResult::within_limit(max_allowed, observed);
        }

        // 上限為 0 或負值時無法計算倍率，視為無上限超出
        let excess_ratio = if max_allowed > Decimal::ZERO {
            ops.div(observed, max_allowed)
        } else {
            Decimal::MAX
        };

        tracing::warn!(
            "防爆守衛觸發：消耗 {} 超出上限 {}（倍率 {}）",
            observed,
            max_allowed,
            excess_ratio.round_dp(4)
        );

        ExplosionGuardResult {
            exceeds_limit: true,
            max_allowed,
            observed_consumption: observed,
            excess_ratio,
            diagnostic_message: Some(EXPLOSION_MESSAGE.to_string()),
        }
    }
}

impl Default for ExplosionGuard {
    fn default() -> Self {
        Self::from_validated(&CalcConfig::default())
    }
}
