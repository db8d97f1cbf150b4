//! 原料消耗主計算器
//!
//! 計算順序即契約：永遠從單個成品重量推導，絕不把「每批」用量直接乘以成品數量。
//! 1. 成品總重 = 單重(g) × 需求數量 / 1000
//! 2. 損耗係數 = 1 + 損耗% / 100
//! 3. 含損耗總重 = 成品總重 × 損耗係數
//! 4. 依原料類型分支（按重量 / 按數量）
//! 5. g/ml 換算為 kg
//! 6. 軟警告檢查

use cpd_core::{CalcConfig, CalcError, ConsumptionRequest, ConsumptionResult, IngredientKind};
use rust_decimal::Decimal;

use crate::arith::SaturatingOps;
use crate::conversion::to_kilograms;
use crate::guard::ExplosionGuard;
use crate::input_guard::InputGuard;

/// 原料消耗計算器
pub struct ConsumptionCalculator {
    /// 計算配置
    config: CalcConfig,

    /// 防爆守衛
    guard: ExplosionGuard,
}

impl ConsumptionCalculator {
    /// 創建新的計算器，配置不合法時返回錯誤
    pub fn new(config: CalcConfig) -> cpd_core::Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: CalcConfig) -> Self {
        let guard = ExplosionGuard::from_validated(&config);
        Self { config, guard }
    }

    /// 主計算入口（純計算，任何數值輸入都不會失敗）
    ///
    /// 負數輸入會得到負數結果，由驗證器與守衛負責偵測。
    /// 超出 Decimal 範圍時數值飽和，並設置 `overflowed`。
    pub fn calculate(&self, request: &ConsumptionRequest) -> ConsumptionResult {
        let ingredient = &request.ingredient;
        let mut ops = SaturatingOps::new();

        // Step 1: 成品總重（kg）
        let total_grams = ops.mul(request.unit_weight_grams, request.demand_total_units);
        let finished_goods_weight_kg = ops.div(total_grams, Decimal::ONE_THOUSAND);

        // Step 2-3: 損耗
        let waste_fraction = ops.div(request.waste_percent, Decimal::ONE_HUNDRED);
        let waste_factor = ops.add(Decimal::ONE, waste_fraction);
        let finished_goods_weight_with_waste_kg = ops.mul(finished_goods_weight_kg, waste_factor);

        // Step 4: 依類型計算原始消耗
        let raw_consumption = match ingredient.kind {
            IngredientKind::WeightProportional => finished_goods_weight_with_waste_kg,
            // 只有「每個成品」的用量才能直接乘以數量
            IngredientKind::CountProportional => {
                ops.mul(request.demand_total_units, ingredient.quantity_per_reference_unit)
            }
        };

        // Step 5: 換算為公斤
        let consumption_in_kg = to_kilograms(raw_consumption, &ingredient.unit_of_measure);

        tracing::debug!(
            "原料 {}: 成品總重 {} kg, 含損耗 {} kg, 消耗 {} {} ({} kg)",
            ingredient.ingredient_id,
            finished_goods_weight_kg,
            finished_goods_weight_with_waste_kg,
            raw_consumption,
            ingredient.unit_of_measure,
            consumption_in_kg
        );

        // Step 6: 軟警告
        let excessive_limit = ops.mul(
            finished_goods_weight_with_waste_kg,
            self.config.excessive_consumption_ratio,
        );
        let excessive_consumption_warning =
            ingredient.kind.is_weight_proportional() && consumption_in_kg > excessive_limit;

        if excessive_consumption_warning {
            tracing::warn!(
                "原料 {} 消耗過高：{} kg 超過成品含損耗重量 {} kg 的 {} 倍",
                ingredient.ingredient_id,
                consumption_in_kg,
                finished_goods_weight_with_waste_kg,
                self.config.excessive_consumption_ratio
            );
        }

        let guard = self.guard.evaluate(
            ingredient.kind,
            request.demand_total_units,
            finished_goods_weight_with_waste_kg,
            raw_consumption,
            consumption_in_kg,
        );

        let overflowed = ops.overflowed();
        if overflowed {
            tracing::warn!(
                "原料 {} 的計算超出數值範圍，結果已飽和",
                ingredient.ingredient_id
            );
        }

        ConsumptionResult {
            raw_consumption,
            consumption_in_kg,
            finished_goods_weight_kg,
            finished_goods_weight_with_waste_kg,
            excessive_consumption_warning,
            overflowed,
            guard,
        }
    }

    /// 先檢查輸入再計算，溢出時返回錯誤
    pub fn calculate_checked(&self, request: &ConsumptionRequest) -> cpd_core::Result<ConsumptionResult> {
        InputGuard::check(request)?;
        let result = self.calculate(request);
        if result.overflowed {
            return Err(CalcError::Overflow(request.ingredient.ingredient_id.clone()));
        }
        Ok(result)
    }

    /// 獲取配置引用
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }
}

impl Default for ConsumptionCalculator {
    fn default() -> Self {
        Self::from_validated(CalcConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpd_core::Ingredient;

    fn weight_request(demand: i64, unit_weight: i64, waste: i64) -> ConsumptionRequest {
        ConsumptionRequest::new(
            Decimal::from(demand),
            Decimal::from(unit_weight),
            Ingredient::weight("MASSA".to_string(), "kg".to_string()),
        )
        .with_waste_percent(Decimal::from(waste))
    }

    #[test]
    fn test_weight_without_waste() {
        let calculator = ConsumptionCalculator::default();
        let result = calculator.calculate(&weight_request(100, 200, 0));

        assert_eq!(result.finished_goods_weight_kg, Decimal::from(20));
        assert_eq!(result.finished_goods_weight_with_waste_kg, Decimal::from(20));
        assert_eq!(result.raw_consumption, Decimal::from(20));
        assert_eq!(result.consumption_in_kg, Decimal::from(20));
        assert!(!result.excessive_consumption_warning);
        assert!(!result.guard.exceeds_limit);
        assert_eq!(result.guard.max_allowed, Decimal::from(60));
    }

    #[test]
    fn test_weight_with_waste() {
        // 100 × 200g = 20kg，+5% = 21kg
        let calculator = ConsumptionCalculator::default();
        let result = calculator.calculate(&weight_request(100, 200, 5));

        assert_eq!(result.finished_goods_weight_kg, Decimal::from(20));
        assert_eq!(result.finished_goods_weight_with_waste_kg, Decimal::from(21));
        assert_eq!(result.consumption_in_kg, Decimal::from(21));
    }

    #[test]
    fn test_weight_ignores_configured_quantity() {
        // 按重量消耗時，配置用量不參與計算
        let calculator = ConsumptionCalculator::default();
        let mut request = weight_request(100, 200, 0);
        request.ingredient = request.ingredient.with_quantity(Decimal::from(500));

        let result = calculator.calculate(&request);
        assert_eq!(result.raw_consumption, Decimal::from(20));
    }

    #[test]
    fn test_weight_in_grams_is_divided() {
        let calculator = ConsumptionCalculator::default();
        let request = ConsumptionRequest::new(
            Decimal::from(100),
            Decimal::from(200),
            Ingredient::weight("RECHEIO".to_string(), "g".to_string()),
        );

        let result = calculator.calculate(&request);
        assert_eq!(result.raw_consumption, Decimal::from(20));
        assert_eq!(result.consumption_in_kg, Decimal::new(2, 2));
    }

    #[test]
    fn test_count_proportional() {
        let calculator = ConsumptionCalculator::default();
        let request = ConsumptionRequest::new(
            Decimal::from(100),
            Decimal::from(200),
            Ingredient::count("EMBALAGEM".to_string(), Decimal::from(2), "un".to_string()),
        )
        .with_waste_percent(Decimal::from(10));

        let result = calculator.calculate(&request);

        // 損耗不影響計數原料
        assert_eq!(result.raw_consumption, Decimal::from(200));
        assert_eq!(result.consumption_in_kg, Decimal::from(200));
        assert_eq!(result.finished_goods_weight_with_waste_kg, Decimal::from(22));
        assert!(!result.excessive_consumption_warning);
        assert_eq!(result.guard.max_allowed, Decimal::from(300));
        assert!(!result.guard.exceeds_limit);
    }

    #[test]
    fn test_count_in_grams_round_trip() {
        let calculator = ConsumptionCalculator::default();
        let request = ConsumptionRequest::new(
            Decimal::ONE,
            Decimal::from(50),
            Ingredient::count("TEMPERO".to_string(), Decimal::from(1000), "g".to_string()),
        );

        let result = calculator.calculate(&request);
        assert_eq!(result.raw_consumption, Decimal::from(1000));
        assert_eq!(result.consumption_in_kg, Decimal::ONE);
    }

    #[test]
    fn test_count_per_batch_misconfiguration_trips_guard() {
        // 把「每批 500 個」的用量誤填為每個用量
        let calculator = ConsumptionCalculator::default();
        let request = ConsumptionRequest::new(
            Decimal::from(1000),
            Decimal::from(100),
            Ingredient::count("ETIQUETA".to_string(), Decimal::from(500), "un".to_string()),
        );

        let result = calculator.calculate(&request);
        assert!(result.guard.exceeds_limit);
        // 守衛只報告，不修正
        assert_eq!(result.raw_consumption, Decimal::from(500_000));
        assert_eq!(result.guard.max_allowed, Decimal::from(3000));
    }

    #[test]
    fn test_excessive_warning_with_tight_ratio() {
        let config = CalcConfig::new().with_excessive_consumption_ratio(Decimal::new(5, 1));
        let calculator = ConsumptionCalculator::new(config).unwrap();
        let result = calculator.calculate(&weight_request(100, 200, 0));

        assert!(result.excessive_consumption_warning);
        assert!(result.has_anomaly());
    }

    #[test]
    fn test_negative_demand_is_data() {
        let calculator = ConsumptionCalculator::default();
        let result = calculator.calculate(&weight_request(-10, 200, 0));

        assert_eq!(result.raw_consumption, Decimal::from(-2));
        assert_eq!(result.consumption_in_kg, Decimal::from(-2));
        // 上限同樣為負（-6），負消耗仍會被守衛標記
        assert!(result.guard.exceeds_limit);
    }

    #[test]
    fn test_zero_demand() {
        let calculator = ConsumptionCalculator::default();
        let result = calculator.calculate(&weight_request(0, 200, 5));

        assert_eq!(result.consumption_in_kg, Decimal::ZERO);
        assert!(!result.guard.exceeds_limit);
    }

    #[test]
    fn test_calculate_checked_rejects_negative() {
        let calculator = ConsumptionCalculator::default();

        assert!(matches!(
            calculator.calculate_checked(&weight_request(-10, 200, 0)),
            Err(CalcError::NegativeDemand(_))
        ));
        assert!(calculator.calculate_checked(&weight_request(10, 200, 0)).is_ok());
    }

    #[test]
    fn test_huge_weight_request_saturates() {
        let huge = 1_000_000_000_000_000_000i64;
        let calculator = ConsumptionCalculator::default();
        let request = weight_request(huge, huge, 0);

        let result = calculator.calculate(&request);

        assert!(result.overflowed);
        assert!(result.has_anomaly());
        assert_eq!(result.finished_goods_weight_kg, Decimal::MAX / Decimal::ONE_THOUSAND);
        assert_eq!(result.raw_consumption, result.finished_goods_weight_kg);

        assert!(matches!(
            calculator.calculate_checked(&request),
            Err(CalcError::Overflow(id)) if id == "MASSA"
        ));
    }

    #[test]
    fn test_huge_count_request_saturates() {
        let huge = Decimal::from(1_000_000_000_000_000_000i64);
        let calculator = ConsumptionCalculator::default();
        let request = ConsumptionRequest::new(
            huge,
            Decimal::ONE,
            Ingredient::count("ETIQUETA".to_string(), huge, "un".to_string()),
        );

        let result = calculator.calculate(&request);

        assert!(result.overflowed);
        assert_eq!(result.raw_consumption, Decimal::MAX);
        assert!(result.guard.exceeds_limit);
    }

    #[test]
    fn test_in_range_is_not_overflowed() {
        let result = ConsumptionCalculator::default().calculate(&weight_request(100, 200, 5));
        assert!(!result.overflowed);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CalcConfig::new().with_weight_explosion_ratio(Decimal::ZERO);

        assert!(matches!(
            ConsumptionCalculator::new(config),
            Err(CalcError::InvalidConfig(_))
        ));
        assert!(ConsumptionCalculator::new(CalcConfig::default()).is_ok());
    }
}
