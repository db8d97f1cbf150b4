//! 生產計劃器
//!
//! 將生產訂單依配方展開為各原料消耗。各原料的計算互不相依，使用 rayon 並行。

use std::collections::HashMap;

use cpd_core::{CalcConfig, CalcError, ConsumptionLine, ConsumptionRequest, ProductionOrder, Recipe};
use rayon::prelude::*;

use crate::calculator::ConsumptionCalculator;
use crate::input_guard::InputGuard;
use crate::lot_sizing::lot_count;
use crate::validator::{CalculationValidator, Diagnostic};
use crate::{CalcWarning, PlanResult};

/// 生產計劃器
pub struct ProductionPlanner {
    /// 成品配方（依成品ID）
    recipes: HashMap<String, Recipe>,

    /// 消耗計算器
    calculator: ConsumptionCalculator,

    /// 驗證器
    validator: CalculationValidator,

    /// 是否執行驗證器
    run_validator: bool,
}

impl ProductionPlanner {
    /// 創建新的生產計劃器（配置無效時返回錯誤）
    pub fn new(recipes: Vec<Recipe>, config: CalcConfig) -> cpd_core::Result<Self> {
        let recipes = recipes
            .into_iter()
            .map(|recipe| (recipe.product_id.clone(), recipe))
            .collect();

        Ok(Self {
            recipes,
            calculator: ConsumptionCalculator::new(config.clone())?,
            validator: CalculationValidator::new(config)?,
            run_validator: true,
        })
    }

    /// 建構器模式：設置是否執行驗證器
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.run_validator = enabled;
        self
    }

    /// 主計劃入口
    ///
    /// 異常（守衛觸發、驗證診斷）只產生警告，不中止計劃
    pub fn plan(&self, orders: &[ProductionOrder]) -> cpd_core::Result<PlanResult> {
        tracing::info!("開始生產計劃：訂單 {} 筆", orders.len());
        let start_time = std::time::Instant::now();

        let mut result = PlanResult::empty();

        for order in orders {
            let recipe = self
                .recipes
                .get(&order.product_id)
                .ok_or_else(|| CalcError::RecipeNotFound(order.product_id.clone()))?;

            // 以訂單為單位檢查，無原料的配方也不能放行負數需求
            InputGuard::check_values(
                &order.product_id,
                order.demand_units,
                recipe.unit_weight_grams,
                recipe.waste_percent,
            )?;

            let requests = recipe.requests_for(order.demand_units);

            if let Some(lots) = lot_count(order.demand_units, recipe.batch_equivalent_units) {
                tracing::debug!("訂單 {} 批次數量: {}", order.id, lots);
                result.lot_counts.insert(order.id, lots);
            }

            let computed: Vec<(ConsumptionLine, Vec<CalcWarning>)> = requests
                .par_iter()
                .map(|request| self.compute_line(order, request))
                .collect();

            for (line, warnings) in computed {
                result.lines.push(line);
                result.warnings.extend(warnings);
            }
        }

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "生產計劃完成，耗時 {:?}，明細 {} 筆，警告 {} 筆",
            start_time.elapsed(),
            result.lines.len(),
            result.warnings.len()
        );

        Ok(result)
    }

    /// 單一原料計算
    fn compute_line(
        &self,
        order: &ProductionOrder,
        request: &ConsumptionRequest,
    ) -> (ConsumptionLine, Vec<CalcWarning>) {
        let ingredient_id = &request.ingredient.ingredient_id;
        let consumption = self.calculator.calculate(request);
        let mut warnings = Vec::new();

        if consumption.excessive_consumption_warning {
            warnings.push(
                CalcWarning::warning(
                    ingredient_id.clone(),
                    format!(
                        "excessive consumption: {} kg for {} kg of finished goods",
                        consumption.consumption_in_kg, consumption.finished_goods_weight_with_waste_kg
                    ),
                )
                .with_order_id(order.id),
            );
        }

        if consumption.overflowed {
            warnings.push(
                CalcWarning::error(
                    ingredient_id.clone(),
                    format!("arithmetic overflow: ingredient {} consumption saturated", ingredient_id),
                )
                .with_order_id(order.id),
            );
        }

        if let Some(message) = &consumption.guard.diagnostic_message {
            warnings.push(
                CalcWarning::error(
                    ingredient_id.clone(),
                    format!(
                        "{} (ingredient {}, ratio {})",
                        message,
                        ingredient_id,
                        consumption.guard.excess_ratio.round_dp(4)
                    ),
                )
                .with_order_id(order.id),
            );
        }

        if self.run_validator {
            for diagnostic in self.validator.diagnose(request, consumption.raw_consumption) {
                let warning = match diagnostic {
                    Diagnostic::UnrecognizedUnit(_) => {
                        CalcWarning::info(ingredient_id.clone(), diagnostic.message())
                    }
                    _ => CalcWarning::warning(ingredient_id.clone(), diagnostic.message()),
                };
                warnings.push(warning.with_order_id(order.id));
            }
        }

        let line = ConsumptionLine {
            order_id: order.id,
            product_id: order.product_id.clone(),
            ingredient_id: ingredient_id.clone(),
            kind: request.ingredient.kind,
            scheduled_date: order.scheduled_date,
            result: consumption,
        };

        (line, warnings)
    }

    /// 獲取配方引用
    pub fn recipe(&self, product_id: &str) -> Option<&Recipe> {
        self.recipes.get(product_id)
    }
}
