//! 消耗計算請求

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Ingredient;

/// 消耗計算請求（每次計算建立，不可變）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionRequest {
    /// 成品總需求數量
    pub demand_total_units: Decimal,

    /// 單個成品重量（克）
    pub unit_weight_grams: Decimal,

    /// 每批可產出的成品數量，只用於批次規劃，絕不參與消耗計算
    pub batch_equivalent_units: Option<Decimal>,

    /// 損耗百分比（5 代表 +5%）
    pub waste_percent: Decimal,

    /// 原料
    pub ingredient: Ingredient,
}

impl ConsumptionRequest {
    /// 創建新的計算請求（無損耗、無批次資訊）
    pub fn new(demand_total_units: Decimal, unit_weight_grams: Decimal, ingredient: Ingredient) -> Self {
        Self {
            demand_total_units,
            unit_weight_grams,
            batch_equivalent_units: None,
            waste_percent: Decimal::ZERO,
            ingredient,
        }
    }

    /// 建構器模式：設置損耗百分比
    pub fn with_waste_percent(mut self, waste_percent: Decimal) -> Self {
        self.waste_percent = waste_percent;
        self
    }

    /// 建構器模式：設置每批成品數量
    pub fn with_batch_equivalent_units(mut self, units: Decimal) -> Self {
        self.batch_equivalent_units = Some(units);
        self
    }
}
