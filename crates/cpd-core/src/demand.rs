//! 生產需求模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ConsumptionRequest, Ingredient};

/// 生產訂單（中央廚房某日的成品需求）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionOrder {
    /// 訂單ID
    pub id: Uuid,

    /// 成品ID
    pub product_id: String,

    /// 需求成品數量
    pub demand_units: Decimal,

    /// 計劃生產日期
    pub scheduled_date: NaiveDate,

    /// 需求門店
    pub store_id: Option<String>,
}

impl ProductionOrder {
    /// 創建新的生產訂單
    pub fn new(product_id: String, demand_units: Decimal, scheduled_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            demand_units,
            scheduled_date,
            store_id: None,
        }
    }

    /// 建構器模式：設置門店
    pub fn with_store_id(mut self, store_id: String) -> Self {
        self.store_id = Some(store_id);
        self
    }
}

/// 成品配方
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// 成品ID
    pub product_id: String,

    /// 單個成品重量（克）
    pub unit_weight_grams: Decimal,

    /// 每批可產出的成品數量
    pub batch_equivalent_units: Option<Decimal>,

    /// 損耗百分比
    pub waste_percent: Decimal,

    /// 原料清單
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// 創建新的配方
    pub fn new(product_id: String, unit_weight_grams: Decimal) -> Self {
        Self {
            product_id,
            unit_weight_grams,
            batch_equivalent_units: None,
            waste_percent: Decimal::ZERO,
            ingredients: Vec::new(),
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

    /// 建構器模式：添加原料
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// 為每個原料建立計算請求（順序與原料清單一致）
    pub fn requests_for(&self, demand_units: Decimal) -> Vec<ConsumptionRequest> {
        self.ingredients
            .iter()
            .map(|ingredient| ConsumptionRequest {
                demand_total_units: demand_units,
                unit_weight_grams: self.unit_weight_grams,
                batch_equivalent_units: self.batch_equivalent_units,
                waste_percent: self.waste_percent,
                ingredient: ingredient.clone(),
            })
            .collect()
    }
}
