//! 生產計劃輸出模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ConsumptionResult, IngredientKind};

/// 單一訂單、單一原料的消耗明細
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionLine {
    /// 生產訂單ID
    pub order_id: Uuid,

    /// 成品ID
    pub product_id: String,

    /// 原料ID
    pub ingredient_id: String,

    /// 原料消耗類型
    pub kind: IngredientKind,

    /// 計劃生產日期
    pub scheduled_date: NaiveDate,

    /// 計算結果
    pub result: ConsumptionResult,
}

impl ConsumptionLine {
    /// 以公斤（或計數單位）表示的消耗
    pub fn consumption(&self) -> Decimal {
        self.result.consumption_in_kg
    }
}

/// 採購建議
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseSuggestion {
    /// 原料ID
    pub ingredient_id: String,

    /// 計劃期間總需求
    pub required_qty: Decimal,

    /// 可用庫存
    pub available_qty: Decimal,

    /// 建議採購量
    pub suggested_qty: Decimal,

    /// 最早需要的日期
    pub needed_by: NaiveDate,

    /// 需求來源訂單
    pub source_orders: Vec<Uuid>,
}

impl PurchaseSuggestion {
    /// 創建新的採購建議
    pub fn new(
        ingredient_id: String,
        required_qty: Decimal,
        available_qty: Decimal,
        suggested_qty: Decimal,
        needed_by: NaiveDate,
    ) -> Self {
        Self {
            ingredient_id,
            required_qty,
            available_qty,
            suggested_qty,
            needed_by,
            source_orders: Vec::new(),
        }
    }

    /// 建構器模式：設置來源訂單
    pub fn with_source_orders(mut self, source_orders: Vec<Uuid>) -> Self {
        self.source_orders = source_orders;
        self
    }

    /// 檢查庫存是否完全不足
    pub fn is_out_of_stock(&self) -> bool {
        self.available_qty <= Decimal::ZERO
    }
}
