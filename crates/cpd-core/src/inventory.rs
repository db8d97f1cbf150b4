//! 庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 原料庫存狀態（以公斤或原料計數單位表示）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockLevel {
    /// 原料ID
    pub ingredient_id: String,

    /// 現有庫存
    pub on_hand_qty: Decimal,

    /// 已分配數量（鎖定）
    pub allocated_qty: Decimal,

    /// 可用庫存（現有 - 已分配）
    pub available_qty: Decimal,

    /// 門店/倉庫
    pub store_id: Option<String>,
}

impl StockLevel {
    /// 創建新的庫存記錄
    pub fn new(ingredient_id: String, on_hand_qty: Decimal) -> Self {
        Self {
            ingredient_id,
            on_hand_qty,
            allocated_qty: Decimal::ZERO,
            available_qty: on_hand_qty,
            store_id: None,
        }
    }

    /// 建構器模式：設置已分配數量
    pub fn with_allocated_qty(mut self, allocated_qty: Decimal) -> Self {
        self.allocated_qty = allocated_qty;
        self.available_qty = self.on_hand_qty - allocated_qty;
        self
    }

    /// 建構器模式：設置門店
    pub fn with_store_id(mut self, store_id: String) -> Self {
        self.store_id = Some(store_id);
        self
    }

    /// 計算短缺數量（需求超出可用庫存的部分）
    pub fn shortfall(&self, required_qty: Decimal) -> Decimal {
        let available = self.available_qty.max(Decimal::ZERO);
        if required_qty > available {
            required_qty - available
        } else {
            Decimal::ZERO
        }
    }
}
