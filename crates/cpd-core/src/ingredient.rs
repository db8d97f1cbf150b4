//! 原料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 原料消耗類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IngredientKind {
    /// 按成品重量比例消耗（麵團、餡料）
    WeightProportional,
    /// 按成品數量比例消耗（包材、標籤）
    CountProportional,
}

impl IngredientKind {
    /// 檢查是否按重量消耗
    pub fn is_weight_proportional(&self) -> bool {
        *self == IngredientKind::WeightProportional
    }

    /// 檢查是否按數量消耗
    pub fn is_count_proportional(&self) -> bool {
        *self == IngredientKind::CountProportional
    }
}

/// 原料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// 原料ID
    pub ingredient_id: String,

    /// 每參考單位的配置用量
    ///
    /// 參考單位取決於 `kind`：按數量消耗時為「每個成品」，絕不是「每批」
    pub quantity_per_reference_unit: Decimal,

    /// 消耗類型
    pub kind: IngredientKind,

    /// 計量單位（kg, g, ml, l, un, pcs ...）
    pub unit_of_measure: String,
}

impl Ingredient {
    /// 創建新的原料
    pub fn new(
        ingredient_id: String,
        quantity_per_reference_unit: Decimal,
        kind: IngredientKind,
        unit_of_measure: String,
    ) -> Self {
        Self {
            ingredient_id,
            quantity_per_reference_unit,
            kind,
            unit_of_measure,
        }
    }

    /// 創建按重量消耗的原料
    pub fn weight(ingredient_id: String, unit_of_measure: String) -> Self {
        Self::new(
            ingredient_id,
            Decimal::ONE,
            IngredientKind::WeightProportional,
            unit_of_measure,
        )
    }

    /// 創建按數量消耗的原料
    pub fn count(
        ingredient_id: String,
        quantity_per_unit: Decimal,
        unit_of_measure: String,
    ) -> Self {
        Self::new(
            ingredient_id,
            quantity_per_unit,
            IngredientKind::CountProportional,
            unit_of_measure,
        )
    }

    /// 建構器模式：設置每參考單位用量
    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity_per_reference_unit = quantity;
        self
    }
}
