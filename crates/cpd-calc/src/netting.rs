//! 採購清單建議（需求彙總扣除庫存）

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use cpd_core::{ConsumptionLine, PurchaseSuggestion, StockLevel};
use rust_decimal::Decimal;
use uuid::Uuid;

/// 單一原料的彙總需求
struct AggregatedRequirement {
    required_qty: Decimal,
    needed_by: NaiveDate,
    source_orders: Vec<Uuid>,
}

/// 採購清單計算器
pub struct PurchaseListCalculator;

impl PurchaseListCalculator {
    /// 計算採購建議
    ///
    /// 依原料彙總消耗（kg 或計數單位），扣除可用庫存，只在短缺時產生建議。
    /// 結果依原料ID排序。
    pub fn suggest(lines: &[ConsumptionLine], stock: &[StockLevel]) -> Vec<PurchaseSuggestion> {
        let stock_map: HashMap<&str, &StockLevel> = stock
            .iter()
            .map(|s| (s.ingredient_id.as_str(), s))
            .collect();

        let mut aggregated: BTreeMap<&str, AggregatedRequirement> = BTreeMap::new();
        for line in lines {
            let entry = aggregated
                .entry(line.ingredient_id.as_str())
                .or_insert_with(|| AggregatedRequirement {
                    required_qty: Decimal::ZERO,
                    needed_by: line.scheduled_date,
                    source_orders: Vec::new(),
                });

            entry.required_qty = entry.required_qty.saturating_add(line.consumption());
            entry.needed_by = entry.needed_by.min(line.scheduled_date);
            if !entry.source_orders.contains(&line.order_id) {
                entry.source_orders.push(line.order_id);
            }
        }

        let mut suggestions = Vec::new();
        for (ingredient_id, requirement) in aggregated {
            let (available_qty, shortfall) = match stock_map.get(ingredient_id) {
                Some(level) => (level.available_qty, level.shortfall(requirement.required_qty)),
                None => (Decimal::ZERO, requirement.required_qty.max(Decimal::ZERO)),
            };

            if shortfall > Decimal::ZERO {
                tracing::debug!(
                    "原料 {} 需求 {}，可用 {}，建議採購 {}",
                    ingredient_id,
                    requirement.required_qty,
                    available_qty,
                    shortfall
                );
                suggestions.push(
                    PurchaseSuggestion::new(
                        ingredient_id.to_string(),
                        requirement.required_qty,
                        available_qty,
                        shortfall,
                        requirement.needed_by,
                    )
                    .with_source_orders(requirement.source_orders),
                );
            }
        }

        suggestions
    }
}
