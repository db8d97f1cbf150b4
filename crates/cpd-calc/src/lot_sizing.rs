//! 批次數量規劃
//!
//! 批次只用於排程，絕不參與原料消耗計算

use rust_decimal::Decimal;

use crate::arith::SaturatingOps;

/// 計算需要的批次數量：ceil(需求 / 每批成品數量)
///
/// 每批成品數量缺失或不為正時返回 None；超出數值範圍時飽和為 MAX/MIN
pub fn lot_count(demand_total_units: Decimal, batch_equivalent_units: Option<Decimal>) -> Option<Decimal> {
    lot_count_with(&mut SaturatingOps::new(), demand_total_units, batch_equivalent_units)
}

pub(crate) fn lot_count_with(
    ops: &mut SaturatingOps,
    demand_total_units: Decimal,
    batch_equivalent_units: Option<Decimal>,
) -> Option<Decimal> {
    match batch_equivalent_units {
        Some(batch) if batch > Decimal::ZERO => Some(ops.div(demand_total_units, batch).ceil()),
        _ => None,
    }
}
