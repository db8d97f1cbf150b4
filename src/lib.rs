//! # CPD
//!
//! 中央廚房原料消耗計算：資料模型（`cpd_core`）與計算引擎（`cpd_calc`）

pub use cpd_calc::{
    calculate_consumption, classify_unit, validate_calculation, CalcWarning, PlanResult,
    WarningSeverity,
};
pub use cpd_core::*;

pub use cpd_calc as calc;
pub use cpd_core as model;
