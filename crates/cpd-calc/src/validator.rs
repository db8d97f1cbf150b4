//! 計算驗證器
//!
//! 編寫配方時使用的診斷檢查，偵測「批次數 × 每批用量」這種已知錯誤。
//! 只返回診斷訊息，不會失敗。

use cpd_core::{CalcConfig, ConsumptionRequest};
use rust_decimal::Decimal;

use crate::arith::SaturatingOps;
use crate::calculator::ConsumptionCalculator;
use crate::classifier::UnitClassifier;
use crate::lot_sizing::lot_count_with;

/// 偵測到直接批次乘法
pub const BATCH_MULTIPLICATION_MESSAGE: &str = "possible error: direct batch multiplication detected";

/// 負數消耗
pub const NEGATIVE_CONSUMPTION_MESSAGE: &str = "invalid consumption: negative value";

/// 數值超出範圍
pub const OVERFLOW_MESSAGE: &str = "invalid consumption: arithmetic overflow, values exceed representable range";

/// 驗證診斷
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// 消耗為負
    NegativeConsumption,
    /// 消耗等於批次數 × 每批用量
    BatchMultiplication,
    /// 無法識別的計量單位
    UnrecognizedUnit(String),
    /// 檢查過程超出數值範圍，批次乘法檢查被略過
    Overflow,
}

impl Diagnostic {
    /// 診斷訊息
    pub fn message(&self) -> String {
        match self {
            Diagnostic::NegativeConsumption => NEGATIVE_CONSUMPTION_MESSAGE.to_string(),
            Diagnostic::BatchMultiplication => BATCH_MULTIPLICATION_MESSAGE.to_string(),
            Diagnostic::UnrecognizedUnit(unit) => UnitClassifier::unrecognized_message(unit),
            Diagnostic::Overflow => OVERFLOW_MESSAGE.to_string(),
        }
    }
}

/// 計算驗證器
pub struct CalculationValidator {
    calculator: ConsumptionCalculator,
}

impl CalculationValidator {
    /// 從配置創建驗證器，配置不合法時返回錯誤
    pub fn new(config: CalcConfig) -> cpd_core::Result<Self> {
        Ok(Self {
            calculator: ConsumptionCalculator::new(config)?,
        })
    }

    /// 驗證給定的原始消耗值，返回診斷訊息
    pub fn validate(&self, request: &ConsumptionRequest, raw_consumption: Decimal) -> Vec<String> {
        self.diagnose(request, raw_consumption)
            .iter()
            .map(Diagnostic::message)
            .collect()
    }

    /// 驗證給定的原始消耗值，返回結構化診斷
    pub fn diagnose(&self, request: &ConsumptionRequest, raw_consumption: Decimal) -> Vec<Diagnostic> {
        let config = self.calculator.config();
        let mut diagnostics = Vec::new();

        if raw_consumption < Decimal::ZERO {
            diagnostics.push(Diagnostic::NegativeConsumption);
        }

        let mut ops = SaturatingOps::new();
        if let Some(lots) =
            lot_count_with(&mut ops, request.demand_total_units, request.batch_equivalent_units)
        {
            let suspect_value = ops.mul(lots, request.ingredient.quantity_per_reference_unit);
            let expected = self.calculator.calculate(request);

            let matches_suspect =
                ops.sub(raw_consumption, suspect_value).abs() < config.batch_match_tolerance;
            let matches_expected = ops.sub(raw_consumption, expected.raw_consumption).abs()
                <= config.per_unit_match_tolerance;

            if ops.overflowed() || expected.overflowed {
                // 飽和值之間的比對沒有意義
                diagnostics.push(Diagnostic::Overflow);
            } else if matches_suspect && suspect_value > Decimal::ZERO && !matches_expected {
                tracing::warn!(
                    "原料 {}: 消耗 {} 等於 {} 批 × {}，與正確值 {} 不符",
                    request.ingredient.ingredient_id,
                    raw_consumption,
                    lots,
                    request.ingredient.quantity_per_reference_unit,
                    expected.raw_consumption
                );
                diagnostics.push(Diagnostic::BatchMultiplication);
            }
        }

        let unit = &request.ingredient.unit_of_measure;
        if config.flag_unrecognized_units && !UnitClassifier::is_recognized(unit) {
            diagnostics.push(Diagnostic::UnrecognizedUnit(unit.clone()));
        }

        diagnostics
    }
}

impl Default for CalculationValidator {
    fn default() -> Self {
        Self {
            calculator: ConsumptionCalculator::default(),
        }
    }
}
