//! # CPD Calculation Engine
//!
//! 原料消耗計算引擎：成品需求 → 原料消耗，並檢查物理上合理的上限

pub mod arith;
pub mod calculator;
pub mod classifier;
pub mod conversion;
pub mod guard;
pub mod input_guard;
pub mod lot_sizing;
pub mod netting;
pub mod planner;
pub mod validator;

use std::collections::HashMap;

use cpd_core::{ConsumptionLine, ConsumptionRequest, ConsumptionResult, IngredientKind};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

// Re-export 主要類型
pub use calculator::ConsumptionCalculator;
pub use classifier::UnitClassifier;
pub use guard::ExplosionGuard;
pub use input_guard::InputGuard;
pub use lot_sizing::lot_count;
pub use netting::PurchaseListCalculator;
pub use planner::ProductionPlanner;
pub use validator::{CalculationValidator, Diagnostic};

/// 以預設配置計算原料消耗
pub fn calculate_consumption(request: &ConsumptionRequest) -> ConsumptionResult {
    ConsumptionCalculator::default().calculate(request)
}

/// 依計量單位判斷原料消耗類型
pub fn classify_unit(unit_of_measure: &str) -> IngredientKind {
    UnitClassifier::classify(unit_of_measure)
}

/// 以預設配置驗證原始消耗值
pub fn validate_calculation(request: &ConsumptionRequest, raw_consumption: Decimal) -> Vec<String> {
    CalculationValidator::default().validate(request, raw_consumption)
}

/// 生產計劃計算結果
#[derive(Debug, Clone)]
pub struct PlanResult {
    /// 消耗明細（訂單順序 × 配方原料順序）
    pub lines: Vec<ConsumptionLine>,

    /// 每張訂單的批次數量
    pub lot_counts: HashMap<Uuid, Decimal>,

    /// 警告信息
    pub warnings: Vec<CalcWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl PlanResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            lot_counts: HashMap::new(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: CalcWarning) {
        self.warnings.push(warning);
    }

    /// 獲取指定嚴重度的警告
    pub fn warnings_with(&self, severity: WarningSeverity) -> Vec<&CalcWarning> {
        self.warnings.iter().filter(|w| w.severity == severity).collect()
    }
}

/// 計算警告（非阻塞，需人工確認）
#[derive(Debug, Clone, Serialize)]
pub struct CalcWarning {
    pub order_id: Option<Uuid>,
    pub ingredient_id: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl CalcWarning {
    pub fn new(ingredient_id: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            order_id: None,
            ingredient_id,
            message,
            severity,
        }
    }

    pub fn info(ingredient_id: String, message: String) -> Self {
        Self::new(ingredient_id, message, WarningSeverity::Info)
    }

    pub fn warning(ingredient_id: String, message: String) -> Self {
        Self::new(ingredient_id, message, WarningSeverity::Warning)
    }

    pub fn error(ingredient_id: String, message: String) -> Self {
        Self::new(ingredient_id, message, WarningSeverity::Error)
    }

    /// 建構器模式：設置訂單
    pub fn with_order_id(mut self, order_id: Uuid) -> Self {
        self.order_id = Some(order_id);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
