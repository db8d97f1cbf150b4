//! # CPD Core
//!
//! 中央廚房（CPD）原料消耗計算的核心資料模型與類型定義

pub mod config;
pub mod demand;
pub mod ingredient;
pub mod inventory;
pub mod plan;
pub mod request;
pub mod result;

// Re-export 主要類型
pub use config::CalcConfig;
pub use demand::{ProductionOrder, Recipe};
pub use ingredient::{Ingredient, IngredientKind};
pub use inventory::StockLevel;
pub use plan::{ConsumptionLine, PurchaseSuggestion};
pub use request::ConsumptionRequest;
pub use result::{ConsumptionResult, ExplosionGuardResult};

use rust_decimal::Decimal;

/// 消耗計算錯誤類型
///
/// 純計算核心本身不回傳錯誤，只有輸入守衛、生產計劃器與配置載入會使用
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("需求數量不可為負: {0}")]
    NegativeDemand(Decimal),

    #[error("單位重量不可為負: {0}")]
    NegativeUnitWeight(Decimal),

    #[error("損耗百分比不可為負: {0}")]
    NegativeWastePercent(Decimal),

    #[error("找不到產品配方: {0}")]
    RecipeNotFound(String),

    #[error("原料 {0} 的計算超出數值範圍")]
    Overflow(String),

    #[error("無效的計算配置: {0}")]
    InvalidConfig(String),

    #[error("配置解析錯誤: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
