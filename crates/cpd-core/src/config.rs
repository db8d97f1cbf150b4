//! 消耗計算配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CalcError, Result};

/// 消耗計算參數配置
///
/// 每個計算器實例各自持有一份，不使用全域狀態
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// 軟警告倍率：按重量消耗時，消耗 > 成品含損耗重量 × 此倍率即警告
    pub excessive_consumption_ratio: Decimal,

    /// 防爆上限倍率（按重量消耗）：上限 = 成品含損耗重量 × 此倍率
    pub weight_explosion_ratio: Decimal,

    /// 防爆上限（按數量消耗）：每個成品最多消耗的數量
    pub count_explosion_per_unit: Decimal,

    /// 批次乘法檢查容差
    pub batch_match_tolerance: Decimal,

    /// 與正確值重合的容差
    pub per_unit_match_tolerance: Decimal,

    /// 是否對無法識別的計量單位產生診斷
    pub flag_unrecognized_units: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            excessive_consumption_ratio: Decimal::from(5),
            weight_explosion_ratio: Decimal::from(3),
            count_explosion_per_unit: Decimal::from(3),
            batch_match_tolerance: Decimal::new(1, 2),
            per_unit_match_tolerance: Decimal::new(1, 1),
            flag_unrecognized_units: true,
        }
    }
}

impl CalcConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 載入配置（缺少的欄位使用預設值）
    ///
    /// # 範例
    /// ```
    /// # use cpd_core::CalcConfig;
    /// let config = CalcConfig::from_json_str(r#"{"weight_explosion_ratio": "4"}"#).unwrap();
    /// assert_eq!(config.weight_explosion_ratio, rust_decimal::Decimal::from(4));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置軟警告倍率
    pub fn with_excessive_consumption_ratio(mut self, ratio: Decimal) -> Self {
        self.excessive_consumption_ratio = ratio;
        self
    }

    /// 建構器模式：設置重量防爆倍率
    pub fn with_weight_explosion_ratio(mut self, ratio: Decimal) -> Self {
        self.weight_explosion_ratio = ratio;
        self
    }

    /// 建構器模式：設置每成品數量上限
    pub fn with_count_explosion_per_unit(mut self, per_unit: Decimal) -> Self {
        self.count_explosion_per_unit = per_unit;
        self
    }

    /// 建構器模式：設置批次乘法檢查容差
    pub fn with_batch_match_tolerance(mut self, tolerance: Decimal) -> Self {
        self.batch_match_tolerance = tolerance;
        self
    }

    /// 建構器模式：設置正確值重合容差
    pub fn with_per_unit_match_tolerance(mut self, tolerance: Decimal) -> Self {
        self.per_unit_match_tolerance = tolerance;
        self
    }

    /// 建構器模式：設置是否標記無法識別的單位
    pub fn with_flag_unrecognized_units(mut self, flag: bool) -> Self {
        self.flag_unrecognized_units = flag;
        self
    }

    /// 驗證配置：所有倍率與容差必須為正
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("excessive_consumption_ratio", self.excessive_consumption_ratio),
            ("weight_explosion_ratio", self.weight_explosion_ratio),
            ("count_explosion_per_unit", self.count_explosion_per_unit),
            ("batch_match_tolerance", self.batch_match_tolerance),
            ("per_unit_match_tolerance", self.per_unit_match_tolerance),
        ];

        for (name, value) in checks {
            if value <= Decimal::ZERO {
                return Err(CalcError::InvalidConfig(format!(
                    "{} 必須大於 0，目前為 {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
