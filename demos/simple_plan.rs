//! 簡單生產計劃示例：訂單 → 原料消耗 → 採購建議

use anyhow::Context;
use chrono::NaiveDate;
use cpd::calc::{ProductionPlanner, PurchaseListCalculator};
use cpd::{CalcConfig, Ingredient, ProductionOrder, Recipe, StockLevel};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    println!("=== 簡單生產計劃示例 ===\n");

    let config = match std::env::var("CPD_CONFIG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("無法讀取配置檔 {}", path))?;
            CalcConfig::from_json_str(&json)?
        }
        Err(_) => CalcConfig::default(),
    };

    let recipes = vec![Recipe::new("COXINHA".to_string(), Decimal::from(120))
        .with_waste_percent(Decimal::from(5))
        .with_batch_equivalent_units(Decimal::from(250))
        .with_ingredient(Ingredient::weight("MASSA".to_string(), "kg".to_string()))
        .with_ingredient(Ingredient::count(
            "EMBALAGEM".to_string(),
            Decimal::ONE,
            "un".to_string(),
        ))
        // 誤把每批用量填為每個用量
        .with_ingredient(Ingredient::count(
            "ETIQUETA".to_string(),
            Decimal::from(250),
            "un".to_string(),
        ))];

    let date = NaiveDate::from_ymd_opt(2025, 11, 1).context("無效的日期")?;
    let orders = vec![ProductionOrder::new("COXINHA".to_string(), Decimal::from(500), date)
        .with_store_id("LOJA-01".to_string())];

    let planner = ProductionPlanner::new(recipes, config)?;
    let plan = planner.plan(&orders)?;

    println!("消耗明細:");
    for line in &plan.lines {
        println!(
            "  - {} / {}: {} (kg 或計數單位)",
            line.product_id,
            line.ingredient_id,
            line.consumption()
        );
    }

    println!("\n警告:");
    for warning in &plan.warnings {
        println!("  - [{:?}] {}: {}", warning.severity, warning.ingredient_id, warning.message);
    }

    let stock = vec![StockLevel::new("MASSA".to_string(), Decimal::from(40))];
    println!("\n採購建議:");
    for suggestion in PurchaseListCalculator::suggest(&plan.lines, &stock) {
        println!(
            "  - {}: 需求 {}, 可用 {}, 建議 {} (最遲 {})",
            suggestion.ingredient_id,
            suggestion.required_qty,
            suggestion.available_qty,
            suggestion.suggested_qty,
            suggestion.needed_by
        );
    }

    Ok(())
}
