//! 飽和運算
//!
//! Decimal 的 `*` `/` `+` `-` 超出範圍會 panic。計算核心對任何數值輸入都必須返回資料，
//! 因此改用 checked 運算，溢出時飽和為 MAX/MIN 並記錄溢出旗標。

use rust_decimal::Decimal;

/// 帶溢出旗標的飽和運算器
#[derive(Debug, Default)]
pub struct SaturatingOps {
    overflowed: bool,
}

impl SaturatingOps {
    /// 創建新的運算器
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否發生過溢出
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// 乘法
    pub fn mul(&mut self, a: Decimal, b: Decimal) -> Decimal {
        match a.checked_mul(b) {
            Some(value) => value,
            None => self.saturate(a.is_sign_negative() != b.is_sign_negative()),
        }
    }

    /// 除法（除數為 0 時同樣視為溢出）
    pub fn div(&mut self, a: Decimal, b: Decimal) -> Decimal {
        match a.checked_div(b) {
            Some(value) => value,
            None => self.saturate(a.is_sign_negative() != b.is_sign_negative()),
        }
    }

    /// 加法
    pub fn add(&mut self, a: Decimal, b: Decimal) -> Decimal {
        match a.checked_add(b) {
            Some(value) => value,
            None => self.saturate(a.is_sign_negative()),
        }
    }

    /// 減法
    pub fn sub(&mut self, a: Decimal, b: Decimal) -> Decimal {
        match a.checked_sub(b) {
            Some(value) => value,
            None => self.saturate(a.is_sign_negative()),
        }
    }

    fn saturate(&mut self, negative: bool) -> Decimal {
        self.overflowed = true;
        if negative {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_is_exact() {
        let mut ops = SaturatingOps::new();

        assert_eq!(ops.mul(Decimal::from(200), Decimal::from(100)), Decimal::from(20_000));
        assert_eq!(ops.div(Decimal::from(20_000), Decimal::ONE_THOUSAND), Decimal::from(20));
        assert_eq!(ops.add(Decimal::ONE, Decimal::new(5, 2)), Decimal::new(105, 2));
        assert_eq!(ops.sub(Decimal::ONE, Decimal::from(3)), Decimal::from(-2));
        assert!(!ops.overflowed());
    }

    #[test]
    fn test_mul_overflow_saturates_with_sign() {
        let big = Decimal::from(1_000_000_000_000_000_000i64);
        let mut ops = SaturatingOps::new();

        assert_eq!(ops.mul(big, big), Decimal::MAX);
        assert!(ops.overflowed());
        assert_eq!(ops.mul(-big, big), Decimal::MIN);
    }

    #[test]
    fn test_div_overflow_and_zero() {
        let mut ops = SaturatingOps::new();

        assert_eq!(
            ops.div(Decimal::from(1_000_000_000_000_000_000i64), Decimal::new(1, 20)),
            Decimal::MAX
        );
        assert!(ops.overflowed());

        let mut ops = SaturatingOps::new();
        assert_eq!(ops.div(Decimal::from(-5), Decimal::ZERO), Decimal::MIN);
        assert!(ops.overflowed());
    }

    #[test]
    fn test_add_sub_overflow() {
        let mut ops = SaturatingOps::new();

        assert_eq!(ops.add(Decimal::MAX, Decimal::ONE), Decimal::MAX);
        assert_eq!(ops.sub(Decimal::MIN, Decimal::ONE), Decimal::MIN);
        assert!(ops.overflowed());
    }
}
