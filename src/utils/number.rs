//! 评分相关的数值解析与取整（四舍六入五成双）

use crate::errors::{RatingsError, Result};
use crate::models::common::messages::{NOT_A_NUMBER, RATING_OUT_OF_RANGE};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 100;

/// 解析评分：接受任意有限数值，取整后须落在 1..=100
pub fn parse_rating(raw: &str) -> Result<i32> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| RatingsError::invalid_number(NOT_A_NUMBER))?;
    if !value.is_finite() {
        return Err(RatingsError::invalid_number(NOT_A_NUMBER));
    }

    let rounded = value.round_ties_even();
    if rounded < f64::from(MIN_RATING) || rounded > f64::from(MAX_RATING) {
        return Err(RatingsError::validation(RATING_OUT_OF_RANGE));
    }
    Ok(rounded as i32)
}

/// 解析整数字段（学年、学期）
pub fn parse_integer(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// 平均分取整
pub fn round_average(average: f64) -> i64 {
    average.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating_rounds_half_to_even() {
        assert_eq!(parse_rating("4").ok(), Some(4));
        assert_eq!(parse_rating("4.4").ok(), Some(4));
        assert_eq!(parse_rating("2.5").ok(), Some(2));
        assert_eq!(parse_rating("3.5").ok(), Some(4));
        assert_eq!(parse_rating(" 7 ").ok(), Some(7));
        assert_eq!(parse_rating("1e2").ok(), Some(100));
    }

    #[test]
    fn test_parse_rating_rejects_non_numbers() {
        for raw in ["abc", "", "NaN", "inf", "-inf", "4,5"] {
            let err = parse_rating(raw).expect_err(raw);
            assert_eq!(err.message(), NOT_A_NUMBER);
            assert_eq!(err.status(), actix_web::http::StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_parse_rating_range() {
        assert_eq!(parse_rating("0.6").ok(), Some(1));
        assert_eq!(parse_rating("100.4").ok(), Some(100));
        for raw in ["0", "0.5", "101", "-3", "100.6"] {
            let err = parse_rating(raw).expect_err(raw);
            assert_eq!(err.message(), RATING_OUT_OF_RANGE);
        }
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("2024"), Some(2024));
        assert_eq!(parse_integer(" 1 "), Some(1));
        assert_eq!(parse_integer("2024.0"), None);
        assert_eq!(parse_integer("first"), None);
    }

    #[test]
    fn test_round_average() {
        assert_eq!(round_average(2.0), 2);
        assert_eq!(round_average(2.5), 2);
        assert_eq!(round_average(3.5), 4);
        assert_eq!(round_average(3.0), 3);
        assert_eq!(round_average(4.6666), 5);
    }
}
