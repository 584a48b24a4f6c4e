//! 日期区间模块
//!
//! 运势分析按闭区间 `[startDate, endDate]` 提交，传输格式为 ISO `YYYY-MM-DD`。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const ISO_DATE: &str = "%Y-%m-%d";

/// 日期区间构造错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// 无法解析的日期字符串
    InvalidDate(String),
    /// 起始日期晚于结束日期
    Reversed,
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeError::InvalidDate(raw) => write!(f, "无效的日期: {}", raw),
            DateRangeError::Reversed => write!(f, "起始日期不能晚于结束日期"),
        }
    }
}

impl std::error::Error for DateRangeError {}

/// 闭区间日期范围，保证 `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "startDate")]
    start: NaiveDate,
    #[serde(rename = "endDate")]
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::Reversed);
        }
        Ok(Self { start, end })
    }

    /// 从两个 `YYYY-MM-DD` 字符串构造（日期选择器的原始值）
    pub fn parse(start: &str, end: &str) -> Result<Self, DateRangeError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 区间包含的天数（含首尾）
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format(ISO_DATE),
            self.end.format(ISO_DATE)
        )
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE)
        .map_err(|_| DateRangeError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_iso_dates_with_wire_names() {
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"startDate": "2024-01-01", "endDate": "2024-01-31"})
        );
        assert_eq!(range.days(), 31);
        assert_eq!(range.to_string(), "2024-01-01..2024-01-31");
    }

    #[test]
    fn rejects_reversed_and_malformed_input() {
        assert_eq!(
            DateRange::parse("2024-02-01", "2024-01-01"),
            Err(DateRangeError::Reversed)
        );
        assert!(matches!(
            DateRange::parse("2024/01/01", "2024-01-02"),
            Err(DateRangeError::InvalidDate(_))
        ));
    }

    #[test]
    fn single_day_range_is_allowed() {
        let range = DateRange::parse("2024-03-08", "2024-03-08").unwrap();
        assert_eq!(range.days(), 1);
    }
}
