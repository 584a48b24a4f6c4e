//! 宽松反序列化工具
//!
//! 后端返回的字段类型并不稳定：文本字段可能缺失、为空或为 null，
//! 甚至可能是数字；分数可能是整数、浮点数或数字字符串。
//! 这里统一做类型强制转换，不做任何业务校验。

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 将任意 JSON 值宽松地转换为文本
///
/// - 非空字符串原样保留
/// - 数字与布尔值转换为字符串
/// - null、空字符串、数组、对象视为缺失
pub fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// 将任意 JSON 值转换为 0..=100 的分数，无法识别时为 0
pub fn score_from_value(value: &Value) -> u8 {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    raw.filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, 100.0) as u8)
        .unwrap_or(0)
}

/// `deserialize_with` 用：宽松文本
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(text_from_value))
}

/// `deserialize_with` 用：宽松分数
pub fn lenient_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(score_from_value).unwrap_or(0))
}

/// `deserialize_with` 用：数字或字符串 ID，统一为字符串
pub fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_coercion() {
        assert_eq!(text_from_value(json!("乾")), Some("乾".to_string()));
        assert_eq!(text_from_value(json!(42)), Some("42".to_string()));
        assert_eq!(text_from_value(json!(true)), Some("true".to_string()));
        assert_eq!(text_from_value(json!("")), None);
        assert_eq!(text_from_value(json!(null)), None);
        assert_eq!(text_from_value(json!({"a": 1})), None);
    }

    #[test]
    fn score_coercion() {
        assert_eq!(score_from_value(&json!(80)), 80);
        assert_eq!(score_from_value(&json!(79.6)), 80);
        assert_eq!(score_from_value(&json!("65")), 65);
        assert_eq!(score_from_value(&json!(150)), 100);
        assert_eq!(score_from_value(&json!(-3)), 0);
        assert_eq!(score_from_value(&json!("high")), 0);
        assert_eq!(score_from_value(&json!(null)), 0);
    }
}
