//! 易经占卜客户端共享协议
//!
//! - `protocol`: 端点定义（路径、方法、响应类型）
//! - `date`: 日期区间
//! - `serde_helper`: 宽松反序列化

pub mod date;
pub mod protocol;
pub mod serde_helper;

pub use date::{DateRange, DateRangeError};
pub use protocol::*;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_helper::{lenient_id, lenient_score, lenient_text};

// =========================================================
// 占位文本 (Placeholders)
// =========================================================

pub const PLACEHOLDER_HEXAGRAM: &str = "未知卦象";
pub const PLACEHOLDER_INTERPRETATION: &str = "暂无解释";
pub const PLACEHOLDER_RESULT: &str = "暂无结果";
pub const PLACEHOLDER_AI_ANALYSIS: &str = "暂无AI分析";
pub const PLACEHOLDER_CONTENT: &str = "暂无分析内容";
pub const PLACEHOLDER_UNSET: &str = "未设置";

/// 缺失或为空的文本替换为占位文本
pub fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

fn result_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(or_placeholder(lenient_text(d)?, PLACEHOLDER_RESULT))
}

fn default_result() -> String {
    PLACEHOLDER_RESULT.to_string()
}

fn content_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(or_placeholder(lenient_text(d)?, PLACEHOLDER_CONTENT))
}

fn default_content() -> String {
    PLACEHOLDER_CONTENT.to_string()
}

fn unset_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(or_placeholder(lenient_text(d)?, PLACEHOLDER_UNSET))
}

fn default_unset() -> String {
    PLACEHOLDER_UNSET.to_string()
}

fn plain_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(lenient_text(d)?.unwrap_or_default())
}

// =========================================================
// 占卜 (Divination)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivinationType {
    #[default]
    General,
    Career,
    Love,
    Wealth,
    Health,
}

impl DivinationType {
    pub const ALL: [DivinationType; 5] = [
        DivinationType::General,
        DivinationType::Career,
        DivinationType::Love,
        DivinationType::Wealth,
        DivinationType::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DivinationType::General => "general",
            DivinationType::Career => "career",
            DivinationType::Love => "love",
            DivinationType::Wealth => "wealth",
            DivinationType::Health => "health",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DivinationType::General => "综合运势",
            DivinationType::Career => "事业运势",
            DivinationType::Love => "感情运势",
            DivinationType::Wealth => "财运预测",
            DivinationType::Health => "健康预测",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw.trim())
    }
}

/// 占卜接口的原始响应，所有文本字段都可能缺失
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct DivinationResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub hexagram: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub interpretation: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub result: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub ai_analysis: Option<String>,
}

/// 归一化后的占卜结果，所有字段保证非空
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivinationResult {
    pub hexagram: String,
    pub interpretation: String,
    pub result: String,
    pub ai_analysis: String,
}

impl From<DivinationResponse> for DivinationResult {
    fn from(raw: DivinationResponse) -> Self {
        Self {
            hexagram: or_placeholder(raw.hexagram, PLACEHOLDER_HEXAGRAM),
            interpretation: or_placeholder(raw.interpretation, PLACEHOLDER_INTERPRETATION),
            result: or_placeholder(raw.result, PLACEHOLDER_RESULT),
            ai_analysis: or_placeholder(raw.ai_analysis, PLACEHOLDER_AI_ANALYSIS),
        }
    }
}

/// 历史/收藏列表中的一条占卜记录
///
/// 历史与收藏是两份独立拉取的列表，同一条记录可能同时出现在两边，
/// 客户端不做任何关联或去重。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivinationRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    /// 服务端的类型字符串，不保证属于 `DivinationType`
    #[serde(rename = "type", default, deserialize_with = "plain_text")]
    pub kind: String,
    #[serde(default, deserialize_with = "plain_text")]
    pub question: String,
    #[serde(default = "default_result", deserialize_with = "result_text")]
    pub result: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub ai_analysis: Option<String>,
    #[serde(default, deserialize_with = "plain_text")]
    pub created_at: String,
}

impl DivinationRecord {
    /// 类型标签：已知类型显示中文名，否则原样显示
    pub fn kind_label(&self) -> &str {
        DivinationType::parse(&self.kind)
            .map(|t| t.label())
            .unwrap_or(self.kind.as_str())
    }
}

// =========================================================
// 运势 (Fortune)
// =========================================================

/// 运势记录的周期类型
///
/// 同时接受英文标识（`day`）与服务端使用的中文标识（`日`）。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PeriodType {
    Day,
    Week,
    Month,
    Year,
    Other(String),
}

impl PeriodType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "day" | "日" => PeriodType::Day,
            "week" | "周" => PeriodType::Week,
            "month" | "月" => PeriodType::Month,
            "year" | "年" => PeriodType::Year,
            other => PeriodType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PeriodType::Day => "day",
            PeriodType::Week => "week",
            PeriodType::Month => "month",
            PeriodType::Year => "year",
            PeriodType::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PeriodType::Day => "日",
            PeriodType::Week => "周",
            PeriodType::Month => "月",
            PeriodType::Year => "年",
            PeriodType::Other(raw) => raw,
        }
    }
}

impl Default for PeriodType {
    fn default() -> Self {
        PeriodType::Other(String::new())
    }
}

impl Serialize for PeriodType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PeriodType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(lenient_text(deserializer)?
            .map(|raw| PeriodType::parse(&raw))
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(rename = "periodType", default)]
    pub period_type: PeriodType,
    #[serde(rename = "startDate", default, deserialize_with = "plain_text")]
    pub start_date: String,
    #[serde(rename = "endDate", default, deserialize_with = "plain_text")]
    pub end_date: String,
    #[serde(default = "default_content", deserialize_with = "content_text")]
    pub content: String,
    #[serde(rename = "createdAt", default, deserialize_with = "plain_text")]
    pub created_at: String,
}

/// 五项运势指数，取值 0..=100，默认全 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FortuneStatistics {
    #[serde(default, deserialize_with = "lenient_score")]
    pub overall: u8,
    #[serde(default, deserialize_with = "lenient_score")]
    pub career: u8,
    #[serde(default, deserialize_with = "lenient_score")]
    pub love: u8,
    #[serde(default, deserialize_with = "lenient_score")]
    pub wealth: u8,
    #[serde(default, deserialize_with = "lenient_score")]
    pub health: u8,
}

/// 趋势图上的一个点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(default, deserialize_with = "plain_text")]
    pub date: String,
    #[serde(default)]
    pub value: f64,
    #[serde(rename = "type", default, deserialize_with = "plain_text")]
    pub series: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnalyzeFortuneResponse {
    #[serde(default)]
    pub trends: Option<Vec<TrendPoint>>,
    #[serde(default)]
    pub statistics: Option<FortuneStatistics>,
}

/// 归一化后的运势分析
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FortuneAnalysis {
    pub trends: Vec<TrendPoint>,
    pub statistics: FortuneStatistics,
}

impl From<AnalyzeFortuneResponse> for FortuneAnalysis {
    fn from(raw: AnalyzeFortuneResponse) -> Self {
        Self {
            trends: raw.trends.unwrap_or_default(),
            statistics: raw.statistics.unwrap_or_default(),
        }
    }
}

// =========================================================
// 用户 (User)
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default = "default_unset", deserialize_with = "unset_text")]
    pub username: String,
    #[serde(default = "default_unset", deserialize_with = "unset_text")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_divination_response_is_fully_substituted() {
        let raw: DivinationResponse = serde_json::from_value(json!({})).unwrap();
        let result = DivinationResult::from(raw);
        assert_eq!(result.hexagram, "未知卦象");
        assert_eq!(result.interpretation, "暂无解释");
        assert_eq!(result.result, "暂无结果");
        assert_eq!(result.ai_analysis, "暂无AI分析");
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let raw: DivinationResponse = serde_json::from_value(json!({
            "hexagram": "乾为天",
            "interpretation": "",
            "result": null,
            "ai_analysis": "宜进取"
        }))
        .unwrap();
        let result = DivinationResult::from(raw);
        assert_eq!(result.hexagram, "乾为天");
        assert_eq!(result.interpretation, "暂无解释");
        assert_eq!(result.result, "暂无结果");
        assert_eq!(result.ai_analysis, "宜进取");
    }

    #[test]
    fn fortune_record_accepts_both_period_spellings() {
        let records: Vec<FortuneRecord> = serde_json::from_value(json!([
            {"id": 1, "periodType": "day", "startDate": "2024-01-01", "endDate": "2024-01-01",
             "content": "平稳", "createdAt": "2024-01-01T08:00:00Z"},
            {"id": "2", "periodType": "周", "content": ""},
            {"id": 3, "periodType": "decade"}
        ]))
        .unwrap();

        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].period_type, PeriodType::Day);
        assert_eq!(records[1].period_type, PeriodType::Week);
        assert_eq!(records[1].content, PLACEHOLDER_CONTENT);
        assert_eq!(records[2].period_type, PeriodType::Other("decade".into()));
        assert_eq!(records[2].content, PLACEHOLDER_CONTENT);
        assert_eq!(records[2].start_date, "");
    }

    #[test]
    fn statistics_default_to_zero_and_coerce_types() {
        let analysis = FortuneAnalysis::from(
            serde_json::from_value::<AnalyzeFortuneResponse>(json!({
                "trends": null,
                "statistics": {"overall": "88", "career": 70.4}
            }))
            .unwrap(),
        );
        assert!(analysis.trends.is_empty());
        assert_eq!(analysis.statistics.overall, 88);
        assert_eq!(analysis.statistics.career, 70);
        assert_eq!(analysis.statistics.love, 0);

        let empty = FortuneAnalysis::from(AnalyzeFortuneResponse::default());
        assert_eq!(empty.statistics, FortuneStatistics::default());
    }

    #[test]
    fn divination_record_labels_and_placeholders() {
        let record: DivinationRecord = serde_json::from_value(json!({
            "id": 7, "type": "career", "question": "近期事业发展如何？", "created_at": "2024-01-20"
        }))
        .unwrap();
        assert_eq!(record.kind_label(), "事业运势");
        assert_eq!(record.result, PLACEHOLDER_RESULT);
        assert_eq!(record.ai_analysis, None);

        let foreign: DivinationRecord =
            serde_json::from_value(json!({"id": 8, "type": "tarot", "result": "吉"})).unwrap();
        assert_eq!(foreign.kind_label(), "tarot");
        assert_eq!(foreign.result, "吉");
    }

    #[test]
    fn request_bodies_use_wire_field_names() {
        let body = serde_json::to_value(RegisterRequest {
            username: "u".into(),
            nickname: "n".into(),
            email: "u@example.com".into(),
            password: "p".into(),
            confirm_password: "p".into(),
        })
        .unwrap();
        assert_eq!(body["confirmPassword"], "p");

        let body = serde_json::to_value(DivinationRequest {
            kind: DivinationType::Career,
            question: "q".into(),
        })
        .unwrap();
        assert_eq!(body, json!({"type": "career", "question": "q"}));

        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        let body = serde_json::to_value(AnalyzeFortuneRequest(range)).unwrap();
        assert_eq!(body, json!({"startDate": "2024-01-01", "endDate": "2024-01-31"}));
    }

    #[test]
    fn ack_accepts_anything() {
        assert!(serde_json::from_value::<Ack>(json!(null)).is_ok());
        assert!(serde_json::from_value::<Ack>(json!({"message": "ok"})).is_ok());
        assert!(serde_json::from_value::<Ack>(json!([1, 2])).is_ok());
    }
}
