//! 休憩所（استراحة）レコードのドメイン型
//!
//! データ Webhook が返す行をそのまま表す。JSON キーは配信元のアラビア語
//! 見出しに合わせ、欠落フィールドは空文字にフォールバックする。
//! 同一性は位置（リスト内の添字）であり、row_number は参考値に過ぎない。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 表示用プレースホルダ（値が無いフィールドに使う）
pub const PLACEHOLDER: &str = "—";

/// 休憩所 1 件分のレコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "الاسم", default)]
    pub name: String,
    #[serde(rename = "رقم الهاتف", default)]
    pub phone: String,
    #[serde(rename = "العنوان", default)]
    pub address: String,
    #[serde(rename = "رابط الفيسبوك", default)]
    pub social_link: String,
    #[serde(rename = "ملاحظات إضافية", default)]
    pub notes: String,
    /// 行番号（参考値）。数値でも数値文字列でも受け付ける
    #[serde(
        default,
        deserialize_with = "de_row_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub row_number: Option<i64>,
}

impl Record {
    /// ソート用の行番号。欠落・非数値は 0 に畳む
    pub fn row_number_or_zero(&self) -> i64 {
        self.row_number.unwrap_or(0)
    }

    /// フィルタ対象となる全フィールドの文字列形（数値も文字列化、欠落は空文字）
    pub fn searchable_fields(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.phone.clone(),
            self.address.clone(),
            self.social_link.clone(),
            self.notes.clone(),
            self.row_number.map(|n| n.to_string()).unwrap_or_default(),
        ]
    }

    /// 電話番号から tel: リンクを作る（空白は全て除去）。番号が無ければ None
    pub fn tel_link(&self) -> Option<String> {
        if self.phone.trim().is_empty() {
            return None;
        }
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        Some(format!("tel:{}", digits))
    }
}

/// row_number は配信元によって数値・数値文字列・欠落が混在する
fn de_row_number<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(v.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }))
}
