//! テキスト描画（薄い表示層）
//!
//! 導出済みの並びとトランスクリプトを stdout 向けの文字列に起こす。
//! ロジックは持たない。ハイライトは ANSI の反転表示で表す。

use crate::domain::store::RecordStore;
use crate::domain::transcript::{ChatMessage, Role};
use crate::domain::{highlight, Record, Segment, PLACEHOLDER};
use chrono::Local;

const HIGHLIGHT_ON: &str = "\x1b[7m";
const HIGHLIGHT_OFF: &str = "\x1b[0m";

/// 導出済みの並びをカード風のテキストに描画する
pub fn render_view(view: &[Record], query: &str, color: bool) -> String {
    if view.is_empty() {
        let hint = if query.trim().is_empty() {
            "لا توجد بيانات متاحة"
        } else {
            "جرّب كلمة بحث مختلفة أو امسح حقل البحث"
        };
        return format!("لا توجد نتائج\n{}\n", hint);
    }

    let mut out = String::new();
    for record in view {
        let name = if record.name.is_empty() {
            "بدون اسم"
        } else {
            record.name.as_str()
        };
        out.push_str(&paint(name, query, color));
        out.push('\n');
        out.push_str(&format!(
            "  الهاتف: {}\n",
            paint(or_dash(&record.phone), query, color)
        ));
        out.push_str(&format!(
            "  العنوان: {}\n",
            paint(or_dash(&record.address), query, color)
        ));
        if !record.notes.is_empty() {
            out.push_str(&format!("  ملاحظات: {}\n", paint(&record.notes, query, color)));
        }
        out.push_str(&format!(
            "  رقم الصف: {}\n",
            record
                .row_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        ));
        if let Some(tel) = record.tel_link() {
            out.push_str(&format!("  اتصال: {}\n", tel));
        }
        if !record.social_link.is_empty() {
            out.push_str(&format!("  فيسبوك: {}\n", record.social_link));
        }
        out.push('\n');
    }
    out
}

/// フッター相当の統計行
pub fn stats_line(store: &RecordStore) -> String {
    let stats = store.stats();
    let mut line = format!(
        "العناصر المحملة: {} | زمن التحميل: {}ms",
        stats.total, stats.load_ms
    );
    if let Some(ts) = store.last_updated() {
        line.push_str(&format!(
            " | آخر تحديث: {}",
            ts.with_timezone(&Local).format("%H:%M:%S")
        ));
    }
    line
}

/// トランスクリプトの 1 メッセージを 1 行に描画する
pub fn render_chat_message(msg: &ChatMessage) -> String {
    let who = match msg.role {
        Role::User => "أنت",
        Role::Bot => "البوت",
    };
    format!(
        "[{}] {}: {}",
        msg.timestamp.with_timezone(&Local).format("%H:%M:%S"),
        who,
        msg.content
    )
}

fn paint(text: &str, query: &str, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    highlight(text, query)
        .into_iter()
        .map(|seg| match seg {
            Segment::Plain(t) => t,
            Segment::Match(t) => format!("{}{}{}", HIGHLIGHT_ON, t, HIGHLIGHT_OFF),
        })
        .collect()
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        PLACEHOLDER
    } else {
        s
    }
}
