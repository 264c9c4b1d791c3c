//! ソートキーのドメイン型
//!
//! 元ダッシュボードの選択肢（الاسم / العنوان / row_number）に対応する固定集合。
//! 未知の値は名前にフォールバックする。

/// ソートキー（固定の列挙集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Address,
    RowNumber,
}

impl SortKey {
    /// 文字列から解析する。アラビア語の選択肢値と英語の別名を受け付け、
    /// 未知の値は Name にフォールバックする（エラーにしない）。
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "الاسم" | "name" => SortKey::Name,
            "العنوان" | "address" => SortKey::Address,
            "row_number" | "رقم الصف" => SortKey::RowNumber,
            _ => SortKey::Name,
        }
    }
}
