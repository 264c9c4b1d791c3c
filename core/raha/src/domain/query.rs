//! クエリパイプライン（フィルタ → 安定ソート）
//!
//! レコード一覧・検索語・ソートキーの純粋関数。副作用なし、
//! 入力が変わるたびに再計算してよい。

use super::collate::Collator;
use super::record::Record;
use super::sort_key::SortKey;

/// 検索語とソートキーから表示用の並びを導出する。
///
/// - フィルタ: 検索語が空白のみなら全件。そうでなければ、いずれかの
///   フィールドの文字列形（fold 済み）に検索語（fold 済み）が部分一致する行のみ。
///   trim は空判定のみに使い、照合自体は検索語をそのまま使う（前後の空白も
///   一致対象。ハイライトと同じ照合になる）。
/// - ソート: 安定。row_number は数値昇順（欠落は 0）、それ以外は照合器による
///   文字列比較。選択フィールドが空の行は名前で代用する。
pub fn derive_view(
    records: &[Record],
    query: &str,
    sort_key: SortKey,
    collator: &dyn Collator,
) -> Vec<Record> {
    let mut view: Vec<Record> = if query.trim().is_empty() {
        records.to_vec()
    } else {
        let needle = collator.fold(query);
        records
            .iter()
            .filter(|r| {
                r.searchable_fields()
                    .iter()
                    .any(|f| collator.fold(f).contains(&needle))
            })
            .cloned()
            .collect()
    };

    match sort_key {
        SortKey::RowNumber => view.sort_by_key(Record::row_number_or_zero),
        key => view.sort_by(|a, b| collator.compare(text_value(a, key), text_value(b, key))),
    }

    view
}

/// テキストキーの比較対象値。選択フィールドが空なら名前にフォールバック
fn text_value(record: &Record, key: SortKey) -> &str {
    let v = match key {
        SortKey::Name => &record.name,
        SortKey::Address => &record.address,
        SortKey::RowNumber => &record.name,
    };
    if v.is_empty() {
        &record.name
    } else {
        v
    }
}
