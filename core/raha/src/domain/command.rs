//! CLI から渡されるコマンドのドメイン表現

/// raha のコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RahaCommand {
    Help,
    /// 初回リフレッシュ後、一定間隔で再取得し続ける（既定コマンド）
    Watch,
    /// 一度だけ取得して表示する
    List,
    /// チャット。メッセージ省略時は対話モード
    Chat { message: Option<String> },
    /// 表示中の並びの index 番目（1 始まり）の電話番号をクリップボードへ
    Copy { index: usize },
    /// 表示中の並びの index 番目（1 始まり）の tel: リンクを表示
    Tel { index: usize },
}
