//! 既知スピリッツの照合
//!
//! 画像解析が返すラベルはノイズが多い（"Bottle"、"Glass"、
//! "Liqueur"等）。在庫候補として意味のあるボトル名だけを
//! 既知リストとの完全一致で選別する

/// 既知のスピリッツ名
pub const KNOWN_SPIRITS: [&str; 6] = ["Vodka", "Gin", "Rum", "Whiskey", "Tequila", "Brandy"];

/// ラベルが既知のスピリッツか
///
/// 照合は完全一致（大文字小文字を区別する）
pub fn is_known_spirit(label: &str) -> bool {
    KNOWN_SPIRITS.contains(&label)
}

/// 既知スピリッツに一致するラベルだけを順序を保って返す
pub fn filter_known_spirits(labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .filter(|label| is_known_spirit(label))
        .cloned()
        .collect()
}
