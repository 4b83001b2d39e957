//! スコア表示（10段階の星）

/// スコアの上限
pub const MAX_SCORE: u8 = 10;

/// 星の塗りつぶし状態（先頭からscore個がtrue）
pub fn rating_indicators(score: u8) -> [bool; MAX_SCORE as usize] {
    let mut stars = [false; MAX_SCORE as usize];
    for (i, star) in stars.iter_mut().enumerate() {
        *star = i < score as usize;
    }
    stars
}

/// 端末表示用の星（★☆）
pub fn star_bar(score: u8) -> String {
    rating_indicators(score)
        .iter()
        .map(|&filled| if filled { '★' } else { '☆' })
        .collect()
}
