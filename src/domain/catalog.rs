use serde::{Deserialize, Serialize};

use super::{MovieId, TheaterId};

/// シアターのデフォルト座席数
pub const DEFAULT_THEATER_CAPACITY: u32 = 20;

/// 映画（作成後は不変）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// 上映時間（分）
    pub duration_minutes: u32,
    pub genre: String,
}

impl Movie {
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        duration_minutes: u32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            duration_minutes,
            genre: genre.into(),
        }
    }
}

/// シアター（作成後は不変）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theater {
    pub id: TheaterId,
    pub name: String,
    pub capacity: u32,
}

impl Theater {
    pub fn new(id: TheaterId, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
        }
    }
}

/// 起動時に投入するサンプル映画
pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie::new(MovieId::new(1), "The Matrix Resurrections", 148, "Sci-Fi"),
        Movie::new(MovieId::new(2), "Dune: Part Two", 166, "Sci-Fi"),
        Movie::new(MovieId::new(3), "Oppenheimer", 180, "Drama"),
        Movie::new(MovieId::new(4), "Barbie", 114, "Comedy"),
    ]
}

/// 起動時に投入するサンプルシアター
///
/// すべてのシアターが同じ座席数を持つ。
pub fn sample_theaters(capacity: u32) -> Vec<Theater> {
    vec![
        Theater::new(TheaterId::new(1), "IMAX Hall", capacity),
        Theater::new(TheaterId::new(2), "VIP Hall", capacity),
        Theater::new(TheaterId::new(3), "Standard Hall A", capacity),
    ]
}
