use crate::domain::{Movie, MovieId, ReserveSeatsError, Seat, SeatId, Theater, TheaterId};

/// 在庫ストアポート
///
/// 映画・シアターのカタログと、（シアター, 映画）ごとの座席コレクションを保持する。
/// 読み取りは任意の数のスレッドから並行に呼ばれる。
pub trait InventoryStore: Send + Sync {
    /// 全映画を登録順で返す
    fn list_movies(&self) -> Vec<Movie>;

    /// 映画を上映しているシアターを返す
    ///
    /// スケジュールはモデル化していないため、`movie_id` に関わらず全シアターを返す。
    fn list_theaters(&self, movie_id: MovieId) -> Vec<Theater>;

    /// 予約可能な座席をコレクション順で返す
    ///
    /// 組み合わせが存在しない場合は空を返す（エラーではない）。
    /// コミット途中の座席を Available として返すことはない。
    fn available_seats(&self, theater_id: TheaterId, movie_id: MovieId) -> Vec<Seat>;

    fn find_movie(&self, movie_id: MovieId) -> Option<Movie>;

    fn find_theater(&self, theater_id: TheaterId) -> Option<Theater>;

    /// 座席を検証し、すべて予約可能な場合のみ Reserved に遷移させる
    ///
    /// 排他ロックの内側で実行され、読み取り側が途中状態を観測することはない。
    /// 失敗時はどの座席も変更されない。
    fn commit_reservation(
        &self,
        theater_id: TheaterId,
        movie_id: MovieId,
        seat_ids: &[SeatId],
    ) -> Result<(), ReserveSeatsError>;
}
