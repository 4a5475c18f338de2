use crate::domain::{
    Movie, MovieId, ReserveSeatsError, Seat, SeatCollection, SeatId, Theater, TheaterId,
    sample_movies, sample_theaters,
};
use crate::ports::inventory_store::InventoryStore as InventoryStoreTrait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type ShowKey = (TheaterId, MovieId);

/// InventoryStoreのインメモリ実装
///
/// 映画とシアターは初期化後に変更されないためロック不要。
/// 座席コレクションはRwLockで保護し、読み取りは並行、コミットは排他で行う。
pub struct InventoryStore {
    movies: Vec<Movie>,
    theaters: Vec<Theater>,
    seats: RwLock<HashMap<ShowKey, SeatCollection>>,
}

impl InventoryStore {
    /// カタログから在庫を作成する
    ///
    /// すべてのシアターがすべての映画を上映するものとし、
    /// 組み合わせごとにシアターの座席数ぶんの座席コレクションを作成する。
    pub fn new(movies: Vec<Movie>, theaters: Vec<Theater>) -> Self {
        let mut seats = HashMap::with_capacity(movies.len() * theaters.len());
        for theater in &theaters {
            for movie in &movies {
                seats.insert(
                    (theater.id, movie.id),
                    SeatCollection::with_capacity(theater.capacity),
                );
            }
        }

        tracing::debug!(
            movies = movies.len(),
            theaters = theaters.len(),
            shows = seats.len(),
            "Inventory initialized"
        );

        Self {
            movies,
            theaters,
            seats: RwLock::new(seats),
        }
    }

    /// サンプルデータ（映画4本、シアター3つ）で在庫を作成する
    pub fn with_sample_data(capacity: u32) -> Self {
        Self::new(sample_movies(), sample_theaters(capacity))
    }

    // 座席を変更中にパニックする経路はないため、ポイズン状態でも中身は一貫している
    fn read_seats(&self) -> RwLockReadGuard<'_, HashMap<ShowKey, SeatCollection>> {
        self.seats.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_seats(&self) -> RwLockWriteGuard<'_, HashMap<ShowKey, SeatCollection>> {
        self.seats.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl InventoryStoreTrait for InventoryStore {
    fn list_movies(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    fn list_theaters(&self, _movie_id: MovieId) -> Vec<Theater> {
        self.theaters.clone()
    }

    fn available_seats(&self, theater_id: TheaterId, movie_id: MovieId) -> Vec<Seat> {
        self.read_seats()
            .get(&(theater_id, movie_id))
            .map(SeatCollection::available)
            .unwrap_or_default()
    }

    fn find_movie(&self, movie_id: MovieId) -> Option<Movie> {
        self.movies.iter().find(|movie| movie.id == movie_id).cloned()
    }

    fn find_theater(&self, theater_id: TheaterId) -> Option<Theater> {
        self.theaters
            .iter()
            .find(|theater| theater.id == theater_id)
            .cloned()
    }

    fn commit_reservation(
        &self,
        theater_id: TheaterId,
        movie_id: MovieId,
        seat_ids: &[SeatId],
    ) -> Result<(), ReserveSeatsError> {
        if !self.theaters.iter().any(|theater| theater.id == theater_id) {
            return Err(ReserveSeatsError::TheaterNotFound(theater_id));
        }

        let mut seats = self.write_seats();
        let collection = seats
            .get_mut(&(theater_id, movie_id))
            .ok_or(ReserveSeatsError::ShowNotFound {
                theater_id,
                movie_id,
            })?;

        collection.reserve(seat_ids)?;

        tracing::debug!(
            theater_id = theater_id.value(),
            movie_id = movie_id.value(),
            seats = seat_ids.len(),
            "Seats committed as reserved"
        );
        Ok(())
    }
}
