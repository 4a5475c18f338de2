//! Interactive text menu.
//!
//! Thin collaborator over the reservation core: it only reads input, calls
//! the in-process API, and renders results. Generic over `BufRead`/`Write`
//! so whole sessions can be driven from tests.

use crate::application::reservation::{
    ReservationCoordinator, available_seats, bookings_for, list_movies, list_theaters,
};
use crate::domain::{CustomerId, MovieId, SeatId, TheaterId, commands::ReserveSeats};
use std::io::{self, BufRead, Write};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";
const SEATS_PER_LINE: usize = 10;

/// Text menu session for a single customer.
pub struct Menu<'a, R, W> {
    coordinator: &'a ReservationCoordinator,
    input: R,
    output: W,
    customer_id: CustomerId,
    selected_movie: Option<MovieId>,
    selected_theater: Option<TheaterId>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(coordinator: &'a ReservationCoordinator, input: R, output: W) -> Self {
        Self {
            coordinator,
            input,
            output,
            customer_id: CustomerId::new(""),
            selected_movie: None,
            selected_theater: None,
        }
    }

    /// Run the session until the customer chooses exit or input ends.
    pub fn run(mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Cinema Ticket Booking System!")?;
        write!(self.output, "Please enter your name: ")?;
        self.output.flush()?;
        let name = self.read_line()?.unwrap_or_default();
        self.customer_id = CustomerId::new(name);

        loop {
            self.display_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            let choice = line.parse::<i32>().unwrap_or(-1);

            write!(self.output, "{}", CLEAR_SCREEN)?;

            match choice {
                1 => self.list_movies()?,
                2 => self.select_movie()?,
                3 => self.list_theaters()?,
                4 => self.view_available_seats()?,
                5 => self.reserve_seats()?,
                6 => self.view_my_bookings()?,
                0 => {
                    writeln!(self.output, "Thank you for using our system!")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid option!")?,
            }

            if !self.pause()? {
                break;
            }
        }

        self.output.flush()
    }

    /// Returns `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn display_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== CINEMA TICKET BOOKING SYSTEM ===")?;
        writeln!(self.output, "1. List Movies")?;
        writeln!(self.output, "2. Select Movie")?;
        writeln!(self.output, "3. List Theaters")?;
        writeln!(self.output, "4. View Available Seats")?;
        writeln!(self.output, "5. Reserve Seats")?;
        writeln!(self.output, "6. View My Bookings")?;
        writeln!(self.output, "0. Exit")?;
        write!(self.output, "\nChoose an option: ")?;
        self.output.flush()
    }

    fn pause(&mut self) -> io::Result<bool> {
        write!(self.output, "\nPress ENTER to continue...")?;
        self.output.flush()?;
        Ok(self.read_line()?.is_some())
    }

    fn list_movies(&mut self) -> io::Result<()> {
        writeln!(self.output, "=== MOVIES CURRENTLY SHOWING ===\n")?;
        for movie in list_movies(self.coordinator.dependencies()) {
            writeln!(self.output, "ID: {}", movie.id)?;
            writeln!(self.output, "Title: {}", movie.title)?;
            writeln!(self.output, "Duration: {} min", movie.duration_minutes)?;
            writeln!(self.output, "Genre: {}", movie.genre)?;
            writeln!(self.output, "---")?;
        }
        Ok(())
    }

    fn select_movie(&mut self) -> io::Result<()> {
        write!(self.output, "Enter movie ID: ")?;
        self.output.flush()?;

        let movie = self
            .read_line()?
            .and_then(|line| line.parse::<u32>().ok())
            .and_then(|id| {
                self.coordinator
                    .dependencies()
                    .inventory
                    .find_movie(MovieId::new(id))
            });

        match movie {
            Some(movie) => {
                writeln!(self.output, "Movie selected: {}", movie.title)?;
                self.selected_movie = Some(movie.id);
            }
            None => {
                writeln!(self.output, "Movie not found!")?;
                self.selected_movie = None;
            }
        }
        Ok(())
    }

    fn list_theaters(&mut self) -> io::Result<()> {
        let Some(movie_id) = self.selected_movie else {
            return writeln!(self.output, "Please select a movie first!");
        };

        writeln!(self.output, "=== AVAILABLE THEATERS ===\n")?;
        for theater in list_theaters(self.coordinator.dependencies(), movie_id) {
            writeln!(self.output, "ID: {}", theater.id)?;
            writeln!(self.output, "Name: {}", theater.name)?;
            writeln!(self.output, "Capacity: {} seats", theater.capacity)?;
            writeln!(self.output, "---")?;
        }
        Ok(())
    }

    fn view_available_seats(&mut self) -> io::Result<()> {
        let Some(movie_id) = self.selected_movie else {
            return writeln!(self.output, "Please select a movie first!");
        };

        write!(self.output, "Enter theater ID: ")?;
        self.output.flush()?;

        let coordinator = self.coordinator;
        let inventory = &coordinator.dependencies().inventory;
        let Some(theater_id) = self
            .read_line()?
            .and_then(|line| line.parse::<u32>().ok())
            .and_then(|id| inventory.find_theater(TheaterId::new(id)))
            .map(|theater| theater.id)
        else {
            self.selected_theater = None;
            return writeln!(self.output, "Theater not found!");
        };
        self.selected_theater = Some(theater_id);

        let seats = available_seats(self.coordinator.dependencies(), theater_id, movie_id);

        writeln!(self.output, "\n=== AVAILABLE SEATS ===\n")?;
        writeln!(self.output, "Total: {} seats\n", seats.len())?;
        for (i, seat) in seats.iter().enumerate() {
            write!(self.output, "{} ", seat.id)?;
            if (i + 1) % SEATS_PER_LINE == 0 {
                writeln!(self.output)?;
            }
        }
        writeln!(self.output)
    }

    fn reserve_seats(&mut self) -> io::Result<()> {
        let (Some(movie_id), Some(theater_id)) = (self.selected_movie, self.selected_theater)
        else {
            return writeln!(self.output, "Please select a movie and theater first!");
        };

        write!(
            self.output,
            "Enter seat IDs (comma-separated, e.g., A1,A2,A3): "
        )?;
        self.output.flush()?;

        let line = self.read_line()?.unwrap_or_default();
        let seat_ids = parse_seat_ids(&line);

        let cmd = ReserveSeats {
            theater_id,
            movie_id,
            seat_ids,
            customer_id: self.customer_id.clone(),
        };

        match self.coordinator.reserve(cmd) {
            Ok(booking) => {
                writeln!(self.output, "\n✓ Booking successful!")?;
                writeln!(
                    self.output,
                    "Reserved seats: {}",
                    join_seats(&booking.seat_ids)
                )
            }
            Err(err) => writeln!(self.output, "\n✗ Booking failed: {}", err),
        }
    }

    fn view_my_bookings(&mut self) -> io::Result<()> {
        let coordinator = self.coordinator;
        let deps = coordinator.dependencies();
        let bookings = bookings_for(deps, &self.customer_id);

        writeln!(self.output, "=== MY BOOKINGS ===\n")?;
        if bookings.is_empty() {
            return writeln!(self.output, "You have no bookings.");
        }

        for booking in bookings {
            writeln!(self.output, "Booking #{}", booking.id)?;
            if let Some(movie) = deps.inventory.find_movie(booking.movie_id) {
                writeln!(self.output, "Movie: {}", movie.title)?;
            }
            if let Some(theater) = deps.inventory.find_theater(booking.theater_id) {
                writeln!(self.output, "Theater: {}", theater.name)?;
            }
            writeln!(self.output, "Seats: {}", join_seats(&booking.seat_ids))?;
            writeln!(self.output, "Time: {}", booking.created_at.to_rfc3339())?;
            writeln!(self.output, "---")?;
        }
        Ok(())
    }
}

/// Split a comma-separated seat list, trimming whitespace and skipping empties.
pub fn parse_seat_ids(input: &str) -> Vec<SeatId> {
    input
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(SeatId::from)
        .collect()
}

fn join_seats(seat_ids: &[SeatId]) -> String {
    seat_ids
        .iter()
        .map(SeatId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
