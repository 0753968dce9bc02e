pub mod chart;
pub mod clean;
pub mod data;
pub mod genre_dist;
pub mod genres;
pub mod label;
pub mod label_dist;
pub mod top_movies;
pub mod year_hist;
