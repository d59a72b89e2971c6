pub mod anilist;
pub mod anime;
pub mod health;
pub mod titles;
