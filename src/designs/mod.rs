pub mod holo;
