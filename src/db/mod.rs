pub mod connection;
pub mod dao;
pub mod drivers;
pub mod entities;
