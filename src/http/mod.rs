pub mod averages;
pub mod health;
pub mod players;
pub mod response;
pub mod routes;
