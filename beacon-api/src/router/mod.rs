pub mod health;
pub mod router;
pub mod servers;
