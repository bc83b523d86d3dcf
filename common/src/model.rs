pub mod router;
pub mod speed;
pub mod wifi;
