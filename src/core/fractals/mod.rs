pub mod burning_ship;
