pub mod grafikons;
pub mod health;
pub mod tabelas;
