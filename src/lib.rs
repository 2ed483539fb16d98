//! Backend del concesionario: catálogo público de vehículos, captura de
//! leads y back office de administración sobre REST/JSON.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
