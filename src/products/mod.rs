pub mod controller;
pub mod dtos;
pub mod models;
pub mod service;
pub mod structs;
