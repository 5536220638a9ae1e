pub mod compare;
pub mod config;
pub mod csv;
pub mod data_model;
pub mod error;
pub mod events;
pub mod filter;
pub mod normalize;
pub mod pagination;
pub mod render;
pub mod selection;
pub mod sort;
pub mod table_state;
