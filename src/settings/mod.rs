pub mod ds;
pub mod store;
