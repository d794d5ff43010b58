pub mod channels;
pub mod errors;
pub mod teams;
