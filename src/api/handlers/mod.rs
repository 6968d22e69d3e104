pub mod health;
pub mod private_info;
pub mod public_info;
