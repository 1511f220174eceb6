pub mod secure_zero;
